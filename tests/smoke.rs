use std::fs;

use assert_cmd::Command;

fn command(workdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("kg-reweight").expect("binary exists");
    cmd.env("DATA_DIR", workdir.join("data"))
        .env("OUTPUTS_DIR", workdir.join("outputs"));
    cmd
}

#[test]
fn cli_help_runs() {
    let dir = tempfile::tempdir().unwrap();
    command(dir.path()).arg("--help").assert().success();
}

#[test]
fn reweight_rejects_unknown_score_type() {
    let dir = tempfile::tempdir().unwrap();
    command(dir.path())
        .args([
            "reweight",
            "--sentences",
            "s.csv",
            "--graph",
            "g.csv",
            "--perplexities",
            "p.json",
            "--output",
            "o.csv",
            "--score-type",
            "reweight_heavy",
        ])
        .assert()
        .failure();
}

#[test]
fn sentences_command_writes_outputs_and_missed_log() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("graph.csv");
    fs::write(
        &graph,
        "/c/en/dog\t/c/en/animal\t2.0\t/d/wordnet\t/r/IsA\n\
         /c/de/hund\t/c/en/dog\t1.0\t/d/wiktionary\t/r/Synonym\n\
         /c/en/cat\t/c/en/pet\t1.0\t/d/verbosity\t/r/MadeUpRelation\n",
    )
    .unwrap();
    let out_txt = dir.path().join("sentences/graph.txt");
    let out_csv = dir.path().join("sentences/graph_sentences.csv");

    command(dir.path())
        .arg("sentences")
        .arg("--graph")
        .arg(&graph)
        .arg("--english-only")
        .arg("--out-txt")
        .arg(&out_txt)
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out_txt).unwrap(), "a dog is a animal\n");
    let missed = dir
        .path()
        .join("outputs/sentences/missed_relation_types.txt");
    assert_eq!(fs::read_to_string(missed).unwrap(), "/r/MadeUpRelation\t1\n");
}
