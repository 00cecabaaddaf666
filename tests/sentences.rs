use std::fs;

use kg_reweight::{
    graph::EdgeRow,
    sentences::{
        chunking, generate_sentences, read_sentence_index, rel_to_sentence,
        webchild_rel_to_sentence, ConceptNetTemplates, MissedRelations, Provenance,
        SentenceRecord, WebChildTemplates,
    },
    PipelineError,
};

fn row(fields: &[&str]) -> EdgeRow {
    EdgeRow::new(fields.iter().map(|f| f.to_string()).collect())
}

#[test]
fn isa_reads_subject_first() {
    let sentence = rel_to_sentence("/c/en/dog", "/c/en/animal", "/r/IsA", None);
    assert_eq!(sentence.as_deref(), Some("a dog is a animal"));
}

#[test]
fn causes_swaps_arguments() {
    let sentence = rel_to_sentence("/c/en/fire", "/c/en/smoke", "/r/Causes", None);
    assert_eq!(sentence.as_deref(), Some("a smoke is caused by a fire"));
}

#[test]
fn underscores_become_spaces() {
    let sentence = rel_to_sentence("/c/en/ice_cream", "/c/en/cold_food", "/r/IsA", None);
    assert_eq!(sentence.as_deref(), Some("a ice cream is a cold food"));
}

#[test]
fn unknown_relation_without_logging_is_none() {
    assert_eq!(
        rel_to_sentence("/c/en/dog", "/c/en/cat", "/r/dbpedia/genre", None),
        None
    );
}

#[test]
fn unknown_relations_are_collected() {
    let mut missed = MissedRelations::new();
    assert!(rel_to_sentence("/c/en/a", "/c/en/b", "/r/Entails", Some(&mut missed)).is_none());
    assert!(rel_to_sentence("/c/en/a", "/c/en/c", "/r/Entails", Some(&mut missed)).is_none());
    assert!(rel_to_sentence("/c/en/a", "/c/en/b", "/r/IsA", Some(&mut missed)).is_some());
    assert_eq!(missed.len(), 1);
    assert_eq!(missed.count("/r/Entails"), 2);
    assert_eq!(missed.iter().collect::<Vec<_>>(), vec![("/r/Entails", 2)]);
}

#[test]
fn missed_relations_flush_appends_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/missed.txt");
    let mut missed = MissedRelations::new();
    missed.record("/r/Foo");
    missed.record("/r/Bar");
    missed.record("/r/Foo");
    missed.flush(&path).unwrap();
    assert!(missed.is_empty());
    missed.record("/r/Baz");
    missed.flush(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "/r/Foo\t2\n/r/Bar\t1\n/r/Baz\t1\n");
}

#[test]
fn webchild_fixed_relations_use_templates() {
    let s = webchild_rel_to_sentence("/c/en/run", "/c/en/morning", "/r/time", "", None);
    assert_eq!(s.as_deref(), Some("one can run during a morning"));
    let s = webchild_rel_to_sentence("/c/en/wheel", "/c/en/car", "/r/hasPart", "", None);
    assert_eq!(s.as_deref(), Some("a car is a part of a wheel"));
    let s = webchild_rel_to_sentence("/c/en/dog", "/c/en/animal", "/r/IsA", "", None);
    assert_eq!(s.as_deref(), Some("a dog is a animal"));
}

#[test]
fn webchild_free_relations_follow_provenance() {
    let property = "wc_property_cnformat.csv";
    let s = webchild_rel_to_sentence("/c/en/apple", "/c/en/red", "/r/color", property, None);
    assert_eq!(s.as_deref(), Some("a apple color is red"));
    let s = webchild_rel_to_sentence("/c/en/apple", "/c/en/red", "/r/is", property, None);
    assert_eq!(s.as_deref(), Some("a apple is red"));

    let s = webchild_rel_to_sentence(
        "/c/en/book",
        "/c/en/shelf",
        "/r/is_located_on",
        "wc_spatial_cnformat.csv",
        None,
    );
    assert_eq!(s.as_deref(), Some("a book is located on shelf"));

    let s = webchild_rel_to_sentence(
        "/c/en/car",
        "/c/en/bike",
        "/r/faster_than",
        "webchild_comparative.csv",
        None,
    );
    assert_eq!(s.as_deref(), Some("a car faster than a bike"));
}

#[test]
fn webchild_unknown_relation_is_recorded() {
    let mut missed = MissedRelations::new();
    let s = webchild_rel_to_sentence(
        "/c/en/a",
        "/c/en/b",
        "/r/mystery",
        "wc_action_cnformat.csv",
        Some(&mut missed),
    );
    assert!(s.is_none());
    assert_eq!(missed.count("/r/mystery"), 1);
    assert_eq!(Provenance::of("wc_action_cnformat.csv"), Provenance::Other);
}

#[test]
fn generation_keeps_row_indices_and_skips_misses() {
    let rows = vec![
        row(&["/c/en/dog", "/c/en/animal", "1.0", "src", "/r/IsA"]),
        row(&["/c/en/dog", "/c/de/hund", "1.0", "src", "/r/Synonym"]),
        row(&["/c/en/a", "/c/en/b", "1.0", "src", "/r/Unknown"]),
        row(&["/c/en/fire", "/c/en/smoke", "2.0", "src", "/r/Causes"]),
    ];
    let records =
        generate_sentences(&rows, &[0, 2, 3], &ConceptNetTemplates, None).unwrap();
    assert_eq!(
        records,
        vec![
            SentenceRecord {
                row: 0,
                text: "a dog is a animal".into()
            },
            SentenceRecord {
                row: 3,
                text: "a smoke is caused by a fire".into()
            },
        ]
    );

    let err = generate_sentences(&rows, &[7], &ConceptNetTemplates, None).unwrap_err();
    assert!(matches!(err, PipelineError::RowOutOfRange { row: 7, rows: 4 }));
}

#[test]
fn webchild_builder_reads_file_column() {
    let rows = vec![row(&[
        "/c/en/book",
        "/c/en/shelf",
        "0.7",
        "spatial",
        "/r/is_located_on",
        "wc_spatial_cnformat.csv",
    ])];
    let records = generate_sentences(&rows, &[0], &WebChildTemplates, None).unwrap();
    assert_eq!(records[0].text, "a book is located on shelf");
}

#[test]
fn sentence_files_are_written_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("out/cn.txt");
    let csv = dir.path().join("out/cn.csv");
    let records = vec![
        SentenceRecord {
            row: 4,
            text: "a dog is a animal".into(),
        },
        SentenceRecord {
            row: 9,
            text: "a smoke is caused by a fire".into(),
        },
    ];
    kg_reweight::sentences::write_sentences(&records, &txt, &csv).unwrap();

    insta::assert_snapshot!(fs::read_to_string(&txt).unwrap().trim_end(), @r"
    a dog is a animal
    a smoke is caused by a fire
    ");
    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "\t0\t1\n0\t4\ta dog is a animal\n1\t9\ta smoke is caused by a fire\n"
    );
    assert_eq!(read_sentence_index(&csv).unwrap(), records);
}

#[test]
fn split_text_file_produces_fixed_size_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sentences.txt");
    fs::write(&input, "s0\ns1\ns2\ns3\ns4\n").unwrap();
    let template = dir.path().join("chunk_{}.txt").display().to_string();
    let chunks = chunking::split_text_file(&input, &template, 2).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(fs::read_to_string(&chunks[0]).unwrap(), "s0\ns1\n");
    assert_eq!(fs::read_to_string(&chunks[1]).unwrap(), "s2\ns3\n");
    assert_eq!(fs::read_to_string(&chunks[2]).unwrap(), "s4\n");
    assert_eq!(chunks[2], chunking::chunk_path(&template, 2));
}

#[test]
fn long_words_are_broken_up() {
    assert_eq!(chunking::split_long_word("abcdefgh", 3), "abc def gh");
    assert_eq!(chunking::split_long_word("abc", 3), "abc");

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "a verylongword is tiny\nok\n").unwrap();
    let split = chunking::split_long_words(&input, &output, 4).unwrap();
    assert_eq!(split, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "a very long word is tiny\nok\n"
    );
}
