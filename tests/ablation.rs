use kg_reweight::{
    analysis,
    graph::{Column, EdgeRow},
    PipelineError,
};

fn row(fields: &[&str]) -> EdgeRow {
    EdgeRow::new(fields.iter().map(|f| f.to_string()).collect())
}

fn weighted() -> Vec<EdgeRow> {
    vec![
        row(&["/c/en/a", "/c/en/b", "10.0", "/d/wordnet/3.1", "/r/IsA"]),
        row(&["/c/en/a", "/c/en/c", "30.0", "/d/wordnet/3.1", "/r/IsA"]),
        row(&["/c/en/a", "/c/de/b", "5.0", "/d/wiktionary/de", "/r/Synonym"]),
        row(&["/c/en/a", "/c/en/d", "5.0", "/d/dbpedia/en", "/r/dbpedia/genre"]),
        row(&["/c/en/a", "/c/en/e", "3.0", "/d/wordnet/3.1", "/r/Entails"]),
    ]
}

#[test]
fn subgraph_selects_by_source() {
    let rows = weighted();
    let wordnet = analysis::subgraph(&rows, "/d/wordnet/");
    assert_eq!(wordnet.len(), 3);
    assert_eq!(analysis::subgraph_name("/d/wordnet/"), "wordnet");
}

#[test]
fn prune_only_touches_reweighted_english_edges() {
    let mut rows = weighted();
    let pruned = analysis::prune(&mut rows, 20.0);
    assert_eq!(pruned, 1);
    assert_eq!(rows[0].fields()[2], "0");
    assert_eq!(rows[1].fields()[2], "30.0");
    assert_eq!(rows[2].fields()[2], "5.0");
    assert_eq!(rows[3].fields()[2], "5.0");
    assert_eq!(rows[4].fields()[2], "3.0");
}

#[test]
fn prune_original_follows_the_weighted_mask() {
    let mut original: Vec<EdgeRow> = weighted()
        .into_iter()
        .map(|mut r| {
            r.set(Column::Score, "1.0".to_string());
            r
        })
        .collect();
    let pruned = analysis::prune_original(&mut original, &weighted(), 20.0).unwrap();
    assert_eq!(pruned, 1);
    assert_eq!(original[0].fields()[2], "0");
    assert!(original[1..].iter().all(|r| r.fields()[2] == "1.0"));

    let err = analysis::prune_original(&mut original, &weighted()[..2], 20.0).unwrap_err();
    assert!(matches!(err, PipelineError::LengthMismatch { left: 5, right: 2 }));
}

#[test]
fn shuffling_is_seeded_and_preserves_values() {
    let mut first = weighted();
    let mut second = weighted();
    analysis::shuffle_columns(&mut first, &[Column::Word2, Column::Score], 7);
    analysis::shuffle_columns(&mut second, &[Column::Word2, Column::Score], 7);
    assert_eq!(first, second);

    let original = weighted();
    for (after, before) in first.iter().zip(&original) {
        assert_eq!(after.word1(), before.word1());
        assert_eq!(after.relation(), before.relation());
    }
    let mut before: Vec<(String, String)> = original
        .iter()
        .map(|r| (r.word2().to_string(), r.fields()[2].clone()))
        .collect();
    let mut after: Vec<(String, String)> = first
        .iter()
        .map(|r| (r.word2().to_string(), r.fields()[2].clone()))
        .collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn english_shuffle_leaves_other_rows_alone() {
    let mut rows = weighted();
    analysis::shuffle_english_column(&mut rows, Column::Score, 3);
    assert_eq!(rows[2], weighted()[2]);
    let mut scores: Vec<String> = [0, 1, 3, 4].iter().map(|&i| rows[i].fields()[2].clone()).collect();
    scores.sort();
    assert_eq!(scores, vec!["10.0", "3.0", "30.0", "5.0"]);
}

#[test]
fn column_names_parse() {
    assert_eq!("word2".parse::<Column>().unwrap(), Column::Word2);
    assert_eq!("weight".parse::<Column>().unwrap(), Column::Score);
    assert!("colour".parse::<Column>().is_err());
}
