//! Graph data model: identifiers, rows and the tab-separated file format.

pub mod concept;
pub mod edge;

pub use concept::{
    concept_to_word, relation_to_word, word_to_concept, word_to_rel, Concept, Relation,
    PSEUDO_ROOT,
};
pub use edge::{
    concatenate_files, english_indices, format_score, read_rows, write_edges, write_rows, Column,
    Edge, EdgeRow,
};
