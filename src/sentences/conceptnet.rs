//! ConceptNet-style relation phrases.

use crate::graph::{concept_to_word, EdgeRow};

use super::{MissedRelations, SentenceBuilder};

const RELATION_PHRASES: &[(&str, &str)] = &[
    ("/r/RelatedTo", "is related to"),
    ("/r/FormOf", "is a form of"),
    ("/r/IsA", "is"),
    ("/r/PartOf", "is a part of"),
    ("/r/HasA", "is a part of"),
    ("/r/UsedFor", "is used for"),
    ("/r/CapableOf", "is able to"),
    ("/r/AtLocation", "is located at"),
    ("/r/Causes", "is caused by"),
    ("/r/HasSubevent", "occurs as part of"),
    ("/r/HasFirstSubevent", "begins with"),
    ("/r/HasLastSubevent", "concludes with"),
    ("/r/HasPrerequisite", "needs"),
    ("/r/HasProperty", "is"),
    ("/r/MotivatedByGoal", "is motivated by"),
    ("/r/ObstructedBy", "can be prevented by"),
    ("/r/Desires", "want"),
    ("/r/CreatedBy", "created by"),
    ("/r/Synonym", "is similar to"),
    ("/r/Antonym", "is different from"),
    ("/r/DistinctFrom", "is distinct from"),
    ("/r/DerivedFrom", "is derived from"),
    ("/r/SymbolOf", "is a symbol of"),
    ("/r/DefinedAs", "is defined as"),
    ("/r/MannerOf", "is a"),
    ("/r/LocatedNear", "is located near"),
    ("/r/HasContext", "has context"),
    ("/r/SimilarTo", "is similar to"),
    ("/r/EtymologicallyRelatedTo", "has a common origin with"),
    ("/r/EtymologicallyDerivedFrom", "is derived from"),
    ("/r/CausesDesire", "makes to want to"),
    ("/r/MadeOf", "is made of"),
    ("/r/ReceivesAction", "can be"),
    ("/r/ExternalURL", "External URL"),
    ("/r/NotDesires", "does not want"),
    ("/r/InstanceOf", "is instance of"),
    ("/r/subClassOf", "is"),
];

/// Relations whose phrase reads object-first.
const FLIPPED: &[&str] = &["/r/Causes", "/r/HasA"];

/// Phrase for a relation identifier, if the table knows it.
pub fn relation_phrase(relation: &str) -> Option<&'static str> {
    RELATION_PHRASES
        .iter()
        .find(|(rel, _)| *rel == relation)
        .map(|(_, phrase)| *phrase)
}

/// Build `"a <w1> <phrase> a <w2>"` for a ConceptNet triple.
///
/// Unknown relations yield `None` and are recorded in `missed` when given.
pub fn rel_to_sentence(
    word1: &str,
    word2: &str,
    relation: &str,
    missed: Option<&mut MissedRelations>,
) -> Option<String> {
    let Some(phrase) = relation_phrase(relation) else {
        if let Some(missed) = missed {
            missed.record(relation);
        }
        return None;
    };
    let mut subject = concept_to_word(word1).replace('_', " ");
    let mut object = concept_to_word(word2).replace('_', " ");
    if FLIPPED.contains(&relation) {
        std::mem::swap(&mut subject, &mut object);
    }
    Some(format!(
        "a {subject} {} a {object}",
        phrase.replace('_', " ")
    ))
}

/// Sentence builder for ConceptNet and ConceptNet-formatted graphs (e.g. YAGO).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConceptNetTemplates;

impl SentenceBuilder for ConceptNetTemplates {
    fn build(&self, row: &EdgeRow, missed: Option<&mut MissedRelations>) -> Option<String> {
        rel_to_sentence(row.word1(), row.word2(), row.relation(), missed)
    }
}
