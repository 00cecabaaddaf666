//! WebChild sentence templates, including its free-relation subgraphs.

use crate::graph::{concept_to_word, relation_to_word, EdgeRow};

use super::{MissedRelations, SentenceBuilder};

/// Two-slot templates; the first `{}` takes the subject, the second the object.
const RELATION_TEMPLATES: &[(&str, &str)] = &[
    ("/r/time", "one can {} during a {}"),
    ("/r/location", "one can {} in a {}"),
    ("/r/emotion", "to {} causes {}"),
    ("/r/agent", "a {} can {}"),
    ("/r/activity", "to {} one needs to {}"),
    ("/r/participant", "a {} is a part of {}"),
    ("/r/thing", "to {} is related to a {}"),
    ("/r/hassynsetmember", "to {} is similar to a {}"),
    ("/r/next", "to {} follows {}"),
    ("/r/prev", "to {} follows {}"),
    ("/r/hassimilar", "to {} is similar to {}"),
    ("/r/hashypernymy", "to {} is to {}"),
    ("/r/hasMember", "a {} is a member of a {}"),
    ("/r/hasPart", "a {} is a part of a {}"),
    ("/r/hasSubstance", "a {} consists of a {}"),
    ("/r/IsA", "a {} is a {}"),
];

const FLIPPED: &[&str] = &[
    "/r/agent",
    "/r/participant",
    "/r/next",
    "/r/hasMember",
    "/r/hasPart",
];

/// Subgraph family a WebChild row was merged from, read off its `file` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Property,
    Spatial,
    Comparative,
    Other,
}

impl Provenance {
    pub fn of(file: &str) -> Self {
        if file.contains("property") {
            Self::Property
        } else if file.contains("spatial") {
            Self::Spatial
        } else if file.contains("comparative") {
            Self::Comparative
        } else {
            Self::Other
        }
    }
}

fn fill(template: &str, first: &str, second: &str) -> String {
    let mut parts = template.splitn(3, "{}");
    let head = parts.next().unwrap_or_default();
    let middle = parts.next().unwrap_or_default();
    let tail = parts.next().unwrap_or_default();
    format!("{head}{first}{middle}{second}{tail}")
}

/// Sentence for a WebChild triple.
///
/// Fixed relations use their template; free relations are written into a
/// template chosen by the row's provenance. Anything else is a miss.
pub fn webchild_rel_to_sentence(
    word1: &str,
    word2: &str,
    relation: &str,
    file: &str,
    missed: Option<&mut MissedRelations>,
) -> Option<String> {
    let mut subject = concept_to_word(word1).replace('_', " ");
    let mut object = concept_to_word(word2).replace('_', " ");

    if let Some((_, template)) = RELATION_TEMPLATES.iter().find(|(rel, _)| *rel == relation) {
        if FLIPPED.contains(&relation) {
            std::mem::swap(&mut subject, &mut object);
        }
        return Some(fill(template, &subject, &object));
    }

    let phrase = relation_to_word(relation).replace('_', " ");
    match Provenance::of(file) {
        Provenance::Property if relation == "/r/is" => Some(format!("a {subject} is {object}")),
        Provenance::Property => Some(format!("a {subject} {phrase} is {object}")),
        Provenance::Spatial => Some(format!("a {subject} {phrase} {object}")),
        Provenance::Comparative => Some(format!("a {subject} {phrase} a {object}")),
        Provenance::Other => {
            if let Some(missed) = missed {
                missed.record(relation);
            }
            None
        }
    }
}

/// Sentence builder for merged WebChild graphs carrying a `file` column.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebChildTemplates;

impl SentenceBuilder for WebChildTemplates {
    fn build(&self, row: &EdgeRow, missed: Option<&mut MissedRelations>) -> Option<String> {
        webchild_rel_to_sentence(
            row.word1(),
            row.word2(),
            row.relation(),
            row.file(),
            missed,
        )
    }
}
