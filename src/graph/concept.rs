//! Concept and relation identifiers (`/c/<lang>/<token>`, `/r/<name>`).

use std::fmt;

/// Placeholder node some graphs use instead of a real concept.
pub const PSEUDO_ROOT: &str = "pseudo_root";

/// Relation assigned when a source leaves the relation blank.
pub const DEFAULT_RELATION: &str = "is";

/// A concept identifier such as `/c/en/climate_change`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Concept {
    pub lang: String,
    pub token: String,
}

impl Concept {
    /// English concept for free text; spaces become underscores.
    pub fn english(word: &str) -> Self {
        Self {
            lang: "en".to_string(),
            token: word.replace(' ', "_"),
        }
    }

    /// Parse `/c/<lang>/<token>[/<pos>...]`. Trailing segments are ignored.
    pub fn parse(id: &str) -> Option<Self> {
        let mut parts = id.split('/');
        if parts.next()? != "" || parts.next()? != "c" {
            return None;
        }
        let lang = parts.next()?;
        let token = parts.next()?;
        Some(Self {
            lang: lang.to_string(),
            token: token.to_string(),
        })
    }

    /// Token with underscores turned back into spaces.
    pub fn surface(&self) -> String {
        self.token.replace('_', " ")
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/c/{}/{}", self.lang, self.token)
    }
}

/// A relation identifier such as `/r/IsA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    pub name: String,
}

impl Relation {
    /// Relation for free text; blank or `-` becomes [`DEFAULT_RELATION`].
    pub fn from_words(words: &str) -> Self {
        let words = if words.is_empty() || words == "-" {
            DEFAULT_RELATION
        } else {
            words
        };
        Self {
            name: words.replace(' ', "_"),
        }
    }

    /// Parse `/r/<name>[/...]`.
    pub fn parse(id: &str) -> Option<Self> {
        let mut parts = id.split('/');
        if parts.next()? != "" || parts.next()? != "r" {
            return None;
        }
        let name = parts.next()?;
        Some(Self {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/r/{}", self.name)
    }
}

/// `"climate change"` becomes `/c/en/climate_change`.
pub fn word_to_concept(word: &str) -> String {
    Concept::english(word).to_string()
}

/// `"is part of"` becomes `/r/is_part_of`; blank or `-` becomes `/r/is`.
pub fn word_to_rel(word: &str) -> String {
    Relation::from_words(word).to_string()
}

/// Token segment of a concept identifier, underscores kept.
///
/// Identifiers with too few segments degrade to an empty string, except the
/// pseudo root which maps to itself.
pub fn concept_to_word(id: &str) -> String {
    match Concept::parse(id) {
        Some(concept) => concept.token,
        None => sentinel(id),
    }
}

/// Name segment of a relation identifier, degrading like [`concept_to_word`].
pub fn relation_to_word(id: &str) -> String {
    match Relation::parse(id) {
        Some(relation) => relation.name,
        None => sentinel(id),
    }
}

fn sentinel(id: &str) -> String {
    if id == PSEUDO_ROOT {
        PSEUDO_ROOT.to_string()
    } else {
        String::new()
    }
}
