//! Word-level gloss structures shared by the three word categories.
//!
//! A rendered word decomposes into ordered morphemes, each tagged with a
//! category and an English definition. The serialized shape (`type`,
//! `text`, `parts`) is the interchange format consumed by UIs and by the
//! translation layer.

use serde::Serialize;

use super::object::Object;
use super::subject::Subject;
use super::verb::Verb;

/// Category of a whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    Subject,
    Verb,
    Object,
}

/// Category of a single morpheme within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphemeKind {
    Noun,
    Pronoun,
    SubjectSuffix,
    ObjectPronoun,
    VerbStem,
    Tense,
    ObjectSuffix,
}

/// One morpheme of a rendered word, with its English definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphemeDetail {
    #[serde(rename = "type")]
    pub kind: MorphemeKind,
    pub text: String,
    pub definition: String,
}

/// Ordered morpheme decomposition of one surface word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDetails {
    #[serde(rename = "type")]
    pub kind: WordKind,
    pub text: String,
    pub parts: Vec<MorphemeDetail>,
}

/// A validated word in one of the three categories.
#[derive(Debug, Clone)]
pub enum Word {
    Subject(Subject),
    Verb(Verb),
    Object(Object),
}

impl Word {
    /// The rendered surface form.
    pub fn surface(&self) -> String {
        match self {
            Word::Subject(s) => s.surface(),
            Word::Verb(v) => v.surface(),
            Word::Object(o) => o.surface(),
        }
    }

    /// The morpheme decomposition with English definitions.
    pub fn details(&self) -> WordDetails {
        match self {
            Word::Subject(s) => s.details(),
            Word::Verb(v) => v.details(),
            Word::Object(o) => o.details(),
        }
    }

    pub fn kind(&self) -> WordKind {
        match self {
            Word::Subject(_) => WordKind::Subject,
            Word::Verb(_) => WordKind::Verb,
            Word::Object(_) => WordKind::Object,
        }
    }
}
