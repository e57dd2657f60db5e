//! Subject words: a bare pronoun, or a noun carrying a demonstrative
//! suffix.

use crate::error::{MorphError, MorphResult};
use crate::lexicon::lexicon;

use super::word::{MorphemeDetail, MorphemeKind, WordDetails, WordKind};

/// A validated sentence subject.
///
/// Pronoun subjects stand alone; anything else must carry a proximal
/// (`ii`) or distal (`uu`) subject suffix. Nouns outside the lexicon are
/// accepted and simply render without a gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    noun: String,
    suffix: Option<String>,
}

impl Subject {
    pub fn new(noun: &str, suffix: Option<&str>) -> MorphResult<Self> {
        let lex = lexicon();
        if lex.subject_pronoun(noun).is_some() {
            if suffix.is_some() {
                return Err(MorphError::PronounWithSuffix {
                    pronoun: noun.to_string(),
                });
            }
        } else {
            match suffix {
                None => {
                    return Err(MorphError::MissingSubjectSuffix {
                        noun: noun.to_string(),
                    });
                }
                Some(s) if lex.subject_suffix(s).is_none() => {
                    return Err(MorphError::UnknownSubjectSuffix {
                        suffix: s.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            noun: noun.to_string(),
            suffix: suffix.map(str::to_string),
        })
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// Whether the subject is one of the twelve personal pronouns.
    /// Pronoun subjects encliticize, which changes word order.
    pub fn is_pronoun(&self) -> bool {
        lexicon().subject_pronoun(&self.noun).is_some()
    }

    /// Surface form: the bare pronoun, or `noun-suffix`.
    pub fn surface(&self) -> String {
        match &self.suffix {
            None => self.noun.clone(),
            Some(s) => format!("{}-{}", self.noun, s),
        }
    }

    pub fn details(&self) -> WordDetails {
        let lex = lexicon();
        let mut parts = Vec::new();
        if let Some(pronoun) = lex.subject_pronoun(&self.noun) {
            parts.push(MorphemeDetail {
                kind: MorphemeKind::Pronoun,
                text: pronoun.form.to_string(),
                definition: pronoun.gloss.to_string(),
            });
        } else {
            let gloss = lex.noun(&self.noun).map(|l| l.gloss).unwrap_or(&self.noun);
            parts.push(MorphemeDetail {
                kind: MorphemeKind::Noun,
                text: self.noun.clone(),
                definition: gloss.to_string(),
            });
            if let Some(suffix) = &self.suffix {
                if let Some(m) = lex.subject_suffix(suffix) {
                    parts.push(MorphemeDetail {
                        kind: MorphemeKind::SubjectSuffix,
                        text: m.form.to_string(),
                        definition: m.gloss.to_string(),
                    });
                }
            }
        }
        WordDetails {
            kind: WordKind::Subject,
            text: self.surface(),
            parts,
        }
    }
}
