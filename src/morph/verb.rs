//! Verb words: stem, tense suffix, and an optional object-pronoun prefix.
//!
//! Attaching a prefix voices the stem's initial consonant (lenis
//! mutation). Transitivity is enforced at construction: intransitive
//! stems reject the prefix outright.

use crate::error::{MorphError, MorphResult};
use crate::lexicon::{VerbClass, lexicon};

use super::word::{MorphemeDetail, MorphemeKind, WordDetails, WordKind};

/// Initial-consonant voicing pairs applied under a pronominal prefix.
const LENIS: [(char, &str); 5] = [
    ('p', "b"),
    ('t', "d"),
    ('k', "g"),
    ('s', "z"),
    ('m', "w̃"),
];

/// Apply lenis mutation to the first character of a stem.
///
/// Stems whose initial consonant has no voiced counterpart are returned
/// unchanged; only the first character ever mutates.
pub fn lenis(stem: &str) -> String {
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => match LENIS.iter().find(|(plain, _)| *plain == first) {
            Some((_, voiced)) => format!("{voiced}{}", chars.as_str()),
            None => stem.to_string(),
        },
        None => String::new(),
    }
}

/// How to treat verb stems outside the known tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexemePolicy {
    /// Log a warning and continue; the stem renders but cannot be
    /// glossed.
    #[default]
    Lenient,
    /// Reject construction with [`MorphError::UnrecognizedStem`].
    Strict,
}

/// A validated verb word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    stem: String,
    tense: String,
    object_prefix: Option<String>,
}

impl Verb {
    /// Construct with the default lenient policy.
    pub fn new(stem: &str, tense: &str, object_prefix: Option<&str>) -> MorphResult<Self> {
        Self::with_policy(stem, tense, object_prefix, LexemePolicy::Lenient)
    }

    /// Construct, choosing how unrecognized stems are handled.
    ///
    /// The tense is validated first, then the stem's class. Prefixes are
    /// not themselves validated here; an unknown prefix renders but
    /// cannot be glossed.
    pub fn with_policy(
        stem: &str,
        tense: &str,
        object_prefix: Option<&str>,
        policy: LexemePolicy,
    ) -> MorphResult<Self> {
        let lex = lexicon();
        if lex.tense(tense).is_none() {
            return Err(MorphError::UnknownTense {
                tense: tense.to_string(),
            });
        }
        match lex.verb(stem) {
            Some((_, VerbClass::Transitive)) => {}
            Some((_, VerbClass::Intransitive)) => {
                if object_prefix.is_some() {
                    return Err(MorphError::IntransitiveWithObjectPrefix {
                        stem: stem.to_string(),
                    });
                }
            }
            None => match policy {
                LexemePolicy::Strict => {
                    return Err(MorphError::UnrecognizedStem {
                        stem: stem.to_string(),
                    });
                }
                LexemePolicy::Lenient => {
                    tracing::warn!(stem = %stem, "unrecognized verb stem, continuing without a gloss");
                }
            },
        }
        Ok(Self {
            stem: stem.to_string(),
            tense: tense.to_string(),
            object_prefix: object_prefix.map(str::to_string),
        })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn is_transitive(&self) -> bool {
        matches!(lexicon().verb(&self.stem), Some((_, VerbClass::Transitive)))
    }

    /// Surface form: `stem-tense`, or `prefix-lenis(stem)-tense` when an
    /// object pronoun is attached.
    pub fn surface(&self) -> String {
        match &self.object_prefix {
            None => format!("{}-{}", self.stem, self.tense),
            Some(prefix) => format!("{}-{}-{}", prefix, lenis(&self.stem), self.tense),
        }
    }

    pub fn details(&self) -> WordDetails {
        let lex = lexicon();
        let mut parts = Vec::new();
        if let Some(prefix) = &self.object_prefix {
            let gloss = lex
                .object_pronoun(prefix)
                .map(|m| m.gloss)
                .unwrap_or(prefix);
            parts.push(MorphemeDetail {
                kind: MorphemeKind::ObjectPronoun,
                text: prefix.clone(),
                definition: gloss.to_string(),
            });
        }
        let stem_gloss = lex
            .verb(&self.stem)
            .map(|(l, _)| l.gloss)
            .unwrap_or(&self.stem);
        parts.push(MorphemeDetail {
            kind: MorphemeKind::VerbStem,
            text: self.stem.clone(),
            definition: stem_gloss.to_string(),
        });
        if let Some(tense) = lex.tense(&self.tense) {
            parts.push(MorphemeDetail {
                kind: MorphemeKind::Tense,
                text: tense.form.to_string(),
                definition: tense.gloss.to_string(),
            });
        }
        WordDetails {
            kind: WordKind::Verb,
            text: self.surface(),
            parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenis_voices_initial_consonants() {
        assert_eq!(lenis("puni"), "buni");
        assert_eq!(lenis("tüka"), "düka");
        assert_eq!(lenis("kwana"), "gwana");
        assert_eq!(lenis("sawa"), "zawa");
        assert_eq!(lenis("mui"), "w̃ui");
    }

    #[test]
    fn lenis_leaves_other_initials_alone() {
        assert_eq!(lenis("yadohi"), "yadohi");
        assert_eq!(lenis("hibi"), "hibi");
        assert_eq!(lenis(""), "");
    }

    #[test]
    fn tense_is_validated_first() {
        let err = Verb::new("katü", "zz", Some("ma")).unwrap_err();
        assert!(matches!(err, MorphError::UnknownTense { .. }));
    }

    #[test]
    fn intransitive_rejects_prefix() {
        let err = Verb::new("katü", "dü", Some("ma")).unwrap_err();
        assert!(matches!(err, MorphError::IntransitiveWithObjectPrefix { .. }));
        assert!(Verb::new("katü", "dü", None).is_ok());
    }

    #[test]
    fn transitive_prefix_is_optional() {
        assert!(Verb::new("puni", "dü", None).is_ok());
        assert!(Verb::new("puni", "dü", Some("ma")).is_ok());
    }

    #[test]
    fn strict_policy_rejects_unknown_stem() {
        let err = Verb::with_policy("blarg", "dü", None, LexemePolicy::Strict).unwrap_err();
        assert!(matches!(err, MorphError::UnrecognizedStem { .. }));
    }

    #[test]
    fn lenient_policy_accepts_unknown_stem() {
        let v = Verb::new("blarg", "dü", None).unwrap();
        assert_eq!(v.surface(), "blarg-dü");
        assert_eq!(v.details().parts[0].definition, "blarg");
    }

    #[test]
    fn prefix_triggers_lenis_in_surface() {
        let v = Verb::new("puni", "dü", Some("ma")).unwrap();
        assert_eq!(v.surface(), "ma-buni-dü");
        let bare = Verb::new("puni", "dü", None).unwrap();
        assert_eq!(bare.surface(), "puni-dü");
    }

    #[test]
    fn details_order_prefix_stem_tense() {
        let v = Verb::new("tüka", "wei", Some("u")).unwrap();
        let d = v.details();
        assert_eq!(d.text, "u-düka-wei");
        let kinds: Vec<MorphemeKind> = d.parts.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            [MorphemeKind::ObjectPronoun, MorphemeKind::VerbStem, MorphemeKind::Tense]
        );
        assert_eq!(d.parts[0].definition, "him/her/it (distal)");
        assert_eq!(d.parts[1].definition, "eat");
        assert_eq!(d.parts[2].definition, "future (will)");
    }

    #[test]
    fn dual_class_stem_is_transitive() {
        let v = Verb::new("tsibui", "dü", Some("ma")).unwrap();
        assert!(v.is_transitive());
    }
}
