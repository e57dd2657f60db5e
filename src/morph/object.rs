//! Object words: a noun plus a mandatory demonstrative suffix, and the
//! deixis agreement helpers used by the choices engine and the
//! formatter.

use crate::error::{MorphError, MorphResult};
use crate::lexicon::{Morpheme, lexicon};

use super::word::{MorphemeDetail, MorphemeKind, WordDetails, WordKind};

/// A validated sentence object.
///
/// The suffix (`eika` proximal, `oka` distal) is required. As with
/// subjects, nouns outside the lexicon are accepted and render without a
/// gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    noun: String,
    suffix: String,
}

impl Object {
    pub fn new(noun: &str, suffix: Option<&str>) -> MorphResult<Self> {
        match suffix {
            None => Err(MorphError::MissingObjectSuffix {
                noun: noun.to_string(),
            }),
            Some(s) if lexicon().object_suffix(s).is_none() => {
                Err(MorphError::UnknownObjectSuffix {
                    suffix: s.to_string(),
                })
            }
            Some(s) => Ok(Self {
                noun: noun.to_string(),
                suffix: s.to_string(),
            }),
        }
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// Surface form with the epenthesis rule applied: the suffix gains an
    /// epenthetic `n` (`neika`/`noka`) unless the noun ends in a glottal
    /// stop.
    pub fn surface(&self) -> String {
        if ends_in_glottal_stop(&self.noun) {
            format!("{}-{}", self.noun, self.suffix)
        } else {
            format!("{}-n{}", self.noun, self.suffix)
        }
    }

    pub fn details(&self) -> WordDetails {
        let lex = lexicon();
        let noun_gloss = lex.noun(&self.noun).map(|l| l.gloss).unwrap_or(&self.noun);
        let mut parts = vec![MorphemeDetail {
            kind: MorphemeKind::Noun,
            text: self.noun.clone(),
            definition: noun_gloss.to_string(),
        }];
        if let Some(m) = lex.object_suffix(&self.suffix) {
            parts.push(MorphemeDetail {
                kind: MorphemeKind::ObjectSuffix,
                text: m.form.to_string(),
                definition: m.gloss.to_string(),
            });
        }
        WordDetails {
            kind: WordKind::Object,
            text: self.surface(),
            parts,
        }
    }
}

/// Whether the glottal-stop marker falls in the noun's last two
/// characters.
fn ends_in_glottal_stop(noun: &str) -> bool {
    noun.chars().rev().take(2).any(|c| c == '\'')
}

/// The object suffix whose deixis agrees with the given object pronoun.
///
/// `None` when the pronoun carries no deixis feature (first and second
/// person) or is not an object pronoun at all.
pub fn matching_suffix(pronoun: &str) -> Option<&'static Morpheme> {
    let lex = lexicon();
    let deixis = lex.object_pronoun(pronoun)?.deixis?;
    lex.object_suffix_for(deixis)
}

/// The third-person object pronouns compatible with an object suffix.
///
/// With no suffix the full third-person set is returned (proximal before
/// distal, stable order). An unrecognized suffix is an error.
pub fn matching_third_person_pronouns(
    suffix: Option<&str>,
) -> MorphResult<Vec<&'static Morpheme>> {
    let lex = lexicon();
    match suffix {
        None => Ok(lex.third_person_object_pronouns(None)),
        Some(s) => {
            let m = lex
                .object_suffix(s)
                .ok_or_else(|| MorphError::UnknownObjectSuffix {
                    suffix: s.to_string(),
                })?;
            Ok(lex.third_person_object_pronouns(m.deixis))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_required() {
        let err = Object::new("pugu", None).unwrap_err();
        assert!(matches!(err, MorphError::MissingObjectSuffix { .. }));
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        let err = Object::new("pugu", Some("ika")).unwrap_err();
        assert!(matches!(err, MorphError::UnknownObjectSuffix { .. }));
    }

    #[test]
    fn glottal_stop_blocks_epenthesis() {
        let o = Object::new("kidi'", Some("eika")).unwrap();
        assert_eq!(o.surface(), "kidi'-eika");
    }

    #[test]
    fn epenthetic_n_after_plain_vowel() {
        let o = Object::new("wai", Some("eika")).unwrap();
        assert_eq!(o.surface(), "wai-neika");
        let o = Object::new("pugu", Some("oka")).unwrap();
        assert_eq!(o.surface(), "pugu-noka");
    }

    #[test]
    fn glottal_stop_outside_the_last_two_chars_does_not_block() {
        // wo'ada ends -da, so the stop is out of range and n appears
        let o = Object::new("wo'ada", Some("oka")).unwrap();
        assert_eq!(o.surface(), "wo'ada-noka");
    }

    #[test]
    fn details_keep_underlying_suffix_form() {
        let o = Object::new("wai", Some("eika")).unwrap();
        let d = o.details();
        assert_eq!(d.text, "wai-neika");
        assert_eq!(d.parts[0].definition, "rice");
        assert_eq!(d.parts[1].text, "eika");
        assert_eq!(d.parts[1].definition, "proximal");
    }

    #[test]
    fn matching_suffix_follows_deixis() {
        assert_eq!(matching_suffix("ma").map(|m| m.form), Some("eika"));
        assert_eq!(matching_suffix("ui").map(|m| m.form), Some("oka"));
        assert_eq!(matching_suffix("i"), None);
        assert_eq!(matching_suffix("nüü"), None);
    }

    #[test]
    fn matching_pronouns_for_each_suffix() {
        let forms = |suffix: Option<&str>| -> Vec<&str> {
            matching_third_person_pronouns(suffix)
                .unwrap()
                .iter()
                .map(|m| m.form)
                .collect()
        };
        assert_eq!(forms(Some("eika")), ["ma", "mai", "a", "ai"]);
        assert_eq!(forms(Some("oka")), ["u", "ui"]);
        assert_eq!(forms(None), ["ma", "mai", "a", "ai", "u", "ui"]);
    }

    #[test]
    fn matching_pronouns_rejects_unknown_suffix() {
        let err = matching_third_person_pronouns(Some("zz")).unwrap_err();
        assert!(matches!(err, MorphError::UnknownObjectSuffix { .. }));
    }
}
