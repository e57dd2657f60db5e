//! The agreement engine: constraint propagation over the seven sentence
//! fields.
//!
//! A sentence is drafted as seven optional string fields. After every
//! change the whole choice-state is recomputed from scratch: each field
//! gets its legal candidate list, its corrected value, and a requirement
//! flag. There is no incremental invalidation; the recompute is a single
//! cheap pass over fixed tables.
//!
//! Fields are resolved in a fixed order, each step seeing the values as
//! corrected so far:
//!
//! ```text
//! subject_noun → subject_suffix → verb → verb_tense
//!              → object_pronoun → object_noun → object_suffix
//! ```
//!
//! Values are never invented, only kept or cleared, so recomputation
//! reaches a fixed point: feeding a computed state's values back in
//! returns the same state.

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexeme, Morpheme, VerbClass, lexicon};
use crate::morph::object;

/// The seven sentence fields, in engine resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SubjectNoun,
    SubjectSuffix,
    Verb,
    VerbTense,
    ObjectPronoun,
    ObjectNoun,
    ObjectSuffix,
}

impl Field {
    /// All fields, in resolution order.
    pub const ALL: [Field; 7] = [
        Field::SubjectNoun,
        Field::SubjectSuffix,
        Field::Verb,
        Field::VerbTense,
        Field::ObjectPronoun,
        Field::ObjectNoun,
        Field::ObjectSuffix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::SubjectNoun => "subject_noun",
            Field::SubjectSuffix => "subject_suffix",
            Field::Verb => "verb",
            Field::VerbTense => "verb_tense",
            Field::ObjectPronoun => "object_pronoun",
            Field::ObjectNoun => "object_noun",
            Field::ObjectSuffix => "object_suffix",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, possibly partial field values as supplied by a caller.
///
/// Drafts carry arbitrary strings; the engine resets anything it does
/// not recognize. A draft extracted from a computed [`ChoiceSet`] is
/// always canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDraft {
    pub subject_noun: Option<String>,
    pub subject_suffix: Option<String>,
    pub verb: Option<String>,
    pub verb_tense: Option<String>,
    pub object_pronoun: Option<String>,
    pub object_noun: Option<String>,
    pub object_suffix: Option<String>,
}

impl SentenceDraft {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::SubjectNoun => self.subject_noun.as_deref(),
            Field::SubjectSuffix => self.subject_suffix.as_deref(),
            Field::Verb => self.verb.as_deref(),
            Field::VerbTense => self.verb_tense.as_deref(),
            Field::ObjectPronoun => self.object_pronoun.as_deref(),
            Field::ObjectNoun => self.object_noun.as_deref(),
            Field::ObjectSuffix => self.object_suffix.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::SubjectNoun => self.subject_noun = value,
            Field::SubjectSuffix => self.subject_suffix = value,
            Field::Verb => self.verb = value,
            Field::VerbTense => self.verb_tense = value,
            Field::ObjectPronoun => self.object_pronoun = value,
            Field::ObjectNoun => self.object_noun = value,
            Field::ObjectSuffix => self.object_suffix = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_none())
    }
}

/// Whether a field must, may, or cannot be filled in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    Required,
    Optional,
    Disabled,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Requirement::Required => "required",
            Requirement::Optional => "optional",
            Requirement::Disabled => "disabled",
        })
    }
}

/// One selectable value with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub value: &'static str,
    /// `"form: gloss"`, ready for list rendering.
    pub label: String,
}

impl Candidate {
    fn from_lexeme(entry: &Lexeme) -> Self {
        Self {
            value: entry.form,
            label: format!("{}: {}", entry.form, entry.gloss),
        }
    }

    fn from_morpheme(entry: &Morpheme) -> Self {
        Self {
            value: entry.form,
            label: format!("{}: {}", entry.form, entry.gloss),
        }
    }
}

/// One field's view of the choice-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChoices {
    /// Legal values in this state, in lexicon order.
    pub candidates: Vec<Candidate>,
    /// The corrected current value, if any.
    pub value: Option<&'static str>,
    pub requirement: Requirement,
}

impl FieldChoices {
    fn disabled() -> Self {
        Self {
            candidates: Vec::new(),
            value: None,
            requirement: Requirement::Disabled,
        }
    }

    /// Whether `value` is among the offered candidates.
    pub fn offers(&self, value: &str) -> bool {
        self.candidates.iter().any(|c| c.value == value)
    }
}

/// The complete choice-state over all seven fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceSet {
    pub subject_noun: FieldChoices,
    pub subject_suffix: FieldChoices,
    pub verb: FieldChoices,
    pub verb_tense: FieldChoices,
    pub object_pronoun: FieldChoices,
    pub object_noun: FieldChoices,
    pub object_suffix: FieldChoices,
}

impl ChoiceSet {
    /// Recompute the full choice-state for a draft.
    ///
    /// Pure: the draft is not modified, and equal drafts always produce
    /// equal states. The result is a fixed point, so callers can extract
    /// its values with [`ChoiceSet::draft`] and recompute freely.
    pub fn compute(draft: &SentenceDraft) -> Self {
        // A single sequential pass can clear a value that an earlier step
        // already consumed. Values only shrink from pass to pass, so
        // iterating to a fixed point terminates within a few passes.
        let mut values = draft.clone();
        loop {
            let state = Self::compute_once(&values);
            let next = state.draft();
            if next == values {
                return state;
            }
            values = next;
        }
    }

    fn compute_once(draft: &SentenceDraft) -> Self {
        let lex = lexicon();

        // Sanitize: values outside their category's table reset to empty,
        // survivors canonicalize to the table's 'static forms.
        let subject_noun = draft
            .subject_noun
            .as_deref()
            .and_then(|v| lex.subject_word(v))
            .map(|l| l.form);
        let subject_suffix = draft
            .subject_suffix
            .as_deref()
            .and_then(|v| lex.subject_suffix(v))
            .map(|m| m.form);
        let verb_entry = draft.verb.as_deref().and_then(|v| lex.verb(v));
        let mut verb = verb_entry.map(|(l, _)| l.form);
        let mut verb_class = verb_entry.map(|(_, c)| c);
        let verb_tense = draft
            .verb_tense
            .as_deref()
            .and_then(|v| lex.tense(v))
            .map(|m| m.form);
        let mut object_pronoun = draft
            .object_pronoun
            .as_deref()
            .and_then(|v| lex.object_pronoun(v))
            .map(|m| m.form);
        let mut object_noun = draft
            .object_noun
            .as_deref()
            .and_then(|v| lex.noun(v))
            .map(|l| l.form);
        let mut object_suffix = draft
            .object_suffix
            .as_deref()
            .and_then(|v| lex.object_suffix(v))
            .map(|m| m.form);

        // A suffix that disagrees with the chosen pronoun is dropped; the
        // suffix step below re-offers the agreeing one.
        if let (Some(p), Some(s)) = (object_pronoun, object_suffix) {
            let pronoun_deixis = lex.object_pronoun(p).and_then(|m| m.deixis);
            let suffix_deixis = lex.object_suffix(s).and_then(|m| m.deixis);
            if pronoun_deixis != suffix_deixis {
                object_suffix = None;
            }
        }

        // Subject noun: always open; pronouns listed before nouns.
        let subject_noun_field = FieldChoices {
            candidates: lex
                .subject_pronouns()
                .iter()
                .map(Candidate::from_lexeme)
                .chain(lex.nouns().iter().map(Candidate::from_lexeme))
                .collect(),
            value: subject_noun,
            requirement: Requirement::Required,
        };

        // Subject suffix: meaningless without a noun subject.
        let subject_is_pronoun = subject_noun
            .map(|f| lex.subject_pronoun(f).is_some())
            .unwrap_or(false);
        let subject_suffix_field = if subject_noun.is_none() || subject_is_pronoun {
            FieldChoices::disabled()
        } else {
            FieldChoices {
                candidates: lex
                    .subject_suffixes()
                    .iter()
                    .map(Candidate::from_morpheme)
                    .collect(),
                value: subject_suffix,
                requirement: Requirement::Required,
            }
        };

        // Verb: an object noun forces a transitive stem.
        let verb_field = if object_noun.is_some() {
            if verb_class != Some(VerbClass::Transitive) {
                verb = None;
                verb_class = None;
            }
            FieldChoices {
                candidates: lex
                    .transitive_verbs()
                    .iter()
                    .map(Candidate::from_lexeme)
                    .collect(),
                value: verb,
                requirement: Requirement::Required,
            }
        } else {
            FieldChoices {
                candidates: lex
                    .transitive_verbs()
                    .iter()
                    .chain(lex.intransitive_verbs())
                    .map(Candidate::from_lexeme)
                    .collect(),
                value: verb,
                requirement: Requirement::Required,
            }
        };

        // Verb tense: waits for a verb.
        let verb_tense_field = if verb.is_none() {
            FieldChoices::disabled()
        } else {
            FieldChoices {
                candidates: lex.tenses().iter().map(Candidate::from_morpheme).collect(),
                value: verb_tense,
                requirement: Requirement::Required,
            }
        };

        // Object pronoun: needs a transitive verb. An object noun narrows
        // the field to agreeing third-person forms; otherwise any of the
        // twelve pronouns may optionally attach.
        let object_pronoun_field = if verb.is_none() || verb_class == Some(VerbClass::Intransitive)
        {
            object_pronoun = None;
            FieldChoices::disabled()
        } else if object_noun.is_some() {
            let deixis = object_suffix
                .and_then(|s| lex.object_suffix(s))
                .and_then(|m| m.deixis);
            FieldChoices {
                candidates: lex
                    .third_person_object_pronouns(deixis)
                    .into_iter()
                    .map(Candidate::from_morpheme)
                    .collect(),
                value: object_pronoun,
                requirement: Requirement::Required,
            }
        } else {
            FieldChoices {
                candidates: lex
                    .object_pronouns()
                    .iter()
                    .map(Candidate::from_morpheme)
                    .collect(),
                value: object_pronoun,
                requirement: Requirement::Optional,
            }
        };

        // Object noun: impossible after an intransitive verb or a first
        // or second person object pronoun.
        let pronoun_is_third = object_pronoun
            .and_then(|p| lex.object_pronoun(p))
            .map(|m| m.deixis.is_some())
            .unwrap_or(false);
        let object_noun_field = if verb_class == Some(VerbClass::Intransitive)
            || (object_pronoun.is_some() && !pronoun_is_third)
        {
            object_noun = None;
            FieldChoices::disabled()
        } else {
            FieldChoices {
                candidates: lex.nouns().iter().map(Candidate::from_lexeme).collect(),
                value: object_noun,
                requirement: Requirement::Required,
            }
        };

        // Object suffix: follows the object noun; with a pronoun chosen
        // only the agreeing suffix remains on offer.
        let object_suffix_field = if object_noun.is_none() {
            FieldChoices::disabled()
        } else if let Some(pronoun) = object_pronoun {
            let matching = object::matching_suffix(pronoun);
            let value = match (object_suffix, matching) {
                (Some(s), Some(m)) if s == m.form => Some(m.form),
                _ => None,
            };
            FieldChoices {
                candidates: matching.map(Candidate::from_morpheme).into_iter().collect(),
                value,
                requirement: Requirement::Required,
            }
        } else {
            FieldChoices {
                candidates: lex
                    .object_suffixes()
                    .iter()
                    .map(Candidate::from_morpheme)
                    .collect(),
                value: object_suffix,
                requirement: Requirement::Required,
            }
        };

        Self {
            subject_noun: subject_noun_field,
            subject_suffix: subject_suffix_field,
            verb: verb_field,
            verb_tense: verb_tense_field,
            object_pronoun: object_pronoun_field,
            object_noun: object_noun_field,
            object_suffix: object_suffix_field,
        }
    }

    pub fn field(&self, field: Field) -> &FieldChoices {
        match field {
            Field::SubjectNoun => &self.subject_noun,
            Field::SubjectSuffix => &self.subject_suffix,
            Field::Verb => &self.verb,
            Field::VerbTense => &self.verb_tense,
            Field::ObjectPronoun => &self.object_pronoun,
            Field::ObjectNoun => &self.object_noun,
            Field::ObjectSuffix => &self.object_suffix,
        }
    }

    /// Extract the corrected values, suitable for formatting or for the
    /// next [`ChoiceSet::compute`].
    pub fn draft(&self) -> SentenceDraft {
        let mut out = SentenceDraft::default();
        for field in Field::ALL {
            out.set(field, self.field(field).value.map(str::to_string));
        }
        out
    }

    /// Whether every required field holds a value.
    pub fn complete(&self) -> bool {
        Field::ALL.iter().all(|&f| {
            let fc = self.field(f);
            fc.requirement != Requirement::Required || fc.value.is_some()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(fields: &[(Field, &str)]) -> SentenceDraft {
        let mut d = SentenceDraft::default();
        for (field, value) in fields {
            d.set(*field, Some(value.to_string()));
        }
        d
    }

    #[test]
    fn empty_draft_baseline() {
        let state = ChoiceSet::compute(&SentenceDraft::default());
        assert_eq!(state.subject_noun.requirement, Requirement::Required);
        assert_eq!(state.subject_noun.candidates.len(), 45);
        assert_eq!(state.subject_suffix.requirement, Requirement::Disabled);
        assert_eq!(state.verb.requirement, Requirement::Required);
        assert_eq!(state.verb.candidates.len(), 36);
        assert_eq!(state.verb_tense.requirement, Requirement::Disabled);
        assert_eq!(state.object_pronoun.requirement, Requirement::Disabled);
        assert_eq!(state.object_noun.requirement, Requirement::Required);
        assert_eq!(state.object_noun.candidates.len(), 33);
        assert_eq!(state.object_suffix.requirement, Requirement::Disabled);
        assert!(!state.complete());
    }

    #[test]
    fn candidates_carry_gloss_labels() {
        let state = ChoiceSet::compute(&SentenceDraft::default());
        assert_eq!(state.subject_noun.candidates[0].label, "nüü: I");
        assert!(
            state
                .subject_noun
                .candidates
                .iter()
                .any(|c| c.label == "isha': coyote")
        );
    }

    #[test]
    fn unknown_values_reset_to_empty() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::SubjectNoun, "horse"),
            (Field::Verb, "gallop"),
            (Field::ObjectSuffix, "zz"),
        ]));
        assert!(state.draft().is_empty());
    }

    #[test]
    fn noun_subject_enables_suffix() {
        let state = ChoiceSet::compute(&draft(&[(Field::SubjectNoun, "pugu")]));
        assert_eq!(state.subject_suffix.requirement, Requirement::Required);
        assert_eq!(state.subject_suffix.candidates.len(), 2);

        let state = ChoiceSet::compute(&draft(&[(Field::SubjectNoun, "nüü")]));
        assert_eq!(state.subject_suffix.requirement, Requirement::Disabled);
    }

    #[test]
    fn pronoun_subject_clears_stale_suffix() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::SubjectNoun, "nüü"),
            (Field::SubjectSuffix, "ii"),
        ]));
        assert_eq!(state.subject_suffix.value, None);
        assert!(state.subject_suffix.candidates.is_empty());
    }

    #[test]
    fn verb_enables_tense_and_pronoun() {
        let state = ChoiceSet::compute(&draft(&[(Field::Verb, "puni")]));
        assert_eq!(state.verb_tense.requirement, Requirement::Required);
        assert_eq!(state.verb_tense.candidates.len(), 6);
        assert_eq!(state.object_pronoun.requirement, Requirement::Optional);
        assert_eq!(state.object_pronoun.candidates.len(), 12);
    }

    #[test]
    fn intransitive_verb_disables_object_fields() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "katü"),
            (Field::ObjectPronoun, "ma"),
        ]));
        assert_eq!(state.object_pronoun.requirement, Requirement::Disabled);
        assert_eq!(state.object_pronoun.value, None);
        assert_eq!(state.object_noun.requirement, Requirement::Disabled);
    }

    #[test]
    fn object_noun_forces_transitive_verb() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "katü"),
            (Field::ObjectNoun, "pugu"),
        ]));
        assert_eq!(state.verb.value, None);
        assert_eq!(state.verb.candidates.len(), 14);
        assert!(!state.verb.offers("katü"));
        assert!(state.verb.offers("puni"));
    }

    #[test]
    fn object_noun_narrows_pronouns_to_third_person() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "puni"),
            (Field::ObjectNoun, "pugu"),
        ]));
        assert_eq!(state.object_pronoun.requirement, Requirement::Required);
        let forms: Vec<&str> = state
            .object_pronoun
            .candidates
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(forms, ["ma", "mai", "a", "ai", "u", "ui"]);
    }

    #[test]
    fn chosen_suffix_filters_pronoun_candidates() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "puni"),
            (Field::ObjectNoun, "pugu"),
            (Field::ObjectSuffix, "oka"),
        ]));
        let forms: Vec<&str> = state
            .object_pronoun
            .candidates
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(forms, ["u", "ui"]);
    }

    #[test]
    fn chosen_pronoun_narrows_suffix_to_match() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "puni"),
            (Field::ObjectNoun, "pugu"),
            (Field::ObjectPronoun, "ma"),
        ]));
        assert_eq!(state.object_suffix.requirement, Requirement::Required);
        let forms: Vec<&str> = state
            .object_suffix
            .candidates
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(forms, ["eika"]);
        assert_eq!(state.object_suffix.value, None);
    }

    #[test]
    fn mismatched_suffix_is_cleared() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "puni"),
            (Field::ObjectNoun, "pugu"),
            (Field::ObjectPronoun, "ma"),
            (Field::ObjectSuffix, "oka"),
        ]));
        assert_eq!(state.object_suffix.value, None);
        assert_eq!(state.object_suffix.candidates.len(), 1);
        assert!(state.object_suffix.offers("eika"));
    }

    #[test]
    fn agreeing_suffix_is_kept() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "puni"),
            (Field::ObjectNoun, "pugu"),
            (Field::ObjectPronoun, "ma"),
            (Field::ObjectSuffix, "eika"),
        ]));
        assert_eq!(state.object_suffix.value, Some("eika"));
        assert!(state.complete());
    }

    #[test]
    fn first_person_pronoun_disables_object_noun() {
        let state = ChoiceSet::compute(&draft(&[
            (Field::Verb, "puni"),
            (Field::ObjectPronoun, "i"),
        ]));
        assert_eq!(state.object_pronoun.value, Some("i"));
        assert_eq!(state.object_noun.requirement, Requirement::Disabled);
        assert_eq!(state.object_suffix.requirement, Requirement::Disabled);
    }

    #[test]
    fn recompute_on_own_values_is_stable() {
        let drafts = [
            SentenceDraft::default(),
            draft(&[(Field::SubjectNoun, "isha'"), (Field::Verb, "katü")]),
            draft(&[
                (Field::Verb, "puni"),
                (Field::ObjectPronoun, "i"),
                (Field::ObjectNoun, "pugu"),
            ]),
            draft(&[
                (Field::SubjectNoun, "uhu"),
                (Field::SubjectSuffix, "ii"),
                (Field::Verb, "katü"),
                (Field::ObjectNoun, "pugu"),
                (Field::ObjectSuffix, "oka"),
            ]),
        ];
        for d in drafts {
            let first = ChoiceSet::compute(&d);
            let second = ChoiceSet::compute(&first.draft());
            assert_eq!(first, second, "state not stable for {d:?}");
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(format!("{field}"), field.name());
        }
        assert_eq!(Field::ALL.len(), 7);
    }
}
