//! Sentence assembly: the cross-word agreement check, word order, and
//! rendering.

use crate::choices::SentenceDraft;
use crate::error::{MorphError, MorphResult};
use crate::morph::{LexemePolicy, Object, Subject, Verb, Word, object};
use crate::morph::word::WordDetails;

/// A fully validated sentence, words already in surface order.
#[derive(Debug, Clone)]
pub struct Sentence {
    words: Vec<Word>,
}

impl Sentence {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Morpheme decompositions, one per word, in surface order.
    pub fn details(&self) -> Vec<WordDetails> {
        self.words.iter().map(Word::details).collect()
    }

    /// The rendered sentence. Every word is followed by a single space,
    /// including the last one.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for word in &self.words {
            out.push_str(&word.surface());
            out.push(' ');
        }
        out
    }
}

/// Validate a draft and assemble its words in surface order.
///
/// Unknown verb stems are tolerated (lenient policy); see
/// [`format_sentence_with_policy`] to reject them instead.
pub fn format_sentence(draft: &SentenceDraft) -> MorphResult<Sentence> {
    format_sentence_with_policy(draft, LexemePolicy::Lenient)
}

/// Validate a draft and assemble its words in surface order.
///
/// Word order depends on the subject. Pronoun subjects encliticize to
/// the first word; noun subjects lead:
///
/// ```text
/// noun subject:     subject [object] verb
/// pronoun subject:  object subject verb   |   verb subject
/// ```
///
/// The object is built only when an object noun is present; an object
/// suffix without an agreeing third-person pronoun is an agreement
/// error.
pub fn format_sentence_with_policy(
    draft: &SentenceDraft,
    policy: LexemePolicy,
) -> MorphResult<Sentence> {
    let subject = Subject::new(
        draft.subject_noun.as_deref().unwrap_or(""),
        draft.subject_suffix.as_deref(),
    )?;
    let verb = Verb::with_policy(
        draft.verb.as_deref().unwrap_or(""),
        draft.verb_tense.as_deref().unwrap_or(""),
        draft.object_pronoun.as_deref(),
        policy,
    )?;

    if let Some(suffix) = draft.object_suffix.as_deref() {
        let matching = object::matching_third_person_pronouns(Some(suffix))?;
        let pronoun = draft.object_pronoun.as_deref();
        if !matching.iter().any(|m| Some(m.form) == pronoun) {
            return Err(MorphError::AgreementMismatch {
                pronoun: pronoun.unwrap_or("none").to_string(),
                suffix: suffix.to_string(),
            });
        }
    }

    let object = match draft.object_noun.as_deref() {
        Some(noun) => Some(Object::new(noun, draft.object_suffix.as_deref())?),
        None => None,
    };

    let pronoun_subject = subject.is_pronoun();
    let subject = Word::Subject(subject);
    let verb = Word::Verb(verb);
    let words = match (pronoun_subject, object) {
        (true, Some(object)) => vec![Word::Object(object), subject, verb],
        (true, None) => vec![verb, subject],
        (false, Some(object)) => vec![subject, Word::Object(object), verb],
        (false, None) => vec![subject, verb],
    };
    Ok(Sentence { words })
}
