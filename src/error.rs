//! Rich diagnostic error types for the sentence builder.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text so callers know which
//! grammatical rule was violated and how to repair the sentence.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum YadohaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Morph(#[from] MorphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sampler(#[from] SamplerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] crate::translate::TranslateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Eval(#[from] crate::eval::EvalError),
}

pub type YadohaResult<T> = std::result::Result<T, YadohaError>;

// ---------------------------------------------------------------------------
// Morphology errors
// ---------------------------------------------------------------------------

/// A word or sentence violated a morphological or agreement rule.
#[derive(Debug, Error, Diagnostic)]
pub enum MorphError {
    #[error("subject suffix is not allowed with pronoun subject \"{pronoun}\"")]
    #[diagnostic(
        code(yadoha::morph::pronoun_with_suffix),
        help(
            "Pronoun subjects stand alone. Clear the subject suffix, or \
             replace the pronoun with a noun that can carry one."
        )
    )]
    PronounWithSuffix { pronoun: String },

    #[error("subject \"{noun}\" requires a subject suffix")]
    #[diagnostic(
        code(yadoha::morph::missing_subject_suffix),
        help("Noun subjects must carry a proximal (ii) or distal (uu) suffix.")
    )]
    MissingSubjectSuffix { noun: String },

    #[error("unknown subject suffix \"{suffix}\"")]
    #[diagnostic(
        code(yadoha::morph::unknown_subject_suffix),
        help("Valid subject suffixes are ii (proximal) and uu (distal).")
    )]
    UnknownSubjectSuffix { suffix: String },

    #[error("unknown tense suffix \"{tense}\"")]
    #[diagnostic(
        code(yadoha::morph::unknown_tense),
        help("Valid tenses are ku, ti, dü, wei, gaa-wei, and pü.")
    )]
    UnknownTense { tense: String },

    #[error("intransitive verb \"{stem}\" cannot take an object pronoun prefix")]
    #[diagnostic(
        code(yadoha::morph::intransitive_with_object),
        help(
            "Object pronouns prefix transitive verbs only. Clear the object \
             pronoun, or switch to a transitive stem."
        )
    )]
    IntransitiveWithObjectPrefix { stem: String },

    #[error("unrecognized verb stem \"{stem}\"")]
    #[diagnostic(
        code(yadoha::morph::unrecognized_stem),
        help(
            "The stem is in neither the transitive nor the intransitive \
             table. Check the spelling, or construct the verb with \
             LexemePolicy::Lenient to accept it without a gloss."
        )
    )]
    UnrecognizedStem { stem: String },

    #[error("object \"{noun}\" requires an object suffix")]
    #[diagnostic(
        code(yadoha::morph::missing_object_suffix),
        help("Object nouns must carry a proximal (eika) or distal (oka) suffix.")
    )]
    MissingObjectSuffix { noun: String },

    #[error("unknown object suffix \"{suffix}\"")]
    #[diagnostic(
        code(yadoha::morph::unknown_object_suffix),
        help("Valid object suffixes are eika (proximal) and oka (distal).")
    )]
    UnknownObjectSuffix { suffix: String },

    #[error("object pronoun \"{pronoun}\" does not agree with object suffix \"{suffix}\"")]
    #[diagnostic(
        code(yadoha::morph::agreement_mismatch),
        help(
            "An object suffix demands a third-person object pronoun of the \
             same deixis: eika pairs with ma/mai/a/ai, oka with u/ui."
        )
    )]
    AgreementMismatch { pronoun: String, suffix: String },
}

pub type MorphResult<T> = std::result::Result<T, MorphError>;

// ---------------------------------------------------------------------------
// Sampler errors
// ---------------------------------------------------------------------------

/// Random sentence sampling failed.
#[derive(Debug, Error, Diagnostic)]
pub enum SamplerError {
    #[error("sampling made no progress after {attempts} consecutive attempts")]
    #[diagnostic(
        code(yadoha::sampler::exhausted),
        help(
            "The constraint tables always admit a grammatical sentence, so \
             hitting this bound means repeated dead ends in random \
             selection. Retry, or start from a less constrained draft."
        )
    )]
    Exhausted { attempts: u32 },
}

pub type SamplerResult<T> = std::result::Result<T, SamplerError>;
