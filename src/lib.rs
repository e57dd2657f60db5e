//! # yadoha
//!
//! A sentence builder for Owens Valley Paiute (Eastern Mono): morphology,
//! agreement, and word order over a small curated lexicon, with random
//! sentence sampling and LLM-backed English translation for evaluation.
//!
//! ## Architecture
//!
//! - **Lexicon** (`lexicon`): static word and morpheme tables with glosses
//! - **Morphology** (`morph`): subject/verb/object word forms, lenis
//!   mutation, and glottal-stop epenthesis
//! - **Agreement** (`choices`): recomputes every field's candidates and
//!   requirement level after each choice
//! - **Formatting** (`sentence`): word order and surface realization
//! - **Sampling** (`sampler`): guided random drafts that always format
//! - **Translation** (`translate`, `eval`): structured glosses to an
//!   OpenAI-compatible endpoint, logged to CSV
//!
//! ## Library usage
//!
//! ```
//! use yadoha::choices::SentenceDraft;
//! use yadoha::sentence::format_sentence;
//!
//! let draft = SentenceDraft {
//!     subject_noun: Some("isha'".into()),
//!     subject_suffix: Some("ii".into()),
//!     verb: Some("puni".into()),
//!     verb_tense: Some("dü".into()),
//!     object_pronoun: Some("ma".into()),
//!     object_noun: None,
//!     object_suffix: None,
//! };
//! let sentence = format_sentence(&draft).unwrap();
//! assert_eq!(sentence.text(), "isha'-ii ma-buni-dü ");
//! ```

pub mod choices;
pub mod error;
pub mod eval;
pub mod lexicon;
pub mod morph;
pub mod sampler;
pub mod sentence;
pub mod translate;
