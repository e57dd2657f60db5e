//! Morpheme validation: the three word categories and their surface rules.
//!
//! Every OVP sentence is built from at most three words, each a value
//! object that can only be constructed in a valid state:
//!
//! ```text
//! Subject  =  pronoun  |  noun-SUFFIX(ii/uu)
//! Verb     =  [object_pronoun-]stem-TENSE      (prefix triggers lenis)
//! Object   =  noun-SUFFIX(eika/oka)            (epenthetic n)
//! ```
//!
//! Construction validates category membership and affix rules; rendering
//! applies the morphophonology (lenis mutation, glottal-stop epenthesis).
//! Cross-word agreement is not checked here. That is the job of the
//! choices engine and the sentence formatter.

pub mod object;
pub mod subject;
pub mod verb;
pub mod word;

pub use object::Object;
pub use subject::Subject;
pub use verb::{LexemePolicy, Verb, lenis};
pub use word::{MorphemeDetail, MorphemeKind, Word, WordDetails, WordKind};
