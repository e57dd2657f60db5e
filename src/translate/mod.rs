//! English translation via an OpenAI-compatible chat-completions service.
//!
//! The crate's own obligation ends at the structured gloss: an ordered
//! list of part-of-speech records carrying dictionary glosses and
//! features. The records are sent, few-shot style, to the external
//! service, and whatever prose comes back is returned verbatim as
//! opaque, untrusted text. One synchronous request, a 10 second
//! timeout, no retries.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::choices::SentenceDraft;
use crate::lexicon::lexicon;

/// Errors from the translation subsystem.
#[derive(Debug, Error, Diagnostic)]
pub enum TranslateError {
    #[error("no API key configured for {base_url}")]
    #[diagnostic(
        code(yadoha::translate::unconfigured),
        help(
            "Set OPENAI_API_KEY in the environment or a .env file, or \
             point OPENAI_BASE_URL at a service that needs no key."
        )
    )]
    Unconfigured { base_url: String },

    #[error("translation request failed: {message}")]
    #[diagnostic(
        code(yadoha::translate::request_failed),
        help("Check network access, OPENAI_BASE_URL, and the API key.")
    )]
    RequestFailed { message: String },

    #[error("failed to parse translation response: {message}")]
    #[diagnostic(
        code(yadoha::translate::parse_error),
        help("The service returned an unexpected response format.")
    )]
    ParseError { message: String },

    #[error("translation response contained no choices")]
    #[diagnostic(
        code(yadoha::translate::empty_response),
        help("The model returned an empty choice list; try another model.")
    )]
    EmptyResponse,
}

pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

// ---------------------------------------------------------------------------
// Structured gloss
// ---------------------------------------------------------------------------

/// Grammatical role of a gloss record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Subject,
    Object,
    Verb,
}

/// One part-of-speech record in the structured gloss sent for
/// translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossRecord {
    pub part_of_speech: PartOfSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<bool>,
    /// The English dictionary gloss, or the raw surface form when the
    /// word is not in the lexicon.
    pub word: String,
    /// `"proximal"` or `"distal"`, from the demonstrative suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tense: Option<String>,
}

/// Pronoun glosses containing any of these mark the object as plural.
const PLURAL_KEYWORDS: [&str; 6] = ["plural", "you all", "they", "them", "we", "us"];

/// Build the structured English gloss for a draft.
///
/// Total over arbitrary drafts: unknown forms pass through as raw
/// words, and features that cannot be resolved are simply omitted. The
/// object record is skipped entirely when there is neither an object
/// noun nor an object pronoun. When both are present the noun supplies
/// the word and the pronoun contributes only its plural feature.
pub fn english_structure(draft: &SentenceDraft) -> Vec<GlossRecord> {
    let lex = lexicon();
    let mut records = Vec::new();

    let subject_form = draft.subject_noun.as_deref().unwrap_or("");
    let subject = if let Some(noun) = lex.noun(subject_form) {
        GlossRecord {
            part_of_speech: PartOfSpeech::Subject,
            plural: None,
            word: noun.gloss.to_string(),
            positional: draft
                .subject_suffix
                .as_deref()
                .and_then(|s| lex.subject_suffix(s))
                .map(|m| m.gloss.to_string()),
            tense: None,
        }
    } else if let Some(pronoun) = lex.subject_pronoun(subject_form) {
        GlossRecord {
            part_of_speech: PartOfSpeech::Subject,
            plural: None,
            word: pronoun.gloss.to_string(),
            positional: None,
            tense: None,
        }
    } else {
        GlossRecord {
            part_of_speech: PartOfSpeech::Subject,
            plural: None,
            word: subject_form.to_string(),
            positional: None,
            tense: None,
        }
    };
    records.push(subject);

    let pronoun_gloss = draft
        .object_pronoun
        .as_deref()
        .and_then(|p| lex.object_pronoun(p))
        .map(|m| m.gloss);
    let plural = pronoun_gloss
        .is_some_and(|g| PLURAL_KEYWORDS.iter().any(|kw| g.contains(kw)))
        .then_some(true);
    let positional = draft
        .object_suffix
        .as_deref()
        .and_then(|s| lex.object_suffix(s))
        .map(|m| m.gloss.to_string());

    let object_noun = draft.object_noun.as_deref();
    if let Some(noun) = object_noun.and_then(|form| lex.noun(form)) {
        records.push(GlossRecord {
            part_of_speech: PartOfSpeech::Object,
            plural,
            word: noun.gloss.to_string(),
            positional,
            tense: None,
        });
    } else if object_noun.map(str::is_empty).unwrap_or(true) {
        if let Some(gloss) = pronoun_gloss {
            records.push(GlossRecord {
                part_of_speech: PartOfSpeech::Object,
                plural,
                word: gloss.to_string(),
                positional: None,
                tense: None,
            });
        }
    } else if let Some(form) = object_noun {
        if !form.trim().is_empty() {
            records.push(GlossRecord {
                part_of_speech: PartOfSpeech::Object,
                plural,
                word: form.to_string(),
                positional,
                tense: None,
            });
        }
    }

    let verb_form = draft.verb.as_deref().unwrap_or("");
    let verb_word = lex
        .verb(verb_form)
        .map(|(l, _)| l.gloss.to_string())
        .unwrap_or_else(|| verb_form.to_string());
    records.push(GlossRecord {
        part_of_speech: PartOfSpeech::Verb,
        plural: None,
        word: verb_word,
        positional: None,
        tense: draft
            .verb_tense
            .as_deref()
            .and_then(|t| lex.tense(t))
            .map(|m| m.gloss.to_string()),
    });

    records
}

// ---------------------------------------------------------------------------
// Chat-completions client
// ---------------------------------------------------------------------------

const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str = "You are an assistant for translating structured \
sentences into simple natural English sentences.";

/// Configuration for the translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Bearer token; optional for self-hosted endpoints.
    pub api_key: Option<String>,
    /// Model name to request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: OPENAI_DEFAULT_BASE_URL.into(),
            api_key: None,
            model: "gpt-4o-mini".into(),
            timeout_secs: 10,
        }
    }
}

impl TranslatorConfig {
    /// Read configuration from `OPENAI_BASE_URL`, `OPENAI_API_KEY`, and
    /// `OPENAI_MODEL`, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            timeout_secs: defaults.timeout_secs,
        }
    }
}

/// A chat message in the request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// The external translation collaborator, as consumed by this crate:
/// a draft goes in, opaque English prose comes out.
pub trait TranslationService {
    fn translate(&self, draft: &SentenceDraft) -> TranslateResult<String>;
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(TranslatorConfig::from_env())
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a draft: gloss it, wrap it in the few-shot prompt, and
    /// return the model's prose.
    pub fn translate(&self, draft: &SentenceDraft) -> TranslateResult<String> {
        let structure = english_structure(draft);
        let mut messages = vec![ChatMessage::new("system", SYSTEM_PROMPT)];
        for (example, answer) in Self::examples() {
            messages.push(ChatMessage::new("user", gloss_json(&example)?));
            messages.push(ChatMessage::new("assistant", answer));
        }
        messages.push(ChatMessage::new("user", gloss_json(&structure)?));
        self.chat(&messages)
    }

    /// Fixed few-shot exchanges teaching the gloss-to-prose mapping.
    fn examples() -> [(Vec<GlossRecord>, &'static str); 3] {
        let record = |part_of_speech, word: &str, positional: Option<&str>, plural, tense: Option<&str>| {
            GlossRecord {
                part_of_speech,
                plural,
                word: word.to_string(),
                positional: positional.map(str::to_string),
                tense: tense.map(str::to_string),
            }
        };
        [
            (
                vec![
                    record(PartOfSpeech::Subject, "wood", Some("proximal"), None, None),
                    record(PartOfSpeech::Object, "dog", Some("proximal"), None, None),
                    record(PartOfSpeech::Verb, "see", None, None, Some("present ongoing (-ing)")),
                ],
                "This wood is seeing this dog.",
            ),
            (
                vec![
                    record(PartOfSpeech::Subject, "cup", Some("proximal"), None, None),
                    record(PartOfSpeech::Object, "cup", Some("distal"), Some(true), None),
                    record(PartOfSpeech::Verb, "eat", None, None, Some("future (will)")),
                ],
                "This cup will eat those cups.",
            ),
            (
                vec![
                    record(PartOfSpeech::Subject, "pinenuts", Some("distal"), None, None),
                    record(PartOfSpeech::Object, "horse", Some("distal"), None, None),
                    record(PartOfSpeech::Verb, "see", None, None, Some("future (will)")),
                ],
                "Those pinenuts will see that horse.",
            ),
        ]
    }

    /// Send one chat-completions request and return the last choice's
    /// message content.
    pub fn chat(&self, messages: &[ChatMessage]) -> TranslateResult<String> {
        if self.config.api_key.is_none() && self.config.base_url == OPENAI_DEFAULT_BASE_URL {
            return Err(TranslateError::Unconfigured {
                base_url: self.config.base_url.clone(),
            });
        }

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs))
            .build();

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": 0.0,
        });
        let body_str = serde_json::to_string(&body).map_err(|e| TranslateError::RequestFailed {
            message: format!("JSON serialize error: {e}"),
        })?;

        let mut request = agent.post(&url).set("Content-Type", "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.set("Authorization", &format!("Bearer {key}"));
        }

        let resp = request
            .send_string(&body_str)
            .map_err(|e: ureq::Error| TranslateError::RequestFailed {
                message: e.to_string(),
            })?;

        let resp_str = resp.into_string().map_err(|e| TranslateError::ParseError {
            message: e.to_string(),
        })?;

        let json: serde_json::Value =
            serde_json::from_str(&resp_str).map_err(|e| TranslateError::ParseError {
                message: e.to_string(),
            })?;

        let choices = json["choices"]
            .as_array()
            .filter(|c| !c.is_empty())
            .ok_or(TranslateError::EmptyResponse)?;
        choices
            .last()
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(str::to_string)
            .ok_or_else(|| TranslateError::ParseError {
                message: "missing message content".into(),
            })
    }
}

impl TranslationService for Translator {
    fn translate(&self, draft: &SentenceDraft) -> TranslateResult<String> {
        Translator::translate(self, draft)
    }
}

fn gloss_json(records: &[GlossRecord]) -> TranslateResult<String> {
    serde_json::to_string(records).map_err(|e| TranslateError::RequestFailed {
        message: format!("JSON serialize error: {e}"),
    })
}
