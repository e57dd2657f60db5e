//! Batch evaluation: sample random sentences, translate each one, and
//! log the pairs to a CSV file.
//!
//! The log is the unit of progress. Every completed pair is flushed to
//! disk before the next sentence is drawn, and a rerun against an
//! existing log picks up at row count, so an interrupted or failed run
//! never repays the translation calls it already made.

use std::path::Path;

use miette::Diagnostic;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sampler;
use crate::sentence;
use crate::translate::TranslationService;

/// Errors from batch evaluation.
#[derive(Debug, Error, Diagnostic)]
pub enum EvalError {
    #[error("failed to read evaluation log: {path}")]
    #[diagnostic(
        code(yadoha::eval::read),
        help(
            "The log exists but could not be parsed as CSV with a \
             sentence,translation header. Move it aside to start fresh."
        )
    )]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write evaluation log: {path}")]
    #[diagnostic(
        code(yadoha::eval::write),
        help("Check that the directory exists and you have write permissions.")
    )]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sampler(#[from] crate::error::SamplerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Morph(#[from] crate::error::MorphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] crate::translate::TranslateError),
}

pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// One logged sentence/translation pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalRow {
    pub sentence: String,
    pub translation: String,
}

/// Read all rows from an evaluation log. A missing file is an empty
/// log, not an error.
pub fn read_rows(path: &Path) -> EvalResult<Vec<EvalRow>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path).map_err(|e| EvalError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| EvalError::Read {
            path: path.display().to_string(),
            source: e,
        })?);
    }
    Ok(rows)
}

fn write_rows(path: &Path, rows: &[EvalRow]) -> EvalResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| EvalError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    for row in rows {
        writer.serialize(row).map_err(|e| EvalError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| EvalError::Write {
        path: path.display().to_string(),
        source: e.into(),
    })
}

/// Top the log at `path` up to `num` sentence/translation pairs.
///
/// Existing rows count toward the total, so rerunning after a crash or
/// a network failure resumes where the last run stopped. The whole log
/// is rewritten after each new pair. Returns the number of rows added.
pub fn evaluate<R, S>(service: &S, num: usize, path: &Path, rng: &mut R) -> EvalResult<usize>
where
    R: Rng + ?Sized,
    S: TranslationService + ?Sized,
{
    let mut rows = read_rows(path)?;
    let start = rows.len();
    for i in start..num {
        tracing::info!(current = i + 1, total = num, "generating sentence");
        let state = sampler::sample_guided(rng)?;
        let draft = state.draft();
        let sentence = sentence::format_sentence(&draft)?;
        let translation = service.translate(&draft)?;
        rows.push(EvalRow {
            sentence: sentence.text(),
            translation,
        });
        write_rows(path, &rows)?;
    }
    Ok(rows.len() - start)
}
