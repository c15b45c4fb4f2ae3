use crate::models::Answer;
use std::fmt;
use thiserror::Error;

/// Pipeline stage that failed while serving a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Embedding the query or searching the index.
    Retrieval,
    /// The completion call (chat or summary).
    Generation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Retrieval => f.write_str("Retrieval"),
            FailureKind::Generation => f.write_str("Generation"),
        }
    }
}

/// A contained failure of a summarize or answer call.
///
/// Carries the active model so the caller can render it inline
/// (`Display`) or branch on `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error ({model}): {message}")]
pub struct PipelineFailure {
    pub kind: FailureKind,
    pub model: String,
    pub message: String,
}

impl PipelineFailure {
    pub fn retrieval(model: &str, err: &anyhow::Error) -> Self {
        Self::new(FailureKind::Retrieval, model, err)
    }

    pub fn generation(model: &str, err: &anyhow::Error) -> Self {
        Self::new(FailureKind::Generation, model, err)
    }

    fn new(kind: FailureKind, model: &str, err: &anyhow::Error) -> Self {
        Self {
            kind,
            model: model.to_string(),
            // alternate form keeps the whole context chain on one line
            message: format!("{:#}", err),
        }
    }
}

impl From<PipelineFailure> for Answer {
    fn from(failure: PipelineFailure) -> Self {
        Answer {
            answer: failure.to_string(),
            sources: Default::default(),
        }
    }
}
