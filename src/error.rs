use thiserror::Error;

/// Failures while reading or updating the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("no document available")]
    NoDocument,
    #[error("missing toggle control #{0}")]
    ControlNotFound(String),
    #[error("dom error: {0}")]
    Dom(String),
}
