//! Error taxonomy shared by the calculator, the list controller and transports.
//!
//! Three kinds of failure matter to callers:
//!
//! - [`PlaydeskError::InvalidInput`]: the calculator was given a start time that
//!   does not parse, or a minute value that is not a finite non-negative number.
//! - [`PlaydeskError::Cancelled`]: a request was superseded by a newer one. Never
//!   user-visible; the list controller filters it out before touching state.
//! - [`PlaydeskError::Transport`] (and the wrapped `Http`/`Json` variants): the
//!   backend could not be reached or answered with something unusable.
//!
//! Application edges (commands, configuration) convert into `anyhow::Error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaydeskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlaydeskError {
    /// Whether this error only signals that a newer request took over.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PlaydeskError::Cancelled)
    }

    /// Whether this error came from talking to the backend.
    pub fn is_transport(&self) -> bool {
        matches!(self, PlaydeskError::Transport(_) | PlaydeskError::Http(_) | PlaydeskError::Json(_))
    }
}

pub type Result<T, E = PlaydeskError> = std::result::Result<T, E>;
