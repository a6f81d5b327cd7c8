//! Error types for the strict (hard-failure) entry points.
//!
//! Most of the public surface is fail-soft and never returns these; they
//! surface only where a caller explicitly asks for the strict variant.

use thiserror::Error;

/// Errors raised at the structured decode/encode boundary.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input text was not valid JSON, or serde_json refused to render.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No decode alternative matched the data at `path`.
    #[error("decode error at {path}: {message}")]
    Decode { path: String, message: String },

    /// A boxed value could not be classified for encoding.
    #[error("encode error at {path}: {message}")]
    Encode { path: String, message: String },
}

impl JsonError {
    pub(crate) fn decode(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        JsonError::Decode {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }

    pub(crate) fn encode(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        JsonError::Encode {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }
}

/// Convenience alias used throughout jsonkit-core.
pub type Result<T> = std::result::Result<T, JsonError>;
