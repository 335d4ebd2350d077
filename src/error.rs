use std::path::PathBuf;
use thiserror::Error;

use crate::model::Identifier;

/// The main error type for boxdiff operations.
#[derive(Debug, Error)]
pub enum BoxdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One side of a delta repeats an entity identifier, so its children
    /// cannot be paired with the other side.
    ///
    /// This is a precondition violation, not a transient failure; the input
    /// has to be fixed before the delta can be computed.
    #[error("Duplicate ID {id} among the children of {parent}")]
    DuplicateId { parent: Identifier, id: Identifier },

    #[error("Unsupported level: {0}")]
    UnsupportedLevel(String),
}
