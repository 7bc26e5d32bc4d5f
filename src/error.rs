//! Errors surfaced by credential retrieval.

use std::io;
use std::path::PathBuf;

/// Failure modes of a credential retrieval.
///
/// Both variants are terminal for the call. The provider performs no retry
/// or recovery of its own; falling back to another provider or retrying is
/// the caller's decision.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// The credential file could not be read.
    #[error("failed to read credentials file {}", path.display())]
    FileRead {
        /// The path the provider attempted to read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contents were not a valid credential record.
    #[error("failed to parse credentials file")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}
