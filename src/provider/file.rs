//! File-backed credentials provider.
//!
//! Reads a JSON file written by an external credential-issuing process:
//!
//! ```json
//! {
//!     "Version": 1,
//!     "AccessKeyId": "AKIA...",
//!     "SecretAccessKey": "...",
//!     "SessionToken": "...",
//!     "Expiration": "2025-10-28T18:05:26Z"
//! }
//! ```
//!
//! `Version` and any other unrecognized fields are ignored.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ProvideCredentials;
use crate::credentials::Credentials;
use crate::error::CredentialsError;

/// On-disk record shape. Missing fields default rather than error, so a
/// partial record (no session token, no expiration) parses fine.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CredentialFile {
    #[serde(default)]
    access_key_id: String,
    #[serde(default)]
    secret_access_key: String,
    #[serde(default)]
    session_token: String,
    #[serde(default)]
    expiration: Option<DateTime<Utc>>,
}

/// Provider that reads credentials from a JSON file on every call.
///
/// The path is captured at construction and no I/O happens until retrieval.
/// Calls are stateless with respect to one another: the file is re-read each
/// time and nothing is cached, so an updated file takes effect on the next
/// retrieval.
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    path: PathBuf,
}

impl FileCredentialsProvider {
    /// Create a provider reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this provider reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_credentials(&self) -> Result<Credentials, CredentialsError> {
        tracing::debug!(path = %self.path.display(), "reading credentials file");

        let content = std::fs::read(&self.path).map_err(|source| CredentialsError::FileRead {
            path: self.path.clone(),
            source,
        })?;

        let record: CredentialFile = serde_json::from_slice(&content)
            .map_err(|source| CredentialsError::Parse { source })?;

        Ok(Credentials {
            access_key_id: record.access_key_id,
            secret_access_key: record.secret_access_key,
            session_token: record.session_token,
            expiration: record.expiration,
        })
    }
}

#[async_trait]
impl ProvideCredentials for FileCredentialsProvider {
    async fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        // Single bounded local read; no need to off-load to a blocking pool.
        self.read_credentials()
    }
}
