//! Credential providers.
//!
//! The [`ProvideCredentials`] trait is the capability the surrounding SDK
//! consumes: something that can supply an access key, secret key, and
//! session token on demand. A single concrete implementation exists, the
//! file-backed [`FileCredentialsProvider`].

mod file;

pub use file::FileCredentialsProvider;

use async_trait::async_trait;

use crate::credentials::Credentials;
use crate::error::CredentialsError;

/// Something that can supply credentials on demand.
///
/// Retrieval takes `&self` and implementations hold no mutable state, so a
/// provider can be shared across tasks (e.g. behind an
/// `Arc<dyn ProvideCredentials>`) and invoked concurrently.
#[async_trait]
pub trait ProvideCredentials: Send + Sync {
    /// Retrieve a fresh set of credentials.
    ///
    /// Every call is independent of prior calls; implementations do not
    /// cache results.
    async fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}
