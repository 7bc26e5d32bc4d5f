//! Credential value type shared by providers.

use std::fmt;

use chrono::{DateTime, Utc};

/// A set of credentials returned by a provider.
///
/// Constructed fresh on every retrieval; the caller owns the value
/// exclusively. The expiry instant is optional — `None` means the
/// credentials are treated as non-expiring.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Access key identifier.
    pub access_key_id: String,

    /// Secret access key.
    pub secret_access_key: String,

    /// Session token; empty when the credentials are not session-scoped.
    pub session_token: String,

    /// Expiry instant, if one is defined.
    pub expiration: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Whether these credentials carry a defined expiry instant.
    pub fn can_expire(&self) -> bool {
        self.expiration.is_some()
    }

    /// The expiry instant, or the zero value (Unix epoch) when none is set.
    ///
    /// Only meaningful when [`can_expire`](Self::can_expire) returns true.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expiration.unwrap_or_default()
    }
}

// Key material must not leak through debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &"********")
            .field("secret_access_key", &"********")
            .field("session_token", &"********")
            .field("expiration", &self.expiration)
            .finish()
    }
}
