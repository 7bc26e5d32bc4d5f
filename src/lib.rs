//! File-backed credentials provider.
//!
//! Reads a JSON credential file produced by an external issuing process and
//! exposes it through the [`provider::ProvideCredentials`] capability, so it
//! can be plugged in anywhere the surrounding SDK expects a credentials
//! source. Each retrieval re-reads the file; nothing is cached or watched.

pub mod credentials;
pub mod error;
pub mod provider;
