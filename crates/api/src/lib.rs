//! Public API traits and types for the tlskex key-exchange engine
//!
//! This crate provides the public API surface shared by every key-exchange
//! variant: the [`KeyExchange`] contract, the credential and context
//! collaborators it talks to, the wire-level algorithm identifiers, and the
//! fatal [`Error`] type with its TLS alert mapping.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{AlertDescription, Error, Result};
pub use types::*;

pub use traits::{
    Credentials, CryptoRngCore, KeyExchange, SignerCredentials, TlsContext, VerifyingKey,
};

// Re-export trait modules for direct access
pub use traits::{context, credentials, key_exchange};
