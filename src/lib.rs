//! # tlskex
//!
//! The key-exchange sub-protocol of a TLS handshake, for the finite-field
//! Diffie-Hellman cipher suites.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tlskex = "0.3"
//! ```
//!
//! ## Features
//!
//! - `dh` (default): DHE and DH_anon key exchanges
//! - `serde`: serialization of configuration and identifiers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tlskex-api`]: The key-exchange contract, collaborator traits and errors
//! - [`tlskex-params`]: Group primes and size constants
//! - [`tlskex-dh`]: The Diffie-Hellman key exchanges

// Core re-exports (always available)
pub use tlskex_api as api;
pub use tlskex_params as params;

// Feature-gated re-exports
#[cfg(feature = "dh")]
pub use tlskex_dh as dh;

/// Common imports for tlskex users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{AlertDescription, Error, Result};

    // Re-export core traits
    pub use crate::api::{Credentials, KeyExchange, SignerCredentials, TlsContext, VerifyingKey};

    // Re-export handshake types
    pub use crate::api::{
        Certificate, ProtocolVersion, Role, SecurityParameters, SharedSecret,
        SignatureAndHashAlgorithm,
    };

    #[cfg(feature = "dh")]
    pub use crate::dh::{
        DhAnonKeyExchange, DhConfig, DhParameters, DheKeyExchange, EcdsaP256Credentials,
        HandshakeContext, NamedGroup,
    };
}
