//! Finite-field Diffie-Hellman key exchange for TLS
//!
//! This crate implements the server and client halves of the DHE and
//! DH_anon key exchanges on top of the [`tlskex_api::KeyExchange`]
//! contract:
//!
//! - [`codec`]: ServerDHParams, DigitallySigned and ClientDiffieHellmanPublic
//!   wire formats
//! - [`dh`]: group parameters, ephemeral key pairs, peer value validation
//! - [`transcript`] and [`signer`]: the signed transcript digest
//! - [`exchange`]: the key-exchange variants themselves
//! - [`ecdsa`]: P-256 server credentials
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use std::sync::Arc;
//! use rand::rngs::OsRng;
//! use tlskex_api::{Credentials, KeyExchange, ProtocolVersion, SecurityParameters};
//! use tlskex_dh::{
//!     DhConfig, DhParameters, DheKeyExchange, EcdsaP256Credentials, HandshakeContext, NamedGroup,
//! };
//!
//! let params = SecurityParameters::new([1; 32], [2; 32], ProtocolVersion::Tls12);
//! let credentials = Arc::new(EcdsaP256Credentials::generate(&mut OsRng));
//! let group = Arc::new(DhParameters::named(NamedGroup::Rfc3526Modp2048)?);
//!
//! let mut server = DheKeyExchange::server(HandshakeContext::new(OsRng, params.clone()), group);
//! server.process_server_credentials(credentials.clone())?;
//!
//! let mut client = DheKeyExchange::client(HandshakeContext::new(OsRng, params), DhConfig::default());
//! client.process_server_certificate(credentials.certificate())?;
//!
//! let ske = server.generate_server_key_exchange()?;
//! client.process_server_key_exchange(&mut Cursor::new(ske))?;
//! let cke = client.generate_client_key_exchange()?;
//! server.process_client_key_exchange(&mut Cursor::new(cke))?;
//!
//! assert_eq!(server.compute_shared_secret()?, client.compute_shared_secret()?);
//! # Ok::<(), tlskex_api::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod context;
pub mod dh;
pub mod ecdsa;
pub mod exchange;
pub mod signer;
pub mod transcript;

pub use config::DhConfig;
pub use context::HandshakeContext;
pub use dh::{DhKeyPair, DhParameters, NamedGroup, ValidatedPublicValue};
pub use ecdsa::{EcdsaP256Credentials, EcdsaP256VerifyingKey};
pub use exchange::{DhAnonKeyExchange, DhExchangeState, DheKeyExchange};
pub use transcript::TranscriptHash;
