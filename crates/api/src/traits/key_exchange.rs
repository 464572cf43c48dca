// File: crates/api/src/traits/key_exchange.rs

//! Trait definition for TLS key exchanges
//!
//! Every key-exchange variant (ephemeral DH, anonymous DH, and the variants
//! implemented outside this workspace) exposes the same capability set to the
//! handshake state machine. An instance is built for exactly one [`Role`];
//! operations that belong to the other role fail with an internal-error
//! fault instead of doing nothing.

use std::io::Read;
use std::sync::Arc;

use super::credentials::Credentials;
use crate::types::{Certificate, Role, SharedSecret};
use crate::Result;

/// The key-exchange contract driven by the handshake state machine.
///
/// # Call order
///
/// Server: `process_server_credentials` (or `skip_server_credentials`),
/// `generate_server_key_exchange`, `process_client_key_exchange`,
/// `compute_shared_secret`.
///
/// Client: `process_server_certificate`, `process_server_key_exchange`
/// (or `skip_server_key_exchange`), `generate_client_key_exchange`,
/// `compute_shared_secret`.
pub trait KeyExchange {
    /// Role this instance was configured for
    fn role(&self) -> Role;

    /// Whether the server must present credentials for this variant
    fn requires_server_credentials(&self) -> bool;

    /// Record that the server has no credentials
    fn skip_server_credentials(&mut self) -> Result<()>;

    /// Retain the server's credentials for the generate path
    fn process_server_credentials(&mut self, credentials: Arc<dyn Credentials>) -> Result<()>;

    /// Record the server certificate received by the client
    fn process_server_certificate(&mut self, certificate: &Certificate) -> Result<()>;

    /// Whether a ServerKeyExchange message is mandatory for this variant
    fn requires_server_key_exchange(&self) -> bool;

    /// Record that no ServerKeyExchange message was received
    fn skip_server_key_exchange(&mut self) -> Result<()>;

    /// Build the ServerKeyExchange body
    fn generate_server_key_exchange(&mut self) -> Result<Vec<u8>>;

    /// Parse and authenticate a ServerKeyExchange body
    ///
    /// Reads exactly the message body and nothing past it.
    fn process_server_key_exchange(&mut self, input: &mut dyn Read) -> Result<()>;

    /// Build the ClientKeyExchange body
    fn generate_client_key_exchange(&mut self) -> Result<Vec<u8>>;

    /// Parse a ClientKeyExchange body
    fn process_client_key_exchange(&mut self, input: &mut dyn Read) -> Result<()>;

    /// Compute the pre-master secret
    fn compute_shared_secret(&mut self) -> Result<SharedSecret>;
}
