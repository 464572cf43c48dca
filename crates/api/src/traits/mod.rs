//! Traits at the seams between the key-exchange core and its collaborators

pub mod context;
pub mod credentials;
pub mod key_exchange;

pub use context::{CryptoRngCore, TlsContext};
pub use credentials::{Credentials, SignerCredentials, VerifyingKey};
pub use key_exchange::KeyExchange;
