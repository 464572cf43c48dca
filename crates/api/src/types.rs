//! Core types shared by every key-exchange variant
//!
//! Security parameters negotiated earlier in the handshake, the TLS
//! algorithm identifiers that appear inside a digitally-signed element, the
//! peer certificate handle, and the zeroizing shared secret.

use core::fmt;
use std::sync::Arc;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::traits::VerifyingKey;
use crate::{Error, Result};

/// Length of a ClientHello/ServerHello random in bytes
pub const RANDOM_LENGTH: usize = 32;

/// A hello random
pub type Random = [u8; RANDOM_LENGTH];

/// Which side of the handshake an instance was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Generates the server key exchange, processes the client key exchange
    Server,
    /// Processes the server key exchange, generates the client key exchange
    Client,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Server => f.write_str("server"),
            Role::Client => f.write_str("client"),
        }
    }
}

/// Negotiated protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolVersion {
    Tls10,
    Tls11,
    Tls12,
}

impl ProtocolVersion {
    /// Wire encoding (major, minor)
    pub fn to_bytes(self) -> [u8; 2] {
        match self {
            Self::Tls10 => [3, 1],
            Self::Tls11 => [3, 2],
            Self::Tls12 => [3, 3],
        }
    }

    /// Whether digitally-signed elements carry a signature-and-hash identifier
    pub fn uses_signature_algorithms(self) -> bool {
        self >= Self::Tls12
    }
}

/// Security parameters established earlier in the handshake
///
/// Read-only to the key exchange. The randoms are fixed for the lifetime of
/// the handshake.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityParameters {
    client_random: Random,
    server_random: Random,
    protocol_version: ProtocolVersion,
}

impl SecurityParameters {
    /// Create security parameters from both hello randoms
    pub fn new(
        client_random: Random,
        server_random: Random,
        protocol_version: ProtocolVersion,
    ) -> Self {
        Self {
            client_random,
            server_random,
            protocol_version,
        }
    }

    pub fn client_random(&self) -> &Random {
        &self.client_random
    }

    pub fn server_random(&self) -> &Random {
        &self.server_random
    }

    pub fn protocol_version(&self) -> ProtocolVersion {
        self.protocol_version
    }
}

impl fmt::Debug for SecurityParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityParameters")
            .field("protocol_version", &self.protocol_version)
            .finish_non_exhaustive()
    }
}

/// TLS HashAlgorithm registry values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HashAlgorithm {
    Md5 = 1,
    Sha1 = 2,
    Sha224 = 3,
    Sha256 = 4,
    Sha384 = 5,
    Sha512 = 6,
}

impl HashAlgorithm {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Md5),
            2 => Some(Self::Sha1),
            3 => Some(Self::Sha224),
            4 => Some(Self::Sha256),
            5 => Some(Self::Sha384),
            6 => Some(Self::Sha512),
            _ => None,
        }
    }
}

/// TLS SignatureAlgorithm registry values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SignatureAlgorithm {
    Anonymous = 0,
    Rsa = 1,
    Dsa = 2,
    Ecdsa = 3,
}

impl SignatureAlgorithm {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Anonymous),
            1 => Some(Self::Rsa),
            2 => Some(Self::Dsa),
            3 => Some(Self::Ecdsa),
            _ => None,
        }
    }
}

/// The identifier that precedes a signature from TLS 1.2 on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl SignatureAndHashAlgorithm {
    pub const fn new(hash: HashAlgorithm, signature: SignatureAlgorithm) -> Self {
        Self { hash, signature }
    }

    /// Wire encoding: hash byte, then signature byte
    pub fn to_bytes(self) -> [u8; 2] {
        [self.hash as u8, self.signature as u8]
    }

    /// Parse the two-byte wire encoding
    ///
    /// Unknown registry values and the anonymous signature algorithm are
    /// both illegal parameters: the peer picked an algorithm it may not use.
    pub fn from_bytes(bytes: [u8; 2]) -> Result<Self> {
        let hash = HashAlgorithm::from_u8(bytes[0]).ok_or_else(|| {
            Error::illegal_parameter(
                "SignatureAndHashAlgorithm",
                format!("unknown hash {}", bytes[0]),
            )
        })?;
        let signature = SignatureAlgorithm::from_u8(bytes[1]).ok_or_else(|| {
            Error::illegal_parameter(
                "SignatureAndHashAlgorithm",
                format!("unknown signature {}", bytes[1]),
            )
        })?;
        if signature == SignatureAlgorithm::Anonymous {
            return Err(Error::illegal_parameter(
                "SignatureAndHashAlgorithm",
                "anonymous signature algorithm in signed element",
            ));
        }
        Ok(Self { hash, signature })
    }
}

/// The server certificate as seen by the key exchange
///
/// Chain parsing and trust validation happen elsewhere; by the time a
/// certificate reaches this layer its subject public key has already been
/// extracted into a [`VerifyingKey`].
#[derive(Clone)]
pub struct Certificate {
    chain: Vec<Vec<u8>>,
    public_key: Arc<dyn VerifyingKey>,
}

impl Certificate {
    /// Build a certificate from its encoded chain and end-entity public key
    pub fn new(chain: Vec<Vec<u8>>, public_key: Arc<dyn VerifyingKey>) -> Self {
        Self { chain, public_key }
    }

    /// Encoded certificate chain, end-entity first
    pub fn chain(&self) -> &[Vec<u8>] {
        &self.chain
    }

    /// Whether the chain carries no certificates
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Public key of the end-entity certificate
    pub fn public_key(&self) -> Arc<dyn VerifyingKey> {
        Arc::clone(&self.public_key)
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("chain_len", &self.chain.len())
            .field("key_algorithm", &self.public_key.signature_algorithm())
            .finish()
    }
}

/// Output of a key exchange, the TLS pre-master secret
///
/// This type provides:
/// - Zeroization on drop
/// - Constant-time equality comparison
/// - A `Debug` implementation that hides the bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    data: Vec<u8>,
}

impl SharedSecret {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && bool::from(self.data.ct_eq(&other.data))
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({} bytes, [REDACTED])", self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_and_hash_wire_form() {
        let alg = SignatureAndHashAlgorithm::new(HashAlgorithm::Sha256, SignatureAlgorithm::Ecdsa);
        assert_eq!(alg.to_bytes(), [4, 3]);
        assert_eq!(SignatureAndHashAlgorithm::from_bytes([4, 3]).unwrap(), alg);
    }

    #[test]
    fn test_signature_and_hash_rejects_unknown() {
        for bytes in [[9, 3], [4, 9], [4, 0]] {
            let err = SignatureAndHashAlgorithm::from_bytes(bytes).unwrap_err();
            assert_eq!(err.alert(), crate::AlertDescription::IllegalParameter);
        }
    }

    #[test]
    fn test_protocol_version_ordering() {
        assert!(!ProtocolVersion::Tls10.uses_signature_algorithms());
        assert!(!ProtocolVersion::Tls11.uses_signature_algorithms());
        assert!(ProtocolVersion::Tls12.uses_signature_algorithms());
        assert_eq!(ProtocolVersion::Tls12.to_bytes(), [3, 3]);
    }

    #[test]
    fn test_shared_secret_equality_and_debug() {
        let a = SharedSecret::new(vec![1, 2, 3]);
        let b = SharedSecret::new(vec![1, 2, 3]);
        let c = SharedSecret::new(vec![1, 2, 4]);
        let d = SharedSecret::new(vec![1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(format!("{:?}", a), "SharedSecret(3 bytes, [REDACTED])");
    }

    #[test]
    fn test_security_parameters_debug_hides_randoms() {
        let params = SecurityParameters::new([7u8; 32], [8u8; 32], ProtocolVersion::Tls12);
        let rendered = format!("{:?}", params);
        assert!(!rendered.contains("client_random"));
        assert!(rendered.contains("Tls12"));
        assert_eq!(params.client_random(), &[7u8; 32]);
        assert_eq!(params.server_random(), &[8u8; 32]);
    }
}
