//! Credential capabilities used to authenticate a key exchange
//!
//! Credentials are a closed capability set rather than a type hierarchy:
//! a key exchange asks a [`Credentials`] value whether it can sign through
//! [`Credentials::as_signer`] and fails fast when it cannot.

use crate::types::{Certificate, SignatureAlgorithm, SignatureAndHashAlgorithm};
use crate::Result;

/// Local credentials handed to a key exchange by the handshake engine
pub trait Credentials: Send + Sync {
    /// Certificate to transmit to the peer
    fn certificate(&self) -> &Certificate;

    /// Signing capability, if these credentials have one
    fn as_signer(&self) -> Option<&dyn SignerCredentials> {
        None
    }

    /// Whether these credentials can produce signatures
    fn supports_signing(&self) -> bool {
        self.as_signer().is_some()
    }
}

/// Credentials that can sign a transcript digest
///
/// # Security Note
///
/// Implementations hold the private key. The key never leaves the
/// implementation; callers only see the signature bytes.
pub trait SignerCredentials: Credentials {
    /// Identifier to prepend to signatures when signature algorithms are
    /// negotiated (TLS 1.2); its hash selects the transcript digest
    fn signature_and_hash_algorithm(&self) -> SignatureAndHashAlgorithm;

    /// Sign a finalized transcript digest
    ///
    /// `algorithm` is `None` for pre-1.2 handshakes, in which case `hash` is
    /// the combined MD5 and SHA-1 digest.
    fn generate_certificate_signature(
        &self,
        algorithm: Option<SignatureAndHashAlgorithm>,
        hash: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Public key extracted from a peer certificate
pub trait VerifyingKey: Send + Sync {
    /// Signature algorithm this key verifies
    fn signature_algorithm(&self) -> SignatureAlgorithm;

    /// Check a signature over a finalized transcript digest
    ///
    /// Returns `Ok(false)` for a signature that does not verify, including
    /// one that cannot be decoded. Errors are reserved for misuse, such as a
    /// hash this key cannot be used with.
    fn verify_raw_signature(
        &self,
        algorithm: Option<SignatureAndHashAlgorithm>,
        hash: &[u8],
        signature: &[u8],
    ) -> Result<bool>;
}
