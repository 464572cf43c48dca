// File: crates/kex/src/signer/mod.rs
//! Signing and verification of the key-exchange transcript
//!
//! A [`TranscriptSigner`] is created already primed with the hello randoms
//! (client first, then server), is fed the encoded server parameters, and
//! is consumed by producing or checking a signature. Signing and verifying
//! share the digest logic and differ only in the key they finish with.

mod reader;

pub use reader::SignerReader;

use tlskex_api::{
    Error, Result, SecurityParameters, SignatureAndHashAlgorithm, SignerCredentials, VerifyingKey,
};

use crate::transcript::TranscriptHash;

/// Destination for bytes observed on their way through a [`SignerReader`]
pub trait TranscriptSink {
    fn absorb(&mut self, data: &[u8]);
}

impl TranscriptSink for Vec<u8> {
    fn absorb(&mut self, data: &[u8]) {
        self.extend_from_slice(data);
    }
}

impl TranscriptSink for TranscriptHash {
    fn absorb(&mut self, data: &[u8]) {
        self.update(data);
    }
}

enum SignerKey<'a> {
    Signing(&'a dyn SignerCredentials),
    Verifying(&'a dyn VerifyingKey),
}

/// Transcript digest bound to the key that will sign or verify it
pub struct TranscriptSigner<'a> {
    key: SignerKey<'a>,
    algorithm: Option<SignatureAndHashAlgorithm>,
    hash: TranscriptHash,
}

impl<'a> TranscriptSigner<'a> {
    /// Signer over `client_random || server_random || ...`
    pub fn for_signing(
        credentials: &'a dyn SignerCredentials,
        algorithm: Option<SignatureAndHashAlgorithm>,
        security_parameters: &SecurityParameters,
    ) -> Self {
        Self::primed(SignerKey::Signing(credentials), algorithm, security_parameters)
    }

    /// Verifier over `client_random || server_random || ...`
    pub fn for_verifying(
        key: &'a dyn VerifyingKey,
        algorithm: Option<SignatureAndHashAlgorithm>,
        security_parameters: &SecurityParameters,
    ) -> Self {
        Self::primed(SignerKey::Verifying(key), algorithm, security_parameters)
    }

    fn primed(
        key: SignerKey<'a>,
        algorithm: Option<SignatureAndHashAlgorithm>,
        security_parameters: &SecurityParameters,
    ) -> Self {
        let mut hash = TranscriptHash::for_signed_element(algorithm);
        hash.update_randoms(security_parameters);
        Self {
            key,
            algorithm,
            hash,
        }
    }

    /// Identifier in use, `None` before TLS 1.2
    pub fn algorithm(&self) -> Option<SignatureAndHashAlgorithm> {
        self.algorithm
    }

    pub fn update(&mut self, data: &[u8]) {
        self.hash.update(data);
    }

    /// Finish the digest and sign it
    pub fn generate_signature(self) -> Result<Vec<u8>> {
        let SignerKey::Signing(credentials) = self.key else {
            return Err(Error::internal(
                "TranscriptSigner::generate_signature",
                "signer was created for verification",
            ));
        };
        let digest = self.hash.finalize();
        credentials.generate_certificate_signature(self.algorithm, &digest)
    }

    /// Finish the digest and check `signature` against it
    pub fn verify_signature(self, signature: &[u8]) -> Result<bool> {
        let SignerKey::Verifying(key) = self.key else {
            return Err(Error::internal(
                "TranscriptSigner::verify_signature",
                "signer was created for signing",
            ));
        };
        let digest = self.hash.finalize();
        key.verify_raw_signature(self.algorithm, &digest, signature)
    }
}

impl TranscriptSink for TranscriptSigner<'_> {
    fn absorb(&mut self, data: &[u8]) {
        self.update(data);
    }
}

impl core::fmt::Debug for TranscriptSigner<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mode = match self.key {
            SignerKey::Signing(_) => "sign",
            SignerKey::Verifying(_) => "verify",
        };
        f.debug_struct("TranscriptSigner")
            .field("mode", &mode)
            .field("algorithm", &self.algorithm)
            .field("hash", &self.hash)
            .finish()
    }
}
