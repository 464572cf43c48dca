// File: crates/kex/src/ecdsa/mod.rs
//! ECDSA over NIST P-256 as server credentials
//!
//! Signatures are DER-encoded. Before TLS 1.2 ECDSA signs only the SHA-1
//! half of the combined MD5 and SHA-1 transcript digest; from TLS 1.2 on it
//! signs the full digest of the negotiated hash.

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey as P256VerifyingKey};
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

use tlskex_api::{
    Certificate, Credentials, Error, HashAlgorithm, Result, SignatureAlgorithm,
    SignatureAndHashAlgorithm, SignerCredentials, VerifyingKey,
};
use tlskex_params::utils::hash::{COMBINED_OUTPUT_SIZE, MD5_OUTPUT_SIZE};

/// The part of a transcript digest that ECDSA actually signs
fn signing_input(algorithm: Option<SignatureAndHashAlgorithm>, hash: &[u8]) -> Result<&[u8]> {
    const CONTEXT: &str = "ECDSA-P256 digest";
    match algorithm {
        None => {
            if hash.len() != COMBINED_OUTPUT_SIZE {
                return Err(Error::internal(CONTEXT, "expected combined MD5+SHA1 digest"));
            }
            Ok(&hash[MD5_OUTPUT_SIZE..])
        }
        Some(alg) if alg.signature == SignatureAlgorithm::Ecdsa => Ok(hash),
        Some(_) => Err(Error::internal(CONTEXT, "non-ECDSA signature algorithm")),
    }
}

/// P-256 public key taken from a server certificate
#[derive(Clone, Debug)]
pub struct EcdsaP256VerifyingKey(P256VerifyingKey);

impl EcdsaP256VerifyingKey {
    /// Parse a SEC1-encoded point
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        P256VerifyingKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| Error::decode("EcdsaP256VerifyingKey", "invalid SEC1 point"))
    }

    /// Compressed SEC1 encoding
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }
}

impl From<P256VerifyingKey> for EcdsaP256VerifyingKey {
    fn from(key: P256VerifyingKey) -> Self {
        Self(key)
    }
}

impl VerifyingKey for EcdsaP256VerifyingKey {
    fn signature_algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::Ecdsa
    }

    fn verify_raw_signature(
        &self,
        algorithm: Option<SignatureAndHashAlgorithm>,
        hash: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        let input = signing_input(algorithm, hash)?;
        let Ok(signature) = Signature::from_der(signature) else {
            return Ok(false);
        };
        Ok(self.0.verify_prehash(input, &signature).is_ok())
    }
}

/// Server credentials holding a P-256 signing key
///
/// # Security Note
///
/// Signing is deterministic (RFC 6979), so no random source is needed
/// after the key has been created.
pub struct EcdsaP256Credentials {
    certificate: Certificate,
    signing_key: SigningKey,
    algorithm: SignatureAndHashAlgorithm,
}

impl EcdsaP256Credentials {
    /// Credentials for `signing_key` presented with `chain`
    pub fn new(signing_key: SigningKey, chain: Vec<Vec<u8>>) -> Self {
        let public_key = EcdsaP256VerifyingKey(signing_key.verifying_key().clone());
        Self {
            certificate: Certificate::new(chain, Arc::new(public_key)),
            signing_key,
            algorithm: SignatureAndHashAlgorithm::new(HashAlgorithm::Sha256, SignatureAlgorithm::Ecdsa),
        }
    }

    /// Fresh key whose "chain" is its own SEC1 public point
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let signing_key = SigningKey::random(rng);
        let encoded = EcdsaP256VerifyingKey(signing_key.verifying_key().clone()).to_sec1_bytes();
        Self::new(signing_key, vec![encoded])
    }

    /// Hash to pair with ECDSA when signature algorithms are negotiated
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.algorithm = SignatureAndHashAlgorithm::new(hash, SignatureAlgorithm::Ecdsa);
        self
    }

    pub fn verifying_key(&self) -> EcdsaP256VerifyingKey {
        EcdsaP256VerifyingKey(self.signing_key.verifying_key().clone())
    }
}

impl core::fmt::Debug for EcdsaP256Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EcdsaP256Credentials")
            .field("certificate", &self.certificate)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl Credentials for EcdsaP256Credentials {
    fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    fn as_signer(&self) -> Option<&dyn SignerCredentials> {
        Some(self)
    }
}

impl SignerCredentials for EcdsaP256Credentials {
    fn signature_and_hash_algorithm(&self) -> SignatureAndHashAlgorithm {
        self.algorithm
    }

    fn generate_certificate_signature(
        &self,
        algorithm: Option<SignatureAndHashAlgorithm>,
        hash: &[u8],
    ) -> Result<Vec<u8>> {
        let input = signing_input(algorithm, hash)?;
        let signature: Signature = self
            .signing_key
            .sign_prehash(input)
            .map_err(|e| Error::internal("ECDSA-P256 sign", e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests;
