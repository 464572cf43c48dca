// File: crates/kex/src/transcript/mod.rs
//! Transcript digest over the signed part of a key exchange
//!
//! The value a server signs (and a client verifies) is a digest over
//!
//! ```text
//! client_random || server_random || ServerDHParams
//! ```
//!
//! in exactly that order. Before TLS 1.2 the digest is the concatenation of
//! MD5 and SHA-1 over the same input; from TLS 1.2 on it is the hash named
//! by the signature-and-hash identifier carried in the message.

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use tlskex_api::{HashAlgorithm, SecurityParameters, SignatureAndHashAlgorithm};
use tlskex_params::utils::hash::{
    COMBINED_OUTPUT_SIZE, MD5_OUTPUT_SIZE, SHA1_OUTPUT_SIZE, SHA224_OUTPUT_SIZE,
    SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};

/// Running digest over key-exchange transcript bytes
#[derive(Clone)]
pub enum TranscriptHash {
    /// MD5 || SHA-1, used when no hash has been negotiated
    Combined(Md5, Sha1),
    Md5(Md5),
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl TranscriptHash {
    /// The pre-TLS 1.2 combined digest
    pub fn combined() -> Self {
        Self::Combined(Md5::new(), Sha1::new())
    }

    /// A single negotiated hash
    pub fn for_algorithm(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => Self::Md5(Md5::new()),
            HashAlgorithm::Sha1 => Self::Sha1(Sha1::new()),
            HashAlgorithm::Sha224 => Self::Sha224(Sha224::new()),
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
        }
    }

    /// Digest matching a digitally-signed element
    ///
    /// `None` means no signature-and-hash identifier is in use, which selects
    /// the combined digest.
    pub fn for_signed_element(algorithm: Option<SignatureAndHashAlgorithm>) -> Self {
        match algorithm {
            Some(alg) => Self::for_algorithm(alg.hash),
            None => Self::combined(),
        }
    }

    /// Size of the finalized digest in bytes
    pub fn output_size(&self) -> usize {
        match self {
            Self::Combined(..) => COMBINED_OUTPUT_SIZE,
            Self::Md5(_) => MD5_OUTPUT_SIZE,
            Self::Sha1(_) => SHA1_OUTPUT_SIZE,
            Self::Sha224(_) => SHA224_OUTPUT_SIZE,
            Self::Sha256(_) => SHA256_OUTPUT_SIZE,
            Self::Sha384(_) => SHA384_OUTPUT_SIZE,
            Self::Sha512(_) => SHA512_OUTPUT_SIZE,
        }
    }

    /// Absorb bytes
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Combined(md5, sha1) => {
                Digest::update(md5, data);
                Digest::update(sha1, data);
            }
            Self::Md5(h) => Digest::update(h, data),
            Self::Sha1(h) => Digest::update(h, data),
            Self::Sha224(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha384(h) => Digest::update(h, data),
            Self::Sha512(h) => Digest::update(h, data),
        }
    }

    /// Absorb the hello randoms, client first
    pub fn update_randoms(&mut self, security_parameters: &SecurityParameters) {
        self.update(security_parameters.client_random());
        self.update(security_parameters.server_random());
    }

    /// Finish the digest
    pub fn finalize(self) -> Vec<u8> {
        match self {
            Self::Combined(md5, sha1) => {
                let mut out = Vec::with_capacity(COMBINED_OUTPUT_SIZE);
                out.extend_from_slice(&md5.finalize());
                out.extend_from_slice(&sha1.finalize());
                out
            }
            Self::Md5(h) => h.finalize().to_vec(),
            Self::Sha1(h) => h.finalize().to_vec(),
            Self::Sha224(h) => h.finalize().to_vec(),
            Self::Sha256(h) => h.finalize().to_vec(),
            Self::Sha384(h) => h.finalize().to_vec(),
            Self::Sha512(h) => h.finalize().to_vec(),
        }
    }
}

impl core::fmt::Debug for TranscriptHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Combined(..) => "MD5+SHA1",
            Self::Md5(_) => "MD5",
            Self::Sha1(_) => "SHA-1",
            Self::Sha224(_) => "SHA-224",
            Self::Sha256(_) => "SHA-256",
            Self::Sha384(_) => "SHA-384",
            Self::Sha512(_) => "SHA-512",
        };
        write!(f, "TranscriptHash({})", name)
    }
}
