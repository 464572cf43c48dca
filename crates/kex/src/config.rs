//! Local policy applied to peer-supplied Diffie-Hellman groups

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tlskex_api::{HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm};
use tlskex_params::traditional::dh::DH_DEFAULT_MIN_PRIME_BITS;

/// Policy knobs for the client side of a Diffie-Hellman key exchange
///
/// Servers use locally configured groups, so these checks only apply to
/// parameters received from a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DhConfig {
    /// Smallest peer modulus, in bits, that is accepted
    pub min_prime_bits: usize,

    /// Reject peer groups that are not one of the built-in named groups
    pub require_known_group: bool,

    /// Signature-and-hash pairs the client advertised; a TLS 1.2 server
    /// must sign with one of them
    pub signature_algorithms: Vec<SignatureAndHashAlgorithm>,
}

impl Default for DhConfig {
    fn default() -> Self {
        Self {
            min_prime_bits: DH_DEFAULT_MIN_PRIME_BITS,
            require_known_group: false,
            signature_algorithms: default_signature_algorithms(),
        }
    }
}

impl DhConfig {
    pub fn with_min_prime_bits(mut self, bits: usize) -> Self {
        self.min_prime_bits = bits;
        self
    }

    pub fn with_require_known_group(mut self, require: bool) -> Self {
        self.require_known_group = require;
        self
    }

    pub fn with_signature_algorithms(mut self, algorithms: Vec<SignatureAndHashAlgorithm>) -> Self {
        self.signature_algorithms = algorithms;
        self
    }

    /// Whether `algorithm` was advertised
    pub fn allows_signature_algorithm(&self, algorithm: SignatureAndHashAlgorithm) -> bool {
        self.signature_algorithms.contains(&algorithm)
    }
}

fn default_signature_algorithms() -> Vec<SignatureAndHashAlgorithm> {
    let hashes = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha1,
    ];
    let signatures = [
        SignatureAlgorithm::Ecdsa,
        SignatureAlgorithm::Rsa,
        SignatureAlgorithm::Dsa,
    ];
    signatures
        .iter()
        .flat_map(|&sig| {
            hashes
                .iter()
                .map(move |&hash| SignatureAndHashAlgorithm::new(hash, sig))
        })
        .collect()
}
