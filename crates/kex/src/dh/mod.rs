// File: crates/kex/src/dh/mod.rs
//! Finite-field Diffie-Hellman over a prime modulus
//!
//! This module holds the group parameters, ephemeral key pairs and the
//! modular arithmetic of the exchange. Wire handling lives in
//! [`crate::codec`]; validation of peer input lives in [`validate`].
//!
//! # Security Note
//!
//! Private exponents are stored as big-endian bytes that are wiped on drop.
//! They are only turned back into big integers for the duration of a single
//! exponentiation.

mod keygen;
pub mod validate;

use core::fmt;

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use tlskex_api::{CryptoRngCore, Error, Result, SharedSecret};
use tlskex_params::traditional::dh::{
    DH_MODP_GENERATOR, RFC2409_MODP_1024_PRIME_HEX, RFC3526_MODP_2048_PRIME_HEX,
};

pub use validate::{validate_dh_parameters, validate_dh_public_value, ValidatedPublicValue};

// parsed once, consulted on every received ServerKeyExchange
static NAMED_GROUPS: Lazy<Vec<(NamedGroup, DhParameters)>> = Lazy::new(|| {
    NamedGroup::ALL
        .iter()
        .filter_map(|&group| group.parse().ok().map(|params| (group, params)))
        .collect()
});

/// Built-in safe-prime groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedGroup {
    /// RFC 2409 Oakley group 2
    Rfc2409Modp1024,
    /// RFC 3526 group 14
    Rfc3526Modp2048,
}

impl NamedGroup {
    pub const ALL: [NamedGroup; 2] = [NamedGroup::Rfc2409Modp1024, NamedGroup::Rfc3526Modp2048];

    fn prime_hex(self) -> &'static str {
        match self {
            Self::Rfc2409Modp1024 => RFC2409_MODP_1024_PRIME_HEX,
            Self::Rfc3526Modp2048 => RFC3526_MODP_2048_PRIME_HEX,
        }
    }

    fn parse(self) -> Result<DhParameters> {
        let p = BigUint::parse_bytes(self.prime_hex().as_bytes(), 16)
            .ok_or_else(|| Error::internal("NamedGroup::parameters", "malformed group prime"))?;
        let q = (&p - 1u32) >> 1;
        Ok(DhParameters::new(p, BigUint::from(DH_MODP_GENERATOR)).with_order(q))
    }

    fn cached(self) -> Option<&'static DhParameters> {
        NAMED_GROUPS
            .iter()
            .find(|(group, _)| *group == self)
            .map(|(_, params)| params)
    }

    /// Full parameters, with the subgroup order `q = (p - 1) / 2`
    pub fn parameters(self) -> Result<DhParameters> {
        self.cached()
            .cloned()
            .ok_or_else(|| Error::internal("NamedGroup::parameters", "malformed group prime"))
    }

    /// The named group with exactly this modulus and generator, if any
    pub fn identify(p: &BigUint, g: &BigUint) -> Option<DhParameters> {
        NAMED_GROUPS
            .iter()
            .find(|(_, params)| params.p() == p && params.g() == g)
            .map(|(_, params)| params.clone())
    }
}

/// Diffie-Hellman group parameters
///
/// `q` is the order of the subgroup generated by `g` when it is known. `m`
/// is a lower bound on the bit length of private exponents and `l` an exact
/// bit length; zero means unset for both.
#[derive(Clone, PartialEq, Eq)]
pub struct DhParameters {
    p: BigUint,
    g: BigUint,
    q: Option<BigUint>,
    m: usize,
    l: usize,
}

impl DhParameters {
    /// Parameters with only modulus and generator
    pub fn new(p: BigUint, g: BigUint) -> Self {
        Self {
            p,
            g,
            q: None,
            m: 0,
            l: 0,
        }
    }

    /// Parameters for a built-in group
    pub fn named(group: NamedGroup) -> Result<Self> {
        group.parameters()
    }

    /// Attach the subgroup order
    pub fn with_order(mut self, q: BigUint) -> Self {
        self.q = Some(q);
        self
    }

    /// Require private exponents of at least `m` bits
    pub fn with_min_exponent_bits(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    /// Require private exponents of exactly `l` bits
    pub fn with_exponent_length(mut self, l: usize) -> Self {
        self.l = l;
        self
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn q(&self) -> Option<&BigUint> {
        self.q.as_ref()
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn l(&self) -> usize {
        self.l
    }

    /// Bit length of the modulus
    pub fn prime_bits(&self) -> u64 {
        self.p.bits()
    }

    /// Size of the modulus in bytes
    pub fn prime_len(&self) -> usize {
        ((self.p.bits() + 7) / 8) as usize
    }
}

impl fmt::Debug for DhParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhParameters")
            .field("prime_bits", &self.prime_bits())
            .field("g", &self.g)
            .field("has_order", &self.q.is_some())
            .field("m", &self.m)
            .field("l", &self.l)
            .finish()
    }
}

/// An ephemeral private exponent
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhPrivateKey(Vec<u8>);

impl DhPrivateKey {
    fn from_biguint(x: &BigUint) -> Self {
        Self(x.to_bytes_be())
    }

    fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Export the exponent bytes
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl fmt::Debug for DhPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DhPrivateKey([REDACTED])")
    }
}

/// An ephemeral key pair in a specific group
#[derive(Clone, Debug)]
pub struct DhKeyPair {
    private_key: DhPrivateKey,
    public_value: BigUint,
}

impl DhKeyPair {
    /// Draw a fresh private exponent and derive `y = g^x mod p`
    pub fn generate(parameters: &DhParameters, rng: &mut dyn CryptoRngCore) -> Result<Self> {
        let x = keygen::calculate_private(parameters, rng)?;
        Ok(Self::from_exponent(parameters, &x))
    }

    /// Build a key pair from a chosen private exponent
    pub fn from_private_exponent(parameters: &DhParameters, x: &BigUint) -> Result<Self> {
        if x < &BigUint::one() || x >= parameters.p() {
            return Err(Error::internal(
                "DhKeyPair::from_private_exponent",
                "exponent outside [1, p-1]",
            ));
        }
        Ok(Self::from_exponent(parameters, x))
    }

    fn from_exponent(parameters: &DhParameters, x: &BigUint) -> Self {
        let public_value = parameters.g().modpow(x, parameters.p());
        Self {
            private_key: DhPrivateKey::from_biguint(x),
            public_value,
        }
    }

    pub fn private_key(&self) -> &DhPrivateKey {
        &self.private_key
    }

    pub fn public_value(&self) -> &BigUint {
        &self.public_value
    }

    /// Compute `peer^x mod p` as an unsigned big-endian value
    pub fn agree(&self, parameters: &DhParameters, peer: &ValidatedPublicValue) -> SharedSecret {
        let x = self.private_key.to_biguint();
        let z = peer.value().modpow(&x, parameters.p());
        SharedSecret::new(z.to_bytes_be())
    }
}
