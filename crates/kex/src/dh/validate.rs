//! Checks on peer-supplied group parameters and public values

use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use tlskex_api::error::validate;
use tlskex_api::{Error, Result};

use super::{DhParameters, NamedGroup};
use crate::config::DhConfig;

/// A peer public value that passed [`validate_dh_public_value`]
///
/// Only this module can construct one, so holding it is proof the range and
/// subgroup checks ran against the group it will be used with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedPublicValue(BigUint);

impl ValidatedPublicValue {
    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// Check group parameters received from a peer against local policy
///
/// Returns the parameters to use from now on: when they match a named group
/// the subgroup order is attached so that public values get the full
/// subgroup check.
pub fn validate_dh_parameters(parameters: &DhParameters, config: &DhConfig) -> Result<DhParameters> {
    let p = parameters.p();
    let g = parameters.g();

    validate::parameter(
        (p % 2u32).is_one() && p > &BigUint::from(3u32),
        "validate_dh_parameters",
        "modulus must be an odd value above 3",
    )?;

    let bits = parameters.prime_bits();
    if bits < config.min_prime_bits as u64 {
        debug!(bits, min = config.min_prime_bits, "peer DH modulus too small");
        return Err(Error::insufficient_security(
            "validate_dh_parameters",
            format!("{}-bit modulus below minimum of {}", bits, config.min_prime_bits),
        ));
    }

    validate::parameter(
        g >= &BigUint::from(2u32) && g <= &(p - 2u32),
        "validate_dh_parameters",
        "generator outside [2, p-2]",
    )?;

    match NamedGroup::identify(p, g) {
        Some(named) => Ok(named),
        None if config.require_known_group => Err(Error::insufficient_security(
            "validate_dh_parameters",
            "group is not a known named group",
        )),
        None => Ok(DhParameters::new(p.clone(), g.clone())),
    }
}

/// Check a peer public value against the group it belongs to
///
/// Accepts `y` only when `2 <= y <= p - 2` and, if the subgroup order `q`
/// is known, `y^q mod p == 1`.
pub fn validate_dh_public_value(y: BigUint, parameters: &DhParameters) -> Result<ValidatedPublicValue> {
    let p = parameters.p();
    validate::parameter(
        p > &BigUint::from(3u32),
        "validate_dh_public_value",
        "modulus too small",
    )?;

    if y < BigUint::from(2u32) || y > p - 2u32 {
        debug!("peer DH public value out of range");
        return Err(Error::illegal_parameter(
            "validate_dh_public_value",
            "public value outside [2, p-2]",
        ));
    }

    if let Some(q) = parameters.q() {
        if !y.modpow(q, p).is_one() {
            debug!("peer DH public value outside prime-order subgroup");
            return Err(Error::illegal_parameter(
                "validate_dh_public_value",
                "public value not in the prime-order subgroup",
            ));
        }
    }

    Ok(ValidatedPublicValue(y))
}
