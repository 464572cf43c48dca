//! Ephemeral exponent selection

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use tracing::trace;

use tlskex_api::{CryptoRngCore, Error, Result};

use super::DhParameters;

/// Draw a private exponent for `parameters`
///
/// With an exact length `l` the exponent is an `l`-bit value with its top
/// bit set. Otherwise it is uniform in `[min, q - 2]`, where `q` falls back
/// to `p` when the subgroup order is unknown and `min` is `2^(m-1)` when a
/// minimum length `m` is set, else 2. In both cases candidates with a low
/// non-adjacent-form weight are redrawn.
pub(super) fn calculate_private(
    parameters: &DhParameters,
    rng: &mut dyn CryptoRngCore,
) -> Result<BigUint> {
    let l = parameters.l();
    if l != 0 {
        if l < 2 {
            return Err(Error::internal("calculate_private", "exponent length below 2 bits"));
        }
        let min_weight = l >> 2;
        let top = BigUint::one() << (l - 1);
        loop {
            let x = rng.gen_biguint(l as u64) | &top;
            if naf_weight(&x) >= min_weight {
                return Ok(x);
            }
            trace!("redrawing low-weight exponent");
        }
    }

    let min = match parameters.m() {
        0 => BigUint::from(2u32),
        m => BigUint::one() << (m - 1),
    };
    let q = parameters.q().unwrap_or_else(|| parameters.p());
    if q <= &BigUint::from(3u32) {
        return Err(Error::internal("calculate_private", "group order too small"));
    }
    let max = q - 2u32;
    if min > max {
        return Err(Error::internal(
            "calculate_private",
            "minimum exponent length exceeds group order",
        ));
    }

    let min_weight = (max.bits() >> 2) as usize;
    let upper = &max + 1u32;
    loop {
        let x = rng.gen_biguint_range(&min, &upper);
        if naf_weight(&x) >= min_weight {
            return Ok(x);
        }
        trace!("redrawing low-weight exponent");
    }
}

/// Number of non-zero digits in the non-adjacent form of `k`
pub(super) fn naf_weight(k: &BigUint) -> usize {
    if k.is_zero() {
        return 0;
    }
    let three_k = (k << 1usize) + k;
    (three_k ^ k).count_ones() as usize
}
