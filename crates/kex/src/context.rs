//! Owned handshake context for driving a key exchange directly

use rand::{CryptoRng, RngCore};
use tlskex_api::{CryptoRngCore, SecurityParameters, TlsContext};

/// A [`TlsContext`] that owns its random source and security parameters
///
/// Handshake engines usually implement [`TlsContext`] on their own state;
/// this type covers standalone use and tests.
#[derive(Debug)]
pub struct HandshakeContext<R> {
    rng: R,
    security_parameters: SecurityParameters,
}

impl<R: CryptoRng + RngCore> HandshakeContext<R> {
    pub fn new(rng: R, security_parameters: SecurityParameters) -> Self {
        Self {
            rng,
            security_parameters,
        }
    }

    /// Give back the random source
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: CryptoRng + RngCore> TlsContext for HandshakeContext<R> {
    fn secure_random(&mut self) -> &mut dyn CryptoRngCore {
        &mut self.rng
    }

    fn security_parameters(&self) -> &SecurityParameters {
        &self.security_parameters
    }
}
