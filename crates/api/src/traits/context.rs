//! Handshake context seen by a key exchange

use rand::{CryptoRng, RngCore};

use crate::types::SecurityParameters;

/// A cryptographically secure random source usable as a trait object
pub trait CryptoRngCore: CryptoRng + RngCore {}

impl<T: CryptoRng + RngCore> CryptoRngCore for T {}

/// Collaborators a key exchange borrows from the surrounding handshake
///
/// The handshake engine owns the random source and the negotiated security
/// parameters; a key-exchange instance only reads the parameters and draws
/// randomness for its ephemeral keys.
pub trait TlsContext {
    /// Source for ephemeral private exponents
    fn secure_random(&mut self) -> &mut dyn CryptoRngCore;

    /// Randoms and protocol version established by the hello messages
    fn security_parameters(&self) -> &SecurityParameters;
}

impl<T: TlsContext + ?Sized> TlsContext for &mut T {
    fn secure_random(&mut self) -> &mut dyn CryptoRngCore {
        (**self).secure_random()
    }

    fn security_parameters(&self) -> &SecurityParameters {
        (**self).security_parameters()
    }
}
