//! Diffie-Hellman state shared by every DH-based key exchange

use std::io::Read;
use std::sync::Arc;

use tracing::debug;

use tlskex_api::{CryptoRngCore, Error, Result, SharedSecret};

use crate::codec::{self, ServerDhParams};
use crate::config::DhConfig;
use crate::dh::{
    validate_dh_parameters, validate_dh_public_value, DhKeyPair, DhParameters, ValidatedPublicValue,
};

/// Group, own ephemeral key pair and validated peer value of one exchange
///
/// The key pair and peer value are released as soon as the shared secret
/// has been computed; computing it a second time is an internal error.
#[derive(Debug, Default)]
pub struct DhExchangeState {
    parameters: Option<Arc<DhParameters>>,
    key_pair: Option<DhKeyPair>,
    peer_public: Option<ValidatedPublicValue>,
}

impl DhExchangeState {
    /// State for a side that already knows its group
    pub fn with_parameters(parameters: Arc<DhParameters>) -> Self {
        Self {
            parameters: Some(parameters),
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> Option<&DhParameters> {
        self.parameters.as_deref()
    }

    /// Own ephemeral public value, once generated
    pub fn public_value(&self) -> Option<&num_bigint::BigUint> {
        self.key_pair.as_ref().map(DhKeyPair::public_value)
    }

    pub fn peer_public_value(&self) -> Option<&ValidatedPublicValue> {
        self.peer_public.as_ref()
    }

    fn require_parameters(&self, context: &'static str) -> Result<Arc<DhParameters>> {
        self.parameters
            .clone()
            .ok_or_else(|| Error::internal(context, "no DH parameters available"))
    }

    /// Generate a fresh key pair and encode `ServerDHParams` for it
    pub fn generate_server_params(&mut self, rng: &mut dyn CryptoRngCore) -> Result<Vec<u8>> {
        let parameters = self.require_parameters("generate_server_params")?;
        let key_pair = DhKeyPair::generate(&parameters, rng)?;

        let mut out = Vec::with_capacity(3 * (parameters.prime_len() + 2));
        ServerDhParams::new((*parameters).clone(), key_pair.public_value().clone())
            .encode(&mut out)?;
        self.key_pair = Some(key_pair);
        debug!(prime_bits = parameters.prime_bits(), "generated server DH params");
        Ok(out)
    }

    /// Validate received `ServerDHParams` and adopt them
    pub fn accept_server_params(&mut self, received: ServerDhParams, config: &DhConfig) -> Result<()> {
        let (parameters, ys) = received.into_parts();
        let parameters = validate_dh_parameters(&parameters, config)?;
        let peer = validate_dh_public_value(ys, &parameters)?;
        debug!(
            prime_bits = parameters.prime_bits(),
            named = parameters.q().is_some(),
            "accepted server DH params"
        );
        self.parameters = Some(Arc::new(parameters));
        self.peer_public = Some(peer);
        Ok(())
    }

    /// Generate the client key pair and encode `ClientDiffieHellmanPublic`
    pub fn generate_client_public(&mut self, rng: &mut dyn CryptoRngCore) -> Result<Vec<u8>> {
        let parameters = self.require_parameters("generate_client_key_exchange")?;
        let key_pair = DhKeyPair::generate(&parameters, rng)?;

        let mut out = Vec::with_capacity(parameters.prime_len() + 2);
        codec::write_client_public(key_pair.public_value(), &mut out)?;
        self.key_pair = Some(key_pair);
        Ok(out)
    }

    /// Parse and validate `ClientDiffieHellmanPublic`
    pub fn accept_client_public(&mut self, input: &mut dyn Read) -> Result<()> {
        let parameters = self.require_parameters("process_client_key_exchange")?;
        let yc = codec::read_client_public(input)?;
        let peer = validate_dh_public_value(yc, &parameters)?;
        self.peer_public = Some(peer);
        Ok(())
    }

    /// `peer^x mod p`, consuming the key pair and peer value
    pub fn compute_shared_secret(&mut self) -> Result<SharedSecret> {
        const CONTEXT: &str = "compute_shared_secret";
        let parameters = self.require_parameters(CONTEXT)?;
        let key_pair = self
            .key_pair
            .take()
            .ok_or_else(|| Error::internal(CONTEXT, "no own DH key pair"))?;
        let peer = self
            .peer_public
            .take()
            .ok_or_else(|| Error::internal(CONTEXT, "no peer DH public value"))?;
        Ok(key_pair.agree(&parameters, &peer))
    }
}
