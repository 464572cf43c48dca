//! Anonymous Diffie-Hellman (DH_anon)
//!
//! Same exchange as DHE without the certificate and without a signature on
//! the ServerKeyExchange. Offers no protection against an active attacker.

use std::io::Read;
use std::sync::Arc;

use num_bigint::BigUint;
use tracing::{debug, instrument};

use tlskex_api::{
    Certificate, Credentials, Error, KeyExchange, Result, Role, SharedSecret, TlsContext,
};

use super::{ensure_role, DhExchangeState};
use crate::codec::ServerDhParams;
use crate::config::DhConfig;
use crate::dh::{DhParameters, ValidatedPublicValue};

/// DH_anon key exchange
pub struct DhAnonKeyExchange<C: TlsContext> {
    context: C,
    role: Role,
    config: DhConfig,
    state: DhExchangeState,
}

impl<C: TlsContext> DhAnonKeyExchange<C> {
    pub fn server(context: C, parameters: Arc<DhParameters>) -> Self {
        Self {
            context,
            role: Role::Server,
            config: DhConfig::default(),
            state: DhExchangeState::with_parameters(parameters),
        }
    }

    pub fn client(context: C, config: DhConfig) -> Self {
        Self {
            context,
            role: Role::Client,
            config,
            state: DhExchangeState::default(),
        }
    }

    pub fn parameters(&self) -> Option<&DhParameters> {
        self.state.parameters()
    }

    pub fn public_value(&self) -> Option<&BigUint> {
        self.state.public_value()
    }

    pub fn peer_public_value(&self) -> Option<&ValidatedPublicValue> {
        self.state.peer_public_value()
    }
}

impl<C: TlsContext> KeyExchange for DhAnonKeyExchange<C> {
    fn role(&self) -> Role {
        self.role
    }

    fn requires_server_credentials(&self) -> bool {
        false
    }

    fn skip_server_credentials(&mut self) -> Result<()> {
        ensure_role(self.role, Role::Server, "skip_server_credentials")
    }

    fn process_server_credentials(&mut self, _credentials: Arc<dyn Credentials>) -> Result<()> {
        Err(Error::internal(
            "process_server_credentials",
            "anonymous DH takes no server credentials",
        ))
    }

    fn process_server_certificate(&mut self, _certificate: &Certificate) -> Result<()> {
        Err(Error::UnexpectedMessage {
            context: "process_server_certificate",
        })
    }

    fn requires_server_key_exchange(&self) -> bool {
        true
    }

    fn skip_server_key_exchange(&mut self) -> Result<()> {
        Err(Error::UnexpectedMessage {
            context: "skip_server_key_exchange",
        })
    }

    #[instrument(skip_all, err(Debug))]
    fn generate_server_key_exchange(&mut self) -> Result<Vec<u8>> {
        ensure_role(self.role, Role::Server, "generate_server_key_exchange")?;
        let out = self.state.generate_server_params(self.context.secure_random())?;
        debug!(len = out.len(), "generated anonymous ServerKeyExchange");
        Ok(out)
    }

    #[instrument(skip_all, err(Debug))]
    fn process_server_key_exchange(&mut self, input: &mut dyn Read) -> Result<()> {
        ensure_role(self.role, Role::Client, "process_server_key_exchange")?;
        let received = ServerDhParams::parse(input)?;
        self.state.accept_server_params(received, &self.config)
    }

    #[instrument(skip_all, err(Debug))]
    fn generate_client_key_exchange(&mut self) -> Result<Vec<u8>> {
        ensure_role(self.role, Role::Client, "generate_client_key_exchange")?;
        self.state.generate_client_public(self.context.secure_random())
    }

    #[instrument(skip_all, err(Debug))]
    fn process_client_key_exchange(&mut self, input: &mut dyn Read) -> Result<()> {
        ensure_role(self.role, Role::Server, "process_client_key_exchange")?;
        self.state.accept_client_public(input)
    }

    fn compute_shared_secret(&mut self) -> Result<SharedSecret> {
        self.state.compute_shared_secret()
    }
}
