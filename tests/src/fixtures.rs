//! Deterministic peers and a driver for complete key exchanges

use std::io::Cursor;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tlskex_api::{
    Credentials, KeyExchange, ProtocolVersion, Result, SecurityParameters, SharedSecret,
};
use tlskex_dh::{
    DhAnonKeyExchange, DhConfig, DhParameters, DheKeyExchange, EcdsaP256Credentials,
    HandshakeContext, NamedGroup,
};

pub const CLIENT_RANDOM: [u8; 32] = [0x01; 32];
pub const SERVER_RANDOM: [u8; 32] = [0x02; 32];

pub type TestContext = HandshakeContext<ChaCha20Rng>;

pub fn security_parameters(version: ProtocolVersion) -> SecurityParameters {
    SecurityParameters::new(CLIENT_RANDOM, SERVER_RANDOM, version)
}

/// Context with a seeded random source and the fixed randoms
pub fn context(version: ProtocolVersion, seed: u64) -> TestContext {
    HandshakeContext::new(ChaCha20Rng::seed_from_u64(seed), security_parameters(version))
}

pub fn named_group(group: NamedGroup) -> Arc<DhParameters> {
    match DhParameters::named(group) {
        Ok(params) => Arc::new(params),
        Err(e) => panic!("built-in group {:?} failed to load: {}", group, e),
    }
}

pub fn server_credentials(seed: u64) -> Arc<EcdsaP256Credentials> {
    Arc::new(EcdsaP256Credentials::generate(&mut ChaCha20Rng::seed_from_u64(seed)))
}

/// Seeds and settings for one pair of peers
#[derive(Clone, Debug)]
pub struct PeerSetup {
    pub version: ProtocolVersion,
    pub group: NamedGroup,
    pub server_seed: u64,
    pub client_seed: u64,
    pub credential_seed: u64,
    pub config: DhConfig,
}

impl Default for PeerSetup {
    fn default() -> Self {
        Self {
            version: ProtocolVersion::Tls12,
            group: NamedGroup::Rfc2409Modp1024,
            server_seed: 1,
            client_seed: 2,
            credential_seed: 3,
            config: DhConfig::default(),
        }
    }
}

impl PeerSetup {
    pub fn with_version(mut self, version: ProtocolVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_group(mut self, group: NamedGroup) -> Self {
        self.group = group;
        self
    }

    pub fn with_seeds(mut self, server_seed: u64, client_seed: u64) -> Self {
        self.server_seed = server_seed;
        self.client_seed = client_seed;
        self
    }

    /// DHE server with credentials, client with the matching certificate
    pub fn dhe(&self) -> Result<(DheKeyExchange<TestContext>, DheKeyExchange<TestContext>)> {
        let credentials = server_credentials(self.credential_seed);

        let mut server = DheKeyExchange::server(
            context(self.version, self.server_seed),
            named_group(self.group),
        );
        server.process_server_credentials(credentials.clone())?;

        let mut client =
            DheKeyExchange::client(context(self.version, self.client_seed), self.config.clone());
        client.process_server_certificate(credentials.certificate())?;
        Ok((server, client))
    }

    pub fn anon(&self) -> (DhAnonKeyExchange<TestContext>, DhAnonKeyExchange<TestContext>) {
        (
            DhAnonKeyExchange::server(
                context(self.version, self.server_seed),
                named_group(self.group),
            ),
            DhAnonKeyExchange::client(context(self.version, self.client_seed), self.config.clone()),
        )
    }
}

/// Everything that crossed the wire, plus both computed secrets
#[derive(Debug)]
pub struct Transcript {
    pub server_key_exchange: Vec<u8>,
    pub client_key_exchange: Vec<u8>,
    pub server_secret: SharedSecret,
    pub client_secret: SharedSecret,
}

/// Drive a server and a client through one exchange
pub fn run_exchange(server: &mut dyn KeyExchange, client: &mut dyn KeyExchange) -> Result<Transcript> {
    let server_key_exchange = server.generate_server_key_exchange()?;
    client.process_server_key_exchange(&mut Cursor::new(&server_key_exchange))?;

    let client_key_exchange = client.generate_client_key_exchange()?;
    server.process_client_key_exchange(&mut Cursor::new(&client_key_exchange))?;

    Ok(Transcript {
        server_key_exchange,
        client_key_exchange,
        server_secret: server.compute_shared_secret()?,
        client_secret: client.compute_shared_secret()?,
    })
}
