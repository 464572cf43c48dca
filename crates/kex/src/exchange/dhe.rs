// File: crates/kex/src/exchange/dhe.rs
//! Ephemeral Diffie-Hellman with a signed ServerKeyExchange
//!
//! The server signs `client_random || server_random || ServerDHParams`
//! with its certificate key. The client authenticates the parameters
//! against the key from the server certificate before it validates or
//! uses any of them.

use std::io::Read;
use std::sync::Arc;

use num_bigint::BigUint;
use tracing::{debug, error, instrument};

use tlskex_api::{
    Certificate, Credentials, Error, KeyExchange, Result, Role, SecurityParameters, SharedSecret,
    SignatureAndHashAlgorithm, TlsContext, VerifyingKey,
};

use super::{ensure_role, DhExchangeState};
use crate::codec::{DigitallySigned, ServerDhParams};
use crate::config::DhConfig;
use crate::dh::{DhParameters, ValidatedPublicValue};
use crate::signer::{SignerReader, TranscriptSigner};

/// DHE key exchange (DHE_RSA, DHE_DSS, DHE with ECDSA certificates)
pub struct DheKeyExchange<C: TlsContext> {
    context: C,
    role: Role,
    config: DhConfig,
    state: DhExchangeState,
    server_credentials: Option<Arc<dyn Credentials>>,
    server_public_key: Option<Arc<dyn VerifyingKey>>,
}

impl<C: TlsContext> DheKeyExchange<C> {
    /// Server side using the locally configured group
    pub fn server(context: C, parameters: Arc<DhParameters>) -> Self {
        Self {
            context,
            role: Role::Server,
            config: DhConfig::default(),
            state: DhExchangeState::with_parameters(parameters),
            server_credentials: None,
            server_public_key: None,
        }
    }

    /// Client side; the group arrives in the ServerKeyExchange
    pub fn client(context: C, config: DhConfig) -> Self {
        Self {
            context,
            role: Role::Client,
            config,
            state: DhExchangeState::default(),
            server_credentials: None,
            server_public_key: None,
        }
    }

    /// Group in use, once known
    pub fn parameters(&self) -> Option<&DhParameters> {
        self.state.parameters()
    }

    /// Own ephemeral public value, once generated
    pub fn public_value(&self) -> Option<&BigUint> {
        self.state.public_value()
    }

    /// Peer public value, once received and validated
    pub fn peer_public_value(&self) -> Option<&ValidatedPublicValue> {
        self.state.peer_public_value()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Check the identifier a TLS 1.2 server chose against the client's
    /// advertised list and the certificate key type
    fn check_signature_algorithm(
        &self,
        algorithm: SignatureAndHashAlgorithm,
        public_key: &dyn VerifyingKey,
    ) -> Result<()> {
        const CONTEXT: &str = "process_server_key_exchange";
        if !self.config.allows_signature_algorithm(algorithm) {
            return Err(Error::illegal_parameter(CONTEXT, "signature algorithm was not offered"));
        }
        if algorithm.signature != public_key.signature_algorithm() {
            return Err(Error::illegal_parameter(
                CONTEXT,
                "signature algorithm does not match server certificate",
            ));
        }
        Ok(())
    }

    /// Parse ServerDHParams and the signature over them, returning the
    /// parameters only when the signature verifies
    fn read_signed_params(
        &self,
        input: &mut dyn Read,
        public_key: &dyn VerifyingKey,
        security_parameters: &SecurityParameters,
    ) -> Result<ServerDhParams> {
        const CONTEXT: &str = "process_server_key_exchange";

        let (received, verified) = if security_parameters.protocol_version().uses_signature_algorithms() {
            // the digest depends on the identifier that follows the params
            let mut signed_bytes = Vec::new();
            let received = ServerDhParams::parse(&mut SignerReader::new(&mut *input, &mut signed_bytes))?;
            let signed = DigitallySigned::parse(&mut *input, true)?;
            let algorithm = signed
                .algorithm()
                .ok_or_else(|| Error::internal(CONTEXT, "missing signature algorithm"))?;
            self.check_signature_algorithm(algorithm, public_key)?;

            let mut verifier =
                TranscriptSigner::for_verifying(public_key, Some(algorithm), security_parameters);
            verifier.update(&signed_bytes);
            (received, verifier.verify_signature(signed.signature())?)
        } else {
            let mut verifier = TranscriptSigner::for_verifying(public_key, None, security_parameters);
            let received = ServerDhParams::parse(&mut SignerReader::new(&mut *input, &mut verifier))?;
            let signed = DigitallySigned::parse(&mut *input, false)?;
            (received, verifier.verify_signature(signed.signature())?)
        };

        if !verified {
            error!("ServerKeyExchange signature did not verify");
            return Err(Error::DecryptError { context: CONTEXT });
        }
        Ok(received)
    }
}

impl<C: TlsContext> KeyExchange for DheKeyExchange<C> {
    fn role(&self) -> Role {
        self.role
    }

    fn requires_server_credentials(&self) -> bool {
        true
    }

    fn skip_server_credentials(&mut self) -> Result<()> {
        Err(Error::internal(
            "skip_server_credentials",
            "DHE requires server credentials",
        ))
    }

    fn process_server_credentials(&mut self, credentials: Arc<dyn Credentials>) -> Result<()> {
        const CONTEXT: &str = "process_server_credentials";
        ensure_role(self.role, Role::Server, CONTEXT)?;
        if !credentials.supports_signing() {
            return Err(Error::internal(CONTEXT, "server credentials cannot sign"));
        }
        self.server_credentials = Some(credentials);
        Ok(())
    }

    fn process_server_certificate(&mut self, certificate: &Certificate) -> Result<()> {
        const CONTEXT: &str = "process_server_certificate";
        ensure_role(self.role, Role::Client, CONTEXT)?;
        if certificate.is_empty() {
            return Err(Error::BadCertificate {
                context: CONTEXT,
                message: "empty certificate chain".to_string(),
            });
        }
        self.server_public_key = Some(certificate.public_key());
        Ok(())
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
        const CONTEXT: &str = "generate_server_key_exchange";
        ensure_role(self.role, Role::Server, CONTEXT)?;
        if self.state.parameters().is_none() {
            return Err(Error::internal(CONTEXT, "no DH parameters configured"));
        }
        let credentials = self
            .server_credentials
            .clone()
            .ok_or_else(|| Error::internal(CONTEXT, "no server credentials"))?;
        let signer = credentials
            .as_signer()
            .ok_or_else(|| Error::internal(CONTEXT, "server credentials cannot sign"))?;

        let mut out = self.state.generate_server_params(self.context.secure_random())?;

        let security_parameters = self.context.security_parameters();
        let algorithm = security_parameters
            .protocol_version()
            .uses_signature_algorithms()
            .then(|| signer.signature_and_hash_algorithm());

        let mut transcript = TranscriptSigner::for_signing(signer, algorithm, security_parameters);
        transcript.update(&out);
        let signature = transcript.generate_signature()?;
        DigitallySigned::new(algorithm, signature).encode(&mut out)?;

        debug!(len = out.len(), "generated ServerKeyExchange");
        Ok(out)
    }

    #[instrument(skip_all, err(Debug))]
    fn process_server_key_exchange(&mut self, input: &mut dyn Read) -> Result<()> {
        const CONTEXT: &str = "process_server_key_exchange";
        ensure_role(self.role, Role::Client, CONTEXT)?;
        let public_key = self
            .server_public_key
            .clone()
            .ok_or_else(|| Error::internal(CONTEXT, "no server certificate processed"))?;

        let security_parameters = self.context.security_parameters().clone();
        let received = self.read_signed_params(input, &*public_key, &security_parameters)?;
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
