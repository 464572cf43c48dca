// File: crates/kex/src/codec/mod.rs
//! Wire codec for the Diffie-Hellman key-exchange messages
//!
//! ```text
//! struct {
//!     opaque dh_p<1..2^16-1>;
//!     opaque dh_g<1..2^16-1>;
//!     opaque dh_Ys<1..2^16-1>;
//! } ServerDHParams;
//!
//! struct {
//!     SignatureAndHashAlgorithm algorithm;   /* TLS 1.2 only */
//!     opaque signature<0..2^16-1>;
//! } DigitallySigned;
//!
//! struct {
//!     opaque dh_Yc<1..2^16-1>;
//! } ClientDiffieHellmanPublic;
//! ```
//!
//! Integers are unsigned big-endian. Readers consume exactly the bytes of
//! the structure they parse and never read ahead.

use std::io::Read;

use num_bigint::BigUint;
use tlskex_api::error::validate;
use tlskex_api::{Error, Result, SignatureAndHashAlgorithm};
use tlskex_params::traditional::dh::OPAQUE16_MAX_LENGTH;

use crate::dh::DhParameters;

/// Append a 16-bit big-endian integer
pub fn write_uint16(value: usize, out: &mut Vec<u8>) -> Result<()> {
    validate::max_length("write_uint16", value, OPAQUE16_MAX_LENGTH)?;
    out.extend_from_slice(&(value as u16).to_be_bytes());
    Ok(())
}

/// Read exactly `buf.len()` bytes, reporting truncation as a decode fault
pub fn read_fully<R: Read + ?Sized>(input: &mut R, buf: &mut [u8]) -> Result<()> {
    input.read_exact(buf).map_err(Error::from)
}

/// Read a 16-bit big-endian integer
pub fn read_uint16<R: Read + ?Sized>(input: &mut R) -> Result<u16> {
    let mut bytes = [0u8; 2];
    read_fully(input, &mut bytes)?;
    Ok(u16::from_be_bytes(bytes))
}

/// Append an opaque value with a 16-bit length prefix
pub fn write_opaque16(data: &[u8], out: &mut Vec<u8>) -> Result<()> {
    write_uint16(data.len(), out)?;
    out.extend_from_slice(data);
    Ok(())
}

/// Read an opaque value with a 16-bit length prefix
pub fn read_opaque16<R: Read + ?Sized>(input: &mut R) -> Result<Vec<u8>> {
    let length = read_uint16(input)? as usize;
    let mut data = vec![0u8; length];
    read_fully(input, &mut data)?;
    Ok(data)
}

/// Append a DH integer as a non-empty opaque16
pub fn write_dh_parameter(value: &BigUint, out: &mut Vec<u8>) -> Result<()> {
    write_opaque16(&value.to_bytes_be(), out)
}

/// Read a DH integer from a non-empty opaque16
pub fn read_dh_parameter<R: Read + ?Sized>(input: &mut R) -> Result<BigUint> {
    let bytes = read_opaque16(input)?;
    validate::decode(!bytes.is_empty(), "read_dh_parameter", "empty DH integer")?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Group parameters and public value as sent by the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerDhParams {
    parameters: DhParameters,
    public_value: BigUint,
}

impl ServerDhParams {
    pub fn new(parameters: DhParameters, public_value: BigUint) -> Self {
        Self {
            parameters,
            public_value,
        }
    }

    /// Group parameters (p, g) as received; not yet validated
    pub fn parameters(&self) -> &DhParameters {
        &self.parameters
    }

    /// Server public value Ys as received; not yet validated
    pub fn public_value(&self) -> &BigUint {
        &self.public_value
    }

    /// Split into parameters and public value
    pub fn into_parts(self) -> (DhParameters, BigUint) {
        (self.parameters, self.public_value)
    }

    /// Append the wire form
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_dh_parameter(self.parameters.p(), out)?;
        write_dh_parameter(self.parameters.g(), out)?;
        write_dh_parameter(&self.public_value, out)
    }

    /// Parse the wire form
    pub fn parse<R: Read + ?Sized>(input: &mut R) -> Result<Self> {
        let p = read_dh_parameter(input)?;
        let g = read_dh_parameter(input)?;
        let ys = read_dh_parameter(input)?;
        Ok(Self::new(DhParameters::new(p, g), ys))
    }
}

/// A signature with its optional TLS 1.2 algorithm identifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitallySigned {
    algorithm: Option<SignatureAndHashAlgorithm>,
    signature: Vec<u8>,
}

impl DigitallySigned {
    pub fn new(algorithm: Option<SignatureAndHashAlgorithm>, signature: Vec<u8>) -> Self {
        Self {
            algorithm,
            signature,
        }
    }

    pub fn algorithm(&self) -> Option<SignatureAndHashAlgorithm> {
        self.algorithm
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Append the wire form
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        if let Some(algorithm) = self.algorithm {
            out.extend_from_slice(&algorithm.to_bytes());
        }
        write_opaque16(&self.signature, out)
    }

    /// Parse the wire form
    ///
    /// `with_algorithm` selects the TLS 1.2 layout that starts with the
    /// two-byte signature-and-hash identifier.
    pub fn parse<R: Read + ?Sized>(input: &mut R, with_algorithm: bool) -> Result<Self> {
        let algorithm = if with_algorithm {
            let mut bytes = [0u8; 2];
            read_fully(input, &mut bytes)?;
            Some(SignatureAndHashAlgorithm::from_bytes(bytes)?)
        } else {
            None
        };
        let signature = read_opaque16(input)?;
        Ok(Self::new(algorithm, signature))
    }
}

/// Append a ClientDiffieHellmanPublic (explicit encoding)
pub fn write_client_public(public_value: &BigUint, out: &mut Vec<u8>) -> Result<()> {
    write_dh_parameter(public_value, out)
}

/// Read a ClientDiffieHellmanPublic (explicit encoding)
pub fn read_client_public<R: Read + ?Sized>(input: &mut R) -> Result<BigUint> {
    read_dh_parameter(input)
}
