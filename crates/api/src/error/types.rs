//! Error type definitions for key-exchange operations

use core::fmt;

/// TLS alert descriptions a key-exchange fault can be reported as
///
/// Only the descriptions this layer can raise are listed. The numeric
/// values are the wire codes from the TLS alert protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AlertDescription {
    /// unexpected_message(10)
    UnexpectedMessage = 10,
    /// bad_certificate(42)
    BadCertificate = 42,
    /// illegal_parameter(47)
    IllegalParameter = 47,
    /// decode_error(50)
    DecodeError = 50,
    /// decrypt_error(51)
    DecryptError = 51,
    /// insufficient_security(71)
    InsufficientSecurity = 71,
    /// internal_error(80)
    InternalError = 80,
}

impl AlertDescription {
    /// Wire code of this alert
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name as used in the TLS RFCs
    pub fn name(self) -> &'static str {
        match self {
            Self::UnexpectedMessage => "unexpected_message",
            Self::BadCertificate => "bad_certificate",
            Self::IllegalParameter => "illegal_parameter",
            Self::DecodeError => "decode_error",
            Self::DecryptError => "decrypt_error",
            Self::InsufficientSecurity => "insufficient_security",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.code())
    }
}

/// Primary error type for key-exchange operations
///
/// Every variant is fatal to the handshake in progress. The surrounding
/// handshake machinery turns it into an outbound alert via [`Error::alert`]
/// and tears the connection down.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Programming-contract violation inside the engine (role misuse,
    /// missing configuration, credentials without the needed capability)
    #[error("internal error in {context}: {message}")]
    Internal {
        context: &'static str,
        message: String,
    },

    /// The peer's signature over the key exchange did not verify
    #[error("decrypt error in {context}: signature verification failed")]
    DecryptError { context: &'static str },

    /// A peer-supplied value is outside its permitted range
    #[error("illegal parameter in {context}: {message}")]
    IllegalParameter {
        context: &'static str,
        message: String,
    },

    /// Malformed or truncated wire encoding
    #[error("decode error in {context}: {message}")]
    Decode {
        context: &'static str,
        message: String,
    },

    /// Peer parameters are well formed but weaker than local policy allows
    #[error("insufficient security in {context}: {message}")]
    InsufficientSecurity {
        context: &'static str,
        message: String,
    },

    /// The peer's certificate cannot be used for this key exchange
    #[error("bad certificate in {context}: {message}")]
    BadCertificate {
        context: &'static str,
        message: String,
    },

    /// A handshake message arrived (or was skipped) where this key exchange
    /// does not allow it
    #[error("unexpected message in {context}")]
    UnexpectedMessage { context: &'static str },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::Internal`]
    pub fn internal(context: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::IllegalParameter`]
    pub fn illegal_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::IllegalParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::Decode`]
    pub fn decode(context: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InsufficientSecurity`]
    pub fn insufficient_security(context: &'static str, message: impl Into<String>) -> Self {
        Self::InsufficientSecurity {
            context,
            message: message.into(),
        }
    }

    /// The fatal alert the caller must send for this error
    pub fn alert(&self) -> AlertDescription {
        match self {
            Self::Internal { .. } => AlertDescription::InternalError,
            Self::DecryptError { .. } => AlertDescription::DecryptError,
            Self::IllegalParameter { .. } => AlertDescription::IllegalParameter,
            Self::Decode { .. } => AlertDescription::DecodeError,
            Self::InsufficientSecurity { .. } => AlertDescription::InsufficientSecurity,
            Self::BadCertificate { .. } => AlertDescription::BadCertificate,
            Self::UnexpectedMessage { .. } => AlertDescription::UnexpectedMessage,
        }
    }

    /// Context string naming the operation that failed
    pub fn context(&self) -> &'static str {
        match self {
            Self::Internal { context, .. }
            | Self::DecryptError { context }
            | Self::IllegalParameter { context, .. }
            | Self::Decode { context, .. }
            | Self::InsufficientSecurity { context, .. }
            | Self::BadCertificate { context, .. }
            | Self::UnexpectedMessage { context } => context,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Internal { message, .. } => Self::Internal { context, message },
            Self::DecryptError { .. } => Self::DecryptError { context },
            Self::IllegalParameter { message, .. } => Self::IllegalParameter { context, message },
            Self::Decode { message, .. } => Self::Decode { context, message },
            Self::InsufficientSecurity { message, .. } => {
                Self::InsufficientSecurity { context, message }
            }
            Self::BadCertificate { message, .. } => Self::BadCertificate { context, message },
            Self::UnexpectedMessage { .. } => Self::UnexpectedMessage { context },
        }
    }
}
