//! Error handling for the key-exchange engine
//!
//! Every fault raised by this layer is fatal. Errors carry the TLS alert the
//! caller has to send, see [`Error::alert`].

pub mod types;
pub mod validate;

pub use types::{AlertDescription, Error, Result};

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Decode {
                context: "read",
                message: "unexpected end of input".to_string(),
            },
            _ => Self::Internal {
                context: "I/O operation",
                message: e.to_string(),
            },
        }
    }
}
