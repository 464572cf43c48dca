// File: crates/kex/src/exchange/mod.rs
//! Key-exchange variants built on [`DhExchangeState`]
//!
//! Each variant owns one [`DhExchangeState`] and adds its own
//! authentication around it. The handshake engine drives them through the
//! [`tlskex_api::KeyExchange`] trait object.

mod anon;
mod dhe;
mod state;

pub use anon::DhAnonKeyExchange;
pub use dhe::DheKeyExchange;
pub use state::DhExchangeState;

use tlskex_api::{Error, Result, Role};

/// Fail with an internal error when an operation is called on the wrong role
fn ensure_role(actual: Role, expected: Role, context: &'static str) -> Result<()> {
    if actual != expected {
        return Err(Error::internal(
            context,
            format!("operation requires {} role, instance is {}", expected, actual),
        ));
    }
    Ok(())
}
