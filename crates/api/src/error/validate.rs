//! Validation utilities for key-exchange operations

use super::{Error, Result};

/// Fail with an internal error unless `condition` holds
#[inline(always)]
pub fn internal(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::internal(context, message));
    }
    Ok(())
}

/// Fail with an illegal-parameter error unless `condition` holds
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::illegal_parameter(context, message));
    }
    Ok(())
}

/// Fail with a decode error unless `condition` holds
#[inline(always)]
pub fn decode(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::decode(context, message));
    }
    Ok(())
}

/// Validate that an opaque value fits a length prefix of `max` bytes
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::internal(
            context,
            format!("length {} exceeds maximum {}", actual, max),
        ));
    }
    Ok(())
}
