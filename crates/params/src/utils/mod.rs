//! Constants for the primitives the key exchange composes

pub mod hash;
