//! Constants for traditional (finite-field) key exchange

pub mod dh;
