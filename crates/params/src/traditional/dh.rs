//! Constants for Diffie-Hellman key exchange

/// DH with 1024-bit modulus
pub const DH_MODULUS_1024: usize = 1024;

/// DH with 2048-bit modulus
pub const DH_MODULUS_2048: usize = 2048;

/// Byte length for DH-1024 values
pub const DH_1024_BYTE_LENGTH: usize = DH_MODULUS_1024 / 8;

/// Byte length for DH-2048 values
pub const DH_2048_BYTE_LENGTH: usize = DH_MODULUS_2048 / 8;

/// Smallest peer modulus accepted unless configured otherwise
pub const DH_DEFAULT_MIN_PRIME_BITS: usize = DH_MODULUS_1024;

/// Largest value a 16-bit length prefix can describe
pub const OPAQUE16_MAX_LENGTH: usize = u16::MAX as usize;

// RFC 2409 Oakley group 2 and RFC 3526 group 14 generator
pub const DH_MODP_GENERATOR: u32 = 2;

/// RFC 2409 section 6.2, Oakley group 2 (1024-bit MODP), big-endian hex
///
/// A safe prime: the subgroup generated by 2 has order (p - 1) / 2.
pub const RFC2409_MODP_1024_PRIME_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE65381",
    "FFFFFFFFFFFFFFFF",
);

/// RFC 3526 section 3, group 14 (2048-bit MODP), big-endian hex
///
/// A safe prime: the subgroup generated by 2 has order (p - 1) / 2.
pub const RFC3526_MODP_2048_PRIME_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9",
    "DE2BCBF6955817183995497CEA956AE515D2261898FA0510",
    "15728E5A8AACAA68FFFFFFFFFFFFFFFF",
);
