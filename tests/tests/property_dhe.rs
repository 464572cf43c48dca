//! Property-based tests for the Diffie-Hellman key exchanges

use std::io::Cursor;

use num_bigint::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tlskex_api::{AlertDescription, KeyExchange, ProtocolVersion};
use tlskex_dh::dh::validate_dh_public_value;
use tlskex_dh::{DhKeyPair, DhParameters};
use tlskex_tests::fixtures::{run_exchange, PeerSetup};

// 2039 = 2 * 1019 + 1, with 2 generating the order-1019 subgroup
fn small_group() -> DhParameters {
    DhParameters::new(BigUint::from(2039u32), BigUint::from(2u32)).with_order(BigUint::from(1019u32))
}

fn version() -> impl Strategy<Value = ProtocolVersion> {
    prop_oneof![
        Just(ProtocolVersion::Tls10),
        Just(ProtocolVersion::Tls11),
        Just(ProtocolVersion::Tls12),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn peers_always_agree(
        version in version(),
        server_seed in any::<u64>(),
        client_seed in any::<u64>()
    ) {
        let setup = PeerSetup::default()
            .with_version(version)
            .with_seeds(server_seed, client_seed);
        let (mut server, mut client) = setup.dhe().unwrap();
        let transcript = run_exchange(&mut server, &mut client).unwrap();
        prop_assert_eq!(transcript.server_secret, transcript.client_secret);
    }

    #[test]
    fn any_flipped_bit_in_signed_params_is_detected(
        version in version(),
        field in 0u8..3,
        offset in 0usize..128,
        bit in 0u8..8
    ) {
        let setup = PeerSetup::default().with_version(version);
        let (mut server, mut client) = setup.dhe().unwrap();
        let mut ske = server.generate_server_key_exchange().unwrap();

        // p body is bytes 2..130, g is the single byte at 132, Ys body starts at 135
        let index = match field {
            0 => 2 + offset,
            1 => 132,
            _ => {
                let ys_len = usize::from(u16::from_be_bytes([ske[133], ske[134]]));
                135 + offset % ys_len
            }
        };
        ske[index] ^= 1 << bit;

        let err = client
            .process_server_key_exchange(&mut Cursor::new(ske))
            .unwrap_err();
        prop_assert_eq!(err.alert(), AlertDescription::DecryptError);
    }

    #[test]
    fn garbage_server_key_exchange_is_rejected(
        version in version(),
        bytes in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let (_, mut client) = PeerSetup::default().with_version(version).dhe().unwrap();
        prop_assert!(client.process_server_key_exchange(&mut Cursor::new(bytes)).is_err());
        prop_assert!(client.parameters().is_none());
    }

    #[test]
    fn accepted_values_lie_in_the_subgroup(y in 0u32..4096) {
        let params = small_group();
        let p = params.p().clone();
        let q = params.q().unwrap().clone();
        match validate_dh_public_value(BigUint::from(y), &params) {
            Ok(accepted) => {
                prop_assert!(accepted.value() >= &BigUint::from(2u32));
                prop_assert!(accepted.value() <= &(&p - 2u32));
                prop_assert_eq!(accepted.value().modpow(&q, &p), BigUint::from(1u32));
            }
            Err(e) => prop_assert_eq!(e.alert(), AlertDescription::IllegalParameter),
        }
    }

    #[test]
    fn generated_public_values_validate(seed in any::<u64>()) {
        let params = small_group();
        let pair = DhKeyPair::generate(&params, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
        prop_assert!(validate_dh_public_value(pair.public_value().clone(), &params).is_ok());
    }
}
