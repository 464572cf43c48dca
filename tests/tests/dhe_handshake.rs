//! End-to-end key exchanges between independently constructed peers

use std::io::Cursor;

use num_bigint::BigUint;
use tlskex_api::{AlertDescription, Credentials, KeyExchange, ProtocolVersion, VerifyingKey};
use tlskex_dh::codec::{DigitallySigned, ServerDhParams};
use tlskex_dh::{DhConfig, NamedGroup, TranscriptHash};
use tlskex_params::traditional::dh::DH_2048_BYTE_LENGTH;
use tlskex_tests::fixtures::{
    run_exchange, security_parameters, server_credentials, PeerSetup, CLIENT_RANDOM, SERVER_RANDOM,
};
use tlskex_tests::init_tracing;

const VERSIONS: [ProtocolVersion; 3] = [
    ProtocolVersion::Tls10,
    ProtocolVersion::Tls11,
    ProtocolVersion::Tls12,
];

#[test]
fn dhe_agrees_for_every_version() {
    init_tracing();
    for version in VERSIONS {
        let (mut server, mut client) = PeerSetup::default().with_version(version).dhe().unwrap();
        let transcript = run_exchange(&mut server, &mut client).unwrap();
        assert_eq!(transcript.server_secret, transcript.client_secret, "{:?}", version);
    }
}

#[test]
fn dhe_agrees_on_2048_bit_group() {
    init_tracing();
    let setup = PeerSetup::default().with_group(NamedGroup::Rfc3526Modp2048);
    let (mut server, mut client) = setup.dhe().unwrap();
    let transcript = run_exchange(&mut server, &mut client).unwrap();

    assert_eq!(transcript.server_secret, transcript.client_secret);
    assert!(transcript.server_secret.len() <= DH_2048_BYTE_LENGTH);
    assert_ne!(transcript.server_secret.as_ref()[0], 0);
}

#[test]
fn fixed_randoms_and_seed_reproduce_the_exchange() {
    init_tracing();
    let setup = PeerSetup::default()
        .with_version(ProtocolVersion::Tls10)
        .with_seeds(0x5EED, 0xC0FFEE);

    let (mut s1, mut c1) = setup.dhe().unwrap();
    let first = run_exchange(&mut s1, &mut c1).unwrap();
    let (mut s2, mut c2) = setup.dhe().unwrap();
    let second = run_exchange(&mut s2, &mut c2).unwrap();

    assert_eq!(first.server_key_exchange, second.server_key_exchange);
    assert_eq!(first.client_key_exchange, second.client_key_exchange);
    assert_eq!(first.server_secret, second.server_secret);
}

#[test]
fn signature_verifies_over_randoms_and_params() {
    init_tracing();
    let setup = PeerSetup::default().with_version(ProtocolVersion::Tls12);
    let (mut server, _) = setup.dhe().unwrap();
    let ske = server.generate_server_key_exchange().unwrap();

    let mut cursor = Cursor::new(&ske);
    let params = ServerDhParams::parse(&mut cursor).unwrap();
    let params_len = cursor.position() as usize;
    let signed = DigitallySigned::parse(&mut cursor, true).unwrap();
    let algorithm = signed.algorithm().unwrap();

    let mut digest = TranscriptHash::for_algorithm(algorithm.hash);
    digest.update(&CLIENT_RANDOM);
    digest.update(&SERVER_RANDOM);
    digest.update(&ske[..params_len]);
    let digest = digest.finalize();

    let key = server_credentials(setup.credential_seed).verifying_key();
    assert!(key
        .verify_raw_signature(Some(algorithm), &digest, signed.signature())
        .unwrap());
    assert_eq!(params.parameters().g(), &BigUint::from(2u32));
}

#[test]
fn combined_digest_signature_before_tls12() {
    init_tracing();
    let setup = PeerSetup::default().with_version(ProtocolVersion::Tls11);
    let (mut server, _) = setup.dhe().unwrap();
    let ske = server.generate_server_key_exchange().unwrap();

    let mut cursor = Cursor::new(&ske);
    ServerDhParams::parse(&mut cursor).unwrap();
    let params_len = cursor.position() as usize;
    let signed = DigitallySigned::parse(&mut cursor, false).unwrap();

    let mut digest = TranscriptHash::combined();
    digest.update_randoms(&security_parameters(ProtocolVersion::Tls11));
    digest.update(&ske[..params_len]);
    let digest = digest.finalize();

    let key = server_credentials(setup.credential_seed).verifying_key();
    assert!(key.verify_raw_signature(None, &digest, signed.signature()).unwrap());
}

#[test]
fn anonymous_exchange_agrees() {
    init_tracing();
    for version in VERSIONS {
        let (mut server, mut client) = PeerSetup::default().with_version(version).anon();
        server.skip_server_credentials().unwrap();
        let transcript = run_exchange(&mut server, &mut client).unwrap();
        assert_eq!(transcript.server_secret, transcript.client_secret);
    }
}

#[test]
fn strict_client_accepts_named_groups() {
    init_tracing();
    let mut setup = PeerSetup::default().with_group(NamedGroup::Rfc3526Modp2048);
    setup.config = DhConfig::default()
        .with_require_known_group(true)
        .with_min_prime_bits(2048);

    let (mut server, mut client) = setup.dhe().unwrap();
    let transcript = run_exchange(&mut server, &mut client).unwrap();
    assert_eq!(transcript.server_secret, transcript.client_secret);
}

#[test]
fn client_policy_rejects_smaller_group() {
    init_tracing();
    let mut setup = PeerSetup::default();
    setup.config = DhConfig::default().with_min_prime_bits(2048);

    let (mut server, mut client) = setup.dhe().unwrap();
    let err = run_exchange(&mut server, &mut client).unwrap_err();
    assert_eq!(err.alert(), AlertDescription::InsufficientSecurity);
}

#[test]
fn client_certificate_from_other_key_is_rejected() {
    init_tracing();
    let setup = PeerSetup::default();
    let (mut server, _) = setup.dhe().unwrap();
    let ske = server.generate_server_key_exchange().unwrap();

    let mut other = setup.clone();
    other.credential_seed += 1;
    let (_, mut client) = other.dhe().unwrap();
    let err = client
        .process_server_key_exchange(&mut Cursor::new(ske))
        .unwrap_err();
    assert_eq!(err.alert(), AlertDescription::DecryptError);
    assert!(client.parameters().is_none());
}

#[test]
fn certificate_key_is_the_signing_key() {
    let credentials = server_credentials(3);
    let key = credentials.certificate().public_key();
    assert_eq!(
        key.signature_algorithm(),
        tlskex_api::SignatureAlgorithm::Ecdsa
    );
    assert_eq!(
        credentials.certificate().chain()[0],
        credentials.verifying_key().to_sec1_bytes()
    );
}
