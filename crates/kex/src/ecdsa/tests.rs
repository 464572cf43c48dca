// File: crates/kex/src/ecdsa/tests.rs
use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tlskex_api::AlertDescription;

fn credentials() -> EcdsaP256Credentials {
    EcdsaP256Credentials::generate(&mut ChaCha20Rng::seed_from_u64(42))
}

fn sha256() -> SignatureAndHashAlgorithm {
    SignatureAndHashAlgorithm::new(HashAlgorithm::Sha256, SignatureAlgorithm::Ecdsa)
}

#[test]
fn test_combined_digest_sign_verify() {
    let creds = credentials();
    let digest = [0x5Au8; COMBINED_OUTPUT_SIZE];
    let signature = creds.generate_certificate_signature(None, &digest).unwrap();

    let key = creds.verifying_key();
    assert!(key.verify_raw_signature(None, &digest, &signature).unwrap());

    // only the SHA-1 half is covered
    let mut md5_changed = digest;
    md5_changed[0] ^= 1;
    assert!(key.verify_raw_signature(None, &md5_changed, &signature).unwrap());

    let mut sha1_changed = digest;
    sha1_changed[COMBINED_OUTPUT_SIZE - 1] ^= 1;
    assert!(!key.verify_raw_signature(None, &sha1_changed, &signature).unwrap());
}

#[test]
fn test_negotiated_digest_sign_verify() {
    let creds = credentials();
    let digest = [0x11u8; 32];
    let signature = creds
        .generate_certificate_signature(Some(sha256()), &digest)
        .unwrap();
    let key = creds.verifying_key();
    assert!(key.verify_raw_signature(Some(sha256()), &digest, &signature).unwrap());
    assert!(!key.verify_raw_signature(Some(sha256()), &[0x12u8; 32], &signature).unwrap());
}

#[test]
fn test_signatures_are_deterministic() {
    let creds = credentials();
    let digest = [0x33u8; 32];
    let a = creds.generate_certificate_signature(Some(sha256()), &digest).unwrap();
    let b = creds.generate_certificate_signature(Some(sha256()), &digest).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_undecodable_signature_is_false() {
    let key = credentials().verifying_key();
    let digest = [0u8; COMBINED_OUTPUT_SIZE];
    assert!(!key.verify_raw_signature(None, &digest, &[]).unwrap());
    assert!(!key.verify_raw_signature(None, &digest, &[0x30, 0x02, 0x00]).unwrap());
}

#[test]
fn test_wrong_digest_shape_is_internal_error() {
    let creds = credentials();
    let err = creds.generate_certificate_signature(None, &[0u8; 20]).unwrap_err();
    assert_eq!(err.alert(), AlertDescription::InternalError);

    let rsa = SignatureAndHashAlgorithm::new(HashAlgorithm::Sha256, SignatureAlgorithm::Rsa);
    let err = creds.generate_certificate_signature(Some(rsa), &[0u8; 32]).unwrap_err();
    assert_eq!(err.alert(), AlertDescription::InternalError);
}

#[test]
fn test_credentials_capabilities() {
    let creds = credentials().with_hash(HashAlgorithm::Sha384);
    assert!(creds.supports_signing());
    assert_eq!(
        creds.signature_and_hash_algorithm(),
        SignatureAndHashAlgorithm::new(HashAlgorithm::Sha384, SignatureAlgorithm::Ecdsa)
    );
    assert!(!creds.certificate().is_empty());
    assert_eq!(
        creds.certificate().public_key().signature_algorithm(),
        SignatureAlgorithm::Ecdsa
    );
}

#[test]
fn test_sec1_round_trip() {
    let key = credentials().verifying_key();
    let encoded = key.to_sec1_bytes();
    assert_eq!(encoded.len(), 33);
    let decoded = EcdsaP256VerifyingKey::from_sec1_bytes(&encoded).unwrap();
    assert_eq!(decoded.to_sec1_bytes(), encoded);

    let err = EcdsaP256VerifyingKey::from_sec1_bytes(&[0x02; 5]).unwrap_err();
    assert_eq!(err.alert(), AlertDescription::DecodeError);
}
