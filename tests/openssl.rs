mod util;

use std::fs;
use std::process::Command;

use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::x509::X509;
use pemkit::convert;
use pemkit::key::PrivateKey;
use regex::Regex;
use rsa::traits::PublicKeyParts;

#[test]
fn test_openssl_crate_agrees_on_der() {
    for pem in [
        util::SELF_SIGNED_P256_CERT_PEM,
        util::SELF_SIGNED_RSA_CERT_PEM,
    ] {
        let ours = convert::parse_public_key_certificate(pem).unwrap();
        let reference = X509::from_pem(pem.as_bytes()).expect("Failed to parse PEM");
        assert_eq!(ours.to_der().unwrap(), reference.to_der().unwrap());
    }
}

#[test]
fn test_openssl_crate_agrees_on_subject() {
    let ours = convert::parse_public_key_certificate(util::SELF_SIGNED_P256_CERT_PEM).unwrap();
    let reference = X509::from_pem(util::SELF_SIGNED_P256_CERT_PEM.as_bytes()).unwrap();

    // Check subject
    let subject = reference
        .subject_name()
        .entries_by_nid(Nid::COMMONNAME)
        .next()
        .unwrap()
        .data()
        .as_utf8()
        .unwrap();
    assert_eq!(
        ours.subject_common_name().unwrap(),
        subject.to_string(),
        "Subject CN mismatch"
    );

    // Check issuer
    let issuer = reference
        .issuer_name()
        .entries_by_nid(Nid::COMMONNAME)
        .next()
        .unwrap()
        .data()
        .as_utf8()
        .unwrap();
    assert_eq!(
        ours.issuer_common_name().unwrap(),
        issuer.to_string(),
        "Issuer CN mismatch"
    );
}

#[test]
fn test_openssl_crate_agrees_on_rsa_modulus() {
    let key = convert::parse_private_key(util::RSA_2048_PKCS1_PEM).unwrap();
    let PrivateKey::Rsa(private) = key else {
        panic!("expected an RSA key");
    };

    let reference = openssl::rsa::Rsa::private_key_from_pem(util::RSA_2048_PKCS1_PEM.as_bytes())
        .expect("Failed to parse PEM");
    assert_eq!(private.n().to_bytes_be(), reference.n().to_vec());
}

#[test]
fn test_openssl_crate_agrees_on_ed25519_public_key() {
    let key = convert::parse_private_key(util::ED25519_PKCS8_PEM).unwrap();
    let PrivateKey::Ed25519(signing_key) = key else {
        panic!("expected an Ed25519 key");
    };

    let reference = openssl::pkey::PKey::private_key_from_pem(util::ED25519_PKCS8_PEM.as_bytes())
        .expect("Failed to parse PEM");
    assert_eq!(
        signing_key.verifying_key().to_bytes().to_vec(),
        reference.raw_public_key().unwrap()
    );
}

#[test]
fn test_openssl_crate_agrees_on_fingerprint() {
    let ours = convert::parse_public_key_certificate(util::SELF_SIGNED_RSA_CERT_PEM).unwrap();
    let reference = X509::from_pem(util::SELF_SIGNED_RSA_CERT_PEM.as_bytes()).unwrap();
    let digest = reference.digest(MessageDigest::sha256()).unwrap();
    assert_eq!(
        ours.fingerprint_sha256().unwrap().as_slice(),
        digest.as_ref()
    );
}

#[test]
fn test_openssl_cli_reads_reencoded_cert() {
    let cert = convert::parse_public_key_certificate(util::SELF_SIGNED_P256_CERT_PEM).unwrap();
    let cert_pem = cert.to_pem().unwrap();

    // Save the re-encoded certificate to a temporary file
    let cert_path = "/tmp/pemkit_test_cert.pem";
    fs::write(cert_path, cert_pem).expect("Failed to write certificate");

    // Use OpenSSL CLI to validate the re-encoded certificate
    let output = Command::new("openssl")
        .arg("x509")
        .arg("-in")
        .arg(cert_path)
        .arg("-noout")
        .arg("-text")
        .output()
        .expect("Failed to execute OpenSSL command");

    // Check if OpenSSL command was successful
    assert!(
        output.status.success(),
        "OpenSSL command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output_text = String::from_utf8_lossy(&output.stdout);

    // Validate static fields with partial matching; the exact DN spacing
    // differs between OpenSSL versions
    let subject_regex = Regex::new(r"Subject: .*CN\s*=\s*pemkit\.test").unwrap();
    assert!(
        subject_regex.is_match(&output_text),
        "Subject field is incorrect"
    );

    let not_before_regex = Regex::new(r"Not Before: .+2026").unwrap();
    let not_after_regex = Regex::new(r"Not After : .+2036").unwrap();
    assert!(
        not_before_regex.is_match(&output_text),
        "Missing or incorrect Not Before field"
    );
    assert!(
        not_after_regex.is_match(&output_text),
        "Missing or incorrect Not After field"
    );
    assert!(
        output_text.contains("Signature Algorithm: ecdsa-with-SHA256"),
        "Signature Algorithm field is incorrect"
    );

    // Clean up temporary files
    fs::remove_file(cert_path).expect("Failed to remove test certificate");
}
