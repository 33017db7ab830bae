mod util;

use botan::Certificate as BotanCertificate;

use pemkit::convert;

fn check_cert(cert_der: &[u8]) {
    // Use botan crate to parse the DER and assert it succeeds
    BotanCertificate::load(cert_der).expect("Botan failed to parse certificate");
}

#[test]
#[ignore]
fn test_botan_ecdsa_p256() {
    let cert = convert::parse_public_key_certificate(util::SELF_SIGNED_P256_CERT_PEM).unwrap();
    check_cert(&cert.to_der().unwrap());
}

#[test]
#[ignore]
fn test_botan_rsa() {
    let cert = convert::parse_public_key_certificate(util::SELF_SIGNED_RSA_CERT_PEM).unwrap();
    check_cert(&cert.to_der().unwrap());
}
