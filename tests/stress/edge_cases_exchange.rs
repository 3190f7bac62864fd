//! Edge case tests: degenerate groups, out-of-range peer values,
//! trusted out-of-range secrets, disposal.

use xs_keyinit::{normalize_peer_value, KeyAgreement, KeyAgreementError};

// === Construction Edge Cases ===

#[test]
fn edge_smallest_prime_modulus_rejected() {
    let err = KeyAgreement::new("2", "1").unwrap_err();
    assert!(matches!(err, KeyAgreementError::InvalidParameters(_)));
}

#[test]
fn edge_modulus_three_has_one_secret() {
    for _ in 0..20 {
        let ka = KeyAgreement::new("3", "2").unwrap();
        // only x = 1 lies in (0, 2)
        assert_eq!(ka.create_public_value().unwrap(), "2");
    }
}

#[test]
fn edge_carmichael_modulus_rejected() {
    // 561 = 3 * 11 * 17 fools Fermat but not Miller-Rabin
    let err = KeyAgreement::new("561", "2").unwrap_err();
    assert!(matches!(err, KeyAgreementError::InvalidParameters(_)));
}

#[test]
fn edge_generator_p_minus_one_accepted() {
    let ka = KeyAgreement::with_secret("23", "22", "3").unwrap();
    assert_eq!(ka.create_public_value().unwrap(), "22");
}

#[test]
fn edge_leading_zeros_accepted() {
    let ka = KeyAgreement::with_secret("0023", "05", "006").unwrap();
    assert_eq!(ka.create_public_value().unwrap(), "8");
}

// === Supplied Secret Edge Cases ===

#[test]
fn edge_supplied_secret_p_minus_one() {
    // Fermat: 5^22 = 1 (mod 23); accepted because supplied secrets are trusted
    let ka = KeyAgreement::with_secret("23", "5", "22").unwrap();
    assert_eq!(ka.create_public_value().unwrap(), "1");
}

#[test]
fn edge_supplied_secret_larger_than_modulus() {
    let ka = KeyAgreement::with_secret("23", "5", "28").unwrap();
    // 28 = 6 (mod 22)
    assert_eq!(ka.create_public_value().unwrap(), "8");
}

// === Peer Value Edge Cases ===

#[test]
fn edge_peer_values_not_range_checked() {
    let ka = KeyAgreement::with_secret("23", "5", "6").unwrap();
    assert_eq!(ka.derive_shared_secret("0").unwrap().as_str(), "0");
    assert_eq!(ka.derive_shared_secret("1").unwrap().as_str(), "1");
    assert_eq!(ka.derive_shared_secret("23").unwrap().as_str(), "0");
    // 42 = 19 (mod 23)
    assert_eq!(ka.derive_shared_secret("42").unwrap().as_str(), "2");
}

#[test]
fn edge_huge_peer_value() {
    let ka = KeyAgreement::with_secret("23", "5", "6").unwrap();
    let huge = "9".repeat(4096);
    let shared: u32 = ka.derive_shared_secret(&huge).unwrap().parse().unwrap();
    assert!(shared < 23);
}

#[test]
fn edge_windows_crlf_needs_normalizing() {
    let ka = KeyAgreement::with_secret("23", "5", "6").unwrap();
    assert!(matches!(
        ka.derive_shared_secret("19\\r\\n"),
        Err(KeyAgreementError::MalformedInput(_))
    ));
    let shared = ka
        .derive_shared_secret(normalize_peer_value("19\\r\\n"))
        .unwrap();
    assert_eq!(shared.as_str(), "2");
}

#[test]
fn edge_malformed_message_does_not_echo_input() {
    let ka = KeyAgreement::with_secret("23", "5", "6").unwrap();
    let err = ka.derive_shared_secret("hunter2").unwrap_err();
    assert!(!err.to_string().contains("hunter2"));
}

// === Disposal Edge Cases ===

#[test]
fn edge_operations_after_dispose() {
    let mut ka = KeyAgreement::with_secret("23", "5", "6").unwrap();
    ka.dispose();
    assert!(matches!(
        ka.create_public_value(),
        Err(KeyAgreementError::Disposed)
    ));
    assert!(matches!(
        ka.derive_shared_secret("not even parsed"),
        Err(KeyAgreementError::Disposed)
    ));
}

#[test]
fn edge_debug_after_dispose() {
    let mut ka = KeyAgreement::with_secret("23", "5", "6").unwrap();
    ka.dispose();
    let shown = format!("{ka:?}");
    assert!(shown.contains("disposed: true"));
}
