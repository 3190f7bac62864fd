//! Integration test: group parameter files.

use xs_keyinit::params::{AGENT_GENERATOR, AGENT_PRIME};
use xs_keyinit::{GroupParameters, KeyAgreement, KeyAgreementError};

#[test]
fn agent_group_constants() {
    let group = GroupParameters::agent_default();
    assert_eq!(group.prime, AGENT_PRIME);
    assert_eq!(group.generator, AGENT_GENERATOR);
    assert_eq!(group.validate().unwrap(), 107);
}

#[test]
fn saved_group_drives_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group.json");
    GroupParameters::new("23", "5").save(&path).unwrap();

    let loaded = GroupParameters::load(&path).unwrap();
    let ka = KeyAgreement::from_parameters(&loaded).unwrap();
    assert_eq!(ka.modulus_bits(), 5);
}

#[test]
fn hand_written_group_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group.json");
    std::fs::write(&path, br#"{ "prime": "7919", "generator": "7" }"#).unwrap();

    let loaded = GroupParameters::load(&path).unwrap();
    assert_eq!(loaded, GroupParameters::new("7919", "7"));
    assert_eq!(loaded.validate().unwrap(), 13);
}

#[test]
fn invalid_group_file_contents_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group.json");
    std::fs::write(&path, br#"{ "prime": "21", "generator": "2" }"#).unwrap();

    let loaded = GroupParameters::load(&path).unwrap();
    assert!(matches!(
        loaded.validate(),
        Err(KeyAgreementError::InvalidParameters(_))
    ));
    assert!(matches!(
        KeyAgreement::from_parameters(&loaded),
        Err(KeyAgreementError::InvalidParameters(_))
    ));
}

#[test]
fn group_file_missing_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group.json");
    std::fs::write(&path, br#"{ "prime": "23" }"#).unwrap();
    assert!(matches!(
        GroupParameters::load(&path),
        Err(KeyAgreementError::SerializationError(_))
    ));
}
