//! Registry tests, to ensure that transfer syntaxes are properly
//! registered when linked together in a separate program.

use dcmtree_core::{Endianness, TransferSyntaxIndex};
use dcmtree_transfer_syntax_registry::TransferSyntaxRegistry;

fn assert_native<T>(registry: T, uid: &'static str, explicit_vr: bool, endianness: Endianness)
where
    T: TransferSyntaxIndex,
{
    let ts = registry.get(uid);
    assert!(ts.is_some(), "{} should be registered", uid);
    let ts = ts.unwrap();
    let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
    assert_eq!(ts.uid(), uid);
    assert_eq!(ts.explicit_vr(), explicit_vr);
    assert_eq!(ts.endianness(), endianness);
    assert!(!ts.is_encapsulated_pixel_data());
}

#[test]
fn contains_base_ts() {
    let registry = TransferSyntaxRegistry;

    // contains implicit VR little endian
    assert_native(registry, "1.2.840.10008.1.2", false, Endianness::Little);

    // should work the same for trailing null characters
    assert_native(registry, "1.2.840.10008.1.2\0", false, Endianness::Little);

    // and for trailing spaces
    assert_native(registry, "1.2.840.10008.1.2.1 ", true, Endianness::Little);

    // contains explicit VR little endian
    assert_native(registry, "1.2.840.10008.1.2.1", true, Endianness::Little);

    // contains explicit VR big endian
    assert_native(registry, "1.2.840.10008.1.2.2", true, Endianness::Big);
}

#[test]
fn contains_encapsulated_ts() {
    let registry = TransferSyntaxRegistry;
    for uid in &[
        "1.2.840.10008.1.2.4.50",
        "1.2.840.10008.1.2.4.70",
        "1.2.840.10008.1.2.4.90",
        "1.2.840.10008.1.2.5",
    ] {
        let ts = registry
            .get(uid)
            .unwrap_or_else(|| panic!("{} should be registered", uid));
        assert!(ts.is_encapsulated_pixel_data());
        assert!(ts.explicit_vr());
    }
}

#[test]
fn unknown_uid_is_absent() {
    let registry = TransferSyntaxRegistry;
    assert!(registry.get("1.2.3.4.5").is_none());
    assert!(registry.get("").is_none());
}

#[test]
fn iterates_over_all_entries() {
    let registry = TransferSyntaxRegistry;
    let count = registry.iter().count();
    assert_eq!(count, 30);
    assert!(registry
        .iter()
        .any(|ts| ts.uid() == "1.2.840.10008.1.2.1.99" && ts.is_unsupported()));
}
