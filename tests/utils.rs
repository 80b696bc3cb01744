use fa25519::Error;
use fa25519::utils::{bin2hex, equals, hex2bin, memzero};

#[test]
fn bin2hex_matches_hex_crate() {
    let all: Vec<u8> = (0..=255).collect();
    assert_eq!(bin2hex(&all), hex::encode(&all));
    assert_eq!(bin2hex(&[]), "");
}

#[test]
fn hex2bin_accepts_both_cases() {
    assert_eq!(hex2bin("00ff7fA0aB"), Ok(vec![0x00, 0xff, 0x7f, 0xa0, 0xab]));
    assert_eq!(hex2bin(""), Ok(vec![]));

    let all: Vec<u8> = (0..=255).collect();
    assert_eq!(hex2bin(&hex::encode_upper(&all)), Ok(all));
}

#[test]
fn hex2bin_rejects_malformed_input() {
    for bad in ["0", "abc", "0g", "g0", "zz", "0x00", " 0", "@@", "[]", "`f", "GG"] {
        assert_eq!(hex2bin(bad), Err(Error::InvalidHex), "input {bad:?}");
    }
}

#[test]
fn equals_semantics() {
    assert!(equals(b"abc", b"abc"));
    assert!(!equals(b"abc", b"abd"));
    assert!(!equals(b"abc", b"abcd"), "length mismatch");
    assert!(!equals(b"", b""), "empty inputs never compare equal");
}

#[test]
fn memzero_clears_buffer() {
    let mut secret = [0xa5u8; 48];
    memzero(&mut secret);
    assert_eq!(secret, [0u8; 48]);
}
