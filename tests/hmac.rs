use fa25519::hash::{Sha256, Sha512, hmac, hmac_sha256, hmac_sha512};
use hex_literal::hex;

struct Case {
    key: Vec<u8>,
    message: Vec<u8>,
    sha256: [u8; 32],
    sha512: [u8; 64],
}

// RFC 4231, test cases 1, 2 and 6.
fn cases() -> Vec<Case> {
    vec![
        Case {
            key: vec![0x0b; 20],
            message: b"Hi There".to_vec(),
            sha256: hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"),
            sha512: hex!(
                "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde"
                "daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
            ),
        },
        Case {
            key: b"Jefe".to_vec(),
            message: b"what do ya want for nothing?".to_vec(),
            sha256: hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"),
            sha512: hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
            ),
        },
        Case {
            key: vec![0xaa; 131],
            message: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
            sha256: hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"),
            sha512: hex!(
                "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f352"
                "6b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598"
            ),
        },
    ]
}

#[test]
fn hmac_sha256_rfc4231() {
    for (i, case) in cases().iter().enumerate() {
        assert_eq!(
            hmac_sha256(&case.message, &case.key),
            case.sha256,
            "HMAC-SHA-256 mismatch in case {i}"
        );
    }
}

#[test]
fn hmac_sha512_rfc4231() {
    for (i, case) in cases().iter().enumerate() {
        assert_eq!(
            hmac_sha512(&case.message, &case.key),
            case.sha512,
            "HMAC-SHA-512 mismatch in case {i}"
        );
    }
}

#[test]
fn generic_hmac_matches_wrappers() {
    let key = b"generic key";
    let message = b"generic message";
    assert_eq!(hmac::<Sha256>(message, key), hmac_sha256(message, key));
    assert_eq!(hmac::<Sha512>(message, key), hmac_sha512(message, key));
}

#[test]
fn block_sized_key_is_used_directly() {
    // A key exactly one block long must not be hashed first.
    let key = [0x42u8; 64];
    let hashed = fa25519::hash::sha256(&key);
    assert_ne!(hmac_sha256(b"m", &key), hmac_sha256(b"m", &hashed));

    let long = [0x42u8; 65];
    let hashed = fa25519::hash::sha256(&long);
    assert_eq!(hmac_sha256(b"m", &long), hmac_sha256(b"m", &hashed));
}

#[test]
fn empty_key_and_message() {
    let a = hmac_sha512(&[], &[]);
    let b = hmac_sha512(&[], &[0u8; 16]);
    assert_eq!(a, b, "zero padding makes short zero keys equivalent");
}
