use fa25519::hash::sha512;
use fa25519::keys::{KeyPair, Signature};
use fa25519::signatures::ed25519::{generate_keypair, keypair_from_seed, sign, verify};
use fa25519::{Error, SIGN_BYTES};
use hex_literal::hex;
use rand_core::OsRng;

fn seed_0_to_31() -> [u8; 32] {
    std::array::from_fn(|i| i as u8)
}

struct Rfc8032 {
    seed: [u8; 32],
    public_key: [u8; 32],
    message: &'static [u8],
    signature: [u8; 64],
}

fn rfc8032_vectors() -> [Rfc8032; 3] {
    [
        Rfc8032 {
            seed: hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
            public_key: hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
            message: &[],
            signature: hex!(
                "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
                "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
            ),
        },
        Rfc8032 {
            seed: hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb"),
            public_key: hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
            message: &[0x72],
            signature: hex!(
                "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da"
                "085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
            ),
        },
        Rfc8032 {
            seed: hex!("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7"),
            public_key: hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
            message: &[0xaf, 0x82],
            signature: hex!(
                "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac"
                "18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a"
            ),
        },
    ]
}

#[test]
fn test_ed25519_rfc8032_vectors() {
    for (i, v) in rfc8032_vectors().iter().enumerate() {
        let kp = keypair_from_seed(&v.seed).unwrap();
        assert_eq!(kp.public_key(), v.public_key, "public key mismatch, vector {i}");

        let sig = sign(v.message, &kp, None);
        assert_eq!(sig.to_bytes(), v.signature, "signature mismatch, vector {i}");

        assert!(
            verify(&v.signature, v.message, &v.public_key),
            "published signature must verify, vector {i}"
        );
    }
}

#[test]
fn test_ed25519_sign_and_verify() {
    let kp = generate_keypair(&mut OsRng);
    let message: &[u8] = b"Hello, world!";

    let sig = sign(message, &kp, None);
    assert!(
        verify(sig.as_ref(), message, &kp.public_key()),
        "signature should be valid"
    );

    let mut tampered = sig.to_bytes();
    tampered[44] ^= 0x10;
    assert!(
        !verify(&tampered, message, &kp.public_key()),
        "signature modification must be detected"
    );
}

#[test]
fn test_ed25519_known_signatures() {
    let kp = keypair_from_seed(&seed_0_to_31()).unwrap();
    assert_eq!(
        kp.public_key(),
        hex!("03a107bff3ce10be1d70dd18e74bc09967e4d6309ba50d5f1ddc8664125531b8")
    );

    let deterministic = hex!(
        "a557a7aa60ba159c796ad190ed5fbee73cf1dc870d0e5a9a9b05f656a3d0ee5b"
        "4af27a9b59c1acaf19129979339d09a8680f98426c57d0d3b3e32e30a1f9fe09"
    );
    let short_random = hex!(
        "be3159bce22a47c9c3b401aae31d193323d078305bd386d97be7422a13ff22cd"
        "b34535d587b4f14293714313e945fd0bc7a05e87ff600b0eb4472d52ec204b0d"
    );
    let long_random = hex!(
        "fdcb31c7ee1fb464dbc377be6cd2fc54b8a65891df87781a60c55e8302bd8670"
        "e4e9e5522f6251485c8369390a5e0ca0290e45ce5978055533bf68e6506e840f"
    );

    assert_eq!(sign(b"test", &kp, None).to_bytes(), deterministic);
    assert_eq!(sign(b"test", &kp, Some(&[])).to_bytes(), deterministic);
    assert_eq!(sign(b"test", &kp, Some(&[0x42; 32])).to_bytes(), short_random);
    assert_eq!(sign(b"test", &kp, Some(&[0x42; 100])).to_bytes(), long_random);
}

#[test]
fn test_ed25519_deterministic_and_synthetic() {
    let kp = keypair_from_seed(&[7u8; 32]).unwrap();
    let m = b"determinism";

    let a = sign(m, &kp, None);
    let b = sign(m, &kp, None);
    assert_eq!(a, b, "signing without randomness must be deterministic");

    let c = sign(m, &kp, Some(&[1u8; 32]));
    let d = sign(m, &kp, Some(&[2u8; 32]));
    assert_ne!(a, c, "randomness must change the signature");
    assert_ne!(c, d);

    for sig in [c, d] {
        assert!(verify(sig.as_ref(), m, &kp.public_key()));
    }
}

#[test]
fn test_ed25519_wrong_sizes_fail() {
    let kp = keypair_from_seed(&[9u8; 32]).unwrap();
    let sig = sign(b"m", &kp, None).to_bytes();

    assert!(!verify(&sig[..SIGN_BYTES - 1], b"m", &kp.public_key()));

    let mut long = sig.to_vec();
    long.push(0);
    assert!(!verify(&long, b"m", &kp.public_key()));

    assert!(!verify(&sig, b"m", &kp.public_key()[..31]));
}

#[test]
fn test_ed25519_tamper_every_bit_of_public_key() {
    let kp = keypair_from_seed(&[3u8; 32]).unwrap();
    let sig = sign(b"tamper", &kp, None);
    let pk = kp.public_key();

    for bit in 0..256 {
        let mut bad = pk;
        bad[bit / 8] ^= 1 << (bit % 8);
        assert!(!verify(sig.as_ref(), b"tamper", &bad), "flipped key bit {bit}");
    }
}

#[test]
fn test_ed25519_rejects_non_canonical_s() {
    let kp = keypair_from_seed(&[5u8; 32]).unwrap();
    let mut sig = sign(b"m", &kp, None).to_bytes();

    // s + ℓ still satisfies the equation but is not canonical.
    let l = hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");
    let mut carry = 0u16;
    for i in 0..32 {
        let sum = u16::from(sig[32 + i]) + u16::from(l[i]) + carry;
        sig[32 + i] = sum as u8;
        carry = sum >> 8;
    }
    assert!(!verify(&sig, b"m", &kp.public_key()));
}

#[test]
fn test_ed25519_rejects_low_order_public_keys() {
    let sig = [0u8; 64];
    let torsion = [
        hex!("0100000000000000000000000000000000000000000000000000000000000000"),
        hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        hex!("26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc05"),
        hex!("c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a"),
    ];

    for pk in torsion {
        assert!(!verify(&sig, b"", &pk), "low-order key {pk:02x?} must be rejected");
    }
}

#[test]
fn test_ed25519_keypair_serialization() {
    let kp = keypair_from_seed(&[0xabu8; 32]).unwrap();
    let restored = KeyPair::from_bytes(&kp.to_bytes()).unwrap();
    assert_eq!(restored.public_key(), kp.public_key());
    assert_eq!(restored.secret_key(), kp.secret_key());

    assert_eq!(
        KeyPair::from_bytes(&[0u8; 63]).err(),
        Some(Error::InvalidLength {
            what: "key pair",
            expected: 64,
            got: 63
        })
    );

    let debug = format!("{kp:?}");
    assert!(!debug.contains(&fa25519::utils::bin2hex(&kp.secret_key())));
}

#[test]
fn test_signature_conversions() {
    let bytes = [0x5au8; 64];
    let sig = Signature::try_from(&bytes[..]).unwrap();
    assert_eq!(sig, Signature::from_bytes(bytes));
    assert!(Signature::try_from(&bytes[..63]).is_err());
}

#[test]
fn test_ed25519_keypair_layout_and_seed_size() {
    let seed = [0x11u8; 32];
    let kp = keypair_from_seed(&seed).unwrap();
    assert_eq!(kp.secret_key(), seed);
    assert_eq!(&kp.to_bytes()[..32], &seed);
    assert_eq!(&kp.to_bytes()[32..], &kp.public_key());

    assert_eq!(
        keypair_from_seed(&[0u8; 31]).err(),
        Some(Error::InvalidLength {
            what: "seed",
            expected: 32,
            got: 31
        })
    );
    assert!(keypair_from_seed(&[0u8; 33]).is_err());
}

#[test]
fn test_ed25519_long_randomness_is_hashed_first() {
    let kp = keypair_from_seed(&[0x21u8; 32]).unwrap();

    // Up to 93 bytes fit in the first hash block and are used as is.
    let inline = [0x42u8; 93];
    assert_ne!(
        sign(b"m", &kp, Some(&inline)),
        sign(b"m", &kp, Some(&sha512(&inline)))
    );

    let long = [0x42u8; 94];
    assert_eq!(
        sign(b"m", &kp, Some(&long)),
        sign(b"m", &kp, Some(&sha512(&long)))
    );
}

#[test]
fn test_ed25519_nonce_depends_on_secret() {
    let a = keypair_from_seed(&[1u8; 32]).unwrap();
    let b = keypair_from_seed(&[2u8; 32]).unwrap();
    let z = [9u8; 32];
    assert_ne!(
        &sign(b"m", &a, Some(&z)).to_bytes()[..32],
        &sign(b"m", &b, Some(&z)).to_bytes()[..32],
        "nonce commitment must depend on the secret"
    );
}
