use fa25519::ops::ristretto;
use fa25519::signatures::ristretto::{generate_keypair, keypair_from_seed, sign, verify};
use hex_literal::hex;
use rand_core::OsRng;

// Encodings of k·B for k = 1..15.
const MULTIPLES: [[u8; 32]; 15] = [
    hex!("e2f2ae0a6abc4e71a884a961c500515f58e30b6aa582dd8db6a65945e08d2d76"),
    hex!("6a493210f7499cd17fecb510ae0cea23a110e8d5b901f8acadd3095c73a3b919"),
    hex!("94741f5d5d52755ece4f23f044ee27d5d1ea1e2bd196b462166b16152a9d0259"),
    hex!("da80862773358b466ffadfe0b3293ab3d9fd53c5ea6c955358f568322daf6a57"),
    hex!("e882b131016b52c1d3337080187cf768423efccbb517bb495ab812c4160ff44e"),
    hex!("f64746d3c92b13050ed8d80236a7f0007c3b3f962f5ba793d19a601ebb1df403"),
    hex!("44f53520926ec81fbd5a387845beb7df85a96a24ece18738bdcfa6a7822a176d"),
    hex!("903293d8f2287ebe10e2374dc1a53e0bc887e592699f02d077d5263cdd55601c"),
    hex!("02622ace8f7303a31cafc63f8fc48fdc16e1c8c8d234b2f0d6685282a9076031"),
    hex!("20706fd788b2720a1ed2a5dad4952b01f413bcf0e7564de8cdc816689e2db95f"),
    hex!("bce83f8ba5dd2fa572864c24ba1810f9522bc6004afe95877ac73241cafdab42"),
    hex!("e4549ee16b9aa03099ca208c67adafcafa4c3f3e4e5303de6026e3ca8ff84460"),
    hex!("aa52e000df2e16f55fb1032fc33bc42742dad6bd5a8fc0be0167436c5948501f"),
    hex!("46376b80f409b29dc2b5f6f0c52591990896e5716f41477cd30085ab7f10301e"),
    hex!("e0c418f7c8d9c4cdd7395b93ea124f3ad99021bb681dfc3302a9d99a2e53e64e"),
];

fn scalar(k: u8) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[0] = k;
    s
}

#[test]
fn base_multiples_match_published_encodings() {
    for (i, expected) in MULTIPLES.iter().enumerate() {
        let k = i as u8 + 1;
        assert_eq!(
            ristretto::base_mul(&scalar(k)).as_ref(),
            Some(expected),
            "{k}·B"
        );
    }
}

#[test]
fn repeated_addition_matches_multiples() {
    let b = MULTIPLES[0];
    let mut acc = b;
    for expected in &MULTIPLES[1..] {
        acc = ristretto::add(&acc, &b).unwrap();
        assert_eq!(&acc, expected);
    }
}

#[test]
fn variable_base_matches_base_mul() {
    let p = MULTIPLES[2]; // 3·B
    assert_eq!(ristretto::mul(&scalar(5), &p), Some(MULTIPLES[14]));
}

#[test]
fn zero_scalar_and_identity_results_are_rejected() {
    assert_eq!(ristretto::base_mul(&[0u8; 32]), None);

    let l = hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");
    assert_eq!(ristretto::base_mul(&l), None, "ℓ·B is the identity");
    assert_eq!(ristretto::mul(&l, &MULTIPLES[0]), None);
}

#[test]
fn negation_and_subtraction() {
    let b = MULTIPLES[0];
    let minus_b = ristretto::neg(&b).unwrap();
    assert_eq!(ristretto::add(&b, &minus_b), Some([0u8; 32]));
    assert_eq!(ristretto::sub(&MULTIPLES[4], &MULTIPLES[1]), Some(MULTIPLES[2]));
    assert_eq!(ristretto::neg(&[0u8; 32]), Some([0u8; 32]));
}

#[test]
fn identity_operand_in_add_sub_and_neg() {
    let identity = [0u8; 32];

    assert_eq!(ristretto::neg(&identity), Some(identity));
    for p in MULTIPLES {
        assert_eq!(ristretto::add(&p, &identity), Some(p), "P + O");
        assert_eq!(ristretto::add(&identity, &p), Some(p), "O + P");
        assert_eq!(ristretto::sub(&p, &identity), Some(p), "P - O");
        assert_eq!(ristretto::sub(&identity, &p), ristretto::neg(&p), "O - P");
        assert_eq!(ristretto::sub(&p, &p), Some(identity), "P - P");
    }
    assert_eq!(ristretto::sub(&identity, &identity), Some(identity));
}

#[test]
fn validate_rejects_identity_and_bad_encodings() {
    assert!(ristretto::validate(&MULTIPLES[0]));
    assert!(!ristretto::validate(&[0u8; 32]), "identity is not a valid point");

    let mut negative = MULTIPLES[0];
    negative[0] |= 1;
    assert!(!ristretto::validate(&negative), "odd s is negative");

    let p = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert!(!ristretto::validate(&p), "s = p is not canonical");

    let mut high = MULTIPLES[1];
    high[31] |= 0x80;
    assert!(!ristretto::validate(&high), "bit 255 must be clear");
    assert_eq!(ristretto::add(&high, &MULTIPLES[0]), None);
}

#[test]
fn from_hash_vectors() {
    use fa25519::hash::sha512;

    assert_eq!(
        ristretto::from_hash(&sha512(b"")),
        hex!("8472865eba3c2c54e55e71e4ae6b1f88c6e8a8e44c493b59bc46b835e168681d")
    );
    assert_eq!(
        ristretto::from_hash(&sha512(b"abc")),
        hex!("5a5dbd5c765abf60b2076133482c1ada189c319034ae0b933f4908b3b68d0225")
    );
    assert!(ristretto::validate(&ristretto::from_hash(&sha512(b"xyz"))));
}

#[test]
fn known_signatures() {
    let seed: [u8; 32] = std::array::from_fn(|i| i as u8);
    let kp = keypair_from_seed(&seed).unwrap();
    assert_eq!(
        kp.public_key(),
        hex!("e4cf4a048e3418244bac8be46dc27249c9a749f0c8f1a9d7869ba60b94746d6b")
    );

    let deterministic = hex!(
        "bea1606e9db4d67282319942c8e00f51ac9d1f80880a5d77b89733ed7417665f"
        "5b5ca02a41101c25c2d07f60ba1ee691e2c96621feeafa3d35deff0ca5a2a10e"
    );
    let with_random = hex!(
        "2a3cb63a5759f47f131253f18b777df2cc757693e1a79c664dc9c1b2d89c1a75"
        "f897bc6dc953760823f2af537dd55a47d5771a48a74099338b807f6777237609"
    );

    assert_eq!(sign(b"test", &kp, None).to_bytes(), deterministic);
    assert_eq!(sign(b"test", &kp, Some(&[0x42; 32])).to_bytes(), with_random);
    assert!(verify(&deterministic, b"test", &kp.public_key()));
    assert!(verify(&with_random, b"test", &kp.public_key()));
}

#[test]
fn sign_verify_and_tamper() {
    let kp = generate_keypair(&mut OsRng);
    let sig = sign(b"ristretto", &kp, None).to_bytes();
    let pk = kp.public_key();

    assert!(verify(&sig, b"ristretto", &pk));
    assert!(!verify(&sig, b"ristrettp", &pk));

    for byte in [0, 31, 32, 63] {
        let mut bad = sig;
        bad[byte] ^= 0x04;
        assert!(!verify(&bad, b"ristretto", &pk), "flipped signature byte {byte}");
    }

    let mut bad_pk = pk;
    bad_pk[5] ^= 0x01;
    assert!(!verify(&sig, b"ristretto", &bad_pk));
}

#[test]
fn verify_rejects_identity_key_and_wrong_sizes() {
    let kp = keypair_from_seed(&[1u8; 32]).unwrap();
    let sig = sign(b"m", &kp, None).to_bytes();

    assert!(!verify(&sig, b"m", &[0u8; 32]), "identity public key");
    assert!(!verify(&sig[..63], b"m", &kp.public_key()));

    let mut long = sig.to_vec();
    long.push(0);
    assert!(!verify(&long, b"m", &kp.public_key()));
}

#[test]
fn keys_differ_from_ed25519_for_the_same_seed() {
    let seed = [0x44u8; 32];
    let a = keypair_from_seed(&seed).unwrap();
    let b = fa25519::signatures::ed25519::keypair_from_seed(&seed).unwrap();
    assert_ne!(a.public_key(), b.public_key());
    assert_eq!(a.secret_key(), b.secret_key());
}
