use fa25519::hash::sha512;
use fa25519::ops::edwards;
use hex_literal::hex;

const BASE: [u8; 32] = hex!("5866666666666666666666666666666666666666666666666666666666666666");
const IDENTITY: [u8; 32] = hex!("0100000000000000000000000000000000000000000000000000000000000000");

// The non-identity small-order points, with both signs where the sign bit
// is meaningful.
const TORSION: [[u8; 32]; 7] = [
    hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
    hex!("0000000000000000000000000000000000000000000000000000000000000000"),
    hex!("0000000000000000000000000000000000000000000000000000000000000080"),
    hex!("26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc05"),
    hex!("26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc85"),
    hex!("c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a"),
    hex!("c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac03fa"),
];

fn scalar(k: u8) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[0] = k;
    s
}

#[test]
fn base_mul_one_is_the_base_point() {
    assert_eq!(edwards::base_mul(&scalar(1)), Some(BASE));
}

#[test]
fn validate_accepts_prime_order_points() {
    assert!(edwards::validate(&BASE));
    for k in [2u8, 3, 77, 255] {
        let p = edwards::base_mul(&scalar(k)).unwrap();
        assert!(edwards::validate(&p), "{k}·B must validate");
    }
}

#[test]
fn validate_rejects_identity_and_torsion() {
    assert!(!edwards::validate(&IDENTITY));
    for t in TORSION {
        assert!(!edwards::validate(&t), "torsion point {t:02x?} must be rejected");
    }
}

#[test]
fn validate_rejects_mixed_order_points() {
    // B + T has order 8ℓ: it decodes but is not in the prime-order subgroup.
    let mixed = edwards::add(&BASE, &TORSION[3]).unwrap();
    assert!(!edwards::validate(&mixed));
    assert_eq!(edwards::clear_cofactor(&mixed), edwards::base_mul(&scalar(8)));
}

#[test]
fn non_canonical_and_off_curve_encodings() {
    // y = p + 1 aliases the identity.
    let alias = hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert!(!edwards::validate(&alias));
    assert_eq!(edwards::neg(&alias), None);

    // y = 2 has no matching x.
    let off_curve = scalar(2);
    assert_eq!(edwards::add(&off_curve, &BASE), None);

    // Negative zero x.
    let mut negative_zero = IDENTITY;
    negative_zero[31] |= 0x80;
    assert_eq!(edwards::neg(&negative_zero), None);
}

#[test]
fn group_laws() {
    let p = edwards::base_mul(&scalar(5)).unwrap();
    let q = edwards::base_mul(&scalar(11)).unwrap();
    let r = edwards::base_mul(&scalar(42)).unwrap();

    let left = edwards::add(&edwards::add(&p, &q).unwrap(), &r);
    let right = edwards::add(&p, &edwards::add(&q, &r).unwrap());
    assert_eq!(left, right, "associativity");

    assert_eq!(edwards::add(&p, &q), edwards::add(&q, &p), "commutativity");
    assert_eq!(edwards::add(&p, &q), edwards::base_mul(&scalar(16)));

    let minus_p = edwards::neg(&p).unwrap();
    assert_eq!(edwards::add(&p, &minus_p), Some(IDENTITY));
    assert_eq!(edwards::sub(&q, &p), edwards::base_mul(&scalar(6)));
    assert_eq!(edwards::add(&p, &p), edwards::base_mul(&scalar(10)), "doubling");
}

#[test]
fn mul_matches_base_mul() {
    let p = edwards::base_mul(&scalar(3)).unwrap();
    assert_eq!(edwards::mul(&scalar(7), &p), edwards::base_mul(&scalar(21)));
    assert_eq!(edwards::mul(&scalar(0), &p), None, "identity result");
    assert_eq!(edwards::mul(&scalar(7), &TORSION[0]), None, "invalid base");
    assert_eq!(edwards::base_mul(&[0u8; 32]), None);

    let l = hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");
    assert_eq!(edwards::base_mul(&l), None);
}

#[test]
fn clamped_variants() {
    let n = [0x5au8; 32];
    let mut clamped = n;
    clamped[0] &= 248;
    clamped[31] = (clamped[31] & 127) | 64;

    assert_eq!(edwards::base_mul_clamp(&n), edwards::base_mul(&clamped));
    assert_eq!(edwards::mul_clamp(&n, &BASE), edwards::mul(&clamped, &BASE));
    assert!(edwards::base_mul_clamp(&[0u8; 32]).is_some(), "clamping sets bit 254");
}

#[test]
fn public_key_is_clamped_base_mul() {
    let seed = [0x10u8; 32];
    let kp = fa25519::signatures::ed25519::keypair_from_seed(&seed).unwrap();

    let mut az = [0u8; 32];
    az.copy_from_slice(&sha512(&seed)[..32]);
    assert_eq!(edwards::base_mul_clamp(&az), Some(kp.public_key()));
}

#[test]
fn from_hash_lands_in_prime_order_subgroup() {
    for msg in [&b""[..], b"abc", b"hash to curve"] {
        let p = edwards::from_hash(&sha512(msg));
        assert!(edwards::validate(&p), "from_hash({msg:?}) must validate");
    }
    assert_ne!(edwards::from_hash(&sha512(b"a")), edwards::from_hash(&sha512(b"b")));
}

#[test]
fn clear_cofactor_of_torsion_is_identity() {
    for t in TORSION {
        assert_eq!(edwards::clear_cofactor(&t), Some(IDENTITY));
    }
    assert_eq!(edwards::clear_cofactor(&BASE), edwards::base_mul(&scalar(8)));
}
