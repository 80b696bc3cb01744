use fa25519::Error;
use fa25519::ops::scalar;
use hex_literal::hex;

const L: [u8; 32] = hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");
const L_MINUS_ONE: [u8; 32] =
    hex!("ecd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");

const ONE: [u8; 32] = hex!("0100000000000000000000000000000000000000000000000000000000000000");

// 01 02 .. 20 mod ℓ
const S: [u8; 32] = hex!("275a174ad03fe2575cd01bc64f1a51e61012131415161718191a1b1c1d1e1f00");
// 20 21 .. 3f mod ℓ
const T: [u8; 32] = hex!("59a5400cd5fbee1ea5524342903f91f02f3132333435363738393a3b3c3d3e0f");

fn counting(start: u8) -> [u8; 32] {
    std::array::from_fn(|i| start + i as u8)
}

#[test]
fn reduce_vectors() {
    assert_eq!(scalar::reduce(&counting(1)), Ok(S));
    assert_eq!(scalar::reduce(&counting(32)), Ok(T));
    assert_eq!(scalar::reduce(&L), Ok([0u8; 32]));
    assert_eq!(
        scalar::reduce(&[0xff; 64]),
        Ok(hex!("000f9c44e31106a447938568a71b0ed065bef517d273ecce3d9a307c1b419903"))
    );
}

#[test]
fn reduce_length_bounds() {
    for len in [0, 31, 65] {
        assert_eq!(
            scalar::reduce(&vec![1u8; len]),
            Err(Error::InvalidLengthRange {
                what: "scalar input",
                min: 32,
                max: 64,
                got: len
            })
        );
    }
    assert!(scalar::reduce(&[1u8; 48]).is_ok());
}

#[test]
fn arithmetic_vectors() {
    assert_eq!(
        scalar::mul(&S, &T),
        hex!("9182ce0a8ae9a2275a5dd0ea3dcb4aef88442fcee47aa8dba739e9bf32c11b0b")
    );
    assert_eq!(
        scalar::add(&S, &T),
        hex!("80ff5756a53bd17601235f08e059e2d640434547494b4d4f51535557595b5d0f")
    );
    assert_eq!(
        scalar::sub(&S, &T),
        hex!("bb88cc9a15a705918d1ad0269ed49e0ae1e0e0e0e0e0e0e0e0e0e0e0e0e0e000")
    );
    assert_eq!(
        scalar::negate(&S),
        hex!("c679de124a2330007accdbdc8edf8d2eefedecebeae9e8e7e6e5e4e3e2e1e00f")
    );
    assert_eq!(
        scalar::complement(&S),
        hex!("c779de124a2330007accdbdc8edf8d2eefedecebeae9e8e7e6e5e4e3e2e1e00f")
    );
    assert_eq!(
        scalar::invert(&S),
        hex!("f5e24163b7c5c1d85cde846227683f22618f1a1c2f0cbfbe87b1bfa6ea7bcf09")
    );
}

#[test]
fn invert_times_self_is_one() {
    for s in [S, T, ONE, L_MINUS_ONE] {
        assert_eq!(scalar::mul(&scalar::invert(&s), &s), ONE);
    }
    assert_eq!(scalar::invert(&[0u8; 32]), [0u8; 32]);
}

#[test]
fn negate_and_complement_relations() {
    assert_eq!(scalar::add(&S, &scalar::negate(&S)), [0u8; 32]);
    assert_eq!(scalar::add(&S, &scalar::complement(&S)), ONE);
    assert_eq!(scalar::negate(&ONE), L_MINUS_ONE);
    assert_eq!(scalar::sub(&T, &T), [0u8; 32]);
}

#[test]
fn canonical_boundary() {
    assert!(!scalar::is_canonical(&L), "ℓ itself is not canonical");
    assert!(scalar::is_canonical(&L_MINUS_ONE), "ℓ - 1 is canonical");
    assert!(scalar::is_canonical(&[0u8; 32]));
    assert!(!scalar::is_canonical(&[0xff; 32]));
}

#[test]
fn unreduced_inputs_are_accepted() {
    // ℓ + 1 behaves as 1.
    let mut l_plus_one = L;
    l_plus_one[0] += 1;
    assert_eq!(scalar::mul(&l_plus_one, &S), S);
    assert_eq!(scalar::add(&l_plus_one, &[0u8; 32]), ONE);
}

#[test]
fn cofactor_mul() {
    assert_eq!(
        scalar::cofactor_mul(&ONE),
        Ok(hex!("0800000000000000000000000000000000000000000000000000000000000000"))
    );
    assert_eq!(scalar::cofactor_mul(&S).map(|r| r[0]), Ok(0x38));

    let mut s = [0u8; 32];
    s[0] = 0x21;
    s[30] = 0x80;
    let mut expected = [0u8; 32];
    expected[0] = 0x08;
    expected[1] = 0x01;
    expected[31] = 0x04;
    assert_eq!(scalar::cofactor_mul(&s), Ok(expected), "bits carry across bytes");

    let mut top = [0u8; 32];
    top[31] = 0x20;
    assert_eq!(scalar::cofactor_mul(&top), Err(Error::ScalarOverflow));
    top[31] = 0x1f;
    assert!(scalar::cofactor_mul(&top).is_ok());
}
