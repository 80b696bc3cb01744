use fa25519::ops::{edwards, ristretto, scalar};
use fa25519::signatures::{ed25519, ristretto as schnorr};
use proptest::prelude::*;

fn reduced(bytes: [u8; 32]) -> [u8; 32] {
    scalar::reduce(&bytes).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ed25519_round_trip(seed in any::<[u8; 32]>(), message in prop::collection::vec(any::<u8>(), 0..200)) {
        let kp = ed25519::keypair_from_seed(&seed).unwrap();
        let sig = ed25519::sign(&message, &kp, None);
        prop_assert!(ed25519::verify(sig.as_ref(), &message, &kp.public_key()));
    }

    #[test]
    fn ristretto_round_trip(seed in any::<[u8; 32]>(), message in prop::collection::vec(any::<u8>(), 0..200), z in any::<[u8; 32]>()) {
        let kp = schnorr::keypair_from_seed(&seed).unwrap();
        let sig = schnorr::sign(&message, &kp, Some(&z));
        prop_assert!(schnorr::verify(sig.as_ref(), &message, &kp.public_key()));
    }

    #[test]
    fn ed25519_tamper_sensitivity(seed in any::<[u8; 32]>(), bit in 0usize..512) {
        let kp = ed25519::keypair_from_seed(&seed).unwrap();
        let mut sig = ed25519::sign(b"tamper", &kp, None).to_bytes();
        sig[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!ed25519::verify(&sig, b"tamper", &kp.public_key()));
    }

    #[test]
    fn ristretto_message_tamper(seed in any::<[u8; 32]>(), message in prop::collection::vec(any::<u8>(), 1..64), bit in any::<usize>()) {
        let kp = schnorr::keypair_from_seed(&seed).unwrap();
        let sig = schnorr::sign(&message, &kp, None);
        let mut bad = message.clone();
        let bit = bit % (bad.len() * 8);
        bad[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!schnorr::verify(sig.as_ref(), &bad, &kp.public_key()));
    }

    #[test]
    fn scalar_field_laws(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), c in any::<[u8; 32]>()) {
        let (a, b, c) = (reduced(a), reduced(b), reduced(c));

        prop_assert_eq!(scalar::add(&a, &b), scalar::add(&b, &a));
        prop_assert_eq!(scalar::mul(&a, &b), scalar::mul(&b, &a));
        prop_assert_eq!(
            scalar::mul(&a, &scalar::add(&b, &c)),
            scalar::add(&scalar::mul(&a, &b), &scalar::mul(&a, &c))
        );
        prop_assert_eq!(scalar::sub(&scalar::add(&a, &b), &b), a);
        prop_assert!(scalar::is_canonical(&scalar::mul(&a, &b)));

        if a != [0u8; 32] {
            let mut one = [0u8; 32];
            one[0] = 1;
            prop_assert_eq!(scalar::mul(&scalar::invert(&a), &a), one);
        }
    }

    #[test]
    fn edwards_scalar_homomorphism(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (reduced(a), reduced(b));
        prop_assume!(a != [0u8; 32] && b != [0u8; 32] && scalar::add(&a, &b) != [0u8; 32]);

        let pa = edwards::base_mul(&a).unwrap();
        let pb = edwards::base_mul(&b).unwrap();
        prop_assert_eq!(edwards::add(&pa, &pb), edwards::base_mul(&scalar::add(&a, &b)));
        prop_assert_eq!(edwards::mul(&b, &pa), edwards::base_mul(&scalar::mul(&a, &b)));
    }

    #[test]
    fn ristretto_group_laws(h1 in any::<[u8; 32]>(), h2 in any::<[u8; 32]>(), h3 in any::<[u8; 32]>()) {
        let to_point = |h: [u8; 32]| {
            let mut wide = [0u8; 64];
            wide[..32].copy_from_slice(&h);
            wide[32..].copy_from_slice(&h);
            wide[63] ^= 0x55;
            ristretto::from_hash(&wide)
        };
        let (p, q, r) = (to_point(h1), to_point(h2), to_point(h3));

        let left = ristretto::add(&ristretto::add(&p, &q).unwrap(), &r);
        let right = ristretto::add(&p, &ristretto::add(&q, &r).unwrap());
        prop_assert_eq!(left, right);

        prop_assert_eq!(ristretto::add(&p, &ristretto::neg(&p).unwrap()), Some([0u8; 32]));

        let mut two = [0u8; 32];
        two[0] = 2;
        if ristretto::validate(&p) {
            prop_assert_eq!(ristretto::add(&p, &p), ristretto::mul(&two, &p));
        }
    }

    #[test]
    fn ristretto_canonical_round_trip(bytes in any::<[u8; 32]>()) {
        // Adding the identity decodes and re-encodes without negation.
        let identity = [0u8; 32];
        match ristretto::add(&bytes, &identity) {
            Some(same) => {
                prop_assert_eq!(same, bytes);
                prop_assert_eq!(ristretto::sub(&bytes, &identity), Some(bytes));
                let neg = ristretto::neg(&bytes);
                prop_assert!(neg.is_some());
                prop_assert_eq!(neg.and_then(|n| ristretto::neg(&n)), Some(bytes));
            }
            None => {
                prop_assert!(!ristretto::validate(&bytes));
                prop_assert_eq!(ristretto::neg(&bytes), None);
            }
        }
    }

    #[test]
    fn ristretto_encodings_of_points_round_trip(h in any::<[u8; 32]>()) {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&h);
        let p = ristretto::from_hash(&wide);
        prop_assert_eq!(ristretto::add(&p, &[0u8; 32]), Some(p));
    }
}
