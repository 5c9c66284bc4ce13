use cs_core::errors::CsError;
use cs_core::rng::RngHandle;
use cs_society::{
    beta_length_society, canonical_hash, fixed_length_society, random_society, uniform_society,
};
use proptest::prelude::*;

#[test]
fn uniform_society_matches_hardin_layout() {
    let society = uniform_society("U(5,2)", 5, 2.0, 0.5).unwrap();
    assert_eq!(society.modulus(), 5.0);
    assert_eq!(society.names(), vec!["Set 1", "Set 2", "Set 3", "Set 4", "Set 5"]);
    assert_eq!(society.left_endpoints(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(society.right_endpoints(), vec![1.5, 2.5, 3.5, 4.5, 0.5]);
}

#[test]
fn uniform_rounding_breaks_ties_to_even() {
    let society = uniform_society("U(5,2.25)", 5, 2.25, 0.0).unwrap();
    assert_eq!(society.right_endpoints(), vec![2.2, 3.2, 4.2, 0.2, 1.2]);
}

#[test]
fn empty_uniform_society_is_invalid() {
    assert!(matches!(
        uniform_society("U(0,1)", 0, 1.0, 0.5),
        Err(CsError::InvalidInput(_))
    ));
}

#[test]
fn length_fraction_is_validated() {
    let mut rng = RngHandle::from_seed(0);
    assert!(matches!(
        fixed_length_society("bad", 3, 10.0, 1.5, &mut rng),
        Err(CsError::InvalidInput(_))
    ));
}

#[test]
fn same_seed_same_society() {
    let a = random_society("r", 12, 10.0, &mut RngHandle::from_seed(5)).unwrap();
    let b = random_society("r", 12, 10.0, &mut RngHandle::from_seed(5)).unwrap();
    let c = random_society("r", 12, 10.0, &mut RngHandle::from_seed(6)).unwrap();
    assert_eq!(canonical_hash(&a), canonical_hash(&b));
    assert_ne!(canonical_hash(&a), canonical_hash(&c));
}

#[test]
fn beta_lengths_are_seeded() {
    let a = beta_length_society("b", 10, 10.0, 2.0, 5.0, &mut RngHandle::from_seed(11)).unwrap();
    let b = beta_length_society("b", 10, 10.0, 2.0, 5.0, &mut RngHandle::from_seed(11)).unwrap();
    let c = beta_length_society("b", 10, 10.0, 2.0, 5.0, &mut RngHandle::from_seed(12)).unwrap();
    assert_eq!(canonical_hash(&a), canonical_hash(&b));
    assert_eq!(a.right_endpoints(), b.right_endpoints());
    assert_ne!(canonical_hash(&a), canonical_hash(&c));
}

#[test]
fn beta_shape_must_be_positive() {
    let mut rng = RngHandle::from_seed(0);
    let err = beta_length_society("b", 3, 10.0, 0.0, 1.0, &mut rng).unwrap_err();
    match err {
        CsError::InvalidInput(info) => {
            assert_eq!(info.code, "beta-shape");
            assert_eq!(info.context.get("a").map(String::as_str), Some("0"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

proptest! {
    #[test]
    fn beta_arcs_stay_on_the_circle(seed in any::<u64>(), n in 1usize..16, a in 0.5f64..4.0, b in 0.5f64..4.0) {
        let modulus = 10.0;
        let mut rng = RngHandle::from_seed(seed);
        let society = beta_length_society("beta", n, modulus, a, b, &mut rng).unwrap();
        prop_assert_eq!(society.len(), n);
        for arc in society.arcs() {
            prop_assert!(arc.left() >= 0.0 && arc.left() < modulus);
            prop_assert!(arc.right() >= 0.0 && arc.right() < modulus);
        }
    }


    #[test]
    fn fixed_length_arcs_have_the_requested_length(seed in any::<u64>(), n in 1usize..16, p in 0.05f64..0.95) {
        let modulus = 10.0;
        let mut rng = RngHandle::from_seed(seed);
        let society = fixed_length_society("fixed", n, modulus, p, &mut rng).unwrap();
        prop_assert_eq!(society.len(), n);
        for arc in society.arcs() {
            prop_assert!(arc.left() >= 0.0 && arc.left() < modulus);
            let length = (arc.right() - arc.left()).rem_euclid(modulus);
            prop_assert!((length - p * modulus).abs() < 1e-9);
            prop_assert!(arc.contains_point(arc.left()));
            prop_assert!(arc.contains_point(arc.right()));
        }
    }
}
