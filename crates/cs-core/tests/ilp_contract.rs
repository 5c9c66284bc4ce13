use cs_core::ilp::{round_within_tolerance, IlpProblem};
use cs_core::CsError;

#[test]
fn binary_cover_shape() {
    let problem = IlpProblem::binary_cover(vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]], 3);
    assert_eq!(problem.objective, vec![1.0; 3]);
    assert_eq!(problem.constraint_lower_bounds, vec![1.0; 2]);
    assert_eq!(problem.variable_bounds, (0.0, 1.0));
    assert!(problem.integer);
    problem.validate().unwrap();

    assert!(problem.is_satisfied_by(&[0.0, 0.0, 1.0]));
    assert!(problem.is_satisfied_by(&[1.0, 1.0, 0.0]));
    assert!(!problem.is_satisfied_by(&[1.0, 0.0, 0.0]));
}

#[test]
fn ragged_rows_are_rejected() {
    let problem = IlpProblem::binary_cover(vec![vec![1.0, 0.0], vec![1.0]], 2);
    match problem.validate() {
        Err(CsError::InvalidInput(info)) => {
            assert_eq!(info.code, "ilp-row-shape");
            assert_eq!(info.context.get("row"), Some(&"1".to_string()));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn rounding_respects_tolerance() {
    assert_eq!(round_within_tolerance(2.0000004), Some(2));
    assert_eq!(round_within_tolerance(-0.0000001), Some(0));
    assert_eq!(round_within_tolerance(0.9999999), Some(1));
    assert_eq!(round_within_tolerance(1.5), None);
    assert_eq!(round_within_tolerance(0.001), None);
}
