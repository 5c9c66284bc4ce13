use cs_core::errors::{CsError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("name", "Set 1")
        .with_context("reason", "example")
}

#[test]
fn duplicate_name_surface() {
    let err = CsError::duplicate_name("Set 1");
    assert_eq!(err.info().code, "duplicate-name");
    assert_eq!(err.info().context.get("name"), Some(&"Set 1".to_string()));
    assert!(err.info().hint.is_some());
    assert!(err.is_name_error());
}

#[test]
fn name_not_found_surface() {
    let err = CsError::name_not_found("ghost");
    assert_eq!(err.info().code, "name-not-found");
    assert!(err.is_name_error());
    assert!(err.to_string().contains("name=ghost"));
}

#[test]
fn non_convergence_surface() {
    let err = CsError::NonConvergence(sample_info("rrl-bound", "still not alternating"));
    assert_eq!(err.info().code, "rrl-bound");
    assert!(!err.is_name_error());
}

#[test]
fn solver_error_surfaces() {
    let infeasible = CsError::SolverInfeasible(sample_info("ilp-infeasible", "no point"));
    let failed = CsError::SolverError(sample_info("ilp-failed", "backend crashed"));
    assert_eq!(infeasible.info().code, "ilp-infeasible");
    assert_eq!(failed.info().code, "ilp-failed");
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = CsError::duplicate_name("A");
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "DuplicateName");
    assert_eq!(json["detail"]["code"], "duplicate-name");
    let back: CsError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, err);
}
