use cs_analysis::{
    analyze_society, exact_piercing_number, greedy_piercing, report_from_json, report_to_json,
    AnalysisOpts, MicrolpEngine, PiercingStep,
};
use cs_canon::{is_lr_alternating, uniformize, UniformizeOpts};
use cs_core::rng::RngHandle;
use cs_society::{random_society, uniform_society, CircularSociety};
use proptest::prelude::*;

fn step(point: f64, covered: &[&str]) -> PiercingStep {
    PiercingStep {
        point,
        covered: covered.iter().map(|name| name.to_string()).collect(),
    }
}

/// Three arcs already brought to uniform form.
fn alternating_three() -> CircularSociety {
    let mut society = CircularSociety::new("alternating", 10.0).unwrap();
    society.add_arc("A", 6.0, 2.0).unwrap();
    society.add_arc("B", 1.0, 5.0).unwrap();
    society.add_arc("C", 3.0, 0.0).unwrap();
    society
}

#[test]
fn greedy_pierces_at_right_endpoints_in_sweep_order() {
    let society = alternating_three();
    assert_eq!(
        greedy_piercing(&society, 0.0),
        vec![step(0.0, &["C", "A"]), step(5.0, &["B"])]
    );
    let exact = exact_piercing_number(&society, &MicrolpEngine).unwrap();
    assert_eq!(exact.number, 2);
}

#[test]
fn starting_point_rotates_the_queue() {
    let society = alternating_three();
    assert_eq!(
        greedy_piercing(&society, 2.5),
        vec![step(5.0, &["B", "C"]), step(2.0, &["A"])]
    );
    // nothing lies at or beyond 9.9, so the sweep is not rotated
    assert_eq!(greedy_piercing(&society, 9.9), greedy_piercing(&society, 0.0));
}

#[test]
fn greedy_matches_exact_on_uniform_societies() {
    for (n, h) in [(5, 2.0), (6, 2.0), (7, 3.0), (8, 3.0)] {
        let society = uniform_society(format!("U({n},{h})"), n, h, 0.5).unwrap();
        assert!(is_lr_alternating(&society));
        let greedy = greedy_piercing(&society, 0.0);
        let exact = exact_piercing_number(&society, &MicrolpEngine).unwrap();
        assert_eq!(greedy.len(), exact.number, "U({n},{h})");
    }
}

#[test]
fn analysis_report_bundles_every_result() {
    let society = uniform_society("U(5,2)", 5, 2.0, 0.5).unwrap();
    let opts = AnalysisOpts {
        agreeability: Some((2, 3)),
        ..AnalysisOpts::default()
    };
    let report = analyze_society(&society, &opts, &MicrolpEngine).unwrap();
    assert_eq!(report.num_voters, 5);
    assert_eq!(report.agreement.as_ref().map(|a| a.count), Some(2));
    assert_eq!(report.exact_piercing.as_ref().map(|p| p.number), Some(3));
    assert_eq!(
        report.greedy,
        vec![
            step(0.5, &["Set 5", "Set 1"]),
            step(2.5, &["Set 2", "Set 3"]),
            step(4.5, &["Set 4"]),
        ]
    );
    assert!(report.lr_alternating);
    assert!(!report.containment.found);
    assert!(report.agreeability.as_ref().is_some_and(|a| a.agreeable));

    let restored = report_from_json(&report_to_json(&report).unwrap()).unwrap();
    assert_eq!(restored.society_hash, report.society_hash);
    assert_eq!(restored.greedy, report.greedy);
    assert_eq!(restored.agreeability, report.agreeability);
}

#[test]
fn exact_piercing_can_be_skipped() {
    let society = uniform_society("U(4,2)", 4, 2.0, 0.5).unwrap();
    let opts = AnalysisOpts {
        exact_piercing: false,
        ..AnalysisOpts::default()
    };
    let report = analyze_society(&society, &opts, &MicrolpEngine).unwrap();
    assert!(report.exact_piercing.is_none());
    assert!(report.agreeability.is_none());

    let json = report_to_json(&report).unwrap();
    assert_eq!(report_from_json(&json).unwrap(), report);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn greedy_matches_exact_after_uniformizing(seed in any::<u64>(), n in 1usize..8) {
        let mut rng = RngHandle::from_seed(seed);
        let mut society = random_society("random", n, 10.0, &mut rng).unwrap();
        if uniformize(&mut society, &UniformizeOpts::default()).is_err() {
            return Ok(());
        }

        let greedy = greedy_piercing(&society, 0.0);
        let covered: usize = greedy.iter().map(|step| step.covered.len()).sum();
        prop_assert_eq!(covered, n);
        for arc in society.arcs() {
            prop_assert!(greedy.iter().any(|step| arc.contains_point(step.point)));
        }

        let exact = exact_piercing_number(&society, &MicrolpEngine).unwrap();
        prop_assert_eq!(exact.number, greedy.len());
    }
}
