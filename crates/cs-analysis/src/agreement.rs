use cs_society::{list_endpoints, Arc, CircularSociety};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest number of arcs sharing a point, with one point attaining it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementNumber {
    /// Number of arcs containing `position`.
    pub count: usize,
    /// First endpoint position (in sweep order) attaining `count`.
    pub position: f64,
}

/// Outcome of a (k, m)-agreeability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agreeability {
    /// Size of the sub-collections that must agree.
    pub k: usize,
    /// Size of the collections being tested.
    pub m: usize,
    /// Whether every m-subset contains an agreeing k-subset.
    pub agreeable: bool,
    /// Number of m-subsets examined.
    pub subsets_checked: usize,
    /// Names of the m-subsets for which no witness point was found.
    pub violating_subsets: Vec<Vec<String>>,
}

/// Computes the agreement number of the society.
///
/// Overlap only changes at an endpoint, so only the `2N` endpoint positions
/// are tested. Returns `None` for an empty society.
pub fn agreement_number(society: &CircularSociety) -> Option<AgreementNumber> {
    let sweep = list_endpoints(society);
    let mut best: Option<AgreementNumber> = None;
    for position in sweep.positions() {
        let count = society
            .arcs()
            .iter()
            .filter(|arc| arc.contains_point(position))
            .count();
        if best.as_ref().map_or(true, |current| count > current.count) {
            best = Some(AgreementNumber { count, position });
        }
    }
    best
}

/// Checks whether the society is (k, m)-agreeable by brute force.
///
/// Every m-subset of arcs is enumerated; it is good when one of its k-subsets
/// is good. A k-subset is good when all of its arcs contain the left endpoint
/// of its first arc, or all contain that arc's right endpoint. The cost is
/// `C(N, m) * C(m, k)` subset evaluations.
pub fn check_agreeability(society: &CircularSociety, k: usize, m: usize) -> Agreeability {
    let arcs = society.arcs();
    let m_subsets: Vec<Vec<&Arc>> = if m == 0 {
        vec![Vec::new()]
    } else {
        arcs.iter().combinations(m).collect()
    };

    let mut violating_subsets = Vec::new();
    for subset in &m_subsets {
        if !has_agreeing_subset(subset, k) {
            violating_subsets.push(subset.iter().map(|arc| arc.name().to_string()).collect());
        }
    }
    debug!(
        society = %society.name(),
        k,
        m,
        checked = m_subsets.len(),
        violations = violating_subsets.len(),
        "agreeability scan finished"
    );

    Agreeability {
        k,
        m,
        agreeable: violating_subsets.is_empty(),
        subsets_checked: m_subsets.len(),
        violating_subsets,
    }
}

fn has_agreeing_subset(subset: &[&Arc], k: usize) -> bool {
    if k == 0 {
        return false;
    }
    subset
        .iter()
        .copied()
        .combinations(k)
        .any(|candidate| is_witnessed(&candidate))
}

fn is_witnessed(candidate: &[&Arc]) -> bool {
    let Some(first) = candidate.first() else {
        return false;
    };
    let witness = |point: f64| candidate.iter().all(|arc| arc.contains_point(point));
    witness(first.left()) || witness(first.right())
}
