use cs_core::Side;
use cs_society::{list_endpoints, Arc, CircularSociety};
use serde::{Deserialize, Serialize};

/// Options for the greedy piercing sweep.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GreedyOpts {
    /// The sweep starts at the first endpoint at or after this point.
    #[serde(default)]
    pub starting_point: f64,
}

/// One piercing point chosen by the greedy sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiercingStep {
    /// Position of the piercing point.
    pub point: f64,
    /// Arcs first covered by this point, in sweep order.
    pub covered: Vec<String>,
}

/// Pierces the society greedily at right endpoints.
///
/// Arcs are queued in the order their right endpoints appear in the sweep
/// rotated to `starting_point`. The right endpoint of the first uncovered arc
/// becomes the next piercing point and every uncovered arc containing it is
/// retired. The result is a minimum piercing set for LR-alternating
/// societies; in general it is only an upper bound.
pub fn greedy_piercing(society: &CircularSociety, starting_point: f64) -> Vec<PiercingStep> {
    let sweep = list_endpoints(society).rotated(starting_point);
    let mut uncovered: Vec<&Arc> = sweep
        .events()
        .iter()
        .filter(|event| event.side == Side::Right)
        .filter_map(|event| society.lookup_arc(&event.owner))
        .collect();

    let mut steps = Vec::new();
    while let Some(first) = uncovered.first() {
        let point = first.right();
        let (covered, rest): (Vec<&Arc>, Vec<&Arc>) = uncovered
            .into_iter()
            .partition(|arc| arc.contains_point(point));
        steps.push(PiercingStep {
            point,
            covered: covered.iter().map(|arc| arc.name().to_string()).collect(),
        });
        uncovered = rest;
    }
    steps
}
