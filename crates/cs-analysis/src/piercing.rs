use cs_core::errors::{CsError, ErrorInfo};
use cs_core::ilp::{round_within_tolerance, IlpEngine, IlpProblem};
use cs_society::{list_endpoints, CircularSociety};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum piercing set obtained from the integer program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactPiercing {
    /// Piercing number of the society.
    pub number: usize,
    /// Candidate positions selected by the optimal assignment.
    pub points: Vec<f64>,
    /// Raw assignment returned by the engine, one entry per candidate.
    pub assignment: Vec<f64>,
    /// Candidate positions (the sweep positions), one per column.
    pub candidates: Vec<f64>,
    /// `N x 2N` incidence matrix: row `i`, column `j` is 1 iff arc `i` contains candidate `j`.
    pub incidence: Vec<Vec<u8>>,
    /// Name of the engine that solved the program.
    pub engine: String,
}

/// Builds the arc/candidate incidence matrix, rows in society order.
pub fn incidence_matrix(society: &CircularSociety, candidates: &[f64]) -> Vec<Vec<u8>> {
    society
        .arcs()
        .iter()
        .map(|arc| {
            candidates
                .iter()
                .map(|&point| u8::from(arc.contains_point(point)))
                .collect()
        })
        .collect()
}

/// Computes the piercing number exactly as a 0/1 set-cover program.
///
/// Candidate points are the `2N` endpoint positions, which always admit a
/// feasible cover. Solver output is snapped to integers within
/// [`INTEGRALITY_TOLERANCE`](cs_core::INTEGRALITY_TOLERANCE); anything else,
/// including an assignment that fails to pierce every arc, is reported as
/// [`CsError::SolverError`].
pub fn exact_piercing_number(
    society: &CircularSociety,
    engine: &dyn IlpEngine,
) -> Result<ExactPiercing, CsError> {
    let candidates = list_endpoints(society).positions();
    let incidence = incidence_matrix(society, &candidates);
    if society.is_empty() {
        return Ok(ExactPiercing {
            number: 0,
            points: Vec::new(),
            assignment: Vec::new(),
            candidates,
            incidence,
            engine: engine.name().to_string(),
        });
    }

    let matrix = incidence
        .iter()
        .map(|row| row.iter().map(|&entry| f64::from(entry)).collect())
        .collect();
    let problem = IlpProblem::binary_cover(matrix, candidates.len());
    debug!(
        society = %society.name(),
        engine = engine.name(),
        rows = society.len(),
        columns = candidates.len(),
        "solving piercing program"
    );
    let solution = engine.solve(&problem)?;

    if solution.assignment.len() != candidates.len() {
        return Err(solver_error(
            ErrorInfo::new("assignment-length", "engine returned the wrong number of variables")
                .with_context("expected", candidates.len().to_string())
                .with_context("found", solution.assignment.len().to_string()),
            engine,
        ));
    }
    let number = round_within_tolerance(solution.objective).ok_or_else(|| {
        solver_error(
            ErrorInfo::new("fractional-objective", "objective is not integral within tolerance")
                .with_context("objective", solution.objective.to_string()),
            engine,
        )
    })?;

    let mut rounded = Vec::with_capacity(solution.assignment.len());
    for (column, &value) in solution.assignment.iter().enumerate() {
        let snapped = round_within_tolerance(value)
            .filter(|v| *v == 0 || *v == 1)
            .ok_or_else(|| {
                solver_error(
                    ErrorInfo::new("non-binary-assignment", "assignment entry is not 0 or 1")
                        .with_context("column", column.to_string())
                        .with_context("value", value.to_string()),
                    engine,
                )
            })?;
        rounded.push(snapped as f64);
    }
    if !problem.is_satisfied_by(&rounded) {
        return Err(solver_error(
            ErrorInfo::new("uncovered-arc", "assignment leaves an arc unpierced"),
            engine,
        ));
    }

    let points: Vec<f64> = candidates
        .iter()
        .zip(&rounded)
        .filter(|&(_, &x)| x > 0.0)
        .map(|(&point, _)| point)
        .collect();
    if points.len() as i64 != number {
        return Err(solver_error(
            ErrorInfo::new("objective-mismatch", "objective disagrees with the selected points")
                .with_context("objective", number.to_string())
                .with_context("selected", points.len().to_string()),
            engine,
        ));
    }

    Ok(ExactPiercing {
        number: points.len(),
        points,
        assignment: solution.assignment,
        candidates,
        incidence,
        engine: engine.name().to_string(),
    })
}

fn solver_error(info: ErrorInfo, engine: &dyn IlpEngine) -> CsError {
    CsError::SolverError(info.with_context("engine", engine.name()))
}
