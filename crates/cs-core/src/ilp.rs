//! Problem/solution contract for the external integer program engine.
//!
//! The engine itself is a collaborator: crates in this workspace build an
//! [`IlpProblem`], hand it to an [`IlpEngine`] and interpret the returned
//! [`IlpSolution`]. Nothing here solves anything.

use serde::{Deserialize, Serialize};

use crate::errors::{CsError, ErrorInfo};

/// Distance from an integer below which solver output is snapped to it.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Minimisation problem `min c·x` subject to `A·x >= b` and per-variable bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IlpProblem {
    /// Number of decision variables.
    pub num_variables: usize,
    /// Objective coefficients, one per variable.
    pub objective: Vec<f64>,
    /// Dense constraint matrix with `num_variables` columns.
    pub constraint_matrix: Vec<Vec<f64>>,
    /// Lower bound of every constraint row.
    pub constraint_lower_bounds: Vec<f64>,
    /// Inclusive `(min, max)` bounds shared by all variables.
    pub variable_bounds: (f64, f64),
    /// Whether every variable is restricted to integer values.
    pub integer: bool,
}

impl IlpProblem {
    /// Builds the 0/1 covering program `min Σx` subject to `matrix·x >= 1`.
    pub fn binary_cover(matrix: Vec<Vec<f64>>, num_variables: usize) -> Self {
        let rows = matrix.len();
        Self {
            num_variables,
            objective: vec![1.0; num_variables],
            constraint_matrix: matrix,
            constraint_lower_bounds: vec![1.0; rows],
            variable_bounds: (0.0, 1.0),
            integer: true,
        }
    }

    /// Checks that the dimensions of the problem agree with each other.
    pub fn validate(&self) -> Result<(), CsError> {
        if self.objective.len() != self.num_variables {
            return Err(CsError::InvalidInput(
                ErrorInfo::new("ilp-objective-shape", "objective length differs from variable count")
                    .with_context("objective", self.objective.len().to_string())
                    .with_context("variables", self.num_variables.to_string()),
            ));
        }
        if self.constraint_matrix.len() != self.constraint_lower_bounds.len() {
            return Err(CsError::InvalidInput(
                ErrorInfo::new("ilp-bounds-shape", "one lower bound is required per constraint row")
                    .with_context("rows", self.constraint_matrix.len().to_string())
                    .with_context("bounds", self.constraint_lower_bounds.len().to_string()),
            ));
        }
        if let Some((row, width)) = self
            .constraint_matrix
            .iter()
            .enumerate()
            .map(|(row, values)| (row, values.len()))
            .find(|(_, width)| *width != self.num_variables)
        {
            return Err(CsError::InvalidInput(
                ErrorInfo::new("ilp-row-shape", "constraint row width differs from variable count")
                    .with_context("row", row.to_string())
                    .with_context("width", width.to_string()),
            ));
        }
        Ok(())
    }

    /// Returns whether `assignment` satisfies every constraint within tolerance.
    pub fn is_satisfied_by(&self, assignment: &[f64]) -> bool {
        self.constraint_matrix
            .iter()
            .zip(&self.constraint_lower_bounds)
            .all(|(row, bound)| {
                let lhs: f64 = row.iter().zip(assignment).map(|(a, x)| a * x).sum();
                lhs + INTEGRALITY_TOLERANCE >= *bound
            })
    }
}

/// Optimal point reported by an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IlpSolution {
    /// Objective value at the optimum.
    pub objective: f64,
    /// Raw variable values, possibly carrying floating point noise.
    pub assignment: Vec<f64>,
}

/// Integer program engine capable of solving an [`IlpProblem`] to optimality.
///
/// Implementations report [`CsError::SolverInfeasible`] when no feasible point
/// exists and [`CsError::SolverError`] for any other failure. Calls block until
/// the engine returns.
pub trait IlpEngine: Send + Sync {
    /// Short identifier recorded in reports.
    fn name(&self) -> &str;

    /// Solves the problem and returns an optimal assignment.
    fn solve(&self, problem: &IlpProblem) -> Result<IlpSolution, CsError>;
}

/// Rounds solver output to the nearest integer when it lies within
/// [`INTEGRALITY_TOLERANCE`]; returns `None` otherwise.
pub fn round_within_tolerance(value: f64) -> Option<i64> {
    let rounded = value.round();
    if (value - rounded).abs() <= INTEGRALITY_TOLERANCE {
        Some(rounded as i64)
    } else {
        None
    }
}
