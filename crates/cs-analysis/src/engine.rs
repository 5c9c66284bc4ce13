use cs_core::errors::{CsError, ErrorInfo};
use cs_core::ilp::{IlpEngine, IlpProblem, IlpSolution};
use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

/// [`IlpEngine`] backed by the pure Rust `microlp` solver through `good_lp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpEngine;

impl IlpEngine for MicrolpEngine {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(&self, problem: &IlpProblem) -> Result<IlpSolution, CsError> {
        problem.validate()?;
        let (lower, upper) = problem.variable_bounds;

        let mut vars = ProblemVariables::new();
        let x: Vec<Variable> = (0..problem.num_variables)
            .map(|_| {
                let definition = variable().min(lower).max(upper);
                if problem.integer {
                    vars.add(definition.integer())
                } else {
                    vars.add(definition)
                }
            })
            .collect();

        let objective: Expression = x
            .iter()
            .zip(&problem.objective)
            .map(|(&var, &coefficient)| coefficient * var)
            .sum();
        let mut model = vars.minimise(objective).using(microlp);
        for (row, &bound) in problem
            .constraint_matrix
            .iter()
            .zip(&problem.constraint_lower_bounds)
        {
            let lhs: Expression = x
                .iter()
                .zip(row)
                .filter(|&(_, &coefficient)| coefficient != 0.0)
                .map(|(&var, &coefficient)| coefficient * var)
                .sum();
            model = model.with(constraint!(lhs >= bound));
        }

        let solution = model.solve().map_err(map_resolution_error)?;
        let assignment: Vec<f64> = x.iter().map(|&var| solution.value(var)).collect();
        let objective = assignment
            .iter()
            .zip(&problem.objective)
            .map(|(value, coefficient)| value * coefficient)
            .sum();
        Ok(IlpSolution {
            objective,
            assignment,
        })
    }
}

fn map_resolution_error(err: ResolutionError) -> CsError {
    match err {
        ResolutionError::Infeasible => CsError::SolverInfeasible(ErrorInfo::new(
            "ilp-infeasible",
            "integer program has no feasible point",
        )),
        other => CsError::SolverError(
            ErrorInfo::new("ilp-failed", other.to_string()).with_context("engine", "microlp"),
        ),
    }
}
