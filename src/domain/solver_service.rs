// Domain service interface for solving optimization problems
// Defines the contract that any solver backend must follow

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization solvers
///
/// This trait defines the contract that all solver backends must follow.
/// It allows swapping backends without changing the formulation layer.
pub trait SolverService: Send + Sync + std::fmt::Debug {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        // Check objective has coefficients
        if problem.objective.coefficients.is_empty() {
            errors.push("Objective must have at least one coefficient".to_string());
        }

        let num_vars = problem.num_variables();

        // Check variables match objective
        if !problem.variables.is_empty() && problem.variables.len() != num_vars {
            errors.push(format!(
                "Number of variables ({}) doesn't match objective coefficients ({})",
                problem.variables.len(),
                num_vars
            ));
        }

        // Check constraints
        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} has {} coefficients but problem has {} variables",
                    i,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        // Check variable bounds
        for (i, var) in problem.variables.iter().enumerate() {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver supports mixed-integer programming
    fn supports_mip(&self) -> bool;

    /// Check if this solver reports reduced costs and dual values
    fn supports_sensitivity(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, Variable};
    use crate::domain::value_objects::OptimizationType;

    #[derive(Debug)]
    struct NullSolver;

    impl SolverService for NullSolver {
        fn solve(&self, _problem: &OptimizationProblem) -> Result<Solution> {
            unimplemented!()
        }

        fn name(&self) -> &str {
            "null"
        }

        fn supports_mip(&self) -> bool {
            false
        }

        fn supports_sensitivity(&self) -> bool {
            false
        }
    }

    fn two_var_problem() -> OptimizationProblem {
        OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Minimize,
            vec![1.0, 2.0],
        ))
    }

    #[test]
    fn validate_accepts_well_formed_problem() {
        let problem = two_var_problem()
            .with_variables(vec![Variable::continuous("a"), Variable::continuous("b")])
            .add_constraint(Constraint::greater_than_or_equal(vec![1.0, 1.0], 1.0));

        assert!(NullSolver.validate(&problem).is_ok());
    }

    #[test]
    fn validate_rejects_empty_objective() {
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Minimize,
            vec![],
        ));

        let err = NullSolver.validate(&problem).unwrap_err();
        assert!(matches!(err, SolverError::InvalidProblem(_)));
    }

    #[test]
    fn validate_rejects_constraint_dimension_mismatch() {
        let problem =
            two_var_problem().add_constraint(Constraint::equal(vec![1.0, 1.0, 1.0], 1.0));

        let err = NullSolver.validate(&problem).unwrap_err();
        assert!(err.to_string().contains("coefficients"));
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let problem = two_var_problem().with_variables(vec![
            Variable::continuous("a").with_bounds(3.0, Some(1.0)),
            Variable::continuous("b"),
        ]);

        let err = NullSolver.validate(&problem).unwrap_err();
        assert!(err.to_string().contains("lower bound"));
    }
}
