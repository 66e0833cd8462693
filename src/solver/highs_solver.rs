// HiGHS solver adapter
// Translates the domain model to the HiGHS RowProblem API and reads back
// the full solution picture: values, reduced costs, slacks, dual values

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{
        ConstraintType, OptimizationType, SolutionStatus as DomainSolutionStatus, VariableType,
    },
};
use std::time::Instant;
use tracing::debug;

#[derive(Debug)]
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        // Validate first
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        // Use HiGHS RowProblem (add variables first, then constraints)
        use highs::{HighsModelStatus, RowProblem, Sense};

        let mut pb = RowProblem::default();
        let mut vars = Vec::new();

        // Add variables
        for var_def in &problem.variables {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let obj_coeff = problem
                .objective
                .coefficients
                .get(vars.len())
                .copied()
                .unwrap_or(0.0);

            let col = match var_def.variable_type {
                VariableType::Integer | VariableType::Binary => {
                    pb.add_integer_column(obj_coeff, lower..upper)
                }
                VariableType::Continuous => pb.add_column(obj_coeff, lower..upper),
            };
            vars.push(col);
        }

        // If no variables specified, create nonnegative continuous defaults
        if problem.variables.is_empty() {
            for &coeff in problem.objective.coefficients.iter() {
                let col = pb.add_column(coeff, 0..);
                vars.push(col);
            }
        }

        // Add constraints
        for constraint in &problem.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 && i < vars.len() {
                    terms.push((vars[i], coeff));
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        // Solve the problem
        let sense = if problem.objective.optimization_type == OptimizationType::Maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let mut model = pb.optimise(sense);
        if !problem.solver_config.verbose {
            model.set_option("output_flag", false);
        }
        let solved = model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
        debug!(solve_time_ms = solve_time, status = ?solved.status(), "HiGHS finished");

        // Build statistics
        let statistics = SolverStatistics {
            solve_time_ms: solve_time,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
        };

        // Process result
        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution_data = solved.get_solution();
                let variable_values = solution_data.columns().to_vec();

                let actual_obj = problem.evaluate_objective(&variable_values);
                let slacks = problem.slacks(&variable_values);

                // Reduced costs and dual values only exist for pure LPs;
                // a MIP has no meaningful duals
                let (reduced_costs, dual_values) = if problem.is_mixed_integer() {
                    (Vec::new(), Vec::new())
                } else {
                    (
                        solution_data.dual_columns().to_vec(),
                        solution_data.dual_rows().to_vec(),
                    )
                };

                let mut solution = DomainSolution::optimal(actual_obj, variable_values)
                    .with_sensitivity(reduced_costs, slacks, dual_values)
                    .with_statistics(statistics);
                solution.message = format!("Optimal solution found for '{}'", problem.name);

                Ok(solution)
            }
            HighsModelStatus::Infeasible => {
                let mut solution = DomainSolution::new(
                    DomainSolutionStatus::Infeasible,
                    "Problem is infeasible: no solution satisfies all constraints",
                );
                solution.statistics = statistics;
                Ok(solution)
            }
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                let mut solution = DomainSolution::new(
                    DomainSolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                );
                solution.statistics = statistics;
                Ok(solution)
            }
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }

    fn supports_sensitivity(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable};

    const TOL: f64 = 1e-6;

    #[test]
    fn solves_simple_lp() {
        // Minimize: x + y
        // Subject to: x + y >= 1
        //            x, y >= 0
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Minimize,
            vec![1.0, 1.0],
        ))
        .with_variables(vec![Variable::continuous("x"), Variable::continuous("y")])
        .add_constraint(Constraint::greater_than_or_equal(vec![1.0, 1.0], 1.0));

        let solution = HighsSolver::new().solve(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!((solution.objective_value.unwrap() - 1.0).abs() < TOL);
        let sum: f64 = solution.variable_values.iter().sum();
        assert!((sum - 1.0).abs() < TOL);
    }

    #[test]
    fn reports_duals_and_zero_slack_on_binding_row() {
        // Minimize: 2x subject to x >= 3
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Minimize,
            vec![2.0],
        ))
        .with_variables(vec![Variable::continuous("x")])
        .add_constraint(Constraint::greater_than_or_equal(vec![1.0], 3.0).with_name("floor"));

        let solution = HighsSolver::new().solve(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.has_sensitivity());
        assert!((solution.variable_values[0] - 3.0).abs() < TOL);
        assert!(solution.slacks[0].abs() < TOL);
        // Relaxing x >= 3 by one unit saves one unit of 2x
        assert!((solution.dual_values[0] - 2.0).abs() < TOL);
        // Basic variable has zero reduced cost
        assert!(solution.reduced_costs[0].abs() < TOL);
    }

    #[test]
    fn detects_infeasible_problem() {
        // x <= 1 and x >= 2 cannot both hold
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Minimize,
            vec![1.0],
        ))
        .with_variables(vec![Variable::continuous("x")])
        .add_constraint(Constraint::less_than_or_equal(vec![1.0], 1.0))
        .add_constraint(Constraint::greater_than_or_equal(vec![1.0], 2.0));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, DomainSolutionStatus::Infeasible);
    }

    #[test]
    fn detects_unbounded_problem() {
        // Maximize x with no constraints at all
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![1.0],
        ))
        .with_variables(vec![Variable::continuous("x")]);

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, DomainSolutionStatus::Unbounded);
    }

    #[test]
    fn mip_solution_carries_no_duals() {
        // Maximize x + y, x + y <= 1, x and y binary
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![1.0, 1.0],
        ))
        .with_variables(vec![Variable::binary("x"), Variable::binary("y")])
        .add_constraint(Constraint::less_than_or_equal(vec![1.0, 1.0], 1.0));

        let solution = HighsSolver::new().solve(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!((solution.objective_value.unwrap() - 1.0).abs() < TOL);
        assert!(solution.dual_values.is_empty());
        assert!(solution.reduced_costs.is_empty());
        // Slacks are still computed from the primal values
        assert_eq!(solution.slacks.len(), 1);
    }

    #[test]
    fn maximization_reports_true_objective() {
        // Maximize 3x subject to 2x <= 6
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![3.0],
        ))
        .with_variables(vec![Variable::continuous("x")])
        .add_constraint(Constraint::less_than_or_equal(vec![2.0], 6.0));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert!((solution.objective_value.unwrap() - 9.0).abs() < TOL);
    }
}
