// Mechanical dual construction for linear programs
//
// For a primal in the standard exercise form (continuous variables with
// default x >= 0 bounds), the dual is:
//
//   min c'x, Ax {<=,=,>=} b, x >= 0   <->   max b'y, A'y <= c
//   max c'x, Ax {<=,=,>=} b, x >= 0   <->   min b'y, A'y >= c
//
// with the sign of each dual variable determined by the sense of the
// primal row it prices (and free for equality rows).

use super::models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable};
use super::solver_service::{Result, SolverError};
use super::value_objects::{ConstraintType, OptimizationType};

/// Build the dual of a continuous LP whose variables carry the default
/// x >= 0 bounds. Integer variables and shifted or bounded variables are
/// rejected rather than silently producing a wrong dual.
pub fn dual_of(primal: &OptimizationProblem) -> Result<OptimizationProblem> {
    for var in &primal.variables {
        if var.is_integer() {
            return Err(SolverError::InvalidProblem(format!(
                "Cannot dualize: variable '{}' is not continuous",
                var.name
            )));
        }
        if !var.has_default_bounds() {
            return Err(SolverError::InvalidProblem(format!(
                "Cannot dualize: variable '{}' has non-default bounds",
                var.name
            )));
        }
    }

    let num_primal_vars = primal.num_variables();
    for (i, constraint) in primal.constraints.iter().enumerate() {
        if constraint.num_variables() != num_primal_vars {
            return Err(SolverError::InvalidProblem(format!(
                "Cannot dualize: constraint {} has {} coefficients but problem has {} variables",
                i,
                constraint.num_variables(),
                num_primal_vars
            )));
        }
    }

    let dual_sense = primal.objective.optimization_type.flipped();

    // One dual variable per primal row, named after the row it prices
    let mut dual_variables = Vec::with_capacity(primal.constraints.len());
    let mut dual_objective_coeffs = Vec::with_capacity(primal.constraints.len());
    for (i, row) in primal.constraints.iter().enumerate() {
        let name = if row.name.is_empty() {
            format!("y{}", i)
        } else {
            row.name.clone()
        };
        let var = match (primal.objective.optimization_type, row.constraint_type) {
            (OptimizationType::Minimize, ConstraintType::GreaterThanOrEqual)
            | (OptimizationType::Maximize, ConstraintType::LessThanOrEqual) => {
                Variable::continuous(name)
            }
            (OptimizationType::Minimize, ConstraintType::LessThanOrEqual)
            | (OptimizationType::Maximize, ConstraintType::GreaterThanOrEqual) => {
                Variable::continuous(name).with_bounds(f64::NEG_INFINITY, Some(0.0))
            }
            (_, ConstraintType::Equal) => Variable::free(name),
        };
        dual_variables.push(var);
        dual_objective_coeffs.push(row.bound);
    }

    let dual_constraint_type = match primal.objective.optimization_type {
        OptimizationType::Minimize => ConstraintType::LessThanOrEqual,
        OptimizationType::Maximize => ConstraintType::GreaterThanOrEqual,
    };

    // One dual constraint per primal column: the transposed coefficients
    // bounded by that column's objective coefficient
    let primal_names = primal.variable_names();
    let mut dual_constraints = Vec::with_capacity(num_primal_vars);
    for j in 0..num_primal_vars {
        let column: Vec<f64> = primal
            .constraints
            .iter()
            .map(|row| row.coefficients[j])
            .collect();
        dual_constraints.push(
            Constraint::new(dual_constraint_type, column, primal.objective.coefficients[j])
                .with_name(primal_names[j].clone()),
        );
    }

    let dual_names: Vec<String> = dual_variables.iter().map(|v| v.name.clone()).collect();
    let mut dual = OptimizationProblem::new(
        ObjectiveFunction::new(dual_sense, dual_objective_coeffs).with_names(dual_names),
    )
    .with_name(if primal.name.is_empty() {
        "dual".to_string()
    } else {
        format!("dual of {}", primal.name)
    })
    .with_variables(dual_variables);

    for constraint in dual_constraints {
        dual = dual.add_constraint(constraint);
    }

    Ok(dual)
}
