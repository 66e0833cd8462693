// Solution reporting: the variables / objective / constraints tables the
// solver readback produces (value, reduced cost, slack, dual value)

use crate::domain::models::{OptimizationProblem, Solution};
use crate::domain::value_objects::SolutionStatus;
use serde::Serialize;
use std::fmt::Write;

/// One row of the variables table
#[derive(Debug, Clone, Serialize)]
pub struct VariableReport {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_cost: Option<f64>,
}

/// One row of the constraints table
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintReport {
    pub name: String,
    pub slack: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual_value: Option<f64>,
}

/// Solve outcome in reporting shape, also used for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    pub problem: String,
    pub status: SolutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_value: Option<f64>,
    pub variables: Vec<VariableReport>,
    pub constraints: Vec<ConstraintReport>,
    pub message: String,
}

impl SolutionReport {
    pub fn new(problem: &OptimizationProblem, solution: &Solution) -> Self {
        let variable_names = problem.variable_names();

        let variables = variable_names
            .iter()
            .zip(solution.variable_values.iter())
            .enumerate()
            .map(|(i, (name, &value))| VariableReport {
                name: name.clone(),
                value,
                reduced_cost: solution.reduced_costs.get(i).copied(),
            })
            .collect();

        let constraints = problem
            .constraints
            .iter()
            .enumerate()
            .map(|(i, constraint)| ConstraintReport {
                name: if constraint.name.is_empty() {
                    format!("c{}", i)
                } else {
                    constraint.name.clone()
                },
                slack: solution.slacks.get(i).copied().unwrap_or(0.0),
                dual_value: solution.dual_values.get(i).copied(),
            })
            .collect();

        Self {
            problem: problem.name.clone(),
            status: solution.status,
            objective_value: solution.objective_value,
            variables,
            constraints,
            message: solution.message.clone(),
        }
    }

    /// Render the plain-text report the example programs print.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Optimization complete");

        if self.status != SolutionStatus::Optimal {
            let _ = writeln!(out, "{}", self.message);
            return out;
        }

        let has_reduced_costs = self.variables.iter().any(|v| v.reduced_cost.is_some());

        let _ = writeln!(out, "\nVariables:");
        if has_reduced_costs {
            let _ = writeln!(out, "{:<12} {:>10} {:>12}", "Name", "Value", "Red. Cost");
            for v in &self.variables {
                let _ = writeln!(
                    out,
                    "{:<12} {:>10.1} {:>12.4}",
                    v.name,
                    v.value,
                    v.reduced_cost.unwrap_or(0.0)
                );
            }
        } else {
            let _ = writeln!(out, "{:<12} {:>10}", "Name", "Value");
            for v in &self.variables {
                let _ = writeln!(out, "{:<12} {:>10.1}", v.name, v.value);
            }
        }

        if let Some(objective) = self.objective_value {
            let _ = writeln!(out, "\nOptimal objective: {:.4e}", objective);
        }

        let has_duals = self.constraints.iter().any(|c| c.dual_value.is_some());

        if !self.constraints.is_empty() {
            let _ = writeln!(out, "\nConstraints:");
            if has_duals {
                let _ = writeln!(out, "{:<12} {:>10} {:>12}", "Name", "Slack", "Dual Value");
                for c in &self.constraints {
                    let _ = writeln!(
                        out,
                        "{:<12} {:>10.1} {:>12.4}",
                        c.name,
                        c.slack,
                        c.dual_value.unwrap_or(0.0)
                    );
                }
            } else {
                let _ = writeln!(out, "{:<12} {:>10}", "Name", "Slack");
                for c in &self.constraints {
                    let _ = writeln!(out, "{:<12} {:>10.1}", c.name, c.slack);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable};
    use crate::domain::value_objects::OptimizationType;

    fn problem() -> OptimizationProblem {
        OptimizationProblem::new(
            ObjectiveFunction::new(OptimizationType::Minimize, vec![2.0])
                .with_names(vec!["x1".into()]),
        )
        .with_name("tiny")
        .with_variables(vec![Variable::continuous("x1")])
        .add_constraint(Constraint::greater_than_or_equal(vec![1.0], 3.0).with_name("floor"))
    }

    #[test]
    fn optimal_report_shows_all_four_readback_columns() {
        let solution = Solution::optimal(6.0, vec![3.0]).with_sensitivity(
            vec![0.0],
            vec![0.0],
            vec![2.0],
        );
        let report = SolutionReport::new(&problem(), &solution);
        let text = report.render_text();

        assert!(text.contains("Optimization complete"));
        assert!(text.contains("Red. Cost"));
        assert!(text.contains("Dual Value"));
        assert!(text.contains("Optimal objective: 6.0000e0"));
        assert!(text.contains("floor"));
    }

    #[test]
    fn report_without_sensitivity_omits_those_columns() {
        let solution =
            Solution::optimal(6.0, vec![3.0]).with_sensitivity(Vec::new(), vec![0.0], Vec::new());
        let text = SolutionReport::new(&problem(), &solution).render_text();

        assert!(!text.contains("Red. Cost"));
        assert!(!text.contains("Dual Value"));
        assert!(text.contains("Slack"));
    }

    #[test]
    fn non_optimal_report_prints_the_message_only() {
        let solution = Solution::new(SolutionStatus::Infeasible, "Problem is infeasible");
        let text = SolutionReport::new(&problem(), &solution).render_text();

        assert!(text.contains("Problem is infeasible"));
        assert!(!text.contains("Variables:"));
    }

    #[test]
    fn json_serialization_keeps_sensitivity_fields() {
        let solution = Solution::optimal(6.0, vec![3.0]).with_sensitivity(
            vec![0.0],
            vec![0.0],
            vec![2.0],
        );
        let report = SolutionReport::new(&problem(), &solution);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["problem"], "tiny");
        assert_eq!(json["variables"][0]["name"], "x1");
        assert_eq!(json["constraints"][0]["dual_value"], 2.0);
    }
}
