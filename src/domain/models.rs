use serde::Serialize;

use super::value_objects::{
    ConstraintType, OptimizationType, SolutionStatus, SolverBackend, VariableType,
};

/// Decision variable in an optimization problem
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    pub variable_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub name: String,
}

impl Variable {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Integer,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Binary,
            lower_bound: 0.0,
            upper_bound: Some(1.0),
            name: name.into(),
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    /// Free variable (no sign restriction); dual variables of equality
    /// rows are built this way.
    pub fn free(name: impl Into<String>) -> Self {
        Self::continuous(name).with_bounds(f64::NEG_INFINITY, None)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self.variable_type,
            VariableType::Integer | VariableType::Binary
        )
    }

    /// Default bounds in LP convention: x >= 0 with no upper bound.
    pub fn has_default_bounds(&self) -> bool {
        self.lower_bound == 0.0 && self.upper_bound.is_none()
    }
}

/// Objective function to minimize or maximize
#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
    pub variable_names: Vec<String>,
}

impl ObjectiveFunction {
    pub fn new(optimization_type: OptimizationType, coefficients: Vec<f64>) -> Self {
        let variable_names = (0..coefficients.len()).map(|i| format!("x{}", i)).collect();

        Self {
            optimization_type,
            coefficients,
            variable_names,
        }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.variable_names = names;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Linear constraint on variables
#[derive(Debug, Clone, Serialize)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub bound: f64,
    pub name: String,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
            name: String::new(),
        }
    }

    pub fn less_than_or_equal(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::LessThanOrEqual, coefficients, bound)
    }

    pub fn greater_than_or_equal(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::GreaterThanOrEqual, coefficients, bound)
    }

    pub fn equal(coefficients: Vec<f64>, bound: f64) -> Self {
        Self::new(ConstraintType::Equal, coefficients, bound)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Left-hand-side value at the given point.
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values.iter())
            .map(|(c, v)| c * v)
            .sum()
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    pub verbose: bool,
}

/// Complete optimization problem
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationProblem {
    pub name: String,
    pub description: String,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
    #[serde(skip)]
    pub solver_config: SolverConfig,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            objective,
            constraints: Vec::new(),
            variables: Vec::new(),
            solver_config: SolverConfig::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_integer_variables() > 0
    }

    /// Variable names for reporting: explicit variable declarations win,
    /// otherwise the names generated on the objective.
    pub fn variable_names(&self) -> Vec<String> {
        if self.variables.is_empty() {
            self.objective.variable_names.clone()
        } else {
            self.variables.iter().map(|v| v.name.clone()).collect()
        }
    }

    /// Objective value at the given point, independent of any solver.
    pub fn evaluate_objective(&self, values: &[f64]) -> f64 {
        self.objective
            .coefficients
            .iter()
            .zip(values.iter())
            .map(|(c, v)| c * v)
            .sum()
    }

    /// Slack (rhs minus activity) for every constraint, regardless of sense.
    pub fn slacks(&self, values: &[f64]) -> Vec<f64> {
        self.constraints
            .iter()
            .map(|c| c.bound - c.activity(values))
            .collect()
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
}

/// Solution to an optimization problem, including the sensitivity data
/// the solver reports at optimality (reduced costs, slacks, dual values)
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub status: SolutionStatus,
    pub objective_value: Option<f64>,
    pub variable_values: Vec<f64>,
    /// Per-variable reduced costs; empty when the backend does not report them
    pub reduced_costs: Vec<f64>,
    /// Per-constraint slacks (rhs minus activity)
    pub slacks: Vec<f64>,
    /// Per-constraint dual values (shadow prices); empty when unavailable
    pub dual_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            reduced_costs: Vec::new(),
            slacks: Vec::new(),
            dual_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            objective_value: Some(value),
            variable_values,
            reduced_costs: Vec::new(),
            slacks: Vec::new(),
            dual_values: Vec::new(),
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_sensitivity(
        mut self,
        reduced_costs: Vec<f64>,
        slacks: Vec<f64>,
        dual_values: Vec<f64>,
    ) -> Self {
        self.reduced_costs = reduced_costs;
        self.slacks = slacks;
        self.dual_values = dual_values;
        self
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    pub fn is_feasible(&self) -> bool {
        matches!(
            self.status,
            SolutionStatus::Optimal | SolutionStatus::Feasible
        )
    }

    pub fn has_sensitivity(&self) -> bool {
        !self.dual_values.is_empty() || !self.reduced_costs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_variable_defaults_to_nonnegative() {
        let v = Variable::continuous("x1");
        assert_eq!(v.lower_bound, 0.0);
        assert!(v.upper_bound.is_none());
        assert!(v.has_default_bounds());
        assert!(!v.is_integer());
    }

    #[test]
    fn free_variable_has_no_sign_restriction() {
        let v = Variable::free("y");
        assert_eq!(v.lower_bound, f64::NEG_INFINITY);
        assert!(v.upper_bound.is_none());
        assert!(!v.has_default_bounds());
    }

    #[test]
    fn objective_generates_names_when_none_given() {
        let obj = ObjectiveFunction::new(OptimizationType::Minimize, vec![1.0, 2.0]);
        assert_eq!(obj.variable_names, vec!["x0", "x1"]);
    }

    #[test]
    fn constraint_activity_and_slack() {
        let problem = OptimizationProblem::new(ObjectiveFunction::new(
            OptimizationType::Minimize,
            vec![1.0, 1.0],
        ))
        .add_constraint(
            Constraint::greater_than_or_equal(vec![2.0, 3.0], 5.0).with_name("row"),
        );

        let slacks = problem.slacks(&[1.0, 2.0]);
        assert_eq!(slacks, vec![5.0 - 8.0]);
    }

    #[test]
    fn mixed_integer_detection() {
        let obj = ObjectiveFunction::new(OptimizationType::Maximize, vec![1.0, 1.0]);
        let lp = OptimizationProblem::new(obj.clone())
            .with_variables(vec![Variable::continuous("a"), Variable::continuous("b")]);
        assert!(!lp.is_mixed_integer());

        let mip = OptimizationProblem::new(obj)
            .with_variables(vec![Variable::continuous("a"), Variable::integer("b")]);
        assert!(mip.is_mixed_integer());
        assert_eq!(mip.num_integer_variables(), 1);
    }
}
