// The diet model and its dual, with the textbook coefficients:
//
//   minimize   20 x1 + 10 x2 + 31 x3 + 11 x4 + 12 x5
//   subject to  2 x1 + 0 x2 + 3 x3 + 1 x4 + 2 x5 >= 21   (iron)
//               0 x1 + 1 x2 + 2 x3 + 2 x4 + 1 x5 >= 12   (calcium)
//
//   maximize   21 pi + 12 pc
//   subject to  2 pi + 0 pc <= 20
//               0 pi + 1 pc <= 10
//               3 pi + 2 pc <= 31
//               1 pi + 2 pc <= 11
//               2 pi + 1 pc <= 12

use crate::domain::models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable};
use crate::domain::value_objects::OptimizationType;

/// Cost-minimizing diet over five foods and two nutrient requirements.
pub fn primal() -> OptimizationProblem {
    let names = ["x1", "x2", "x3", "x4", "x5"];

    OptimizationProblem::new(
        ObjectiveFunction::new(OptimizationType::Minimize, vec![20.0, 10.0, 31.0, 11.0, 12.0])
            .with_names(names.iter().map(|n| n.to_string()).collect()),
    )
    .with_name("diet")
    .with_description("Least-cost diet meeting iron and calcium requirements")
    .with_variables(names.iter().map(|n| Variable::continuous(*n)).collect())
    .add_constraint(
        Constraint::greater_than_or_equal(vec![2.0, 0.0, 3.0, 1.0, 2.0], 21.0).with_name("iron"),
    )
    .add_constraint(
        Constraint::greater_than_or_equal(vec![0.0, 1.0, 2.0, 2.0, 1.0], 12.0)
            .with_name("calcium"),
    )
}

/// The dual of the diet model: nutrient prices maximizing the value of
/// the requirements without overpricing any food.
pub fn dual() -> OptimizationProblem {
    OptimizationProblem::new(
        ObjectiveFunction::new(OptimizationType::Maximize, vec![21.0, 12.0])
            .with_names(vec!["pi".to_string(), "pc".to_string()]),
    )
    .with_name("diet-dual")
    .with_description("Nutrient pricing dual of the diet model")
    .with_variables(vec![Variable::continuous("pi"), Variable::continuous("pc")])
    .add_constraint(Constraint::less_than_or_equal(vec![2.0, 0.0], 20.0).with_name("c1"))
    .add_constraint(Constraint::less_than_or_equal(vec![0.0, 1.0], 10.0).with_name("c2"))
    .add_constraint(Constraint::less_than_or_equal(vec![3.0, 2.0], 31.0).with_name("c3"))
    .add_constraint(Constraint::less_than_or_equal(vec![1.0, 2.0], 11.0).with_name("c4"))
    .add_constraint(Constraint::less_than_or_equal(vec![2.0, 1.0], 12.0).with_name("c5"))
}
