// CPLEX LP format writer
// Serializes a model to the LP text format so a formulation can be
// inspected by eye or fed to other tools

use crate::domain::models::OptimizationProblem;
use crate::domain::value_objects::{ConstraintType, OptimizationType, VariableType};
use std::fmt::Write as _;
use std::path::Path;

/// Serialize the problem to LP format text.
pub fn to_lp_format(problem: &OptimizationProblem) -> String {
    let names: Vec<String> = problem
        .variable_names()
        .iter()
        .map(|n| sanitize(n))
        .collect();

    let mut out = String::new();

    if !problem.name.is_empty() {
        let _ = writeln!(out, "\\ Problem: {}", problem.name);
    }

    let sense = match problem.objective.optimization_type {
        OptimizationType::Minimize => "Minimize",
        OptimizationType::Maximize => "Maximize",
    };
    let _ = writeln!(out, "{}", sense);
    let _ = writeln!(
        out,
        " obj: {}",
        linear_expression(&problem.objective.coefficients, &names)
    );

    let _ = writeln!(out, "Subject To");
    for (i, constraint) in problem.constraints.iter().enumerate() {
        let name = if constraint.name.is_empty() {
            format!("c{}", i)
        } else {
            sanitize(&constraint.name)
        };
        let relation = match constraint.constraint_type {
            ConstraintType::LessThanOrEqual => "<=",
            ConstraintType::Equal => "=",
            ConstraintType::GreaterThanOrEqual => ">=",
        };
        let _ = writeln!(
            out,
            " {}: {} {} {}",
            name,
            linear_expression(&constraint.coefficients, &names),
            relation,
            constraint.bound
        );
    }

    // Only non-default bounds need spelling out; x >= 0 is the LP default
    let mut bounds = String::new();
    for (var, name) in problem.variables.iter().zip(names.iter()) {
        if var.variable_type == VariableType::Binary || var.has_default_bounds() {
            continue;
        }
        let line = match (var.lower_bound, var.upper_bound) {
            (l, None) if l == f64::NEG_INFINITY => format!(" {} free", name),
            (l, Some(u)) if l == f64::NEG_INFINITY => format!(" -infinity <= {} <= {}", name, u),
            (l, Some(u)) if l == 0.0 => format!(" {} <= {}", name, u),
            (l, None) => format!(" {} >= {}", name, l),
            (l, Some(u)) => format!(" {} <= {} <= {}", l, name, u),
        };
        let _ = writeln!(bounds, "{}", line);
    }
    if !bounds.is_empty() {
        let _ = writeln!(out, "Bounds");
        out.push_str(&bounds);
    }

    let generals: Vec<&str> = problem
        .variables
        .iter()
        .zip(names.iter())
        .filter(|(v, _)| v.variable_type == VariableType::Integer)
        .map(|(_, n)| n.as_str())
        .collect();
    if !generals.is_empty() {
        let _ = writeln!(out, "Generals");
        for name in generals {
            let _ = writeln!(out, " {}", name);
        }
    }

    let binaries: Vec<&str> = problem
        .variables
        .iter()
        .zip(names.iter())
        .filter(|(v, _)| v.variable_type == VariableType::Binary)
        .map(|(_, n)| n.as_str())
        .collect();
    if !binaries.is_empty() {
        let _ = writeln!(out, "Binaries");
        for name in binaries {
            let _ = writeln!(out, " {}", name);
        }
    }

    let _ = writeln!(out, "End");
    out
}

/// Write the problem in LP format to a file.
pub fn write_lp_file(problem: &OptimizationProblem, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, to_lp_format(problem))
}

fn linear_expression(coefficients: &[f64], names: &[String]) -> String {
    let mut expr = String::new();

    for (coeff, name) in coefficients.iter().zip(names.iter()) {
        if *coeff == 0.0 {
            continue;
        }
        if expr.is_empty() {
            if *coeff < 0.0 {
                expr.push_str("- ");
            }
        } else if *coeff < 0.0 {
            expr.push_str(" - ");
        } else {
            expr.push_str(" + ");
        }

        let magnitude = coeff.abs();
        if magnitude == 1.0 {
            expr.push_str(name);
        } else {
            let _ = write!(expr, "{} {}", magnitude, name);
        }
    }

    // An all-zero row still needs a term to stay parseable
    if expr.is_empty() {
        if let Some(name) = names.first() {
            let _ = write!(expr, "0 {}", name);
        }
    }

    expr
}

/// LP format names cannot contain whitespace or operators.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Variable;
    use crate::problems::diet;

    #[test]
    fn writes_the_diet_model_verbatim() {
        let text = to_lp_format(&diet::primal());

        assert!(text.contains("\\ Problem: diet"));
        assert!(text.contains("Minimize"));
        assert!(text.contains(" obj: 20 x1 + 10 x2 + 31 x3 + 11 x4 + 12 x5"));
        assert!(text.contains(" iron: 2 x1 + 3 x3 + x4 + 2 x5 >= 21"));
        assert!(text.contains(" calcium: x2 + 2 x3 + 2 x4 + x5 >= 12"));
        // Default x >= 0 bounds stay implicit
        assert!(!text.contains("Bounds"));
        assert!(text.trim_end().ends_with("End"));
    }

    #[test]
    fn writes_the_dual_with_less_than_rows() {
        let text = to_lp_format(&diet::dual());

        assert!(text.contains("Maximize"));
        assert!(text.contains(" obj: 21 pi + 12 pc"));
        assert!(text.contains(" c1: 2 pi <= 20"));
        assert!(text.contains(" c5: 2 pi + pc <= 12"));
    }

    #[test]
    fn non_default_bounds_and_integrality_sections() {
        use crate::domain::models::{Constraint, ObjectiveFunction, OptimizationProblem};
        use crate::domain::value_objects::OptimizationType;

        let problem = OptimizationProblem::new(
            ObjectiveFunction::new(OptimizationType::Minimize, vec![1.0, 1.0, 1.0])
                .with_names(vec!["f".into(), "n".into(), "b".into()]),
        )
        .with_variables(vec![
            Variable::free("f"),
            Variable::integer("n").with_bounds(0.0, Some(10.0)),
            Variable::binary("b"),
        ])
        .add_constraint(Constraint::equal(vec![1.0, 1.0, 1.0], 1.0).with_name("mix"));

        let text = to_lp_format(&problem);

        assert!(text.contains(" f free"));
        assert!(text.contains(" n <= 10"));
        assert!(text.contains("Generals\n n"));
        assert!(text.contains("Binaries\n b"));
    }

    #[test]
    fn sanitizes_names_with_spaces() {
        use crate::domain::models::{ObjectiveFunction, OptimizationProblem};
        use crate::domain::value_objects::OptimizationType;

        let problem = OptimizationProblem::new(
            ObjectiveFunction::new(OptimizationType::Minimize, vec![1.0])
                .with_names(vec!["Heathrow London".into()]),
        );

        let text = to_lp_format(&problem);
        assert!(text.contains("Heathrow_London"));
    }

    #[test]
    fn negative_coefficients_render_with_minus_signs() {
        let expr = linear_expression(
            &[-1.0, 2.0, -3.5],
            &["a".to_string(), "b".to_string(), "c".to_string()],
        );
        assert_eq!(expr, "- a + 2 b - 3.5 c");
    }
}
