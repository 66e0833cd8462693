// Shortest path as a linear program, in both of its classic guises:
// node potentials (the primal here) and arc flows (its dual). The two
// optimal objective values both equal the length of the shortest path.

use crate::domain::models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable};
use crate::domain::value_objects::OptimizationType;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Line {0}: expected 'source,dest,length'")]
    MalformedLine(usize),

    #[error("Line {0}: arc length is not a number")]
    BadLength(usize),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Network has no arcs")]
    Empty,
}

/// Directed arc with a nonnegative length
#[derive(Debug, Clone)]
pub struct Arc {
    pub source: String,
    pub dest: String,
    pub length: f64,
}

impl Arc {
    pub fn new(source: impl Into<String>, dest: impl Into<String>, length: f64) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            length,
        }
    }
}

/// Directed network; nodes are collected from the arcs in first-seen order
#[derive(Debug, Clone)]
pub struct Network {
    pub nodes: Vec<String>,
    pub arcs: Vec<Arc>,
}

impl Network {
    pub fn new(arcs: Vec<Arc>) -> Result<Self, NetworkError> {
        if arcs.is_empty() {
            return Err(NetworkError::Empty);
        }

        let mut nodes = Vec::new();
        let mut seen = HashMap::new();
        for arc in &arcs {
            for node in [&arc.source, &arc.dest] {
                if !seen.contains_key(node.as_str()) {
                    seen.insert(node.clone(), nodes.len());
                    nodes.push(node.clone());
                }
            }
        }

        Ok(Self { nodes, arcs })
    }

    /// Parse a network from text with one `source,dest,length` arc per
    /// line; blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, NetworkError> {
        let mut arcs = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != 3 || fields[0].is_empty() || fields[1].is_empty() {
                return Err(NetworkError::MalformedLine(i + 1));
            }
            let length: f64 = fields[2]
                .parse()
                .map_err(|_| NetworkError::BadLength(i + 1))?;

            arcs.push(Arc::new(fields[0], fields[1], length));
        }

        Self::new(arcs)
    }

    /// A small flight network from Honolulu to Heathrow London.
    pub fn sample() -> Self {
        Self::new(vec![
            Arc::new("Honolulu", "Chicago", 8.0),
            Arc::new("Honolulu", "San Francisco", 5.0),
            Arc::new("Honolulu", "Los Angeles", 6.0),
            Arc::new("San Francisco", "Chicago", 3.0),
            Arc::new("San Francisco", "Denver", 2.0),
            Arc::new("Los Angeles", "Chicago", 5.0),
            Arc::new("Los Angeles", "Dallas", 4.0),
            Arc::new("Denver", "Chicago", 2.0),
            Arc::new("Denver", "Dallas", 2.0),
            Arc::new("Chicago", "New York", 3.0),
            Arc::new("Chicago", "Atlanta", 2.0),
            Arc::new("Dallas", "New York", 5.0),
            Arc::new("Dallas", "Atlanta", 3.0),
            Arc::new("New York", "Heathrow London", 8.0),
            Arc::new("Atlanta", "Heathrow London", 9.0),
        ])
        .expect("sample network is non-empty")
    }

    fn node_index(&self, name: &str) -> Result<usize, NetworkError> {
        self.nodes
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| NetworkError::UnknownNode(name.to_string()))
    }

    /// Node-potential model: maximize the destination potential minus the
    /// origin potential subject to `d_dest - d_source <= length` per arc.
    pub fn potentials_model(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<OptimizationProblem, NetworkError> {
        let origin_idx = self.node_index(origin)?;
        let dest_idx = self.node_index(destination)?;

        let mut objective = vec![0.0; self.nodes.len()];
        objective[origin_idx] = -1.0;
        objective[dest_idx] = 1.0;

        let names: Vec<String> = self
            .nodes
            .iter()
            .map(|n| format!("distance.{}", n))
            .collect();

        let mut problem = OptimizationProblem::new(
            ObjectiveFunction::new(OptimizationType::Maximize, objective)
                .with_names(names.clone()),
        )
        .with_name("shortest-path")
        .with_description(format!("Shortest path from {} to {}", origin, destination))
        .with_variables(names.iter().map(|n| Variable::continuous(n.clone())).collect());

        for arc in &self.arcs {
            let source_idx = self.node_index(&arc.source)?;
            let arc_dest_idx = self.node_index(&arc.dest)?;
            let mut coefficients = vec![0.0; self.nodes.len()];
            coefficients[arc_dest_idx] += 1.0;
            coefficients[source_idx] -= 1.0;
            problem = problem.add_constraint(
                Constraint::less_than_or_equal(coefficients, arc.length)
                    .with_name(format!("distance_con.{}.{}", arc.source, arc.dest)),
            );
        }

        Ok(problem)
    }

    /// Arc-flow model: route one unit of flow from origin to destination
    /// at minimum total length, each arc carrying at most one unit.
    pub fn flow_model(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<OptimizationProblem, NetworkError> {
        let origin_idx = self.node_index(origin)?;
        let dest_idx = self.node_index(destination)?;

        let names: Vec<String> = self
            .arcs
            .iter()
            .map(|a| format!("arc_traversed.{}.{}", a.source, a.dest))
            .collect();
        let lengths: Vec<f64> = self.arcs.iter().map(|a| a.length).collect();

        let mut problem = OptimizationProblem::new(
            ObjectiveFunction::new(OptimizationType::Minimize, lengths).with_names(names.clone()),
        )
        .with_name("shortest-path-flow")
        .with_description(format!(
            "Unit-flow dual of the shortest path from {} to {}",
            origin, destination
        ))
        .with_variables(
            names
                .iter()
                .map(|n| Variable::continuous(n.clone()).with_bounds(0.0, Some(1.0)))
                .collect(),
        );

        for (node_idx, node) in self.nodes.iter().enumerate() {
            let mut coefficients = vec![0.0; self.arcs.len()];
            for (arc_idx, arc) in self.arcs.iter().enumerate() {
                if arc.dest == *node {
                    coefficients[arc_idx] += 1.0;
                }
                if arc.source == *node {
                    coefficients[arc_idx] -= 1.0;
                }
            }
            let rhs = if node_idx == origin_idx {
                -1.0
            } else if node_idx == dest_idx {
                1.0
            } else {
                0.0
            };
            problem = problem.add_constraint(
                Constraint::equal(coefficients, rhs).with_name(format!("flow_balance.{}", node)),
            );
        }

        Ok(problem)
    }
}
