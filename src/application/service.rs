// Application service: validate, pick a backend, solve, log progress

use crate::domain::{
    models::{OptimizationProblem, Solution},
    solver_service::{Result, SolverService},
    value_objects::SolverBackend,
};
use crate::solver::SolverFactory;
use std::sync::Arc;
use tracing::info;

/// Orchestrates a single solve: backend selection, validation, solving.
pub struct OptimizationService {
    solver: Arc<dyn SolverService>,
}

impl OptimizationService {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self { solver }
    }

    pub fn with_backend(backend: SolverBackend) -> Result<Self> {
        Ok(Self::new(SolverFactory::create_from_backend(backend)?))
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    pub fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
        info!(
            problem = %problem.name,
            solver = self.solver.name(),
            variables = problem.num_variables(),
            constraints = problem.constraints.len(),
            "solving"
        );

        let solution = self.solver.solve(problem)?;

        info!(status = %solution.status, objective = ?solution.objective_value, "solve finished");
        Ok(solution)
    }
}

impl Default for OptimizationService {
    fn default() -> Self {
        Self::new(SolverFactory::default_solver())
    }
}
