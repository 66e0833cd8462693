use crate::domain::{
    solver_service::{Result, SolverService},
    value_objects::SolverBackend,
};
use crate::solver::HighsSolver;
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver based on the problem configuration
    pub fn create_solver(
        problem: &crate::domain::OptimizationProblem,
    ) -> Result<Arc<dyn SolverService>> {
        Self::create_from_backend(problem.solver_config.backend)
    }

    /// Create a solver for a specific backend
    pub fn create_from_backend(backend: SolverBackend) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Auto | SolverBackend::Highs => Ok(Arc::new(HighsSolver::new())),
            #[cfg(feature = "coin-cbc")]
            SolverBackend::CoinCbc => Ok(Arc::new(crate::solver::CoinCbcSolver::new())),
            #[cfg(not(feature = "coin-cbc"))]
            SolverBackend::CoinCbc => Err(crate::domain::SolverError::SolverNotAvailable(
                "COIN-OR CBC support is not compiled in (enable the 'coin-cbc' feature)"
                    .to_string(),
            )),
        }
    }

    /// Get the default solver (HiGHS)
    pub fn default_solver() -> Arc<dyn SolverService> {
        Arc::new(HighsSolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_to_highs() {
        let solver = SolverFactory::create_from_backend(SolverBackend::Auto).unwrap();
        assert_eq!(solver.name(), "HiGHS");
    }

    #[cfg(not(feature = "coin-cbc"))]
    #[test]
    fn cbc_is_unavailable_without_the_feature() {
        use crate::domain::SolverError;

        let err = SolverFactory::create_from_backend(SolverBackend::CoinCbc).unwrap_err();
        assert!(matches!(err, SolverError::SolverNotAvailable(_)));
    }
}
