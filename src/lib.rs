// Domain layer: problem data model, solver contract, duality
pub mod domain;

// Application layer: solve orchestration, reporting, LP export
pub mod application;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Built-in example models (diet, shortest path)
pub mod problems;

// Re-export commonly used types
pub use domain::{
    dual_of, Constraint, ConstraintType, ObjectiveFunction, OptimizationProblem, OptimizationType,
    Solution, SolutionStatus, SolverBackend, SolverConfig, SolverError, SolverService, Variable,
    VariableType,
};

pub use application::{to_lp_format, write_lp_file, OptimizationService, SolutionReport};

#[cfg(feature = "coin-cbc")]
pub use solver::CoinCbcSolver;
pub use solver::{HighsSolver, SolverFactory};
