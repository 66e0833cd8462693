// Solver adapters module

#[cfg(feature = "coin-cbc")]
pub mod coin_cbc_solver;
pub mod factory;
pub mod highs_solver;

#[cfg(feature = "coin-cbc")]
pub use coin_cbc_solver::CoinCbcSolver;
pub use factory::SolverFactory;
pub use highs_solver::HighsSolver;
