// Application module: solve orchestration and result presentation

pub mod lp_writer;
pub mod report;
pub mod service;

pub use lp_writer::{to_lp_format, write_lp_file};
pub use report::{ConstraintReport, SolutionReport, VariableReport};
pub use service::OptimizationService;
