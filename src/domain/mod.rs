// Domain module: problem data model and solver contract

pub mod duality;
pub mod models;
pub mod solver_service;
pub mod value_objects;

pub use duality::dual_of;
pub use models::*;
pub use solver_service::*;
pub use value_objects::*;
