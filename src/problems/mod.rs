// Built-in example models

pub mod diet;
pub mod shortest_path;

pub use shortest_path::{Arc, Network, NetworkError};
