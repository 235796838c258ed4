pub mod adjacency;
pub mod feasibility;
pub mod matcher;
pub(crate) mod visited;
