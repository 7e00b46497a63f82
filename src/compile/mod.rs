pub mod compiler;
pub mod graph;
