pub mod backend;
pub mod brush;
pub mod descriptor;
