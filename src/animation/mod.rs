pub mod builder;
pub mod ease;
pub mod group;
pub mod property;
pub mod script;
pub mod target;
