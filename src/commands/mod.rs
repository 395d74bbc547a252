//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the loaded catalog.

pub mod compare;
pub mod list;
pub mod shell;
pub mod show;

// Re-export execute functions for convenience
pub use compare::execute as compare;
pub use list::execute as list;
pub use shell::execute as shell;
pub use show::execute as show;
