pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod start;

pub use start::{EXIT_FAILURE, run, run_with, start};
