//! Wrapped tool lookup and invocation

pub mod tool;

pub use tool::{child_running, ScaffoldTool};
