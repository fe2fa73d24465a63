//! Check workflow orchestration.

pub mod workflow;

pub use workflow::{CheckRunner, RunOptions};
