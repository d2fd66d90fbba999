//! Infrastructure layer - hardware implementations of the core ports.

pub mod drivers;
pub mod tasks;
