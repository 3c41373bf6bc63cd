//! Reference game implementations built on the framework.

pub mod rps;
