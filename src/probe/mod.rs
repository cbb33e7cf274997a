// src/probe/mod.rs
pub mod endpoint;
pub mod runner;

// Re-export public components
pub use endpoint::Endpoint;
pub use runner::{ProbeReport, ProbeRunner};
