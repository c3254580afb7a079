//! Command handler layer.
//!
//! The gate has a single entry point; `gate.rs` wires CLI options, configuration
//! and the system scanners into the service layer and prints the report.

pub mod gate;

pub use gate::handle_gate;
