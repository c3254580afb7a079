//! Service layer containing the gate's decision logic and side-effect helpers.
//!
//! ## Service map
//! - `sections.rs`: whitespace normalization + `##` section splitting.
//! - `placeholder.rs`: template/placeholder detection and content rules.
//! - `evidence.rs`: required-section validation and the transitional fallback.
//! - `scope.rs`: protected-path classification and the bootstrap exemption.
//! - `event.rs`: CI event payload loading.
//! - `git_diff.rs`: changed-file listings from `git diff`.
//! - `tools.rs`: optional tool lookup on `PATH`.
//! - `scanners.rs`: secret scan + dependency audit collaborators.
//! - `config.rs`: operator gate policy loading.
//! - `gate.rs`: orchestration and result aggregation.
//! - `output.rs`: console rendering of the gate report.
//!
//! ## Conventions
//! - Decision logic is pure; processes and files are touched only in
//!   `event.rs`, `git_diff.rs`, `scanners.rs` and `config.rs`.
//! - Input problems degrade to warnings; policy violations fail the gate.

pub mod config;
pub mod event;
pub mod evidence;
pub mod gate;
pub mod git_diff;
pub mod output;
pub mod placeholder;
pub mod scanners;
pub mod scope;
pub mod sections;
pub mod tools;
