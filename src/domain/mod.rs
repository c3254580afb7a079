//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep payload, change-set and report structs in one place.
//! - Avoid cyclic imports between the gate services.
//! - Make changes to the built-in gate policy explicit and reviewable.
//!
//! ## Files
//! - `models.rs`: event payload, change set, gate policy and report structs.
//! - `constants.rs`: built-in guard paths, allow-lists and evidence vocabulary.
//! - `errors.rs`: typed failures raised by input resolution and configuration.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.

pub mod constants;
pub mod errors;
pub mod models;
