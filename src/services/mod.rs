//! Service layer: walk assembly and output helpers.
//!
//! ## Service map
//! - `demo.rs` — builds one `ScopeReport` per visibility scope. The
//!   external walk lives here so the compiler, not a runtime check,
//!   keeps it away from the private fields.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers; printing stays in `output.rs`.
//! - Keep command handlers thin; delegate here.

pub mod demo;
pub mod output;
