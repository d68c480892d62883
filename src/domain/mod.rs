//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `nested.rs` — the enclosing/nested record pair and the walks that
//!   need their module-private fields.
//! - `models.rs` — report/output structs.
//! - `constants.rs` — the stable seed values for both records.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects.
//!
//! ## Visibility note
//! Field visibility in `nested.rs` is the point of this crate. `x` is
//! private to that module; `z` is `pub(crate)`. Moving code between
//! modules changes what it is allowed to read.

pub mod constants;
pub mod models;
pub mod nested;
