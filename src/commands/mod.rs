//! Command handler layer.
//!
//! ## Principles
//! - Match CLI inputs here.
//! - Delegate walk assembly to `services/demo` and printing to
//!   `services/output`.
//! - Keep the output schema stable.

pub mod scopes;

pub use scopes::handle_scope_commands;
