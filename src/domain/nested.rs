//! The enclosing/nested record pair.
//!
//! `x` is private to this module and `z` is `pub(crate)`, mirroring the
//! private/protected split of the original lab. `Inner` shadows both
//! names with its own storage and keeps an explicit reference to its
//! enclosing `Outer` so the shadowed names stay distinguishable.
//!
//! The defining-scope walk lives here on purpose: only code in this
//! module may read `x`.

use crate::domain::constants::{INNER_X, INNER_Z, OUTER_X, OUTER_Z};
use crate::domain::models::FieldLine;

#[derive(Debug)]
pub struct Outer {
    x: i32,
    pub(crate) z: i32,
}

impl Outer {
    pub fn new() -> Self {
        Self {
            x: OUTER_X,
            z: OUTER_Z,
        }
    }
}

impl Default for Outer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Inner<'a> {
    x: i32,
    pub(crate) z: i32,
    enclosing: &'a Outer,
}

impl<'a> Inner<'a> {
    /// The enclosing record is a non-owning back-reference, used only to
    /// resolve the shadowed names.
    pub fn new(enclosing: &'a Outer) -> Self {
        Self {
            x: INNER_X,
            z: INNER_Z,
            enclosing,
        }
    }

    /// Same-scope walk: own fields first, then the enclosing record's
    /// shadowed fields through the back-reference.
    pub fn display_values(&self) -> Vec<FieldLine> {
        vec![
            FieldLine::new("Inner class x", self.x),
            FieldLine::new("Outer class x", self.enclosing.x),
            FieldLine::new("Inner class z", self.z),
            FieldLine::new("Outer class z", self.enclosing.z),
        ]
    }
}

/// Defining-scope walk over the private `x` fields.
///
/// The nested record is deliberately bound to a second, freshly built
/// enclosing record rather than `outer` — the original lab did the same,
/// and the printed values do not depend on which enclosing record backs
/// `inner` because the nested `x` is independent storage.
pub fn defining_scope_walk() -> Vec<FieldLine> {
    let outer = Outer::new();
    let detached = Outer::new();
    let inner = Inner::new(&detached);
    vec![
        FieldLine::new("Outer class x", outer.x),
        FieldLine::new("Inner class x", inner.x),
    ]
}
