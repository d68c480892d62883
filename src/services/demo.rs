//! Assembles one report per visibility scope.
//!
//! This module sits outside `domain::nested`, so the private `x` fields
//! do not compile from here; the external walk can only reach the
//! `pub(crate)` `z` fields. That build-time rejection is the whole
//! "error handling" story for visibility violations.

use crate::domain::models::{FieldLine, ScopeReport};
use crate::domain::nested::{self, Inner, Outer};

pub fn inner_scope_report() -> ScopeReport {
    let outer = Outer::new();
    let inner = Inner::new(&outer);
    ScopeReport {
        scope: "inner".to_string(),
        lines: inner.display_values(),
    }
}

pub fn outer_scope_report() -> ScopeReport {
    ScopeReport {
        scope: "outer".to_string(),
        lines: nested::defining_scope_walk(),
    }
}

/// External walk: unrelated code bound to the same enclosing instance,
/// reading only the crate-visible fields.
pub fn external_scope_report() -> ScopeReport {
    let outer = Outer::new();
    let inner = Inner::new(&outer);
    ScopeReport {
        scope: "external".to_string(),
        lines: vec![
            FieldLine::new("Outer class protected z", outer.z),
            FieldLine::new("Inner class protected z", inner.z),
        ],
    }
}

pub fn all_reports() -> Vec<ScopeReport> {
    vec![
        inner_scope_report(),
        outer_scope_report(),
        external_scope_report(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_walk_reads_crate_visible_fields_only() {
        let report = external_scope_report();
        let rendered: Vec<String> = report.lines.iter().map(FieldLine::render).collect();
        assert_eq!(
            rendered,
            vec![
                "Outer class protected z = 30",
                "Inner class protected z = 85",
            ]
        );
    }

    #[test]
    fn all_reports_cover_every_scope_in_order() {
        let scopes: Vec<String> = all_reports().into_iter().map(|r| r.scope).collect();
        assert_eq!(scopes, vec!["inner", "outer", "external"]);
    }

    #[test]
    fn inner_scope_report_carries_four_lines() {
        let report = inner_scope_report();
        assert_eq!(report.scope, "inner");
        let values: Vec<i32> = report.lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![20, 10, 85, 30]);
    }
}
