//! Diagnostic suppression
//!
//! A fixed set of schema-constraint rule identifiers produces systematic
//! false positives for documents written against this schema's extensibility
//! idioms: permissive any-element/any-attribute wildcards, and forward QName
//! references that resolve through the external schema-location strategy
//! rather than strict static resolution. Diagnostics carrying those codes
//! are removed after validation; every other diagnostic is kept untouched,
//! in its original relative order.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::diagnostics::Diagnostic;

/// Duplicate global component definitions, reported when the schema is
/// reached through more than one location
pub const SCH_PROPS_CORRECT_2: &str = "sch-props-correct.2";

/// All-group particle limits exceeded by extensible content models
pub const COS_ALL_LIMITED_1_2: &str = "cos-all-limited.1.2";

/// QName reference not statically resolvable
pub const SRC_RESOLVE: &str = "src-resolve";

/// QName reference pointing outside the imported namespaces
pub const SRC_RESOLVE_4_2: &str = "src-resolve.4.2";

/// Codes removed from the diagnostics of every validation call
///
/// Versioned policy table: extend here, never in control flow.
pub static SUPPRESSED_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        SCH_PROPS_CORRECT_2,
        COS_ALL_LIMITED_1_2,
        SRC_RESOLVE,
        SRC_RESOLVE_4_2,
    ])
});

/// Whether a rule identifier belongs to the suppression set
pub fn is_suppressed(code: &str) -> bool {
    SUPPRESSED_CODES.contains(code)
}

/// Remove suppressed diagnostics appended during the current call
///
/// `initial` is the collection length recorded before the parse; entries in
/// `[0, initial)` belong to other producers and are never inspected. The
/// removal decision is code membership only, so running this twice over the
/// same tail is a no-op the second time.
pub fn filter_new_diagnostics(diagnostics: &mut Vec<Diagnostic>, initial: usize) {
    if initial >= diagnostics.len() {
        return;
    }
    let appended = diagnostics.split_off(initial);
    diagnostics.extend(appended.into_iter().filter(|d| !is_suppressed(&d.code)));
}
