//! Reference resolution for converted projects
//!
//! Runs once after conversion. Every [`ReferenceType`] in the project is
//! looked up by symbol id: a registered reflection makes it internal, anything
//! else makes it external. External references are not errors; renderers
//! print them as plain names.
//!
//! # Usage
//!
//! ```rust,ignore
//! let report = dg_resolve::resolve_references(&mut conversion.project, &conversion.registry);
//! for name in &report.external_names {
//!     println!("not documented here: {name}");
//! }
//! ```

use dg_model::{
    ProjectReflection, ReferenceTarget, ReferenceType, ReflectionLookup, TypeVisitorMut,
};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// Outcome of a resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// References linked to a reflection of the project
    pub internal: usize,
    /// References pointing outside the project
    pub external: usize,
    /// Distinct names of external references, in first-seen order
    pub external_names: IndexSet<String>,
}

impl ResolutionReport {
    /// Total number of references classified
    #[must_use]
    pub fn total(&self) -> usize {
        self.internal + self.external
    }
}

/// Links every reference of `project` through `lookup`
///
/// Already classified references are classified again, so running the pass
/// twice yields the same graph and report.
pub fn resolve_references(
    project: &mut ProjectReflection,
    lookup: &impl ReflectionLookup,
) -> ResolutionReport {
    let mut resolver = ReferenceResolver {
        lookup,
        report: ResolutionReport::default(),
    };
    project.walk_types_mut(&mut resolver);

    let report = resolver.report;
    debug!(
        internal = report.internal,
        external = report.external,
        distinct_external = report.external_names.len(),
        "references resolved"
    );
    report
}

struct ReferenceResolver<'a, L> {
    lookup: &'a L,
    report: ResolutionReport,
}

impl<L: ReflectionLookup> TypeVisitorMut for ReferenceResolver<'_, L> {
    fn visit_reference(&mut self, reference: &mut ReferenceType) {
        let target = reference
            .symbol_id
            .and_then(|symbol_id| self.lookup.reflection_for(symbol_id));

        match target {
            Some(reflection) => {
                reference.target = ReferenceTarget::Internal(reflection);
                self.report.internal += 1;
            }
            None => {
                trace!(name = %reference.name, symbol = ?reference.symbol_id, "external reference");
                reference.target = ReferenceTarget::External;
                self.report.external += 1;
                self.report.external_names.insert(reference.name.clone());
            }
        }
    }
}
