//! Conversion pass orchestration

use crate::context::Context;
use crate::converters::ConverterRegistry;
use crate::events::{EventArgs, EventBus, EventKind};
use crate::options::ConverterOptions;
use crate::registry::IdentityRegistry;
use crate::Result;
use dg_model::ProjectReflection;
use dg_syntax::FrontEnd;
use std::rc::Rc;
use tracing::{debug_span, info};

/// Output of one conversion pass
#[derive(Debug)]
pub struct Conversion {
    /// The reflection graph, references still pending
    pub project: ProjectReflection,
    /// Identities handed out during the pass
    pub registry: IdentityRegistry,
}

/// Walks every source file of a front end and builds the reflection graph
///
/// The converter table and event listeners outlive a single pass; the
/// identity registry and scope state do not.
#[derive(Debug)]
pub struct Converter {
    converters: Rc<ConverterRegistry>,
    events: EventBus,
    options: ConverterOptions,
}

impl Converter {
    /// Converter with the built-in node converters
    #[must_use]
    pub fn new(options: ConverterOptions) -> Self {
        Self::with_registry(options, ConverterRegistry::with_defaults())
    }

    /// Converter with a custom converter table
    #[must_use]
    pub fn with_registry(options: ConverterOptions, converters: ConverterRegistry) -> Self {
        Self {
            converters: Rc::new(converters),
            events: EventBus::new(),
            options,
        }
    }

    /// Options of the passes this converter runs
    #[must_use]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Registers a listener for a creation event
    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(EventArgs<'_>) + 'static) {
        self.events.on(kind, listener);
    }

    /// Runs one conversion pass over `front_end`
    ///
    /// # Errors
    ///
    /// Any [`crate::ConversionError`] raised by a factory aborts the pass.
    pub fn convert(&mut self, front_end: &dyn FrontEnd) -> Result<Conversion> {
        let project = ProjectReflection::new(self.options.project_name.clone());
        let events = std::mem::take(&mut self.events);
        let mut ctx = Context::new(
            front_end,
            project,
            events,
            Rc::clone(&self.converters),
            self.options.clone(),
        );

        let walked = walk(&mut ctx, front_end);
        let (project, registry, events) = ctx.into_parts();
        self.events = events;
        walked?;

        info!(
            reflections = project.len(),
            symbols = registry.allocated_ids(),
            "conversion finished"
        );
        Ok(Conversion { project, registry })
    }
}

fn walk(ctx: &mut Context<'_>, front_end: &dyn FrontEnd) -> Result<()> {
    for file in front_end.source_files() {
        let _span = debug_span!("convert_file", path = %file.path.display()).entered();
        ctx.convert_node(&file.root)?;
    }
    Ok(())
}
