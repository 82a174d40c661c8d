use crate::context::Context;
use crate::error::ConversionError;
use crate::Result;
use dg_model::ReferenceType;
use dg_span::FileId;
use dg_syntax::SymbolHandle;
use dg_vfs::is_relative_specifier;
use tracing::trace;

/// Creates a reference to `symbol`
///
/// The name is the checker's rendering of the symbol. With `include_parent`
/// the parent's rendering is prepended, `Parent.name`, to tell apart members
/// that share a local name.
pub fn create_reference_type(
    ctx: &mut Context<'_>,
    symbol: SymbolHandle,
    include_parent: bool,
) -> ReferenceType {
    let front_end = ctx.front_end();
    let id = ctx.registry.id_for(symbol);
    let mut name = front_end.symbol_to_string(symbol);

    if include_parent {
        if let Some(parent) = front_end.symbol_parent(symbol) {
            name = format!("{}.{name}", front_end.symbol_to_string(parent));
        }
    }

    ReferenceType::new(name, Some(id))
}

/// Creates a reference for a type-only cross-module reference,
/// `import("specifier").qualifier`
///
/// `file` is the importing file and `resolved` the symbol the checker already
/// bound the reference to, if any.
///
/// # Errors
///
/// [`ConversionError::UnresolvedModule`] when a relative specifier does not
/// resolve to any file. Unresolved ambient specifiers are not an error: the
/// reference keeps only the id of the pre-resolved symbol.
pub fn create_import_reference_type(
    ctx: &mut Context<'_>,
    file: FileId,
    specifier: &str,
    qualifier: Option<&str>,
    resolved: Option<SymbolHandle>,
) -> Result<ReferenceType> {
    let front_end = ctx.front_end();
    let name = qualifier.unwrap_or_default();

    let Some(module) = front_end.resolve_module(file, specifier) else {
        if is_relative_specifier(specifier) {
            let from = front_end
                .file_path(file)
                .ok_or(ConversionError::UnknownFile(file))?
                .display()
                .to_string();
            return Err(ConversionError::UnresolvedModule {
                specifier: specifier.to_string(),
                from,
            });
        }
        trace!(specifier, "ambient module not found, keeping pre-resolved symbol");
        let symbol_id = resolved.map(|symbol| ctx.registry.id_for(symbol));
        return Ok(ReferenceType::new(name, symbol_id));
    };

    if let Some(symbol) = resolved {
        if front_end.symbol_file(symbol) == Some(module) {
            return Ok(create_reference_type(ctx, symbol, false));
        }
    }

    let symbol_id = front_end
        .module_export(module, name)
        .map(|symbol| ctx.registry.id_for(symbol));
    Ok(ReferenceType::new(name, symbol_id))
}
