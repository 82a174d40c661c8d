use super::NodeConverter;
use crate::context::Context;
use crate::error::ConversionError;
use crate::factories::create_declaration;
use crate::options::EntryPointMode;
use crate::Result;
use dg_model::{ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode};
use std::path::Path;

const KINDS: &[SyntaxKind] = &[SyntaxKind::SourceFile];

/// Source extensions stripped from module names, longest first
const EXTENSIONS: &[&str] = &[".d.ts", ".tsx", ".ts", ".js"];

/// Converts a source file root
///
/// In [`EntryPointMode::Modules`] every file becomes a `Module` named after
/// its path; in [`EntryPointMode::File`] its declarations land directly in
/// the current scope.
pub struct SourceFileConverter;

impl NodeConverter for SourceFileConverter {
    fn name(&self) -> &'static str {
        "source_file"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        match ctx.options().mode {
            EntryPointMode::File => {
                convert_children(ctx, node)?;
                Ok(None)
            }
            EntryPointMode::Modules => {
                let path = ctx
                    .front_end()
                    .file_path(node.file())
                    .ok_or(ConversionError::UnknownFile(node.file()))?;
                let name = module_name(path);
                let Some(module) = create_declaration(ctx, node, ReflectionKind::Module, Some(&name))? else {
                    return Ok(None);
                };
                ctx.with_scope(module, |ctx| convert_children(ctx, node))?;
                Ok(Some(module))
            }
        }
    }
}

fn convert_children(ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<()> {
    for child in &node.children {
        ctx.convert_node(child)?;
    }
    Ok(())
}

/// Module name of a file: its path with `/` separators and no extension
pub fn module_name(path: &Path) -> String {
    let path = path
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    EXTENSIONS
        .iter()
        .find_map(|extension| path.strip_suffix(extension))
        .unwrap_or(&path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_strips_extension() {
        assert_eq!(module_name(Path::new("src/shapes.ts")), "src/shapes");
        assert_eq!(module_name(Path::new("lib/util/index.d.ts")), "lib/util/index");
        assert_eq!(module_name(Path::new("README")), "README");
    }
}
