//! Errors that abort a conversion pass

use dg_model::ReflectionKind;
use dg_span::FileId;

/// Errors raised while converting syntax trees into reflections
///
/// Every variant aborts the whole pass. Conditions that degrade gracefully
/// (external references, unsupported node shapes) are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A factory was invoked while the current scope had the wrong kind
    #[error("{factory} factory expected a {expected} scope, found {found}")]
    ScopeMismatch {
        /// Factory that detected the violation
        factory: &'static str,
        /// Scope kinds the factory accepts
        expected: &'static str,
        /// Kind of the scope it was given
        found: ReflectionKind,
    },

    /// A relative module specifier did not resolve to any file
    #[error("cannot resolve module `{specifier}` imported from {from}")]
    UnresolvedModule {
        /// Specifier as written
        specifier: String,
        /// Importing file
        from: String,
    },

    /// The front end handed out a file it cannot describe
    #[error("unknown file {0}")]
    UnknownFile(FileId),
}

/// Result type of the conversion engine
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;
