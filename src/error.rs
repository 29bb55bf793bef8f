//! Error types for the class factory.
//!
//! Every failure is either a caller configuration mistake or a mismatch
//! between registration metadata and the actual module contents. Neither is
//! retried: the offending call fails with an error naming the symbol (and
//! module path, where relevant) and the registry stays usable for every
//! other name.

use thiserror::Error;

/// An error produced by a module loader while loading a module.
///
/// Loaders report failures in whatever error type suits them; the registry
/// passes them through [`FactoryError::Import`] without reclassifying.
pub type ImportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by [`ClassRegistry`](crate::ClassRegistry) operations.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// `register` was called with neither a class nor a module path.
    #[error("registration of '{name}' needs either a class or a module path")]
    Configuration {
        /// The name that was being registered.
        name: String,
    },

    /// The requested name was never registered.
    #[error("unknown class '{name}'")]
    UnknownSymbol {
        /// The name that was requested.
        name: String,
    },

    /// The module loaded, but it has no export with the expected name.
    #[error("no class named '{name}' in module '{module_path}'")]
    SymbolNotFound {
        /// The name that was requested.
        name: String,
        /// The module that was expected to export it.
        module_path: String,
    },

    /// The module loader failed. The loader's error is surfaced as-is.
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl FactoryError {
    /// Check if this is a loader failure passed through unreclassified.
    pub fn is_import(&self) -> bool {
        matches!(self, FactoryError::Import(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_display() {
        let err = FactoryError::Configuration {
            name: "Widget".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "registration of 'Widget' needs either a class or a module path"
        );
    }

    #[test]
    fn unknown_symbol_display() {
        let err = FactoryError::UnknownSymbol {
            name: "NeverRegistered".to_string(),
        };
        assert_eq!(format!("{err}"), "unknown class 'NeverRegistered'");
    }

    #[test]
    fn symbol_not_found_display() {
        let err = FactoryError::SymbolNotFound {
            name: "X".to_string(),
            module_path: "ui.widgets".to_string(),
        };
        assert_eq!(format!("{err}"), "no class named 'X' in module 'ui.widgets'");
    }

    #[test]
    fn import_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "module file missing");
        let err: FactoryError = ImportError::from(io).into();
        assert!(err.is_import());
        // transparent: the loader's own message, untouched
        assert_eq!(format!("{err}"), "module file missing");
    }
}
