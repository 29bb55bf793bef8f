//! The import seam.
//!
//! A [`ClassRegistry`](crate::ClassRegistry) never loads modules itself; it
//! delegates to a [`ModuleLoader`] injected at construction. The loader turns
//! a module path into a loaded [`Module`], and the registry then asks the
//! module for the export matching the registered name.
//!
//! Loading may do arbitrary work (read files, link a plugin, pull nested
//! modules in) and may fail for reasons the registry cannot recover from, so
//! loader errors pass through lookups with their original nature intact.

use crate::error::ImportError;

/// A loaded module: a set of named class exports.
pub trait Module<C> {
    /// Look up the export with exactly this name.
    fn export(&self, name: &str) -> Option<C>;
}

/// Loads modules by path on behalf of the registry.
///
/// Implementations decide what a module path means: a file, a plugin id, a
/// table of statically linked component sets. `load` is called at most once
/// per deferred binding; the resolved class is cached by the registry, never
/// the module.
pub trait ModuleLoader<C> {
    /// Load the module at `module_path`.
    ///
    /// Errors are surfaced to the registry caller unreclassified, as
    /// [`FactoryError::Import`](crate::FactoryError::Import).
    fn load(&self, module_path: &str) -> Result<Box<dyn Module<C>>, ImportError>;
}

impl<C, F> Module<C> for F
where
    F: Fn(&str) -> Option<C>,
{
    fn export(&self, name: &str) -> Option<C> {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_as_module() {
        let module = |name: &str| (name == "Button").then_some("button-class");
        assert_eq!(Module::export(&module, "Button"), Some("button-class"));
        assert_eq!(Module::export(&module, "Slider"), None);
    }
}
