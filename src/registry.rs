//! ClassRegistry - lazy name-to-class registry.
//!
//! This module provides [`ClassRegistry`], the central mapping from symbolic
//! class names to class objects. Classes register either directly (the class
//! object is already in hand) or by deferred reference (a module path),
//! letting a component library expose hundreds of names without loading every
//! implementing module at startup.
//!
//! # Storage Model
//!
//! - **Bindings**: every entry is a [`Binding`] stored in a single map by
//!   name. Direct registrations start resolved; deferred ones hold only the
//!   module path.
//! - **Resolution**: the first `get` of a deferred name loads its module
//!   through the injected [`ModuleLoader`], picks the export matching the
//!   name, and writes the class back into the binding. The write is
//!   permanent; no binding is ever re-resolved.
//!
//! # Thread Safety
//!
//! `ClassRegistry` is **not thread-safe** by design. The expected pattern is
//! single-threaded: bulk registration at startup, lookups afterwards. `get`
//! takes `&mut self` for the cache write; if shared access is needed, wrap
//! the registry in appropriate synchronization (e.g. `Arc<Mutex<_>>`).
//!
//! # Example
//!
//! ```ignore
//! use class_factory::ClassRegistry;
//!
//! let mut registry = ClassRegistry::new(loader);
//!
//! registry.register_module("Button", "ui.widgets");
//! registry.register_class("Spacer", spacer_class);
//!
//! // First lookup loads ui.widgets; later lookups hit the cache.
//! let button = registry.get("Button")?;
//! ```

use rustc_hash::FxHashMap;

use crate::binding::Binding;
use crate::error::FactoryError;
use crate::loader::ModuleLoader;

/// Lazy name-to-class registry.
///
/// Keys are unique; re-registering a name silently replaces its binding
/// (last registration wins). Entries are never removed.
pub struct ClassRegistry<C> {
    /// Bindings stored by class name.
    classes: FxHashMap<String, Binding<C>>,

    /// Resolves module paths to loaded modules on first use.
    loader: Box<dyn ModuleLoader<C>>,
}

impl<C: Clone> ClassRegistry<C> {
    /// Create an empty registry backed by the given module loader.
    pub fn new(loader: impl ModuleLoader<C> + 'static) -> Self {
        Self {
            classes: FxHashMap::default(),
            loader: Box::new(loader),
        }
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a name referring to a class object or a class definition in
    /// a module.
    ///
    /// At least one of `class` and `module_path` must be given. When both
    /// are, the class takes precedence and the module path is never
    /// consulted. Registering does not load anything.
    ///
    /// Returns [`FactoryError::Configuration`] when neither is given.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        class: Option<C>,
        module_path: Option<&str>,
    ) -> Result<(), FactoryError> {
        let name = name.into();
        let binding = match (class, module_path) {
            (Some(class), _) => Binding::resolved(class),
            (None, Some(module_path)) => Binding::deferred(module_path),
            (None, None) => return Err(FactoryError::Configuration { name }),
        };
        self.classes.insert(name, binding);
        Ok(())
    }

    /// Register an already-loaded class object under `name`.
    pub fn register_class(&mut self, name: impl Into<String>, class: C) {
        self.classes.insert(name.into(), Binding::resolved(class));
    }

    /// Register `name` as an export of the module at `module_path`, to be
    /// loaded on first lookup.
    pub fn register_module(&mut self, name: impl Into<String>, module_path: impl Into<String>) {
        self.classes.insert(name.into(), Binding::deferred(module_path));
    }

    /// Register a generated feed of `(name, module_path)` pairs.
    ///
    /// This is the bulk-registration path run once at startup. Every pair
    /// becomes a deferred binding; the total registry size is reported once
    /// through the logging sink. Returns the number of pairs consumed.
    pub fn register_feed<I>(&mut self, feed: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut consumed = 0;
        for (name, module_path) in feed {
            self.classes.insert(name, Binding::deferred(module_path));
            consumed += 1;
        }
        tracing::info!(symbols = self.classes.len(), "class symbols registered");
        consumed
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get the class registered under `name`, resolving it if necessary.
    ///
    /// Resolved bindings return their cached class with no loading. A
    /// deferred binding triggers one load of its module; the export named
    /// exactly `name` is cached into the binding and returned. Repeated
    /// calls after a successful resolution return the identical cached
    /// class with no further loads.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::UnknownSymbol`] when `name` was never registered.
    /// - [`FactoryError::Import`] when the loader fails; the loader's error
    ///   is passed through as-is.
    /// - [`FactoryError::SymbolNotFound`] when the module loads but has no
    ///   export named `name`.
    ///
    /// Any failure leaves the registry valid and usable for other names.
    pub fn get(&mut self, name: &str) -> Result<C, FactoryError> {
        let module_path = match self.classes.get(name) {
            None => {
                return Err(FactoryError::UnknownSymbol {
                    name: name.to_string(),
                });
            }
            Some(Binding::Resolved(class)) => return Ok(class.clone()),
            Some(Binding::Deferred { module_path }) => module_path.clone(),
        };

        let module = self.loader.load(&module_path)?;
        let class = module
            .export(name)
            .ok_or_else(|| FactoryError::SymbolNotFound {
                name: name.to_string(),
                module_path: module_path.clone(),
            })?;

        // Permanent cache write: Deferred -> Resolved, exactly once.
        self.classes
            .insert(name.to_string(), Binding::resolved(class.clone()));
        Ok(class)
    }

    // ==========================================================================
    // Diagnostics
    // ==========================================================================

    /// Get the number of registered names.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Check if a name is registered (resolved or not).
    pub fn is_registered(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Check if a name has already been resolved to a class.
    ///
    /// Returns `false` for unregistered names and for deferred bindings
    /// that have not been looked up yet.
    pub fn is_resolved(&self, name: &str) -> bool {
        self.classes.get(name).is_some_and(Binding::is_resolved)
    }

    /// Iterate over all registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

impl<C> std::fmt::Debug for ClassRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("classes", &self.classes.len())
            .finish_non_exhaustive()
    }
}
