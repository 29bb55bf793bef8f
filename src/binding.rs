//! Registry entries.
//!
//! A [`Binding`] ties a registered name to either a concrete class object or
//! a deferred module locator. Deferred bindings are resolved at most once;
//! once resolved, a binding never goes back.

/// One entry in the registry: a class, or the place to find one.
///
/// The two states mirror the registration forms: direct registration starts
/// a binding in `Resolved`, registration by module path starts it in
/// `Deferred`. The `Deferred -> Resolved` transition happens exactly once,
/// on the first successful lookup, and `Resolved` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding<C> {
    /// The class object itself. Terminal state.
    Resolved(C),
    /// A reference to the module expected to export the class.
    Deferred {
        /// Importable location of the defining module.
        module_path: String,
    },
}

impl<C> Binding<C> {
    /// Create a binding already holding its class.
    pub fn resolved(class: C) -> Self {
        Binding::Resolved(class)
    }

    /// Create a binding that resolves through a module on first use.
    pub fn deferred(module_path: impl Into<String>) -> Self {
        Binding::Deferred {
            module_path: module_path.into(),
        }
    }

    /// Check whether this binding has been resolved to a class.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Binding::Resolved(_))
    }

    /// The module path, for bindings still waiting on one.
    pub fn module_path(&self) -> Option<&str> {
        match self {
            Binding::Resolved(_) => None,
            Binding::Deferred { module_path } => Some(module_path),
        }
    }
}
