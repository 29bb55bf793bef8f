//! Lazy class registry for large component libraries.
//!
//! A [`ClassRegistry`] maps symbolic class names to class objects. Classes
//! can be registered directly, or by deferred reference to the module that
//! defines them, in which case the module is loaded only when the class is
//! first requested and the result is cached for the life of the registry.
//!
//! Module loading goes through the [`ModuleLoader`] seam injected at
//! construction, so the registry itself stays a plain map: registration
//! never loads, and lookup loads at most once per name.
//!
//! ```
//! use class_factory::{ClassRegistry, ImportError, Module, ModuleLoader};
//!
//! struct WidgetLoader;
//!
//! impl ModuleLoader<&'static str> for WidgetLoader {
//!     fn load(&self, path: &str) -> Result<Box<dyn Module<&'static str>>, ImportError> {
//!         match path {
//!             "ui.widgets" => Ok(Box::new(|name: &str| {
//!                 (name == "Button").then_some("button-class")
//!             })),
//!             _ => Err(format!("module '{path}' not found").into()),
//!         }
//!     }
//! }
//!
//! let mut registry = ClassRegistry::new(WidgetLoader);
//! registry.register_module("Button", "ui.widgets");
//!
//! assert_eq!(registry.get("Button").unwrap(), "button-class");
//! ```

pub mod binding;
pub mod error;
pub mod loader;
pub mod registry;

pub use binding::Binding;
pub use error::{FactoryError, ImportError};
pub use loader::{Module, ModuleLoader};
pub use registry::ClassRegistry;
