//! Page templates
//!
//! A template is a named, ordered list of sections used to seed a page in one
//! step. The built-in catalog can be extended from a TOML file:
//!
//! ```toml
//! [[templates]]
//! id = "template-docs"
//! label = "Docs"
//!
//! [[templates.items]]
//! type = "hero"
//! variant = "centered"
//! props = { title = "Read the docs" }
//! ```

mod expander;
mod registry;

pub use expander::expand;
pub use registry::{Template, TemplateError, TemplateItem, TemplateRegistry};
