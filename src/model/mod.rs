//! Page model: section nodes, typed props, item lists and page configuration

pub mod config;
pub mod fields;
mod ids;
pub mod items;
pub mod page;
pub mod section;

pub use config::{GlobalDesignConfig, LayoutConfig, ThemeMode, UnknownMode};
pub use fields::{FieldError, FieldValue, Record};
pub use ids::{ItemId, NodeId};
pub use items::ItemCollection;
pub use page::{ComponentNode, PageModel};
pub use section::{SectionKind, SectionProps, UnknownKind, VariantDescriptor};
