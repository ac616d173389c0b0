//! Renderer producing the exported source and the live preview
//!
//! Both outputs are built from one markup tree per section, taken from the
//! section catalog with the same resolved classes, and differ only in dialect.

pub mod catalog;
pub mod classes;
pub mod codegen;
pub mod config;
pub mod export;
pub mod markup;
pub mod preview;
pub mod writer;

pub use classes::{resolve_classes, resolve_variant, SectionClasses};
pub use codegen::generate;
pub use config::ExportConfig;
pub use export::{export_file, export_source, export_source_with_config, ExportFile};
pub use markup::{Element, Node};
pub use preview::{render_preview, render_preview_with};
pub use writer::{Dialect, MarkupWriter};
