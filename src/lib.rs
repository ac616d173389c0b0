//! Page Composer - assemble pages from typed sections and export them as source
//!
//! This library provides the page model, the style reconciler, templates,
//! themes and the renderer that turns a page into a standalone TSX component
//! or an HTML preview.
//!
//! # Example
//!
//! ```rust
//! use page_composer::compose;
//!
//! let source = compose(r#"
//!     [[sections]]
//!     type = "hero"
//!     props = { title = "Hello" }
//! "#).unwrap();
//! assert!(source.contains("export default function LandingPage()"));
//! assert!(source.contains("Hello"));
//! ```

pub mod error;
pub mod model;
pub mod page_file;
pub mod renderer;
pub mod style;
pub mod template;
pub mod theme;

pub use error::GenerateError;
pub use model::{
    ComponentNode, FieldValue, GlobalDesignConfig, ItemId, LayoutConfig, NodeId, PageModel,
    SectionKind, SectionProps, ThemeMode,
};
pub use page_file::{PageFile, PageFileError};
pub use renderer::{
    export_file, export_source, export_source_with_config, render_preview, ExportConfig,
    ExportFile,
};
pub use style::{DirectiveSet, StyleCategory};
pub use template::{Template, TemplateError, TemplateItem, TemplateRegistry};
pub use theme::{resolve_theme, ResolvedTheme, ThemeCatalog, ThemeError};

use thiserror::Error;

/// Errors that can occur during the compose pipeline
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Error reading or applying the page file
    #[error("page file error: {0}")]
    PageFile(#[from] PageFileError),

    /// Error loading a template catalog
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Error loading a theme catalog
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Error during generation
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// What the pipeline produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Standalone TSX component
    #[default]
    Source,
    /// HTML preview fragment
    Preview,
}

/// Configuration for the complete compose pipeline
#[derive(Debug, Clone, Default)]
pub struct ComposeConfig {
    /// Templates available to `template = ...` sections
    pub templates: TemplateRegistry,
    /// Themes available to the design settings
    pub themes: ThemeCatalog,
    /// Export naming and formatting
    pub export: ExportConfig,
    pub format: OutputFormat,
}

impl ComposeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_themes(mut self, themes: ThemeCatalog) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// An empty page wired to this configuration's catalogs
    pub fn page(&self) -> PageModel {
        PageModel::new()
            .with_templates(self.templates.clone())
            .with_themes(self.themes.clone())
    }
}

/// Compose a TOML page file into TSX source with default configuration
pub fn compose(source: &str) -> Result<String, ComposeError> {
    compose_with_config(source, &ComposeConfig::default())
}

/// Compose a TOML page file with custom configuration
///
/// # Example
///
/// ```rust
/// use page_composer::{compose_with_config, ComposeConfig, ExportConfig, OutputFormat};
///
/// let config = ComposeConfig::new()
///     .with_export(ExportConfig::new().with_component_name("Home"))
///     .with_format(OutputFormat::Source);
///
/// let source = compose_with_config("[[sections]]\ntemplate = \"template-saas\"", &config).unwrap();
/// assert!(source.contains("export default function Home()"));
/// ```
pub fn compose_with_config(source: &str, config: &ComposeConfig) -> Result<String, ComposeError> {
    let file = PageFile::from_str(source)?;
    let page = file.into_model(config.page())?;
    render_page(&page, config)
}

/// Render an already built page in the configured format
pub fn render_page(page: &PageModel, config: &ComposeConfig) -> Result<String, ComposeError> {
    let output = match config.format {
        OutputFormat::Source => export_source_with_config(page, &config.export)?,
        OutputFormat::Preview => renderer::render_preview_with(
            page.components(),
            page.layout(),
            page.design(),
            &page.resolved_theme(),
            &config.export,
        )?,
    };
    Ok(output)
}
