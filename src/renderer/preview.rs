//! Live preview as an HTML fragment

use crate::error::GenerateError;
use crate::model::{ComponentNode, GlobalDesignConfig, LayoutConfig, PageModel};
use crate::theme::ResolvedTheme;

use super::classes::{content_classes, page_root_classes};
use super::codegen::render_section;
use super::config::ExportConfig;
use super::markup::el;
use super::writer::{write_markup, Dialect};

/// Render the preview of a page.
///
/// Uses the same catalog and class resolution as the export. The theme goes
/// into an inline `style` on the preview root, and each section carries a
/// `data-section-id` so editors can map clicks back to nodes.
pub fn render_preview(model: &PageModel) -> Result<String, GenerateError> {
    render_preview_with(
        model.components(),
        model.layout(),
        model.design(),
        &model.resolved_theme(),
        &ExportConfig::default(),
    )
}

pub fn render_preview_with(
    components: &[ComponentNode],
    layout: &LayoutConfig,
    design: &GlobalDesignConfig,
    theme: &ResolvedTheme,
    config: &ExportConfig,
) -> Result<String, GenerateError> {
    let mut column = el("div").class(content_classes(layout, design));
    for node in components {
        let section = render_section(node, design)?.attr("data-section-id", node.id.to_string());
        column = column.child(section);
    }
    let root = el("div")
        .class(page_root_classes(layout, design, &config.scope_class))
        .attr("style", theme.inline_style())
        .child(column);
    Ok(write_markup(&root.into(), Dialect::Html, config.indent_width, 0))
}
