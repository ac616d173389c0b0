//! Final class lists shared by preview and export

use crate::error::GenerateError;
use crate::model::{ComponentNode, GlobalDesignConfig, LayoutConfig, SectionKind, ThemeMode};
use crate::style::DirectiveSet;

use super::catalog;

/// Card surface before the design shadow is layered on
const CARD_BASE: &str = "rounded-[var(--radius)] border bg-card text-card-foreground";

/// Resolved classes for one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionClasses {
    /// Outer element of the section
    pub section: String,
    /// Card surfaces inside the section
    pub card: String,
}

/// Kinds that keep their own vertical rhythm instead of the global padding
fn skips_global_padding_y(kind: SectionKind) -> bool {
    matches!(
        kind,
        SectionKind::Nav | SectionKind::Banner | SectionKind::Footer
    )
}

/// The variant a node renders with.
///
/// `None` stands for the kind's first variant; kinds without variants resolve
/// to `None`. A variant not registered for the kind is an error.
pub fn resolve_variant(node: &ComponentNode) -> Result<Option<&str>, GenerateError> {
    let kind = node.kind();
    match node.variant() {
        Some(variant) if kind.has_variant(variant) => Ok(Some(variant)),
        Some(variant) => Err(GenerateError::UnknownVariant {
            kind,
            variant: variant.to_string(),
        }),
        None => Ok(kind.default_variant()),
    }
}

/// Variant defaults, then global design defaults, then the node's override.
///
/// Each layer replaces the categories it sets in the layers below it.
pub fn resolve_classes(
    node: &ComponentNode,
    design: &GlobalDesignConfig,
) -> Result<SectionClasses, GenerateError> {
    let kind = node.kind();
    let variant = resolve_variant(node)?;

    let mut section = DirectiveSet::parse(catalog::base_classes(kind, variant));
    if !skips_global_padding_y(kind) {
        section.overlay(&DirectiveSet::parse(&design.padding_y));
    }
    section.overlay(&DirectiveSet::parse(&design.padding_x));
    section.overlay(&node.style);

    let mut card = DirectiveSet::parse(CARD_BASE);
    card.extend_text(&design.shadow);

    Ok(SectionClasses {
        section: section.to_string(),
        card: card.to_string(),
    })
}

/// Classes of the page root: scope, mode, background, font, padding
pub fn page_root_classes(layout: &LayoutConfig, design: &GlobalDesignConfig, scope: &str) -> String {
    let mut root = DirectiveSet::parse(scope);
    if design.mode == ThemeMode::Dark {
        root.push("dark");
    }
    root.extend_text("min-h-screen flex flex-col");
    root.extend_text(&layout.background);
    root.push("text-foreground");
    root.extend_text(&design.font);
    root.extend_text(&layout.padding);
    if layout.centered_vertical {
        root.push("justify-center");
    }
    root.to_string()
}

/// Classes of the content column: width, section gap, optional border
pub fn content_classes(layout: &LayoutConfig, design: &GlobalDesignConfig) -> String {
    let mut column = DirectiveSet::parse("flex flex-col w-full mx-auto");
    column.extend_text(&layout.max_width);
    column.extend_text(&design.gap);
    for class in layout.border_classes() {
        column.extend_text(class);
    }
    column.to_string()
}
