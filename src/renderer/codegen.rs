//! Standalone TSX source generation from a page model

use crate::error::GenerateError;
use crate::model::{ComponentNode, GlobalDesignConfig, LayoutConfig};
use crate::theme::ResolvedTheme;

use super::catalog;
use super::classes::{content_classes, page_root_classes, resolve_classes, resolve_variant};
use super::config::ExportConfig;
use super::markup::{el, Element, Node};
use super::writer::{Dialect, MarkupWriter};

/// Build the markup of one section from the shared catalog
pub fn render_section(
    node: &ComponentNode,
    design: &GlobalDesignConfig,
) -> Result<Element, GenerateError> {
    let variant = resolve_variant(node)?;
    let classes = resolve_classes(node, design)?;
    Ok(catalog::render(&node.props, variant, &classes))
}

/// Comment introducing a section in the exported source
fn section_comment(node: &ComponentNode) -> Result<Node, GenerateError> {
    let label = node.kind().label();
    let text = match resolve_variant(node)? {
        Some(variant) => format!("{label}: {variant}"),
        None => label.to_string(),
    };
    Ok(Node::Comment(text))
}

/// Escape text for a JavaScript template literal
fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Generate the exported source text.
///
/// Output depends only on the arguments; node and item ids never appear in it.
pub fn generate(
    components: &[ComponentNode],
    layout: &LayoutConfig,
    design: &GlobalDesignConfig,
    theme: &ResolvedTheme,
    config: &ExportConfig,
) -> Result<String, GenerateError> {
    let mut column = el("div").class(content_classes(layout, design));
    for node in components {
        column = column
            .child(section_comment(node)?)
            .child(render_section(node, design)?);
    }

    let root = el("div")
        .class(page_root_classes(layout, design, &config.scope_class))
        .child(Node::Raw("<style>{themeStyles}</style>".to_string()))
        .child(column);

    let mut writer = MarkupWriter::new(Dialect::Jsx, config.indent_width).with_depth(2);
    writer.write(&root.into());
    let body = writer.finish();

    let rule = theme.css_rule(&format!(".{}", config.scope_class), &config.indent(1));
    let mut out = String::new();
    out.push_str("import React from \"react\";\n\n");
    out.push_str("const themeStyles = `\n");
    out.push_str(&escape_template_literal(&rule));
    out.push_str("\n`;\n\n");
    out.push_str(&format!(
        "export default function {}() {{\n",
        config.component_name
    ));
    out.push_str(&format!("{}return (\n", config.indent(1)));
    out.push_str(&body);
    out.push_str(&format!("{});\n", config.indent(1)));
    out.push_str("}\n");

    tracing::debug!(sections = components.len(), bytes = out.len(), "generated source");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionKind, ThemeMode};
    use crate::theme::resolve_theme;

    fn theme() -> ResolvedTheme {
        resolve_theme("zinc", ThemeMode::Dark, 0.5)
    }

    #[test]
    fn test_generate_is_deterministic() {
        let nodes = vec![
            ComponentNode::new(SectionKind::Nav),
            ComponentNode::new(SectionKind::Pricing),
        ];
        let layout = LayoutConfig::default();
        let design = GlobalDesignConfig::default();
        let config = ExportConfig::default();
        let a = generate(&nodes, &layout, &design, &theme(), &config).unwrap();
        let b = generate(&nodes, &layout, &design, &theme(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_omits_ids() {
        let nodes = vec![ComponentNode::new(SectionKind::Faq)];
        let source = generate(
            &nodes,
            &LayoutConfig::default(),
            &GlobalDesignConfig::default(),
            &theme(),
            &ExportConfig::default(),
        )
        .unwrap();
        assert!(!source.contains(&nodes[0].id.to_string()));
        assert!(!source.contains(&nodes[0].id.short()));
    }

    #[test]
    fn test_unknown_variant_fails() {
        let mut node = ComponentNode::new(SectionKind::Stats);
        node.variant = Some("pie".to_string());
        let result = generate(
            &[node],
            &LayoutConfig::default(),
            &GlobalDesignConfig::default(),
            &theme(),
            &ExportConfig::default(),
        );
        assert!(matches!(result, Err(GenerateError::UnknownVariant { .. })));
    }

    #[test]
    fn test_section_comment_names_variant() {
        let node = ComponentNode::new(SectionKind::Video);
        assert_eq!(
            section_comment(&node),
            Ok(Node::Comment("Video Embed: browser".to_string()))
        );
        let node = ComponentNode::new(SectionKind::Footer);
        assert_eq!(section_comment(&node), Ok(Node::Comment("Footer".to_string())));
    }

    #[test]
    fn test_template_literal_escaping() {
        assert_eq!(escape_template_literal("a`b${c}\\"), "a\\`b\\${c}\\\\");
    }
}
