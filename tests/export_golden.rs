//! Golden output of the source export

use page_composer::renderer::{render_preview, resolve_classes};
use page_composer::{
    export_file, export_source, ExportConfig, FieldValue, LayoutConfig, PageModel, SectionKind,
    StyleCategory, ThemeCatalog,
};
use pretty_assertions::assert_eq;

/// A single-token theme keeps the golden output short
fn ink_page() -> PageModel {
    let themes = ThemeCatalog::from_str(
        r#"
[themes.ink]
label = "Ink"

[themes.ink.light]
background = "0 0% 90%"

[themes.ink.dark]
background = "0 0% 5%"
"#,
    )
    .expect("valid theme catalog");
    let mut page = PageModel::new().with_themes(themes);
    page.design_mut().theme = "ink".to_string();
    page
}

#[test]
fn test_empty_page_snapshot() {
    let source = export_source(&ink_page()).expect("export succeeds");
    insta::assert_snapshot!(source, @r#"
import React from "react";

const themeStyles = `
.page-root {
  --background: 0 0% 5%;
  --radius: 0.5rem;
}
`;

export default function LandingPage() {
  return (
    <div className="page-root dark min-h-screen flex flex-col bg-background text-foreground font-sans p-4">
      <style>{themeStyles}</style>
      <div className="flex flex-col w-full mx-auto max-w-7xl gap-0"></div>
    </div>
  );
}
"#);
}

#[test]
fn test_footer_page_exact_output() {
    let mut page = ink_page();
    let footer = page.add_component(SectionKind::Footer);
    page.update_field(footer, "text", FieldValue::text("Built with care & {braces}"));

    let expected = concat!(
        "import React from \"react\";\n",
        "\n",
        "const themeStyles = `\n",
        ".page-root {\n",
        "  --background: 0 0% 5%;\n",
        "  --radius: 0.5rem;\n",
        "}\n",
        "`;\n",
        "\n",
        "export default function LandingPage() {\n",
        "  return (\n",
        "    <div className=\"page-root dark min-h-screen flex flex-col bg-background text-foreground font-sans p-4\">\n",
        "      <style>{themeStyles}</style>\n",
        "      <div className=\"flex flex-col w-full mx-auto max-w-7xl gap-0\">\n",
        "        {/* Footer */}\n",
        "        <footer className=\"w-full border-t py-8 px-4 md:px-6\">\n",
        "          <div className=\"container mx-auto flex flex-col items-center justify-between gap-4 md:flex-row\">\n",
        "            <p className=\"text-sm text-muted-foreground\">Built with care &amp; &#123;braces&#125;</p>\n",
        "          </div>\n",
        "        </footer>\n",
        "      </div>\n",
        "    </div>\n",
        "  );\n",
        "}\n",
    );
    assert_eq!(export_source(&page).expect("export succeeds"), expected);
}

#[test]
fn test_layout_and_design_reach_wrappers() {
    let mut page = ink_page().with_layout(
        LayoutConfig::new()
            .with_max_width("max-w-3xl")
            .with_centered_vertical(true)
            .with_border("border-4", "border-dotted", "border-primary"),
    );
    page.design_mut().gap = "gap-8".to_string();
    page.design_mut().radius = 1.25;

    let source = export_source(&page).expect("export succeeds");
    assert!(source.contains("p-4 justify-center\">"));
    assert!(source.contains(
        "className=\"flex flex-col w-full mx-auto max-w-3xl gap-8 border-4 border-dotted border-primary\""
    ));
    assert!(source.contains("  --radius: 1.25rem;\n"));
}

#[test]
fn test_export_is_deterministic_and_id_free() {
    let mut page = PageModel::new();
    page.instantiate_template("template-agency");
    let faq = page.add_component(SectionKind::Faq);
    page.set_style(faq, StyleCategory::Bg, "bg-muted/50");

    let first = export_source(&page).expect("export succeeds");
    let second = export_source(&page).expect("export succeeds");
    assert_eq!(first, second);

    for node in page.components() {
        assert!(!first.contains(&node.id.to_string()));
        if let Some(items) = node.props.items() {
            for id in items.item_ids() {
                assert!(!first.contains(&id.to_string()));
            }
        }
    }
    assert!(!first.contains("data-section-id"));
}

#[test]
fn test_preview_and_export_share_section_classes() {
    let mut page = PageModel::new();
    page.instantiate_template("template-saas");
    let hero = page.components()[1].id;
    page.set_style(hero, StyleCategory::PaddingY, "py-32");
    page.set_style(hero, StyleCategory::Bg, "bg-gradient-to-b from-muted/50 to-background");

    let source = export_source(&page).expect("export succeeds");
    let preview = render_preview(&page).expect("preview succeeds");
    for node in page.components() {
        let classes = resolve_classes(node, page.design()).expect("known variant");
        assert!(source.contains(&format!("className=\"{}\"", classes.section)));
        assert!(preview.contains(&format!("class=\"{}\"", classes.section)));
    }
}

#[test]
fn test_unknown_variant_fails_loudly() {
    let mut page = PageModel::new();
    let hero = page.add_component(SectionKind::Hero);
    let mut node = page.node(hero).cloned().expect("node exists");
    node.variant = Some("tilted".to_string());
    page.remove_component(hero);
    page.push_node(node);

    let err = export_source(&page).expect_err("unknown variant");
    assert_eq!(err.to_string(), "variant 'tilted' is not registered for section kind hero");
}

#[test]
fn test_export_file_is_named() {
    let page = ink_page();
    let file = export_file(&page, &ExportConfig::new().with_component_name("Home"))
        .expect("export succeeds");
    assert_eq!(file.file_name, "Home.tsx");
    assert!(file.contents.contains("export default function Home() {"));
}
