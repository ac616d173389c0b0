//! Property-style checks for the style directive reconciler

use page_composer::style::{apply, apply_named, display_value, is_active, StyleCategory};
use pretty_assertions::assert_eq;

const OVERRIDES: &[&str] = &[
    "",
    "py-4",
    "md:py-8 px-4 text-center",
    "py-0 bg-red-500 shadow-lg",
    "border-2 border-dashed border-zinc-500 rounded-lg",
    "relative bg-muted/50 gap-6 mt-4 hover:md:pb-2",
    "bg-gradient-to-b from-muted/50 to-background my-8",
    "shadow py-4 shadow",
    "rounded-lg py-2 rounded-lg md:py-2 text-center text-center",
];

fn sample_value(category: StyleCategory) -> (&'static str, &'static str) {
    match category {
        StyleCategory::PaddingY => ("py-12 md:py-24", "pt-2"),
        StyleCategory::PaddingX => ("px-8", "pl-2 pr-6"),
        StyleCategory::MarginY => ("my-4", "md:mb-12"),
        StyleCategory::Gap => ("gap-4", "gap-12"),
        StyleCategory::Align => ("text-left", "text-right"),
        StyleCategory::Bg => ("bg-muted", "bg-gradient-to-r from-primary to-background"),
        StyleCategory::BorderWidth => ("border", "border-4"),
        StyleCategory::BorderColor => ("border-primary", "border-zinc-200/50"),
        StyleCategory::BorderStyle => ("border-dotted", "border-solid"),
        StyleCategory::BorderRadius => ("rounded-xl", "rounded"),
    }
}

fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[test]
fn test_repeated_apply_leaves_only_latest_category_tokens() {
    for &current in OVERRIDES {
        for category in StyleCategory::ALL {
            let (first, second) = sample_value(category);
            let result = apply(&apply(current, category, first), category, second);
            let widen = second.contains("gradient");
            let claimed: Vec<&str> = tokens(&result)
                .into_iter()
                .filter(|t| category.claims(t, widen))
                .collect();
            let expected: Vec<&str> = tokens(second)
                .into_iter()
                .filter(|t| category.claims(t, widen))
                .collect();
            assert_eq!(claimed, expected, "{current:?} / {category}");
        }
    }
}

#[test]
fn test_empty_value_clears_category_and_keeps_order() {
    for &current in OVERRIDES {
        for category in StyleCategory::ALL {
            let result = apply(current, category, "");
            let survivors: Vec<&str> = tokens(current)
                .into_iter()
                .filter(|t| !category.claims(t, false))
                .collect();
            assert_eq!(tokens(&result), survivors, "{current:?} / {category}");
        }
    }
}

#[test]
fn test_write_then_read_is_active() {
    for &current in OVERRIDES {
        for category in StyleCategory::ALL {
            let (first, second) = sample_value(category);
            for value in [first, second] {
                let result = apply(current, category, value);
                assert!(is_active(&result, value), "{current:?} / {category} / {value:?}");
            }
        }
    }
}

#[test]
fn test_gradient_replaces_flat_background() {
    assert_eq!(
        apply(
            "py-0 bg-red-500",
            StyleCategory::Bg,
            "bg-gradient-to-b from-muted/50 to-background"
        ),
        "py-0 bg-gradient-to-b from-muted/50 to-background"
    );
}

#[test]
fn test_repeated_tokens_survive_clearing() {
    assert_eq!(apply("shadow py-4 shadow", StyleCategory::PaddingY, ""), "shadow shadow");
}

#[test]
fn test_new_tokens_append_after_survivors() {
    assert_eq!(
        apply(
            "from-muted/50 bg-red-500 text-center",
            StyleCategory::Bg,
            "bg-gradient-to-b from-muted/50 to-background"
        ),
        "from-muted/50 text-center bg-gradient-to-b from-muted/50 to-background"
    );
    assert_eq!(
        apply("gap-2 text-left", StyleCategory::Align, "text-left"),
        "gap-2 text-left"
    );
    assert_eq!(
        apply("px-4 text-left px-4", StyleCategory::Gap, "px-4"),
        "px-4 text-left px-4 px-4"
    );
}

#[test]
fn test_flat_background_keeps_unknown_bg_tokens() {
    assert_eq!(
        apply("bg-red-500 bg-muted/50", StyleCategory::Bg, "bg-secondary"),
        "bg-red-500 bg-secondary"
    );
}

#[test]
fn test_border_width_only_replaces_width() {
    assert_eq!(
        apply(
            "border-2 border-dashed border-zinc-500",
            StyleCategory::BorderWidth,
            "border-8"
        ),
        "border-dashed border-zinc-500 border-8"
    );
}

#[test]
fn test_responsive_token_removed_as_a_unit() {
    assert_eq!(
        apply("md:py-8 lg:hover:pt-4 text-center", StyleCategory::PaddingY, "py-2"),
        "text-center py-2"
    );
}

#[test]
fn test_unmatched_tokens_pass_through() {
    let current = "[mask:linear] !py-4 data-[open]:flex";
    assert_eq!(
        apply(current, StyleCategory::PaddingY, "py-6"),
        "[mask:linear] !py-4 data-[open]:flex py-6"
    );
}

#[test]
fn test_unknown_category_only_appends() {
    assert_eq!(apply_named("py-4 shadow-sm", "shadow", "shadow-lg"), "py-4 shadow-sm shadow-lg");
    assert_eq!(apply_named("py-4", "paddingY", "py-8"), "py-8");
    assert_eq!(apply_named("py-4 shadow-sm", "shadow", "shadow-sm"), "py-4 shadow-sm shadow-sm");
}

#[test]
fn test_multi_token_candidate_requires_all_tokens() {
    assert!(is_active("py-12 md:py-24", "py-12 md:py-24"));
    assert!(!is_active("py-12", "py-12 md:py-24"));
    assert!(!is_active("py-12", "   "));
}

#[test]
fn test_display_value_reads_left_to_right() {
    let current = "text-center md:gap-8 gap-4 py-2";
    assert_eq!(display_value(current, &["gap-"]), Some("gap-4".to_string()));
    assert_eq!(display_value(current, &["md:gap-", "gap-"]), Some("md:gap-8".to_string()));
    assert_eq!(display_value(current, &["rounded"]), None);
}
