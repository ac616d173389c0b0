//! Style directive reconciliation
//!
//! A section carries a free-form override string of utility directives. The
//! functions here edit that string one category at a time so that, for
//! example, choosing a new vertical padding removes the previous one instead
//! of stacking conflicting directives.
//!
//! ```rust
//! use page_composer::style::{apply, StyleCategory};
//!
//! let classes = apply("py-4 text-center", StyleCategory::PaddingY, "py-8 md:py-16");
//! assert_eq!(classes, "text-center py-8 md:py-16");
//! ```

mod category;
mod directives;

pub use category::{strip_variants, StyleCategory, UnknownCategory};
pub use directives::DirectiveSet;

/// Replace `category` in an override string with `value`
pub fn apply(current: &str, category: StyleCategory, value: &str) -> String {
    let mut set = DirectiveSet::parse(current);
    set.apply(category, value);
    set.to_string()
}

/// Like [`apply`], with the category given by name.
///
/// An unrecognised name removes nothing and only appends `value`.
pub fn apply_named(current: &str, category: &str, value: &str) -> String {
    match category.parse::<StyleCategory>() {
        Ok(category) => apply(current, category, value),
        Err(err) => {
            tracing::warn!(target: "page_composer::style", "{err}, appending without removal");
            let mut set = DirectiveSet::parse(current);
            set.extend_text(value);
            set.to_string()
        }
    }
}

/// True if every token of `candidate` appears in `current`
pub fn is_active(current: &str, candidate: &str) -> bool {
    DirectiveSet::parse(current).is_active(candidate)
}

/// First token of `current` starting with one of `prefixes`
pub fn display_value(current: &str, prefixes: &[&str]) -> Option<String> {
    DirectiveSet::parse(current)
        .display_value(prefixes)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_widens_background_match() {
        let result = apply(
            "py-0 bg-red-500",
            StyleCategory::Bg,
            "bg-gradient-to-b from-muted/50 to-background",
        );
        assert_eq!(result, "py-0 bg-gradient-to-b from-muted/50 to-background");
    }

    #[test]
    fn test_flat_background_does_not_widen() {
        let result = apply("bg-red-500 bg-muted/50", StyleCategory::Bg, "bg-secondary/30");
        assert_eq!(result, "bg-red-500 bg-secondary/30");
    }

    #[test]
    fn test_border_width_keeps_style_and_color() {
        let result = apply(
            "border-2 border-dashed border-zinc-500",
            StyleCategory::BorderWidth,
            "border-8",
        );
        assert_eq!(result, "border-dashed border-zinc-500 border-8");
    }

    #[test]
    fn test_unknown_category_only_appends() {
        assert_eq!(apply_named("py-4", "shadow", "shadow-lg"), "py-4 shadow-lg");
        assert_eq!(apply_named("py-4", "paddingY", "py-2"), "py-2");
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        let result = apply("[&>*]:py-4 ::: py-2", StyleCategory::PaddingY, "py-6");
        assert_eq!(result, "[&>*]:py-4 ::: py-6");
    }

    #[test]
    fn test_display_value_none_on_empty() {
        assert_eq!(display_value("", &["py-"]), None);
        assert_eq!(display_value("px-4 py-2", &["py-"]), Some("py-2".to_string()));
    }
}
