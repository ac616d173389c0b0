//! Ordered directive set backing a section's style override

use std::fmt;

use super::category::StyleCategory;

/// Flat, ordered list of whitespace-free directive tokens.
///
/// Tokens keep their insertion order, repeats included. Anything that
/// matches no category is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    tokens: Vec<String>,
}

impl DirectiveSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text on whitespace, dropping empty tokens
    pub fn parse(text: &str) -> Self {
        let mut set = Self::new();
        set.extend_text(text);
        set
    }

    /// Append a token
    pub fn push(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.tokens.push(token.to_string());
    }

    /// Append every whitespace-separated token of `text`
    pub fn extend_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Drop every token claimed by `category`
    pub fn remove_category(&mut self, category: StyleCategory, widen_bg: bool) {
        self.tokens.retain(|t| !category.claims(t, widen_bg));
    }

    /// Replace the category's tokens with the tokens of `value`.
    ///
    /// An empty `value` clears the category.
    pub fn apply(&mut self, category: StyleCategory, value: &str) {
        let widen_bg = category == StyleCategory::Bg && is_gradient(value);
        self.remove_category(category, widen_bg);
        self.extend_text(value);
    }

    /// True if every token of `candidate` is present. An empty candidate is never active.
    pub fn is_active(&self, candidate: &str) -> bool {
        let mut wanted = candidate.split_whitespace().peekable();
        if wanted.peek().is_none() {
            return false;
        }
        wanted.all(|t| self.contains(t))
    }

    /// First token, left to right, starting with any of `prefixes`
    pub fn display_value(&self, prefixes: &[&str]) -> Option<&str> {
        self.iter()
            .find(|t| prefixes.iter().any(|p| t.starts_with(p)))
    }

    /// Categories claimed by at least one token, in `StyleCategory::ALL` order
    pub fn categories(&self) -> Vec<StyleCategory> {
        let widen_bg = self.iter().any(is_gradient);
        StyleCategory::ALL
            .into_iter()
            .filter(|c| self.iter().any(|t| c.claims(t, widen_bg)))
            .collect()
    }

    /// Layer `over` on top of this set.
    ///
    /// Every category present in `over` is cleared here first, so the upper
    /// layer wins per category while unrelated tokens of both layers survive.
    /// Tokens of `over` already present below are not repeated.
    pub fn overlay(&mut self, over: &DirectiveSet) {
        let widen_bg = over.iter().any(is_gradient);
        for category in over.categories() {
            self.remove_category(category, widen_bg);
        }
        for token in over.iter() {
            if !self.contains(token) {
                self.push(token);
            }
        }
    }
}

impl fmt::Display for DirectiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for DirectiveSet {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

fn is_gradient(value: &str) -> bool {
    value.contains("gradient")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_extra_whitespace() {
        let set = DirectiveSet::parse("  py-4   text-center\tpy-4 ");
        assert_eq!(set.to_string(), "py-4 text-center py-4");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_apply_keeps_repeated_tokens() {
        let mut set = DirectiveSet::parse("shadow py-4 shadow");
        set.apply(StyleCategory::PaddingY, "");
        assert_eq!(set.to_string(), "shadow shadow");

        let mut set = DirectiveSet::parse("from-muted/50 bg-red-500 text-center");
        set.apply(StyleCategory::Bg, "bg-gradient-to-b from-muted/50 to-background");
        assert_eq!(
            set.to_string(),
            "from-muted/50 text-center bg-gradient-to-b from-muted/50 to-background"
        );
    }

    #[test]
    fn test_overlay_does_not_repeat_tokens() {
        let mut base = DirectiveSet::parse("w-full text-center");
        base.overlay(&DirectiveSet::parse("w-full py-2"));
        assert_eq!(base.to_string(), "w-full text-center py-2");
    }

    #[test]
    fn test_apply_replaces_whole_tokens() {
        let mut set = DirectiveSet::parse("md:py-8 px-4 pt-2 shadow-sm");
        set.apply(StyleCategory::PaddingY, "py-12 md:py-24");
        assert_eq!(set.to_string(), "px-4 shadow-sm py-12 md:py-24");
    }

    #[test]
    fn test_apply_empty_clears_category() {
        let mut set = DirectiveSet::parse("rounded-lg border rounded");
        set.apply(StyleCategory::BorderRadius, "");
        assert_eq!(set.to_string(), "border");
    }

    #[test]
    fn test_is_active_requires_every_token() {
        let set = DirectiveSet::parse("py-12 md:py-24");
        assert!(set.is_active("py-12 md:py-24"));
        assert!(set.is_active("md:py-24"));
        assert!(!DirectiveSet::parse("py-12").is_active("py-12 md:py-24"));
        assert!(!set.is_active(""));
    }

    #[test]
    fn test_display_value_keeps_order() {
        let set = DirectiveSet::parse("bg-muted pb-4 py-8");
        assert_eq!(set.display_value(&["py-", "pt-", "pb-"]), Some("pb-4"));
        assert_eq!(set.display_value(&["gap-"]), None);
    }

    #[test]
    fn test_overlay_upper_layer_wins_per_category() {
        let mut base = DirectiveSet::parse("relative py-12 md:py-24 px-4 bg-background");
        base.overlay(&DirectiveSet::parse("py-0 border-2"));
        assert_eq!(base.to_string(), "relative px-4 bg-background py-0 border-2");
    }

    #[test]
    fn test_overlay_gradient_replaces_flat_background() {
        let mut base = DirectiveSet::parse("bg-red-500 text-foreground");
        base.overlay(&DirectiveSet::parse("bg-gradient-to-b from-muted/50 to-background"));
        assert_eq!(
            base.to_string(),
            "text-foreground bg-gradient-to-b from-muted/50 to-background"
        );
    }
}
