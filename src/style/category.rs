//! Mutually exclusive style categories and the directive patterns they claim

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Color roots recognised by the flat background category
const BG_PALETTE: &[&str] = &[
    "background", "muted", "secondary", "primary", "accent", "card", "white", "black", "slate",
    "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime", "green",
    "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia", "pink",
    "rose",
];

/// `border-*` suffixes that are never a border color
const BORDER_COLOR_EXCLUDED: &[&str] = &[
    "0", "2", "4", "8", "solid", "dashed", "dotted", "double", "none", "x-", "y-", "t-", "b-",
    "l-", "r-",
];

/// Returned when a category name is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style category: {0}")]
pub struct UnknownCategory(pub String);

/// A group of directives where setting one value replaces the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    PaddingY,
    PaddingX,
    MarginY,
    Gap,
    Align,
    Bg,
    BorderWidth,
    BorderColor,
    BorderStyle,
    BorderRadius,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 10] = [
        StyleCategory::PaddingY,
        StyleCategory::PaddingX,
        StyleCategory::MarginY,
        StyleCategory::Gap,
        StyleCategory::Align,
        StyleCategory::Bg,
        StyleCategory::BorderWidth,
        StyleCategory::BorderColor,
        StyleCategory::BorderStyle,
        StyleCategory::BorderRadius,
    ];

    /// The name used by editors and page files (`paddingY`, `borderColor`, ...)
    pub fn name(self) -> &'static str {
        match self {
            StyleCategory::PaddingY => "paddingY",
            StyleCategory::PaddingX => "paddingX",
            StyleCategory::MarginY => "marginY",
            StyleCategory::Gap => "gap",
            StyleCategory::Align => "align",
            StyleCategory::Bg => "bg",
            StyleCategory::BorderWidth => "borderWidth",
            StyleCategory::BorderColor => "borderColor",
            StyleCategory::BorderStyle => "borderStyle",
            StyleCategory::BorderRadius => "borderRadius",
        }
    }

    /// Check whether a directive token belongs to this category.
    ///
    /// Responsive and state prefixes (`md:`, `hover:md:`) are ignored. When
    /// `widen_bg` is set the background category claims every `bg-` token,
    /// which is how a gradient replaces a flat color and vice versa.
    pub fn claims(self, token: &str, widen_bg: bool) -> bool {
        let utility = strip_variants(token);
        match self {
            StyleCategory::PaddingY => starts_with_any(utility, &["py-", "pt-", "pb-"]),
            StyleCategory::PaddingX => starts_with_any(utility, &["px-", "pl-", "pr-"]),
            StyleCategory::MarginY => starts_with_any(utility, &["my-", "mt-", "mb-"]),
            StyleCategory::Gap => utility.starts_with("gap-"),
            StyleCategory::Align => {
                starts_with_any(utility, &["text-left", "text-center", "text-right"])
            }
            StyleCategory::Bg => {
                if widen_bg {
                    utility.starts_with("bg-")
                } else {
                    is_palette_background(utility)
                }
            }
            StyleCategory::BorderWidth => matches!(
                utility,
                "border" | "border-0" | "border-2" | "border-4" | "border-8"
            ),
            StyleCategory::BorderColor => utility
                .strip_prefix("border-")
                .is_some_and(|rest| !rest.is_empty() && !starts_with_any(rest, BORDER_COLOR_EXCLUDED)),
            StyleCategory::BorderStyle => matches!(
                utility,
                "border-solid" | "border-dashed" | "border-dotted" | "border-double" | "border-none"
            ),
            StyleCategory::BorderRadius => {
                utility == "rounded"
                    || utility.strip_prefix("rounded-").is_some_and(|rest| !rest.is_empty())
            }
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Strip leading `word:` variant prefixes from a directive
pub fn strip_variants(token: &str) -> &str {
    let mut rest = token;
    while let Some((prefix, tail)) = rest.split_once(':') {
        let is_word = !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !is_word {
            break;
        }
        rest = tail;
    }
    rest
}

fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| text.starts_with(p))
}

/// `bg-<root>` or `bg-<root>/<opacity>` for a palette root
fn is_palette_background(utility: &str) -> bool {
    let Some(rest) = utility.strip_prefix("bg-") else {
        return false;
    };
    BG_PALETTE.iter().any(|root| match rest.strip_prefix(root) {
        Some(suffix) => suffix.is_empty() || suffix.starts_with('/'),
        None => false,
    })
}
