//! Page-wide layout and design configuration

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Light or dark token set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode '{0}', expected 'light' or 'dark'")]
pub struct UnknownMode(pub String);

impl ThemeMode {
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Root wrapper of the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Max-width directive of the content column
    pub max_width: String,

    /// Padding directive of the outer wrapper
    pub padding: String,

    /// Center the content column vertically
    pub centered_vertical: bool,

    /// Background directive of the outer wrapper
    pub background: String,

    /// Draw a border around the content column
    pub show_border: bool,

    pub border_color: String,
    pub border_width: String,
    pub border_style: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: "max-w-7xl".to_string(),
            padding: "p-4".to_string(),
            centered_vertical: false,
            background: "bg-background".to_string(),
            show_border: false,
            border_color: "border-zinc-500".to_string(),
            border_width: "border-2".to_string(),
            border_style: "border-dashed".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = max_width.into();
        self
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn with_centered_vertical(mut self, centered: bool) -> Self {
        self.centered_vertical = centered;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Enable the bordered content column
    pub fn with_border(
        mut self,
        width: impl Into<String>,
        style: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.show_border = true;
        self.border_width = width.into();
        self.border_style = style.into();
        self.border_color = color.into();
        self
    }

    /// Border directives of the content column, empty when disabled
    pub fn border_classes(&self) -> Vec<&str> {
        if !self.show_border {
            return Vec::new();
        }
        [&self.border_width, &self.border_style, &self.border_color]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

/// Page-wide design defaults applied beneath every section override
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobalDesignConfig {
    /// Name in the theme catalog
    pub theme: String,

    /// Corner radius in rem
    pub radius: f64,

    pub mode: ThemeMode,
    pub padding_y: String,
    pub padding_x: String,
    pub gap: String,
    pub shadow: String,
    pub font: String,
}

impl Default for GlobalDesignConfig {
    fn default() -> Self {
        Self {
            theme: "zinc".to_string(),
            radius: 0.5,
            mode: ThemeMode::Dark,
            padding_y: "py-12 md:py-24".to_string(),
            padding_x: "px-4 md:px-6".to_string(),
            gap: "gap-0".to_string(),
            shadow: "shadow-none".to_string(),
            font: "font-sans".to_string(),
        }
    }
}

impl GlobalDesignConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_padding(mut self, padding_y: impl Into<String>, padding_x: impl Into<String>) -> Self {
        self.padding_y = padding_y.into();
        self.padding_x = padding_x.into();
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn with_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.shadow = shadow.into();
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}
