//! Theme catalog: named color token sets for light and dark mode
//!
//! Themes are plain TOML. Each theme carries a `light` and a `dark` table of
//! design tokens whose values are HSL triples, in declaration order:
//!
//! ```toml
//! [themes.slate]
//! label = "Slate"
//!
//! [themes.slate.light]
//! background = "0 0% 100%"
//! foreground = "222.2 47.4% 11.2%"
//!
//! [themes.slate.dark]
//! background = "222.2 47.4% 11.2%"
//! foreground = "210 40% 98%"
//! ```

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::model::ThemeMode;

/// Errors that can occur when loading or parsing theme catalogs
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("theme {theme} has no {mode} tokens")]
    MissingMode { theme: String, mode: ThemeMode },
}

/// Theme used when a requested name is not in the catalog
pub const FALLBACK_THEME: &str = "zinc";

/// Radius used when the configured one is not a usable length
const FALLBACK_RADIUS: f64 = 0.5;

/// One named theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub label: String,
    /// Directive used for the theme's swatch in pickers
    pub swatch: Option<String>,
    pub light: Vec<(String, String)>,
    pub dark: Vec<(String, String)>,
}

impl Theme {
    pub fn tokens(&self, mode: ThemeMode) -> &[(String, String)] {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Tokens and radius ready to be written into a stylesheet or style attribute
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// Name of the theme actually used, after fallback
    pub name: String,
    pub mode: ThemeMode,
    /// Token name (without `--`) and value, in declaration order
    pub tokens: Vec<(String, String)>,
    /// CSS length, e.g. `0.5rem`
    pub radius: String,
}

impl ResolvedTheme {
    /// Every custom property declaration, radius last
    pub fn declarations(&self) -> Vec<(String, &str)> {
        self.tokens
            .iter()
            .map(|(name, value)| (format!("--{name}"), value.as_str()))
            .chain(std::iter::once(("--radius".to_string(), self.radius.as_str())))
            .collect()
    }

    /// Declarations joined for an inline `style` attribute
    pub fn inline_style(&self) -> String {
        self.declarations()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A rule scoping the declarations to `selector`
    pub fn css_rule(&self, selector: &str, indent: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.declarations() {
            css.push_str(&format!("{indent}{name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    themes: toml::Table,
}

#[derive(Deserialize)]
struct TomlTheme {
    label: Option<String>,
    swatch: Option<String>,
    light: Option<toml::Table>,
    dark: Option<toml::Table>,
}

const BUILTIN_THEMES: &str = r##"
[themes.zinc]
label = "Zinc"
swatch = "bg-zinc-900"

[themes.zinc.light]
background = "0 0% 100%"
foreground = "240 10% 3.9%"
card = "0 0% 100%"
card-foreground = "240 10% 3.9%"
popover = "0 0% 100%"
popover-foreground = "240 10% 3.9%"
primary = "240 5.9% 10%"
primary-foreground = "0 0% 98%"
secondary = "240 4.8% 95.9%"
secondary-foreground = "240 5.9% 10%"
muted = "240 4.8% 95.9%"
muted-foreground = "240 3.8% 46.1%"
accent = "240 4.8% 95.9%"
accent-foreground = "240 5.9% 10%"
destructive = "0 84.2% 60.2%"
destructive-foreground = "0 0% 98%"
border = "240 5.9% 90%"
input = "240 5.9% 90%"
ring = "240 10% 3.9%"

[themes.zinc.dark]
background = "240 10% 3.9%"
foreground = "0 0% 98%"
card = "240 10% 3.9%"
card-foreground = "0 0% 98%"
popover = "240 10% 3.9%"
popover-foreground = "0 0% 98%"
primary = "0 0% 98%"
primary-foreground = "240 5.9% 10%"
secondary = "240 3.7% 15.9%"
secondary-foreground = "0 0% 98%"
muted = "240 3.7% 15.9%"
muted-foreground = "240 5% 64.9%"
accent = "240 3.7% 15.9%"
accent-foreground = "0 0% 98%"
destructive = "0 62.8% 30.6%"
destructive-foreground = "0 0% 98%"
border = "240 3.7% 15.9%"
input = "240 3.7% 15.9%"
ring = "240 4.9% 83.9%"

[themes.blue]
label = "Blue"
swatch = "bg-blue-600"

[themes.blue.light]
background = "0 0% 100%"
foreground = "222.2 84% 4.9%"
card = "0 0% 100%"
card-foreground = "222.2 84% 4.9%"
popover = "0 0% 100%"
popover-foreground = "222.2 84% 4.9%"
primary = "221.2 83.2% 53.3%"
primary-foreground = "210 40% 98%"
secondary = "210 40% 96.1%"
secondary-foreground = "222.2 47.4% 11.2%"
muted = "210 40% 96.1%"
muted-foreground = "215.4 16.3% 46.9%"
accent = "210 40% 96.1%"
accent-foreground = "222.2 47.4% 11.2%"
destructive = "0 84.2% 60.2%"
destructive-foreground = "210 40% 98%"
border = "214.3 31.8% 91.4%"
input = "214.3 31.8% 91.4%"
ring = "221.2 83.2% 53.3%"

[themes.blue.dark]
background = "222.2 84% 4.9%"
foreground = "210 40% 98%"
card = "222.2 84% 4.9%"
card-foreground = "210 40% 98%"
popover = "222.2 84% 4.9%"
popover-foreground = "210 40% 98%"
primary = "217.2 91.2% 59.8%"
primary-foreground = "222.2 47.4% 11.2%"
secondary = "217.2 32.6% 17.5%"
secondary-foreground = "210 40% 98%"
muted = "217.2 32.6% 17.5%"
muted-foreground = "215 20.2% 65.1%"
accent = "217.2 32.6% 17.5%"
accent-foreground = "210 40% 98%"
destructive = "0 62.8% 30.6%"
destructive-foreground = "210 40% 98%"
border = "217.2 32.6% 17.5%"
input = "217.2 32.6% 17.5%"
ring = "212.7 26.8% 83.9%"

[themes.rose]
label = "Rose"
swatch = "bg-rose-600"

[themes.rose.light]
background = "0 0% 100%"
foreground = "240 10% 3.9%"
card = "0 0% 100%"
card-foreground = "240 10% 3.9%"
popover = "0 0% 100%"
popover-foreground = "240 10% 3.9%"
primary = "346.8 77.2% 49.8%"
primary-foreground = "355.7 100% 97.3%"
secondary = "240 4.8% 95.9%"
secondary-foreground = "240 5.9% 10%"
muted = "240 4.8% 95.9%"
muted-foreground = "240 3.8% 46.1%"
accent = "240 4.8% 95.9%"
accent-foreground = "240 5.9% 10%"
destructive = "0 84.2% 60.2%"
destructive-foreground = "0 0% 98%"
border = "240 5.9% 90%"
input = "240 5.9% 90%"
ring = "346.8 77.2% 49.8%"

[themes.rose.dark]
background = "240 10% 3.9%"
foreground = "0 0% 98%"
card = "240 10% 3.9%"
card-foreground = "0 0% 98%"
popover = "240 10% 3.9%"
popover-foreground = "0 0% 98%"
primary = "346.8 77.2% 49.8%"
primary-foreground = "355.7 100% 97.3%"
secondary = "240 3.7% 15.9%"
secondary-foreground = "0 0% 98%"
muted = "240 3.7% 15.9%"
muted-foreground = "240 5% 64.9%"
accent = "240 3.7% 15.9%"
accent-foreground = "0 0% 98%"
destructive = "0 62.8% 30.6%"
destructive-foreground = "0 0% 98%"
border = "240 3.7% 15.9%"
input = "240 3.7% 15.9%"
ring = "346.8 77.2% 49.8%"

[themes.green]
label = "Green"
swatch = "bg-green-600"

[themes.green.light]
background = "0 0% 100%"
foreground = "240 10% 3.9%"
card = "0 0% 100%"
card-foreground = "240 10% 3.9%"
popover = "0 0% 100%"
popover-foreground = "240 10% 3.9%"
primary = "142.1 76.2% 36.3%"
primary-foreground = "355.7 100% 97.3%"
secondary = "240 4.8% 95.9%"
secondary-foreground = "240 5.9% 10%"
muted = "240 4.8% 95.9%"
muted-foreground = "240 3.8% 46.1%"
accent = "240 4.8% 95.9%"
accent-foreground = "240 5.9% 10%"
destructive = "0 84.2% 60.2%"
destructive-foreground = "0 0% 98%"
border = "240 5.9% 90%"
input = "240 5.9% 90%"
ring = "142.1 76.2% 36.3%"

[themes.green.dark]
background = "240 10% 3.9%"
foreground = "0 0% 98%"
card = "240 10% 3.9%"
card-foreground = "0 0% 98%"
popover = "240 10% 3.9%"
popover-foreground = "0 0% 98%"
primary = "142.1 70.6% 45.3%"
primary-foreground = "144.9 80.4% 10%"
secondary = "240 3.7% 15.9%"
secondary-foreground = "0 0% 98%"
muted = "240 3.7% 15.9%"
muted-foreground = "240 5% 64.9%"
accent = "240 3.7% 15.9%"
accent-foreground = "0 0% 98%"
destructive = "0 62.8% 30.6%"
destructive-foreground = "0 0% 98%"
border = "240 3.7% 15.9%"
input = "240 3.7% 15.9%"
ring = "142.4 71.8% 29.2%"

[themes.orange]
label = "Orange"
swatch = "bg-orange-500"

[themes.orange.light]
background = "0 0% 100%"
foreground = "240 10% 3.9%"
card = "0 0% 100%"
card-foreground = "240 10% 3.9%"
popover = "0 0% 100%"
popover-foreground = "240 10% 3.9%"
primary = "24.6 95% 53.1%"
primary-foreground = "60 9.1% 97.8%"
secondary = "240 4.8% 95.9%"
secondary-foreground = "240 5.9% 10%"
muted = "240 4.8% 95.9%"
muted-foreground = "240 3.8% 46.1%"
accent = "240 4.8% 95.9%"
accent-foreground = "240 5.9% 10%"
destructive = "0 84.2% 60.2%"
destructive-foreground = "0 0% 98%"
border = "240 5.9% 90%"
input = "240 5.9% 90%"
ring = "24.6 95% 53.1%"

[themes.orange.dark]
background = "240 10% 3.9%"
foreground = "0 0% 98%"
card = "240 10% 3.9%"
card-foreground = "0 0% 98%"
popover = "240 10% 3.9%"
popover-foreground = "0 0% 98%"
primary = "20.5 90.2% 48.2%"
primary-foreground = "60 9.1% 97.8%"
secondary = "240 3.7% 15.9%"
secondary-foreground = "0 0% 98%"
muted = "240 3.7% 15.9%"
muted-foreground = "240 5% 64.9%"
accent = "240 3.7% 15.9%"
accent-foreground = "0 0% 98%"
destructive = "0 62.8% 30.6%"
destructive-foreground = "0 0% 98%"
border = "240 3.7% 15.9%"
input = "240 3.7% 15.9%"
ring = "20.5 90.2% 48.2%"
"##;

/// Ordered collection of themes
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { themes: Vec::new() }
    }

    /// Built-in catalog, parsed once
    pub fn builtin() -> &'static ThemeCatalog {
        static BUILTIN: OnceLock<ThemeCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_str(BUILTIN_THEMES).expect("Built-in themes should be valid TOML")
        })
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let mut catalog = Self::new();
        catalog.load_str(content)?;
        Ok(catalog)
    }

    /// Add the themes of a TOML file, replacing any with the same name
    pub fn load_file(&mut self, path: &Path) -> Result<(), ThemeError> {
        let content = std::fs::read_to_string(path)?;
        self.load_str(&content)
    }

    /// Add the themes of a TOML string, replacing any with the same name
    pub fn load_str(&mut self, content: &str) -> Result<(), ThemeError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        for (name, value) in parsed.themes {
            let theme = convert_theme(name, value)?;
            self.insert(theme);
        }
        Ok(())
    }

    pub fn insert(&mut self, theme: Theme) {
        match self.themes.iter_mut().find(|t| t.name == theme.name) {
            Some(existing) => *existing = theme,
            None => self.themes.push(theme),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    /// Resolve a theme name, mode and radius into concrete declarations.
    ///
    /// Unknown names fall back to `zinc`, then to the first theme.
    pub fn resolve(&self, name: &str, mode: ThemeMode, radius: f64) -> ResolvedTheme {
        let theme = self.get(name).or_else(|| {
            warn!(theme = name, "unknown theme, falling back to {FALLBACK_THEME}");
            self.get(FALLBACK_THEME).or_else(|| self.themes.first())
        });
        let radius = if radius.is_finite() && radius >= 0.0 {
            radius
        } else {
            warn!(radius, "unusable radius, using {FALLBACK_RADIUS}");
            FALLBACK_RADIUS
        };
        ResolvedTheme {
            name: theme.map_or_else(|| name.to_string(), |t| t.name.clone()),
            mode,
            tokens: theme.map(|t| t.tokens(mode).to_vec()).unwrap_or_default(),
            radius: format!("{radius}rem"),
        }
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Resolve against the built-in catalog
pub fn resolve_theme(name: &str, mode: ThemeMode, radius: f64) -> ResolvedTheme {
    ThemeCatalog::builtin().resolve(name, mode, radius)
}

fn convert_theme(name: String, value: toml::Value) -> Result<Theme, ThemeError> {
    let parsed: TomlTheme = value.try_into()?;
    let light = parsed.light.ok_or_else(|| ThemeError::MissingMode {
        theme: name.clone(),
        mode: ThemeMode::Light,
    })?;
    let dark = parsed.dark.ok_or_else(|| ThemeError::MissingMode {
        theme: name.clone(),
        mode: ThemeMode::Dark,
    })?;
    Ok(Theme {
        label: parsed.label.unwrap_or_else(|| name.clone()),
        swatch: parsed.swatch,
        light: token_list(light)?,
        dark: token_list(dark)?,
        name,
    })
}

fn token_list(table: toml::Table) -> Result<Vec<(String, String)>, ThemeError> {
    table
        .into_iter()
        .map(|(name, value)| Ok((name, value.try_into::<String>()?)))
        .collect()
}
