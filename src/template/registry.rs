//! Template registry for storing and validating page templates

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{FieldError, FieldValue, SectionKind, SectionProps};

/// Errors that can occur while loading or registering templates
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse template TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate template definition: {id}")]
    Duplicate { id: String },

    #[error("template {template}: variant '{variant}' is not registered for {kind}")]
    UnknownVariant {
        template: String,
        kind: SectionKind,
        variant: String,
    },

    #[error("template {template}: {kind} has no field '{field}'")]
    UnknownField {
        template: String,
        kind: SectionKind,
        field: String,
    },

    #[error("template {template}: invalid value for {kind} field '{field}'")]
    InvalidFieldValue {
        template: String,
        kind: SectionKind,
        field: String,
    },
}

/// One section of a template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateItem {
    pub kind: SectionKind,
    /// Falls back to the kind's first variant when absent
    pub variant: Option<String>,
    /// Props replacing the kind's defaults field by field
    pub props: Vec<(String, FieldValue)>,
}

impl TemplateItem {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            variant: None,
            props: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_prop(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.props.push((field.into(), value));
        self
    }
}

/// A named, ordered bundle of sections
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub label: String,
    pub description: String,
    pub items: Vec<TemplateItem>,
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    templates: Vec<TomlTemplate>,
}

#[derive(Deserialize)]
struct TomlTemplate {
    id: String,
    label: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    items: Vec<TomlItem>,
}

#[derive(Deserialize)]
struct TomlItem {
    #[serde(rename = "type")]
    kind: SectionKind,
    variant: Option<String>,
    #[serde(default)]
    props: toml::Table,
}

/// Built-in templates
const BUILTIN_TEMPLATES: &str = r##"
[[templates]]
id = "template-saas"
label = "SaaS Landing"
description = "Complete landing page for SaaS products."

[[templates.items]]
type = "nav"

[[templates.items]]
type = "hero"
variant = "glow"

[[templates.items]]
type = "logo-cloud"

[[templates.items]]
type = "feature-grid"
variant = "cards"

[[templates.items]]
type = "stats"
variant = "simple"

[[templates.items]]
type = "testimonial"
variant = "grid"

[[templates.items]]
type = "pricing"

[[templates.items]]
type = "cta"
variant = "centered"

[[templates.items]]
type = "footer"

[[templates]]
id = "template-agency"
label = "Agency Portfolio"
description = "Showcase your team and work."

[[templates.items]]
type = "nav"

[[templates.items]]
type = "hero"
variant = "split"
props = { title = "We build digital experiences.", subtitle = "Award winning agency helping brands grow.", primary_btn = "Our Work", secondary_btn = "Contact Us" }

[[templates.items]]
type = "gallery"

[[templates.items]]
type = "team"
variant = "grid"

[[templates.items]]
type = "steps"
props = { title = "Our Process" }

[[templates.items]]
type = "video"
variant = "plain"
props = { title = "See how we work" }

[[templates.items]]
type = "blog"
props = { title = "Latest Insights" }

[[templates.items]]
type = "contact"
variant = "split"

[[templates.items]]
type = "footer"

[[templates]]
id = "template-app"
label = "Mobile App Launch"
description = "Clean layout for mobile app promotion."

[[templates.items]]
type = "nav"

[[templates.items]]
type = "hero"
variant = "split"
props = { title = "Manage your life on the go.", subtitle = "The ultimate productivity app for professionals.", primary_btn = "Download App", secondary_btn = "Learn More" }

[[templates.items]]
type = "stats"
variant = "cards"

[[templates.items]]
type = "feature-grid"
variant = "list"

[[templates.items]]
type = "testimonial"
variant = "centered"

[[templates.items]]
type = "cta"
variant = "minimal"
props = { title = "Available on iOS and Android", button_text = "Get it now" }

[[templates.items]]
type = "footer"

[[templates]]
id = "template-course"
label = "Online Course"
description = "Sell your knowledge effectively."

[[templates.items]]
type = "banner"
variant = "top"
props = { text = "Early bird discount ends in 24 hours!" }

[[templates.items]]
type = "nav"

[[templates.items]]
type = "video"
variant = "browser"
props = { title = "Course Preview" }

[[templates.items]]
type = "content"
variant = "centered"
props = { title = "What you will learn", content = "This comprehensive course covers everything from basics to advanced techniques. Join thousands of students." }

[[templates.items]]
type = "steps"
props = { title = "Curriculum" }

[[templates.items]]
type = "pricing"
props = { title = "Enroll Now" }

[[templates.items]]
type = "faq"

[[templates.items]]
type = "footer"
"##;

/// Registry of templates, kept in registration order
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Built-in catalog, parsed once
    pub fn builtin() -> &'static TemplateRegistry {
        static BUILTIN: OnceLock<TemplateRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_str(BUILTIN_TEMPLATES).expect("Built-in templates should be valid")
        })
    }

    /// Load templates from a TOML catalog file
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        registry.load_file(path)?;
        Ok(registry)
    }

    /// Load templates from a TOML catalog string
    pub fn from_str(content: &str) -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        registry.load_str(content)?;
        Ok(registry)
    }

    /// Register every template of a TOML catalog file
    pub fn load_file(&mut self, path: &Path) -> Result<(), TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&content)
    }

    /// Register every template of a TOML catalog string
    pub fn load_str(&mut self, content: &str) -> Result<(), TemplateError> {
        let catalog: TomlCatalog = toml::from_str(content)?;
        for entry in catalog.templates {
            let template = convert_template(entry)?;
            self.register(template)?;
        }
        Ok(())
    }

    /// Register a template after checking its variants and props
    pub fn register(&mut self, template: Template) -> Result<(), TemplateError> {
        if self.contains(&template.id) {
            return Err(TemplateError::Duplicate { id: template.id });
        }
        validate(&template)?;
        tracing::debug!(template = %template.id, sections = template.items.len(), "registered template");
        self.templates.push(template);
        Ok(())
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn convert_template(entry: TomlTemplate) -> Result<Template, TemplateError> {
    let mut items = Vec::with_capacity(entry.items.len());
    for item in entry.items {
        let props = FieldValue::table_from_toml(&item.props).map_err(|err| {
            field_error(&entry.id, item.kind, err)
        })?;
        items.push(TemplateItem {
            kind: item.kind,
            variant: item.variant,
            props,
        });
    }
    Ok(Template {
        id: entry.id,
        label: entry.label,
        description: entry.description,
        items,
    })
}

fn validate(template: &Template) -> Result<(), TemplateError> {
    for item in &template.items {
        if let Some(variant) = &item.variant {
            if !item.kind.has_variant(variant) {
                return Err(TemplateError::UnknownVariant {
                    template: template.id.clone(),
                    kind: item.kind,
                    variant: variant.clone(),
                });
            }
        }
        SectionProps::defaults(item.kind)
            .apply_fields(&item.props)
            .map_err(|err| field_error(&template.id, item.kind, err))?;
    }
    Ok(())
}

fn field_error(template: &str, kind: SectionKind, err: FieldError) -> TemplateError {
    let template = template.to_string();
    match err {
        FieldError::Unknown(field) => TemplateError::UnknownField {
            template,
            kind,
            field,
        },
        FieldError::Invalid(field) => TemplateError::InvalidFieldValue {
            template,
            kind,
            field,
        },
    }
}
