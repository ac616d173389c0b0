//! TOML page descriptions
//!
//! A page file seeds a [`PageModel`] with layout and design settings and an
//! ordered list of sections, each either a whole template or one section:
//!
//! ```toml
//! [design]
//! theme = "blue"
//! mode = "light"
//!
//! [[sections]]
//! template = "template-saas"
//!
//! [[sections]]
//! type = "faq"
//! props = { title = "Questions" }
//! style = [{ category = "bg", value = "bg-muted/50" }]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{
    ComponentNode, FieldError, FieldValue, GlobalDesignConfig, LayoutConfig, PageModel,
    SectionKind, SectionProps,
};
use crate::style::DirectiveSet;
use crate::template::TemplateError;

/// Errors that can occur when loading a page file
#[derive(Debug, Error)]
pub enum PageFileError {
    #[error("failed to read page file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse page TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("section {index}: unknown template '{id}'")]
    UnknownTemplate { index: usize, id: String },

    #[error("section {index}: needs either `template` or `type`")]
    MissingKind { index: usize },

    #[error("section {index}: `template` and `type` are mutually exclusive")]
    AmbiguousSection { index: usize },

    #[error("section {index}: variant '{variant}' is not registered for {kind}")]
    UnknownVariant {
        index: usize,
        kind: SectionKind,
        variant: String,
    },

    #[error("section {index}: {kind} has no field '{field}'")]
    UnknownField {
        index: usize,
        kind: SectionKind,
        field: String,
    },

    #[error("section {index}: invalid value for {kind} field '{field}'")]
    InvalidFieldValue {
        index: usize,
        kind: SectionKind,
        field: String,
    },
}

/// One style edit, applied in file order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleStep {
    /// Category name such as `paddingY` or `borderColor`
    pub category: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SectionEntry {
    template: Option<String>,
    #[serde(rename = "type")]
    kind: Option<SectionKind>,
    variant: Option<String>,
    #[serde(default)]
    props: toml::Table,
    classes: Option<String>,
    #[serde(default)]
    style: Vec<StyleStep>,
}

/// A parsed page file, not yet applied to a model
#[derive(Debug, Clone, Deserialize)]
pub struct PageFile {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub design: GlobalDesignConfig,
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

impl PageFile {
    pub fn from_file(path: &Path) -> Result<Self, PageFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| PageFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, PageFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Replace the model's layout and design and append every section.
    ///
    /// Templates are looked up in the model's registry. Nothing is appended
    /// unless every section is valid.
    pub fn apply_to(&self, model: &mut PageModel) -> Result<(), PageFileError> {
        let mut staged: Vec<Staged> = Vec::with_capacity(self.sections.len());
        for (index, entry) in self.sections.iter().enumerate() {
            staged.push(stage(index, entry, model)?);
        }

        *model.layout_mut() = self.layout.clone();
        *model.design_mut() = self.design.clone();
        for item in staged {
            match item {
                Staged::Template(id) => {
                    model.instantiate_template(&id);
                }
                Staged::Section(node, steps) => {
                    let id = model.push_node(node);
                    for step in steps {
                        model.set_style_named(id, &step.category, &step.value);
                    }
                }
            }
        }
        model.deselect();
        debug!(sections = model.components().len(), "page file applied");
        Ok(())
    }

    /// Build a fresh model from this file
    pub fn into_model(self, model: PageModel) -> Result<PageModel, PageFileError> {
        let mut model = model;
        self.apply_to(&mut model)?;
        Ok(model)
    }
}

enum Staged {
    Template(String),
    Section(ComponentNode, Vec<StyleStep>),
}

fn stage(index: usize, entry: &SectionEntry, model: &PageModel) -> Result<Staged, PageFileError> {
    match (&entry.template, entry.kind) {
        (Some(_), Some(_)) => Err(PageFileError::AmbiguousSection { index }),
        (None, None) => Err(PageFileError::MissingKind { index }),
        (Some(id), None) => {
            if !model.templates().contains(id) {
                return Err(PageFileError::UnknownTemplate {
                    index,
                    id: id.clone(),
                });
            }
            Ok(Staged::Template(id.clone()))
        }
        (None, Some(kind)) => {
            let variant = match &entry.variant {
                Some(v) if kind.has_variant(v) => Some(v.clone()),
                Some(v) => {
                    return Err(PageFileError::UnknownVariant {
                        index,
                        kind,
                        variant: v.clone(),
                    })
                }
                None => kind.default_variant().map(str::to_string),
            };
            let fields = FieldValue::table_from_toml(&entry.props)
                .map_err(|err| field_error(index, kind, err))?;
            let mut props = SectionProps::defaults(kind);
            props
                .apply_fields(&fields)
                .map_err(|err| field_error(index, kind, err))?;

            let mut node = ComponentNode::from_parts(props, variant);
            if let Some(classes) = &entry.classes {
                node.style = DirectiveSet::parse(classes);
            }
            Ok(Staged::Section(node, entry.style.clone()))
        }
    }
}

fn field_error(index: usize, kind: SectionKind, err: FieldError) -> PageFileError {
    match err {
        FieldError::Unknown(field) => PageFileError::UnknownField { index, kind, field },
        FieldError::Invalid(field) => PageFileError::InvalidFieldValue { index, kind, field },
    }
}
