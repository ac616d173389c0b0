//! Error types for source generation

use thiserror::Error;

use crate::model::SectionKind;

/// A section the generator cannot render.
///
/// Generation stops at the first such section; partial output would no
/// longer match the preview.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("variant '{variant}' is not registered for section kind {kind}")]
    UnknownVariant { kind: SectionKind, variant: String },
}

impl GenerateError {
    /// The section kind that failed to render
    pub fn kind(&self) -> SectionKind {
        match self {
            GenerateError::UnknownVariant { kind, .. } => *kind,
        }
    }
}
