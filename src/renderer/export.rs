//! Export entry points and the downloadable file wrapper

use std::io;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::model::PageModel;

use super::codegen::generate;
use super::config::ExportConfig;

/// Generated source paired with the name it is offered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Write into `dir` under the file name, returning the full path
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

/// Exported source of the whole page with default settings
pub fn export_source(model: &PageModel) -> Result<String, GenerateError> {
    export_source_with_config(model, &ExportConfig::default())
}

pub fn export_source_with_config(
    model: &PageModel,
    config: &ExportConfig,
) -> Result<String, GenerateError> {
    generate(
        model.components(),
        model.layout(),
        model.design(),
        &model.resolved_theme(),
        config,
    )
}

/// Exported source wrapped for download
pub fn export_file(model: &PageModel, config: &ExportConfig) -> Result<ExportFile, GenerateError> {
    let contents = export_source_with_config(model, config)?;
    Ok(ExportFile::new(config.file_name.clone(), contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;

    #[test]
    fn test_export_file_named_from_config() {
        let mut page = PageModel::new();
        page.add_component(SectionKind::Cta);
        let file = export_file(&page, &ExportConfig::new().with_component_name("Landing")).unwrap();
        assert_eq!(file.file_name, "Landing.tsx");
        assert!(file.contents.contains("export default function Landing()"));
    }

    #[test]
    fn test_write_to_directory() {
        let dir = std::env::temp_dir().join(format!("page-composer-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = ExportFile::new("Out.tsx", "export {};\n");
        let path = file.write_to(&dir).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {};\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
