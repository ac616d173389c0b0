//! Configuration for source export

/// Configuration options for the exported source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Name of the exported component function
    pub component_name: String,

    /// File name offered for download
    pub file_name: String,

    /// Class scoping the theme declarations to the generated root
    pub scope_class: String,

    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            component_name: "LandingPage".to_string(),
            file_name: "LandingPage.tsx".to_string(),
            scope_class: "page-root".to_string(),
            indent_width: 2,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component name; the file name follows it
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self.file_name = format!("{}.tsx", self.component_name);
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_scope_class(mut self, scope: impl Into<String>) -> Self {
        self.scope_class = scope.into();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub(crate) fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}
