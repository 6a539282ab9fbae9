use serde::Deserialize;

/// One entry of the categories catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Canonical name, unique across the catalog.
    pub name: String,
    /// Localized display name shown in listings.
    pub display_name_localized: String,
}

/// The three artifact kinds a pattern record can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Code,
    Doc,
    Test,
}

/// Entry metadata for a pattern's runnable example.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleSpec {
    #[serde(default = "default_entry_function")]
    pub entry_function: String,
}

impl Default for ExampleSpec {
    fn default() -> Self {
        Self {
            entry_function: default_entry_function(),
        }
    }
}

fn default_entry_function() -> String {
    "main".to_string()
}

/// One entry of the pattern catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternRecord {
    pub id: String,
    pub name_canonical: String,
    pub name_localized: String,
    /// Must reference a loaded `Category::name`; checked at validation.
    pub category: String,
    pub description_localized: String,
    #[serde(default)]
    pub keywords_localized: Vec<String>,
    #[serde(default)]
    pub code_path: Option<String>,
    #[serde(default)]
    pub doc_path: Option<String>,
    #[serde(default)]
    pub test_path: Option<String>,
    #[serde(default)]
    pub example: ExampleSpec,
}

impl PatternRecord {
    /// Relative path of the artifact of the given kind, if declared.
    pub fn artifact_path(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Code => self.code_path.as_deref(),
            ArtifactKind::Doc => self.doc_path.as_deref(),
            ArtifactKind::Test => self.test_path.as_deref(),
        }
    }

    /// Name of the entry symbol inside the code artifact.
    pub fn entry_symbol(&self) -> &str {
        &self.example.entry_function
    }
}

/// Declarative metadata for one CLI-exposed operation. Consumed only by the
/// command overview; the core never reads these.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub summary_localized: String,
    #[serde(default)]
    pub usage: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoriesFile {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PatternsFile {
    #[serde(default)]
    pub patterns: Vec<PatternRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommandsFile {
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}
