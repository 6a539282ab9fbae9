use super::types::{
    CategoriesFile, Category, CommandDescriptor, CommandsFile, PatternRecord, PatternsFile,
};
use crate::{PatternbookError, Result};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::error;

/// Reads the three catalog files from one configuration directory and caches
/// each after the first successful read. A loader pointed at a different
/// directory is an independent cache domain.
#[derive(Debug)]
pub struct CatalogLoader {
    config_dir: PathBuf,
    categories: OnceCell<Vec<Category>>,
    patterns: OnceCell<Vec<PatternRecord>>,
    commands: OnceCell<Vec<CommandDescriptor>>,
}

impl CatalogLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            categories: OnceCell::new(),
            patterns: OnceCell::new(),
            commands: OnceCell::new(),
        }
    }

    fn read_catalog<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.config_dir.join(file_name);
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PatternbookError::CatalogNotFound { path: path.clone() }
            } else {
                PatternbookError::Io(e)
            }
        })?;
        serde_json::from_str(&contents)
            .map_err(|source| PatternbookError::CatalogFormat { path, source })
    }

    /// Load the categories catalog. An absent or empty `"categories"` key
    /// yields an empty list, not an error.
    pub fn load_categories(&self) -> Result<&[Category]> {
        self.categories
            .get_or_try_init(|| {
                self.read_catalog::<CategoriesFile>("categories.json")
                    .map(|file| file.categories)
            })
            .map(Vec::as_slice)
    }

    /// Load the pattern catalog, with the same empty-tolerant behavior.
    pub fn load_patterns(&self) -> Result<&[PatternRecord]> {
        self.patterns
            .get_or_try_init(|| {
                self.read_catalog::<PatternsFile>("patterns.json")
                    .map(|file| file.patterns)
            })
            .map(Vec::as_slice)
    }

    /// Load the command catalog consumed by the CLI overview.
    pub fn load_commands(&self) -> Result<&[CommandDescriptor]> {
        self.commands
            .get_or_try_init(|| {
                self.read_catalog::<CommandsFile>("commands.json")
                    .map(|file| file.commands)
            })
            .map(Vec::as_slice)
    }

    /// Match a category by canonical name or localized display name; first
    /// match wins.
    pub fn get_category_by_name(&self, name: &str) -> Result<Option<&Category>> {
        let categories = self.load_categories()?;
        Ok(categories
            .iter()
            .find(|c| c.name == name || c.display_name_localized == name))
    }

    /// Check catalog integrity. Reports every failure with the offending
    /// identifier and returns false instead of raising.
    pub fn validate(&self) -> bool {
        let categories = match self.load_categories() {
            Ok(categories) => categories,
            Err(e) => {
                error!("cannot load categories catalog: {e}");
                return false;
            }
        };
        let patterns = match self.load_patterns() {
            Ok(patterns) => patterns,
            Err(e) => {
                error!("cannot load pattern catalog: {e}");
                return false;
            }
        };

        if categories.is_empty() {
            error!("no categories defined in categories.json");
            return false;
        }
        if patterns.is_empty() {
            error!("no patterns defined in patterns.json");
            return false;
        }

        let known: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        let mut ok = true;
        for pattern in patterns {
            if !known.contains(pattern.category.as_str()) {
                error!(
                    "pattern '{}' references unknown category '{}'",
                    pattern.id, pattern.category
                );
                ok = false;
            }
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write_catalogs(dir: &std::path::Path, categories: &str, patterns: &str) {
        fs::write(dir.join("categories.json"), categories).unwrap();
        fs::write(dir.join("patterns.json"), patterns).unwrap();
    }

    const VALID_CATEGORIES: &str = r#"{
        "categories": [
            {"name": "creational", "display_name_localized": "创建型"}
        ]
    }"#;

    const VALID_PATTERNS: &str = r#"{
        "patterns": [
            {
                "id": "singleton",
                "name_canonical": "Singleton",
                "name_localized": "单例模式",
                "category": "creational",
                "description_localized": "确保只有一个实例",
                "code_path": "demos/creational/singleton.rs"
            }
        ]
    }"#;

    #[test]
    fn loads_and_validates_a_consistent_catalog() {
        let dir = tempdir().unwrap();
        write_catalogs(dir.path(), VALID_CATEGORIES, VALID_PATTERNS);

        let loader = CatalogLoader::new(dir.path());
        assert!(loader.validate());
        assert_eq!(loader.load_categories().unwrap().len(), 1);
        assert_eq!(loader.load_patterns().unwrap()[0].id, "singleton");
    }

    #[test]
    fn missing_file_is_catalog_not_found() {
        let dir = tempdir().unwrap();
        let loader = CatalogLoader::new(dir.path());

        let err = loader.load_categories().unwrap_err();
        assert!(matches!(err, PatternbookError::CatalogNotFound { .. }));
    }

    #[test]
    fn malformed_json_is_catalog_format_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("patterns.json"), "{not json").unwrap();

        let loader = CatalogLoader::new(dir.path());
        let err = loader.load_patterns().unwrap_err();
        match err {
            PatternbookError::CatalogFormat { path, .. } => {
                assert!(path.ends_with("patterns.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absent_top_level_key_yields_empty_list() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("categories.json"), "{}").unwrap();

        let loader = CatalogLoader::new(dir.path());
        assert!(loader.load_categories().unwrap().is_empty());
    }

    #[test]
    fn validate_rejects_empty_categories() {
        let dir = tempdir().unwrap();
        write_catalogs(dir.path(), r#"{"categories": []}"#, VALID_PATTERNS);

        let loader = CatalogLoader::new(dir.path());
        assert!(!loader.validate());
    }

    #[test]
    fn validate_rejects_unknown_pattern_category() {
        let dir = tempdir().unwrap();
        let patterns = r#"{
            "patterns": [
                {
                    "id": "singleton",
                    "name_canonical": "Singleton",
                    "name_localized": "单例模式",
                    "category": "unknown",
                    "description_localized": "确保只有一个实例"
                }
            ]
        }"#;
        write_catalogs(dir.path(), VALID_CATEGORIES, patterns);

        let loader = CatalogLoader::new(dir.path());
        assert!(!loader.validate());
    }

    #[test]
    fn category_lookup_matches_canonical_and_localized_names() {
        let dir = tempdir().unwrap();
        write_catalogs(dir.path(), VALID_CATEGORIES, VALID_PATTERNS);

        let loader = CatalogLoader::new(dir.path());
        let by_canonical = loader.get_category_by_name("creational").unwrap().unwrap();
        let by_localized = loader.get_category_by_name("创建型").unwrap().unwrap();
        assert_eq!(by_canonical, by_localized);
        assert!(loader.get_category_by_name("nope").unwrap().is_none());
    }

    #[test]
    fn catalogs_are_read_once_per_loader() {
        let dir = tempdir().unwrap();
        write_catalogs(dir.path(), VALID_CATEGORIES, VALID_PATTERNS);

        let loader = CatalogLoader::new(dir.path());
        assert_eq!(loader.load_patterns().unwrap().len(), 1);

        // Rewriting the file must not change the already-cached result.
        fs::write(dir.path().join("patterns.json"), r#"{"patterns": []}"#).unwrap();
        assert_eq!(loader.load_patterns().unwrap().len(), 1);

        // A fresh loader over the same directory sees the new content.
        let fresh = CatalogLoader::new(dir.path());
        assert!(fresh.load_patterns().unwrap().is_empty());
    }
}
