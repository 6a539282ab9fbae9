use super::types::{ArtifactKind, Category, PatternRecord};
use crate::{PatternbookError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Queryable index over the loaded pattern records.
///
/// Built eagerly, once, at context construction. Lookups by id are exact;
/// name lookups go through a lowercased alias map covering both the
/// canonical and the localized name. Iteration follows catalog insertion
/// order.
#[derive(Debug)]
pub struct Registry {
    records: Vec<PatternRecord>,
    by_id: HashMap<String, usize>,
    alias_to_id: HashMap<String, String>,
    categories: Vec<Category>,
    project_root: PathBuf,
}

impl Registry {
    /// Build the index in one pass. A duplicate pattern id, or an alias that
    /// would resolve to two different ids, rejects the whole catalog.
    pub fn build(
        patterns: &[PatternRecord],
        categories: &[Category],
        project_root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let mut records = Vec::with_capacity(patterns.len());
        let mut by_id = HashMap::new();
        let mut alias_to_id: HashMap<String, String> = HashMap::new();

        for pattern in patterns {
            if by_id.contains_key(&pattern.id) {
                return Err(PatternbookError::CatalogValidation(format!(
                    "duplicate pattern id '{}'",
                    pattern.id
                )));
            }
            for alias in [
                pattern.name_canonical.to_lowercase(),
                pattern.name_localized.to_lowercase(),
            ] {
                match alias_to_id.get(&alias) {
                    Some(owner) if owner != &pattern.id => {
                        return Err(PatternbookError::CatalogValidation(format!(
                            "alias '{alias}' is claimed by both '{owner}' and '{}'",
                            pattern.id
                        )));
                    }
                    _ => {
                        alias_to_id.insert(alias, pattern.id.clone());
                    }
                }
            }
            by_id.insert(pattern.id.clone(), records.len());
            records.push(pattern.clone());
        }

        Ok(Self {
            records,
            by_id,
            alias_to_id,
            categories: categories.to_vec(),
            project_root: project_root.into(),
        })
    }

    /// Direct index lookup; no case normalization on the primary key.
    pub fn get_by_id(&self, id: &str) -> Option<&PatternRecord> {
        self.by_id.get(id).map(|&slot| &self.records[slot])
    }

    /// Resolve a free-form name: lowercased id first, then the alias map.
    /// Case-insensitive on both paths; whitespace is not trimmed.
    pub fn find_by_name(&self, name: &str) -> Option<&PatternRecord> {
        let lowered = name.to_lowercase();
        if let Some(record) = self.get_by_id(&lowered) {
            return Some(record);
        }
        self.alias_to_id
            .get(&lowered)
            .and_then(|id| self.get_by_id(id))
    }

    /// All records of one category, in index order. A localized display name
    /// is translated to its canonical form first.
    pub fn get_by_category(&self, category: &str) -> Vec<&PatternRecord> {
        let canonical = self
            .categories
            .iter()
            .find(|c| c.name == category || c.display_name_localized == category)
            .map(|c| c.name.as_str())
            .unwrap_or(category);
        self.records
            .iter()
            .filter(|record| record.category == canonical)
            .collect()
    }

    /// Case-insensitive substring search across id, both names, the
    /// description and every keyword; a record matches if any field matches.
    pub fn search(&self, keyword: &str) -> Vec<&PatternRecord> {
        let needle = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|record| record_matches(record, &needle))
            .collect()
    }

    /// Every record, in index order.
    pub fn all(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter()
    }

    /// Absolute path of a record's artifact, joined against the project
    /// root. File existence is the caller's concern.
    pub fn resolve_artifact_path(&self, id: &str, kind: ArtifactKind) -> Option<PathBuf> {
        let record = self.get_by_id(id)?;
        record
            .artifact_path(kind)
            .map(|relative| self.project_root.join(relative))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

fn record_matches(record: &PatternRecord, needle: &str) -> bool {
    record.id.to_lowercase().contains(needle)
        || record.name_canonical.to_lowercase().contains(needle)
        || record.name_localized.to_lowercase().contains(needle)
        || record.description_localized.to_lowercase().contains(needle)
        || record
            .keywords_localized
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(needle))
}
