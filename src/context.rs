use crate::catalog::{CatalogLoader, Registry};
use crate::{PatternbookError, Result};
use std::path::{Path, PathBuf};

/// Everything a dispatch call needs: the project root, the catalog loader
/// and the built registry. Constructed once at process start and passed by
/// reference; there is no global state.
#[derive(Debug)]
pub struct Context {
    project_root: PathBuf,
    loader: CatalogLoader,
    registry: Registry,
}

impl Context {
    /// Load and validate the catalogs, then build the registry index.
    /// Failures here are fatal to the process: without a catalog nothing
    /// else works.
    pub fn initialize(project_root: impl Into<PathBuf>) -> Result<Self> {
        let project_root = project_root.into();
        let loader = CatalogLoader::new(project_root.join("config"));
        if !loader.validate() {
            return Err(PatternbookError::CatalogValidation(
                "catalog integrity check failed".to_string(),
            ));
        }
        let registry = Registry::build(
            loader.load_patterns()?,
            loader.load_categories()?,
            project_root.clone(),
        )?;
        Ok(Self {
            project_root,
            loader,
            registry,
        })
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_fails_without_catalogs() {
        let dir = tempfile::tempdir().unwrap();
        let err = Context::initialize(dir.path()).unwrap_err();
        assert!(matches!(err, PatternbookError::CatalogValidation(_)));
    }

    #[test]
    fn initialize_builds_a_working_registry_from_the_shipped_catalogs() {
        let ctx = Context::initialize(env!("CARGO_MANIFEST_DIR")).unwrap();
        assert!(ctx.registry().find_by_name("singleton").is_some());
    }
}
