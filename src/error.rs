use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternbookError {
    #[error("catalog file not found: {}", path.display())]
    CatalogNotFound { path: PathBuf },

    #[error("catalog file {} is malformed: {source}", path.display())]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog validation failed: {0}")]
    CatalogValidation(String),

    #[error("no pattern matches '{0}'")]
    NotFound(String),

    #[error("no runnable artifact is registered as '{0}'")]
    LoadFailed(String),

    #[error("entry symbol '{symbol}' not found in '{module}'")]
    EntryMissing { module: String, symbol: String },

    #[error("example failed: {0}")]
    RuntimeFailed(#[source] anyhow::Error),

    #[error("no documentation available for '{id}'")]
    DocMissing { id: String, path: Option<PathBuf> },

    #[error("section '{0}' not found in document")]
    SectionNotFound(String),

    #[error("no test artifact available for '{id}'")]
    TestArtifactMissing { id: String, path: Option<PathBuf> },

    #[error("test tool '{0}' is not installed")]
    ToolNotFound(String),

    #[error("test invocation failed: {0}")]
    Execution(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PatternbookError>;
