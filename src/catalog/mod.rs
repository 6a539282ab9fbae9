pub mod loader;
pub mod registry;
pub mod types;

pub use loader::CatalogLoader;
pub use registry::Registry;
pub use types::{ArtifactKind, Category, CommandDescriptor, PatternRecord};
