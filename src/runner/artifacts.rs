//! Registration table for runnable demonstration artifacts.
//!
//! Instead of deriving a dynamic import from the catalog's code path, every
//! demonstration module is registered here under the module reference that
//! the path maps to, together with the entry symbols it exposes. The
//! dispatcher still distinguishes a missing module from a missing symbol.

use crate::demos;

/// A runnable entry point exposed by a demonstration module.
pub type EntryFn = fn() -> anyhow::Result<()>;

/// One registered module and its named entry symbols.
pub struct ArtifactModule {
    pub module_ref: &'static str,
    symbols: &'static [(&'static str, EntryFn)],
}

impl ArtifactModule {
    pub fn symbol(&self, name: &str) -> Option<EntryFn> {
        self.symbols
            .iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|&(_, entry)| entry)
    }
}

static MODULES: &[ArtifactModule] = &[
    ArtifactModule {
        module_ref: "demos::creational::singleton",
        symbols: &[("main", demos::creational::singleton::main)],
    },
    ArtifactModule {
        module_ref: "demos::creational::factory",
        symbols: &[("main", demos::creational::factory::main)],
    },
    ArtifactModule {
        module_ref: "demos::creational::abstract_factory",
        symbols: &[("main", demos::creational::abstract_factory::main)],
    },
    ArtifactModule {
        module_ref: "demos::creational::builder",
        symbols: &[("main", demos::creational::builder::main)],
    },
    ArtifactModule {
        module_ref: "demos::creational::prototype",
        symbols: &[("main", demos::creational::prototype::main)],
    },
    ArtifactModule {
        module_ref: "demos::creational::pool",
        symbols: &[("main", demos::creational::pool::main)],
    },
    ArtifactModule {
        module_ref: "demos::creational::lazy_evaluation",
        symbols: &[("main", demos::creational::lazy_evaluation::main)],
    },
    ArtifactModule {
        module_ref: "demos::behavioral::observer",
        symbols: &[("run_demo", demos::behavioral::observer::run_demo)],
    },
];

/// Look up a registered module by its module reference.
pub fn lookup(module_ref: &str) -> Option<&'static ArtifactModule> {
    MODULES
        .iter()
        .find(|module| module.module_ref == module_ref)
}

/// Derive the loadable module reference from a catalog code path: the
/// conventional `src/` source root and the `.rs` suffix are stripped, and
/// path separators become `::`.
pub fn module_ref_from_path(code_path: &str) -> String {
    let trimmed = code_path
        .strip_prefix("src/")
        .or_else(|| code_path.strip_prefix("src\\"))
        .unwrap_or(code_path);
    let trimmed = trimmed.strip_suffix(".rs").unwrap_or(trimmed);
    trimmed.replace(['/', '\\'], "::")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_maps_to_module_reference() {
        assert_eq!(
            module_ref_from_path("src/demos/creational/singleton.rs"),
            "demos::creational::singleton"
        );
        assert_eq!(
            module_ref_from_path("demos/creational/singleton.rs"),
            "demos::creational::singleton"
        );
        assert_eq!(
            module_ref_from_path("src\\demos\\behavioral\\observer.rs"),
            "demos::behavioral::observer"
        );
        assert_eq!(module_ref_from_path("demos/pool"), "demos::pool");
    }

    #[test]
    fn registered_modules_are_found() {
        let module = lookup("demos::creational::singleton").unwrap();
        assert!(module.symbol("main").is_some());
        assert!(module.symbol("run_demo").is_none());
        assert!(lookup("demos::creational::flyweight").is_none());
    }
}
