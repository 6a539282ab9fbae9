//! Test dispatcher: map a resolved pattern (or nothing, meaning the whole
//! suite) to a test target and delegate execution to an external tool.

use crate::catalog::types::ArtifactKind;
use crate::catalog::Registry;
use crate::{PatternbookError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Exit code reported when a child process is terminated by a signal.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// What the external tool should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestTarget {
    /// The whole suite under the conventional tests root.
    All,
    /// A single test artifact file.
    Artifact(PathBuf),
}

/// Flags forwarded to the external tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestFlags {
    pub coverage: bool,
    pub failfast: bool,
    pub verbose: bool,
}

/// Seam for the external test runner, so the dispatcher's own logic is
/// testable without spawning a process.
pub trait TestTool {
    /// Run the target and return the child's exit code unchanged.
    fn run(&self, target: &TestTarget, flags: &TestFlags, project_root: &Path) -> Result<i32>;
}

/// Maps a resolved (or absent) pattern to a test target and delegates.
pub struct TestDispatcher<'a> {
    registry: &'a Registry,
    tool: &'a dyn TestTool,
}

impl<'a> TestDispatcher<'a> {
    pub fn new(registry: &'a Registry, tool: &'a dyn TestTool) -> Self {
        Self { registry, tool }
    }

    /// Run one pattern's tests, or the whole suite when no name is given.
    /// The tool's exit code streams back as the dispatcher's own outcome.
    pub fn run(&self, name: Option<&str>, flags: &TestFlags) -> Result<i32> {
        let target = match name {
            Some(name) => {
                let record = self
                    .registry
                    .find_by_name(name)
                    .ok_or_else(|| PatternbookError::NotFound(name.to_string()))?;
                let path = self
                    .registry
                    .resolve_artifact_path(&record.id, ArtifactKind::Test)
                    .ok_or_else(|| PatternbookError::TestArtifactMissing {
                        id: record.id.clone(),
                        path: None,
                    })?;
                if !path.exists() {
                    return Err(PatternbookError::TestArtifactMissing {
                        id: record.id.clone(),
                        path: Some(path),
                    });
                }
                TestTarget::Artifact(path)
            }
            None => TestTarget::All,
        };
        self.tool.run(&target, flags, self.registry.project_root())
    }
}

/// The shipped tool: cargo-nextest, wrapped by cargo-llvm-cov when coverage
/// is requested.
pub struct NextestTool;

impl NextestTool {
    /// Program and argv for one invocation. Kept apart from spawning so the
    /// construction is testable.
    fn command(target: &TestTarget, flags: &TestFlags) -> (String, Vec<String>) {
        let (program, mut args) = if flags.coverage {
            (
                "cargo-llvm-cov".to_string(),
                vec!["llvm-cov".to_string(), "nextest".to_string()],
            )
        } else {
            (
                "cargo-nextest".to_string(),
                vec!["nextest".to_string(), "run".to_string()],
            )
        };
        if let TestTarget::Artifact(path) = target {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                args.push("--test".to_string());
                args.push(stem.to_string());
            }
        }
        // Demo output is the point of these tests; keep it visible.
        args.push("--no-capture".to_string());
        if flags.failfast {
            args.push("--fail-fast".to_string());
        }
        if flags.verbose {
            args.push("--status-level".to_string());
            args.push("all".to_string());
        }
        (program, args)
    }
}

impl TestTool for NextestTool {
    fn run(&self, target: &TestTarget, flags: &TestFlags, project_root: &Path) -> Result<i32> {
        let (program, args) = Self::command(target, flags);
        let status = Command::new(&program)
            .args(&args)
            .current_dir(project_root)
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => PatternbookError::ToolNotFound(program.clone()),
                _ => PatternbookError::Execution(e),
            })?;
        Ok(status.code().unwrap_or(INTERRUPTED_EXIT_CODE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn suite_invocation_runs_everything() {
        let (program, args) = NextestTool::command(&TestTarget::All, &TestFlags::default());
        assert_eq!(program, "cargo-nextest");
        assert_eq!(args, ["nextest", "run", "--no-capture"]);
    }

    #[test]
    fn artifact_invocation_targets_the_file_stem() {
        let target = TestTarget::Artifact(PathBuf::from("tests/demo_singleton.rs"));
        let (_, args) = NextestTool::command(&target, &TestFlags::default());
        assert_eq!(
            args,
            ["nextest", "run", "--test", "demo_singleton", "--no-capture"]
        );
    }

    #[test]
    fn failfast_is_forwarded() {
        let flags = TestFlags {
            failfast: true,
            ..TestFlags::default()
        };
        let (_, args) = NextestTool::command(&TestTarget::All, &flags);
        assert!(args.contains(&"--fail-fast".to_string()));
    }

    #[test]
    fn coverage_wraps_the_run_with_llvm_cov() {
        let flags = TestFlags {
            coverage: true,
            ..TestFlags::default()
        };
        let (program, args) = NextestTool::command(&TestTarget::All, &flags);
        assert_eq!(program, "cargo-llvm-cov");
        assert_eq!(args[..2], ["llvm-cov".to_string(), "nextest".to_string()]);
    }
}
