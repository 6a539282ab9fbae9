use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// patternbook: catalog-driven design pattern learning tool
#[derive(Parser)]
#[command(name = "patternbook")]
#[command(version)]
#[command(about = "Run, read and test the bundled design pattern examples")]
pub struct Cli {
    /// Show detailed output, including failure causes
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Project root holding config/, docs/ and tests/
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a pattern's example
    Run {
        /// Pattern id or name (canonical or localized)
        pattern: String,

        /// Interactive framing around the example output
        #[arg(short, long)]
        interactive: bool,

        /// Report elapsed execution time
        #[arg(long)]
        timing: bool,
    },

    /// List patterns, optionally restricted to one category
    List {
        /// Category name (canonical or localized)
        category: Option<String>,
    },

    /// Show a pattern's documentation
    Docs {
        /// Pattern id or name (canonical or localized)
        pattern: String,

        /// Show a single section (intent, use_cases, pros_cons, examples,
        /// best_practices)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Run a pattern's tests, or the whole suite
    Test {
        /// Pattern id or name; omit to run every test
        pattern: Option<String>,

        /// Collect coverage through cargo-llvm-cov
        #[arg(long)]
        coverage: bool,

        /// Stop at the first failure
        #[arg(short = 'x', long)]
        failfast: bool,
    },
}
