pub mod docs;
pub mod list;
pub mod run;
pub mod test;

use crate::context::Context;
use crate::PatternbookError;

/// Process exit codes shared by every command.
pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_RUN_FAILED: i32 = 10;

/// Common trait for all command handlers.
pub trait CommandHandler {
    /// Execute the command and report its exit code. Handlers never
    /// terminate the process themselves.
    fn execute(&self, ctx: &Context) -> i32;

    /// Get command name for logging.
    fn name(&self) -> &'static str;
}

/// Suggestion block shown whenever name resolution fails.
pub(crate) fn print_not_found(name: &str) {
    println!("✗ error: no pattern matches '{name}'");
    println!();
    println!("suggestions:");
    println!("  • run 'patternbook list' to see every available pattern");
    println!("  • check the spelling");
}

/// Under --verbose, print the causal chain below the top-level message.
pub(crate) fn print_cause_chain(err: &PatternbookError) {
    let mut cause = std::error::Error::source(err);
    while let Some(err) = cause {
        println!("  caused by: {err}");
        cause = err.source();
    }
}
