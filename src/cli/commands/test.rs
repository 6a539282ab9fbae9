use super::{print_cause_chain, print_not_found, CommandHandler, EXIT_ERROR};
use crate::context::Context;
use crate::testrun::{NextestTool, TestDispatcher, TestFlags};
use crate::PatternbookError;

/// Handler for the `test` command.
pub struct TestCommand {
    pub pattern: Option<String>,
    pub coverage: bool,
    pub failfast: bool,
    pub verbose: bool,
}

impl TestCommand {
    pub fn new(pattern: Option<String>, coverage: bool, failfast: bool, verbose: bool) -> Self {
        Self {
            pattern,
            coverage,
            failfast,
            verbose,
        }
    }
}

impl CommandHandler for TestCommand {
    fn execute(&self, ctx: &Context) -> i32 {
        println!("{}", "━".repeat(60));
        match self.pattern.as_deref() {
            Some(name) => match ctx.registry().find_by_name(name) {
                Some(record) => println!("running tests: {}", record.name_localized),
                None => {
                    print_not_found(name);
                    return EXIT_ERROR;
                }
            },
            None => println!("running the whole test suite"),
        }
        println!("{}", "━".repeat(60));
        println!();

        let tool = NextestTool;
        let dispatcher = TestDispatcher::new(ctx.registry(), &tool);
        let flags = TestFlags {
            coverage: self.coverage,
            failfast: self.failfast,
            verbose: self.verbose,
        };

        match dispatcher.run(self.pattern.as_deref(), &flags) {
            Ok(code) => {
                println!();
                if code == 0 {
                    println!("✓ all tests passed");
                } else {
                    println!("✗ some tests failed");
                }
                code
            }
            Err(PatternbookError::ToolNotFound(tool)) => {
                println!("✗ error: '{tool}' is not installed");
                println!();
                println!("install it with:");
                println!("  cargo install cargo-nextest");
                if self.coverage {
                    println!("  cargo install cargo-llvm-cov");
                }
                EXIT_ERROR
            }
            Err(err) => {
                println!("✗ error: {err}");
                if self.verbose {
                    print_cause_chain(&err);
                }
                EXIT_ERROR
            }
        }
    }

    fn name(&self) -> &'static str {
        "test"
    }
}
