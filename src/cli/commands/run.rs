use super::{print_cause_chain, print_not_found, CommandHandler, EXIT_OK, EXIT_RUN_FAILED};
use crate::context::Context;
use crate::runner::PatternRunner;
use crate::PatternbookError;

/// Handler for the `run` command.
pub struct RunCommand {
    pub pattern: String,
    pub interactive: bool,
    pub timing: bool,
    pub verbose: bool,
}

impl RunCommand {
    pub fn new(pattern: String, interactive: bool, timing: bool, verbose: bool) -> Self {
        Self {
            pattern,
            interactive,
            timing,
            verbose,
        }
    }
}

impl CommandHandler for RunCommand {
    fn execute(&self, ctx: &Context) -> i32 {
        let runner = PatternRunner::new(ctx.registry());

        let record = match runner.resolve(&self.pattern) {
            Ok(record) => record,
            Err(_) => {
                print_not_found(&self.pattern);
                return EXIT_RUN_FAILED;
            }
        };

        println!("{}", "=".repeat(60));
        println!(
            "running: {} ({})",
            record.name_localized, record.name_canonical
        );
        println!("{}", "=".repeat(60));
        println!();
        if self.interactive {
            println!("[interactive]");
        }

        match runner.invoke(record) {
            Ok(report) => {
                println!();
                if self.timing {
                    println!(
                        "✓ example finished (elapsed: {:.3}s)",
                        report.elapsed.as_secs_f64()
                    );
                } else {
                    println!("✓ example finished");
                }
                EXIT_OK
            }
            Err(err) => {
                println!();
                match &err {
                    PatternbookError::LoadFailed(module) => {
                        println!("✗ error: cannot load example module '{module}'");
                    }
                    PatternbookError::EntryMissing { module, symbol } => {
                        println!("✗ error: '{module}' does not expose entry '{symbol}'");
                    }
                    other => println!("✗ error: {other}"),
                }
                if self.verbose {
                    print_cause_chain(&err);
                }
                EXIT_RUN_FAILED
            }
        }
    }

    fn name(&self) -> &'static str {
        "run"
    }
}
