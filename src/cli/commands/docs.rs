use super::{print_cause_chain, print_not_found, CommandHandler, EXIT_ERROR, EXIT_OK};
use crate::context::Context;
use crate::viewer::DocViewer;
use crate::PatternbookError;

/// Handler for the `docs` command.
pub struct DocsCommand {
    pub pattern: String,
    pub section: Option<String>,
    pub verbose: bool,
}

impl DocsCommand {
    pub fn new(pattern: String, section: Option<String>, verbose: bool) -> Self {
        Self {
            pattern,
            section,
            verbose,
        }
    }
}

impl CommandHandler for DocsCommand {
    fn execute(&self, ctx: &Context) -> i32 {
        let viewer = DocViewer::new(ctx.registry());
        match viewer.view(&self.pattern, self.section.as_deref()) {
            Ok(view) => {
                println!("{}", "━".repeat(60));
                println!("{} ({})", view.name_localized, view.name_canonical);
                println!("{}", "━".repeat(60));
                println!();
                println!("{}", view.body);
                println!();
                println!("{}", "━".repeat(60));
                EXIT_OK
            }
            Err(PatternbookError::NotFound(_)) => {
                print_not_found(&self.pattern);
                EXIT_ERROR
            }
            Err(err) => {
                println!("✗ error: {err}");
                if self.verbose {
                    if let PatternbookError::DocMissing {
                        path: Some(path), ..
                    } = &err
                    {
                        println!("  expected path: {}", path.display());
                    }
                    print_cause_chain(&err);
                }
                EXIT_ERROR
            }
        }
    }

    fn name(&self) -> &'static str {
        "docs"
    }
}
