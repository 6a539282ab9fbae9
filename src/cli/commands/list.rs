use super::{CommandHandler, EXIT_ERROR, EXIT_OK};
use crate::catalog::types::{Category, PatternRecord};
use crate::context::Context;

/// Handler for the `list` command.
pub struct ListCommand {
    pub category: Option<String>,
}

impl ListCommand {
    pub fn new(category: Option<String>) -> Self {
        Self { category }
    }

    fn print_group(category: &Category, patterns: &[&PatternRecord]) {
        println!();
        println!(
            "{} ({} Patterns)",
            category.display_name_localized,
            capitalize(&category.name)
        );
        println!("{}", "━".repeat(60));

        if patterns.is_empty() {
            println!("(no patterns available)");
            return;
        }

        println!("{:<20} {:<15} description", "id", "name");
        println!("{}", "─".repeat(60));
        for pattern in patterns {
            let description: String = pattern.description_localized.chars().take(30).collect();
            println!(
                "{:<20} {:<15} {}",
                pattern.id, pattern.name_localized, description
            );
        }
        println!();
        println!("{} patterns total", patterns.len());
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> i32 {
        match &self.category {
            Some(name) => {
                let category = match ctx.loader().get_category_by_name(name) {
                    Ok(Some(category)) => category,
                    Ok(None) => {
                        println!("✗ error: no category named '{name}'");
                        return EXIT_ERROR;
                    }
                    Err(err) => {
                        println!("✗ error: {err}");
                        return EXIT_ERROR;
                    }
                };
                let patterns = ctx.registry().get_by_category(&category.name);
                Self::print_group(category, &patterns);
                EXIT_OK
            }
            None => {
                let categories = match ctx.loader().load_categories() {
                    Ok(categories) => categories,
                    Err(err) => {
                        println!("✗ error: {err}");
                        return EXIT_ERROR;
                    }
                };
                for category in categories {
                    let patterns = ctx.registry().get_by_category(&category.name);
                    if patterns.is_empty() {
                        continue;
                    }
                    Self::print_group(category, &patterns);
                }
                EXIT_OK
            }
        }
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
