use clap::Parser;
use patternbook::{
    cli::{
        commands::{
            docs::DocsCommand, list::ListCommand, run::RunCommand, test::TestCommand,
            CommandHandler, EXIT_ERROR, EXIT_OK,
        },
        Cli, Commands,
    },
    context::Context,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // No catalog, no registry, nothing works: abort early and clearly.
    let ctx = match Context::initialize(cli.root.clone()) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("✗ fatal: {err}");
            return ExitCode::from(EXIT_ERROR as u8);
        }
    };

    let code = match cli.command {
        Some(Commands::Run {
            pattern,
            interactive,
            timing,
        }) => RunCommand::new(pattern, interactive, timing, cli.verbose).execute(&ctx),
        Some(Commands::List { category }) => ListCommand::new(category).execute(&ctx),
        Some(Commands::Docs { pattern, section }) => {
            DocsCommand::new(pattern, section, cli.verbose).execute(&ctx)
        }
        Some(Commands::Test {
            pattern,
            coverage,
            failfast,
        }) => TestCommand::new(pattern, coverage, failfast, cli.verbose).execute(&ctx),
        None => print_overview(&ctx),
    };

    ExitCode::from(code.clamp(0, u8::MAX as i32) as u8)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "patternbook=debug"
    } else {
        "patternbook=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// With no subcommand, show the command overview from the command catalog.
fn print_overview(ctx: &Context) -> i32 {
    match ctx.loader().load_commands() {
        Ok(commands) => {
            println!("available commands:");
            for command in commands {
                let usage = if command.usage.is_empty() {
                    &command.name
                } else {
                    &command.usage
                };
                println!("  {:<34} {}", usage, command.summary_localized);
            }
            println!();
            println!("use 'patternbook <command> --help' for details");
            EXIT_OK
        }
        Err(err) => {
            eprintln!("✗ error: {err}");
            EXIT_ERROR
        }
    }
}
