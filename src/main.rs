use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use fimon::cli::{Cli, Commands};
use fimon::output::{self, Verbosity};
use fimon::{FimContext, commands};
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    fimon::logging::init_logging(cli.verbose);
    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return;
    };

    if let Err(e) = run(command) {
        output::error(&format!("Error: {e:#}"));
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    if let Commands::Completion { shell } = command {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let ctx = FimContext::new()?;
    let result = dispatch(&ctx, command);
    if let Err(e) = &result {
        commands::log_failure(&ctx, e);
    }
    result
}

fn dispatch(ctx: &FimContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init { listfile } => {
            commands::init::execute(ctx, &ctx.list_or_default(listfile))?;
        }
        Commands::Check { listfile } => {
            // Findings are reported through the event log; an alert is not a failure.
            commands::check::execute(ctx, &ctx.list_or_default(listfile))?;
        }
        Commands::Add { path, listfile } => {
            commands::add::execute(ctx, &path, &ctx.list_or_default(listfile))?;
        }
        Commands::Remove { path, listfile } => {
            commands::remove::execute(ctx, &path, &ctx.list_or_default(listfile))?;
        }
        Commands::List { listfile } => {
            commands::list::execute(ctx, &ctx.list_or_default(listfile))?;
        }
        Commands::Completion { .. } => {}
    }
    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
