//! Todo CLI - a small todo-item store with memory and SQLite backends
//!
//! This is the command-line interface for the todo store. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{init, items, misc, request};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::List(args)) => items::handle_list(ctx, args),
        Some(Commands::Show(args)) => items::handle_show(ctx, args),
        Some(Commands::Add(args)) => items::handle_add(ctx, args),
        Some(Commands::Edit(args)) => items::handle_edit(ctx, args),
        Some(Commands::Delete(args)) => items::handle_delete(ctx, args),
        Some(Commands::Request(args)) => request::handle_request(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
