//! Phrasevault CLI - memorable passphrase generation and encrypted
//! secret storage.
//!
//! This is the command-line interface for Phrasevault. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod helpers;
mod output;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};
use phrasevault_core::VERSION;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        Some(Commands::Generate(args)) => commands::generate::handle_generate(&ctx, args),
        Some(Commands::List(args)) => commands::list::handle_list(&ctx, args),
        Some(Commands::Show(args)) => commands::show::handle_show(&ctx, args),
        Some(Commands::Delete(args)) => commands::delete::handle_delete(&ctx, args),
        Some(Commands::Clear(args)) => commands::clear::handle_clear(&ctx, args),
        Some(Commands::Export(args)) => commands::exchange::handle_export(&ctx, args),
        Some(Commands::Import(args)) => commands::exchange::handle_import(&ctx, args),
        Some(Commands::Test(args)) => commands::quiz::handle_test(&ctx, args),
        Some(Commands::Completions { shell }) => commands::misc::handle_completions(*shell),
        None => {
            println!("Phrasevault v{}", VERSION);
            println!("\nRun `phrasevault --help` for usage information.");
            Ok(())
        }
    }
}
