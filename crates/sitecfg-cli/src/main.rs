//! sitecfg CLI
//!
//! Resolves the layered settings a static-site build runs with.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::UrlRequest;
use context::SiteContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let ctx = SiteContext::new(cli.dir, cli.publish, cli.layers);

    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            println!("{} Layered static-site settings", "sitecfg".green().bold());
            println!();
            println!("Run {} for available commands.", "sitecfg --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &SiteContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { format } => commands::run_resolve(ctx, format.into()),
        Commands::Get { name, json } => commands::run_get(ctx, &name, json),
        Commands::Explain { json } => commands::run_explain(ctx, json),
        Commands::Layers => commands::run_layers(ctx),
        Commands::Check { strict } => commands::run_check(ctx, strict),
        Commands::Url {
            kind,
            slug,
            date,
            modified,
            lang,
            category,
            author,
        } => commands::run_url(
            ctx,
            &UrlRequest {
                kind: kind.into(),
                slug,
                date,
                modified,
                lang,
                category,
                author,
            },
        ),
        Commands::Export { output, format } => {
            commands::run_export(ctx, &output, format.map(Into::into))
        }
    }
}
