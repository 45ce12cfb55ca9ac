use clap::{Parser, Subcommand};
use git_stager::commands::*;
use git_stager::core::{config::ColorWhen, error::Result, print_error};

#[derive(Parser)]
#[command(name = "git-stager")]
#[command(about = "Interactively stage and unstage changes by number or name")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// When to color menus and prompts
    #[arg(long, global = true, value_enum)]
    color: Option<ColorWhen>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show staged and unstaged line counts per changed path
    Status,
    /// Open the interactive command menu (default)
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; RUST_LOG still wins
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let result: Result<()> = match cli.command {
        Some(Commands::Status) => execute_status(cli.color),
        Some(Commands::Interactive) | None => execute_interactive(cli.color),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
