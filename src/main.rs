use clap::Parser;
use duelist::cli::commands::Cli;
use duelist::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = duelist::tui::run(cli.url.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
