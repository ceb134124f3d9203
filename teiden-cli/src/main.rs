//! teiden binary entry point

use clap::Parser;
use teiden_cli::commands::Commands;

/// Convert planned-outage schedule documents into address lists
#[derive(Debug, Parser)]
#[command(name = "teiden", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
