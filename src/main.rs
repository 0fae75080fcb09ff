//! Roster CLI entry point.

use clap::Parser;

use roster::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = roster::cli::run(cli).await {
        roster::cli::handle_error(err, json);
    }
}
