//! Cabins Admin CLI

use std::process;

use clap::Parser;

mod cli;

#[tokio::main]
pub async fn main() {
    _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = cabins_app::logging::init(cli.logging()) {
        eprintln!("failed to initialise logging: {error}");
        process::exit(1);
    }

    match cli.run().await {
        Ok(output) => print!("{output}"),
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}
