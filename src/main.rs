use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use timeboard::board::{convert, registry, TimeOfDay};
use timeboard::config::BoardConfig;
use timeboard::tui;

#[derive(Parser)]
#[command(name = "timeboard", about = "World clock and timezone converter in the terminal.")]
struct Cli {
    /// Config file (defaults to ~/.timeboard/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a time of day and print the result
    Convert {
        /// Time of day, 24-hour HH:MM
        time: String,
        /// Source timezone id
        #[arg(long = "from", default_value = "America/New_York")]
        source: String,
        /// Target timezone id
        #[arg(long = "to", default_value = "Europe/London")]
        target: String,
    },
    /// Print the curated timezone table
    Zones,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("timeboard=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BoardConfig::load_from(path),
        None => BoardConfig::load(),
    };

    match cli.command {
        Some(Command::Convert { time, source, target }) => {
            let time: TimeOfDay = time.parse()?;
            let converted = convert(Local::now(), time, &source, &target)?;
            println!("{converted}");
        }
        Some(Command::Zones) => {
            for entry in registry::entries() {
                println!("{:<34} {}", entry.label, entry.id);
            }
        }
        None => {
            info!("timeboard starting with {} zones", config.zones.len());
            tui::runner::run_tui(&config).await?;
        }
    }

    Ok(())
}
