mod error;
mod parser;
mod processor;
mod serialiser;
mod vtt;

use crate::parser::CueParser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vtt_transcript=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[derive(ClapParser, Debug)]
#[command(version, about = "Turn styled WebVTT subtitles into a timestamped transcript")]
struct Cli {
    #[arg(
        value_name = "FILE",
        help = "The WebVTT file to read. The transcript is written next to it as <name>_formatted.txt."
    )]
    input: PathBuf,
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems are reported, not treated as failures.
            err.print()?;
            return Ok(());
        }
    };

    let file = File::open(&cli.input)
        .context(format!("Failed to open input file: '{}'", cli.input.display()))?;
    let cues = CueParser::new()
        .parse_reader(BufReader::new(file))
        .context(format!("Failed to read input file: '{}'", cli.input.display()))?;

    let output = serialiser::output_path(&cli.input);
    serialiser::serialise(&cues, &output)?;

    println!("Done! Transcript saved to {}", output.display());
    Ok(())
}
