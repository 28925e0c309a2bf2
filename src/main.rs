use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use svgcrush::{Options, crush_to_svg, crush_with_options, min_file_name};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "svgcrush")]
#[command(about = "Crush an SVG into a single path on a 1000x1000 grid", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-", conflicts_with = "min")]
    output: PathBuf,

    /// Write the result next to the input as <name>.min.<ext>
    #[arg(long)]
    min: bool,

    /// Precision for coordinates (decimal places)
    #[arg(short, long, default_value = "0")]
    precision: u8,

    /// Keep fractional coordinates instead of rounding to the grid
    #[arg(long)]
    no_round: bool,

    /// Emit only the path data instead of a complete SVG document
    #[arg(long)]
    path_data: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "svgcrush=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let from_stdin = cli.input.as_os_str() == "-";
    let input = if from_stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let options = Options {
        precision: cli.precision,
        round: !cli.no_round,
    };

    let output = if cli.path_data {
        crush_with_options(&input, &options)?
    } else {
        crush_to_svg(&input, &options)?
    };

    let destination = if cli.min {
        if from_stdin {
            return Err("--min needs an input file".into());
        }
        PathBuf::from(min_file_name(&cli.input.to_string_lossy()))
    } else {
        cli.output
    };

    if destination.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&destination, &output)?;
        tracing::debug!(path = %destination.display(), "wrote output");
    }

    if cli.stats {
        let input_len = input.len();
        let output_len = output.len();
        let saved = input_len.saturating_sub(output_len);
        let percent = if input_len > 0 {
            (saved as f64 / input_len as f64) * 100.0
        } else {
            0.0
        };
        eprintln!(
            "{} -> {} bytes ({:.1}% smaller)",
            input_len, output_len, percent
        );
    }

    Ok(())
}
