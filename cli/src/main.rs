//! Command-line generator for the 4-bit processor's ALU EEPROM.
//!
//! Builds the full 8192-entry lookup table and writes it as a flat
//! binary image suitable for an EEPROM programmer.  Optionally also
//! writes a human-readable trace of every table entry.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use alu::build_lut;

mod output;
use output::{write_lut, write_trace, WriteFailed};

/// Generate the ALU look-up table image for the 4-bit processor's EEPROM
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// File to which the EEPROM image is written.
    #[clap(short = 'o', long, default_value = "alu_lut.bin")]
    output: PathBuf,

    /// If given, also write a human-readable trace of every table
    /// entry to this file.
    #[clap(long)]
    log: Option<PathBuf>,
}

fn get_colour_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Tell the user where the image went.  Colour failures are not
/// worth dying for; the message itself still gets printed.
fn announce_success(path: &Path) {
    let mut stream = StandardStream::stdout(get_colour_choice());
    if let Err(e) = stream.set_color(ColorSpec::new().set_fg(Some(termcolor::Color::Green))) {
        event!(Level::WARN, "Failed to set terminal colour: {}", e);
    }
    let result = writeln!(stream, "EEPROM image written to {}", path.display());
    if let Err(e) = stream.reset() {
        event!(Level::WARN, "Failed to reset terminal colour: {}", e);
    }
    if let Err(e) = result {
        event!(Level::ERROR, "Failed to write to stdout: {}", e);
    }
}

fn create_output_file(path: &Path) -> Result<BufWriter<std::fs::File>, WriteFailed> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map(BufWriter::new)
        .map_err(|e| WriteFailed {
            target: path.to_path_buf(),
            error: e,
        })
}

fn run_generator() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Box::new(e));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let lut = build_lut();

    let mut writer = create_output_file(&cli.output)?;
    write_lut(&mut writer, &cli.output, &lut)?;
    event!(
        Level::INFO,
        "wrote {} bytes to {}",
        lut.len(),
        cli.output.display()
    );

    if let Some(log_path) = cli.log.as_deref() {
        let mut log_writer = create_output_file(log_path)?;
        write_trace(&mut log_writer, log_path, &lut)?;
        event!(Level::INFO, "wrote trace log to {}", log_path.display());
    }

    announce_success(&cli.output);
    Ok(())
}

fn main() {
    match run_generator() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
