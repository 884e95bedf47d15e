//! Siteswap simulator entry point
//!
//! Runs the simulation headless and streams one JSON frame per tick to stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use siteswap_sim::render::{Frame, RenderSink};
use siteswap_sim::sim::{JugglerState, run_ticks};
use siteswap_sim::{SimResult, SimSettings};

#[derive(Debug, Parser)]
#[command(version, about = "Simulate a siteswap juggling pattern")]
struct Cli {
    /// Throw sequence, e.g. 531
    #[arg(required_unless_present = "config")]
    sequence: Option<String>,

    /// JSON settings file (the sequence argument overrides its pattern)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 100)]
    ticks: u64,

    /// Run digit strings that are not valid patterns
    #[arg(long)]
    no_validate: bool,
}

/// Writes each frame as one JSON line
struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &Frame) {
        let written = serde_json::to_writer(&mut self.out, frame)
            .map_err(io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(e) = written {
            log::warn!("Failed to write frame {}: {}", frame.tick, e);
        }
    }
}

fn run(cli: Cli) -> SimResult<()> {
    let mut settings = match &cli.config {
        Some(path) => SimSettings::load(path)?,
        None => SimSettings::default(),
    };
    if let Some(sequence) = cli.sequence {
        settings.sequence = sequence;
    }
    if cli.no_validate {
        settings.validate_pattern = false;
    }

    let mut state = JugglerState::new(settings)?;
    if let Some(count) = state.sequence.object_count() {
        log::info!(
            "{} objects, highest throw peaks {:.1} units above the hands",
            count,
            state.model.peak_height(state.sequence.max_height())
        );
    }

    let stdout = io::stdout();
    let mut sink = JsonLinesSink {
        out: BufWriter::new(stdout.lock()),
    };
    let reports = run_ticks(&mut state, cli.ticks, &mut sink)?;
    sink.out.flush()?;

    let throws: usize = reports.iter().map(|r| r.throws().count()).sum();
    log::info!(
        "Simulated {} ticks ({} beats): {} throws, {} objects",
        cli.ticks,
        state.current_beat() + 1,
        throws,
        state.objects.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Siteswap simulator starting...");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
