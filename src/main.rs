//! Interactive sorting visualizer.
//!
//! Loops on the text menu, launching a full-screen visualization for
//! each chosen algorithm. Surface failures (for example a terminal the
//! chart cannot be drawn on) are reported and return to the menu; the
//! process itself always exits successfully.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use sortviz::menu::{main_menu, settings_menu, MenuChoice};
use sortviz::prelude::*;
use sortviz::sort::Algorithm;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut out = stdout.lock();
    if let Err(err) = run(&mut reader, &mut out) {
        eprintln!("error: {err}");
    }
    ExitCode::SUCCESS
}

fn run<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> VizResult<()> {
    let mut config = VizConfig::default();
    let mut samples = SampleSource::new(config.seed);

    loop {
        match main_menu(reader, out)? {
            MenuChoice::Run(algorithm) => {
                if let Err(err) = visualize(algorithm, &config, &mut samples) {
                    writeln!(out, "Visualization failed: {err}")?;
                }
            }
            MenuChoice::Settings => settings_menu(reader, out, &mut config)?,
            MenuChoice::Quit => {
                writeln!(out, "Exiting the sorting program.")?;
                return Ok(());
            }
        }
    }
}

fn visualize(
    algorithm: Algorithm,
    config: &VizConfig,
    samples: &mut SampleSource,
) -> VizResult<()> {
    let mut values = samples.generate(config.sample_size, config.shuffle_mode);
    let surface = TerminalSurface::open(algorithm.name(), config.width, config.height)?;
    let mut session = SortSession::new(surface, Duration::from_millis(config.delay_ms));
    session.run(algorithm, &mut values)
}
