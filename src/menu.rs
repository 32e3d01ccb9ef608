//! Interactive text menus.
//!
//! The menus are generic over their reader and writer so tests can
//! drive them with in-memory buffers. All I/O errors propagate; end of
//! input is treated as a request to leave the current menu.

use std::io::{BufRead, Write};

use crate::config::{ShuffleMode, VizConfig, WINDOW_PRESETS};
use crate::error::VizResult;
use crate::sort::Algorithm;

/// Outcome of one main-menu round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Visualize the chosen algorithm.
    Run(Algorithm),
    /// Enter the settings menu.
    Settings,
    /// Leave the program.
    Quit,
}

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Value(i64),
    Invalid,
    Eof,
}

fn read_entry<R: BufRead>(reader: &mut R) -> VizResult<Entry> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Entry::Eof);
    }
    match line.trim().parse::<i64>() {
        Ok(value) => Ok(Entry::Value(value)),
        Err(_) => Ok(Entry::Invalid),
    }
}

/// Show the algorithm menu and read a choice.
///
/// Re-prompts on anything that is not a number or not a listed option.
/// End of input quits.
pub fn main_menu<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> VizResult<MenuChoice> {
    writeln!(
        out,
        "Choose sorting algorithm:\n\t1 - SelectSort\n\t2 - BubbleSort\n\t3 - InsertionSort\n\t4 - QuickSort\n\t5 - MergeSort\n\t6 - Settings\n\t9 - Exit"
    )?;
    loop {
        match read_entry(reader)? {
            Entry::Eof => return Ok(MenuChoice::Quit),
            Entry::Value(9) => return Ok(MenuChoice::Quit),
            Entry::Value(6) => return Ok(MenuChoice::Settings),
            Entry::Value(index) => {
                if let Some(algorithm) = Algorithm::from_menu_index(index) {
                    return Ok(MenuChoice::Run(algorithm));
                }
                writeln!(out, "Invalid input. Please enter a number.")?;
            }
            Entry::Invalid => writeln!(out, "Invalid input. Please enter a number.")?,
        }
    }
}

/// Show the settings menu and apply changes until the user backs out.
pub fn settings_menu<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &mut VizConfig,
) -> VizResult<()> {
    loop {
        writeln!(out, "\n=== Visualizer Settings ===")?;
        writeln!(out, "Current size: {}x{}", config.width, config.height)?;
        writeln!(out, "Current delay: {} ms", config.delay_ms)?;
        writeln!(out, "Choose an option:")?;
        for (index, (width, height)) in WINDOW_PRESETS.iter().enumerate() {
            writeln!(out, " {} - {width} x {height}", index + 1)?;
        }
        writeln!(out, " 5 - Custom size")?;
        writeln!(out, " 6 - Change delay (ms)")?;
        writeln!(out, " 7 - Change sample size")?;
        writeln!(out, " 8 - Change type of shuffle")?;
        writeln!(out, " 9 - Back")?;
        write!(out, "Your choice: ")?;
        out.flush()?;

        match read_entry(reader)? {
            Entry::Eof | Entry::Value(9) => return Ok(()),
            Entry::Invalid => writeln!(out, "Invalid input")?,
            Entry::Value(index @ 1..=4) => {
                let (width, height) = WINDOW_PRESETS[(index - 1) as usize];
                config.set_window_size(i64::from(width), i64::from(height));
            }
            Entry::Value(5) => prompt_custom_size(reader, out, config)?,
            Entry::Value(6) => prompt_delay(reader, out, config)?,
            Entry::Value(7) => prompt_sample_size(reader, out, config)?,
            Entry::Value(8) => prompt_shuffle_mode(reader, out, config)?,
            Entry::Value(_) => writeln!(out, "Unknown option")?,
        }
    }
}

/// Read custom dimensions. A bad or non-positive axis keeps the
/// previous value for that axis.
fn prompt_custom_size<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &mut VizConfig,
) -> VizResult<()> {
    write!(out, "Enter width: ")?;
    out.flush()?;
    let width = match read_entry(reader)? {
        Entry::Value(value) => value,
        Entry::Invalid => {
            writeln!(out, "Bad input")?;
            0
        }
        Entry::Eof => return Ok(()),
    };
    write!(out, "Enter height: ")?;
    out.flush()?;
    let height = match read_entry(reader)? {
        Entry::Value(value) => value,
        Entry::Invalid => {
            writeln!(out, "Bad input")?;
            0
        }
        Entry::Eof => return Ok(()),
    };
    config.set_window_size(width, height);
    Ok(())
}

fn prompt_delay<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &mut VizConfig,
) -> VizResult<()> {
    write!(out, "Enter delay in ms (0 for very fast): ")?;
    out.flush()?;
    match read_entry(reader)? {
        Entry::Value(value) => config.set_delay_ms(value.max(0) as u64),
        Entry::Invalid => writeln!(out, "Bad input")?,
        Entry::Eof => {}
    }
    Ok(())
}

fn prompt_sample_size<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &mut VizConfig,
) -> VizResult<()> {
    write!(out, "Enter sample size: ")?;
    out.flush()?;
    loop {
        match read_entry(reader)? {
            Entry::Value(value) if config.set_sample_size(value).is_ok() => return Ok(()),
            Entry::Eof => return Ok(()),
            _ => {
                write!(out, "Sample size must be positive. Please enter again: ")?;
                out.flush()?;
            }
        }
    }
}

fn prompt_shuffle_mode<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    config: &mut VizConfig,
) -> VizResult<()> {
    writeln!(out, "Choose type of shuffle before sort:")?;
    for mode in ShuffleMode::ALL {
        writeln!(out, " {} - {}", mode.index(), mode.label())?;
    }
    write!(out, "Your choice: ")?;
    out.flush()?;
    loop {
        match read_entry(reader)? {
            Entry::Value(index) => {
                if let Some(mode) = ShuffleMode::from_index(index) {
                    config.set_shuffle_mode(mode);
                    return Ok(());
                }
                write!(out, "Invalid choice. Please enter again: ")?;
                out.flush()?;
            }
            Entry::Invalid => {
                write!(out, "Invalid choice. Please enter again: ")?;
                out.flush()?;
            }
            Entry::Eof => return Ok(()),
        }
    }
}
