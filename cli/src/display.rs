use std::{
    io::{self, BufRead, Write},
    thread,
};

use owo_colors::OwoColorize;
use scramble_core::{Scramble, ScrambleEntry};

use crate::config::DisplayConfig;

/// Show a scramble one numbered step at a time, oldest move first
pub fn play(
    scramble: &Scramble,
    config: &DisplayConfig,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> io::Result<()> {
    thread::sleep(config.initial_delay);

    for (i, entry) in scramble.iter().enumerate() {
        if i > 0 {
            thread::sleep(config.step_delay);
        }

        write_step(out, i + 1, entry, config.color)?;
        out.flush()?;
    }

    if config.pause_at_end {
        write!(out, "Press Enter to continue...")?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
    }

    Ok(())
}

fn write_step(
    out: &mut impl Write,
    n: usize,
    entry: &ScrambleEntry,
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(
            out,
            "\t{n}. {}{}",
            entry.annotation().yellow(),
            entry.symbol().bold()
        )?;
        writeln!(out, "\t    {}\n", entry.direction().cyan())
    } else {
        writeln!(out, "\t{n}. {entry}")?;
        writeln!(out, "\t    {}\n", entry.direction())
    }
}
