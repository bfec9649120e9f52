use std::time::Duration;

use clap::ValueEnum;

/// How a scramble is generated and paced on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Short scramble printed immediately
    Dev,
    /// Full scramble paced for someone following along with a cube in hand
    Prod,
}

impl Preset {
    pub fn move_count(self) -> usize {
        match self {
            Preset::Dev => 10,
            Preset::Prod => 15,
        }
    }

    pub fn display_config(self) -> DisplayConfig {
        match self {
            Preset::Dev => DisplayConfig {
                initial_delay: Duration::ZERO,
                step_delay: Duration::ZERO,
                pause_at_end: false,
                color: true,
            },
            Preset::Prod => DisplayConfig {
                initial_delay: Duration::from_secs(1),
                step_delay: Duration::from_secs(2),
                pause_at_end: true,
                color: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub initial_delay: Duration,
    /// Time between consecutive moves
    pub step_delay: Duration,
    /// Wait for Enter after the last move so the window doesn't close
    pub pause_at_end: bool,
    pub color: bool,
}
