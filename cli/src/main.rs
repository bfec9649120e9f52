use std::io::{self, BufRead, Write};

use clap::{Parser, builder::RangedU64ValueParser};
use log::info;
use scramble_core::Scramble;

mod config;
mod display;

use config::Preset;

#[derive(Parser, Debug)]
#[command(version, about = "Prints a random sequence of moves to scramble a cube")]
struct Args {
    /// Selects the move count and pacing
    #[arg(long, value_enum, default_value_t = Preset::Prod)]
    preset: Preset,

    /// Overrides the preset's move count
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    count: Option<usize>,

    /// Print the whole scramble on one line without pauses
    #[arg(long)]
    plain: bool,

    /// Print moves without terminal colors
    #[arg(long)]
    no_color: bool,
}

fn run(
    args: &Args,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> color_eyre::Result<Scramble> {
    let count = args.count.unwrap_or(args.preset.move_count());
    info!("Generating {count} moves with the {:?} preset", args.preset);

    let scramble = scramble_core::generate(count)?;

    if args.plain {
        writeln!(out, "{scramble}")?;
        return Ok(scramble);
    }

    let mut display_config = args.preset.display_config();
    display_config.color = !args.no_color;

    display::play(&scramble, &display_config, out, input)?;

    Ok(scramble)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    run(&args, &mut io::stdout().lock(), &mut io::stdin().lock())?;

    Ok(())
}
