#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod patterns;
mod world;

use clap::Parser;
use life_grid::{Loc, Random};
use log::error;
use pixels_editor_support::{Editor, EditorConfig, animate, log_error};
use std::process::ExitCode;
use std::time::Duration;
use winit::dpi::PhysicalSize;
use world::ConwayWorld;

const TITLE: &str = "Conway's Game of Life";
const WINDOW_PIXEL_WIDTH: u32 = 500;
const WINDOW_PIXEL_HEIGHT: u32 = 500;
const CELL_PIXEL_WIDTH: u32 = 10;
const TIME_STEP_MILLIS: u64 = 16;

/// Paint cells with the mouse (left button spawns, right button kills), then press space to
/// run, q to stop, n to step once, r to randomize, b to blank, g for a glider gun.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Window width.
    #[arg(long, value_name = "PIXELS", default_value_t = WINDOW_PIXEL_WIDTH)]
    width: u32,
    /// Window height.
    #[arg(long, value_name = "PIXELS", default_value_t = WINDOW_PIXEL_HEIGHT)]
    height: u32,
    /// Edge length of one cell's tile, including the one-pixel gap.
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = CELL_PIXEL_WIDTH,
        value_parser = clap::value_parser!(u32).range(2..)
    )]
    tile_size: u32,
    /// Delay between generations while running.
    #[arg(
        long = "step-ms",
        value_name = "MILLISECONDS",
        default_value_t = TIME_STEP_MILLIS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    step_ms: u64,
    /// Seed for randomizing the grid; a fresh seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Top row of the glider gun stamped by g.
    #[arg(long, value_name = "ROW", default_value_t = 1)]
    pattern_row: u32,
    /// Leftmost column of the glider gun stamped by g.
    #[arg(long, value_name = "COL", default_value_t = 1)]
    pattern_col: u32,
}

impl CliArgs {
    fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            title: TITLE.to_string(),
            window_size: PhysicalSize::new(self.width, self.height),
            tile_size: self.tile_size,
            step_interval: Duration::from_millis(self.step_ms),
        }
    }

    fn pattern_origin(&self) -> Loc {
        Loc::new(self.pattern_row, self.pattern_col)
    }

    fn random(&self) -> Random {
        self.seed.map_or_else(Random::new, Random::from_seed)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    let origin = args.pattern_origin();
    let Some(pattern) = patterns::gosper_glider_gun(origin) else {
        error!("Glider gun at {origin:?} runs past the largest grid coordinate");
        return ExitCode::FAILURE;
    };
    let result = animate(args.editor_config(), |grid_size| {
        Editor::new(ConwayWorld::new(grid_size, args.random()), pattern.clone())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error("animate", err);
            ExitCode::FAILURE
        }
    }
}
