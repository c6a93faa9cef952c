use docopt::Docopt;
use log::info;
use maze_walk::{
    carver::MazeCarver,
    driver::{Driver, StepBudget},
    layout::{self, LayoutConfig},
    random,
    renderers,
    units::GridSize,
    verify,
};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    time::Duration,
};

const USAGE: &str = "Maze walk

Usage:
    maze_walk_driver -h | --help
    maze_walk_driver [--grid-size=<n>] [--seed=<s>] [--steps-per-tick=<n> | --tick-millis=<ms>] [--show-progress] [--text-out=<path>] [--image-out=<path>] [--cell-pixels=<n>] [--corridor-width=<w>] [--wall-thickness=<t>] [--wall-height=<h>]

Options:
    -h --help               Show this screen.
    --grid-size=<n>         The grid size is n * n [default: 50].
    --seed=<s>              Seed for the random walk. Random if not given.
    --steps-per-tick=<n>    Take n carving steps between progress reports.
    --tick-millis=<ms>      Carve for ms milliseconds between progress reports [default: 10].
    --show-progress         Print the partially carved maze after every tick.
    --text-out=<path>       Output file path for a textual rendering of the maze.
    --image-out=<path>      Output file path for a PNG rendering of the maze.
    --cell-pixels=<n>       Pixel count to render one cell wall in an image [default: 10].
    --corridor-width=<w>    Width of a corridor in the 3D layout [default: 2.0].
    --wall-thickness=<t>    Thickness of a wall in the 3D layout [default: 0.5].
    --wall-height=<h>       Height of a wall in the 3D layout [default: 2.0].

Without --text-out or --image-out the maze is printed to stdout.
Set RUST_LOG=debug to follow the carving, RUST_LOG=trace for every step.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: usize,
    flag_seed: Option<u64>,
    flag_steps_per_tick: Option<usize>,
    flag_tick_millis: u64,
    flag_show_progress: bool,
    flag_text_out: String,
    flag_image_out: String,
    flag_cell_pixels: u32,
    flag_corridor_width: f32,
    flag_wall_thickness: f32,
    flag_wall_height: f32,
}

impl MazeArgs {
    fn step_budget(&self) -> StepBudget {
        match self.flag_steps_per_tick {
            Some(steps) => StepBudget::Steps(steps),
            None => StepBudget::Time(Duration::from_millis(self.flag_tick_millis)),
        }
    }

    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            corridor_width: self.flag_corridor_width,
            wall_thickness: self.flag_wall_thickness,
            wall_height: self.flag_wall_height,
        }
    }
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {
        links {
            Maze(::maze_walk::errors::Error, ::maze_walk::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let rng = match args.flag_seed {
        Some(seed) => random::seeded_rng(seed),
        None => random::entropy_rng(),
    };
    let mut carver = MazeCarver::new(GridSize(args.flag_grid_size), rng)
        .chain_err(|| format!("Cannot carve a maze of size {}", args.flag_grid_size))?;

    carve(&mut carver, &args);

    verify::verify_perfect_maze(carver.grid()).chain_err(|| "Carving produced a broken maze")?;

    let blocks = layout::build_scene(carver.grid(), &args.layout_config());
    for (kind, count) in layout::summarise(&blocks) {
        info!("scene layout: {} x {:?}", count, kind);
    }

    let no_output_path = args.flag_text_out.is_empty() && args.flag_image_out.is_empty();
    if no_output_path {
        println!("{}", carver.grid());
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&format!("{}", carver.grid()), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_image_out.is_empty() {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .build();
        renderers::save_png(carver.grid(), &render_options, &args.flag_image_out)?;
    }

    Ok(())
}

fn carve(carver: &mut MazeCarver<XorShiftRng>, args: &MazeArgs) {
    let mut driver = Driver::new(args.step_budget());
    let show_progress = args.flag_show_progress;
    let _ = driver.run(carver, |carver, report| {
        if show_progress {
            println!("tick {} ({} of {} cells)\n{}",
                     report.tick,
                     report.visited.0,
                     carver.grid().cells_count().0,
                     carver);
        }
    });
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
