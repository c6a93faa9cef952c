use crate::cells::Direction;
use crate::errors::*;
use crate::grid::WallGrid;
use crate::units::GridSize;

use image::{Rgb, RgbImage};
use std::path::Path;

const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const BLUE: Rgb<u8> = Rgb([0, 0, 0xff]);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixel length of one cell side, walls included.
    pub cell_side_pixels_length: u32,
    pub wall_colour: Rgb<u8>,
    pub background_colour: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_side_pixels_length: 10,
            wall_colour: BLUE,
            background_colour: WHITE,
        }
    }
}

pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder { options: RenderOptions::default() }
    }
    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u32) -> Self {
        self.options.cell_side_pixels_length = cell_side_pixels_length;
        self
    }
    pub fn wall_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.wall_colour = colour;
        self
    }
    pub fn background_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.background_colour = colour;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

impl Default for RenderOptionsBuilder {
    fn default() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

/// Top down picture of the maze, one pixel wide lines for every standing wall.
pub fn render_image(grid: &WallGrid, options: &RenderOptions) -> Result<RgbImage> {
    let cell_pixels = options.cell_side_pixels_length;
    if cell_pixels < 2 {
        bail!(ErrorKind::InvalidCellPixels(cell_pixels));
    }
    let GridSize(size) = grid.size();
    let side = (size as u64)
        .checked_mul(u64::from(cell_pixels))
        .and_then(|pixels| pixels.checked_add(1))
        .filter(|pixels| *pixels <= u64::from(u32::MAX))
        .ok_or_else(|| Error::from(ErrorKind::InvalidSize(size)))? as u32;

    let mut img = RgbImage::from_pixel(side, side, options.background_colour);
    let colour = options.wall_colour;

    for cell in grid.iter() {
        let x1 = cell.column * cell_pixels;
        let y1 = cell.row * cell_pixels;
        let x2 = x1 + cell_pixels;
        let y2 = y1 + cell_pixels;

        if grid.has_wall(cell, Direction::Up) {
            draw_horizontal_line(&mut img, x1, x2, y1, colour);
        }
        if grid.has_wall(cell, Direction::Left) {
            draw_vertical_line(&mut img, x1, y1, y2, colour);
        }
        // Inner down/right walls are drawn again as the next cell's up/left wall, which is harmless.
        if grid.has_wall(cell, Direction::Down) {
            draw_horizontal_line(&mut img, x1, x2, y2, colour);
        }
        if grid.has_wall(cell, Direction::Right) {
            draw_vertical_line(&mut img, x2, y1, y2, colour);
        }
    }

    Ok(img)
}

/// Renders the maze and writes it out as a PNG file.
pub fn save_png<P: AsRef<Path>>(grid: &WallGrid, options: &RenderOptions, path: P) -> Result<()> {
    let img = render_image(grid, options)?;
    let path = path.as_ref();
    img.save(path)
        .chain_err(|| format!("Failed to write maze image {}", path.display()))?;
    Ok(())
}

fn draw_horizontal_line(img: &mut RgbImage, x1: u32, x2: u32, y: u32, colour: Rgb<u8>) {
    for x in x1..=x2 {
        img.put_pixel(x, y, colour);
    }
}

fn draw_vertical_line(img: &mut RgbImage, x: u32, y1: u32, y2: u32, colour: Rgb<u8>) {
    for y in y1..=y2 {
        img.put_pixel(x, y, colour);
    }
}
