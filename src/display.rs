use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use termion::{clear, color, cursor};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::wire::Wire;

pub trait Screen {
    fn clear(&mut self) -> Result<()>;
    fn paint(&mut self, position: [u16; 2], tile: Tile) -> Result<()>;
}

/// Paints tiles at absolute cursor positions on a terminal.
pub struct Terminal<W: Write> {
    output: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(output: W) -> Self {
        Terminal { output }
    }
}

impl<W: Write> Screen for Terminal<W> {
    fn clear(&mut self) -> Result<()> {
        write!(self.output, "{}", clear::All)?;
        Ok(())
    }

    fn paint(&mut self, [x, y]: [u16; 2], tile: Tile) -> Result<()> {
        write!(self.output, "{}{}", cursor::Goto(x + 1, y + 1), tile)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Reports each tile as a debug event instead of drawing it.
pub struct TileLog {}

impl Screen for TileLog {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn paint(&mut self, [x, y]: [u16; 2], tile: Tile) -> Result<()> {
        debug!(x, y, ?tile, "tile");
        Ok(())
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Tile {
    First,
    Second,
    Crossing,
    Origin,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Tile::*;
        match self {
            First => write!(f, "{}\u{2588}{}", color::Fg(color::Blue), color::Fg(color::Reset)),
            Second => write!(f, "{}\u{2588}{}", color::Fg(color::Green), color::Fg(color::Reset)),
            Crossing => write!(f, "{}X{}", color::Fg(color::Red), color::Fg(color::Reset)),
            Origin => write!(f, "{}O{}", color::Fg(color::Yellow), color::Fg(color::Reset)),
        }
    }
}

/// Lays both wires out on a grid with the top-left corner at [0, 0], north up.
pub fn layout(first: &Wire, second: &Wire) -> HashMap<Coordinate, Tile> {
    let mut tiles: HashMap<Coordinate, Tile> = HashMap::new();

    for (wire, tile) in &[(first, Tile::First), (second, Tile::Second)] {
        let coordinates = wire
            .segments()
            .iter()
            .flat_map(|path_segment| path_segment.segment.coordinates());

        for coordinate in coordinates {
            tiles
                .entry(coordinate)
                .and_modify(|existing| {
                    if *existing != *tile {
                        *existing = Tile::Crossing
                    }
                })
                .or_insert(*tile);
        }
    }

    tiles.insert(Coordinate::origin(), Tile::Origin);
    tiles
}

pub fn draw(first: &Wire, second: &Wire, screen: &mut impl Screen, limit: [u16; 2]) -> Result<()> {
    let tiles = layout(first, second);

    let min_x = tiles.keys().map(|c| c.x).min().unwrap_or(0);
    let max_x = tiles.keys().map(|c| c.x).max().unwrap_or(0);
    let min_y = tiles.keys().map(|c| c.y).min().unwrap_or(0);
    let max_y = tiles.keys().map(|c| c.y).max().unwrap_or(0);

    let width = (max_x - min_x + 1) as u64;
    let height = (max_y - min_y + 1) as u64;
    if width > u64::from(limit[0]) || height > u64::from(limit[1]) {
        return Err(Error::TooLargeToDraw { width, height });
    }

    screen.clear()?;
    for (coordinate, tile) in tiles {
        let position = [(coordinate.x - min_x) as u16, (max_y - coordinate.y) as u16];
        screen.paint(position, tile)?;
    }

    Ok(())
}
