use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::segment::LineSegment;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid instruction '{token}': {reason}")]
    Parse { token: String, reason: String },

    #[error("Invalid segment from {start} to {end}: must differ along exactly one axis")]
    InvalidSegment { start: Coordinate, end: Coordinate },

    #[error("{coordinate} is not inside segment {segment}")]
    OutOfRange {
        coordinate: Coordinate,
        segment: LineSegment,
    },

    #[error("Missing wire {index} in input")]
    MissingWire { index: usize },

    #[error("Wires do not intersect")]
    NoIntersection,

    #[error("Wires span {width}x{height}, too large to draw")]
    TooLargeToDraw { width: u64, height: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
