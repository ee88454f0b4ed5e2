use std::fmt;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An axis-aligned run between two distinct grid points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSegment {
    start: Coordinate,
    end: Coordinate,
    orientation: Orientation,
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start(), self.end())
    }
}

impl LineSegment {
    pub fn new(start: Coordinate, end: Coordinate) -> Result<Self> {
        let orientation = match (start.x == end.x, start.y == end.y) {
            (false, true) => Orientation::Horizontal,
            (true, false) => Orientation::Vertical,
            _ => return Err(Error::InvalidSegment { start, end }),
        };

        Ok(LineSegment {
            start,
            end,
            orientation,
        })
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The coordinate shared by every point on the segment.
    pub fn fixed(&self) -> i64 {
        match self.orientation {
            Orientation::Horizontal => self.start.y,
            Orientation::Vertical => self.start.x,
        }
    }

    fn varying(&self, coordinate: Coordinate) -> i64 {
        match self.orientation {
            Orientation::Horizontal => coordinate.x,
            Orientation::Vertical => coordinate.y,
        }
    }

    pub fn min(&self) -> i64 {
        self.varying(self.start).min(self.varying(self.end))
    }

    pub fn max(&self) -> i64 {
        self.varying(self.start).max(self.varying(self.end))
    }

    pub fn length(&self) -> u64 {
        (self.max() - self.min()) as u64
    }

    fn spans(&self, value: i64) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Where a horizontal and a vertical segment cross, bounds inclusive.
    /// Parallel segments never cross, even when they overlap.
    pub fn intersection(&self, other: &LineSegment) -> Option<Coordinate> {
        if self.orientation() == other.orientation() {
            return None;
        }

        if !(self.spans(other.fixed()) && other.spans(self.fixed())) {
            return None;
        }

        Some(match self.orientation {
            Orientation::Horizontal => Coordinate::new(other.fixed(), self.fixed()),
            Orientation::Vertical => Coordinate::new(self.fixed(), other.fixed()),
        })
    }

    /// Steps from the start of the segment to a point strictly inside it.
    pub fn position_of(&self, coordinate: Coordinate) -> Result<u64> {
        let fixed = match self.orientation {
            Orientation::Horizontal => coordinate.y,
            Orientation::Vertical => coordinate.x,
        };
        let value = self.varying(coordinate);

        if fixed != self.fixed() || value <= self.min() || value >= self.max() {
            return Err(Error::OutOfRange {
                coordinate,
                segment: *self,
            });
        }

        Ok((value - self.varying(self.start)).abs() as u64)
    }

    /// Every grid point from start to end inclusive.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (start, end) = (self.start(), self.end());
        let (dx, dy) = match self.orientation() {
            Orientation::Horizontal => ((end.x - start.x).signum(), 0),
            Orientation::Vertical => (0, (end.y - start.y).signum()),
        };

        (0..=self.length() as i64).map(move |step| Coordinate::new(start.x + dx * step, start.y + dy * step))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathSegment {
    pub segment: LineSegment,
    pub offset: u64,
}

impl PathSegment {
    pub fn new(segment: LineSegment, offset: u64) -> Self {
        PathSegment { segment, offset }
    }

    /// Steps along the whole path to a point strictly inside this segment.
    pub fn steps_to(&self, coordinate: Coordinate) -> Result<u64> {
        Ok(self.offset + self.segment.position_of(coordinate)?)
    }
}
