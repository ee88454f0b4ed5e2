use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Coordinate { x, y }
    }

    pub fn origin() -> Self {
        Coordinate::new(0, 0)
    }

    pub fn manhattan_distance(self) -> u64 {
        self.x.abs() as u64 + self.y.abs() as u64
    }
}
