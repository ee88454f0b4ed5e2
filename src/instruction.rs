use std::convert::TryFrom;
use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        use Direction::*;
        match c {
            'U' => Ok(Up),
            'D' => Ok(Down),
            'L' => Ok(Left),
            'R' => Ok(Right),
            _ => Err(format!("invalid direction '{}', must be L, R, U or D", c)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Direction,
    pub distance: u16,
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let token = data.trim();
        let invalid = |reason: String| Error::Parse {
            token: token.to_string(),
            reason,
        };

        let mut chars = token.chars();
        let direction = chars
            .next()
            .ok_or_else(|| "empty instruction".to_string())
            .and_then(Direction::try_from)
            .map_err(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(format!("invalid distance '{}'", digits)));
        }
        let distance = digits
            .parse::<u16>()
            .map_err(|err| invalid(format!("invalid distance: {}", err)))?;

        Ok(Instruction {
            direction,
            distance,
        })
    }
}

impl Instruction {
    pub fn apply_to(self, start: Coordinate) -> Coordinate {
        use Direction::*;
        let distance = i64::from(self.distance);
        match self.direction {
            Up => Coordinate::new(start.x, start.y + distance),
            Down => Coordinate::new(start.x, start.y - distance),
            Left => Coordinate::new(start.x - distance, start.y),
            Right => Coordinate::new(start.x + distance, start.y),
        }
    }
}
