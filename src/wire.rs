use std::collections::HashMap;
use std::io::BufRead;
use std::str::FromStr;

use itertools::iproduct;
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::segment::{LineSegment, PathSegment};

/// Folds instructions into the segments they trace out from `start`.
pub fn line_segments(
    instructions: impl IntoIterator<Item = Instruction>,
    start: Coordinate,
) -> impl Iterator<Item = Result<LineSegment>> {
    instructions
        .into_iter()
        .scan(start, |position, instruction| {
            let start = *position;
            *position = instruction.apply_to(start);
            Some(LineSegment::new(start, *position))
        })
}

/// Tags each segment with the number of steps taken before reaching it.
pub fn path_segments(
    segments: impl IntoIterator<Item = LineSegment>,
) -> impl Iterator<Item = PathSegment> {
    segments.into_iter().scan(0, |offset, segment| {
        let path_segment = PathSegment::new(segment, *offset);
        *offset += segment.length();
        Some(path_segment)
    })
}

pub struct Wire {
    segments: Box<[PathSegment]>,
}

impl FromStr for Wire {
    type Err = Error;

    fn from_str(data: &str) -> Result<Self> {
        let instructions = data
            .trim()
            .split(',')
            .map(Instruction::from_str)
            .collect::<Result<Vec<_>>>()?;

        Wire::from_instructions(instructions)
    }
}

impl Wire {
    pub fn from_instructions(instructions: impl IntoIterator<Item = Instruction>) -> Result<Self> {
        let segments = line_segments(instructions, Coordinate::origin()).collect::<Result<Vec<_>>>()?;

        Ok(Wire {
            segments: path_segments(segments).collect::<Vec<_>>().into_boxed_slice(),
        })
    }

    pub fn read(mut input: impl BufRead, index: usize) -> Result<Self> {
        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 || buffer.trim().is_empty() {
            return Err(Error::MissingWire { index });
        }

        let wire: Wire = buffer.parse()?;
        debug!(index, segments = wire.segments.len(), length = wire.length(), "read wire");
        Ok(wire)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn length(&self) -> u64 {
        self.segments
            .last()
            .map_or(0, |last| last.offset + last.segment.length())
    }

    /// Every point where the two wires cross, with the fewest combined steps
    /// either wire takes to get there. The shared origin is not a crossing;
    /// any other crossing on a segment's own endpoint is an error.
    pub fn intersections(&self, other: &Wire) -> Result<HashMap<Coordinate, u64>> {
        let mut intersections = HashMap::new();

        for (a, b) in iproduct!(self.segments.iter(), other.segments.iter()) {
            let coordinate = match a.segment.intersection(&b.segment) {
                Some(coordinate) if coordinate == Coordinate::origin() => continue,
                Some(coordinate) => coordinate,
                None => continue,
            };

            let steps = a.steps_to(coordinate)? + b.steps_to(coordinate)?;

            intersections
                .entry(coordinate)
                .and_modify(|existing: &mut u64| {
                    debug!(%coordinate, steps, existing = *existing, "repeated crossing");
                    *existing = (*existing).min(steps);
                })
                .or_insert(steps);
        }

        debug!(count = intersections.len(), "found intersections");
        Ok(intersections)
    }
}

pub fn closest_distance(intersections: &HashMap<Coordinate, u64>) -> Result<u64> {
    intersections
        .keys()
        .map(|coordinate| coordinate.manhattan_distance())
        .min()
        .ok_or(Error::NoIntersection)
}

pub fn fewest_steps(intersections: &HashMap<Coordinate, u64>) -> Result<u64> {
    intersections
        .values()
        .copied()
        .min()
        .ok_or(Error::NoIntersection)
}

#[cfg(test)]
mod test {
    use super::*;

    fn answers(first: &str, second: &str) -> (u64, u64) {
        let first: Wire = first.parse().unwrap();
        let second: Wire = second.parse().unwrap();
        let intersections = first.intersections(&second).unwrap();
        (
            closest_distance(&intersections).unwrap(),
            fewest_steps(&intersections).unwrap(),
        )
    }

    #[test]
    fn example_1() {
        assert_eq!(answers("R8,U5,L5,D3", "U7,R6,D4,L4"), (6, 30));
    }

    #[test]
    fn example_2() {
        assert_eq!(
            answers(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72",
                "U62,R66,U55,R34,D71,R55,D58,R83"
            ),
            (159, 610)
        );
    }

    #[test]
    fn example_3() {
        assert_eq!(
            answers(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
                "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            ),
            (135, 410)
        );
    }

    #[test]
    fn intersections() {
        let first: Wire = "R8,U5,L5,D3".parse().unwrap();
        let second: Wire = "U7,R6,D4,L4".parse().unwrap();
        let intersections = first.intersections(&second).unwrap();

        assert_eq!(intersections.len(), 2);
        assert_eq!(intersections[&Coordinate::new(3, 3)], 40);
        assert_eq!(intersections[&Coordinate::new(6, 5)], 30);
        assert!(!intersections.contains_key(&Coordinate::origin()));
    }

    #[test]
    fn repeated_crossing_keeps_fewest_steps() {
        let first: Wire = "R10,U2,L10,D2,R10".parse().unwrap();
        let second: Wire = "U5,R5,D10".parse().unwrap();
        let intersections = first.intersections(&second).unwrap();

        assert_eq!(intersections.len(), 2);
        assert_eq!(intersections[&Coordinate::new(5, 0)], 5 + 15);
        assert_eq!(intersections[&Coordinate::new(5, 2)], 17 + 13);
    }

    #[test]
    fn corner_to_corner_is_an_error() {
        let first: Wire = "R5,U5".parse().unwrap();
        let second: Wire = "D3,R5,U3,R5".parse().unwrap();

        match first.intersections(&second) {
            Err(Error::OutOfRange { coordinate, .. }) => {
                assert_eq!(coordinate, Coordinate::new(5, 0))
            }
            other => panic!("expected an out of range crossing, got {:?}", other),
        }
    }

    #[test]
    fn origin_is_not_a_crossing() {
        let first: Wire = "R5,U5".parse().unwrap();
        let second: Wire = "U3,R8".parse().unwrap();
        let intersections = first.intersections(&second).unwrap();

        assert_eq!(intersections.len(), 1);
        assert_eq!(intersections[&Coordinate::new(5, 3)], 8 + 8);
    }

    #[test]
    fn no_intersection() {
        let first: Wire = "R5,U5".parse().unwrap();
        let second: Wire = "L5,D5".parse().unwrap();
        let intersections = first.intersections(&second).unwrap();

        assert!(intersections.is_empty());
        assert!(matches!(closest_distance(&intersections), Err(Error::NoIntersection)));
        assert!(matches!(fewest_steps(&intersections), Err(Error::NoIntersection)));
    }

    #[test]
    fn path_offsets() {
        let wire: Wire = "R75,D30,R83,U83,L12,D49,R71,U7,L72".parse().unwrap();
        let offsets: Vec<_> = wire.segments().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 75, 105, 188, 271, 283, 332, 403, 410]);

        let last = wire.segments().last().unwrap();
        assert_eq!(last.offset + last.segment.length(), 482);
        assert_eq!(wire.length(), 482);
        assert_eq!(
            wire.segments().iter().map(|s| s.segment.length()).sum::<u64>(),
            wire.length()
        );
    }

    #[test]
    fn segments_chain() {
        let instructions: Vec<Instruction> = vec!["U7".parse().unwrap(), "R6".parse().unwrap()];
        let segments = line_segments(instructions, Coordinate::origin())
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(segments[0].start(), Coordinate::origin());
        assert_eq!(segments[0].end(), Coordinate::new(0, 7));
        assert_eq!(segments[1].start(), segments[0].end());
        assert_eq!(segments[1].end(), Coordinate::new(6, 7));
    }

    #[test]
    fn invalid_input() {
        assert!(matches!("R8,X10".parse::<Wire>(), Err(Error::Parse { .. })));
        assert!(matches!("R8,U0".parse::<Wire>(), Err(Error::InvalidSegment { .. })));
        assert!(matches!("".parse::<Wire>(), Err(Error::Parse { .. })));
    }

    #[test]
    fn read() {
        let input = "R8,U5,L5,D3\nU7,R6,D4,L4\n";
        let mut reader = input.as_bytes();
        let first = Wire::read(&mut reader, 1).unwrap();
        let second = Wire::read(&mut reader, 2).unwrap();
        assert_eq!(first.length(), 21);
        assert_eq!(second.length(), 21);
        assert!(matches!(Wire::read(&mut reader, 3), Err(Error::MissingWire { index: 3 })));
    }
}
