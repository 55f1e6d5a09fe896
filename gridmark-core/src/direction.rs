//! Compass directions and the unit-step table used by directional fill
//!
//! Rows grow downward, so `south` is `+y` and `north` is `-y`.

use crate::error::{GridError, Result};

/// One of the eight compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// A registered start/end pair and its per-step delta
#[derive(Debug, Clone, Copy)]
struct StepEntry {
    start: Direction,
    end: Direction,
    dx: isize,
    dy: isize,
}

const STEPS: [StepEntry; 8] = [
    StepEntry { start: Direction::North, end: Direction::South, dx: 0, dy: 1 },
    StepEntry { start: Direction::South, end: Direction::North, dx: 0, dy: -1 },
    StepEntry { start: Direction::West, end: Direction::East, dx: 1, dy: 0 },
    StepEntry { start: Direction::East, end: Direction::West, dx: -1, dy: 0 },
    StepEntry { start: Direction::NorthEast, end: Direction::SouthWest, dx: -1, dy: 1 },
    StepEntry { start: Direction::SouthWest, end: Direction::NorthEast, dx: 1, dy: -1 },
    StepEntry { start: Direction::NorthWest, end: Direction::SouthEast, dx: 1, dy: 1 },
    StepEntry { start: Direction::SouthEast, end: Direction::NorthWest, dx: -1, dy: -1 },
];

impl Direction {
    /// All compass points, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The compass point directly across
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::NorthEast => "northeast",
            Direction::East => "east",
            Direction::SouthEast => "southeast",
            Direction::South => "south",
            Direction::SouthWest => "southwest",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
        };
        write!(f, "{name}")
    }
}

/// Look up the `(dx, dy)` unit step for travelling from `start` towards `end`
///
/// Only the eight opposite pairs are registered; anything else is an
/// [`GridError::InvalidDirection`].
pub fn direction_steps(start: Direction, end: Direction) -> Result<(isize, isize)> {
    STEPS
        .iter()
        .find(|entry| entry.start == start && entry.end == end)
        .map(|entry| (entry.dx, entry.dy))
        .ok_or(GridError::InvalidDirection { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_pairs() {
        assert_eq!(direction_steps(Direction::North, Direction::South), Ok((0, 1)));
        assert_eq!(direction_steps(Direction::South, Direction::North), Ok((0, -1)));
        assert_eq!(direction_steps(Direction::West, Direction::East), Ok((1, 0)));
        assert_eq!(direction_steps(Direction::East, Direction::West), Ok((-1, 0)));
        assert_eq!(
            direction_steps(Direction::NorthEast, Direction::SouthWest),
            Ok((-1, 1))
        );
        assert_eq!(
            direction_steps(Direction::SouthWest, Direction::NorthEast),
            Ok((1, -1))
        );
        assert_eq!(
            direction_steps(Direction::NorthWest, Direction::SouthEast),
            Ok((1, 1))
        );
        assert_eq!(
            direction_steps(Direction::SouthEast, Direction::NorthWest),
            Ok((-1, -1))
        );
    }

    #[test]
    fn test_every_opposite_pair_is_registered() {
        for dir in Direction::ALL {
            assert!(direction_steps(dir, dir.opposite()).is_ok(), "{dir}");
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_unregistered_pairs() {
        assert_eq!(
            direction_steps(Direction::North, Direction::East),
            Err(GridError::InvalidDirection {
                start: Direction::North,
                end: Direction::East,
            })
        );
        for dir in Direction::ALL {
            assert!(direction_steps(dir, dir).is_err());
        }
    }
}
