//! Neighbor addresses via carry-propagating digit shifts.
//!
//! A shift rewrites the deepest digit and, while the rewritten digit rolled
//! over into the adjacent parent tile, keeps rewriting the next shallower one,
//! like a base-4 odometer. The first digit is rewritten at most once and
//! nothing wraps beyond it, so a shift off the edge of the world yields an
//! address on the opposite side. Callers that care must detect this themselves.
//!
//! | direction | A           | B           | C           | D           |
//! |-----------|-------------|-------------|-------------|-------------|
//! | north     | C, carry    | D, carry    | A           | B           |
//! | south     | C           | D           | A, carry    | B, carry    |
//! | east      | B, carry    | A           | D, carry    | C           |
//! | west      | B           | A, carry    | D           | C, carry    |

use crate::address::{Quadrant, QuadTreeAddress, Quadrants, START_CHAR};
use crate::compute::validation::require_depth;
use crate::error::Result;
use rustc_hash::FxHashSet;

/// Minimum depth for a single shift.
pub const MIN_SHIFT_DEPTH: usize = 1;

/// Minimum depth for the full set of eight neighbors.
pub const MIN_NEIGHBORS_DEPTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

impl Direction {
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

    /// Split into the vertical step (applied first) and the horizontal step.
    fn steps(self) -> (Option<Step>, Option<Step>) {
        match self {
            Direction::North => (Some(Step::North), None),
            Direction::South => (Some(Step::South), None),
            Direction::East => (None, Some(Step::East)),
            Direction::West => (None, Some(Step::West)),
            Direction::NorthEast => (Some(Step::North), Some(Step::East)),
            Direction::NorthWest => (Some(Step::North), Some(Step::West)),
            Direction::SouthEast => (Some(Step::South), Some(Step::East)),
            Direction::SouthWest => (Some(Step::South), Some(Step::West)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    North,
    South,
    East,
    West,
}

impl Step {
    /// Substitute one digit; the flag tells whether the shift carries to the parent digit.
    fn substitute(self, quadrant: Quadrant) -> (Quadrant, bool) {
        match self {
            Step::North => (quadrant.flip_vertical(), quadrant.is_upper()),
            Step::South => (quadrant.flip_vertical(), !quadrant.is_upper()),
            Step::East => (quadrant.flip_horizontal(), !quadrant.is_right()),
            Step::West => (quadrant.flip_horizontal(), quadrant.is_right()),
        }
    }

    /// Shift the digits in place, deepest first. Returns true when the carry ran past the first digit.
    fn apply(self, quadrants: &mut [Quadrant]) -> bool {
        for quadrant in quadrants.iter_mut().rev() {
            let (shifted, carry) = self.substitute(*quadrant);
            *quadrant = shifted;
            if !carry {
                return false;
            }
        }
        true
    }
}

fn shift_quadrants(quadrants: &mut Quadrants, direction: Direction) {
    let (vertical, horizontal) = direction.steps();
    for step in [vertical, horizontal].into_iter().flatten() {
        if step.apply(quadrants) {
            log::debug!(
                "{:?} shift carried past the first digit; result lies across the world edge",
                step
            );
        }
    }
}

fn to_text(quadrants: &[Quadrant]) -> String {
    let mut text = String::with_capacity(quadrants.len() + 1);
    text.push(START_CHAR);
    text.extend(quadrants.iter().map(|q| q.as_char()));
    text
}

fn parse_digits(address: &str) -> Quadrants {
    address
        .chars()
        .skip(1)
        .filter_map(Quadrant::from_char)
        .collect()
}

/// Shift a valid address of depth >= 1 one tile in `direction`, keeping its depth.
///
/// ```
/// use quadtree_address::neighbors::{Direction, shift};
///
/// assert_eq!(shift("+ACAB", Direction::North)?, "+AACD");
/// assert_eq!(shift("+ACAB", Direction::South)?, "+ACAD");
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
pub fn shift(address: &str, direction: Direction) -> Result<String> {
    require_depth(address, MIN_SHIFT_DEPTH)?;
    let mut quadrants = parse_digits(address);
    shift_quadrants(&mut quadrants, direction);
    Ok(to_text(&quadrants))
}

pub fn northern_neighbor(address: &str) -> Result<String> {
    shift(address, Direction::North)
}

pub fn southern_neighbor(address: &str) -> Result<String> {
    shift(address, Direction::South)
}

pub fn eastern_neighbor(address: &str) -> Result<String> {
    shift(address, Direction::East)
}

pub fn western_neighbor(address: &str) -> Result<String> {
    shift(address, Direction::West)
}

/// All eight neighbors of an address with depth >= 2.
///
/// Diagonals are the horizontal shift of the northern or southern neighbor.
pub fn neighbors(address: &str) -> Result<FxHashSet<String>> {
    require_depth(address, MIN_NEIGHBORS_DEPTH)?;
    let quadrants = parse_digits(address);
    Ok(Direction::ALL
        .iter()
        .map(|&direction| {
            let mut shifted = quadrants.clone();
            shift_quadrants(&mut shifted, direction);
            to_text(&shifted)
        })
        .collect())
}

impl QuadTreeAddress {
    /// The same-depth address one tile away in `direction`.
    pub fn neighbor(&self, direction: Direction) -> Result<QuadTreeAddress> {
        require_depth(self.as_str(), MIN_SHIFT_DEPTH)?;
        let mut quadrants = self.quadrants();
        shift_quadrants(&mut quadrants, direction);
        QuadTreeAddress::from_quadrants(&quadrants)
    }

    /// All eight surrounding addresses. Requires depth >= 2.
    pub fn neighbors(&self) -> Result<FxHashSet<QuadTreeAddress>> {
        require_depth(self.as_str(), MIN_NEIGHBORS_DEPTH)?;
        Direction::ALL
            .iter()
            .map(|&direction| self.neighbor(direction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadTreeError;

    const ACAB: &str = "+ACAB";
    const AAAAA: &str = "+AAAAA";

    #[test]
    fn test_northern_neighbor() {
        assert_eq!(northern_neighbor(ACAB).unwrap(), "+AACD");
        assert_eq!(northern_neighbor(AAAAA).unwrap(), "+CCCCC");
    }

    #[test]
    fn test_southern_neighbor() {
        assert_eq!(southern_neighbor(ACAB).unwrap(), "+ACAD");
    }

    #[test]
    fn test_eastern_neighbor() {
        assert_eq!(eastern_neighbor(ACAB).unwrap(), "+ACAA");
        assert_eq!(eastern_neighbor(AAAAA).unwrap(), "+BBBBB");
    }

    #[test]
    fn test_western_neighbor() {
        assert_eq!(western_neighbor(ACAB).unwrap(), "+ACBA");
    }

    #[test]
    fn test_max_depth_saturation() {
        let bbbb = format!("+{}", "B".repeat(26));
        let dddd = format!("+{}", "D".repeat(26));
        assert_eq!(northern_neighbor(&bbbb).unwrap(), dddd);
    }

    #[test]
    fn test_depth_one_shift() {
        assert_eq!(northern_neighbor("+A").unwrap(), "+C");
        assert_eq!(southern_neighbor("+A").unwrap(), "+C");
        assert_eq!(eastern_neighbor("+D").unwrap(), "+C");
    }

    #[test]
    fn test_shift_requires_depth() {
        assert!(matches!(
            northern_neighbor("+"),
            Err(QuadTreeError::InsufficientDepth {
                required: 1,
                actual: 0
            })
        ));
        assert!(matches!(
            western_neighbor("+ABE"),
            Err(QuadTreeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_all_neighbors() {
        let set = neighbors(ACAB).unwrap();
        assert_eq!(set.len(), 8);
        for expected in [
            "+AACD", "+ACAD", "+ACAA", "+ACBA", "+AACC", "+AADC", "+ACAC", "+ACBC",
        ] {
            assert!(set.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_neighbors_depth_guard() {
        assert!(matches!(
            neighbors("+A"),
            Err(QuadTreeError::InsufficientDepth {
                required: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            neighbors("+EEEF"),
            Err(QuadTreeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_diagonals_compose() {
        let north = northern_neighbor(ACAB).unwrap();
        assert_eq!(
            shift(ACAB, Direction::NorthEast).unwrap(),
            eastern_neighbor(&north).unwrap()
        );
        let south = southern_neighbor(ACAB).unwrap();
        assert_eq!(
            shift(ACAB, Direction::SouthWest).unwrap(),
            western_neighbor(&south).unwrap()
        );
    }

    #[test]
    fn test_address_neighbors() {
        let address = QuadTreeAddress::parse(ACAB).unwrap();
        let north = address.neighbor(Direction::North).unwrap();
        assert_eq!(north.as_str(), "+AACD");
        assert_eq!(north.depth(), address.depth());

        // vertical neighbors share the longitude span
        assert_eq!(
            north.upper_left().longitude_fixed(),
            address.upper_left().longitude_fixed()
        );
        assert_eq!(
            north.lower_left().latitude_fixed(),
            address.upper_left().latitude_fixed()
        );

        let all = address.neighbors().unwrap();
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&address));
        assert!(all.contains(&QuadTreeAddress::parse("+ACBC").unwrap()));

        let shallow = QuadTreeAddress::parse("+B").unwrap();
        assert!(shallow.neighbors().is_err());
        assert!(QuadTreeAddress::root().neighbor(Direction::East).is_err());
    }
}
