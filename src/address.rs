//! Quad tree addresses over the WGS84 plane.
//!
//! The world map (±90° latitude, ±180° longitude) is split into four
//! quadrants, each quadrant again into four, and so on. An address is the
//! [`START_CHAR`] followed by one letter per subdivision:
//!
//! ```text
//! +-----+-----+
//! |  A  |  B  |      A = upper left,  B = upper right
//! +-----+-----+
//! |  C  |  D  |      C = lower left,  D = lower right
//! +-----+-----+
//! ```
//!
//! Bisection runs on fixed-point tenth-microdegrees with truncating integer
//! midpoints. A point lying exactly on a midpoint belongs to the upper/right
//! half, so tiles are closed at their lower/left edges and open at their
//! upper/right edges.

use crate::compute::validation::{depth_of, validate_address, validate_depth};
use crate::error::{QuadTreeError, Result};
use crate::point::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, Wgs84Point};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Maximum number of digits in an address.
pub const MAX_DEPTH: usize = 26;

/// First character of every address.
pub const START_CHAR: char = '+';

/// Digit buffer sized for the deepest address.
pub type Quadrants = SmallVec<[Quadrant; MAX_DEPTH]>;

/// One digit of an address.
///
/// The discriminant is the 2-bit code used by the packed form: the high bit
/// selects the lower half, the low bit selects the right half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    /// `A`
    UpperLeft = 0b00,
    /// `B`
    UpperRight = 0b01,
    /// `C`
    LowerLeft = 0b10,
    /// `D`
    LowerRight = 0b11,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    const LOWER_BIT: u8 = 0b10;
    const RIGHT_BIT: u8 = 0b01;

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a 2-bit code back to its quadrant. Bits above the lowest two are ignored.
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0b00 => Quadrant::UpperLeft,
            0b01 => Quadrant::UpperRight,
            0b10 => Quadrant::LowerLeft,
            _ => Quadrant::LowerRight,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Quadrant::UpperLeft => 'A',
            Quadrant::UpperRight => 'B',
            Quadrant::LowerLeft => 'C',
            Quadrant::LowerRight => 'D',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Quadrant::UpperLeft),
            'B' => Some(Quadrant::UpperRight),
            'C' => Some(Quadrant::LowerLeft),
            'D' => Some(Quadrant::LowerRight),
            _ => None,
        }
    }

    pub const fn from_halves(upper: bool, right: bool) -> Self {
        let lower_bit = if upper { 0 } else { Self::LOWER_BIT };
        let right_bit = if right { Self::RIGHT_BIT } else { 0 };
        Self::from_code(lower_bit | right_bit)
    }

    pub const fn is_upper(self) -> bool {
        self.code() & Self::LOWER_BIT == 0
    }

    pub const fn is_right(self) -> bool {
        self.code() & Self::RIGHT_BIT != 0
    }

    /// Mirror across the horizontal axis (A <-> C, B <-> D).
    pub const fn flip_vertical(self) -> Self {
        Self::from_code(self.code() ^ Self::LOWER_BIT)
    }

    /// Mirror across the vertical axis (A <-> B, C <-> D).
    pub const fn flip_horizontal(self) -> Self {
        Self::from_code(self.code() ^ Self::RIGHT_BIT)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Running bisection bounds in tenth-microdegrees.
///
/// Sums are taken in `i64`: `MAX_LONGITUDE + MAX_LONGITUDE / 2` does not fit in `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    lat_hi: i64,
    lat_lo: i64,
    lon_hi: i64,
    lon_lo: i64,
}

impl Bounds {
    const WORLD: Bounds = Bounds {
        lat_hi: MAX_LATITUDE as i64,
        lat_lo: MIN_LATITUDE as i64,
        lon_hi: MAX_LONGITUDE as i64,
        lon_lo: MIN_LONGITUDE as i64,
    };

    fn lat_mid(&self) -> i64 {
        (self.lat_hi + self.lat_lo) / 2
    }

    fn lon_mid(&self) -> i64 {
        (self.lon_hi + self.lon_lo) / 2
    }

    /// Select the quadrant holding `point` (midpoints go upper/right) and narrow to it.
    fn descend_towards(&mut self, point: &Wgs84Point) -> Quadrant {
        let upper = i64::from(point.latitude_fixed()) >= self.lat_mid();
        let right = i64::from(point.longitude_fixed()) >= self.lon_mid();
        let quadrant = Quadrant::from_halves(upper, right);
        self.narrow(quadrant);
        quadrant
    }

    fn narrow(&mut self, quadrant: Quadrant) {
        let lat_mid = self.lat_mid();
        let lon_mid = self.lon_mid();
        if quadrant.is_upper() {
            self.lat_lo = lat_mid;
        } else {
            self.lat_hi = lat_mid;
        }
        if quadrant.is_right() {
            self.lon_lo = lon_mid;
        } else {
            self.lon_hi = lon_mid;
        }
    }

    fn point(lat: i64, lon: i64) -> Wgs84Point {
        // Bisection never leaves the world bounds, so both values fit in i32.
        Wgs84Point::from_fixed_unchecked(lat as i32, lon as i32)
    }

    fn corners(&self) -> Corners {
        Corners {
            upper_left: Self::point(self.lat_hi, self.lon_lo),
            upper_right: Self::point(self.lat_hi, self.lon_hi),
            lower_left: Self::point(self.lat_lo, self.lon_lo),
            lower_right: Self::point(self.lat_lo, self.lon_hi),
            center: Self::point(self.lat_mid(), self.lon_mid()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Corners {
    upper_left: Wgs84Point,
    upper_right: Wgs84Point,
    lower_left: Wgs84Point,
    lower_right: Wgs84Point,
    center: Wgs84Point,
}

/// An immutable quad tree address together with its bounding rectangle.
///
/// Equality, hashing and ordering consider only the address text; the
/// corner and center points are derived from it.
///
/// # Examples
///
/// ```
/// use quadtree_address::{QuadTreeAddress, Wgs84Point};
///
/// let point = Wgs84Point::from_degrees(49.721, 9.124)?;
/// let address = QuadTreeAddress::from_point(&point, 5)?;
/// assert_eq!(address.as_str(), "+BACCC");
/// assert_eq!(address.depth(), 5);
/// assert!(address.contains_point(&point));
///
/// let parsed: QuadTreeAddress = "+BACCC".parse()?;
/// assert_eq!(parsed, address);
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuadTreeAddress {
    text: String,
    corners: Corners,
}

impl QuadTreeAddress {
    /// Encode `point` as an address with `depth` digits (`1..=MAX_DEPTH`).
    pub fn from_point(point: &Wgs84Point, depth: usize) -> Result<Self> {
        validate_depth(depth)?;

        let mut bounds = Bounds::WORLD;
        let mut text = String::with_capacity(depth + 1);
        text.push(START_CHAR);
        for _ in 0..depth {
            text.push(bounds.descend_towards(point).as_char());
        }

        log::trace!("encoded {} at depth {} as {}", point, depth, text);
        Ok(Self {
            text,
            corners: bounds.corners(),
        })
    }

    /// Parse and materialize an address string.
    pub fn parse(address: &str) -> Result<Self> {
        validate_address(address)?;
        let mut bounds = Bounds::WORLD;
        for quadrant in digits(address) {
            bounds.narrow(quadrant);
        }
        Ok(Self {
            text: address.to_string(),
            corners: bounds.corners(),
        })
    }

    /// Build an address from a digit sequence, shallowest digit first.
    pub fn from_quadrants(quadrants: &[Quadrant]) -> Result<Self> {
        if quadrants.len() > MAX_DEPTH {
            return Err(QuadTreeError::InvalidDepth(quadrants.len() as i64));
        }
        let mut bounds = Bounds::WORLD;
        let mut text = String::with_capacity(quadrants.len() + 1);
        text.push(START_CHAR);
        for &quadrant in quadrants {
            bounds.narrow(quadrant);
            text.push(quadrant.as_char());
        }
        Ok(Self {
            text,
            corners: bounds.corners(),
        })
    }

    /// The whole world, depth 0.
    pub fn root() -> Self {
        Self {
            text: START_CHAR.to_string(),
            corners: Bounds::WORLD.corners(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> usize {
        self.text.len() - START_CHAR.len_utf8()
    }

    /// Digits in address order, shallowest first.
    pub fn quadrants(&self) -> Quadrants {
        digits(&self.text).collect()
    }

    pub fn upper_left(&self) -> Wgs84Point {
        self.corners.upper_left
    }

    pub fn upper_right(&self) -> Wgs84Point {
        self.corners.upper_right
    }

    pub fn lower_left(&self) -> Wgs84Point {
        self.corners.lower_left
    }

    pub fn lower_right(&self) -> Wgs84Point {
        self.corners.lower_right
    }

    pub fn center(&self) -> Wgs84Point {
        self.corners.center
    }

    /// Truncate to `depth` digits. An address that is already as shallow is returned as is.
    pub fn shorten_to(&self, depth: usize) -> Self {
        if depth >= self.depth() {
            return self.clone();
        }
        let end = START_CHAR.len_utf8() + depth;
        let mut bounds = Bounds::WORLD;
        for quadrant in digits(&self.text[..end]) {
            bounds.narrow(quadrant);
        }
        Self {
            text: self.text[..end].to_string(),
            corners: bounds.corners(),
        }
    }

    /// The enclosing address one level up, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        match self.depth() {
            0 => None,
            depth => Some(self.shorten_to(depth - 1)),
        }
    }

    /// The four addresses one level down, in `A`, `B`, `C`, `D` order.
    pub fn children(&self) -> Result<[Self; 4]> {
        let depth = self.depth() + 1;
        if depth > MAX_DEPTH {
            return Err(QuadTreeError::InvalidDepth(depth as i64));
        }
        let mut quadrants = self.quadrants();
        quadrants.push(Quadrant::UpperLeft);
        let mut child = |quadrant| {
            if let Some(last) = quadrants.last_mut() {
                *last = quadrant;
            }
            Self::from_quadrants(&quadrants)
        };
        Ok([
            child(Quadrant::UpperLeft)?,
            child(Quadrant::UpperRight)?,
            child(Quadrant::LowerLeft)?,
            child(Quadrant::LowerRight)?,
        ])
    }

    /// Whether `point` falls inside this address.
    ///
    /// The point is encoded at [`MAX_DEPTH`] and tested with
    /// [`contains_text`], so the boundary rules of [`from_point`](Self::from_point) apply.
    pub fn contains_point(&self, point: &Wgs84Point) -> bool {
        // MAX_DEPTH is always a valid depth.
        Self::from_point(point, MAX_DEPTH)
            .map(|deepest| contains_text(&self.text, &deepest.text))
            .unwrap_or(false)
    }

    /// Whether `inner` lies within `self` (an address contains itself).
    pub fn contains(&self, inner: &QuadTreeAddress) -> bool {
        contains_text(&self.text, &inner.text)
    }
}

/// Containment on address text: `inner` contains `outer` as a substring.
///
/// The start marker is part of both strings and occurs only at position 0,
/// so a match can only be a prefix match.
fn contains_text(outer: &str, inner: &str) -> bool {
    inner.contains(outer)
}

fn digits(address: &str) -> impl Iterator<Item = Quadrant> + '_ {
    address
        .chars()
        .skip(1)
        .filter_map(Quadrant::from_char)
}

/// Parse `address` and truncate it to `depth` digits.
///
/// ```
/// use quadtree_address::address::shorten;
///
/// assert_eq!(shorten("+ACABD", 2)?.as_str(), "+AC");
/// assert_eq!(shorten("+AC", 5)?.as_str(), "+AC");
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
pub fn shorten(address: &str, depth: usize) -> Result<QuadTreeAddress> {
    Ok(QuadTreeAddress::parse(address)?.shorten_to(depth))
}

/// Whether `inner` lies within `outer`. Both must be valid addresses.
pub fn contains(outer: &str, inner: &str) -> Result<bool> {
    validate_address(outer)?;
    validate_address(inner)?;
    Ok(contains_text(outer, inner))
}

/// Whether `point` falls inside `address`.
pub fn contains_point(address: &str, point: &Wgs84Point) -> Result<bool> {
    validate_address(address)?;
    let deepest = QuadTreeAddress::from_point(point, MAX_DEPTH)?;
    Ok(contains_text(address, deepest.as_str()))
}

/// Depth of a valid address string.
pub fn depth(address: &str) -> Result<usize> {
    depth_of(address)
}

impl PartialEq for QuadTreeAddress {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for QuadTreeAddress {}

impl Hash for QuadTreeAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for QuadTreeAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QuadTreeAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for QuadTreeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for QuadTreeAddress {
    type Err = QuadTreeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QuadTreeAddress {
    type Error = QuadTreeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<QuadTreeAddress> for String {
    fn from(address: QuadTreeAddress) -> Self {
        address.text
    }
}

impl AsRef<str> for QuadTreeAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
