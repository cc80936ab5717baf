use crate::error::{Axis, QuadTreeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale between degrees and tenth-microdegrees.
pub const TENTH_MICRO_DEGREES_PER_DEGREE: f64 = 10_000_000.0;

pub const MAX_LATITUDE: i32 = 900_000_000;
pub const MIN_LATITUDE: i32 = -MAX_LATITUDE;
pub const MAX_LONGITUDE: i32 = 1_800_000_000;
pub const MIN_LONGITUDE: i32 = -MAX_LONGITUDE;

/// A WGS84 coordinate stored as fixed-point tenth-microdegrees.
///
/// Both axes are range checked on construction, so every `Wgs84Point` in
/// existence lies within ±90° latitude and ±180° longitude.
///
/// # Examples
///
/// ```
/// use quadtree_address::Wgs84Point;
///
/// let point = Wgs84Point::from_degrees(49.315576, 6.750524)?;
/// assert_eq!(point.latitude_fixed(), 493_155_760);
/// assert!((point.longitude() - 6.750524).abs() < 1e-7);
///
/// assert!(Wgs84Point::from_degrees(90.0000001, 0.0).is_err());
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FixedCoordinates", into = "FixedCoordinates")]
pub struct Wgs84Point {
    latitude: i32,
    longitude: i32,
}

impl Wgs84Point {
    /// Create a point from degrees. Values are scaled and truncated toward zero.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        let lat = to_fixed(Axis::Latitude, latitude)?;
        let lon = to_fixed(Axis::Longitude, longitude)?;
        Self::from_fixed(lat, lon)
    }

    /// Create a point directly from tenth-microdegree values.
    pub fn from_fixed(latitude: i32, longitude: i32) -> Result<Self> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(QuadTreeError::InvalidCoordinate {
                axis: Axis::Latitude,
                value: to_degrees(latitude),
            });
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(QuadTreeError::InvalidCoordinate {
                axis: Axis::Longitude,
                value: to_degrees(longitude),
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a point from bounds that are already known to be in range.
    pub(crate) const fn from_fixed_unchecked(latitude: i32, longitude: i32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_fixed(&self) -> i32 {
        self.latitude
    }

    pub fn longitude_fixed(&self) -> i32 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        to_degrees(self.latitude)
    }

    pub fn longitude(&self) -> f64 {
        to_degrees(self.longitude)
    }

    /// Convert to a `geo::Point` with x = longitude and y = latitude, in degrees.
    pub fn to_geo(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude(), self.latitude())
    }
}

impl TryFrom<geo::Point<f64>> for Wgs84Point {
    type Error = QuadTreeError;

    fn try_from(point: geo::Point<f64>) -> Result<Self> {
        Self::from_degrees(point.y(), point.x())
    }
}

impl From<Wgs84Point> for geo::Point<f64> {
    fn from(point: Wgs84Point) -> Self {
        point.to_geo()
    }
}

impl fmt::Display for Wgs84Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude(), self.longitude())
    }
}

/// Wire form of [`Wgs84Point`]; deserialization goes through the range check.
#[derive(Serialize, Deserialize)]
struct FixedCoordinates {
    latitude: i32,
    longitude: i32,
}

impl TryFrom<FixedCoordinates> for Wgs84Point {
    type Error = QuadTreeError;

    fn try_from(raw: FixedCoordinates) -> Result<Self> {
        Self::from_fixed(raw.latitude, raw.longitude)
    }
}

impl From<Wgs84Point> for FixedCoordinates {
    fn from(point: Wgs84Point) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

fn to_fixed(axis: Axis, degrees: f64) -> Result<i32> {
    if !degrees.is_finite() {
        return Err(QuadTreeError::InvalidCoordinate {
            axis,
            value: degrees,
        });
    }
    let scaled = degrees * TENTH_MICRO_DEGREES_PER_DEGREE;
    // `as` truncates toward zero and saturates, and a saturated value fails the range check.
    Ok(scaled as i32)
}

fn to_degrees(fixed: i32) -> f64 {
    f64::from(fixed) / TENTH_MICRO_DEGREES_PER_DEGREE
}
