//! Conversions from addresses to `geo` geometries.
//!
//! All geometries are in degrees with x = longitude and y = latitude.

use crate::address::QuadTreeAddress;
use crate::error::Result;
use crate::point::Wgs84Point;
use geo::{Coord, LineString, Point, Polygon, Rect};

fn coord(point: Wgs84Point) -> Coord<f64> {
    Coord {
        x: point.longitude(),
        y: point.latitude(),
    }
}

/// Closed outline of the address: upper left, upper right, lower right, lower left, upper left.
pub fn outline(address: &QuadTreeAddress) -> Vec<Coord<f64>> {
    vec![
        coord(address.upper_left()),
        coord(address.upper_right()),
        coord(address.lower_right()),
        coord(address.lower_left()),
        coord(address.upper_left()),
    ]
}

/// The bounding rectangle of an address.
///
/// ```rust
/// use quadtree_address::{QuadTreeAddress, spatial::bounding_rect};
///
/// let rect = bounding_rect(&"+B".parse::<QuadTreeAddress>()?);
/// assert_eq!(rect.min().x, 0.0);
/// assert_eq!(rect.max().y, 90.0);
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
pub fn bounding_rect(address: &QuadTreeAddress) -> Rect<f64> {
    Rect::new(coord(address.lower_left()), coord(address.upper_right()))
}

pub fn polygon(address: &QuadTreeAddress) -> Polygon<f64> {
    Polygon::new(LineString::from(outline(address)), vec![])
}

/// Whether a `geo` point (lon/lat degrees) falls inside `address`.
pub fn contains_geo_point(address: &QuadTreeAddress, point: &Point<f64>) -> Result<bool> {
    let point = Wgs84Point::try_from(*point)?;
    Ok(address.contains_point(&point))
}

impl QuadTreeAddress {
    pub fn to_rect(&self) -> Rect<f64> {
        bounding_rect(self)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        polygon(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, BoundingRect, Contains};

    #[test]
    fn test_outline_order() {
        let address = QuadTreeAddress::parse("+A").unwrap();
        let ring = outline(&address);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], Coord { x: -180.0, y: 90.0 });
        assert_eq!(ring[1], Coord { x: 0.0, y: 90.0 });
        assert_eq!(ring[2], Coord { x: 0.0, y: 0.0 });
        assert_eq!(ring[3], Coord { x: -180.0, y: 0.0 });
        assert_eq!(ring[4], ring[0]);
    }

    #[test]
    fn test_polygon_matches_rect() {
        let address = QuadTreeAddress::parse("+ACAB").unwrap();
        let polygon = address.to_polygon();
        let rect = address.to_rect();

        assert_eq!(polygon.bounding_rect(), Some(rect));
        assert!((polygon.unsigned_area() - rect.width() * rect.height()).abs() < 1e-9);
        assert_eq!(rect.width(), 22.5);
        assert_eq!(rect.height(), 11.25);
    }

    #[test]
    fn test_center_inside_rect() {
        let address = QuadTreeAddress::parse("+BACCCBBCADBBDBA").unwrap();
        let rect = address.to_rect();
        assert!(rect.contains(&address.center().to_geo()));
    }

    #[test]
    fn test_contains_geo_point() {
        let address = QuadTreeAddress::parse("+BAC").unwrap();
        assert!(contains_geo_point(&address, &Point::new(9.124, 49.721)).unwrap());
        assert!(!contains_geo_point(&address, &Point::new(-9.124, 49.721)).unwrap());
        assert!(contains_geo_point(&address, &Point::new(200.0, 0.0)).is_err());
    }
}
