//! GeoJSON rendering of addresses.

use crate::address::QuadTreeAddress;
use crate::error::{QuadTreeError, Result};
use crate::point::Wgs84Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

/// Name of the feature property holding the address text.
pub const ADDRESS_PROPERTY: &str = "quadTree";

fn position(point: Wgs84Point) -> Vec<f64> {
    vec![point.longitude(), point.latitude()]
}

/// Exterior ring in [lon, lat] degrees: upper left, upper right, lower right, lower left, upper left.
pub fn polygon_ring(address: &QuadTreeAddress) -> Vec<Vec<f64>> {
    vec![
        position(address.upper_left()),
        position(address.upper_right()),
        position(address.lower_right()),
        position(address.lower_left()),
        position(address.upper_left()),
    ]
}

/// A `Feature` with the address outline as its `Polygon` geometry.
pub fn to_feature(address: &QuadTreeAddress) -> Feature {
    let geom = Geometry::new(Value::Polygon(vec![polygon_ring(address)]));

    let mut props = JsonObject::new();
    props.insert(
        ADDRESS_PROPERTY.to_string(),
        serde_json::Value::String(address.as_str().to_string()),
    );

    Feature {
        bbox: None,
        geometry: Some(geom),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Serializes the outline of `address` as a GeoJSON `Feature` string.
pub fn to_geojson(address: &QuadTreeAddress) -> Result<String> {
    serde_json::to_string(&to_feature(address)).map_err(QuadTreeError::from)
}

/// Serializes several addresses as one `FeatureCollection`.
pub fn to_feature_collection<'a, I>(addresses: I) -> Result<String>
where
    I: IntoIterator<Item = &'a QuadTreeAddress>,
{
    let collection = FeatureCollection {
        bbox: None,
        features: addresses.into_iter().map(to_feature).collect(),
        foreign_members: None,
    };

    Ok(serde_json::to_string(&collection)?)
}

impl QuadTreeAddress {
    pub fn to_geojson_feature(&self) -> Feature {
        to_feature(self)
    }

    /// GeoJSON `Feature` string; see [`to_geojson`].
    pub fn to_geojson(&self) -> Result<String> {
        to_geojson(self)
    }
}
