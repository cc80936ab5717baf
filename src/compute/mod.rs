//! Address validation and rendering helpers.
//!
//! - Syntax and depth checks shared by every codec entry point
//! - GeoJSON output (behind the `geojson` feature)

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod validation;
