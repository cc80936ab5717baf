//! Configured codec facade.
//!
//! [`QuadTreeCodec`] bundles a validated [`Config`] with the address
//! operations so callers can encode points without repeating the depth.

use crate::address::{self, QuadTreeAddress};
use crate::error::{QuadTreeError, Result};
use crate::neighbors::{self, Direction};
use crate::numeric;
use crate::point::Wgs84Point;
use crate::types::Config;
use rustc_hash::FxHashSet;

/// Builder for a [`QuadTreeCodec`].
#[derive(Debug, Default)]
pub struct CodecBuilder {
    config: Config,
}

impl CodecBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn default_depth(mut self, depth: usize) -> Self {
        self.config = self.config.with_default_depth(depth);
        self
    }

    /// Validate the configuration and build the codec.
    pub fn build(self) -> Result<QuadTreeCodec> {
        self.config
            .validate()
            .map_err(QuadTreeError::InvalidConfig)?;
        log::debug!(
            "quad tree codec ready, default depth {}",
            self.config.default_depth
        );
        Ok(QuadTreeCodec {
            config: self.config,
        })
    }
}

/// Address operations bound to a [`Config`].
///
/// # Examples
///
/// ```rust
/// use quadtree_address::{CodecBuilder, Wgs84Point};
///
/// let codec = CodecBuilder::new().default_depth(5).build()?;
/// let point = Wgs84Point::from_degrees(49.721, 9.124)?;
///
/// let address = codec.encode(&point)?;
/// assert_eq!(address.as_str(), "+BACCC");
/// assert_eq!(codec.unpack(codec.pack(address.as_str())?)?, address);
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadTreeCodec {
    config: Config,
}

impl QuadTreeCodec {
    pub fn new(config: Config) -> Result<Self> {
        CodecBuilder::new().config(config).build()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode at the configured default depth.
    pub fn encode(&self, point: &Wgs84Point) -> Result<QuadTreeAddress> {
        QuadTreeAddress::from_point(point, self.config.default_depth)
    }

    pub fn encode_at(&self, point: &Wgs84Point, depth: usize) -> Result<QuadTreeAddress> {
        QuadTreeAddress::from_point(point, depth)
    }

    /// Encode a point given in degrees at the configured default depth.
    pub fn encode_degrees(&self, latitude: f64, longitude: f64) -> Result<QuadTreeAddress> {
        self.encode(&Wgs84Point::from_degrees(latitude, longitude)?)
    }

    pub fn decode(&self, address: &str) -> Result<QuadTreeAddress> {
        QuadTreeAddress::parse(address)
    }

    /// Whether `inner` lies within `outer`.
    pub fn contains(&self, outer: &str, inner: &str) -> Result<bool> {
        address::contains(outer, inner)
    }

    pub fn contains_point(&self, address: &str, point: &Wgs84Point) -> Result<bool> {
        address::contains_point(address, point)
    }

    pub fn shorten(&self, address: &str, depth: usize) -> Result<QuadTreeAddress> {
        address::shorten(address, depth)
    }

    pub fn pack(&self, address: &str) -> Result<u64> {
        numeric::pack(address)
    }

    pub fn unpack(&self, value: u64) -> Result<QuadTreeAddress> {
        QuadTreeAddress::from_u64(value)
    }

    pub fn neighbor(&self, address: &str, direction: Direction) -> Result<QuadTreeAddress> {
        QuadTreeAddress::parse(&neighbors::shift(address, direction)?)
    }

    pub fn neighbors(&self, address: &str) -> Result<FxHashSet<QuadTreeAddress>> {
        neighbors::neighbors(address)?
            .iter()
            .map(|text| QuadTreeAddress::parse(text))
            .collect()
    }
}
