//! Codec configuration.
//!
//! Configuration is plain serde data so it can be loaded from JSON, or from
//! TOML with the `toml` feature.
use crate::address::MAX_DEPTH;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Settings for [`QuadTreeCodec`](crate::QuadTreeCodec).
///
/// # Example
///
/// ```rust
/// use quadtree_address::Config;
///
/// let config = Config::default();
/// assert_eq!(config.default_depth, 26);
///
/// let config = Config::from_json(r#"{ "default_depth": 12 }"#).unwrap();
/// assert_eq!(config.default_depth, 12);
///
/// assert!(Config::from_json(r#"{ "default_depth": 40 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Depth used when a point is encoded without an explicit depth (1-26)
    #[serde(default = "Config::default_depth")]
    pub default_depth: usize,
}

impl Config {
    const fn default_depth() -> usize {
        MAX_DEPTH
    }

    pub fn with_default_depth(mut self, depth: usize) -> Self {
        self.default_depth = depth;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_DEPTH).contains(&self.default_depth) {
            return Err(format!(
                "Default depth must be between 1 and {}, got {}",
                MAX_DEPTH, self.default_depth
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_depth: Self::default_depth(),
        }
    }
}
