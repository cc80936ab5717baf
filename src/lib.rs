//! Hierarchical quad tree addresses for WGS84 coordinates.
//!
//! An address names a rectangle of the world map by the sequence of quadrant
//! subdivisions leading to it, e.g. `+BACCC`. Addresses can be built from
//! points, parsed, shortened, tested for containment, packed into a `u64`,
//! shifted to their neighbors and rendered as GeoJSON.
//!
//! ```rust
//! use quadtree_address::{Direction, QuadTreeAddress, Wgs84Point};
//!
//! let point = Wgs84Point::from_degrees(49.721, 9.124)?;
//! let address = QuadTreeAddress::from_point(&point, 5)?;
//! assert_eq!(address.to_string(), "+BACCC");
//!
//! let packed = address.to_u64();
//! assert_eq!(QuadTreeAddress::from_u64(packed)?, address);
//!
//! let north = address.neighbor(Direction::North)?;
//! assert_eq!(north.depth(), 5);
//! # Ok::<(), quadtree_address::QuadTreeError>(())
//! ```

pub mod address;
pub mod builder;
pub mod compute;
pub mod error;
pub mod neighbors;
pub mod numeric;
pub mod point;
pub mod spatial;
pub mod types;

pub use address::{MAX_DEPTH, Quadrant, QuadTreeAddress, START_CHAR};
pub use builder::{CodecBuilder, QuadTreeCodec};
pub use compute::validation::is_valid;
pub use error::{Axis, QuadTreeError, Result};
pub use neighbors::Direction;
pub use numeric::{pack, unpack};
pub use point::Wgs84Point;
pub use types::Config;

pub use geo::{Point, Polygon, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{CodecBuilder, QuadTreeCodec, QuadTreeError, Result};

    pub use crate::{Direction, Quadrant, QuadTreeAddress, Wgs84Point};

    pub use crate::Config;

    pub use crate::address::{contains, contains_point, shorten};

    pub use crate::neighbors::{
        eastern_neighbor, neighbors, northern_neighbor, southern_neighbor, western_neighbor,
    };

    pub use crate::{is_valid, pack, unpack};
}
