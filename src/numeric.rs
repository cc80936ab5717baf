//! Packed 64-bit representation of an address.
//!
//! ```text
//!  63 | 62 .. 58 | 57 .. 52 | 51 50 | 49 48 | .. | 3 2 | 1 0
//!  0  |  depth   | reserved | d26   | d25   | .. | d2  | d1
//! ```
//!
//! Each digit takes two bits (`00` = A, `01` = B, `10` = C, `11` = D). The
//! first digit sits in bits 0-1 and the deepest in bits `2·depth-2 ..= 2·depth-1`.

use crate::address::{MAX_DEPTH, Quadrant, QuadTreeAddress, Quadrants};
use crate::compute::validation::validate_address;
use crate::error::{QuadTreeError, Result};

pub const DEPTH_SHIFT: u32 = 58;

/// Value of one unit of depth in the packed form (2^58).
pub const DEPTH_UNIT: u64 = 1 << DEPTH_SHIFT;

/// Bit 63, never set in a packed address.
pub const UNUSED_BIT: u64 = 1 << 63;

/// Keeps the depth field and the 52 digit bits, dropping bit 63 and the reserved bits.
pub const PRE_MASK: u64 = 0x7C0F_FFFF_FFFF_FFFF;

const DIGIT_BITS: u32 = 2;
const DIGIT_MASK: u64 = 0b11;

/// Pack a valid address string.
///
/// ```
/// use quadtree_address::numeric::pack;
///
/// assert_eq!(pack("+ACDCDCBADCDABCDAABCDCBD")?, 6629359005329988536);
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
pub fn pack(address: &str) -> Result<u64> {
    validate_address(address)?;
    let quadrants: Quadrants = address
        .chars()
        .skip(1)
        .filter_map(Quadrant::from_char)
        .collect();
    Ok(pack_quadrants(&quadrants))
}

fn pack_quadrants(quadrants: &[Quadrant]) -> u64 {
    let sectors = quadrants
        .iter()
        .rev()
        .fold(0u64, |acc, q| (acc << DIGIT_BITS) | u64::from(q.code()));
    quadrants.len() as u64 * DEPTH_UNIT + sectors
}

/// Decode a packed value into its digits.
///
/// Fails with `InvalidEncoding` when bit 63 is set or the depth field exceeds
/// [`MAX_DEPTH`]. Digit bits beyond the encoded depth are ignored.
pub fn unpack_quadrants(value: u64) -> Result<Quadrants> {
    if value & UNUSED_BIT != 0 {
        return Err(QuadTreeError::InvalidEncoding(value));
    }
    let masked = value & PRE_MASK;
    let depth = (masked / DEPTH_UNIT) as usize;
    if depth > MAX_DEPTH {
        return Err(QuadTreeError::InvalidEncoding(value));
    }

    Ok((0..depth)
        .map(|i| {
            let code = (masked >> (DIGIT_BITS as usize * i)) & DIGIT_MASK;
            Quadrant::from_code(code as u8)
        })
        .collect())
}

/// Decode a packed value into address text.
///
/// ```
/// use quadtree_address::numeric::unpack;
///
/// assert_eq!(unpack(6629359005329988536)?, "+ACDCDCBADCDABCDAABCDCBD");
/// assert!(unpack(u64::MAX).is_err());
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
pub fn unpack(value: u64) -> Result<String> {
    let quadrants = unpack_quadrants(value)?;
    let mut text = String::with_capacity(quadrants.len() + 1);
    text.push(crate::address::START_CHAR);
    text.extend(quadrants.iter().map(|q| q.as_char()));
    Ok(text)
}

impl QuadTreeAddress {
    pub fn to_u64(&self) -> u64 {
        pack_quadrants(&self.quadrants())
    }

    pub fn from_u64(value: u64) -> Result<Self> {
        Self::from_quadrants(&unpack_quadrants(value)?)
    }
}

impl From<&QuadTreeAddress> for u64 {
    fn from(address: &QuadTreeAddress) -> Self {
        address.to_u64()
    }
}

impl TryFrom<u64> for QuadTreeAddress {
    type Error = QuadTreeError;

    fn try_from(value: u64) -> Result<Self> {
        Self::from_u64(value)
    }
}
