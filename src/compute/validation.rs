//! Validation for quad tree address strings and depths.

use crate::address::{MAX_DEPTH, Quadrant, START_CHAR};
use crate::error::{QuadTreeError, Result};

/// Checks the syntax and depth bound of an address string.
///
/// An address is valid when it starts with [`START_CHAR`], every following
/// character is one of the quadrant letters `A`..`D`, and it has at most
/// [`MAX_DEPTH`] digits.
///
/// # Examples
///
/// ```
/// use quadtree_address::compute::validation::is_valid;
///
/// assert!(is_valid("+ACABD"));
/// assert!(is_valid("+"));
/// assert!(!is_valid("+BAEA"));
/// assert!(!is_valid("ACABACAB"));
/// ```
pub fn is_valid(address: &str) -> bool {
    let Some(digits) = address.strip_prefix(START_CHAR) else {
        return false;
    };
    digits.len() <= MAX_DEPTH && digits.chars().all(|c| Quadrant::from_char(c).is_some())
}

/// Returns `Ok(())` for a valid address, `InvalidAddress` otherwise.
pub fn validate_address(address: &str) -> Result<()> {
    if is_valid(address) {
        Ok(())
    } else {
        Err(QuadTreeError::InvalidAddress(address.to_string()))
    }
}

/// Returns the number of digits of a valid address.
///
/// ```
/// use quadtree_address::compute::validation::depth_of;
///
/// assert_eq!(depth_of("+ACABD")?, 5);
/// assert!(depth_of("ACAB").is_err());
/// # Ok::<(), quadtree_address::QuadTreeError>(())
/// ```
pub fn depth_of(address: &str) -> Result<usize> {
    validate_address(address)?;
    Ok(address.len() - START_CHAR.len_utf8())
}

/// Checks a requested encoding depth lies within `1..=MAX_DEPTH`.
pub fn validate_depth(depth: usize) -> Result<()> {
    if (1..=MAX_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(QuadTreeError::InvalidDepth(
            i64::try_from(depth).unwrap_or(i64::MAX),
        ))
    }
}

/// Checks an address has at least `required` digits.
pub fn require_depth(address: &str, required: usize) -> Result<usize> {
    let depth = depth_of(address)?;
    if depth < required {
        return Err(QuadTreeError::InsufficientDepth {
            required,
            actual: depth,
        });
    }
    Ok(depth)
}
