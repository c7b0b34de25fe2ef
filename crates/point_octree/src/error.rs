//! Error types for octree construction.

use thiserror::Error;

/// Octree construction errors.
///
/// Queries never fail; only building a tree validates its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OctreeError {
  /// Point collection missing, or not a flat run of x, y, z triplets.
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

/// Check that a point buffer is present and made of whole triplets.
///
/// Hands the buffer back on success so callers keep ownership.
pub fn validate_points<P: AsRef<[f64]>>(points: Option<P>) -> Result<P, OctreeError> {
  let points = points.ok_or_else(|| {
    OctreeError::InvalidInput("points array is required to build the octree".into())
  })?;

  let len = points.as_ref().len();
  if len % 3 != 0 {
    return Err(OctreeError::InvalidInput(format!(
      "points array should consist of x, y, z triplets, got length {}",
      len
    )));
  }

  Ok(points)
}
