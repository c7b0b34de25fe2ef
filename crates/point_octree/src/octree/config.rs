//! OctreeConfig - subdivision limits for point insertion.

/// Bucket length at which a leaf subdivides.
pub const DEFAULT_BUCKET_CAPACITY: usize = 4;

/// Deepest level a node may subdivide to. Root is depth 0.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Padding added below the minimum corner on every axis when sizing the root.
///
/// The longest axis gets the same amount above its maximum, so every input
/// point lies strictly inside the half-open root cube.
pub const ROOT_PADDING: f64 = 1.0;

/// Configuration for octree construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
  /// A leaf subdivides once its bucket reaches this many points.
  pub bucket_capacity: usize,

  /// Leaves at this depth never subdivide; their bucket grows unbounded.
  /// Guarantees termination when many points coincide.
  pub max_depth: u32,
}

impl OctreeConfig {
  /// Default limits: buckets of 4, depth capped at 16.
  pub const DEFAULT: Self = Self {
    bucket_capacity: DEFAULT_BUCKET_CAPACITY,
    max_depth: DEFAULT_MAX_DEPTH,
  };

  /// Create a config with explicit limits.
  ///
  /// # Panics
  /// Debug-asserts that `bucket_capacity > 0`.
  pub fn new(bucket_capacity: usize, max_depth: u32) -> Self {
    debug_assert!(bucket_capacity > 0, "bucket capacity must be > 0");
    Self {
      bucket_capacity,
      max_depth,
    }
  }

  /// Check if a leaf at `depth` holding `bucket_len` points must subdivide.
  #[inline]
  pub fn should_subdivide(&self, bucket_len: usize, depth: u32) -> bool {
    bucket_len >= self.bucket_capacity && depth < self.max_depth
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
