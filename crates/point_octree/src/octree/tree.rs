//! PointOctree - the point index: root node, point buffer and queries.

use std::sync::Arc;

use glam::DVec3;

use super::{point_at, CubeBounds, OctreeConfig, OctreeNode, OctreeStats, RayQuery, SphereQuery};
use super::config::ROOT_PADDING;
use crate::build::OctreeBuilder;
use crate::error::OctreeError;

/// Compute a cube that strictly contains every point in `points`.
///
/// Takes the axis-aligned bounding box, moves its minimum corner down by
/// [`ROOT_PADDING`] on each axis and uses the longest extent plus twice the
/// padding as the cube side. Points on the maximum face of the box would
/// otherwise fall outside the half-open cube. An empty buffer yields
/// [`CubeBounds::EMPTY`].
pub fn root_bounds(points: &[f64]) -> CubeBounds {
  if points.is_empty() {
    return CubeBounds::EMPTY;
  }

  let (min, max) = points.chunks_exact(3).fold(
    (DVec3::INFINITY, DVec3::NEG_INFINITY),
    |(min, max), p| {
      let p = DVec3::new(p[0], p[1], p[2]);
      (min.min(p), max.max(p))
    },
  );

  let side = (max - min).max_element() + 2.0 * ROOT_PADDING;
  let half = side / 2.0;
  let min = min - DVec3::splat(ROOT_PADDING);
  CubeBounds::new(min + DVec3::splat(half), half)
}

/// Octree over a flat buffer of xyz points.
///
/// Stores point indices (offsets of each point's x coordinate) rather than
/// coordinates. The buffer is shared and immutable for the tree's lifetime.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use point_octree::PointOctree;
///
/// let mut tree = PointOctree::new();
/// tree.init(vec![0.0, 0.0, 0.0, 10.0, 0.0, 0.0])?;
///
/// assert_eq!(tree.intersect_sphere(DVec3::new(0.0, -1.0, 0.0), 2.0), vec![0]);
/// assert_eq!(tree.intersect_ray(DVec3::X, DVec3::NEG_X), vec![0, 3]);
/// # Ok::<(), point_octree::OctreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PointOctree {
  config: OctreeConfig,
  points: Arc<[f64]>,
  /// None until the first successful init or commit.
  root: Option<OctreeNode>,
}

impl PointOctree {
  /// Create an uninitialized tree with default limits.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an uninitialized tree with custom limits.
  pub fn with_config(config: OctreeConfig) -> Self {
    Self {
      config,
      points: Arc::from(Vec::new()),
      root: None,
    }
  }

  /// Build the tree over `points`, replacing any previous tree.
  ///
  /// Fails with [`OctreeError::InvalidInput`] if the length is not a
  /// multiple of 3; the previous tree is kept in that case.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::init"))]
  pub fn init<P: Into<Arc<[f64]>>>(&mut self, points: P) -> Result<(), OctreeError> {
    self.init_optional(Some(points))
  }

  /// Like [`PointOctree::init`], also rejecting an absent collection.
  pub fn init_optional<P: Into<Arc<[f64]>>>(&mut self, points: Option<P>) -> Result<(), OctreeError> {
    let builder = OctreeBuilder::from_optional(points, self.config)?;
    self.commit(builder);
    Ok(())
  }

  /// Swap in a tree built by `builder`, inserting whatever it has left.
  ///
  /// The previous root, points and config are dropped together.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::commit"))]
  pub fn commit(&mut self, builder: OctreeBuilder) {
    let (config, points, root) = builder.finish().into_parts();

    #[cfg(feature = "tracing")]
    if tracing::enabled!(tracing::Level::DEBUG) {
      let stats = OctreeStats::collect(&root);
      tracing::debug!(
        points = stats.points,
        nodes = stats.nodes,
        leaves = stats.leaves,
        max_depth = stats.max_depth,
        max_bucket_len = stats.max_bucket_len,
        "octree committed"
      );
    }

    self.config = config;
    self.points = points;
    self.root = Some(root);
  }

  /// Root bounds, or [`CubeBounds::EMPTY`] before the first build.
  pub fn bounds(&self) -> CubeBounds {
    self.root.as_ref().map_or(CubeBounds::EMPTY, |root| *root.bounds())
  }

  /// Points strictly inside the sphere, in traversal order.
  #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
  pub fn intersect_sphere(&self, center: DVec3, radius: f64) -> Vec<usize> {
    self.query_sphere(&SphereQuery::new(center, radius))
  }

  /// Points in octants hit by an unbounded ray, nearest first.
  pub fn intersect_ray(&self, origin: DVec3, direction: DVec3) -> Vec<usize> {
    self.query_ray(&RayQuery::new(origin, direction))
  }

  /// Points in octants hit by the ray whose distance from `origin` lies in
  /// `[near, far]`, nearest first.
  #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
  pub fn intersect_ray_range(
    &self,
    origin: DVec3,
    direction: DVec3,
    near: f64,
    far: f64,
  ) -> Vec<usize> {
    self.query_ray(&RayQuery::with_range(origin, direction, near, far))
  }

  /// Run a prepared sphere query.
  pub fn query_sphere(&self, sphere: &SphereQuery) -> Vec<usize> {
    let Some(root) = self.root.as_ref() else {
      return Vec::new();
    };

    let mut indices = Vec::new();
    root.query(
      &mut indices,
      &self.points,
      &|bounds: &CubeBounds| sphere.intersects(bounds),
      Some(&|point: DVec3| sphere.contains(point)),
    );
    indices
  }

  /// Run a prepared ray query. Results are sorted by distance from the
  /// ray origin.
  pub fn query_ray(&self, ray: &RayQuery) -> Vec<usize> {
    let Some(root) = self.root.as_ref() else {
      return Vec::new();
    };

    let mut indices = Vec::new();
    root.query(
      &mut indices,
      &self.points,
      &|bounds: &CubeBounds| ray.intersects(bounds),
      Some(&|point: DVec3| ray.contains(point)),
    );
    ray.sort_by_distance(&mut indices, &self.points);
    indices
  }

  /// Root node for diagnostics and visualization.
  pub fn root(&self) -> Option<&OctreeNode> {
    self.root.as_ref()
  }

  /// Structural statistics, or None before the first build.
  pub fn stats(&self) -> Option<OctreeStats> {
    self.root.as_ref().map(OctreeStats::collect)
  }

  /// Flat xyz buffer the tree indexes into.
  pub fn points(&self) -> &[f64] {
    &self.points
  }

  /// Coordinates of the point at `index`, if in range.
  pub fn point(&self, index: usize) -> Option<DVec3> {
    (index % 3 == 0 && index + 2 < self.points.len()).then(|| point_at(&self.points, index))
  }

  /// Number of indexed points.
  pub fn len(&self) -> usize {
    self.points.len() / 3
  }

  /// Check if no points are indexed.
  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Check if the tree has been built at least once.
  pub fn is_ready(&self) -> bool {
    self.root.is_some()
  }

  /// Subdivision limits used by the next build.
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }
}

impl Default for PointOctree {
  fn default() -> Self {
    Self::with_config(OctreeConfig::default())
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
