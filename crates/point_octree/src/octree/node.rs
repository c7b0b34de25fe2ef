//! OctreeNode - one cube of the point octree.
//!
//! A node is either a leaf holding a bucket of point indices, or an internal
//! node with exactly 8 children and an empty bucket. Subdivision is one-way:
//! leaves become internal, never the reverse.

use glam::DVec3;
use smallvec::SmallVec;

use super::{CubeBounds, OctreeConfig};

/// Bucket of point indices. Inline up to the default capacity.
pub type PointBucket = SmallVec<[usize; 4]>;

/// Read the point whose x coordinate sits at `index` in a flat xyz buffer.
#[inline]
pub fn point_at(points: &[f64], index: usize) -> DVec3 {
  DVec3::new(points[index], points[index + 1], points[index + 2])
}

/// Octree node owning its children and a bucket of point references.
///
/// Point indices refer into the flat buffer the tree was built from; the
/// node never copies coordinates.
#[derive(Clone, Debug)]
pub struct OctreeNode {
  bounds: CubeBounds,
  /// Exactly 8 children once subdivided, indexed by octant code.
  children: Option<Box<[OctreeNode; 8]>>,
  /// Point indices. Always empty on internal nodes.
  items: PointBucket,
}

impl OctreeNode {
  /// Create an empty leaf covering `bounds`.
  pub fn new(bounds: CubeBounds) -> Self {
    Self {
      bounds,
      children: None,
      items: PointBucket::new(),
    }
  }

  /// Region covered by this node.
  #[inline]
  pub fn bounds(&self) -> &CubeBounds {
    &self.bounds
  }

  /// Check if this node has no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  /// Children in octant order, or None for a leaf.
  #[inline]
  pub fn children(&self) -> Option<&[OctreeNode; 8]> {
    self.children.as_deref()
  }

  /// Point indices stored directly in this node.
  #[inline]
  pub fn items(&self) -> &[usize] {
    &self.items
  }

  /// Split a leaf into 8 children covering its octants.
  ///
  /// Does not move bucketed points; see [`OctreeNode::insert`].
  pub fn subdivide(&mut self) {
    debug_assert!(self.is_leaf(), "only leaves can subdivide");
    let bounds = self.bounds;
    self.children = Some(Box::new(std::array::from_fn(|octant| {
      OctreeNode::new(bounds.octant(octant))
    })));
  }

  /// Insert a point index, subdividing full leaves on the way down.
  ///
  /// `depth` is this node's depth (root = 0). A leaf whose bucket reaches
  /// the configured capacity splits and pushes every bucketed point into
  /// its new children, unless it already sits at the depth cap.
  pub fn insert(&mut self, index: usize, points: &[f64], depth: u32, config: &OctreeConfig) {
    if let Some(children) = self.children.as_deref_mut() {
      let octant = self.bounds.octant_of(point_at(points, index));
      children[octant].insert(index, points, depth + 1, config);
      return;
    }

    self.items.push(index);
    if !config.should_subdivide(self.items.len(), depth) {
      return;
    }

    self.subdivide();
    let items = std::mem::take(&mut self.items);
    if let Some(children) = self.children.as_deref_mut() {
      for item in items {
        let octant = self.bounds.octant_of(point_at(points, item));
        children[octant].insert(item, points, depth + 1, config);
      }
    }
  }

  /// Collect point indices from every node whose bounds pass `intersects`.
  ///
  /// A node failing `intersects` prunes its whole subtree, so the test must
  /// never reject a cube that could hold a match. When `precise` is given,
  /// each candidate point must also pass it. Results are appended in
  /// traversal order: bucket first, then children 0 through 7.
  pub fn query<B, P>(
    &self,
    results: &mut Vec<usize>,
    points: &[f64],
    intersects: &B,
    precise: Option<&P>,
  ) where
    B: Fn(&CubeBounds) -> bool + ?Sized,
    P: Fn(DVec3) -> bool + ?Sized,
  {
    if !intersects(&self.bounds) {
      return;
    }

    match precise {
      Some(precise) => results.extend(
        self
          .items
          .iter()
          .copied()
          .filter(|&index| precise(point_at(points, index))),
      ),
      None => results.extend_from_slice(&self.items),
    }

    if let Some(children) = self.children.as_deref() {
      for child in children {
        child.query(results, points, intersects, precise);
      }
    }
  }

  /// Collect point indices from every node whose bounds pass `intersects`,
  /// without a per-point test.
  pub fn query_bounds<B>(&self, results: &mut Vec<usize>, points: &[f64], intersects: &B)
  where
    B: Fn(&CubeBounds) -> bool + ?Sized,
  {
    self.query::<B, fn(DVec3) -> bool>(results, points, intersects, None);
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
