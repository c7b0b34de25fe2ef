//! Query shapes: cube-level pruning tests and exact point tests.
//!
//! Each shape pairs a conservative bounds test, used to prune subtrees,
//! with a precise point test applied to surviving candidates.

use glam::DVec3;

use super::CubeBounds;

#[inline]
fn sqr(value: f64) -> f64 {
  value * value
}

/// Open sphere query: points strictly closer than `radius` to `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereQuery {
  /// Sphere center.
  pub center: DVec3,
  /// Squared radius.
  pub radius_sq: f64,
}

impl SphereQuery {
  /// Create a sphere query. Negative radii are not rejected.
  pub fn new(center: DVec3, radius: f64) -> Self {
    Self {
      center,
      radius_sq: radius * radius,
    }
  }

  /// Cube/sphere overlap test.
  ///
  /// Starts from `r²` and subtracts, per axis, the squared distance from the
  /// center to the nearest face whenever the center lies outside the cube
  /// on that axis. The cube overlaps iff the budget stays positive.
  #[inline]
  pub fn intersects(&self, bounds: &CubeBounds) -> bool {
    let min = bounds.min().to_array();
    let max = bounds.max().to_array();
    let center = self.center.to_array();

    let mut budget = self.radius_sq;
    for axis in 0..3 {
      if center[axis] < min[axis] {
        budget -= sqr(center[axis] - min[axis]);
      } else if center[axis] > max[axis] {
        budget -= sqr(center[axis] - max[axis]);
      }
    }
    budget > 0.0
  }

  /// Exact test: squared distance strictly below `r²`.
  #[inline]
  pub fn contains(&self, point: DVec3) -> bool {
    point.distance_squared(self.center) < self.radius_sq
  }
}

/// Ray query limited to a distance window from its origin.
///
/// `near` and `far` are kept squared so the hot path never takes a root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayQuery {
  /// Ray origin.
  pub origin: DVec3,
  /// Ray direction. Need not be normalized; zero components are allowed.
  pub direction: DVec3,
  /// Squared minimum distance from the origin.
  pub near_sq: f64,
  /// Squared maximum distance from the origin.
  pub far_sq: f64,
}

impl RayQuery {
  /// Unbounded ray: `near = 0`, `far = +inf`.
  pub fn new(origin: DVec3, direction: DVec3) -> Self {
    Self::with_range(origin, direction, 0.0, f64::INFINITY)
  }

  /// Ray restricted to points whose distance from `origin` is in
  /// `[near, far]`. `near > far` is not rejected and matches nothing.
  pub fn with_range(origin: DVec3, direction: DVec3, near: f64, far: f64) -> Self {
    Self {
      origin,
      direction,
      near_sq: near * near,
      far_sq: far * far,
    }
  }

  /// Slab test of the ray against a cube.
  ///
  /// Computes the parametric entry and exit of each axis slab and
  /// intersects the three intervals. A zero direction component divides to
  /// ±inf, which makes that slab unbounded when the origin is inside it.
  /// The cube is hit iff the exit lies ahead of the origin, entry does not
  /// follow exit, and entry is within `far²`.
  #[inline]
  pub fn intersects(&self, bounds: &CubeBounds) -> bool {
    let min = bounds.min().to_array();
    let max = bounds.max().to_array();
    let origin = self.origin.to_array();
    let direction = self.direction.to_array();

    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;
    for axis in 0..3 {
      let t1 = (min[axis] - origin[axis]) / direction[axis];
      let t2 = (max[axis] - origin[axis]) / direction[axis];
      // 0/0: axis-parallel ray with its origin on a face of the slab.
      // The origin is inside the closed slab, so the axis is unconstrained.
      if t1.is_nan() || t2.is_nan() {
        continue;
      }
      t_enter = t_enter.max(t1.min(t2));
      t_exit = t_exit.min(t1.max(t2));
    }

    if t_exit < 0.0 {
      return false;
    }
    t_enter <= t_exit && t_enter <= self.far_sq
  }

  /// Exact test: squared distance from the origin within `[near², far²]`.
  #[inline]
  pub fn contains(&self, point: DVec3) -> bool {
    let dist_sq = point.distance_squared(self.origin);
    self.near_sq <= dist_sq && dist_sq <= self.far_sq
  }

  /// Sort point indices by squared distance from the ray origin.
  ///
  /// Stable: points at equal distance keep their traversal order.
  pub fn sort_by_distance(&self, indices: &mut Vec<usize>, points: &[f64]) {
    let mut keyed: Vec<(f64, usize)> = indices
      .iter()
      .map(|&index| {
        (
          super::point_at(points, index).distance_squared(self.origin),
          index,
        )
      })
      .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    indices.clear();
    indices.extend(keyed.into_iter().map(|(_, index)| index));
  }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
