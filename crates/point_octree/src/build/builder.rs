//! OctreeBuilder - resumable construction of a point octree.
//!
//! The builder owns a tree-in-progress. Hosts that cannot afford one long
//! synchronous build call [`OctreeBuilder::insert_batch`] or
//! [`OctreeBuilder::step`] once per frame, then hand the builder to
//! [`PointOctree::commit`](crate::PointOctree::commit), which swaps the
//! finished tree in. Queries never observe a partially built tree.

use std::sync::Arc;

// WASM compat: std::time::Instant panics on wasm32
use web_time::Instant;

use super::budget::{BuildBudget, BuildStats};
use crate::error::{validate_points, OctreeError};
use crate::octree::{root_bounds, CubeBounds, OctreeConfig, OctreeNode};

/// Insertions between time-budget checks.
const TIME_CHECK_INTERVAL: usize = 256;

/// Tree under construction over a shared point buffer.
#[derive(Debug)]
pub struct OctreeBuilder {
  config: OctreeConfig,
  points: Arc<[f64]>,
  root: OctreeNode,
  /// Index of the next point to insert (multiple of 3).
  next_index: usize,
}

impl OctreeBuilder {
  /// Validate `points` and prepare an empty root sized to hold them all.
  pub fn new<P: Into<Arc<[f64]>>>(points: P, config: OctreeConfig) -> Result<Self, OctreeError> {
    Self::from_optional(Some(points), config)
  }

  /// Like [`OctreeBuilder::new`], rejecting an absent point collection.
  pub fn from_optional<P: Into<Arc<[f64]>>>(
    points: Option<P>,
    config: OctreeConfig,
  ) -> Result<Self, OctreeError> {
    let points: Arc<[f64]> = match validate_points(points.map(Into::into)) {
      Ok(points) => points,
      Err(err) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %err, "rejected point buffer");
        return Err(err);
      }
    };

    let bounds = root_bounds(&points);
    Ok(Self {
      config,
      root: OctreeNode::new(bounds),
      points,
      next_index: 0,
    })
  }

  /// Insert up to `max_points` more points. Returns how many were inserted.
  pub fn insert_batch(&mut self, max_points: usize) -> usize {
    let start = self.next_index;
    let end = start
      .saturating_add(max_points.saturating_mul(3))
      .min(self.points.len());

    for index in (start..end).step_by(3) {
      self.root.insert(index, &self.points, 0, &self.config);
    }
    self.next_index = end;
    (end - start) / 3
  }

  /// Insert points until the slice budget runs out or the build completes.
  ///
  /// Inserts at least one chunk when work remains, so repeated calls always
  /// make progress.
  pub fn step(&mut self, budget: &BuildBudget) -> BuildStats {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("octree_build_slice").entered();

    let start = Instant::now();
    let time_limit_us = budget.time_limit_us();
    let mut inserted = 0;

    while !self.is_complete() && budget.can_insert(inserted) {
      if let Some(limit) = time_limit_us {
        if inserted > 0 && start.elapsed().as_micros() as u64 >= limit {
          break;
        }
      }
      let chunk = budget.points_left(inserted).min(TIME_CHECK_INTERVAL);
      inserted += self.insert_batch(chunk);
    }

    let stats = BuildStats {
      inserted,
      remaining: self.remaining(),
      elapsed_us: start.elapsed().as_micros() as u64,
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
      inserted = stats.inserted,
      remaining = stats.remaining,
      elapsed_us = stats.elapsed_us,
      "octree build slice"
    );

    stats
  }

  /// Insert every remaining point.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::finish_build"))]
  pub fn finish(mut self) -> Self {
    let _inserted = self.insert_batch(usize::MAX);

    #[cfg(feature = "tracing")]
    tracing::debug!(inserted = _inserted, total = self.total(), "octree build drained");

    self
  }

  /// Check if every point has been inserted.
  #[inline]
  pub fn is_complete(&self) -> bool {
    self.next_index >= self.points.len()
  }

  /// Points inserted so far.
  #[inline]
  pub fn inserted(&self) -> usize {
    self.next_index / 3
  }

  /// Points still waiting to be inserted.
  #[inline]
  pub fn remaining(&self) -> usize {
    (self.points.len() - self.next_index) / 3
  }

  /// Total points in the buffer.
  #[inline]
  pub fn total(&self) -> usize {
    self.points.len() / 3
  }

  /// Fraction of points inserted, in `[0, 1]`. An empty buffer is complete.
  pub fn progress(&self) -> f32 {
    if self.points.is_empty() {
      1.0
    } else {
      self.next_index as f32 / self.points.len() as f32
    }
  }

  /// Root bounds of the tree being built.
  pub fn bounds(&self) -> CubeBounds {
    *self.root.bounds()
  }

  /// Tree-in-progress, for diagnostics.
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  /// Point buffer the tree indexes into.
  pub fn points(&self) -> &[f64] {
    &self.points
  }

  /// Configuration used for insertion.
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  pub(crate) fn into_parts(self) -> (OctreeConfig, Arc<[f64]>, OctreeNode) {
    (self.config, self.points, self.root)
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
