//! Per-slice limits for incremental octree construction.
//!
//! Keeps a host event loop responsive by bounding how many points one
//! `OctreeBuilder::step` call inserts and how long it may run.

/// Limits for one construction slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildBudget {
	/// Maximum points inserted per slice (0 = unlimited).
	pub max_points_per_slice: usize,
	/// Maximum milliseconds spent per slice (0 = unlimited).
	/// Soft limit: checked between chunks of insertions.
	pub max_ms_per_slice: f32,
}

impl BuildBudget {
	/// Default budget: leaves headroom in a 16.6ms frame.
	pub const DEFAULT: Self = Self {
		max_points_per_slice: 50_000,
		max_ms_per_slice: 4.0,
	};

	/// Unlimited budget: one slice finishes the build.
	pub const UNLIMITED: Self = Self {
		max_points_per_slice: 0,
		max_ms_per_slice: 0.0,
	};

	/// Budget limited by point count only.
	pub fn points(max_points_per_slice: usize) -> Self {
		Self {
			max_points_per_slice,
			max_ms_per_slice: 0.0,
		}
	}

	/// Check if more points can be inserted this slice.
	#[inline]
	pub fn can_insert(&self, inserted: usize) -> bool {
		self.max_points_per_slice == 0 || inserted < self.max_points_per_slice
	}

	/// Points still allowed this slice.
	#[inline]
	pub fn points_left(&self, inserted: usize) -> usize {
		if self.max_points_per_slice == 0 {
			usize::MAX
		} else {
			self.max_points_per_slice.saturating_sub(inserted)
		}
	}

	/// Time limit in microseconds, or None when unlimited.
	#[inline]
	pub fn time_limit_us(&self) -> Option<u64> {
		(self.max_ms_per_slice > 0.0).then(|| (self.max_ms_per_slice * 1000.0) as u64)
	}
}

impl Default for BuildBudget {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Statistics from one construction slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
	/// Points inserted during this slice.
	pub inserted: usize,
	/// Points still waiting after this slice.
	pub remaining: usize,
	/// Time spent in microseconds.
	pub elapsed_us: u64,
}

impl BuildStats {
	/// Check if the slice finished the build.
	#[inline]
	pub fn is_complete(&self) -> bool {
		self.remaining == 0
	}
}
