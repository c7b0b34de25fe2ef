//! Axis-aligned cube with double precision, the region owned by one node.

use glam::DVec3;

/// Double-precision axis-aligned cube.
///
/// Described by its center and half-extent (distance from the center to any
/// face). `half == 0` at the origin is the canonical empty region, returned
/// by an octree that has not been initialized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeBounds {
	/// Center of the cube.
	pub center: DVec3,
	/// Distance from the center to each face. Never negative.
	pub half: f64,
}

impl CubeBounds {
	/// Empty region at the origin.
	pub const EMPTY: Self = Self {
		center: DVec3::ZERO,
		half: 0.0,
	};

	/// Create a new cube from center and half-extent.
	///
	/// # Panics
	/// Debug-asserts that `half >= 0`.
	pub fn new(center: DVec3, half: f64) -> Self {
		debug_assert!(half >= 0.0, "cube half-extent must be >= 0");
		Self { center, half }
	}

	/// Check if this is the empty region.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.half == 0.0
	}

	/// Minimum corner.
	#[inline]
	pub fn min(&self) -> DVec3 {
		self.center - DVec3::splat(self.half)
	}

	/// Maximum corner.
	#[inline]
	pub fn max(&self) -> DVec3 {
		self.center + DVec3::splat(self.half)
	}

	/// Check if the cube contains a point.
	///
	/// Half-open on every axis: the min face is inside, the max face is not.
	/// A point on a face shared by two siblings belongs to exactly one.
	#[inline]
	pub fn contains(&self, point: DVec3) -> bool {
		let min = self.min();
		let max = self.max();
		min.x <= point.x
			&& point.x < max.x
			&& min.y <= point.y
			&& point.y < max.y
			&& min.z <= point.z
			&& point.z < max.z
	}

	/// Octant code of a point relative to this cube's center.
	///
	/// bit 0 = +X, bit 1 = +Y, bit 2 = +Z. Coordinates equal to the center
	/// go to the negative side.
	#[inline]
	pub fn octant_of(&self, point: DVec3) -> usize {
		let mut octant = 0;
		if point.x > self.center.x {
			octant |= 1;
		}
		if point.y > self.center.y {
			octant |= 2;
		}
		if point.z > self.center.z {
			octant |= 4;
		}
		octant
	}

	/// Bounds of the child cube for an octant code (0-7).
	#[inline]
	pub fn octant(&self, octant: usize) -> Self {
		debug_assert!(octant < 8, "octant must be in 0..8");
		let quarter = self.half / 2.0;
		let sign = |bit: usize| if octant & bit != 0 { quarter } else { -quarter };
		Self {
			center: self.center + DVec3::new(sign(1), sign(2), sign(4)),
			half: quarter,
		}
	}
}

impl Default for CubeBounds {
	fn default() -> Self {
		Self::EMPTY
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty() {
		let bounds = CubeBounds::default();
		assert_eq!(bounds, CubeBounds::EMPTY);
		assert!(bounds.is_empty());
		assert_eq!(bounds.center, DVec3::ZERO);
	}

	#[test]
	fn test_corners() {
		let bounds = CubeBounds::new(DVec3::new(1.0, 2.0, 3.0), 2.0);
		assert_eq!(bounds.min(), DVec3::new(-1.0, 0.0, 1.0));
		assert_eq!(bounds.max(), DVec3::new(3.0, 4.0, 5.0));
	}

	#[test]
	fn test_contains_half_open() {
		let bounds = CubeBounds::new(DVec3::ZERO, 1.0);

		// Inside
		assert!(bounds.contains(DVec3::ZERO));

		// Min faces are inside
		assert!(bounds.contains(DVec3::splat(-1.0)));
		assert!(bounds.contains(DVec3::new(-1.0, 0.5, 0.5)));

		// Max faces are outside
		assert!(!bounds.contains(DVec3::splat(1.0)));
		assert!(!bounds.contains(DVec3::new(0.0, 1.0, 0.0)));
		assert!(!bounds.contains(DVec3::new(0.0, 0.0, 1.0)));

		// Outside
		assert!(!bounds.contains(DVec3::new(2.0, 0.0, 0.0)));
	}

	#[test]
	fn test_empty_contains_nothing() {
		assert!(!CubeBounds::EMPTY.contains(DVec3::ZERO));
	}

	#[test]
	fn test_octant_of_ties_go_negative() {
		let bounds = CubeBounds::new(DVec3::ZERO, 4.0);
		assert_eq!(bounds.octant_of(DVec3::ZERO), 0);
		assert_eq!(bounds.octant_of(DVec3::new(0.1, 0.0, 0.0)), 1);
		assert_eq!(bounds.octant_of(DVec3::new(0.0, 0.1, 0.0)), 2);
		assert_eq!(bounds.octant_of(DVec3::new(0.0, 0.0, 0.1)), 4);
		assert_eq!(bounds.octant_of(DVec3::splat(1.0)), 7);
		assert_eq!(bounds.octant_of(DVec3::new(-1.0, 1.0, 1.0)), 6);
	}

	#[test]
	fn test_octant_layout() {
		let bounds = CubeBounds::new(DVec3::splat(10.0), 4.0);

		let low = bounds.octant(0);
		assert_eq!(low.center, DVec3::splat(8.0));
		assert_eq!(low.half, 2.0);

		let high = bounds.octant(7);
		assert_eq!(high.center, DVec3::splat(12.0));

		let x_only = bounds.octant(1);
		assert_eq!(x_only.center, DVec3::new(12.0, 8.0, 8.0));
	}

	#[test]
	fn test_octants_tile_parent() {
		let bounds = CubeBounds::new(DVec3::new(-3.0, 5.0, 0.5), 8.0);
		let parent_volume = (2.0 * bounds.half).powi(3);
		let child_volume: f64 = (0..8).map(|o| (2.0 * bounds.octant(o).half).powi(3)).sum();
		assert_eq!(parent_volume, child_volume);

		for octant in 0..8 {
			let child = bounds.octant(octant);
			assert!(child.min().cmpge(bounds.min()).all());
			assert!(child.max().cmple(bounds.max()).all());
			// A point strictly inside the child routes back to it
			assert_eq!(bounds.octant_of(child.center), octant);
		}
	}
}
