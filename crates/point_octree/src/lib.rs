//! point_octree - Point-indexing octree with ray and sphere queries
//!
//! This crate indexes a flat `[x, y, z, x, y, z, ...]` buffer of points in an
//! octree and answers two spatial queries without scanning every point:
//!
//! - **Sphere**: indices of points strictly inside a sphere (unordered)
//! - **Ray**: indices of points in octants pierced by a ray, optionally
//!   limited to a `[near, far]` distance window, nearest first
//!
//! A point is identified by the offset of its x coordinate in the buffer
//! (always a multiple of 3); the tree never copies coordinates.
//!
//! # Features
//!
//! - **Synchronous build**: [`PointOctree::init`] sizes the root cube and
//!   inserts every point
//! - **Incremental build**: [`OctreeBuilder`] inserts points in slices under
//!   a [`BuildBudget`], then [`PointOctree::commit`] swaps the tree in
//! - **Background build**: [`AsyncOctreeBuild`] finishes a builder on
//!   rayon's pool
//! - **Tracing**: spans and events behind the `tracing` feature
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use point_octree::PointOctree;
//!
//! let mut tree = PointOctree::new();
//! tree.init(vec![0.0, 0.0, 0.0, 10.0, 0.0, 0.0])?;
//!
//! // Everything within 20 units of the origin
//! assert_eq!(tree.intersect_sphere(DVec3::ZERO, 20.0), vec![0, 3]);
//!
//! // Points along -X from (1, 0, 0), at least 2 units away
//! let hits = tree.intersect_ray_range(DVec3::X, DVec3::NEG_X, 2.0, f64::INFINITY);
//! assert_eq!(hits, vec![3]);
//! # Ok::<(), point_octree::OctreeError>(())
//! ```

pub mod error;
pub use error::OctreeError;

// Octree core: bounds, nodes, queries
pub mod octree;
pub use octree::{CubeBounds, OctreeConfig, OctreeNode, OctreeStats, PointOctree, RayQuery, SphereQuery};

// Incremental and background construction
pub mod build;
pub use build::{AsyncOctreeBuild, BuildBudget, BuildStats, OctreeBuilder};
