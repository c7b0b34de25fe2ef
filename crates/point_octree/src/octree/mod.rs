//! Octree module for point indexing and spatial queries.
//!
//! An explicit tree: every node owns a cube and either a bucket of point
//! indices (leaf) or exactly 8 children (internal). Points are referenced by
//! the offset of their x coordinate in a flat `[x, y, z, x, y, z, ...]`
//! buffer.
//!
//! # Octant Convention
//!
//! Child index is a 3-bit sign code relative to the parent center:
//!
//! ```text
//! bit 0: +X    bit 1: +Y    bit 2: +Z
//! octant = (x > cx) | (y > cy) << 1 | (z > cz) << 2
//! ```
//!
//! # Module Structure
//!
//! - [`bounds`]: `CubeBounds` - center + half-extent value type
//! - [`config`]: `OctreeConfig` - bucket capacity and depth cap
//! - [`node`]: `OctreeNode` - insertion with subdivision, recursive query
//! - [`query`]: `SphereQuery` / `RayQuery` - bounds and point tests
//! - [`stats`]: `OctreeStats` - structural introspection
//! - [`tree`]: `PointOctree` - root sizing and the public query API

pub mod bounds;
pub mod config;
pub mod node;
pub mod query;
pub mod stats;
pub mod tree;

// Re-exports
pub use bounds::CubeBounds;
pub use config::OctreeConfig;
pub use node::{point_at, OctreeNode, PointBucket};
pub use query::{RayQuery, SphereQuery};
pub use stats::OctreeStats;
pub use tree::{root_bounds, PointOctree};
