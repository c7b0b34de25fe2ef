//! Incremental and background construction.
//!
//! Construction can be sliced across frames with [`OctreeBuilder::step`] or
//! moved off-thread with [`AsyncOctreeBuild`]. Either way the result becomes
//! visible to queries only through [`PointOctree::commit`](crate::PointOctree::commit).

pub mod async_build;
pub mod budget;
pub mod builder;

pub use async_build::AsyncOctreeBuild;
pub use budget::{BuildBudget, BuildStats};
pub use builder::OctreeBuilder;
