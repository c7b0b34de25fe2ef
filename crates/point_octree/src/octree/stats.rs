//! Structural statistics for a built octree.

use super::OctreeNode;

/// Shape of an octree, collected by walking it once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
  /// Total nodes, internal and leaf.
  pub nodes: usize,
  /// Nodes without children.
  pub leaves: usize,
  /// Depth of the deepest node (root = 0).
  pub max_depth: u32,
  /// Largest bucket held by any leaf.
  pub max_bucket_len: usize,
  /// Point indices stored across all leaves.
  pub points: usize,
}

impl OctreeStats {
  /// Walk the subtree rooted at `root`.
  pub fn collect(root: &OctreeNode) -> Self {
    let mut stats = Self::default();
    stats.visit(root, 0);
    stats
  }

  fn visit(&mut self, node: &OctreeNode, depth: u32) {
    self.nodes += 1;
    self.max_depth = self.max_depth.max(depth);

    match node.children() {
      Some(children) => {
        for child in children {
          self.visit(child, depth + 1);
        }
      }
      None => {
        self.leaves += 1;
        self.points += node.items().len();
        self.max_bucket_len = self.max_bucket_len.max(node.items().len());
      }
    }
  }

  /// Internal nodes (each owns exactly 8 children).
  #[inline]
  pub fn internal_nodes(&self) -> usize {
    self.nodes - self.leaves
  }
}
