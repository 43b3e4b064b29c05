use super::*;
use common::vector::Positioned;
use fxhash::FxHashMap;
use tracing::debug;

impl<T> QuadTreeNode<T> {
    /// Drops every entry and child, leaving an empty leaf with the same
    /// boundary and capacity.
    pub fn clear(&mut self) {
        self.points.clear();
        self.children = None;
    }

    /// Clears the tree and inserts `items` in iteration order.
    ///
    /// Returns the number of items rejected for lying outside the boundary.
    pub fn rebuild<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Positioned,
    {
        self.clear();
        let mut inserted = 0;
        let mut rejected = 0;
        for item in items {
            if self.insert(item) {
                inserted += 1;
            } else {
                rejected += 1;
            }
        }
        debug!(inserted, rejected, "rebuilt quadtree");
        rejected
    }

    /// Number of entries stored in the whole subtree.
    pub fn len(&self) -> usize {
        let mut len = 0;
        self.visit_nodes(&mut |node| len += node.points.len());
        len
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children.is_none()
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit_nodes(&mut |_| count += 1);
        count
    }

    /// Depth of the deepest node below (and including) this one.
    pub fn max_depth(&self) -> u32 {
        let mut max_depth = self.depth;
        self.visit_nodes(&mut |node| max_depth = max_depth.max(node.depth));
        max_depth
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.visit_nodes(&mut |node| bounding_boxes.push(node.boundary));
    }

    pub fn all_values<'a>(&'a self, values: &mut Vec<&'a T>) {
        self.visit(&|_: &Rectangle| true, &mut |entry| values.push(&entry.value));
    }

    /// Number of stored entries at each depth. Depths holding no entries are
    /// omitted.
    pub fn depth_histogram(&self) -> FxHashMap<u32, usize> {
        let mut histogram = FxHashMap::default();
        self.visit_nodes(&mut |node| {
            if !node.points.is_empty() {
                *histogram.entry(node.depth).or_insert(0) += node.points.len();
            }
        });
        histogram
    }
}
