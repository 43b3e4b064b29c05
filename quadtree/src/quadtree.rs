use crate::config::{ChildOrder, Config};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Quadrant, Rectangle};
use common::vector::Vector;

mod insert;
mod maintenance;
mod query_circle;
mod query_rect;

/// A stored payload together with the position it was inserted at.
///
/// The position is a snapshot. Moving the caller's object afterwards does
/// not move the entry; rebuild the tree instead.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub position: Vector,
    pub value: T,
}

#[derive(Debug, Clone)]
struct Children<T> {
    ne: QuadTreeNode<T>,
    nw: QuadTreeNode<T>,
    se: QuadTreeNode<T>,
    sw: QuadTreeNode<T>,
}

impl<T> Children<T> {
    fn new(parent: &Rectangle, capacity: usize, depth: u32, child_order: ChildOrder) -> Self {
        let child = |quadrant| {
            QuadTreeNode::new_unchecked(parent.subdivide(quadrant), capacity, depth, child_order)
        };
        Self {
            ne: child(Quadrant::NorthEast),
            nw: child(Quadrant::NorthWest),
            se: child(Quadrant::SouthEast),
            sw: child(Quadrant::SouthWest),
        }
    }

    /// NE, NW, SE, SW.
    fn as_array(&self) -> [&QuadTreeNode<T>; 4] {
        [&self.ne, &self.nw, &self.se, &self.sw]
    }

    fn as_array_mut(&mut self) -> [&mut QuadTreeNode<T>; 4] {
        [&mut self.ne, &mut self.nw, &mut self.se, &mut self.sw]
    }

    fn in_query_order(&self, order: ChildOrder) -> [&QuadTreeNode<T>; 4] {
        match order {
            ChildOrder::Canonical => self.as_array(),
            ChildOrder::Legacy => [&self.ne, &self.nw, &self.sw, &self.se],
        }
    }
}

/// A region quadtree node.
///
/// A node stores up to `capacity` entries itself. Once full it splits into
/// four children that receive every later insert, while the entries it
/// already holds stay where they are. Splitting happens at most once and is
/// never undone except by [`QuadTreeNode::clear`]. A node whose boundary has
/// shrunk to a single point never splits and stores past its capacity.
#[derive(Debug, Clone)]
pub struct QuadTreeNode<T> {
    boundary: Rectangle,
    capacity: usize,
    points: Vec<Entry<T>>,
    children: Option<Box<Children<T>>>,
    depth: u32,
    child_order: ChildOrder,
}

impl<T> QuadTreeNode<T> {
    pub fn new(boundary: Rectangle, capacity: usize) -> QuadtreeResult<Self> {
        let config = Config {
            node_capacity: capacity,
            ..Config::default()
        };
        Self::with_config(boundary, &config)
    }

    pub fn with_config(boundary: Rectangle, config: &Config) -> QuadtreeResult<Self> {
        config.validate()?;
        if !boundary.is_valid() {
            return Err(QuadtreeError::InvalidRectangleDims {
                half_width: boundary.half_width,
                half_height: boundary.half_height,
            });
        }
        Ok(Self::new_unchecked(
            boundary,
            config.node_capacity,
            0,
            config.child_order,
        ))
    }

    fn new_unchecked(
        boundary: Rectangle,
        capacity: usize,
        depth: u32,
        child_order: ChildOrder,
    ) -> Self {
        Self {
            boundary,
            capacity,
            points: Vec::new(),
            children: None,
            depth,
            child_order,
        }
    }

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn child_order(&self) -> ChildOrder {
        self.child_order
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Entries stored directly in this node, in insertion order.
    pub fn points(&self) -> &[Entry<T>] {
        &self.points
    }

    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Children in NE, NW, SE, SW order, or `None` for a leaf.
    pub fn children(&self) -> Option<[&QuadTreeNode<T>; 4]> {
        self.children.as_deref().map(Children::as_array)
    }

    /// Depth-first walk over every entry in nodes accepted by `overlaps`.
    ///
    /// A node rejected by `overlaps` is skipped together with its subtree.
    /// Children are visited in the node's query order.
    fn visit<'a, P, F>(&'a self, overlaps: &P, f: &mut F)
    where
        P: Fn(&Rectangle) -> bool,
        F: FnMut(&'a Entry<T>),
    {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !overlaps(&node.boundary) {
                continue;
            }
            for entry in &node.points {
                f(entry);
            }
            if let Some(children) = node.children.as_deref() {
                stack.extend(children.in_query_order(node.child_order).into_iter().rev());
            }
        }
    }

    /// Pre-order walk over every node of the subtree, NE, NW, SE, SW.
    fn visit_nodes<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a QuadTreeNode<T>),
    {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            f(node);
            if let Some(children) = node.children.as_deref() {
                stack.extend(children.as_array().into_iter().rev());
            }
        }
    }
}
