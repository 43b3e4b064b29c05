use super::*;
use common::vector::Positioned;
use tracing::trace;

impl<T> QuadTreeNode<T> {
    /// Inserts `value` at its current position. Returns `false` when the
    /// position lies outside this node's boundary.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Positioned,
    {
        let position = value.position();
        self.insert_at(position, value)
    }

    pub fn insert_at(&mut self, position: Vector, value: T) -> bool {
        self.try_insert_at(position, value).is_ok()
    }

    /// Like [`QuadTreeNode::insert_at`] but hands the value back when it is
    /// rejected.
    pub fn try_insert_at(&mut self, position: Vector, value: T) -> Result<(), T> {
        self.insert_entry(Entry { position, value }).map_err(|rejected| {
            trace!(
                x = position.x,
                y = position.y,
                boundary_x = self.boundary.x,
                boundary_y = self.boundary.y,
                half_width = self.boundary.half_width,
                half_height = self.boundary.half_height,
                "point rejected by quadtree node"
            );
            rejected.value
        })
    }

    /// Walks down from this node to the one that stores `entry`.
    ///
    /// Below a full node the entry follows the first child, in NE, NW, SE, SW
    /// order, whose boundary contains it.
    fn insert_entry(&mut self, entry: Entry<T>) -> Result<(), Entry<T>> {
        if !self.boundary.contains(entry.position) {
            return Err(entry);
        }

        let mut node = self;
        loop {
            if node.points.len() < node.capacity || !node.can_split() {
                node.points.push(entry);
                return Ok(());
            }

            let next = node
                .split()
                .as_array_mut()
                .into_iter()
                .find(|child| child.boundary.contains(entry.position));
            match next {
                Some(child) => node = child,
                // Only reachable when rounding leaves the point outside every quadrant.
                None => return Err(entry),
            }
        }
    }

    /// A boundary that has collapsed to a single point cannot be divided any
    /// further, so such a node keeps everything it receives. Halving `f32`
    /// extents reaches zero within a few hundred levels, which bounds depth.
    fn can_split(&self) -> bool {
        self.boundary.half_width > 0.0 || self.boundary.half_height > 0.0
    }

    /// Creates the four children on first use. Existing points stay put.
    fn split(&mut self) -> &mut Children<T> {
        let boundary = &self.boundary;
        let capacity = self.capacity;
        let depth = self.depth;
        let child_order = self.child_order;
        self.children.get_or_insert_with(|| {
            trace!(
                depth,
                x = boundary.x,
                y = boundary.y,
                half_width = boundary.half_width,
                half_height = boundary.half_height,
                "subdividing quadtree node"
            );
            Box::new(Children::new(boundary, capacity, depth + 1, child_order))
        })
    }
}
