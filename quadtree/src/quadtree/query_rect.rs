use super::*;

impl<T> QuadTreeNode<T> {
    /// Returns every value whose entry position lies inside `range`.
    ///
    /// Each entry lives in exactly one node, so the result has no duplicates.
    pub fn query(&self, range: &Rectangle) -> Vec<&T> {
        let mut found = Vec::new();
        self.query_into(range, &mut found);
        found
    }

    /// Appends matches to `found` instead of allocating a new vector.
    pub fn query_into<'a>(&'a self, range: &Rectangle, found: &mut Vec<&'a T>) {
        self.visit(&|boundary: &Rectangle| boundary.intersects(range), &mut |entry| {
            if range.contains(entry.position) {
                found.push(&entry.value);
            }
        });
    }

    /// Same as [`QuadTreeNode::query_into`] but yields whole entries.
    pub fn query_entries_into<'a>(&'a self, range: &Rectangle, found: &mut Vec<&'a Entry<T>>) {
        self.visit(&|boundary: &Rectangle| boundary.intersects(range), &mut |entry| {
            if range.contains(entry.position) {
                found.push(entry);
            }
        });
    }
}
