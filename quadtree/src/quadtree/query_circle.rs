use super::*;

impl<T> QuadTreeNode<T> {
    /// Returns every value within `radius` of `center`, edges included.
    pub fn query_circle(&self, center: Vector, radius: f32) -> Vec<&T> {
        let mut found = Vec::new();
        self.query_circle_into(center, radius, &mut found);
        found
    }

    pub fn query_circle_into<'a>(&'a self, center: Vector, radius: f32, found: &mut Vec<&'a T>) {
        if radius < 0.0 {
            return;
        }
        self.visit(
            &|boundary: &Rectangle| boundary.intersects_circle(center, radius),
            &mut |entry| {
                if entry.position.distance(&center) <= radius {
                    found.push(&entry.value);
                }
            },
        );
    }
}
