use common::shapes::*;
use common::vector::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::{FRAC_PI_2, PI};

const EPSILON: f32 = 1e-5;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 3.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 0.0);
    assert_eq!(rect.right(), 4.0);
    assert_eq!(rect.top(), 0.0);
    assert_eq!(rect.bottom(), 6.0);
    assert_eq!(rect.center(), Vector::new(2.0, 3.0));
}

#[test]
fn test_contains_is_inclusive() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 5.0);
    assert!(rect.contains(Vector::new(0.0, 0.0)));
    assert!(rect.contains(Vector::new(10.0, 5.0)));
    assert!(rect.contains(Vector::new(-10.0, -5.0)));
    assert!(!rect.contains(Vector::new(10.5, 0.0)));
    assert!(!rect.contains_point(0.0, -5.5));
}

#[test]
fn test_intersects() {
    let a = Rectangle::new(0.0, 0.0, 5.0, 5.0);
    let b = Rectangle::new(5.0, 5.0, 5.0, 5.0);
    let c = Rectangle::new(25.0, 25.0, 5.0, 5.0);

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(!c.intersects(&a));
}

#[test]
fn test_intersects_edge_touching() {
    // Two unit squares sharing the x = 1 edge.
    let left = Rectangle::new(0.5, 0.5, 0.5, 0.5);
    let right = Rectangle::new(1.5, 0.5, 0.5, 0.5);
    assert!(left.intersects(&right));
    assert!(right.intersects(&left));

    let below = Rectangle::new(0.5, 1.5, 0.5, 0.5);
    assert!(left.intersects(&below));

    let apart = Rectangle::new(1.51, 0.5, 0.5, 0.5);
    assert!(!left.intersects(&apart));
}

#[test]
fn test_intersects_contained() {
    let outer = Rectangle::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rectangle::new(10.0, -10.0, 1.0, 1.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_subdivide_quadrants() {
    let rect = Rectangle::new(0.0, 0.0, 100.0, 50.0);

    assert_eq!(
        rect.subdivide(Quadrant::NorthEast),
        Rectangle::new(50.0, -25.0, 50.0, 25.0)
    );
    assert_eq!(
        rect.subdivide(Quadrant::NorthWest),
        Rectangle::new(-50.0, -25.0, 50.0, 25.0)
    );
    assert_eq!(
        rect.subdivide(Quadrant::SouthEast),
        Rectangle::new(50.0, 25.0, 50.0, 25.0)
    );
    assert_eq!(
        rect.subdivide(Quadrant::SouthWest),
        Rectangle::new(-50.0, 25.0, 50.0, 25.0)
    );
}

#[test]
fn test_subdivide_covers_parent() {
    let rect = Rectangle::new(3.0, -7.0, 8.0, 4.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);
    for _ in 0..100 {
        let point = rect.random_point_inside(&mut rng);
        assert!(Quadrant::ALL
            .iter()
            .any(|&q| rect.subdivide(q).contains(point)));
    }
}

#[test]
fn test_distance_to_point() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 3.0);
    assert_eq!(rect.distance_to_point(2.0, 3.0), 0.0);
    assert_eq!(rect.distance_to_point(6.0, 3.0), 4.0);
    assert_eq!(rect.distance_to_point(2.0, 8.0), 4.0);
}

#[test]
fn test_intersects_circle() {
    let rect = Rectangle::new(0.0, 0.0, 1.0, 1.0);
    assert!(rect.intersects_circle(Vector::new(0.0, 0.0), 0.1));
    assert!(rect.intersects_circle(Vector::new(3.0, 0.0), 2.0));
    assert!(!rect.intersects_circle(Vector::new(3.0, 3.0), 2.0));
}

#[test]
fn test_is_valid() {
    assert!(Rectangle::new(0.0, 0.0, 0.0, 0.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, -1.0, 1.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, 1.0, f32::NAN).is_valid());
    assert!(!Rectangle::new(f32::INFINITY, 0.0, 1.0, 1.0).is_valid());
}

#[test]
fn test_random_point_inside() {
    let rect = Rectangle::new(2.0, 3.0, 3.0, 4.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..10 {
        let point = rect.random_point_inside(&mut rng);
        assert!(rect.contains(point));
    }
}

#[test]
fn test_random_point_inside_degenerate_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 0.0, 0.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);
    assert_eq!(rect.random_point_inside(&mut rng), Vector::new(2.0, 3.0));
}

#[test]
fn test_vector_chaining() {
    let mut v = Vector::new(1.0, 2.0);
    v.add(&Vector::new(2.0, 2.0)).scale(2.0).subtract(&Vector::new(1.0, 1.0));
    assert_eq!(v, Vector::new(5.0, 7.0));

    v.divide(5.0);
    assert_eq!(v.x, 1.0);
    assert_close(v.y, 1.4);
}

#[test]
fn test_vector_copy_is_independent() {
    let mut original = Vector::new(3.0, 4.0);
    let copy = original.copy();
    original.scale(10.0);
    assert_eq!(copy, Vector::new(3.0, 4.0));
    assert_eq!(original, Vector::new(30.0, 40.0));
}

#[test]
fn test_vector_divide_by_zero_is_not_special_cased() {
    let mut v = Vector::new(1.0, 0.0);
    v.divide(0.0);
    assert!(v.x.is_infinite());
    assert!(v.y.is_nan());
}

#[test]
fn test_vector_normalize() {
    let mut v = Vector::new(3.0, 4.0);
    v.normalize();
    assert_close(v.x, 0.6);
    assert_close(v.y, 0.8);
    assert_close(v.magnitude(), 1.0);
}

#[test]
fn test_vector_normalize_zero() {
    let mut v = Vector::zero();
    v.normalize();
    assert_eq!(v, Vector::new(0.0, 0.0));
    assert!(!v.x.is_nan() && !v.y.is_nan());
}

#[test]
fn test_vector_limit() {
    let mut long = Vector::new(30.0, 40.0);
    long.limit(5.0);
    assert_close(long.x, 3.0);
    assert_close(long.y, 4.0);

    let mut short = Vector::new(0.3, 0.4);
    short.limit(5.0);
    assert_eq!(short, Vector::new(0.3, 0.4));
}

#[test]
fn test_vector_set_magnitude() {
    let mut v = Vector::new(0.0, 2.0);
    v.set_magnitude(10.0);
    assert_close(v.x, 0.0);
    assert_close(v.y, 10.0);
}

#[test]
fn test_vector_lerp() {
    let target = Vector::new(10.0, -10.0);

    let mut half = Vector::zero();
    half.lerp(&target, 0.5);
    assert_eq!(half, Vector::new(5.0, -5.0));

    let mut below = Vector::zero();
    below.lerp(&target, -1.0);
    assert_eq!(below, Vector::zero());

    let mut above = Vector::zero();
    above.lerp(&target, 2.0);
    assert_eq!(above, target);
}

#[test]
fn test_vector_heading_and_from_angle() {
    assert_close(Vector::new(1.0, 0.0).heading(), 0.0);
    assert_close(Vector::new(0.0, 1.0).heading(), FRAC_PI_2);
    assert_close(Vector::new(-1.0, 0.0).heading(), PI);

    let v = Vector::from_angle(FRAC_PI_2);
    assert_close(v.x, 0.0);
    assert_close(v.y, 1.0);
    assert_close(Vector::from_angle(1.25).heading(), 1.25);
}

#[test]
fn test_vector_random_unit() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_close(Vector::random_unit(&mut rng).magnitude(), 1.0);
    }
}

#[test]
fn test_vector_distance() {
    let a = Vector::new(1.0, 1.0);
    let b = Vector::new(4.0, 5.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(Vector::distance(&b, &a), 5.0);
    assert_eq!(a.distance(&a), 0.0);
}

#[test]
fn test_vector_from_record() {
    assert_eq!(Vector::from((1.5, -2.0)), Vector::new(1.5, -2.0));
    assert_eq!(Vector::from([0.0, 9.0]), Vector::new(0.0, 9.0));
}

#[test]
fn test_vector_set() {
    let mut v = Vector::new(1.0, 1.0);
    v.set(4.0, 5.0);
    assert_eq!(v, Vector::new(4.0, 5.0));
    v.set_from(&Vector::new(-1.0, 0.0));
    assert_eq!(v, Vector::new(-1.0, 0.0));
}

#[test]
fn test_vector_operators() {
    let mut v = Vector::new(1.0, 2.0);
    v += Vector::new(1.0, 1.0);
    assert_eq!(v, Vector::new(2.0, 3.0));
    v -= Vector::new(2.0, 0.0);
    assert_eq!(v, Vector::new(0.0, 3.0));
    v *= 2.0;
    assert_eq!(v, Vector::new(0.0, 6.0));
    v /= 3.0;
    assert_eq!(v, Vector::new(0.0, 2.0));
    assert_eq!(-v, Vector::new(0.0, -2.0));
    assert_eq!(v.dot(&Vector::new(5.0, 0.5)), 1.0);
}

#[test]
fn test_positioned_through_references() {
    let v = Vector::new(7.0, 8.0);
    let boxed = Box::new(v);
    let rc = std::rc::Rc::new(v);
    assert_eq!((&v).position(), v);
    assert_eq!(boxed.position(), v);
    assert_eq!(rc.position(), v);
}
