//! Vector and point primitives
//!
//! Points and displacements are both `glam::Vec2`. These helpers add the
//! preconditions the collision code relies on: dividing by zero is a
//! programming error and panics instead of leaking NaN into the simulation.

use glam::Vec2;

/// Displacement from `a` to `b`
#[inline]
pub fn vector_between(a: Vec2, b: Vec2) -> Vec2 {
    b - a
}

#[inline]
pub fn dot(u: Vec2, v: Vec2) -> f32 {
    u.dot(v)
}

/// 2D cross product magnitude (z of the 3D cross product)
#[inline]
pub fn cross(u: Vec2, v: Vec2) -> f32 {
    u.perp_dot(v)
}

#[inline]
pub fn norm(v: Vec2) -> f32 {
    v.length()
}

/// Divide a vector by a scalar. Panics on a zero divisor.
#[inline]
pub fn divide(v: Vec2, scalar: f32) -> Vec2 {
    assert!(scalar != 0.0, "vector divided by zero");
    v / scalar
}

/// Unit vector along `v`. Panics if `v` has zero length.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    divide(v, norm(v))
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    norm(vector_between(a, b))
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Panics if `a == b` (the line is undefined).
pub fn distance_to_line(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = vector_between(a, b);
    let ap = vector_between(a, p);
    let len = norm(ab);
    assert!(len > 0.0, "degenerate segment: endpoints coincide");
    cross(ab, ap).abs() / len
}
