//! Point-mapping builders.
//!
//! Each function here returns a closure `Fn(Point) -> Point`. They are the
//! only primitive spatial operations in Figura: every transform a diagram
//! exposes (translate, rotate, scale, reflect, skew) is a single application
//! of one of these builders to every point of the tree.
//!
//! Builders do not compose into matrices. To chain two transforms, apply them
//! one after the other.
//!
//! # Examples
//!
//! ```
//! # use figura_core::{geometry::Point, transform};
//! let shift = transform::translate(Point::new(2.0, 0.0));
//! let mirror = transform::reflect_over_point(Point::new(0.0, 0.0));
//!
//! let p = mirror(shift(Point::new(1.0, 1.0)));
//! assert_eq!(p, Point::new(-3.0, -1.0));
//! ```

use crate::geometry::Point;

/// Translation by `v`.
pub fn translate(v: Point) -> impl Fn(Point) -> Point {
    move |p| p.add_point(v)
}

/// Rotation by `angle` radians around `pivot`.
///
/// Positive angles rotate counter-clockwise in the y-up frame.
pub fn rotate(angle: f32, pivot: Point) -> impl Fn(Point) -> Point {
    move |p| p.sub_point(pivot).rotate(angle).add_point(pivot)
}

/// Independent x/y scaling about `origin`.
pub fn scale(factor: Point, origin: Point) -> impl Fn(Point) -> Point {
    move |p| p.sub_point(origin).mul_point(factor).add_point(origin)
}

/// Point reflection (a half turn) about `q`.
pub fn reflect_over_point(q: Point) -> impl Fn(Point) -> Point {
    move |p| q.scale(2.0).sub_point(p)
}

/// Reflection over the infinite line through `p1` and `p2`.
///
/// Uses the Householder form `p' = p - 2 ((p - p1) · n) n` where `n` is the
/// unit normal of the line. Coincident `p1` and `p2` leave no line to reflect
/// over and produce NaN coordinates.
pub fn reflect_over_line(p1: Point, p2: Point) -> impl Fn(Point) -> Point {
    let direction = p2.sub_point(p1);
    let normal = Point::new(-direction.y(), direction.x()).normalize();
    move |p| {
        let distance = p.sub_point(p1).dot(normal);
        p.sub_point(normal.scale(2.0 * distance))
    }
}

/// Horizontal shear by `angle` radians.
///
/// Points on the line `y = y_base` stay fixed; every other point moves along x
/// by `(y - y_base) * tan(angle)`.
pub fn skew_x(angle: f32, y_base: f32) -> impl Fn(Point) -> Point {
    let factor = angle.tan();
    move |p| p.with_x(p.x() + (p.y() - y_base) * factor)
}

/// Vertical shear by `angle` radians.
///
/// Points on the line `x = x_base` stay fixed; every other point moves along y
/// by `(x - x_base) * tan(angle)`.
pub fn skew_y(angle: f32, x_base: f32) -> impl Fn(Point) -> Point {
    let factor = angle.tan();
    move |p| p.with_y(p.y() + (p.x() - x_base) * factor)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_translate() {
        let f = translate(Point::new(3.0, -2.0));
        assert_eq!(f(Point::new(1.0, 1.0)), Point::new(4.0, -1.0));
    }

    #[test]
    fn test_rotate_about_pivot() {
        let f = rotate(FRAC_PI_2, Point::new(1.0, 1.0));
        assert!(f(Point::new(2.0, 1.0)).approx_eq(Point::new(1.0, 2.0), EPS));
        assert!(f(Point::new(1.0, 1.0)).approx_eq(Point::new(1.0, 1.0), EPS));
    }

    #[test]
    fn test_scale_about_origin() {
        let f = scale(Point::new(2.0, 3.0), Point::new(1.0, 1.0));
        assert_eq!(f(Point::new(2.0, 2.0)), Point::new(3.0, 4.0));
        assert_eq!(f(Point::new(1.0, 1.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_reflect_over_point_is_half_turn() {
        let q = Point::new(1.0, 2.0);
        let reflect = reflect_over_point(q);
        let turn = rotate(PI, q);
        let p = Point::new(4.0, -3.0);
        assert!(reflect(p).approx_eq(turn(p), 1e-4));
    }

    #[test]
    fn test_reflect_over_horizontal_line() {
        let f = reflect_over_line(Point::new(0.0, 1.0), Point::new(5.0, 1.0));
        assert!(f(Point::new(3.0, 4.0)).approx_eq(Point::new(3.0, -2.0), EPS));
    }

    #[test]
    fn test_reflect_over_diagonal_swaps_coordinates() {
        let f = reflect_over_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(f(Point::new(2.0, 5.0)).approx_eq(Point::new(5.0, 2.0), 1e-4));
    }

    #[test]
    fn test_reflect_over_line_is_involution() {
        let f = reflect_over_line(Point::new(-1.0, 3.0), Point::new(2.0, -4.0));
        let p = Point::new(7.0, 0.5);
        assert!(f(f(p)).approx_eq(p, 1e-4));
    }

    #[test]
    fn test_skew_x_keeps_base_line() {
        let f = skew_x(FRAC_PI_4, 1.0);
        assert!(f(Point::new(2.0, 1.0)).approx_eq(Point::new(2.0, 1.0), EPS));
        assert!(f(Point::new(2.0, 3.0)).approx_eq(Point::new(4.0, 3.0), EPS));
    }

    #[test]
    fn test_skew_y_keeps_base_line() {
        let f = skew_y(FRAC_PI_4, 0.0);
        assert!(f(Point::new(0.0, 5.0)).approx_eq(Point::new(0.0, 5.0), EPS));
        assert!(f(Point::new(-2.0, 5.0)).approx_eq(Point::new(-2.0, 3.0), EPS));
    }
}
