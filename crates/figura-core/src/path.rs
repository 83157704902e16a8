//! Ordered point sequences.
//!
//! A [`Path`] is the geometry payload of polygons, curves and images: a
//! polyline through at least one point. Paths carry a `mutable` flag that
//! selects between the two value regimes used throughout Figura:
//!
//! - an immutable path is never edited; modifying operations return a
//!   modified copy,
//! - a mutable path is edited in place and handed back by reference.
//!
//! Both cases are expressed with [`Cow`], so callers that only need the
//! result can call [`Cow::into_owned`] without caring which regime applied.

use std::borrow::Cow;

use log::trace;

use crate::{error::PathError, geometry::Point};

/// A polyline through an ordered, non-empty list of points.
///
/// # Examples
///
/// ```
/// # use figura_core::{geometry::Point, path::Path};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = Path::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
/// ])?;
///
/// assert_eq!(path.length(), 20.0);
/// assert_eq!(path.parametric_point(0.5, false, None)?, Point::new(10.0, 0.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    mutable: bool,
}

impl Path {
    /// Creates an immutable path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] when `points` is empty.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self, PathError> {
        let points = points.into();
        if points.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self {
            points,
            mutable: false,
        })
    }

    /// Returns the points of the path in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the first point
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// Returns the last point
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Returns true if operations edit this path in place
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Selects the value regime of this path.
    pub fn set_mutable(&mut self, mutable: bool) {
        self.mutable = mutable;
    }

    /// Sum of the distances between consecutive points.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[1].sub_point(pair[0]).length())
            .sum()
    }

    /// Length including the implicit edge from the last point back to the first.
    pub fn closed_length(&self) -> f32 {
        self.length() + self.first().sub_point(self.last()).length()
    }

    /// Appends points to the end of the path.
    ///
    /// A mutable path is extended in place and borrowed back; an immutable
    /// path stays untouched and the extended copy is returned.
    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point>) -> Cow<'_, Path> {
        if self.mutable {
            self.extend_points(points);
            Cow::Borrowed(self)
        } else {
            let mut copy = self.clone();
            copy.extend_points(points);
            Cow::Owned(copy)
        }
    }

    /// Maps every point through `f`, following the same regime as [`Path::add_points`].
    pub fn transform(&mut self, f: impl Fn(Point) -> Point) -> Cow<'_, Path> {
        if self.mutable {
            self.map_points(f);
            Cow::Borrowed(self)
        } else {
            let mut copy = self.clone();
            copy.map_points(f);
            Cow::Owned(copy)
        }
    }

    /// Appends points in place regardless of the mutability flag.
    ///
    /// Used by owners that already resolved the copy-on-write decision.
    pub fn extend_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.extend(points);
    }

    /// Maps every point in place regardless of the mutability flag.
    pub fn map_points(&mut self, f: impl Fn(Point) -> Point) {
        for point in &mut self.points {
            *point = f(*point);
        }
    }

    /// Samples a point along the path.
    ///
    /// Without `segment_index`, `t` in `[0, 1]` is an arc-length parameter:
    /// `0` is the first point and `1` the end of the path, which for a
    /// `closed` path is the first point again. Each segment owns the slice of
    /// `[0, 1]` proportional to its share of the total length.
    ///
    /// With `segment_index`, `t` interpolates directly between the end points
    /// of that segment and may leave `[0, 1]` to extrapolate along it.
    ///
    /// # Errors
    ///
    /// - [`PathError::ParameterOutOfRange`] if `t` is outside `[0, 1]` and no
    ///   segment is given.
    /// - [`PathError::SegmentOutOfRange`] if `segment_index` does not name a
    ///   segment: `n - 1` segments for an open path of `n` points, `n` for a
    ///   closed one.
    pub fn parametric_point(
        &self,
        t: f32,
        closed: bool,
        segment_index: Option<usize>,
    ) -> Result<Point, PathError> {
        let mut points = Cow::Borrowed(self.points.as_slice());
        if closed {
            points.to_mut().push(self.first());
        }
        let segments = points.len() - 1;

        if let Some(index) = segment_index {
            if index >= segments {
                return Err(PathError::SegmentOutOfRange { index, segments });
            }
            return Ok(lerp(points[index], points[index + 1], t));
        }

        if !(0.0..=1.0).contains(&t) {
            return Err(PathError::ParameterOutOfRange { t });
        }

        let cumulative: Vec<f32> = points
            .windows(2)
            .scan(0.0, |acc, pair| {
                *acc += pair[1].sub_point(pair[0]).length();
                Some(*acc)
            })
            .collect();
        let total = cumulative.last().copied().unwrap_or(0.0);
        if total == 0.0 {
            return Ok(self.first());
        }

        let Some(index) = cumulative.iter().position(|&len| t < len / total) else {
            return Ok(points[segments]);
        };
        let window_start = if index == 0 {
            0.0
        } else {
            cumulative[index - 1] / total
        };
        let window_end = cumulative[index] / total;
        let local_t = (t - window_start) / (window_end - window_start);
        trace!(t, segment = index, local_t; "Sampled path");

        Ok(lerp(points[index], points[index + 1], local_t))
    }
}

fn lerp(start: Point, end: Point, t: f32) -> Point {
    start.add_point(end.sub_point(start).scale(t))
}
