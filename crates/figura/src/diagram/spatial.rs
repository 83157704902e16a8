//! Geometry of diagrams: transforms, bounding boxes, anchors and sampling.

use figura_core::{
    error::PathError,
    geometry::{Bounds, Point},
    transform,
};
use log::trace;

use super::{Anchor, Diagram, DiagramNode, Shape, Variant};
use crate::error::FiguraError;

impl DiagramNode {
    fn map_points(&mut self, f: &dyn Fn(Point) -> Point) {
        if let Some(path) = self.shape.path_mut() {
            path.map_points(f);
        }
        self.origin = f(self.origin);
    }
}

// =============================================================================
// Transforms
// =============================================================================

impl Diagram {
    /// Maps every point of the subtree through `f`: paths, origins and the
    /// origins of groups.
    pub fn transform(&self, f: impl Fn(Point) -> Point) -> Diagram {
        self.rewrite(&|_| true, &|node| node.map_points(&f))
    }

    pub fn translate(&self, v: Point) -> Diagram {
        self.transform(transform::translate(v))
    }

    /// Moves the geometry so that the origin lands on `point`.
    pub fn position(&self, point: Point) -> Diagram {
        self.translate(point.sub_point(self.origin()))
    }

    /// Rotates by `angle` radians around `pivot`, counter-clockwise.
    pub fn rotate(&self, angle: f32, pivot: Point) -> Diagram {
        self.transform(transform::rotate(angle, pivot))
    }

    /// Uniform scaling about `origin`.
    ///
    /// Text sizes follow: the `font_scale` of text nodes and the
    /// `scale_factor` of multiline text are multiplied by `|s|`.
    pub fn scale(&self, s: f32, origin: Point) -> Diagram {
        let f = transform::scale(Point::new(s, s), origin);
        let factor = s.abs();
        self.rewrite(&|_| true, &|node| {
            node.map_points(&f);
            match &mut node.shape {
                Shape::Text(text) => {
                    text.font_scale = Some(text.font_scale.unwrap_or(1.0) * factor);
                }
                Shape::MultilineText { text, content } => {
                    text.font_scale = Some(text.font_scale.unwrap_or(1.0) * factor);
                    content.scale_factor *= factor;
                }
                _ => {}
            }
        })
    }

    /// Independent x/y scaling about `origin`. Text sizes are left alone.
    pub fn scale_xy(&self, factor: Point, origin: Point) -> Diagram {
        self.transform(transform::scale(factor, origin))
    }

    pub fn reflect_over_point(&self, q: Point) -> Diagram {
        self.transform(transform::reflect_over_point(q))
    }

    pub fn reflect_over_line(&self, p1: Point, p2: Point) -> Diagram {
        self.transform(transform::reflect_over_line(p1, p2))
    }

    /// Mirrors left to right about the vertical line through the origin.
    pub fn hflip(&self) -> Diagram {
        self.scale_xy(Point::new(-1.0, 1.0), self.origin())
    }

    /// Mirrors top to bottom about the horizontal line through the origin.
    pub fn vflip(&self) -> Diagram {
        self.scale_xy(Point::new(1.0, -1.0), self.origin())
    }

    pub fn skew_x(&self, angle: f32, y_base: f32) -> Diagram {
        self.transform(transform::skew_x(angle, y_base))
    }

    pub fn skew_y(&self, angle: f32, x_base: f32) -> Diagram {
        self.transform(transform::skew_y(angle, x_base))
    }
}

// =============================================================================
// Bounding Box and Anchors
// =============================================================================

impl Diagram {
    /// Axis-aligned bounds of the subtree.
    ///
    /// Text extent depends on font metrics known only at render time, so
    /// text nodes contribute the degenerate box at their origin.
    pub fn bounding_box(&self) -> Bounds {
        let node = self.inner.borrow();
        match &node.shape {
            Shape::Polygon(path) | Shape::Curve(path) | Shape::Image { path, .. } => {
                Bounds::from_points(path.points().iter().copied())
                    .unwrap_or_else(|| Bounds::from_point(node.origin))
            }
            Shape::Text(_) | Shape::MultilineText { .. } => Bounds::from_point(node.origin),
            Shape::Group(children) => children
                .iter()
                .map(Diagram::bounding_box)
                .reduce(|acc, bounds| acc.merge(&bounds))
                .unwrap_or_else(|| Bounds::from_point(node.origin)),
        }
    }

    pub fn get_anchor(&self, anchor: Anchor) -> Point {
        anchor.locate(&self.bounding_box())
    }

    /// Relocates the origin without moving any geometry.
    pub fn move_origin(&self, point: Point) -> Diagram {
        self.edit(|node| node.origin = point)
    }

    /// Relocates the origin onto one of the bounding box anchors.
    pub fn move_origin_to_anchor(&self, anchor: Anchor) -> Diagram {
        self.move_origin(self.get_anchor(anchor))
    }
}

// =============================================================================
// Paths and Sampling
// =============================================================================

impl Diagram {
    /// Arc length used for parametric sampling.
    ///
    /// Polygons measure their closed perimeter, curves their open length,
    /// groups the sum over their children.
    ///
    /// # Errors
    ///
    /// [`FiguraError::NotParametrizable`] for text, images, and groups
    /// containing them.
    pub fn path_length(&self) -> Result<f32, FiguraError> {
        let node = self.inner.borrow();
        match &node.shape {
            Shape::Polygon(path) => Ok(path.closed_length()),
            Shape::Curve(path) => Ok(path.length()),
            Shape::Group(children) => children.iter().map(Diagram::path_length).sum(),
            _ => Err(FiguraError::NotParametrizable {
                variant: node.variant(),
            }),
        }
    }

    /// Samples a point along the diagram.
    ///
    /// Polygons are sampled as closed paths, curves as open ones. A group
    /// spreads `t` over its children in proportion to their
    /// [`path_length`](Diagram::path_length) and samples the child owning
    /// `t`. With `segment_index`, a polygon or curve samples that segment
    /// directly and a group passes `t` to the child at that index.
    ///
    /// # Errors
    ///
    /// - [`FiguraError::Path`] if `t` or `segment_index` are out of range.
    /// - [`FiguraError::NotParametrizable`] for text and images.
    pub fn parametric_point(
        &self,
        t: f32,
        segment_index: Option<usize>,
    ) -> Result<Point, FiguraError> {
        let node = self.inner.borrow();
        match &node.shape {
            Shape::Polygon(path) => Ok(path.parametric_point(t, true, segment_index)?),
            Shape::Curve(path) => Ok(path.parametric_point(t, false, segment_index)?),
            Shape::Group(children) => match segment_index {
                Some(index) => children
                    .get(index)
                    .ok_or(PathError::SegmentOutOfRange {
                        index,
                        segments: children.len(),
                    })?
                    .parametric_point(t, None),
                None => group_parametric_point(children, t),
            },
            _ => Err(FiguraError::NotParametrizable {
                variant: node.variant(),
            }),
        }
    }

    /// Appends points to the path of a Polygon, Curve or Image.
    ///
    /// # Errors
    ///
    /// [`FiguraError::NoPath`] for other variants.
    pub fn add_points(
        &self,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<Diagram, FiguraError> {
        let variant = self.variant();
        if !variant.has_path() {
            return Err(FiguraError::NoPath { variant });
        }
        Ok(self.edit(|node| {
            if let Some(path) = node.shape.path_mut() {
                path.extend_points(points);
            }
        }))
    }

    /// Retags every polygon of the subtree as a curve.
    pub fn to_curve(&self) -> Diagram {
        self.rewrite(
            &|node| node.variant() == Variant::Polygon,
            &|node| retag(node, Variant::Curve),
        )
    }

    /// Retags every curve of the subtree as a polygon.
    pub fn to_polygon(&self) -> Diagram {
        self.rewrite(
            &|node| node.variant() == Variant::Curve,
            &|node| retag(node, Variant::Polygon),
        )
    }
}

fn retag(node: &mut DiagramNode, variant: Variant) {
    node.shape = match std::mem::replace(&mut node.shape, Shape::Group(Vec::new())) {
        Shape::Polygon(path) | Shape::Curve(path) => match variant {
            Variant::Polygon => Shape::Polygon(path),
            _ => Shape::Curve(path),
        },
        shape => shape,
    };
}

fn group_parametric_point(children: &[Diagram], t: f32) -> Result<Point, FiguraError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(PathError::ParameterOutOfRange { t }.into());
    }
    let Some(first) = children.first() else {
        return Err(PathError::Empty.into());
    };

    let lengths = children
        .iter()
        .map(Diagram::path_length)
        .collect::<Result<Vec<_>, _>>()?;
    let cumulative: Vec<f32> = lengths
        .iter()
        .scan(0.0, |acc, len| {
            *acc += len;
            Some(*acc)
        })
        .collect();
    let total = cumulative.last().copied().unwrap_or(0.0);
    if total == 0.0 {
        return first.parametric_point(0.0, None);
    }

    let Some(index) = cumulative.iter().position(|&len| t < len / total) else {
        return children[children.len() - 1].parametric_point(1.0, None);
    };
    let window_start = if index == 0 {
        0.0
    } else {
        cumulative[index - 1] / total
    };
    let window_end = cumulative[index] / total;
    let local_t = ((t - window_start) / (window_end - window_start)).clamp(0.0, 1.0);
    trace!(t, child = index, local_t; "Sampled group");

    children[index].parametric_point(local_t, None)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::diagram::combine;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Diagram {
        Diagram::polygon(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
        .unwrap()
    }

    fn segment(a: Point, b: Point) -> Diagram {
        Diagram::curve(vec![a, b]).unwrap()
    }

    #[test]
    fn test_translate_moves_path_and_origin() {
        let moved = rect(0.0, 0.0, 1.0, 1.0).translate(Point::new(2.0, 3.0));
        assert_eq!(moved.origin(), Point::new(2.0, 3.0));
        assert_eq!(moved.path().unwrap().first(), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_transform_reaches_group_children() {
        let group = combine([&rect(0.0, 0.0, 1.0, 1.0), &Diagram::text("t")]);
        let moved = group.translate(Point::new(1.0, 0.0));

        assert_eq!(moved.origin(), Point::new(1.0, 0.0));
        assert_eq!(moved.children()[1].origin(), Point::new(1.0, 0.0));
        assert_eq!(group.children()[1].origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
            .rotate(FRAC_PI_2, Point::new(0.0, 0.0));
        let end = rotated.path().unwrap().last();
        assert!(end.approx_eq(Point::new(0.0, 1.0), 1e-6));
    }

    #[test]
    fn test_scale_updates_text_scale() {
        let text = Diagram::text("a").scale(-2.0, Point::new(0.0, 0.0));
        assert_eq!(text.text_data().unwrap().font_scale, Some(2.0));

        let multiline = Diagram::multiline(Vec::new()).scale(3.0, Point::new(0.0, 0.0));
        assert_eq!(multiline.multiline_data().unwrap().scale_factor, 3.0);

        let stretched = Diagram::text("a").scale_xy(Point::new(2.0, 1.0), Point::default());
        assert_eq!(stretched.text_data().unwrap().font_scale, None);
    }

    #[test]
    fn test_flips_about_origin() {
        let d = rect(0.0, 0.0, 2.0, 1.0).move_origin(Point::new(1.0, 0.0));
        let flipped = d.hflip();
        assert_eq!(flipped.bounding_box(), d.bounding_box());

        let vflipped = d.vflip();
        assert_eq!(vflipped.bounding_box().min_y(), -1.0);
    }

    #[test]
    fn test_bounding_box_variants() {
        let polygon = rect(0.0, 0.0, 4.0, 6.0);
        assert_eq!(polygon.bounding_box().max_point(), Point::new(4.0, 6.0));

        let text = Diagram::text("t").position(Point::new(3.0, 3.0));
        assert_eq!(text.bounding_box(), Bounds::from_point(Point::new(3.0, 3.0)));

        let group = combine([&polygon, &segment(Point::new(-1.0, 2.0), Point::new(0.0, 8.0))]);
        let bounds = group.bounding_box();
        assert_eq!(bounds.min_point(), Point::new(-1.0, 0.0));
        assert_eq!(bounds.max_point(), Point::new(4.0, 8.0));
    }

    #[test]
    fn test_image_bounding_box_is_centered() {
        let image = Diagram::image("logo.png", 4.0, 2.0);
        let bounds = image.bounding_box();
        assert_eq!(bounds.min_point(), Point::new(-2.0, -1.0));
        assert_eq!(bounds.max_point(), Point::new(2.0, 1.0));
    }

    #[test]
    fn test_get_anchor_top_right() {
        let polygon = rect(0.0, 0.0, 4.0, 6.0);
        assert_eq!(polygon.get_anchor(Anchor::TopRight), Point::new(4.0, 6.0));
    }

    #[test]
    fn test_move_origin_keeps_geometry() {
        let polygon = rect(0.0, 0.0, 4.0, 6.0);
        let moved = polygon.move_origin_to_anchor(Anchor::CenterCenter);

        assert_eq!(moved.origin(), Point::new(2.0, 3.0));
        assert_eq!(moved.path(), polygon.path());
    }

    #[test]
    fn test_position_moves_geometry() {
        let polygon = rect(0.0, 0.0, 4.0, 6.0).move_origin(Point::new(2.0, 3.0));
        let placed = polygon.position(Point::new(0.0, 0.0));

        assert_eq!(placed.origin(), Point::new(0.0, 0.0));
        assert_eq!(placed.bounding_box().min_point(), Point::new(-2.0, -3.0));
    }

    #[test]
    fn test_parametric_point_polygon_is_closed() {
        let square = rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(square.parametric_point(1.0, None).unwrap(), Point::new(0.0, 0.0));
        assert_eq!(
            square.parametric_point(0.5, None).unwrap(),
            Point::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_parametric_point_group_spans_children() {
        let group = combine([
            &segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            &segment(Point::new(10.0, 0.0), Point::new(10.0, 30.0)),
        ]);

        assert_eq!(group.path_length().unwrap(), 40.0);
        assert_eq!(group.parametric_point(0.0, None).unwrap(), Point::new(0.0, 0.0));
        let p = group.parametric_point(0.625, None).unwrap();
        assert_approx_eq!(f32, p.x(), 10.0);
        assert_approx_eq!(f32, p.y(), 15.0);
        assert_eq!(
            group.parametric_point(1.0, None).unwrap(),
            Point::new(10.0, 30.0)
        );
    }

    #[test]
    fn test_parametric_point_group_segment_selects_child() {
        let group = combine([
            &segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            &segment(Point::new(0.0, 5.0), Point::new(0.0, 7.0)),
        ]);

        assert_eq!(
            group.parametric_point(0.5, Some(1)).unwrap(),
            Point::new(0.0, 6.0)
        );
        assert!(matches!(
            group.parametric_point(0.5, Some(2)),
            Err(FiguraError::Path(PathError::SegmentOutOfRange { index: 2, segments: 2 }))
        ));
    }

    #[test]
    fn test_parametric_point_errors() {
        assert!(matches!(
            Diagram::text("t").parametric_point(0.5, None),
            Err(FiguraError::NotParametrizable {
                variant: Variant::Text
            })
        ));
        assert!(matches!(
            Diagram::image("a.png", 1.0, 1.0).parametric_point(0.5, None),
            Err(FiguraError::NotParametrizable { .. })
        ));
        assert!(matches!(
            rect(0.0, 0.0, 1.0, 1.0).parametric_point(1.5, None),
            Err(FiguraError::Path(PathError::ParameterOutOfRange { .. }))
        ));

        let mixed = combine([&rect(0.0, 0.0, 1.0, 1.0), &Diagram::text("t")]);
        assert!(mixed.parametric_point(0.5, None).is_err());
    }

    #[test]
    fn test_add_points() {
        let curve = segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let longer = curve.add_points([Point::new(1.0, 1.0)]).unwrap();

        assert_eq!(curve.path().unwrap().point_count(), 2);
        assert_eq!(longer.path().unwrap().point_count(), 3);
        assert!(matches!(
            Diagram::text("t").add_points([Point::default()]),
            Err(FiguraError::NoPath {
                variant: Variant::Text
            })
        ));
    }

    #[test]
    fn test_to_curve_and_back() {
        let group = combine([&rect(0.0, 0.0, 1.0, 1.0), &Diagram::text("t")]);
        let curves = group.to_curve();

        assert_eq!(curves.children()[0].variant(), Variant::Curve);
        assert_eq!(curves.children()[1].variant(), Variant::Text);
        assert_eq!(curves.children()[0].path(), group.children()[0].path());

        let polygons = curves.to_polygon();
        assert_eq!(polygons, group);
    }
}
