//! Integration tests for the public Diagram API.

use figura::{Anchor, Diagram, FiguraError, Variant, combine};
use figura_core::{color::Paint, geometry::Point, transform};
use proptest::prelude::*;

fn square(size: f32) -> Diagram {
    Diagram::polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(size, 0.0),
        Point::new(size, size),
        Point::new(0.0, size),
    ])
    .unwrap()
}

fn point() -> impl Strategy<Value = Point> {
    (-100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y)| Point::new(x, y))
}

fn points(min: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), min..8)
}

/// A polygon, a curve, or a nested group of both.
fn diagram() -> impl Strategy<Value = Diagram> {
    (points(1), points(2), 0usize..3).prop_map(|(a, b, shape)| {
        let polygon = Diagram::polygon(a).unwrap();
        let curve = Diagram::curve(b).unwrap();
        match shape {
            0 => polygon,
            1 => curve,
            _ => combine([&polygon, &combine([&curve])]),
        }
    })
}

proptest! {
    #[test]
    fn test_translation_moves_bounding_box(d in diagram(), v in point()) {
        let expected = d.bounding_box().translate(v);
        let actual = d.transform(transform::translate(v)).bounding_box();

        prop_assert!(actual.min_point().approx_eq(expected.min_point(), 1e-3));
        prop_assert!(actual.max_point().approx_eq(expected.max_point(), 1e-3));
    }

    #[test]
    fn test_curve_parametric_end_points(pts in points(2)) {
        let curve = Diagram::curve(pts.clone()).unwrap();
        prop_assert_eq!(curve.parametric_point(0.0, None).unwrap(), pts[0]);
        prop_assert_eq!(curve.parametric_point(1.0, None).unwrap(), pts[pts.len() - 1]);
    }

    #[test]
    fn test_copy_is_structurally_equal(d in diagram()) {
        let copy = d.copy();
        prop_assert!(copy == d);
        prop_assert!(!copy.ptr_eq(&d));
    }

    #[test]
    fn test_mutable_round_trip_matches_original(d in diagram(), v in point()) {
        let round_trip = d.mutable().immutable();

        prop_assert!(round_trip == d);
        prop_assert_eq!(round_trip.is_mutable(), false);
        prop_assert_eq!(round_trip.bounding_box(), d.bounding_box());
        prop_assert!(round_trip.translate(v) == d.translate(v));
    }
}

#[test]
fn test_combine_without_inputs_is_origin_point() {
    let none: [&Diagram; 0] = [];
    let bounds = combine(none).bounding_box();

    assert_eq!(bounds.min_point(), Point::new(0.0, 0.0));
    assert_eq!(bounds.max_point(), Point::new(0.0, 0.0));
}

#[test]
fn test_combine_origin_comes_from_first_input() {
    let sq = square(1.0);
    let curve = Diagram::curve(vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)])
        .unwrap()
        .move_origin(Point::new(5.0, 5.0));

    let group = combine([&sq, &curve]);
    assert_eq!(group.origin(), Point::new(0.0, 0.0));

    let styled = combine([&sq.fill(Paint::None), &curve.stroke(Paint::None)]);
    assert_eq!(styled.origin(), Point::new(0.0, 0.0));

    let reversed = curve.combine([&sq]);
    assert_eq!(reversed.origin(), Point::new(5.0, 5.0));
}

#[test]
fn test_anchor_top_right_by_name() {
    let polygon = Diagram::polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 6.0),
        Point::new(0.0, 6.0),
    ])
    .unwrap();

    let anchor: Anchor = "top-right".parse().unwrap();
    assert_eq!(polygon.get_anchor(anchor), Point::new(4.0, 6.0));
    assert!(matches!(
        "upper-right".parse::<Anchor>(),
        Err(FiguraError::UnknownAnchor(_))
    ));
}

#[test]
fn test_curve_half_lands_on_corner() {
    let curve = Diagram::curve(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ])
    .unwrap();

    assert_eq!(curve.path_length().unwrap(), 20.0);
    assert_eq!(
        curve.parametric_point(0.5, None).unwrap(),
        Point::new(10.0, 0.0)
    );
}

#[test]
fn test_multiline_markup() {
    let text = Diagram::multiline_markup("plain [b]bold[/b] tail", None).unwrap();
    assert_eq!(text.variant(), Variant::MultilineText);

    let runs = text.multiline_data().unwrap().runs;
    let texts: Vec<&str> = runs.iter().map(|run| run.text()).collect();
    assert_eq!(texts, vec!["plain ", "bold", " tail"]);
}

#[test]
fn test_multiline_markup_failure_keeps_source() {
    let err = Diagram::multiline_markup("[b]unterminated", None).unwrap_err();
    match err {
        FiguraError::Markup { err, src } => {
            assert_eq!(src, "[b]unterminated");
            assert!(!err.diagnostics().is_empty());
        }
        other => panic!("expected a markup error, got {other:?}"),
    }
}

#[test]
fn test_mutable_chain_edits_one_tree() {
    let scene = combine([&square(1.0), &Diagram::text("label")]).mutable();

    let result = scene
        .translate(Point::new(1.0, 1.0))
        .fill(Paint::None)
        .font_size(12.0)
        .append_tags(["scene"]);

    assert!(result.ptr_eq(&scene));
    assert_eq!(scene.origin(), Point::new(1.0, 1.0));
    assert!(scene.contains_tag("scene"));
    assert_eq!(scene.children()[0].style().fill, Some(Paint::None));
    assert_eq!(scene.children()[1].text_data().unwrap().font_size, Some(12.0));
}

#[test]
fn test_immutable_chain_leaves_every_input() {
    let original = combine([&square(1.0), &Diagram::text("label")]);
    let snapshot = original.copy();

    let _ = original
        .rotate(1.0, Point::default())
        .scale(2.0, Point::default())
        .hflip()
        .opacity(0.5)
        .to_curve()
        .flatten();

    assert!(original == snapshot);
}
