use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> LineSegment {
    LineSegment::from_coords(x0, y0, x1, y1)
}

#[test]
fn perpendicular_diagonals_cross_at_center() {
    let a = seg(0.0, 0.0, 4.0, 4.0);
    let b = seg(0.0, 4.0, 4.0, 0.0);
    assert_eq!(intersect(&a, &b), Some(Point2F::new(2.0, 2.0)));
    assert_eq!(a.intersect(&b), Some(Point2F::new(2.0, 2.0)));
}

#[test]
fn vertical_and_horizontal_cross() {
    let v = seg(2.0, 0.0, 2.0, 5.0);
    let h = seg(0.0, 2.0, 5.0, 2.0);
    assert_eq!(intersect(&v, &h), Some(Point2F::new(2.0, 2.0)));
    assert_eq!(intersect(&h, &v), Some(Point2F::new(2.0, 2.0)));
}

#[test]
fn vertical_segment_constrains_y() {
    // Lines meet at (2, 5), above the top of the vertical segment.
    let v = seg(2.0, 0.0, 2.0, 1.0);
    let h = seg(0.0, 5.0, 5.0, 5.0);
    assert_eq!(
        intersect_as_infinite_lines(&v, &h),
        Some(Point2F::new(2.0, 5.0))
    );
    assert_eq!(intersect(&v, &h), None);
    assert_eq!(relation(&v, &h), SegmentRelation::Disjoint(Point2F::new(2.0, 5.0)));
}

#[test]
fn parallel_segments_never_intersect() {
    let a = seg(0.0, 0.0, 1.0, 1.0);
    let b = seg(0.0, 1.0, 1.0, 2.0);
    assert_eq!(intersect(&a, &b), None);
    assert_eq!(intersect_as_infinite_lines(&a, &b), None);
    assert!(relation(&a, &b).is_parallel());

    let v1 = seg(1.0, 0.0, 1.0, 3.0);
    let v2 = seg(2.0, 0.0, 2.0, 3.0);
    assert_eq!(intersect_as_infinite_lines(&v1, &v2), None);
}

#[test]
fn crossing_outside_a_segment_is_rejected() {
    let a = seg(0.0, 0.0, 1.0, 1.0);
    let b = seg(2.0, 0.0, 3.0, -1.0);
    assert_eq!(
        intersect_as_infinite_lines(&a, &b),
        Some(Point2F::new(1.0, 1.0))
    );
    assert_eq!(intersect(&a, &b), None);
    assert_eq!(relation(&a, &b).label(), "disjoint");
}

#[test]
fn segment_against_itself_is_parallel() {
    for l in [
        seg(0.0, 0.0, 3.0, 1.0),
        seg(-1.0, 2.0, -1.0, 7.0),
        seg(0.5, 0.5, -2.5, 0.5),
    ] {
        assert_eq!(intersect(&l, &l), None, "{l}");
        assert_eq!(relation(&l, &l), SegmentRelation::Parallel);
    }
}

#[test]
fn shared_endpoint_counts_as_crossing() {
    let a = seg(0.0, 0.0, 1.0, 1.0);
    let b = seg(1.0, 1.0, 2.0, 0.0);
    assert_eq!(intersect(&a, &b), Some(Point2F::new(1.0, 1.0)));
}

#[test]
fn bounds_use_y_for_height() {
    let l = seg(1.0, 2.0, 5.0, 9.0);
    assert_eq!(l.bounds(), RectangleF::new(1.0, 2.0, 4.0, 7.0));
    let r = seg(5.0, 9.0, 1.0, 2.0);
    assert_eq!(r.bounds(), RectangleF::new(1.0, 2.0, 4.0, 7.0));
}

#[test]
fn direction_slope_and_intercept() {
    let l = seg(1.0, 2.0, 5.0, 10.0);
    assert_eq!(l.direction(), Vector2F::new(4.0, 8.0));
    assert_eq!(l.slope(), Some(2.0));
    assert_eq!(l.intercept(), Some(0.0));
    let v = seg(3.0, 0.0, 3.0, 1.0);
    assert!(v.is_vertical());
    assert_eq!(v.slope(), None);
    assert_eq!(v.intercept(), None);
    assert!((seg(0.0, 0.0, 3.0, 4.0).length() - 5.0).abs() < 1e-12);
}

#[test]
fn span_checks_are_inclusive() {
    let l = seg(4.0, 1.0, 0.0, 3.0);
    assert!(l.within_x(Point2F::new(0.0, 100.0)));
    assert!(l.within_x(Point2F::new(4.0, 100.0)));
    assert!(!l.within_x(Point2F::new(4.5, 2.0)));
    assert!(l.within_y(Point2F::new(-50.0, 3.0)));
    assert!(l.rect_contains_point(Point2F::new(1.0, 1.0)));
    assert!(!l.rect_contains_point(Point2F::new(1.0, 3.5)));
}

#[test]
fn contains_point_requires_collinearity() {
    let l = seg(0.0, 0.0, 4.0, 2.0);
    assert!(l.contains_point(Point2F::new(2.0, 1.0)));
    assert!(l.contains_point(l.start()));
    assert!(l.contains_point(l.end()));
    // Inside the box, off the line.
    assert!(!l.contains_point(Point2F::new(2.0, 1.5)));
    assert!(!l.contains_point(Point2F::new(6.0, 3.0)));
}

#[test]
fn zero_length_segment_acts_as_point() {
    let dot = seg(1.0, 1.0, 1.0, 1.0);
    assert!(dot.is_degenerate());
    let diag = seg(0.0, 0.0, 2.0, 2.0);
    let away = seg(0.0, 1.0, 2.0, 3.0);

    assert_eq!(intersect_as_infinite_lines(&dot, &diag), None);
    assert_eq!(intersect(&dot, &diag), Some(Point2F::new(1.0, 1.0)));
    assert_eq!(intersect(&diag, &dot), Some(Point2F::new(1.0, 1.0)));
    assert_eq!(intersect(&dot, &away), None);
    assert_eq!(relation(&dot, &away), SegmentRelation::Degenerate);

    let twin = seg(1.0, 1.0, 1.0, 1.0);
    let other = seg(2.0, 1.0, 2.0, 1.0);
    assert_eq!(intersect(&dot, &twin), Some(Point2F::new(1.0, 1.0)));
    assert_eq!(intersect(&dot, &other), None);

    let vertical = seg(1.0, 0.0, 1.0, 4.0);
    assert_eq!(intersect(&dot, &vertical), Some(Point2F::new(1.0, 1.0)));
}

#[test]
fn nan_input_is_never_an_intersection() {
    let a = seg(f32::NAN, 0.0, 1.0, 1.0);
    let b = seg(0.0, 1.0, 1.0, 0.0);
    assert_eq!(intersect(&a, &b), None);
    assert_eq!(intersect(&b, &a), None);
    assert_eq!(intersect_as_infinite_lines(&a, &b), None);
    assert_eq!(relation(&a, &b), SegmentRelation::Invalid);
}

#[test]
fn nearly_parallel_slopes_still_intersect() {
    // Slopes differ by far more than the strict threshold.
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(0.0, 0.001, 10.0, 9.999);
    let p = intersect(&a, &b).expect("lines are not parallel");
    assert!((p.x - 5.0).abs() < 1e-2 && (p.y - 5.0).abs() < 1e-2);
}

#[test]
fn randomized_crossings_lie_on_both_segments() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut hits = 0;
    for _ in 0..500 {
        let mut pt = || Point2F::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let a = LineSegment::new(pt(), pt());
        let b = LineSegment::new(pt(), pt());
        if let Some(p) = intersect(&a, &b) {
            hits += 1;
            let ra = a.bounds();
            let rb = b.bounds();
            let slack = 1e-2;
            assert!(p.x >= ra.left() - slack && p.x <= ra.right() + slack);
            assert!(p.y >= ra.top() - slack && p.y <= ra.bottom() + slack);
            assert!(p.x >= rb.left() - slack && p.x <= rb.right() + slack);
            assert!(p.y >= rb.top() - slack && p.y <= rb.bottom() + slack);
        }
    }
    assert!(hits > 0);
}

fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

fn segment() -> impl Strategy<Value = LineSegment> {
    (coord(), coord(), coord(), coord()).prop_map(|(a, b, c, d)| seg(a, b, c, d))
}

proptest! {
    #[test]
    fn intersection_is_order_independent(a in segment(), b in segment()) {
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
        prop_assert_eq!(relation(&a, &b), relation(&b, &a));
        prop_assert_eq!(
            intersect_as_infinite_lines(&a, &b),
            intersect_as_infinite_lines(&b, &a)
        );
    }

    #[test]
    fn nondegenerate_self_intersection_is_none(l in segment()) {
        prop_assume!(!l.is_degenerate());
        prop_assert_eq!(intersect(&l, &l), None);
    }

    #[test]
    fn polar_round_trip(r in 0.01f64..1000.0, theta in -10.0f64..10.0) {
        let v = Vector2F::from_polar(r, theta);
        prop_assert!((v.magnitude() - r).abs() <= 1e-5 * r.max(1.0));
        let angle = v.angle();
        prop_assert!((-PI..=PI).contains(&angle));
        prop_assert!(angular_distance(angle, theta) <= 1e-5);
    }
}

/// Distance on the circle, in [0, π].
fn angular_distance(a: f64, b: f64) -> f64 {
    ((a - b + PI).rem_euclid(TAU) - PI).abs()
}

#[test]
fn polar_half_turn_recovers_positive_pi() {
    let v = Vector2F::from_polar(1.0, PI);
    assert!(v.y >= 0.0);
    assert!((v.angle() - PI).abs() < 1e-6);
    // 3π wraps onto the same half turn.
    let w = Vector2F::from_polar(2.0, 3.0 * PI);
    assert!(angular_distance(w.angle(), PI) < 1e-6);
    assert!(w.angle() > 0.0);
}
