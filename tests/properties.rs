//! Randomized invariants over arbitrary gesture sequences.
//!
//! Each case builds a selector on a random frame and configuration, then
//! replays a random sequence of gestures (move, cross point move, resize from
//! each corner) with pointer positions well outside the frame. After every
//! step the selection must still satisfy the containment and aspect
//! invariants.
//!
//! Configurations whose minimum size cannot fit in the frame are skipped:
//! there the minimum deliberately wins over containment.

use proptest::prelude::*;
use zenselect::*;

const EPS: f64 = 1e-9;

#[derive(Clone, Debug)]
struct Case {
    frame: Frame,
    config: SelectorConfig,
}

fn case() -> impl Strategy<Value = Case> {
    (
        (200.0..1200.0f64, 200.0..1200.0f64, 0.25..2.0f64),
        (10.0..50.0f64, 10.0..50.0f64, 100.0..600.0f64, 100.0..600.0f64),
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
    )
        .prop_map(
            |((dw, dh, scale), (min_w, min_h, max_w, max_h), (relative, keep, custom, snap))| {
                Case {
                    frame: Frame::new(dw, dh, dw / scale, dh / scale),
                    config: SelectorConfig::default()
                        .min_size(min_w, min_h)
                        .max_size(max_w, max_h)
                        .relative(relative)
                        .keep_aspect(keep)
                        .custom_ratio(custom)
                        .cross_point_attached_to_border(snap),
                }
            },
        )
}

fn mode() -> impl Strategy<Value = DragMode> {
    prop_oneof![
        Just(DragMode::MovingRectangle),
        Just(DragMode::MovingCrossPoint),
        Just(DragMode::Resizing(Corner::NorthWest)),
        Just(DragMode::Resizing(Corner::NorthEast)),
        Just(DragMode::Resizing(Corner::SouthWest)),
        Just(DragMode::Resizing(Corner::SouthEast)),
    ]
}

fn pointer() -> impl Strategy<Value = Point> {
    (-500.0..2000.0f64, -500.0..2000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn gestures() -> impl Strategy<Value = Vec<(DragMode, Point, Vec<Point>)>> {
    prop::collection::vec(
        (mode(), pointer(), prop::collection::vec(pointer(), 1..8)),
        1..6,
    )
}

/// Whether the minimum size fits in the frame for this configuration.
fn minimum_fits(case: &Case, aspect_ratio: f64) -> bool {
    let c = &case.config;
    let f = &case.frame;
    let factor = if c.relative { 1.0 } else { f.scale() };
    let (min_w, max_w) = (c.min_width * factor, c.max_width * factor);
    let (min_h, max_h) = (c.min_height * factor, c.max_height * factor);
    if c.keep_aspect {
        let ratio = if c.custom_ratio {
            aspect_ratio
        } else {
            f.display_width / f.display_height
        };
        let lo = min_w.max(min_h * ratio);
        let hi = max_w
            .min(max_h * ratio)
            .min(f.display_width)
            .min(f.display_height * ratio);
        lo <= hi
    } else {
        min_w <= f.display_width && min_h <= f.display_height
    }
}

proptest! {
    #[test]
    fn selection_stays_in_frame(case in case(), gestures in gestures()) {
        let mut s = Selector::new(case.frame, case.config.clone()).unwrap();
        prop_assume!(minimum_fits(&case, s.aspect_ratio()));
        let bounds = case.frame.display_size();
        prop_assert!(s.rectangle().is_within(bounds, EPS));

        for (mode, down, moves) in gestures {
            s.begin_drag(mode, down);
            for p in moves {
                s.continue_drag(p);
                let r = s.rectangle();
                prop_assert!(r.is_within(bounds, EPS), "{r:?} escaped {bounds:?}");
                prop_assert!(r.width > 0.0 && r.height > 0.0);
                let c = s.cross_point();
                prop_assert!(c.x >= 0.0 && c.x <= bounds.width);
                prop_assert!(c.y >= 0.0 && c.y <= bounds.height);
            }
            s.end_drag();
        }
    }

    #[test]
    fn locked_resize_keeps_ratio(case in case(), gestures in gestures()) {
        let config = case.config.clone().keep_aspect(true).custom_ratio(true);
        let mut s = Selector::new(case.frame, config).unwrap();
        let ratio = s.aspect_ratio();

        for (mode, down, moves) in gestures {
            s.begin_drag(mode, down);
            for p in moves {
                s.continue_drag(p);
                let r = s.rectangle();
                prop_assert!((r.width / r.height - ratio).abs() < 1e-6);
            }
            s.end_drag();
        }
    }

    #[test]
    fn repeated_pointer_is_noop(
        case in case(),
        mode in mode(),
        down in pointer(),
        p in pointer(),
    ) {
        let mut s = Selector::new(case.frame, case.config).unwrap();
        s.begin_drag(mode, down);
        s.continue_drag(p);
        let (rect, cross) = (s.rectangle(), s.cross_point());
        let again = s.continue_drag(p);
        prop_assert!(!again.changed);
        prop_assert_eq!(s.rectangle(), rect);
        prop_assert_eq!(s.cross_point(), cross);
    }

    #[test]
    fn border_attached_point_on_edge(
        case in case(),
        moves in prop::collection::vec(pointer(), 1..10),
    ) {
        let config = case.config.clone().cross_point_attached_to_border(true);
        let mut s = Selector::new(case.frame, config).unwrap();
        let b = case.frame.display_size();
        s.begin_drag(DragMode::MovingCrossPoint, s.cross_point());
        for p in moves {
            s.continue_drag(p);
            let c = s.cross_point();
            prop_assert!(c.x == 0.0 || c.x == b.width || c.y == 0.0 || c.y == b.height);
        }
    }

    #[test]
    fn native_round_trip(
        case in case(),
        x in 0.0..400.0f64,
        y in 0.0..400.0f64,
        w in 1.0..400.0f64,
        h in 1.0..400.0f64,
    ) {
        let config = case.config.initial_rectangle(Rect::new(x, y, w, h));
        let s = Selector::new(case.frame, config).unwrap();
        let (back, _) = s.capture().to_display(s.scale());
        let r = s.rectangle();
        let tol = 1e-9 * (1.0 + r.right().max(r.bottom()));
        prop_assert!((back.x - r.x).abs() < tol);
        prop_assert!((back.y - r.y).abs() < tol);
        prop_assert!((back.width - r.width).abs() < tol);
        prop_assert!((back.height - r.height).abs() < tol);
    }
}
