use jointkit_core::{loop_to_path, path_to_loop, Loop, Path, Point, DEFAULT_CURVE_SAMPLES};
use proptest::prelude::*;

fn regular_polygon(sides: usize, radius: f64, cx: f64, cy: f64) -> Loop {
    Loop::new((0..sides).map(|i| {
        let a = i as f64 * std::f64::consts::TAU / sides as f64;
        Point::new(cx + radius * a.cos(), cy + radius * a.sin())
    }))
}

proptest! {
    #[test]
    fn loop_path_round_trip(
        sides in 3usize..40,
        radius in 0.5f64..500.0,
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
    ) {
        let l = regular_polygon(sides, radius, cx, cy);
        let back = path_to_loop(&loop_to_path(&l), DEFAULT_CURVE_SAMPLES).unwrap();
        prop_assert_eq!(back, l);
    }
}

#[test]
fn test_curved_path_to_loop() {
    let path = Path::parse("M -1,0 A 1,1 0 0,1 1,0 A 1,1 0 0,1 -1,0 Z").unwrap();
    let l = path_to_loop(&path, 20).unwrap();
    // Two arcs of 21 samples sharing both endpoints.
    assert_eq!(l.len(), 41);
    assert!((l.area() - std::f64::consts::PI).abs() < 0.05);
}

#[test]
fn test_loop_to_path_closes() {
    let l = regular_polygon(4, 1.0, 0.0, 0.0);
    let path = loop_to_path(&l);
    assert!(path.is_closed());
    assert_eq!(path.len(), 4);
}
