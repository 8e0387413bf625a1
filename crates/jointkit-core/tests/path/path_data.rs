use jointkit_core::{Path, Point, Segment};

#[test]
fn test_parse_format_round_trip() {
    let data = "M 0,0 L 100,0 Q 110,5 100,10 C 80,20 20,20 0,10 Z M 40,4 L 60,4 L 60,6 L 40,6 Z";
    let path = Path::parse(data).unwrap();
    let again = Path::parse(&path.to_data()).unwrap();
    assert_eq!(again, path);
    assert_eq!(path.subpaths().len(), 2);
}

#[test]
fn test_fractional_coordinates_survive() {
    let path = Path::from_segments(vec![Segment::line(
        Point::new(0.1, -2.345),
        Point::new(1.0 / 3.0, 1e-7),
    )]);
    let again: Path = path.to_string().parse().unwrap();
    assert_eq!(again, path);
}

#[test]
fn test_exponent_and_compact_signs() {
    let path = Path::parse("M1e1-5L-1.5e+1,2").unwrap();
    assert_eq!(path.start_point(), Some(Point::new(10.0, -5.0)));
    assert_eq!(path.end_point(), Some(Point::new(-15.0, 2.0)));
}

#[test]
fn test_smooth_quadratic() {
    let path = Path::parse("M 0 0 Q 5 10 10 0 T 20 0").unwrap();
    match path.segments()[1] {
        Segment::QuadraticBezier { control, .. } => assert_eq!(control, Point::new(15.0, -10.0)),
        other => panic!("expected quadratic, got {:?}", other),
    }
}
