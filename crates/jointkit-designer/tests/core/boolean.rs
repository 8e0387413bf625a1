use jointkit_camtools::{BoxJoint, JointTemplate};
use jointkit_core::{Loop, Point};
use jointkit_designer::clipper::{loops_of, merge, offset, region_area};
use jointkit_designer::{difference, intersection, union, xor};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Loop {
    Loop::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

#[test]
fn test_difference_of_union_returns_subject() {
    let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
    let b = vec![rect(20.0, 0.0, 30.0, 5.0)];
    let back = difference(&union(&a, &b), &b);
    assert_eq!(back.len(), 1);
    assert!((region_area(&back) - 100.0).abs() < 1e-9);
}

#[test]
fn test_intersection_and_xor_areas() {
    let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
    let b = vec![rect(5.0, 0.0, 15.0, 10.0)];
    assert!((region_area(&intersection(&a, &b)) - 50.0).abs() < 1e-9);
    assert!((region_area(&xor(&a, &b)) - 100.0).abs() < 1e-9);
}

#[test]
fn test_box_halves_fill_the_band() {
    let joint = BoxJoint::new(3.0, 5).unwrap();
    let a = joint.make_a(100.0).unwrap();
    let b = joint.make_b(100.0).unwrap();

    let mut pieces = loops_of(&[a.subtractive], 20);
    pieces.extend(loops_of(&[b.subtractive], 20));
    assert_eq!(pieces.len(), 5);

    let band = merge(&pieces);
    assert_eq!(band.len(), 1);
    assert!((region_area(&band) - 300.0).abs() < 1e-9);
    assert_eq!(band[0].bounds(), Some((Point::new(0.0, 0.0), Point::new(100.0, 3.0))));
}

#[test]
fn test_offset_round_trip_is_close() {
    let square = vec![rect(0.0, 0.0, 20.0, 20.0)];
    let grown = offset(&square, 1.0, 8).unwrap();
    let back = offset(&grown, -1.0, 8).unwrap();
    assert!((region_area(&back) - 400.0).abs() < 0.5);
}
