use jointkit_camtools::{place, BoxJoint, EdgeFrame, JointTemplate};
use jointkit_core::{Path, Point, Segment};

fn square() -> Path {
    Path::polyline(
        &[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ],
        true,
    )
}

#[test]
fn test_template_built_for_edge_length() {
    let edge = Path::from_segments(vec![Segment::line(
        Point::new(5.0, 5.0),
        Point::new(5.0, 15.0),
    )]);
    let joint = BoxJoint::new(1.0, 2).unwrap();
    let local = joint.make_a(edge.length()).unwrap().subtractive;
    assert_eq!(local.start_point(), Some(Point::new(5.0, 0.0)));

    let placed = place(&local, &edge).unwrap();
    // (5, 0) local is 5 along the edge.
    assert_eq!(placed.start_point(), Some(Point::new(5.0, 10.0)));
}

#[test]
fn test_box_fingers_land_inside_face() {
    let perimeter = square();
    // Top edge of a counter-clockwise square runs from (100,100) to (0,100).
    let top = perimeter.segments()[2];
    let frame = EdgeFrame::for_segment(&top, &perimeter, 20).unwrap();
    assert_eq!(frame.angle, 180.0);
    assert_eq!(frame.length, 100.0);

    let joint = BoxJoint::new(5.0, 5).unwrap();
    let placed = frame.place_geometry(&joint.make_a(frame.length).unwrap());
    for sub in placed.subtractive.subpaths() {
        for segment in sub.segments() {
            let p = segment.start();
            assert!(p.y >= 95.0 - 1e-9 && p.y <= 100.0 + 1e-9);
            assert!(p.x >= -1e-9 && p.x <= 100.0 + 1e-9);
        }
    }
}
