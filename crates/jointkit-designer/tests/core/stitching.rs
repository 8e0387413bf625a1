use jointkit_core::{Path, Point, Segment};
use jointkit_designer::stitcher::{stitch, Stitcher};
use jointkit_settings::EndpointMatch;
use proptest::prelude::*;

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    Path::from_segments(vec![Segment::line(Point::new(x0, y0), Point::new(x1, y1))])
}

/// Edges of a regular polygon as separate fragments.
fn polygon_fragments(sides: usize) -> Vec<Path> {
    let corner = |i: usize| {
        let a = (i % sides) as f64 * std::f64::consts::TAU / sides as f64;
        Point::new((100.0 * a.cos()).round(), (100.0 * a.sin()).round())
    };
    (0..sides)
        .map(|i| Path::from_segments(vec![Segment::line(corner(i), corner(i + 1))]))
        .collect()
}

proptest! {
    #[test]
    fn cycle_of_fragments_closes_once(
        order in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
        flips in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let edges = polygon_fragments(12);
        let fragments: Vec<Path> = order
            .iter()
            .zip(&flips)
            .map(|(&i, &flip)| if flip { edges[i].reversed() } else { edges[i].clone() })
            .collect();

        let result = stitch(&fragments, EndpointMatch::Exact);
        prop_assert_eq!(result.closed.len(), 1);
        prop_assert!(result.open.is_empty());
        prop_assert_eq!(result.closed[0].len(), 12);
        prop_assert!(result.closed[0].is_closed());
    }
}

#[test]
fn test_shared_endpoint_joins_lengths() {
    let a = line(0.0, 0.0, 3.0, 0.0);
    let b = line(3.0, 0.0, 3.0, 4.0);
    let result = stitch(&[a.clone(), b.clone()], EndpointMatch::Exact);

    assert!(result.closed.is_empty());
    assert_eq!(result.open.len(), 1);
    assert_eq!(result.open[0].length(), a.length() + b.length());
}

#[test]
fn test_tolerance_bridges_serialization_noise() {
    let fragments = vec![
        line(0.0, 0.0, 10.0, 0.0),
        line(10.0000004, 0.0, 10.0, 10.0),
        line(10.0, 10.0, 0.0, 0.0000003),
    ];

    let exact = stitch(&fragments, EndpointMatch::Exact);
    assert!(exact.closed.is_empty());

    let tolerant = Stitcher::new(EndpointMatch::Tolerance { epsilon: 1e-6 }).stitch(&fragments);
    assert_eq!(tolerant.closed.len(), 1);
    assert!(tolerant.closed[0].is_closed());
    assert!(tolerant.open.is_empty());
}

#[test]
fn test_closed_input_passes_through() {
    let square = Path::parse("M 0,0 L 10,0 L 10,10 L 0,10 Z M 20,20 L 30,20").unwrap();
    let result = stitch(&[square], EndpointMatch::Exact);
    assert_eq!(result.closed.len(), 1);
    assert_eq!(result.open.len(), 1);
}
