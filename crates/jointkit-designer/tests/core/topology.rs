use jointkit_core::{Path, Point};
use jointkit_designer::topology::TopologyClassifier;
use jointkit_settings::ContainmentStrategy;

fn square(x: f64, y: f64, size: f64) -> Path {
    Path::polyline(
        &[
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ],
        true,
    )
}

#[test]
fn test_cuts_never_become_perimeters() {
    for strategy in [ContainmentStrategy::AnyVertex, ContainmentStrategy::AllVertices] {
        let classifier = TopologyClassifier::new(strategy, 20);
        let mut loops = vec![square(0.0, 0.0, 100.0)];
        for i in 0..6 {
            loops.push(square(5.0 + 15.0 * i as f64, 40.0, 10.0));
        }

        let result = classifier.classify(&loops);
        assert_eq!(result.faces.len(), 1);
        assert_eq!(result.faces[0].perimeter, loops[0]);
        assert_eq!(result.faces[0].cuts.len(), 6);
        assert!(result.orphans.is_empty());
    }
}

#[test]
fn test_open_and_degenerate_loops_are_orphans() {
    let classifier = TopologyClassifier::new(ContainmentStrategy::AnyVertex, 20);
    let open = Path::parse("M 0,0 L 10,0 L 10,10").unwrap();
    let flat = Path::parse("M 0,0 L 10,0 Z").unwrap();

    let result = classifier.classify(&[square(50.0, 50.0, 10.0), open, flat]);
    assert_eq!(result.faces.len(), 1);
    assert_eq!(result.orphans.len(), 2);
}

#[test]
fn test_circle_perimeter() {
    let classifier = TopologyClassifier::new(ContainmentStrategy::AnyVertex, 20);
    let disc = Path::parse("M -50,0 A 50,50 0 0,1 50,0 A 50,50 0 0,1 -50,0 Z").unwrap();
    let hole = square(-5.0, -5.0, 10.0);

    let result = classifier.classify(&[hole.clone(), disc.clone()]);
    assert_eq!(result.faces.len(), 1);
    assert_eq!(result.faces[0].perimeter, disc);
    assert_eq!(result.faces[0].cuts, vec![hole]);
}
