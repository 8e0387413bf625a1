use jointkit_camtools::JointFactory;
use jointkit_core::{
    EdgeRef, Face, FastenerChart, FastenerSpec, FitClass, FitValues, Joint, JointKind,
    JointParameters, MaterialLibrary, Model, Path, Point, Stage,
};
use jointkit_designer::clipper::{loops_of, region_area};
use jointkit_designer::{extract_edges, process_design, DesignerError};
use jointkit_settings::Config;

fn square(x: f64, size: f64) -> Path {
    Path::polyline(
        &[
            Point::new(x, 0.0),
            Point::new(x + size, 0.0),
            Point::new(x + size, size),
            Point::new(x, size),
        ],
        true,
    )
}

fn two_panels(kind: JointKind) -> Model {
    let mut model = Model::new();
    model.add_face("face1", Face::from_outline(square(0.0, 100.0), vec![]));
    model.add_face("face2", Face::from_outline(square(200.0, 100.0), vec![]));
    model.add_joint(
        "corner",
        Joint::new(
            EdgeRef::new("face1", 2),
            EdgeRef::new("face2", 0),
            JointParameters {
                thickness: 5.0,
                material: "plywood".to_string(),
                kind,
            },
        ),
    );
    model
}

fn endpoints(path: &Path) -> Vec<Point> {
    path.segments()
        .iter()
        .flat_map(|segment| [segment.start(), segment.end()])
        .collect()
}

fn touches(path: &Path, point: Point) -> bool {
    endpoints(path).iter().any(|p| p.distance_to(&point) < 1e-6)
}

fn area(model: &Model, face: &str, stage: Stage) -> f64 {
    region_area(&loops_of(model.face(face).unwrap().paths(stage), 20))
}

#[test]
fn test_box_joint_end_to_end() {
    let model = two_panels(JointKind::Box { segments: 5 });
    let out = process_design(&model, &Config::default(), &JointFactory::default()).unwrap();

    // A notches two of five fingers out of the top edge, B the other three
    // out of the bottom edge.
    assert!((area(&out, "face1", Stage::Original) - 10000.0).abs() < 1e-6);
    assert!((area(&out, "face1", Stage::Processed) - 9800.0).abs() < 1e-6);
    assert!((area(&out, "face2", Stage::Processed) - 9700.0).abs() < 1e-6);

    // Each notch is one hidden fragment between two visible ones.
    let face1 = out.face("face1").unwrap();
    assert_eq!(face1.paths(Stage::Visible).len(), 2);
    assert_eq!(face1.paths(Stage::Hidden).len(), 2);
    let face2 = out.face("face2").unwrap();
    assert_eq!(face2.paths(Stage::Visible).len(), 3);
    assert_eq!(face2.paths(Stage::Hidden).len(), 3);

    // The finger tops of face1 stay on the original outline and are visible.
    let top = 100.05;
    let visible = face1.paths(Stage::Visible);
    assert!(visible.iter().any(|path| {
        let points = endpoints(path);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        points.iter().all(|p| (p.y - top).abs() < 1e-6)
            && (xs.iter().cloned().fold(f64::INFINITY, f64::min) - 40.0).abs() < 1e-6
            && (xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max) - 60.0).abs() < 1e-6
    }));
    for (a, b) in [(0.0, 20.0), (80.0, 100.0)] {
        assert!(
            visible
                .iter()
                .any(|path| touches(path, Point::new(a, top)) && touches(path, Point::new(b, top))),
            "finger top {}..{} is not visible",
            a,
            b
        );
    }

    // Hidden toolpaths of face1 only run along the jointed top edge.
    for path in out.face("face1").unwrap().paths(Stage::Hidden) {
        for segment in path.segments() {
            assert!(segment.start().y > 94.0 && segment.end().y > 94.0);
        }
    }
}

#[test]
fn test_tab_and_slot_adds_material() {
    let model = two_panels(JointKind::TabAndSlot {
        tabsize: 10.0,
        tabspace: 10.0,
        tabnum: 3,
        fit: FitClass::Clearance,
    });
    let out = process_design(&model, &Config::default(), &JointFactory::default()).unwrap();

    // Three tabs of (10 - 0.1) x 5 grow past face1's top edge.
    let expected_a = 10000.0 + 3.0 * 9.9 * 5.0;
    assert!((area(&out, "face1", Stage::Processed) - expected_a).abs() < 1e-6);
    // Three slots of (10 + 0.1) x 5 are cut from face2.
    let expected_b = 10000.0 - 3.0 * 10.1 * 5.0;
    assert!((area(&out, "face2", Stage::Processed) - expected_b).abs() < 1e-6);
}

#[test]
fn test_injected_tables_are_used() {
    let model = two_panels(JointKind::Bolt {
        boltsize: "m9".to_string(),
        boltspace: 20.0,
        boltnum: 2,
        boltlength: 20.0,
    });

    let err = process_design(&model, &Config::default(), &JointFactory::default()).unwrap_err();
    assert!(matches!(err, DesignerError::Joint { .. }));

    let factory = JointFactory::new(
        MaterialLibrary::new().with_material("plywood", FitValues::new(0.1, 0.0, -0.05)),
        FastenerChart::new().with_size("M9", FastenerSpec::new(6.0, 2.0, 2.0)),
    );
    let out = process_design(&model, &Config::default(), &factory).unwrap();
    assert!(area(&out, "face2", Stage::Processed) < 10000.0);
}

#[test]
fn test_unknown_edge_is_fatal() {
    let mut model = two_panels(JointKind::Flat);
    model.add_joint(
        "broken",
        Joint::new(
            EdgeRef::new("face1", 0),
            EdgeRef::new("face3", 0),
            JointParameters {
                thickness: 5.0,
                material: "plywood".to_string(),
                kind: JointKind::Flat,
            },
        ),
    );
    let err = process_design(&model, &Config::default(), &JointFactory::default()).unwrap_err();
    assert!(matches!(err, DesignerError::Model(_)));
}

#[test]
fn test_edges_listing_matches_faces() {
    let model = two_panels(JointKind::Flat);
    let edges = extract_edges(&model);
    assert_eq!(edges.len(), 8);
    assert_eq!(edges[2].edge_ref(), EdgeRef::new("face1", 2));
    assert_eq!(edges[2].angle, 180.0);
}
