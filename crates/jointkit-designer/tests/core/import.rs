use jointkit_core::{Model, Stage};
use jointkit_designer::{import_contours, import_file, parse_contours};
use jointkit_settings::{Config, EndpointMatch};
use std::io::Write;

const FRAGMENTED: &str = "\
# lid, drawn as four loose strokes
M 0,0 L 60,0
M 60,40 L 60,0
M 60,40 L 0,40
M 0,40 L 0,0
M 10,10 L 20,10 L 20,20 L 10,20 Z
";

#[test]
fn test_fragments_become_one_face() {
    let paths = parse_contours(FRAGMENTED).unwrap();
    assert_eq!(paths.len(), 5);

    let model = import_contours(&paths, &Config::default()).unwrap();
    assert_eq!(model.faces.len(), 1);
    let face = model.face("face1").unwrap();
    assert_eq!(face.edges().len(), 4);
    assert_eq!(face.paths(Stage::Cuts).len(), 1);
    assert!(model.unresolved.is_none());
}

#[test]
fn test_tolerant_stitching_from_config() {
    let text = "M 0,0 L 10,0\nM 10.0000001,0 L 10,10 L 0,10 L 0,0";
    let paths = parse_contours(text).unwrap();

    let exact = import_contours(&paths, &Config::default()).unwrap();
    assert!(exact.faces.is_empty());
    assert_eq!(exact.unresolved.map(|b| b.paths.len()), Some(1));

    let mut config = Config::default();
    config.stitching.endpoint_match = EndpointMatch::Tolerance { epsilon: 1e-6 };
    let tolerant = import_contours(&paths, &config).unwrap();
    assert_eq!(tolerant.faces.len(), 1);
}

#[test]
fn test_import_file_round_trips_model() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("contours.txt");
    std::fs::File::create(&input)
        .unwrap()
        .write_all(FRAGMENTED.as_bytes())
        .unwrap();

    let model = import_file(&input, &Config::default()).unwrap();
    let output = dir.path().join("model.json");
    model.save_to_file(&output).unwrap();
    assert_eq!(Model::load_from_file(&output).unwrap(), model);
}

#[test]
fn test_import_missing_file() {
    let err = import_file(std::path::Path::new("/nonexistent/contours.txt"), &Config::default())
        .unwrap_err();
    assert!(matches!(err, jointkit_designer::DesignerError::IoError(_)));
}
