use jointkit_core::{
    Bucket, EdgeRef, Face, Joint, JointKind, JointParameters, Model, ModelError, Path, Point,
    Stage,
};

fn sample_model() -> Model {
    let mut model = Model::new();
    model
        .attrib
        .insert("viewBox".to_string(), "0 0 200 100".to_string());
    let perimeter = Path::parse("M 0,0 L 100,0 L 100,100 L 0,100 Z").unwrap();
    let cut = Path::parse("M 40,40 L 60,40 L 60,60 L 40,60 Z").unwrap();
    model.add_face("face1", Face::from_outline(perimeter, vec![cut]));
    model.add_joint(
        "joint1",
        Joint::new(
            EdgeRef::new("face1", 0),
            EdgeRef::new("face1", 2),
            JointParameters {
                thickness: 3.0,
                material: "plywood".to_string(),
                kind: JointKind::Box { segments: 5 },
            },
        ),
    );
    model
}

#[test]
fn test_model_json_round_trip() {
    let model = sample_model();
    let json = model.to_json().unwrap();
    let back = Model::from_json(&json).unwrap();
    assert_eq!(back, model);
}

#[test]
fn test_model_json_shape() {
    let json = sample_model().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value["faces"]["face1"]["Perimeter"]["paths"][0],
        "M 0,0 L 100,0 L 100,100 L 0,100 Z"
    );
    assert_eq!(value["joints"]["joint1"]["joint_parameters"]["type"], "box");
    assert!(value.get("Unresolved").is_none());
}

#[test]
fn test_unresolved_bucket_round_trip() {
    let mut model = sample_model();
    model.unresolved = Some(Bucket::new(vec![Path::parse("M 0,0 L 5,5").unwrap()]));
    let back = Model::from_json(&model.to_json().unwrap()).unwrap();
    assert_eq!(back.unresolved, model.unresolved);
}

#[test]
fn test_edge_lookup() {
    let model = sample_model();
    let edge = model.edge(&EdgeRef::new("face1", 1)).unwrap();
    assert_eq!(edge.start(), Point::new(100.0, 0.0));
    assert_eq!(edge.end(), Point::new(100.0, 100.0));

    assert_eq!(
        model.edge(&EdgeRef::new("face1", 4)).unwrap_err(),
        ModelError::UnknownEdge {
            face: "face1".to_string(),
            edge: 4,
            count: 4
        }
    );
    assert!(matches!(
        model.edge(&EdgeRef::new("face9", 0)),
        Err(ModelError::UnknownFace { .. })
    ));
}

#[test]
fn test_face_stage_access() {
    let model = sample_model();
    let face = model.face("face1").unwrap();
    assert_eq!(face.paths(Stage::Cuts).len(), 1);
    assert!(!face.has_stage(Stage::Original));
}
