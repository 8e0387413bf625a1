use jointkit_camtools::{CamToolError, JointFactory, ParameterError};
use jointkit_core::{
    FastenerChart, FastenerSpec, FitValues, JointParameters, JointSide, LookupError,
    MaterialLibrary, Point,
};

fn parse(json: &str) -> JointParameters {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_tab_and_slot_uses_material_fit() {
    let factory = JointFactory::default();
    let params = parse(
        r#"{"thickness": 3, "material": "acrylic", "type": "tab_and_slot",
            "tabsize": 10, "tabspace": 10, "tabnum": 2, "fit": "clearance"}"#,
    );

    // acrylic clearance is 0.15
    let a = factory.generate(&params, 60.0, JointSide::A).unwrap();
    let first_tab = a.additive.start_point().unwrap();
    assert!(first_tab.approx_eq(&Point::new(15.075, -3.0), 1e-9));

    let b = factory.generate(&params, 60.0, JointSide::B).unwrap();
    let first_slot = b.subtractive.start_point().unwrap();
    assert!(first_slot.approx_eq(&Point::new(14.925, 0.0), 1e-9));
}

#[test]
fn test_injected_tables() {
    let materials = MaterialLibrary::new().with_material("cork", FitValues::new(0.3, 0.1, -0.1));
    let fasteners = FastenerChart::new().with_size("M8", FastenerSpec::new(13.0, 6.5, 8.0));
    let factory = JointFactory::new(materials, fasteners);

    let params = parse(
        r#"{"thickness": 12, "material": "cork", "type": "bolt",
            "boltsize": "m8", "boltspace": 30, "boltnum": 2, "boltlength": 40}"#,
    );
    let b = factory.generate(&params, 200.0, JointSide::B).unwrap();
    assert_eq!(b.subtractive.subpaths().len(), 2);

    let plywood = parse(r#"{"thickness": 3, "material": "plywood", "type": "flat"}"#);
    assert!(matches!(
        factory.generate(&plywood, 50.0, JointSide::B),
        Err(CamToolError::Lookup(LookupError::UnknownMaterial(_)))
    ));
}

#[test]
fn test_dimension_violation_before_geometry() {
    let factory = JointFactory::default();
    let params = parse(
        r#"{"thickness": 3, "material": "mdf", "type": "box", "segments": 1}"#,
    );
    assert!(matches!(
        factory.generate(&params, 100.0, JointSide::A),
        Err(CamToolError::Parameter(ParameterError::OutOfRange { .. }))
    ));

    let params = parse(r#"{"thickness": -2, "material": "mdf", "type": "flat"}"#);
    assert!(factory.generate(&params, 100.0, JointSide::A).is_err());
}

#[test]
fn test_zero_length_edge_rejected() {
    let factory = JointFactory::default();
    let params = parse(r#"{"thickness": 3, "material": "mdf", "type": "box", "segments": 3}"#);
    assert!(factory.generate(&params, 0.0, JointSide::A).is_err());
}
