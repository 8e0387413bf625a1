use jointkit_core::data::fasteners::*;
use jointkit_core::LookupError;

#[test]
fn test_m25_dimensions() {
    let chart = FastenerChart::builtin();
    let spec = chart.get("M2.5").unwrap();
    assert_eq!(spec.nut_width, 5.0);
    assert_eq!(spec.nut_height, 2.0);
    assert_eq!(spec.bolt_diameter, 2.5);
}

#[test]
fn test_lowercase_code() {
    let chart = FastenerChart::builtin();
    assert_eq!(chart.get("m3"), chart.get("M3"));
}

#[test]
fn test_unknown_size() {
    let chart = FastenerChart::builtin();
    assert_eq!(
        chart.get("M7").unwrap_err(),
        LookupError::UnknownFastenerSize("M7".to_string())
    );
}

#[test]
fn test_nut_wider_than_bolt() {
    let chart = FastenerChart::builtin();
    for code in chart.codes() {
        let spec = chart.get(code).unwrap();
        assert!(spec.nut_width > spec.bolt_diameter);
    }
}
