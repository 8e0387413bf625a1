use jointkit_core::data::materials::*;
use jointkit_core::{FitClass, LookupError};

#[test]
fn test_builtin_fit_values() {
    let library = MaterialLibrary::builtin();
    assert_eq!(library.fit("plywood", FitClass::Clearance), Ok(0.10));
    assert_eq!(library.fit("plywood", FitClass::Friction), Ok(0.0));
    assert_eq!(library.fit("acrylic", FitClass::Press), Ok(-0.02));
}

#[test]
fn test_material_lookup_is_case_insensitive() {
    let library = MaterialLibrary::builtin();
    assert_eq!(
        library.fit("MDF", FitClass::Press),
        library.fit("mdf", FitClass::Press)
    );
}

#[test]
fn test_unknown_material() {
    let library = MaterialLibrary::builtin();
    assert_eq!(
        library.fit("balsa", FitClass::Clearance),
        Err(LookupError::UnknownMaterial("balsa".to_string()))
    );
}

#[test]
fn test_custom_material() {
    let library = MaterialLibrary::new().with_material("Felt", FitValues::new(0.3, 0.1, 0.0));
    assert_eq!(library.len(), 1);
    assert_eq!(library.names().collect::<Vec<_>>(), vec!["felt"]);
    assert_eq!(library.fit("felt", FitClass::Clearance), Ok(0.3));
}

#[test]
fn test_press_fit_interferes() {
    let library = MaterialLibrary::builtin();
    for name in library.names() {
        let values = library.get(name).unwrap();
        assert!(values.press <= 0.0, "{} press fit should interfere", name);
        assert!(values.clearance > 0.0, "{} clearance fit should gap", name);
    }
}
