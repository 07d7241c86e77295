use mediscribe::presentation::Environment;

#[test]
fn given_known_environment_strings_when_parsing_then_maps_case_insensitively() {
    assert_eq!(
        Environment::try_from("local".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from("Test".to_string()),
        Ok(Environment::Test)
    );
    assert_eq!(
        Environment::try_from("PROD".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_environment_string_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());
    assert!(result.is_err());
}

#[test]
fn given_environment_when_displaying_then_uses_canonical_name() {
    assert_eq!(Environment::Local.to_string(), "Local");
    assert_eq!(Environment::Prod.to_string(), "Prod");
}
