use pantry::{PantryError, Result};

#[test]
fn test_error_display() {
    let err = PantryError::RecipeNotFound("52772".to_string());
    assert!(err.to_string().contains("52772"));
}

#[test]
fn test_upstream_failure_display() {
    let err = PantryError::UpstreamRequestFailed {
        url: "https://www.themealdb.com/api/json/v1/1/filter.php?i=egg".into(),
        attempts: 3,
        reason: "API error (503): busy".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("filter.php?i=egg"));
    assert!(msg.contains("3 attempt"));
    assert!(msg.contains("503"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(PantryError::InvalidInput("empty".into()))
    }
    assert!(returns_error().is_err());
}

#[test]
fn test_json_conversion() {
    let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: PantryError = parse.unwrap_err().into();
    assert!(matches!(err, PantryError::Json(_)));
}

// ============================================================================
// Upstream error classification
// ============================================================================

#[test]
fn upstream_errors() {
    assert!(
        PantryError::UpstreamRequestFailed {
            url: "u".into(),
            attempts: 1,
            reason: "r".into(),
        }
        .is_upstream()
    );
    assert!(PantryError::Http("connection reset".into()).is_upstream());
    assert!(
        PantryError::Api {
            status: 500,
            message: "boom".into(),
        }
        .is_upstream()
    );
}

#[test]
fn local_errors() {
    assert!(!PantryError::InvalidInput("".into()).is_upstream());
    assert!(!PantryError::DuplicateIngredient("Salt".into()).is_upstream());
    assert!(!PantryError::UnknownCategory("Snacks".into()).is_upstream());
    assert!(!PantryError::Configuration("bad".into()).is_upstream());
    assert!(!PantryError::RecipeNotFound("0".into()).is_upstream());
}
