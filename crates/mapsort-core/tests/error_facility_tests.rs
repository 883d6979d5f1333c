use mapsort_core::{Dimension, ExError, ExErrorKind, Interpretation, MapSortError};

#[test]
fn test_not_a_map_verifiable_by_kind() {
    let err = MapSortError::NotAMap {
        found: "number".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotAMap);
    assert_eq!(ex_err.code(), "ERR_NOT_A_MAP");
    assert!(ex_err.message().contains("number"));
    assert_eq!(ex_err.dimension(), None);
}

#[test]
fn test_coercion_carries_sort_parameters() {
    let err = MapSortError::Coercion {
        dimension: Dimension::Values,
        interpretation: Interpretation::Integer,
        value: "hello".to_string(),
        reason: "invalid digit found in string".to_string(),
    };

    let ex_err = ExError::from(&err);

    assert_eq!(ex_err.kind(), ExErrorKind::Coercion);
    assert_eq!(ex_err.code(), "ERR_COERCION");
    assert_eq!(ex_err.dimension(), Some(Dimension::Values));
    assert_eq!(ex_err.interpretation(), Some(Interpretation::Integer));
    assert!(ex_err.message().contains("\"hello\""));
}

#[test]
fn test_datetime_parse_maps_to_datetime_interpretation() {
    let err = MapSortError::DateTimeParse {
        dimension: Dimension::Keys,
        token: "hello".to_string(),
        reason: "unrecognised date/time layout".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DateTimeParse);
    assert_eq!(ex_err.interpretation(), Some(Interpretation::DateTime));
    assert_eq!(ex_err.dimension(), Some(Dimension::Keys));
}

#[test]
fn test_unknown_wraps_message() {
    let err = MapSortError::Unknown {
        message: "boom".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown failure: boom");

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_UNKNOWN");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::NotAMap, "ERR_NOT_A_MAP"),
        (ExErrorKind::Coercion, "ERR_COERCION"),
        (ExErrorKind::DateTimeParse, "ERR_DATETIME_PARSE"),
        (ExErrorKind::Unknown, "ERR_UNKNOWN"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_display_with_context() {
    let ex_err = ExError::new(ExErrorKind::Coercion)
        .with_op("map_sort")
        .with_dimension(Dimension::Values)
        .with_interpretation(Interpretation::Float)
        .with_message("bad token");

    let text = ex_err.to_string();
    assert_eq!(
        text,
        "[ERR_COERCION] in operation 'map_sort': bad token (dimension: values) (interpretation: float)"
    );
    assert_eq!(ex_err.op(), Some("map_sort"));
}
