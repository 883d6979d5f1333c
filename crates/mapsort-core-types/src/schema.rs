//! Canonical schema constants for structured logging and events
//!
//! These constants keep logging and error reporting consistent. `tracing`
//! takes field names as identifiers, so the macros spell them out literally;
//! consumers reading events back (capture layers, log processors) look them
//! up through these keys.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Sort parameters
pub const FIELD_DIMENSION: &str = "dimension";
pub const FIELD_INTERPRETATION: &str = "interpretation";
pub const FIELD_DESCENDING: &str = "descending";
pub const FIELD_LIMIT: &str = "limit";

// Collection sizes
pub const FIELD_ENTRY_COUNT: &str = "entry_count";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_MAP_SORT: &str = "map_sort";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
        assert!(!OP_MAP_SORT.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_field_keys_are_dotted() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
