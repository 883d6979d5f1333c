//! Canonical logging macros
//!
//! Operation boundaries are logged at debug level; failures at warn level,
//! since the error itself is handed back to the caller.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use mapsort_core::log_op_start;
/// log_op_start!("map_sort");
/// log_op_start!("map_sort", dimension = "values");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {{
        $crate::__tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    }};
    ($op:expr, $($field:tt)*) => {{
        $crate::__tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    }};
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use mapsort_core::log_op_end;
/// log_op_end!("map_sort", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {{
        $crate::__tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    }};
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        $crate::__tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    }};
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError),
/// including `&MapSortError`.
///
/// # Example
///
/// ```
/// # use mapsort_core::{log_op_error, errors::MapSortError};
/// let err = MapSortError::NotAMap { found: "number".to_string() };
/// log_op_error!("map_sort", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = ::std::convert::From::from($err);
        $crate::__tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ::std::convert::From::from($err);
        $crate::__tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
