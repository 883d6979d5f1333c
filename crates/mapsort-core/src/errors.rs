use crate::model::{Dimension, Interpretation};
use thiserror::Error;

/// Result type alias using MapSortError
pub type Result<T> = std::result::Result<T, MapSortError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Input is not an associative collection
    NotAMap,
    /// A selected field cannot be interpreted as the requested type
    Coercion,
    /// A selected field's text is not a recognisable date/time
    DateTimeParse,
    /// Any other abort, wrapping its cause
    Unknown,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotAMap => "ERR_NOT_A_MAP",
            ExErrorKind::Coercion => "ERR_COERCION",
            ExErrorKind::DateTimeParse => "ERR_DATETIME_PARSE",
            ExErrorKind::Unknown => "ERR_UNKNOWN",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus the sort parameters
/// that were active when the failure happened.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    dimension: Option<Dimension>,
    interpretation: Option<Interpretation>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            dimension: None,
            interpretation: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the dimension that was being sorted
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Add the interpretation that was requested
    pub fn with_interpretation(mut self, interpretation: Interpretation) -> Self {
        self.interpretation = Some(interpretation);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    pub fn interpretation(&self) -> Option<Interpretation> {
        self.interpretation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(dimension) = self.dimension {
            write!(f, " (dimension: {})", dimension)?;
        }
        if let Some(interpretation) = self.interpretation {
            write!(f, " (interpretation: {})", interpretation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failures returned by the sort operation
///
/// Every failure aborts the whole operation; no partial result accompanies
/// an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapSortError {
    /// Input is not an associative collection
    #[error("Not a map type to sort: found {found}")]
    NotAMap { found: String },

    /// A selected field has the wrong native type or is not coercible text
    #[error("Cannot interpret {dimension} field {value:?} as {interpretation}: {reason}")]
    Coercion {
        dimension: Dimension,
        interpretation: Interpretation,
        value: String,
        reason: String,
    },

    /// The date parser rejected a text token
    #[error("Cannot convert {dimension} field {token:?} to datetime: {reason}")]
    DateTimeParse {
        dimension: Dimension,
        token: String,
        reason: String,
    },

    /// Any other abort raised while sorting
    #[error("Unknown failure: {message}")]
    Unknown { message: String },
}

impl MapSortError {
    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            MapSortError::NotAMap { .. } => ExErrorKind::NotAMap,
            MapSortError::Coercion { .. } => ExErrorKind::Coercion,
            MapSortError::DateTimeParse { .. } => ExErrorKind::DateTimeParse,
            MapSortError::Unknown { .. } => ExErrorKind::Unknown,
        }
    }
}

impl From<MapSortError> for ExError {
    fn from(err: MapSortError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);
        match err {
            MapSortError::Coercion {
                dimension,
                interpretation,
                ..
            } => ex
                .with_dimension(dimension)
                .with_interpretation(interpretation),
            MapSortError::DateTimeParse { dimension, .. } => ex
                .with_dimension(dimension)
                .with_interpretation(Interpretation::DateTime),
            MapSortError::NotAMap { .. } | MapSortError::Unknown { .. } => ex,
        }
    }
}

impl From<&MapSortError> for ExError {
    fn from(err: &MapSortError) -> Self {
        err.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ExErrorKind::NotAMap,
            ExErrorKind::Coercion,
            ExErrorKind::DateTimeParse,
            ExErrorKind::Unknown,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let err = ExError::new(ExErrorKind::NotAMap)
            .with_op("map_sort")
            .with_message("found integer");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_A_MAP]"));
        assert!(text.contains("'map_sort'"));
        assert!(text.contains("found integer"));
    }
}
