//! Sort Engine
//!
//! Orders the keys of a [`SourceMap`] by one of its dimensions:
//! 1. borrow the entries (input order is irrelevant)
//! 2. coerce the selected field of every entry once, failing the whole call
//!    on the first field that does not fit the interpretation
//! 3. compare the pre-coerced keys, honouring the direction flag
//! 4. when sorting by values, break ties by the key's text, always ascending
//! 5. project to the original keys, keeping at most `limit` of them

use crate::core_types::schema::OP_MAP_SORT;
use crate::datetime::{DateParseOptions, DateParser, FlexibleDateParser};
use crate::errors::{MapSortError, Result};
use crate::model::{Dimension, Field, Interpretation, SortConfig, Value};
use crate::source::SourceMap;
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// A selected field after coercion
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Length(usize),
    Int(i64),
    Float(f64),
    Time(DateTime<Utc>),
}

impl SortKey {
    // Every key in one call comes from the same interpretation, so mixed
    // variants never meet.
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Length(a), SortKey::Length(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Working-set entry, alive for one call only
struct Entry<'m, K> {
    key: &'m K,
    sort_key: SortKey,
    /// Rendered key text, present only when sorting by values
    tie_break: Option<String>,
}

/// Sort the keys of `map` with the default date parser
///
/// `limit` of `None` or `Some(0)` returns every key.
///
/// # Errors
/// * `NotAMap` - If `map` is not an associative collection
/// * `Coercion` - If a selected field does not fit `interpretation`
/// * `DateTimeParse` - If a text field cannot be read as a date/time
/// * `Unknown` - If a field conversion or the parser aborted unexpectedly
pub fn sort<M: SourceMap + ?Sized>(
    map: &M,
    dimension: Dimension,
    interpretation: Interpretation,
    descending: bool,
    limit: Option<usize>,
) -> Result<Vec<M::Key>> {
    sort_config(
        map,
        &SortConfig::new(dimension, interpretation, descending, limit),
    )
}

/// Sort the keys of `map` as described by `config`
///
/// Ambiguous numeric dates are read day-first and retried month-first.
///
/// # Errors
/// See [`sort`].
pub fn sort_config<M: SourceMap + ?Sized>(map: &M, config: &SortConfig) -> Result<Vec<M::Key>> {
    let parser = FlexibleDateParser::new(DateParseOptions {
        retry_ambiguous_with_swap: true,
        prefer_month_first: false,
    });
    sort_with_parser(map, config, &parser)
}

/// Sort the keys of `map` using a caller-supplied date parser
///
/// # Errors
/// See [`sort`].
pub fn sort_with_parser<M: SourceMap + ?Sized>(
    map: &M,
    config: &SortConfig,
    parser: &dyn DateParser,
) -> Result<Vec<M::Key>> {
    let start = Instant::now();
    log_op_start!(
        OP_MAP_SORT,
        dimension = %config.dimension,
        interpretation = %config.interpretation,
        descending = config.descending,
        limit = config.limit.unwrap_or(0)
    );

    let result = panic::catch_unwind(AssertUnwindSafe(|| sort_entries(map, config, parser)))
        .unwrap_or_else(|payload| {
            Err(MapSortError::Unknown {
                message: panic_message(payload.as_ref()),
            })
        });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(keys) => log_op_end!(OP_MAP_SORT, duration_ms = duration_ms, result_len = keys.len()),
        Err(err) => log_op_error!(OP_MAP_SORT, err, duration_ms = duration_ms),
    }
    result
}

fn sort_entries<M: SourceMap + ?Sized>(
    map: &M,
    config: &SortConfig,
    parser: &dyn DateParser,
) -> Result<Vec<M::Key>> {
    let pairs = map.entries()?;
    tracing::trace!(entry_count = pairs.len(), "materialised entries");

    let mut entries = pairs
        .into_iter()
        .map(|(key, value)| {
            let field = match config.dimension {
                Dimension::Keys => key.to_value(),
                Dimension::Values => value.to_value(),
            };
            let sort_key = coerce(field, config.dimension, config.interpretation, parser)?;
            let tie_break = match config.dimension {
                Dimension::Values => Some(key.to_value().to_string()),
                Dimension::Keys => None,
            };
            Ok(Entry {
                key,
                sort_key,
                tie_break,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let descending = config.descending;
    let take = config.effective_limit(entries.len());
    if take < entries.len() {
        entries.select_nth_unstable_by(take - 1, |a, b| compare_entries(a, b, descending));
        entries.truncate(take);
    }
    entries.sort_unstable_by(|a, b| compare_entries(a, b, descending));

    Ok(entries.into_iter().map(|entry| entry.key.clone()).collect())
}

fn compare_entries<K>(a: &Entry<'_, K>, b: &Entry<'_, K>, descending: bool) -> Ordering {
    let primary = if descending {
        b.sort_key.compare(&a.sort_key)
    } else {
        a.sort_key.compare(&b.sort_key)
    };
    // Tie-break ignores the direction flag.
    match (primary, &a.tie_break, &b.tie_break) {
        (Ordering::Equal, Some(ka), Some(kb)) => ka.cmp(kb),
        _ => primary,
    }
}

fn coerce(
    field: Value,
    dimension: Dimension,
    interpretation: Interpretation,
    parser: &dyn DateParser,
) -> Result<SortKey> {
    let mismatch = |field: &Value, reason: String| MapSortError::Coercion {
        dimension,
        interpretation,
        value: field.to_string(),
        reason,
    };

    match (interpretation, field) {
        (Interpretation::String, Value::Text(s)) => Ok(SortKey::Text(s)),
        (Interpretation::StringLength, Value::Text(s)) => Ok(SortKey::Length(s.len())),
        (Interpretation::Integer, Value::Int(i)) => Ok(SortKey::Int(i)),
        (Interpretation::Integer, Value::Text(s)) => match s.parse::<i64>() {
            Ok(i) => Ok(SortKey::Int(i)),
            Err(e) => Err(mismatch(
                &Value::Text(s),
                format!("cannot convert string to int: {}", e),
            )),
        },
        (Interpretation::Float, Value::Float(x)) => Ok(SortKey::Float(x)),
        (Interpretation::Float, Value::Text(s)) => match s.parse::<f64>() {
            Ok(x) => Ok(SortKey::Float(x)),
            Err(e) => Err(mismatch(
                &Value::Text(s),
                format!("cannot convert string to float: {}", e),
            )),
        },
        (Interpretation::DateTime, Value::DateTime(dt)) => Ok(SortKey::Time(dt)),
        (Interpretation::DateTime, Value::Text(s)) => {
            parser
                .parse(&s)
                .map(SortKey::Time)
                .map_err(|failure| MapSortError::DateTimeParse {
                    dimension,
                    token: s,
                    reason: failure.reason,
                })
        }
        (interpretation, other) => {
            let expected = match interpretation {
                Interpretation::String | Interpretation::StringLength => "text".to_string(),
                native => format!("{} or coercible text", native),
            };
            let reason = format!("expected {}, found {}", expected, other.kind_name());
            Err(mismatch(&other, reason))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
