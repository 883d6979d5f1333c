//! mapsort core - ordered key extraction for unordered maps
//!
//! Given an associative collection, produce its keys ordered by:
//! - the dimension that drives the order (keys or values)
//! - the interpretation of that dimension (text, text length, integer,
//!   float, timestamp)
//! - the direction, with an optional top-N cap
//!
//! The [`engine`] holds the single sorting operation; [`fluent`] layers a
//! chaining configurator on top of it.
//!
//! ```
//! use std::collections::HashMap;
//! use mapsort_core::map;
//!
//! let scores: HashMap<&str, &str> =
//!     [("ann", "3"), ("bob", "10"), ("cid", "7")].into_iter().collect();
//! let ranked = map(&scores).by_values().as_integer().descending().top(2).resolve()?;
//! assert_eq!(ranked, vec!["bob", "cid"]);
//! # Ok::<(), mapsort_core::MapSortError>(())
//! ```

pub mod datetime;
pub mod engine;
pub mod errors;
pub mod fluent;
pub mod logging_facility;
pub mod model;
pub mod source;

pub use mapsort_core_types as core_types;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use datetime::{DateParseFailure, DateParseOptions, DateParser, FlexibleDateParser};
pub use engine::{sort, sort_config, sort_with_parser};
pub use errors::{ExError, ExErrorKind, MapSortError, Result};
pub use fluent::{map, MapSorter};
pub use model::{Dimension, Field, Interpretation, SortConfig, Value};
pub use source::SourceMap;
