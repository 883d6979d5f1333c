//! Fluent Configurator
//!
//! Accumulates a [`SortConfig`] through chained calls and hands it to the
//! engine on `resolve`. Every setter overwrites the previous value of its
//! setting; nothing is validated until the sort runs.

use crate::datetime::DateParser;
use crate::engine;
use crate::errors::Result;
use crate::model::{Dimension, Interpretation, SortConfig};
use crate::source::SourceMap;
use std::fmt;

/// Chaining configurator over a borrowed map
pub struct MapSorter<'a, M: SourceMap + ?Sized> {
    map: &'a M,
    config: SortConfig,
    parser: Option<&'a dyn DateParser>,
}

/// Start configuring a sort of `map` with the default settings
pub fn map<M: SourceMap + ?Sized>(map: &M) -> MapSorter<'_, M> {
    MapSorter::new(map)
}

impl<'a, M: SourceMap + ?Sized> MapSorter<'a, M> {
    pub fn new(map: &'a M) -> Self {
        Self {
            map,
            config: SortConfig::default(),
            parser: None,
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Replace every setting at once
    pub fn with_config(mut self, config: SortConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `parser` instead of the default date parser
    pub fn with_date_parser(mut self, parser: &'a dyn DateParser) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn by_keys(mut self) -> Self {
        self.config.dimension = Dimension::Keys;
        self
    }

    pub fn by_values(mut self) -> Self {
        self.config.dimension = Dimension::Values;
        self
    }

    pub fn as_string(mut self) -> Self {
        self.config.interpretation = Interpretation::String;
        self
    }

    pub fn as_string_length(mut self) -> Self {
        self.config.interpretation = Interpretation::StringLength;
        self
    }

    pub fn as_integer(mut self) -> Self {
        self.config.interpretation = Interpretation::Integer;
        self
    }

    pub fn as_float(mut self) -> Self {
        self.config.interpretation = Interpretation::Float;
        self
    }

    pub fn as_datetime(mut self) -> Self {
        self.config.interpretation = Interpretation::DateTime;
        self
    }

    pub fn ascending(mut self) -> Self {
        self.config.descending = false;
        self
    }

    pub fn descending(mut self) -> Self {
        self.config.descending = true;
        self
    }

    /// Keep only the first `n` keys; `0` keeps all of them
    pub fn top(mut self, n: usize) -> Self {
        self.config.limit = Some(n);
        self
    }

    pub fn all(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Run the sort with the accumulated settings
    ///
    /// The configurator stays usable afterwards.
    ///
    /// # Errors
    /// Same as [`engine::sort`].
    pub fn resolve(&self) -> Result<Vec<M::Key>> {
        match self.parser {
            Some(parser) => engine::sort_with_parser(self.map, &self.config, parser),
            None => engine::sort_config(self.map, &self.config),
        }
    }

    /// Run the sort, treating any failure as a programming error
    ///
    /// # Panics
    ///
    /// Panics with the error's message if [`resolve`](Self::resolve) fails.
    pub fn resolve_or_fail(&self) -> Vec<M::Key> {
        match self.resolve() {
            Ok(keys) => keys,
            Err(err) => panic!("map sort failed: {}", err),
        }
    }
}

impl<M: SourceMap + ?Sized> Clone for MapSorter<'_, M> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            config: self.config,
            parser: self.parser,
        }
    }
}

impl<M: SourceMap + ?Sized> fmt::Debug for MapSorter<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSorter")
            .field("config", &self.config)
            .field("custom_date_parser", &self.parser.is_some())
            .finish()
    }
}
