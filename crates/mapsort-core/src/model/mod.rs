pub mod config;
pub mod value;

pub use config::{Dimension, Interpretation, ParseConfigError, SortConfig};
pub use value::{Field, Value};
