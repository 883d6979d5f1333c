//! Dynamically typed field values
//!
//! Caller maps carry arbitrary key and value types. At the sort boundary each
//! field is converted into a [`Value`], a closed set of the primitive kinds the
//! engine knows how to compare.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::borrow::Cow;
use std::fmt;

/// A field of a source map entry, as seen by the sort engine
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    /// A kind outside the supported set, kept only in rendered form
    Other(String),
}

impl Value {
    /// Human-readable name of the variant, used in coercion messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::DateTime(_) => "datetime",
            Value::Other(_) => "unsupported",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::Other(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
        }
    }
}

/// Conversion from a caller type into a [`Value`]
pub trait Field {
    fn to_value(&self) -> Value;
}

impl<T: Field + ?Sized> Field for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl Field for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl Field for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl Field for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl Field for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

macro_rules! impl_int_field {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_int_field!(i8, i16, i32, i64, u8, u16, u32);

// Values past i64::MAX have no integer key and fail coercion as unsupported.
macro_rules! impl_wide_unsigned_field {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                fn to_value(&self) -> Value {
                    i64::try_from(*self)
                        .map(Value::Int)
                        .unwrap_or_else(|_| Value::Other(self.to_string()))
                }
            }
        )*
    };
}

impl_wide_unsigned_field!(u64, usize);

impl Field for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl Field for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Field for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl<Tz: TimeZone> Field for DateTime<Tz> {
    fn to_value(&self) -> Value {
        Value::DateTime(self.with_timezone(&Utc))
    }
}

impl Field for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(self.and_utc())
    }
}

impl Field for NaiveDate {
    fn to_value(&self) -> Value {
        Value::DateTime(self.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Field for serde_json::Value {
    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .unwrap_or_else(|| Value::Other(n.to_string())),
            },
            other => Value::Other(other.to_string()),
        }
    }
}
