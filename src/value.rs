//! Values accepted in a flat key-value list and the typed attributes built from them.
//!
//! A producer passes `[key, value, key, value, ...]` as a slice of [`Value`]. Keys are
//! expected to be [`Value::Text`]; values may be any variant. Each pair becomes one
//! [`Attr`] through [`Attr::from_pair`], which never fails: anything without a
//! dedicated category is carried as [`Value::Opaque`].

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// A single entry of a flat key-value list.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    Text(Cow<'a, str>),
    /// Signed integer, machine-width integers included.
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Time(OffsetDateTime),
    Duration(Duration),
    /// Anything else, rendered with its `Debug` representation.
    Opaque(&'a dyn fmt::Debug),
}

impl<'a> Value<'a> {
    /// Wrap an arbitrary value that has no dedicated category.
    ///
    /// ```rust
    /// use leveled_slogger::{Kind, Value};
    ///
    /// let peers = vec!["10.0.0.1", "10.0.0.2"];
    /// let value = Value::opaque(&peers);
    /// assert_eq!(value.kind(), Kind::Any);
    /// assert_eq!(value.to_string(), r#"["10.0.0.1", "10.0.0.2"]"#);
    /// ```
    pub fn opaque<T: fmt::Debug>(value: &'a T) -> Self {
        Value::Opaque(value)
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(&**text),
            _ => None,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::String,
            Value::Int(_) => Kind::Int64,
            Value::Uint(_) => Kind::Uint64,
            Value::Float(_) => Kind::Float64,
            Value::Bool(_) => Kind::Bool,
            Value::Time(_) => Kind::Time,
            Value::Duration(_) => Kind::Duration,
            Value::Opaque(_) => Kind::Any,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(v) => f.write_str(v),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Time(v) => match v.format(&Rfc3339) {
                Ok(formatted) => f.write_str(&formatted),
                Err(_) => write!(f, "{v}"),
            },
            Value::Duration(v) => write!(f, "{v:?}"),
            Value::Opaque(v) => write!(f, "{v:?}"),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Text(value)
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64, isize);
impl_from_number!(Uint as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f32, f64);

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<OffsetDateTime> for Value<'_> {
    fn from(value: OffsetDateTime) -> Self {
        Value::Time(value)
    }
}

impl From<Duration> for Value<'_> {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

/// Build a flat key-value array of [`Value`]s.
///
/// ```rust
/// use leveled_slogger::keyvals;
///
/// let kvs = keyvals!["user_id", 12345, "active", true];
/// assert_eq!(kvs.len(), 4);
/// assert_eq!(kvs[0].as_text(), Some("user_id"));
/// ```
#[macro_export]
macro_rules! keyvals {
    ($($item:expr),* $(,)?) => {
        [$($crate::Value::from($item)),*]
    };
}

/// Category of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Int64,
    Uint64,
    Float64,
    Bool,
    Time,
    Duration,
    Any,
}

/// A named, typed field attached to a [`Record`](crate::Record).
#[derive(Debug, Clone)]
pub struct Attr<'a> {
    key: Cow<'a, str>,
    value: Value<'a>,
}

impl<'a> Attr<'a> {
    pub fn string(key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Attr::with_value(key, Value::Text(value.into()))
    }

    pub fn int64(key: impl Into<Cow<'a, str>>, value: i64) -> Self {
        Attr::with_value(key, Value::Int(value))
    }

    pub fn uint64(key: impl Into<Cow<'a, str>>, value: u64) -> Self {
        Attr::with_value(key, Value::Uint(value))
    }

    pub fn float64(key: impl Into<Cow<'a, str>>, value: f64) -> Self {
        Attr::with_value(key, Value::Float(value))
    }

    pub fn bool(key: impl Into<Cow<'a, str>>, value: bool) -> Self {
        Attr::with_value(key, Value::Bool(value))
    }

    pub fn time(key: impl Into<Cow<'a, str>>, value: OffsetDateTime) -> Self {
        Attr::with_value(key, Value::Time(value))
    }

    pub fn duration(key: impl Into<Cow<'a, str>>, value: Duration) -> Self {
        Attr::with_value(key, Value::Duration(value))
    }

    pub fn any(key: impl Into<Cow<'a, str>>, value: &'a dyn fmt::Debug) -> Self {
        Attr::with_value(key, Value::Opaque(value))
    }

    /// Convert one key-value pair into an attribute of the matching category.
    pub fn from_pair(key: impl Into<Cow<'a, str>>, value: &Value<'a>) -> Self {
        match value {
            Value::Text(v) => Attr::string(key, v.clone()),
            Value::Int(v) => Attr::int64(key, *v),
            Value::Uint(v) => Attr::uint64(key, *v),
            Value::Float(v) => Attr::float64(key, *v),
            Value::Bool(v) => Attr::bool(key, *v),
            Value::Time(v) => Attr::time(key, *v),
            Value::Duration(v) => Attr::duration(key, *v),
            Value::Opaque(v) => Attr::any(key, *v),
        }
    }

    fn with_value(key: impl Into<Cow<'a, str>>, value: Value<'a>) -> Self {
        Attr {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }
}

impl fmt::Display for Attr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Renders a key-value list as `[a b c]`.
pub(crate) struct DisplayList<'a, 'v>(pub(crate) &'a [Value<'v>]);

impl fmt::Display for DisplayList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
