//! Record attributes

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

/// A single key/value pair attached to a log record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    /// Attribute key, written as a top-level JSON key
    pub key: Cow<'static, str>,
    /// Attribute value
    pub value: Value,
}

impl Attr {
    /// Create an attribute from anything convertible to a JSON value
    #[must_use]
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// String attribute
    #[must_use]
    pub fn string(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    /// Signed integer attribute
    #[must_use]
    pub fn int(key: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Self::new(key, value)
    }

    /// Unsigned integer attribute
    #[must_use]
    pub fn uint(key: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self::new(key, value)
    }

    /// Float attribute; NaN and infinities become `null`
    #[must_use]
    pub fn float(key: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Self::new(key, value)
    }

    /// Boolean attribute
    #[must_use]
    pub fn bool(key: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Self::new(key, value)
    }

    /// Attribute from any serializable value.
    ///
    /// If serialization fails the error text is stored as a string instead.
    #[must_use]
    pub fn any<T: Serialize + ?Sized>(key: impl Into<Cow<'static, str>>, value: &T) -> Self {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("!serialize: {e}")));
        Self::new(key, value)
    }
}

impl<K, V> From<(K, V)> for Attr
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
