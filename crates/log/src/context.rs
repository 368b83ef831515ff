//! Request-scoped context for structured logging
//!
//! A [`Context`] is an immutable chain of key/value bindings. Deriving a child
//! with [`Context::with_value`] never touches the parent, so a context can be
//! cloned into every task of a request and read concurrently.
//!
//! There is no thread-local or task-local "current" context: the context is
//! always passed explicitly to the logging call.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// Read-only key/value source used as an ambient context
///
/// `None` and a stored JSON `null` both mean "absent".
pub trait Lookup {
    /// Value bound to `key`, if any
    fn lookup(&self, key: &str) -> Option<&Value>;
}

/// Immutable request context
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

struct Node {
    key: Cow<'static, str>,
    value: Value,
    parent: Option<Arc<Node>>,
}

impl Context {
    /// Empty root context
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context binding `key` to `value`.
    ///
    /// The new binding shadows any binding of the same key in `self`.
    #[must_use]
    pub fn with_value(&self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            head: Some(Arc::new(Node {
                key: key.into(),
                value: value.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Derive a child context from any serializable value.
    ///
    /// If serialization fails the error text is bound instead, as with
    /// [`Attr::any`](crate::Attr::any).
    #[must_use]
    pub fn with_field(&self, key: impl Into<Cow<'static, str>>, value: &impl Serialize) -> Self {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("!serialize: {e}")));
        self.with_value(key, value)
    }

    /// Request ID
    #[must_use]
    pub fn with_request_id(&self, id: impl Into<String>) -> Self {
        self.with_value("request_id", id.into())
    }

    /// User ID
    #[must_use]
    pub fn with_user_id(&self, id: impl Into<String>) -> Self {
        self.with_value("user_id", id.into())
    }

    /// Nearest value bound to `key`; `null` bindings read as absent
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if n.key == key {
                return (!n.value.is_null()).then_some(&n.value);
            }
            node = n.parent.as_deref();
        }
        None
    }

    /// Whether no bindings exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        std::iter::successors(self.head.as_deref(), |n| n.parent.as_deref())
            .map(|n| (n.key.as_ref(), &n.value))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // innermost first; shadowed bindings included
        f.debug_map().entries(self.bindings()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::background(), |ctx, (k, v)| ctx.with_value(k, v))
    }
}

impl Lookup for Context {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<S: std::hash::BuildHasher> Lookup for HashMap<String, Value, S> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}

impl Lookup for BTreeMap<String, Value> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}

impl Lookup for serde_json::Map<String, Value> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str) -> Option<&Value> {
        (**self).lookup(key)
    }
}

impl<T: Lookup + ?Sized> Lookup for Arc<T> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        (**self).lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_background_is_empty() {
        let ctx = Context::background();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get("userID"), None);
    }

    #[test]
    fn test_child_shadows_parent() {
        let parent = Context::background().with_value("userID", "1");
        let child = parent.with_value("userID", "2");
        assert_eq!(child.get("userID"), Some(&json!("2")));
        assert_eq!(parent.get("userID"), Some(&json!("1")));
    }

    #[test]
    fn test_null_binding_is_absent() {
        let ctx = Context::background()
            .with_value("userID", "1")
            .with_value("userID", Value::Null);
        assert_eq!(ctx.get("userID"), None);
    }

    #[test]
    fn test_helpers() {
        let ctx = Context::background()
            .with_request_id("req-123")
            .with_user_id("user-456")
            .with_field("tags", &["a", "b"]);
        assert_eq!(ctx.get("request_id"), Some(&json!("req-123")));
        assert_eq!(ctx.get("user_id"), Some(&json!("user-456")));
        assert_eq!(ctx.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_with_field_keeps_binding_on_serialize_error() {
        // JSON object keys must be strings
        let bad = BTreeMap::from([(vec![1u8], 1)]);
        let ctx = Context::background().with_field("bad", &bad);
        let bound = ctx.get("bad").and_then(Value::as_str).unwrap();
        assert!(bound.starts_with("!serialize: "));
        assert_eq!(
            Value::String(bound.to_string()),
            crate::Attr::any("bad", &bad).value
        );
    }

    #[test]
    fn test_from_iter() {
        let ctx: Context = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(ctx.get("a"), Some(&json!(1)));
        assert_eq!(ctx.get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_map_lookup_skips_null() {
        let mut map = HashMap::new();
        map.insert("present".to_string(), json!("x"));
        map.insert("null".to_string(), Value::Null);
        assert_eq!(map.lookup("present"), Some(&json!("x")));
        assert_eq!(map.lookup("null"), None);
        assert_eq!(map.lookup("missing"), None);
    }

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Context>();
    }

    #[test]
    fn test_debug_lists_bindings() {
        let ctx = Context::background().with_value("k", "v");
        assert_eq!(format!("{ctx:?}"), r#"{"k": String("v")}"#);
    }
}
