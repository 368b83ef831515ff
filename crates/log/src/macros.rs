//! Convenience macros for structured logging

/// Build a `Vec<Attr>` from `key = value` pairs.
///
/// Keys are identifiers or string literals; values are anything convertible
/// into `serde_json::Value`.
///
/// ```rust
/// use ambient_log::{Attr, attrs};
///
/// let list = attrs![key = "value", "error-code" = 500];
/// assert_eq!(list[1], Attr::int("error-code", 500));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::Attr>::new()
    };
    ($($key:tt = $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Attr::new($crate::__attr_key!($key), $value)),+]
    };
}

/// Derive a child context with additional bindings.
///
/// ```rust
/// use ambient_log::{Context, with_context};
///
/// let base = Context::background();
/// let ctx = with_context!(base, userID = "42069", requestID = "abcd-efgh");
/// assert_eq!(ctx.get("userID"), Some(&"42069".into()));
/// ```
#[macro_export]
macro_rules! with_context {
    ($ctx:expr, $($key:tt = $value:expr),* $(,)?) => {{
        let ctx: $crate::Context = ::std::clone::Clone::clone(&$ctx);
        $(let ctx = ctx.with_value($crate::__attr_key!($key), $value);)*
        ctx
    }};
}

/// Log an error value and return it
///
/// ```rust,ignore
/// let err = log_error!(logger, &ctx, io_err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $ctx:expr, $err:expr) => {{
        let e = $err;
        $crate::Log::error(
            &$logger,
            $ctx,
            &e.to_string(),
            ::std::vec![$crate::Attr::string("error", ::std::format!("{e:?}"))],
        );
        e
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attr_key {
    ($key:ident) => {
        ::std::stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}
