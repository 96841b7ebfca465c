use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Reads `name` and parses it, falling back to `default` when unset.
pub(crate) fn var_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    parse_or(name, env::var(name).ok(), default)
}

/// An unparseable value is logged and replaced with `default`.
pub(crate) fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!(env.var = name, env.value = %raw, error = %e, "Ignoring invalid value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or("N", Some("42".into()), 7), 42);
        assert_eq!(parse_or("N", Some(" 42 ".into()), 7), 42);
        assert_eq!(parse_or("N", None, 7), 7);
        assert_eq!(parse_or("N", Some(String::new()), 7), 7);
        assert_eq!(parse_or("N", Some("forty".into()), 7), 7);
    }
}
