//! Environment access boundary.
//!
//! All environment reads go through [`Environment`], a snapshot taken once at
//! startup. Tests construct fake environments from key/value pairs instead of
//! mutating the real process environment.

use std::collections::HashMap;
use std::str::FromStr;

use super::types::ConfigError;

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Look up a variable, treating empty values as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// String setting with a fallback default.
    pub fn string(&self, key: &str, default: &str) -> String {
        self.get(key)
            .map_or_else(|| default.to_string(), str::to_string)
    }

    /// Integer setting. Absent (or empty) resolves to `Ok(None)`; present but
    /// non-numeric text is a hard [`ConfigError`], never a silent fallback.
    pub fn integer<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|source| ConfigError::InvalidInteger {
                    var: key,
                    value: raw.to_string(),
                    source,
                }),
        }
    }

    /// Boolean flag. Truthy values are `1`, `true`, `yes` and `on`
    /// (case-insensitive); anything else, including absence, is false.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| {
            matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Environment {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> Environment {
        pairs.iter().copied().collect()
    }

    #[test]
    fn get_returns_none_for_missing_variable() {
        let env = Environment::default();
        assert_eq!(env.get("GUNICORN_WORKERS"), None);
    }

    #[test]
    fn get_treats_empty_value_as_unset() {
        let env = env_of(&[("GUNICORN_WORKERS", "")]);
        assert_eq!(env.get("GUNICORN_WORKERS"), None);
    }

    #[test]
    fn string_falls_back_to_default() {
        let env = env_of(&[("GUNICORN_LOG_LEVEL", "info")]);
        assert_eq!(env.string("GUNICORN_LOG_LEVEL", "debug"), "info");
        assert_eq!(env.string("GUNICORN_WORKER_CLASS", "gthread"), "gthread");
    }

    #[test]
    fn integer_parses_valid_value() {
        let env = env_of(&[("GUNICORN_THREADS", "8")]);
        assert_eq!(env.integer::<usize>("GUNICORN_THREADS").unwrap(), Some(8));
    }

    #[test]
    fn integer_tolerates_surrounding_whitespace() {
        let env = env_of(&[("GUNICORN_THREADS", " 8 ")]);
        assert_eq!(env.integer::<usize>("GUNICORN_THREADS").unwrap(), Some(8));
    }

    #[test]
    fn integer_absent_is_none() {
        let env = Environment::default();
        assert_eq!(env.integer::<usize>("GUNICORN_THREADS").unwrap(), None);
    }

    #[test]
    fn integer_rejects_non_numeric_text() {
        let env = env_of(&[("GUNICORN_THREADS", "abc")]);
        let err = env.integer::<usize>("GUNICORN_THREADS").unwrap_err();
        let ConfigError::InvalidInteger { var, value, .. } = err;
        assert_eq!(var, "GUNICORN_THREADS");
        assert_eq!(value, "abc");
    }

    #[test]
    fn integer_rejects_whitespace_only_text() {
        let env = env_of(&[("GUNICORN_THREADS", "   ")]);
        assert!(env.integer::<usize>("GUNICORN_THREADS").is_err());
    }

    #[test]
    fn flag_truthy_values() {
        for value in ["1", "true", "TRUE", "yes", "Yes", "on", "ON"] {
            let env = env_of(&[("DEBUG", value)]);
            assert!(env.flag("DEBUG"), "expected {value:?} to be truthy");
        }
    }

    #[test]
    fn flag_falsy_values() {
        for value in ["0", "false", "no", "off", "anything-else"] {
            let env = env_of(&[("DEBUG", value)]);
            assert!(!env.flag("DEBUG"), "expected {value:?} to be falsy");
        }
        assert!(!Environment::default().flag("DEBUG"));
        assert!(!env_of(&[("DEBUG", "")]).flag("DEBUG"));
    }
}
