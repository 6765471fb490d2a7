use std::str::FromStr;
use std::sync::OnceLock;
use strum_macros::{Display, EnumString};

/// Selects which configuration record is active.
pub const MODE_VAR: &str = "APP_MODE";
/// Optional override of the API base URL for either record.
pub const BASE_URL_VAR: &str = "WALL_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost/app";

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Build/runtime mode selecting the configuration record.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Only an explicit `development` selects the dev record, everything else is prod.
    pub fn parse_or_production(value: Option<&str>) -> Self {
        value
            .and_then(|v| Mode::from_str(v.trim()).ok())
            .unwrap_or(Mode::Production)
    }
}

/// Process-wide configuration record, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    production: bool,
    api_base_url: String,
}

impl Environment {
    /// Returns the record for the given mode with its built-in base URL.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Development => Self {
                production: false,
                api_base_url: String::from(DEFAULT_API_BASE_URL),
            },
            Mode::Production => Self {
                production: true,
                api_base_url: String::from(DEFAULT_API_BASE_URL),
            },
        }
    }

    /// Builds the record from an arbitrary variable lookup.
    ///
    /// `lookup` is queried for [`MODE_VAR`] and [`BASE_URL_VAR`]; an empty
    /// base URL override is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let mode = Mode::parse_or_production(lookup(MODE_VAR).as_deref());
        let mut env = Self::for_mode(mode);
        if let Some(url) = lookup(BASE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            env.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        env
    }

    /// Builds the record from the process environment.
    pub fn from_process_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Returns the process-wide record, loading it from the process environment on first use.
    pub fn global() -> &'static Environment { ENVIRONMENT.get_or_init(Self::from_process_env) }

    pub fn is_production(&self) -> bool { self.production }
    pub fn api_base_url(&self) -> &str { self.api_base_url.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_development_mode_selects_dev_record() {
        let env = Environment::from_lookup(lookup_from(&[(MODE_VAR, "development")]));
        assert!(!env.is_production());
        assert_eq!(env.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_or_unknown_mode_falls_back_to_production() {
        assert!(Environment::from_lookup(lookup_from(&[])).is_production());
        assert!(Environment::from_lookup(lookup_from(&[(MODE_VAR, "staging")])).is_production());
        assert_eq!(Mode::parse_or_production(Some("Development")), Mode::Development);
    }

    #[test]
    fn test_base_url_override() {
        let env = Environment::from_lookup(lookup_from(&[
            (MODE_VAR, "production"),
            (BASE_URL_VAR, "https://api.example.org/app/"),
        ]));
        assert!(env.is_production());
        assert_eq!(env.api_base_url(), "https://api.example.org/app");

        let blank = Environment::from_lookup(lookup_from(&[(BASE_URL_VAR, "  ")]));
        assert_eq!(blank.api_base_url(), DEFAULT_API_BASE_URL);
    }
}
