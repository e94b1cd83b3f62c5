use std::path::PathBuf;

/// Default location of the preferences file, relative to the working
/// directory.
pub const DEFAULT_PREFS_PATH: &str = ".tourdesk/preferences.json";

/// Default tracing filter when neither `TOURDESK_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "tourdesk_cli=info,tourdesk_core=info";

/// CLI configuration loaded from environment variables.
///
/// Every field has a default; command-line flags override what is loaded
/// here.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON inbox store. `None` uses the bundled demo inbox.
    pub inbox_path: Option<PathBuf>,
    /// JSON quotation store. `None` uses the bundled demo quotations.
    pub quotes_path: Option<PathBuf>,
    /// Where the theme-mode preference is persisted.
    pub prefs_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `TOURDESK_INBOX_PATH`  | unset (bundled demo inbox)              |
    /// | `TOURDESK_QUOTES_PATH` | unset (bundled demo quotations)         |
    /// | `TOURDESK_PREFS_PATH`  | `.tourdesk/preferences.json`            |
    /// | `TOURDESK_LOG`         | `tourdesk_cli=info,tourdesk_core=info`  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            inbox_path: get("TOURDESK_INBOX_PATH").map(PathBuf::from),
            quotes_path: get("TOURDESK_QUOTES_PATH").map(PathBuf::from),
            prefs_path: get("TOURDESK_PREFS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH)),
            log_filter: get("TOURDESK_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = CliConfig::from_lookup(lookup(&[]));
        assert!(config.inbox_path.is_none());
        assert!(config.quotes_path.is_none());
        assert_eq!(config.prefs_path, PathBuf::from(DEFAULT_PREFS_PATH));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn values_are_read_from_environment() {
        let config = CliConfig::from_lookup(lookup(&[
            ("TOURDESK_INBOX_PATH", "/data/inbox.json"),
            ("TOURDESK_QUOTES_PATH", "/data/quotes.json"),
            ("TOURDESK_PREFS_PATH", "/tmp/prefs.json"),
            ("TOURDESK_LOG", "debug"),
        ]));
        assert_eq!(config.inbox_path, Some(PathBuf::from("/data/inbox.json")));
        assert_eq!(config.quotes_path, Some(PathBuf::from("/data/quotes.json")));
        assert_eq!(config.prefs_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = CliConfig::from_lookup(lookup(&[("TOURDESK_INBOX_PATH", "  ")]));
        assert!(config.inbox_path.is_none());
    }
}
