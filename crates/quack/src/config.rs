use logutil::LogFormat;
use quack_error::{DbError, Result, ResultExt};
use tracing::debug;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_VAR: &str = "QUACK_LOG";
/// Environment variable holding the log format, "human" or "json".
pub const LOG_FORMAT_VAR: &str = "QUACK_LOG_FORMAT";

/// Configuration read when the extension is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionConfig {
    /// Filter for the global subscriber. No subscriber is installed if None.
    pub log_filter: Option<String>,
    pub log_format: LogFormat,
}

impl ExtensionConfig {
    pub fn from_env() -> Result<Self> {
        let vars = [LOG_FILTER_VAR, LOG_FORMAT_VAR]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key, value)));
        Self::from_vars(vars)
    }

    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = ExtensionConfig::default();

        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                LOG_FILTER_VAR if !value.is_empty() => config.log_filter = Some(value.to_string()),
                LOG_FORMAT_VAR if !value.is_empty() => {
                    config.log_format = value
                        .parse()
                        .map_err(|e: DbError| e.with_field("variable", LOG_FORMAT_VAR))?
                }
                _ => (),
            }
        }

        Ok(config)
    }

    /// Install a global subscriber if a filter was configured.
    pub fn init_logging(&self) -> Result<()> {
        if let Some(filter) = &self.log_filter {
            let installed = logutil::configure_global_logger(filter, self.log_format)
                .context("Failed to configure logging")?;
            if !installed {
                debug!("global subscriber already set, leaving it in place");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() {
        let config = ExtensionConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(ExtensionConfig::default(), config);
        config.init_logging().unwrap();
    }

    #[test]
    fn reads_vars() {
        let config = ExtensionConfig::from_vars([
            ("QUACK_LOG", "quack=trace"),
            ("QUACK_LOG_FORMAT", "json"),
            ("UNRELATED", "value"),
        ])
        .unwrap();

        assert_eq!(Some("quack=trace".to_string()), config.log_filter);
        assert_eq!(LogFormat::Json, config.log_format);
    }

    #[test]
    fn empty_values_ignored() {
        let config =
            ExtensionConfig::from_vars([("QUACK_LOG", "  "), ("QUACK_LOG_FORMAT", "")]).unwrap();
        assert_eq!(ExtensionConfig::default(), config);
    }

    #[test]
    fn invalid_format() {
        let err = ExtensionConfig::from_vars([("QUACK_LOG_FORMAT", "yaml")]).unwrap_err();
        assert_eq!(Some("QUACK_LOG_FORMAT"), err.get_field("variable"));
        assert_eq!(Some("yaml"), err.get_field("format"));
    }
}
