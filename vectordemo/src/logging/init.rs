use std::sync::Once;

/// Filter used when neither [`LoggingConfig::env_filter`] nor `RUST_LOG` is set.
///
/// Keeps the walk-through summary visible and everything else quiet.
pub const DEFAULT_FILTER: &str = "warn,vectordemo=info";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives, e.g. `"vectordemo=debug,vectorcore=trace"`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Picks the directives: the configured filter, then `rust_log`, then [`DEFAULT_FILTER`].
    pub fn filter_directives(&self, rust_log: Option<String>) -> String {
        let non_blank = |directives: &String| !directives.trim().is_empty();
        self.env_filter
            .clone()
            .filter(non_blank)
            .or_else(|| rust_log.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` for the walk-through. Only the first call has an effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.filter_directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&directives)
            .write_style(config.write_style);

        // the host may have installed a logger already
        match builder.try_init() {
            Ok(()) => log::debug!("logging with `{}`", directives),
            Err(err) => log::warn!("logger not installed: {}", err),
        }
    });
}
