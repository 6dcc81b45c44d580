//! Logging for the clock process.
//!
//! The clock's own crates log at `info`; the windowing stack underneath
//! (eframe, winit, the GL/wgpu backends) is held at `warn` unless asked for.

use std::sync::Once;

/// Used when neither the config file nor `RUST_LOG` names a filter.
pub const DEFAULT_FILTER: &str = "warn,clockcore=info,deskclock=info";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter from the config file's `log_filter`.
    pub filter: Option<String>,
    /// Prefix lines with a seconds-resolution timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            timestamps: true,
        }
    }
}

/// Pick the filter: config file, then `RUST_LOG`, then [`DEFAULT_FILTER`].
/// Blank values count as unset.
pub fn resolve_filter(configured: Option<&str>, env: Option<&str>) -> String {
    configured
        .into_iter()
        .chain(env)
        .map(str::trim)
        .find(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.filter.as_deref(), env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        if config.timestamps {
            builder.format_timestamp_secs();
        } else {
            builder.format_timestamp(None);
        }

        // a test harness may already own the global logger
        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter {:?}", filter);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_filter_wins() {
        assert_eq!(resolve_filter(Some("debug"), Some("trace")), "debug");
    }

    #[test]
    fn test_env_used_without_config() {
        assert_eq!(resolve_filter(None, Some("deskclock=trace")), "deskclock=trace");
    }

    #[test]
    fn test_blank_values_fall_through() {
        assert_eq!(resolve_filter(Some("  "), Some("")), DEFAULT_FILTER);
        assert_eq!(resolve_filter(Some(""), Some("info")), "info");
    }

    #[test]
    fn test_default_quiets_windowing_stack() {
        let filter = resolve_filter(None, None);
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("clockcore=info"));
        assert!(filter.contains("deskclock=info"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(LoggingConfig {
            filter: Some("warn".to_string()),
            timestamps: false,
        });
        init_logging(LoggingConfig::default());
        assert!(INIT.is_completed());
    }
}
