use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "info",
/// "lumen_engine=debug,wgpu=warn"). When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
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

/// Default filter when neither the config nor `RUST_LOG` names one.
///
/// wgpu is chatty at `info` (adapter probing, surface churn), so it is held at `warn`.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Picks the filter string: explicit config, then `RUST_LOG`, then the default.
pub fn resolve_filter(config: &LoggingConfig, rust_log: Option<&str>) -> String {
    config
        .env_filter
        .as_deref()
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(&config, rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // `try_init` so a logger installed by a test harness does not panic here.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized (filter = {filter})");
    });
}
