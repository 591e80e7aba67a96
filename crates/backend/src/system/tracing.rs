use crate::shared::config::{get_log_dir, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing.
///
/// Logs go to:
/// - stdout (with colors)
/// - `<log_dir>/sales_dashboard.log` (without colors), when enabled in config
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn initialize(config: &Config) -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone());

    let file_layer = if config.logging.file_enabled {
        let log_dir = get_log_dir(config);
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e)
        })?;

        let log_file_path = log_dir.join("sales_dashboard.log");
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)
            .map_err(|e| {
                anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e)
            })?;

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&filter))
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Tracing already initialized: {}", e))?;

    tracing::info!("Tracing initialized with filter '{}'", filter);
    Ok(())
}
