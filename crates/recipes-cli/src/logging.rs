use anyhow::{Context, Result};
use recipes_infrastructure::config::LoggingConfig;
use recipes_infrastructure::paths::RecipesPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "RECIPES_LOG";

/// Installs the global subscriber: stderr always, a daily log file when
/// enabled. Keep the returned guard alive until exit so buffered file output
/// is flushed.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<Option<WorkerGuard>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&config.level)
                .with_context(|| format!("Invalid logging.level '{}'", config.level))?,
        }
    };

    let (file_layer, guard) = if config.file {
        let logs_dir = RecipesPaths::logs_dir()?;
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("Failed to create {}", logs_dir.display()))?;
        let appender = tracing_appender::rolling::daily(&logs_dir, "recipes.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
