pub mod config;
pub use self::config::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

fn env_filter(max_level: &LoggingLevel, directives: &str, env: &str) -> EnvFilter {
    let mut builder = EnvFilter::builder();
    if !env.is_empty() {
        builder = builder.with_env_var(env);
    }
    builder.with_default_directive(max_level.clone().into()).parse_lossy(directives)
}

/// Installs the global subscriber: one global filter, then a console and a file
/// layer each with their own filter.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = env_filter(&config.max_level, &config.level_filter, &config.level_filter_env);
    let console = {
        let config = &config.console;
        if config.enable {
            let debug = config.enable_debug_logging;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_file(debug)
                    .with_line_number(debug)
                    .with_thread_ids(debug)
                    .with_target(debug)
                    .with_filter(env_filter(
                        &config.max_level,
                        &config.level_filter,
                        &config.level_filter_env,
                    )),
            )
        } else {
            None
        }
    };
    let file = {
        let config = &config.file;
        if config.enable {
            let debug = config.enable_debug_logging;
            let file_appender = RollingFileAppender::new(
                config.rolling_time.clone().into(),
                &config.path,
                &config.prefix,
            );
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_file(debug)
                    .with_line_number(debug)
                    .with_thread_ids(debug)
                    .with_target(debug)
                    .with_filter(env_filter(
                        &config.max_level,
                        &config.level_filter,
                        &config.level_filter_env,
                    )),
            )
        } else {
            None
        }
    };
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}
