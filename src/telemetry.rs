use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::{log::SetLoggerError, LogTracer};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset. sqlx logs every statement at `info`;
/// the product queries already run inside their own spans.
pub const DEFAULT_FILTER: &str = "info,sqlx::query=warn";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to redirect log records: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("failed to install the tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Bunyan-formatted JSON subscriber writing to `sink`.
///
/// `RUST_LOG` wins over `env_filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs `subscriber` process-wide. Fails if one is already installed.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), TelemetryError> {
    // redirect all `log` records (sqlx, actix) to the tracing subscriber
    LogTracer::init()?;
    set_global_default(subscriber)?;

    Ok(())
}
