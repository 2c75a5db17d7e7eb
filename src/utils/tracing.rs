use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber and the color-eyre hooks. Call once at
/// process start, before any workflow runs.
pub fn init_tracing() -> color_eyre::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact())
        .with(ErrorLayer::default())
        .init();

    color_eyre::install()
}

/// Logs an error and its full source chain at error level.
pub fn log_error_chain(e: &(dyn std::error::Error + 'static)) {
    let mut report = format!("{e:?}\n");
    let mut current = e.source();
    while let Some(cause) = current {
        report = format!("{report}\nCaused by:\n\n{cause:?}");
        current = cause.source();
    }
    tracing::error!("{}", report);
}
