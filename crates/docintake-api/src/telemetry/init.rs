use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "docintake_api=debug,docintake_processing=debug,docintake_storage=debug,tower_http=debug";

/// Initialize tracing with the compact console format.
///
/// `RUST_LOG` overrides the default filter. If a global subscriber is already
/// installed (several apps built in one test binary) the existing one is kept.
pub fn init_telemetry(environment: &str) {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(console_fmt)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(environment = %environment, "Tracing initialized");
    }
}
