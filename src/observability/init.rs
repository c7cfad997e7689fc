//! Tracing initialization and subscriber setup.
//!
//! This module configures the global tracing subscriber for hosts that want
//! the core's structured spans and events (dispatch, reduction, persistence)
//! on stderr. Hosts with their own subscriber can skip this entirely; the
//! crate only ever emits through the `tracing` facade.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a formatted stderr layer.
///
/// The filter is built from `config.trace_level`, which accepts anything
/// `EnvFilter` understands (a bare level like `"debug"` or a full directive
/// string). Defaults to `"info"` when unset.
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
///
/// # Example
///
/// ```
/// use hubstate::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
