use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre for readable error reports.
///
/// Call this early in main(), before any fallible operations. Safe to call
/// multiple times (later calls are no-ops).
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber.
///
/// - **Production** (`APP_ENV=production`): JSON output for log aggregation,
///   module targets hidden.
/// - **Development** (default): human-readable output with module targets.
///
/// `RUST_LOG` overrides the default filter in both modes. Safe to call
/// multiple times (later calls are no-ops, which keeps tests happy).
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        }
    });

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .with(filter)
            .try_init()
    };

    let _ = result;
}
