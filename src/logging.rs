use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the tracing subscriber once at startup. `RUST_LOG` overrides the
/// crate-scoped default.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("address_book=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false));

    let _ = subscriber.try_init();
}
