use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Send log output to stderr, filtered through `RUST_LOG` (default: `warn`)
///
/// Stdout is reserved for command output, which is regularly redirected into config files.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
