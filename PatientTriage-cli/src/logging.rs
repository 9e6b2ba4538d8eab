use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the tracing subscriber for the binary.
///
/// Filter comes from `RUST_LOG`, falling back to `warn`. Events go to stderr;
/// stdout carries the patient lines.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .try_init();
}
