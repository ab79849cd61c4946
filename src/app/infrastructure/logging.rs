use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Verbosity defaults to `info`; set `RUST_LOG=ink_pad=debug` to see theme
/// changes and cancelled prompts.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
