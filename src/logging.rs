use tracing_subscriber::EnvFilter;

/// Variable holding the log filter (e.g. `ESXX_LOG=debug`).
pub const LOG_FILTER_VAR: &str = "ESXX_LOG";

/// Install the stderr subscriber. Quiet (`warn`) unless `ESXX_LOG` says otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
