use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "GCD_LOG";

/// Install a global fmt subscriber on stderr, filtered by `GCD_LOG`.
///
/// Falls back to `warn` when the variable is unset or cannot be parsed.
/// Calling this twice is harmless: the second install is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
