use tracing_subscriber::EnvFilter;
use crate::core::domain::Configuration;

// setup_tracing installs the global subscriber; later calls are no-ops.
pub fn setup_tracing(config: &Configuration) {
    let filter = EnvFilter::try_new(config.log_level.as_str())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false);
    let _ = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
