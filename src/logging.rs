// logging.rs - Opt-in debug logging

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber at `level`. `RUST_LOG` takes precedence when set.
///
/// Nothing is logged unless this is called.
pub fn init_logging(level: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("genformula={}", level)))
        .map_err(|e| format!("Invalid log filter: {}", e))?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}
