use crate::constants::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only ever carries command output.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,bark=debug"
    } else {
        "warn"
    }
}
