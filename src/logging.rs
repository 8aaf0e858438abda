use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr tracing subscriber for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests, embedding apps)
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
