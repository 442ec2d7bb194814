use tracing_subscriber::EnvFilter;

use crate::consts::LOG_ENV;

fn build_filter(debug: bool, directive: Option<&str>) -> EnvFilter {
    let default = if debug { "habitctl=debug" } else { "warn" };
    match directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(default))
        }
        None => EnvFilter::new(default),
    }
}

/// Install the stderr subscriber; `HABITCTL_LOG` beats `--debug`.
pub(crate) fn init(debug: bool) {
    let directive = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug, directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
