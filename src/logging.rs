//! Diagnostic tracing for verification runs.
//!
//! Logs go to stderr so stdout stays reserved for the report (text or
//! `--json`). Filtering follows `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `json` switches to newline-delimited JSON.
///
/// ```bash
/// RUST_LOG=verify=debug deploy-verifier --manifest deployments.json
/// ```
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr).compact()).init();
    }
}
