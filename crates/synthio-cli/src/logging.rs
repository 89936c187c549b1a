//! Logging setup for the CLI.
//!
//! Engine events go to stderr so stdout stays clean for displays and
//! reports. `RUST_LOG` takes precedence over flags and config:
//!
//! ```bash
//! RUST_LOG=synthio_engine=trace synthio eval "1 . . 5"
//! synthio -vv eval "2 + 3 ="     # debug: every key press
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::CliConfig;

static INIT: Once = Once::new();

/// Builds the filter: `RUST_LOG` if set, else the config's directive.
///
/// An unparsable `log_level` falls back to `warn`.
#[must_use]
pub fn build_filter(config: &CliConfig) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(config.log_directive()).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize logging.
///
/// Call once at startup; later calls are no-ops.
pub fn init(config: &CliConfig) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_ansi(config.color.should_color())
            .with_filter(build_filter(config));

        // A subscriber installed by an embedding program stays in place
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
