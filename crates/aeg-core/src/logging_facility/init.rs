//! Global subscriber setup for the `aeg` binary

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Output format and default verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, `aeg=debug`
    Development,
    /// One JSON object per event, `aeg=info`
    Production,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "aeg=debug",
            Profile::Production => "aeg=info",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber writing to stderr
///
/// `RUST_LOG` overrides the profile's default filter. Only the first call has
/// an effect. Tests install [`init_test_capture`](super::init_test_capture)
/// instead.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(profile.filter());
        match profile {
            Profile::Development => builder.init(),
            Profile::Production => builder.json().init(),
        }
    });
}
