//! Site configuration resolved at build time

use std::time::Duration;

use lead_core::{CoreError, CoreResult, RelayConfig};

/// Build-time environment variable naming the form-relay endpoint.
pub const RELAY_URL_ENV: &str = "LEAD_RELAY_URL";

/// Optional build-time request timeout for the relay call, in seconds.
pub const RELAY_TIMEOUT_ENV: &str = "LEAD_RELAY_TIMEOUT_SECS";

/// Everything the site needs beyond what Leptos itself is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub relay: RelayConfig,
}

impl SiteConfig {
    /// Resolve the configuration inlined at compile time.
    ///
    /// The relay endpoint is baked into both the server binary and the
    /// WASM bundle, so the two can never disagree. A missing or malformed
    /// value fails the entrypoints instead of the first submission.
    pub fn from_build_env() -> CoreResult<Self> {
        let endpoint = option_env!("LEAD_RELAY_URL").ok_or_else(|| {
            CoreError::Config(format!("{} must be set when building the site", RELAY_URL_ENV))
        })?;

        let mut relay = RelayConfig::new(endpoint)?;

        if let Some(raw) = option_env!("LEAD_RELAY_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                CoreError::Config(format!("{} is not a number: {}", RELAY_TIMEOUT_ENV, raw))
            })?;
            relay = relay.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self { relay })
    }
}
