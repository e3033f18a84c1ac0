//! Node configuration with environment overrides.
//!
//! Every knob has a default matching the documented deployment numbers;
//! `PLACARD_*` environment variables override individual values.

use placard_gate::{AdmissionConfig, ConfigError};
use placard_lifecycle::LifecycleConfig;
use std::time::Duration;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    pub admission: AdmissionConfig,
    pub lifecycle: LifecycleConfig,
}

impl NodeConfig {
    /// Build configuration from defaults plus `PLACARD_*` env overrides.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `PLACARD_MAX_AGE_MS` | oldest accepted request age |
    /// | `PLACARD_CLOCK_SKEW_MS` | tolerated future skew |
    /// | `PLACARD_SWEEP_INTERVAL_SECS` | seconds between sweep passes |
    /// | `PLACARD_GUARD_HIGH_WATER` | tracked-identity GC threshold |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = env_u64("PLACARD_MAX_AGE_MS") {
            config.admission.gate.max_age_ms = v;
        }
        if let Some(v) = env_u64("PLACARD_CLOCK_SKEW_MS") {
            config.admission.gate.clock_skew_ms = v;
        }
        if let Some(v) = env_u64("PLACARD_SWEEP_INTERVAL_SECS") {
            config.lifecycle.sweep_interval = Duration::from_secs(v);
        }
        if let Some(v) = env_u64("PLACARD_GUARD_HIGH_WATER") {
            config.admission.guard.high_water_mark = v as usize;
        }

        config.admission.validate()?;
        Ok(config)
    }
}

/// Parse a u64 env var; unset or unparseable values fall back to defaults.
fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "ignoring unparseable env override");
            None
        }
    }
}
