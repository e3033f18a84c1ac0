//! Admission configuration with validation.
//!
//! The timestamp window is protocol; the abuse-control numbers are
//! deployment configuration with documented defaults.

use serde::{Deserialize, Serialize};
use shared_types::EndpointClass;
use thiserror::Error;

/// Authentication-gate timing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Oldest accepted request age in ms; exactly this old still passes.
    pub max_age_ms: u64,
    /// Tolerated client clock skew into the future in ms; exactly this far
    /// ahead still passes.
    pub clock_skew_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_age_ms: 5 * 60 * 1000,
            clock_skew_ms: 60 * 1000,
        }
    }
}

/// Abuse-control parameters for one endpoint class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassLimits {
    /// Sliding rate window in ms.
    pub window_ms: u64,
    /// Maximum accepted requests inside the window.
    pub max_requests: usize,
    /// Window within which identical content from one identity is blocked.
    pub duplicate_window_ms: u64,
}

/// Abuse-guard configuration across endpoint classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Limits for top-level thread creation.
    pub thread: ClassLimits,
    /// Limits for replies.
    pub reply: ClassLimits,
    /// Tracked-identity count above which idle identities are collected.
    pub high_water_mark: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            thread: ClassLimits {
                window_ms: 5 * 60 * 1000,
                max_requests: 2,
                duplicate_window_ms: 10 * 60 * 1000,
            },
            reply: ClassLimits {
                window_ms: 60 * 1000,
                max_requests: 10,
                duplicate_window_ms: 2 * 60 * 1000,
            },
            high_water_mark: 8192,
        }
    }
}

impl GuardConfig {
    /// Limits for an endpoint class.
    pub fn limits(&self, class: EndpointClass) -> &ClassLimits {
        match class {
            EndpointClass::Thread => &self.thread,
            EndpointClass::Reply => &self.reply,
        }
    }
}

/// Complete admission configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    pub gate: GateConfig,
    pub guard: GuardConfig,
}

impl AdmissionConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gate.max_age_ms == 0 {
            return Err(ConfigError::InvalidGate("max_age_ms cannot be 0".into()));
        }

        for (name, limits) in [("thread", &self.guard.thread), ("reply", &self.guard.reply)] {
            if limits.window_ms == 0 {
                return Err(ConfigError::InvalidLimits(format!(
                    "{name} window_ms cannot be 0"
                )));
            }
            if limits.max_requests == 0 {
                return Err(ConfigError::InvalidLimits(format!(
                    "{name} max_requests cannot be 0"
                )));
            }
            if limits.duplicate_window_ms == 0 {
                return Err(ConfigError::InvalidLimits(format!(
                    "{name} duplicate_window_ms cannot be 0"
                )));
            }
        }

        if self.guard.high_water_mark == 0 {
            return Err(ConfigError::InvalidLimits(
                "high_water_mark cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid gate config: {0}")]
    InvalidGate(String),

    #[error("invalid abuse limits: {0}")]
    InvalidLimits(String),
}
