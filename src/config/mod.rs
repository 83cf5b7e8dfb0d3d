// ABOUTME: Engine configuration with defaults, environment overrides, and validation
// ABOUTME: Orchestrates trend and overload policy configs behind a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Engine Configuration Module
//!
//! Type-safe configuration for the trend classifier and the overload policy.
//! Defaults carry the documented policy constants; every numeric threshold is
//! overridable through a `PROGRESSION_*` environment variable and the final
//! configuration is validated before use.

pub mod error;
pub mod recommendation;
pub mod trend;

pub use error::ConfigError;
pub use recommendation::{OverloadAdjustments, OverloadMessages, OverloadPolicyConfig};
pub use trend::TrendClassifierConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PROGRESSION_CONFIG: OnceLock<ProgressionConfig> = OnceLock::new();

/// Main configuration container for the progression engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Configuration for trend classification
    pub trend: TrendClassifierConfig,
    /// Configuration for the progressive-overload recommendation policy
    pub overload: OverloadPolicyConfig,
}

impl ProgressionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PROGRESSION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load progression config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparseable
    /// value or the final configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PROGRESSION_TREND_MIN_DATA_POINTS",
            &mut self.trend.min_data_points,
        )?;
        Self::apply_env_var(
            "PROGRESSION_TREND_IMPROVEMENT_THRESHOLD",
            &mut self.trend.improvement_threshold,
        )?;
        Self::apply_env_var(
            "PROGRESSION_TREND_DECLINE_THRESHOLD",
            &mut self.trend.decline_threshold,
        )?;
        Self::apply_env_var("PROGRESSION_TREND_HIGH_NOISE_CV", &mut self.trend.high_noise_cv)?;
        Self::apply_env_var("PROGRESSION_TREND_EPSILON", &mut self.trend.epsilon)?;
        Self::apply_env_var(
            "PROGRESSION_OVERLOAD_WEIGHT_INCREMENT",
            &mut self.overload.adjustments.weight_increment,
        )?;
        Self::apply_env_var(
            "PROGRESSION_OVERLOAD_DELOAD_FRACTION",
            &mut self.overload.adjustments.deload_fraction,
        )?;
        Self::apply_env_var(
            "PROGRESSION_OVERLOAD_REP_CEILING",
            &mut self.overload.adjustments.rep_ceiling,
        )?;
        Ok(self)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.min_data_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_data_points must be at least 2",
            ));
        }
        if self.trend.decline_threshold >= self.trend.improvement_threshold {
            return Err(ConfigError::InvalidRange(
                "decline_threshold must be < improvement_threshold",
            ));
        }
        if self.trend.improvement_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "improvement_threshold must be positive",
            ));
        }
        if self.trend.decline_threshold >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "decline_threshold must be negative",
            ));
        }
        if self.trend.high_noise_cv <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "high_noise_cv must be positive",
            ));
        }
        if self.trend.epsilon <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("epsilon must be positive"));
        }
        if self.overload.adjustments.weight_increment < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight_increment must be non-negative",
            ));
        }
        if !(0.0..1.0).contains(&self.overload.adjustments.deload_fraction) {
            return Err(ConfigError::InvalidRange(
                "deload_fraction must be in [0, 1)",
            ));
        }
        if self.overload.adjustments.rep_ceiling == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "rep_ceiling must be at least 1",
            ));
        }
        Ok(())
    }
}
