// ABOUTME: Trend classifier configuration for progression analysis
// ABOUTME: Configures thresholds for detecting improvement, decline, and high-noise data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Trend Classifier Configuration
//!
//! Thresholds for the halved-average trend test and its noise override.
//! All values are policy, not law; see the `PROGRESSION_TREND_*` environment
//! overrides applied by the parent module.

use serde::{Deserialize, Serialize};

/// Configuration for the trend classification algorithm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendClassifierConfig {
    /// Minimum number of series points required to claim any trend
    pub min_data_points: usize,
    /// Relative change at or above which the series counts as increasing
    pub improvement_threshold: f64,
    /// Relative change at or below which the series counts as decreasing
    pub decline_threshold: f64,
    /// Within-half coefficient of variation above which the series is
    /// classified inconsistent regardless of direction.
    ///
    /// Calibrated against population standard deviation: oscillation of
    /// roughly 20% or more around the half mean trips the override, while
    /// steady progressions with small per-session steps stay well clear.
    pub high_noise_cv: f64,
    /// Small positive constant substituted for a zero denominator
    pub epsilon: f64,
}

impl Default for TrendClassifierConfig {
    fn default() -> Self {
        Self {
            min_data_points: 2,
            improvement_threshold: 0.05,
            decline_threshold: -0.05,
            high_noise_cv: 0.20,
            epsilon: 1e-6,
        }
    }
}
