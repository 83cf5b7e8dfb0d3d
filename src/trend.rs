// ABOUTME: Noise-tolerant trend classification over sparse progression series
// ABOUTME: Halved-average direction test with a coefficient-of-variation noise override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Trend classification.
//!
//! A raw last-vs-first comparison lets a single outlier session flip the
//! label. The classifier instead compares the averages of the earlier and
//! later halves of the series, and refuses to claim a direction at all when
//! either half is too noisy. Both stages are pure functions of the series.

use crate::config::{ProgressionConfig, TrendClassifierConfig};
use crate::models::ProgressionTrend;

/// Classifies a progression series channel into a trend label.
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    config: TrendClassifierConfig,
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendClassifier {
    /// Create a classifier with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProgressionConfig::global().trend.clone(),
        }
    }

    /// Create a classifier with a custom configuration
    #[must_use]
    pub const fn with_config(config: TrendClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify one channel of a progression series.
    ///
    /// Values must be in ascending date order. Series shorter than the
    /// configured minimum classify as `Stable`, the conservative default for
    /// insufficient information.
    #[must_use]
    pub fn classify(&self, values: &[f64]) -> ProgressionTrend {
        if values.len() < self.config.min_data_points.max(2) {
            return ProgressionTrend::Stable;
        }

        // Middle point of an odd-length series belongs to neither half, so
        // it is never double-weighted.
        let half = values.len() / 2;
        let early = &values[..half];
        let late = &values[values.len() - half..];

        if coefficient_of_variation(early, self.config.epsilon) > self.config.high_noise_cv
            || coefficient_of_variation(late, self.config.epsilon) > self.config.high_noise_cv
        {
            return ProgressionTrend::Inconsistent;
        }

        let early_avg = mean(early);
        let late_avg = mean(late);
        let delta = (late_avg - early_avg) / early_avg.max(self.config.epsilon);

        if delta >= self.config.improvement_threshold {
            ProgressionTrend::Increasing
        } else if delta <= self.config.decline_threshold {
            ProgressionTrend::Decreasing
        } else {
            ProgressionTrend::Stable
        }
    }
}

#[allow(clippy::cast_precision_loss)] // Safe: series lengths are tiny
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation over the half mean, the dispersion measure
/// behind the noise override.
#[allow(clippy::cast_precision_loss)] // Safe: series lengths are tiny
fn coefficient_of_variation(values: &[f64], epsilon: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt() / avg.abs().max(epsilon)
}
