// ABOUTME: Progressive-overload policy configuration for next-session recommendations
// ABOUTME: Configures load increments, deload fraction, rep ceiling, and rationale templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Overload Policy Configuration
//!
//! Provides configuration for the next-session recommendation including the
//! per-trend load adjustments and the rationale message templates.

use serde::{Deserialize, Serialize};

/// Progressive-overload policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverloadPolicyConfig {
    /// Load adjustment magnitudes
    pub adjustments: OverloadAdjustments,
    /// Template messages for recommendation rationales
    pub messages: OverloadMessages,
}

/// Magnitudes of the per-trend load adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverloadAdjustments {
    /// Absolute weight increment applied on an increasing trend, in the
    /// caller's mass unit
    pub weight_increment: f64,
    /// Fraction of the baseline weight removed on a decreasing trend
    pub deload_fraction: f64,
    /// Rep count at which further progress shifts from added weight to an
    /// added rep
    pub rep_ceiling: u32,
}

/// Template messages for the recommendation rationale, one per
/// (trend, adjustment) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverloadMessages {
    /// Increasing trend, weight bumped by the configured increment
    pub increase_weight: String,
    /// Increasing trend but baseline reps already at the ceiling
    pub add_rep: String,
    /// Stable trend, repeat last session
    pub hold_steady: String,
    /// Decreasing trend, deload applied
    pub deload: String,
    /// Inconsistent trend, repeat last session with a low-confidence flag
    pub low_confidence: String,
}

impl Default for OverloadAdjustments {
    fn default() -> Self {
        Self {
            weight_increment: 2.5,
            deload_fraction: 0.05,
            rep_ceiling: 12,
        }
    }
}

impl Default for OverloadMessages {
    fn default() -> Self {
        Self {
            increase_weight:
                "Your top weight is trending up. Add a small increment to keep progressing.".into(),
            add_rep:
                "You're progressing at your rep ceiling. Hold the weight and add one rep.".into(),
            hold_steady:
                "Performance is steady. Repeat last session's numbers to consolidate before adding load."
                    .into(),
            deload:
                "Recent sessions are trending down. Reduce the load slightly to allow recovery."
                    .into(),
            low_confidence:
                "Low confidence: recent sessions are too inconsistent for a clear signal. Repeat last session's numbers."
                    .into(),
        }
    }
}
