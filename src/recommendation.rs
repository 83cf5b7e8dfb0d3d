// ABOUTME: Progressive-overload recommendation planner for the next training session
// ABOUTME: Trend-conditioned weight, sets, and reps targets with templated rationales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Next-session recommendation.
//!
//! The planner applies progressive-overload rules to the most recent
//! session's baseline. Every output is bounded: weight never goes negative,
//! sets and reps never drop below one, and the adjustment per session is a
//! fixed small step. The rationale is a deterministic template keyed by the
//! (trend, adjustment) pair, so identical inputs always explain themselves
//! identically.

use crate::config::{OverloadPolicyConfig, ProgressionConfig};
use crate::models::{PerformanceEntry, ProgressionTrend, Recommendation, SetRecord};

/// Plans the next session's target from the last performance and the trend.
#[derive(Debug, Clone)]
pub struct OverloadPlanner {
    config: OverloadPolicyConfig,
}

impl Default for OverloadPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl OverloadPlanner {
    /// Create a planner with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProgressionConfig::global().overload.clone(),
        }
    }

    /// Create a planner with a custom configuration
    #[must_use]
    pub const fn with_config(config: OverloadPolicyConfig) -> Self {
        Self { config }
    }

    /// Recommend the next session from the merged set list of the most
    /// recent session, or `None` when there is no prior performance.
    ///
    /// The baseline is the heaviest set (by weight, not volume); the sets
    /// count is held at the last session's count.
    #[must_use]
    pub fn recommend(&self, last_sets: &[&SetRecord], trend: ProgressionTrend) -> Option<Recommendation> {
        let baseline = last_sets.iter().copied().reduce(|best, set| {
            if set.weight > best.weight {
                set
            } else {
                best
            }
        })?;

        let sets = u32::try_from(last_sets.len()).unwrap_or(u32::MAX).max(1);
        let base_weight = baseline.weight;
        let base_reps = baseline.reps.max(1);
        let adjustments = &self.config.adjustments;
        let messages = &self.config.messages;

        let (weight, reps, rationale) = match trend {
            ProgressionTrend::Increasing => {
                if base_reps >= adjustments.rep_ceiling {
                    (base_weight, base_reps + 1, messages.add_rep.clone())
                } else {
                    (
                        base_weight + adjustments.weight_increment,
                        base_reps,
                        messages.increase_weight.clone(),
                    )
                }
            }
            ProgressionTrend::Stable => (base_weight, base_reps, messages.hold_steady.clone()),
            ProgressionTrend::Decreasing => (
                base_weight * (1.0 - adjustments.deload_fraction),
                base_reps,
                messages.deload.clone(),
            ),
            ProgressionTrend::Inconsistent => {
                (base_weight, base_reps, messages.low_confidence.clone())
            }
        };

        Some(Recommendation {
            weight: weight.max(0.0),
            sets,
            reps: reps.max(1),
            rationale,
        })
    }

    /// Convenience wrapper over a single performance entry
    #[must_use]
    pub fn recommend_for_entry(
        &self,
        entry: &PerformanceEntry,
        trend: ProgressionTrend,
    ) -> Option<Recommendation> {
        let sets: Vec<&SetRecord> = entry.sets.iter().collect();
        self.recommend(&sets, trend)
    }
}
