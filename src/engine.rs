// ABOUTME: Progression analyzer facade orchestrating aggregation, trends, records, and planning
// ABOUTME: Exposes the single computeProgressionMetrics query consumed by dashboard callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Progression analyzer.
//!
//! Orchestrates the aggregator, trend classifier, record tracker, and
//! overload planner into one query result. The only suspension points are
//! the two provider reads; everything downstream is pure, so calling the
//! query twice with the same arguments over the same history yields an
//! identical result.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::aggregator::build_series;
use crate::errors::AppResult;
use crate::history::HistoryProvider;
use crate::models::{ProgressionMetrics, ProgressionTrend, Recommendation};
use crate::records::track_records;
use crate::recommendation::OverloadPlanner;
use crate::trend::TrendClassifier;

/// Query interface for progression metrics
#[async_trait]
pub trait ProgressionAnalyzerTrait {
    /// Compute the progression metrics of one exercise over an inclusive
    /// date window, or `None` when the exercise has no logged sets at all.
    async fn compute_progression_metrics(
        &self,
        exercise: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Option<ProgressionMetrics>>;
}

/// Progression analyzer over a history provider.
///
/// Holds no mutable state between invocations; it is safe to share across
/// queries and to discard results of abandoned calls.
#[derive(Debug)]
pub struct ProgressionAnalyzer<P> {
    provider: P,
    classifier: TrendClassifier,
    planner: OverloadPlanner,
}

impl<P: HistoryProvider> ProgressionAnalyzer<P> {
    /// Create an analyzer over `provider` with the global configuration
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            classifier: TrendClassifier::new(),
            planner: OverloadPlanner::new(),
        }
    }

    /// Create an analyzer with explicit classifier and planner, for callers
    /// carrying non-global policy
    #[must_use]
    pub const fn with_components(
        provider: P,
        classifier: TrendClassifier,
        planner: OverloadPlanner,
    ) -> Self {
        Self {
            provider,
            classifier,
            planner,
        }
    }

    async fn recommendation_for(&self, exercise: &str, trend: ProgressionTrend) -> AppResult<Option<Recommendation>> {
        let last = self.provider.most_recent_session(exercise).await?;
        Ok(last.as_ref().and_then(|session| {
            let sets = session.sets_for(exercise);
            self.planner.recommend(&sets, trend)
        }))
    }
}

#[async_trait]
impl<P: HistoryProvider> ProgressionAnalyzerTrait for ProgressionAnalyzer<P> {
    async fn compute_progression_metrics(
        &self,
        exercise: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Option<ProgressionMetrics>> {
        let sessions = self.provider.sessions_for_exercise(exercise).await?;

        // No logged sets anywhere in history: an empty state for the caller
        // to render, not an error.
        if !sessions.iter().any(|s| s.logs_exercise(exercise)) {
            debug!(exercise, "no logged sets, returning empty result");
            return Ok(None);
        }

        // Records are all-time and ignore the window entirely.
        let records = track_records(exercise, &sessions);

        // A degenerate or empty window only empties the series-derived
        // fields; records and the recommendation baseline are unaffected.
        let series = build_series(exercise, &sessions, start, end);
        let weights: Vec<f64> = series.iter().map(|p| p.max_weight).collect();
        let trend = self.classifier.classify(&weights);

        let recommendation = self.recommendation_for(exercise, trend).await?;

        let total_sessions = series.len();
        let sessions_per_week = frequency_per_week(total_sessions, start, end);

        debug!(
            exercise,
            total_sessions,
            ?trend,
            "progression metrics computed"
        );

        Ok(Some(ProgressionMetrics {
            exercise: exercise.to_owned(),
            total_sessions,
            sessions_per_week,
            trend,
            summary: trend.summary().to_owned(),
            weight_record: records.weight,
            volume_record: records.volume,
            reps_record: records.reps,
            series,
            recommendation,
        }))
    }
}

/// Sessions per week over the window, with the denominator clamped to one
/// week so short or degenerate windows never divide by zero.
#[allow(clippy::cast_precision_loss)] // Safe: session counts are tiny
fn frequency_per_week(total_sessions: usize, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let days = (end - start).num_days().max(0);
    let weeks = ((days as f64) / 7.0).ceil().max(1.0);
    total_sessions as f64 / weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_frequency_clamps_degenerate_window_to_one_week() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().unwrap_or_default();
        assert!((frequency_per_week(3, instant, instant) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frequency_over_four_weeks() {
        let start = Utc.with_ymd_and_hms(2025, 5, 4, 0, 0, 0).single().unwrap_or_default();
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().unwrap_or_default();
        assert!((frequency_per_week(8, start, end) - 2.0).abs() < f64::EPSILON);
    }
}
