// ABOUTME: Domain models for logged strength training and derived progression results
// ABOUTME: Set records, sessions, series points, personal records, trends, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Domain models for the progression engine.
//!
//! `SetRecord`, `PerformanceEntry`, and `SessionRecord` mirror what the
//! session store persists; they are read-only inputs here. Everything else is
//! derived per query and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// One logged set of an exercise: weight moved and repetitions performed.
///
/// Weight is a unit-agnostic mass (the caller decides kg vs lb). Immutable
/// once logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Weight moved, non-negative, unit-agnostic
    pub weight: f64,
    /// Repetitions performed, at least 1
    pub reps: u32,
    /// Optional free-text note ("felt easy", "belt on")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SetRecord {
    /// Create a validated set record.
    ///
    /// This is the construction boundary for malformed input: negative
    /// weight and zero reps are rejected here so the engine can assume
    /// validated data everywhere downstream.
    pub fn new(weight: f64, reps: u32, note: Option<String>) -> AppResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::invalid_input(format!(
                "set weight must be a non-negative number, got {weight}"
            )));
        }
        if reps == 0 {
            return Err(AppError::invalid_input("set reps must be at least 1"));
        }
        Ok(Self { weight, reps, note })
    }

    /// Work performed by this set: weight times reps
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// One exercise performed within one session: an ordered sequence of sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEntry {
    /// Exercise identifier (e.g. "Bench Press")
    pub exercise: String,
    /// Sets in the order they were performed
    pub sets: Vec<SetRecord>,
    /// When the entry started (UTC)
    pub started_at: DateTime<Utc>,
    /// When the entry completed (UTC)
    pub completed_at: DateTime<Utc>,
}

impl PerformanceEntry {
    /// The heaviest set of the entry, ties broken by performance order.
    ///
    /// This is the progressive-overload baseline: top set by weight, not by
    /// volume.
    #[must_use]
    pub fn top_set(&self) -> Option<&SetRecord> {
        self.sets.iter().reduce(|best, set| {
            if set.weight > best.weight {
                set
            } else {
                best
            }
        })
    }
}

/// A completed workout: the authoritative unit of history.
///
/// Supplied by the external session store and never mutated by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique session identifier
    pub id: Uuid,
    /// Exercises performed, in order
    pub entries: Vec<PerformanceEntry>,
    /// When the session started (UTC)
    pub started_at: DateTime<Utc>,
    /// When the session completed (UTC)
    pub completed_at: DateTime<Utc>,
}

impl SessionRecord {
    /// All sets logged for `exercise` in this session, in performance order.
    ///
    /// If the exercise appears in more than one entry (e.g. revisited later
    /// in the workout), the entries are merged so the session contributes at
    /// most one point to any derived series.
    #[must_use]
    pub fn sets_for(&self, exercise: &str) -> Vec<&SetRecord> {
        self.entries
            .iter()
            .filter(|entry| entry.exercise == exercise)
            .flat_map(|entry| entry.sets.iter())
            .collect()
    }

    /// Whether this session logged at least one set of `exercise`
    #[must_use]
    pub fn logs_exercise(&self, exercise: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.exercise == exercise && !entry.sets.is_empty())
    }
}

/// One point of a progression series: per-session scalars for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Session start date (UTC)
    pub session_date: DateTime<Utc>,
    /// Sum of weight times reps over the session's sets of the exercise
    pub total_volume: f64,
    /// Heaviest weight moved in the session
    pub max_weight: f64,
    /// Highest rep count of any single set in the session
    pub max_reps: u32,
}

/// The metric a personal record is tracked for.
///
/// A closed set so every dispatch over record kinds is exhaustiveness-checked
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Heaviest single-set weight
    Weight,
    /// Largest single-set volume (weight times reps)
    Volume,
    /// Highest single-set rep count
    Reps,
}

/// An all-time maximum of one metric for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Which metric this record is for
    pub kind: MetricKind,
    /// The record value
    pub value: f64,
    /// Date of the session in which the record was first achieved (UTC)
    pub achieved_at: DateTime<Utc>,
    /// Note attached to the achieving set, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Qualitative direction of change in a metric over a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionTrend {
    /// Later sessions meaningfully outperform earlier ones
    Increasing,
    /// No meaningful change, or not enough data to claim one
    Stable,
    /// Later sessions meaningfully underperform earlier ones
    Decreasing,
    /// Data too erratic for any confident direction
    Inconsistent,
}

impl ProgressionTrend {
    /// Short dashboard phrase for this trend
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Increasing => "You're getting stronger. Keep it up!",
            Self::Stable => "Performance is holding steady.",
            Self::Decreasing => "Recent sessions are trending down. Prioritize recovery.",
            Self::Inconsistent => "Performance is varying a lot between sessions.",
        }
    }
}

/// A concrete, bounded target for the next session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Target weight, clamped non-negative
    pub weight: f64,
    /// Target number of sets, at least 1
    pub sets: u32,
    /// Target reps per set, at least 1
    pub reps: u32,
    /// Human-readable explanation naming the trend and the adjustment
    pub rationale: String,
}

/// The full result of one progression query for one exercise.
///
/// Constructed fresh per query; it has no lifecycle beyond the call that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionMetrics {
    /// Exercise the metrics describe
    pub exercise: String,
    /// Distinct sessions contributing to the windowed series
    pub total_sessions: usize,
    /// Session frequency over the query window
    pub sessions_per_week: f64,
    /// Weight-channel trend over the window
    pub trend: ProgressionTrend,
    /// Short dashboard phrase derived from the trend
    pub summary: String,
    /// All-time heaviest-weight record, if any set exists
    pub weight_record: Option<PersonalRecord>,
    /// All-time single-set volume record, if any set exists
    pub volume_record: Option<PersonalRecord>,
    /// All-time rep-count record, if any set exists
    pub reps_record: Option<PersonalRecord>,
    /// Per-session points inside the window, ascending by date
    pub series: Vec<SeriesPoint>,
    /// Next-session target, absent only when history is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

impl ProgressionMetrics {
    /// Volume channel of the windowed series, in date order
    #[must_use]
    pub fn volume_channel(&self) -> Vec<f64> {
        self.series.iter().map(|p| p.total_volume).collect()
    }

    /// Max-weight channel of the windowed series, in date order
    #[must_use]
    pub fn weight_channel(&self) -> Vec<f64> {
        self.series.iter().map(|p| p.max_weight).collect()
    }
}
