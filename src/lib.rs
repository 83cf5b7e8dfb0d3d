// ABOUTME: Progression tracking and recommendation engine for strength-training history
// ABOUTME: Crate root wiring aggregation, trend, record, and overload-planning modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Progression tracking and recommendation engine.
//!
//! Turns a client's raw strength-training history into per-exercise
//! progression metrics: a date-ordered series of session aggregates, a
//! noise-tolerant trend label, all-time personal records, and a
//! progressive-overload target for the next session.
//!
//! The entry point is [`ProgressionAnalyzer`], generic over a
//! [`HistoryProvider`] that supplies completed sessions. All analysis
//! stages beneath the provider seam are pure and deterministic.
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use progression_engine::{ProgressionAnalyzer, ProgressionAnalyzerTrait, StaticHistory};
//!
//! # async fn run() -> progression_engine::AppResult<()> {
//! let analyzer = ProgressionAnalyzer::new(StaticHistory::new(vec![]));
//! let end = Utc::now();
//! let metrics = analyzer
//!     .compute_progression_metrics("Bench Press", end - Duration::days(90), end)
//!     .await?;
//! assert!(metrics.is_none());
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod engine;
pub mod errors;
pub mod history;
pub mod models;
pub mod records;
pub mod recommendation;
pub mod trend;

pub use engine::{ProgressionAnalyzer, ProgressionAnalyzerTrait};
pub use errors::{AppError, AppResult, ErrorCode};
pub use history::{HistoryProvider, StaticHistory};
pub use models::{
    MetricKind, PerformanceEntry, PersonalRecord, ProgressionMetrics, ProgressionTrend,
    Recommendation, SeriesPoint, SessionRecord, SetRecord,
};
pub use records::{track_records, RecordBook};
pub use recommendation::OverloadPlanner;
pub use trend::TrendClassifier;
