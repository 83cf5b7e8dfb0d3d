// ABOUTME: Metric aggregation reducing raw session history into per-session progression series
// ABOUTME: Produces date-ordered volume, max-weight, and max-reps points for one exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Metric aggregation.
//!
//! Reduces the raw set history of one exercise into a per-session scalar
//! series inside an inclusive date window. Sessions that did not log the
//! exercise contribute nothing; emitting zero-points here would masquerade
//! as a decline to the trend classifier downstream.

use chrono::{DateTime, Utc};

use crate::models::{SeriesPoint, SessionRecord};

/// Build the progression series for `exercise` from the sessions inside the
/// inclusive `[start, end]` window.
///
/// One point per matching session, ascending by session date. Two sessions
/// cannot share an instant in the source of truth, so the stable sort only
/// ever breaks ties by insertion order defensively. An inverted window
/// yields an empty series.
#[must_use]
pub fn build_series(
    exercise: &str,
    sessions: &[SessionRecord],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<SeriesPoint> {
    let mut series: Vec<SeriesPoint> = sessions
        .iter()
        .filter(|session| session.started_at >= start && session.started_at <= end)
        .filter_map(|session| point_for(exercise, session))
        .collect();

    series.sort_by(|a, b| a.session_date.cmp(&b.session_date));
    series
}

/// Reduce one session's sets of `exercise` to a series point, or `None` if
/// the session has no matching sets.
fn point_for(exercise: &str, session: &SessionRecord) -> Option<SeriesPoint> {
    let sets = session.sets_for(exercise);
    if sets.is_empty() {
        return None;
    }

    let total_volume = sets.iter().map(|set| set.volume()).sum();
    let max_weight = sets
        .iter()
        .map(|set| set.weight)
        .fold(f64::MIN, f64::max);
    let max_reps = sets.iter().map(|set| set.reps).max().unwrap_or(0);

    Some(SeriesPoint {
        session_date: session.started_at,
        total_volume,
        max_weight,
        max_reps,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{PerformanceEntry, SetRecord};
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn session(days_ago: i64, exercise: &str, sets: Vec<(f64, u32)>) -> SessionRecord {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap() - Duration::days(days_ago);
        SessionRecord {
            id: Uuid::new_v4(),
            entries: vec![PerformanceEntry {
                exercise: exercise.to_owned(),
                sets: sets
                    .into_iter()
                    .map(|(w, r)| SetRecord::new(w, r, None).unwrap())
                    .collect(),
                started_at: date,
                completed_at: date + Duration::minutes(10),
            }],
            started_at: date,
            completed_at: date + Duration::hours(1),
        }
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap();
        (end - Duration::days(90), end)
    }

    #[test]
    fn test_series_skips_sessions_without_the_exercise() {
        let sessions = vec![
            session(3, "Bench Press", vec![(100.0, 5)]),
            session(2, "Squat", vec![(140.0, 5)]),
            session(1, "Bench Press", vec![(102.5, 5)]),
        ];
        let (start, end) = window();
        let series = build_series("Bench Press", &sessions, start, end);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_series_is_ascending_by_date() {
        let sessions = vec![
            session(1, "Bench Press", vec![(104.0, 5)]),
            session(5, "Bench Press", vec![(100.0, 5)]),
            session(3, "Bench Press", vec![(102.0, 5)]),
        ];
        let (start, end) = window();
        let series = build_series("Bench Press", &sessions, start, end);
        let dates: Vec<_> = series.iter().map(|p| p.session_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_point_aggregates_volume_and_maxima() {
        let sessions = vec![session(1, "Bench Press", vec![(100.0, 5), (90.0, 8)])];
        let (start, end) = window();
        let series = build_series("Bench Press", &sessions, start, end);
        let point = &series[0];
        assert!((point.total_volume - 1220.0).abs() < f64::EPSILON);
        assert!((point.max_weight - 100.0).abs() < f64::EPSILON);
        assert_eq!(point.max_reps, 8);
    }

    #[test]
    fn test_duplicate_entries_merge_into_one_point() {
        let date = Utc.with_ymd_and_hms(2025, 5, 30, 10, 0, 0).unwrap();
        let entry = |w: f64| PerformanceEntry {
            exercise: "Bench Press".into(),
            sets: vec![SetRecord::new(w, 5, None).unwrap()],
            started_at: date,
            completed_at: date,
        };
        let sessions = vec![SessionRecord {
            id: Uuid::new_v4(),
            entries: vec![entry(100.0), entry(95.0)],
            started_at: date,
            completed_at: date,
        }];
        let (start, end) = window();
        let series = build_series("Bench Press", &sessions, start, end);
        assert_eq!(series.len(), 1);
        assert!((series[0].total_volume - 975.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_window_yields_empty_series() {
        let sessions = vec![session(1, "Bench Press", vec![(100.0, 5)])];
        let (start, end) = window();
        assert!(build_series("Bench Press", &sessions, end, start).is_empty());
    }
}
