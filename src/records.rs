// ABOUTME: Personal record tracking across the full unwindowed exercise history
// ABOUTME: All-time maxima of weight, single-set volume, and reps with achieving dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! Personal record tracking.
//!
//! Records are all-time by definition, so the scan always runs over the full
//! history regardless of the dashboard's selected window. Every raw set is
//! inspected, not per-session aggregates: a volume record belongs to the
//! single biggest set, not the biggest session.

use crate::models::{MetricKind, PersonalRecord, SessionRecord};

/// The up-to-three personal records of one exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBook {
    /// Heaviest single-set weight, if any set exists
    pub weight: Option<PersonalRecord>,
    /// Largest single-set volume, if any set exists
    pub volume: Option<PersonalRecord>,
    /// Highest single-set rep count, if any set exists
    pub reps: Option<PersonalRecord>,
}

/// Scan the full history of `exercise` for all-time records.
///
/// Ties on equal maxima keep the earliest achieving date, so the first time
/// a milestone was reached is the one that counts.
#[must_use]
pub fn track_records(exercise: &str, sessions: &[SessionRecord]) -> RecordBook {
    // Chronological scan plus strictly-greater replacement gives the
    // earliest-date tie-break for free.
    let mut ordered: Vec<&SessionRecord> = sessions.iter().collect();
    ordered.sort_by(|a, b| a.started_at.cmp(&b.started_at));

    let mut book = RecordBook::default();
    for session in ordered {
        for set in session.sets_for(exercise) {
            update(
                &mut book.weight,
                MetricKind::Weight,
                set.weight,
                session,
                set.note.as_deref(),
            );
            update(
                &mut book.volume,
                MetricKind::Volume,
                set.volume(),
                session,
                set.note.as_deref(),
            );
            update(
                &mut book.reps,
                MetricKind::Reps,
                f64::from(set.reps),
                session,
                set.note.as_deref(),
            );
        }
    }
    book
}

fn update(
    slot: &mut Option<PersonalRecord>,
    kind: MetricKind,
    value: f64,
    session: &SessionRecord,
    note: Option<&str>,
) {
    let beats_current = slot.as_ref().is_none_or(|current| value > current.value);
    if beats_current {
        *slot = Some(PersonalRecord {
            kind,
            value,
            achieved_at: session.started_at,
            note: note.map(str::to_owned),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{PerformanceEntry, SetRecord};
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn session(days_ago: i64, sets: Vec<(f64, u32, Option<&str>)>) -> SessionRecord {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap() - Duration::days(days_ago);
        SessionRecord {
            id: Uuid::new_v4(),
            entries: vec![PerformanceEntry {
                exercise: "Deadlift".into(),
                sets: sets
                    .into_iter()
                    .map(|(w, r, n)| SetRecord::new(w, r, n.map(str::to_owned)).unwrap())
                    .collect(),
                started_at: date,
                completed_at: date,
            }],
            started_at: date,
            completed_at: date,
        }
    }

    #[test]
    fn test_empty_history_has_no_records() {
        let book = track_records("Deadlift", &[]);
        assert!(book.weight.is_none());
        assert!(book.volume.is_none());
        assert!(book.reps.is_none());
    }

    #[test]
    fn test_records_cover_all_three_metrics() {
        let sessions = vec![session(0, vec![(100.0, 5, None)])];
        let book = track_records("Deadlift", &sessions);
        assert!((book.weight.unwrap().value - 100.0).abs() < f64::EPSILON);
        assert!((book.volume.unwrap().value - 500.0).abs() < f64::EPSILON);
        assert!((book.reps.unwrap().value - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_comes_from_single_set_not_session_aggregate() {
        // Two light sets outweigh one heavy set in session volume, but the
        // volume record is per-set.
        let sessions = vec![session(0, vec![(60.0, 10, None), (60.0, 10, None), (140.0, 3, None)])];
        let book = track_records("Deadlift", &sessions);
        assert!((book.volume.unwrap().value - 600.0).abs() < f64::EPSILON);
        assert!((book.weight.unwrap().value - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tie_keeps_earliest_date() {
        let sessions = vec![
            session(10, vec![(120.0, 5, Some("first time"))]),
            session(2, vec![(120.0, 5, Some("again"))]),
        ];
        let book = track_records("Deadlift", &sessions);
        let record = book.weight.unwrap();
        assert_eq!(record.note.as_deref(), Some("first time"));
    }

    #[test]
    fn test_new_high_replaces_record() {
        let sessions = vec![
            session(10, vec![(120.0, 5, None)]),
            session(2, vec![(125.0, 3, Some("grinder"))]),
        ];
        let book = track_records("Deadlift", &sessions);
        let record = book.weight.unwrap();
        assert!((record.value - 125.0).abs() < f64::EPSILON);
        assert_eq!(record.note.as_deref(), Some("grinder"));
    }

    #[test]
    fn test_records_ignore_other_exercises() {
        let sessions = vec![session(0, vec![(100.0, 5, None)])];
        let book = track_records("Bench Press", &sessions);
        assert!(book.weight.is_none());
    }
}
