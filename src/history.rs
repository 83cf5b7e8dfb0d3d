// ABOUTME: History provider seam between the engine and the external session store
// ABOUTME: Async read-only trait plus an in-memory implementation for tests and fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

//! History provider seam.
//!
//! The engine consumes, and does not implement, session history. Durability,
//! fetching, and background scheduling all belong to the provider; the
//! engine only requires the two read operations below.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::SessionRecord;

/// Read-only access to the session history backing the engine.
///
/// Implementations must return sessions in ascending date order. Fetching may
/// be I/O-bound; the engine itself never blocks on anything else.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Full history of sessions that logged `exercise`, ascending by date
    async fn sessions_for_exercise(&self, exercise: &str) -> AppResult<Vec<SessionRecord>>;

    /// The most recent session that logged `exercise`, if any
    async fn most_recent_session(&self, exercise: &str) -> AppResult<Option<SessionRecord>>;
}

/// In-memory history over a fixed set of sessions.
///
/// Used as the fixture provider in tests and by callers that already hold
/// the full history in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory {
    sessions: Vec<SessionRecord>,
}

impl StaticHistory {
    /// Create a provider over `sessions`, sorting them ascending by start
    /// date so the provider contract holds regardless of input order.
    #[must_use]
    pub fn new(mut sessions: Vec<SessionRecord>) -> Self {
        sessions.sort_by(|a, b| a.started_at.cmp(&b.started_at));
        Self { sessions }
    }
}

#[async_trait]
impl HistoryProvider for StaticHistory {
    async fn sessions_for_exercise(&self, exercise: &str) -> AppResult<Vec<SessionRecord>> {
        Ok(self
            .sessions
            .iter()
            .filter(|session| session.logs_exercise(exercise))
            .cloned()
            .collect())
    }

    async fn most_recent_session(&self, exercise: &str) -> AppResult<Option<SessionRecord>> {
        Ok(self
            .sessions
            .iter()
            .rev()
            .find(|session| session.logs_exercise(exercise))
            .cloned())
    }
}
