//! Dispatch History - 최근 디스패치 기록 (메모리 전용)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// 디스패치 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DispatchId(pub String);

impl DispatchId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for DispatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DispatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a dispatch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Every listener ran
    Delivered,
    /// A listener canceled the event
    Canceled,
    /// A listener returned an error
    Failed,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
        }
    }
}

/// One `fire` call that produced an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub id: DispatchId,
    pub event_name: String,
    /// Number of listeners invoked, including the one that canceled or failed
    pub notified: usize,
    pub outcome: DispatchOutcome,
    pub timestamp: DateTime<Utc>,
}

impl DispatchRecord {
    pub fn new(event_name: impl Into<String>, notified: usize, outcome: DispatchOutcome) -> Self {
        Self {
            id: DispatchId::new(),
            event_name: event_name.into(),
            notified,
            outcome,
            timestamp: Utc::now(),
        }
    }
}

/// Bounded ring of recent dispatches; capacity 0 records nothing.
#[derive(Debug, Default)]
pub struct DispatchHistory {
    capacity: usize,
    records: VecDeque<DispatchRecord>,
}

impl DispatchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    pub fn push(&mut self, record: DispatchRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// 최근 기록 (최신 순)
    pub fn recent(&self, limit: Option<usize>) -> Vec<DispatchRecord> {
        let limit = limit.unwrap_or(self.records.len());
        self.records.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
