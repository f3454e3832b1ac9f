//! Group id generation

use chrono::Utc;

use crate::models::GroupId;

/// Source of fresh group ids
pub trait IdGenerator {
    /// Produce an id that has never been handed out before
    fn next_id(&mut self) -> GroupId;
}

/// Ids built from the creation time in milliseconds followed by a counter.
///
/// The timestamp keeps ids unique across restarts, so an id freed by a
/// delete is never handed out again.
#[derive(Debug, Default)]
pub struct TimestampIds {
    counter: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> GroupId {
        self.counter += 1;
        GroupId::new(format!("{}{}", Utc::now().timestamp_millis(), self.counter))
    }
}

/// Deterministic ids "1", "2", ... for tests and scripted sessions
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> GroupId {
        self.last += 1;
        GroupId::new(self.last.to_string())
    }
}
