use time::OffsetDateTime;

use super::models::EntryId;

/// Hands out fresh ids for new entries and configuration rows.
pub trait IdSource {
    fn next_id(&mut self) -> String;

    fn next_entry_id(&mut self) -> EntryId {
        EntryId::new(self.next_id())
    }
}

/// Millisecond timestamp ids ("1738051200000").
///
/// Ids sort in creation order. Two ids requested within the same millisecond
/// are bumped so they never collide.
#[derive(Debug, Default)]
pub struct TimeOrderedIds {
    last: i128,
}

impl TimeOrderedIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for TimeOrderedIds {
    fn next_id(&mut self) -> String {
        let now = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Prefixed counter ids ("tl-1", "tl-2", ...).
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
