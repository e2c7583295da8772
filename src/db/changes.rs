//! In-process row-change feed.
//!
//! Subscribers register a filter (table, optional row id) and receive every
//! matching [`Change`] on an `mpsc` channel. A subscriber whose receiver has
//! been dropped is removed on the next publish.
//!
//! The `wedplanner` binary itself never subscribes: the feed is for code
//! embedding the library, which subscribes on `DbPool::changes` before
//! calling into `core`. Without subscribers a publish is a no-op.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeKind::Insert => "INSERT",
            ChangeKind::Update => "UPDATE",
            ChangeKind::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// A row change in one of the store tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub table: &'static str,
    pub row_id: String,
    pub kind: ChangeKind,
}

impl Change {
    pub fn new(table: &'static str, row_id: impl ToString, kind: ChangeKind) -> Self {
        Self {
            table,
            row_id: row_id.to_string(),
            kind,
        }
    }
}

/// Which changes a subscriber wants: a table, optionally a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeFilter {
    pub table: &'static str,
    pub row_id: Option<String>,
}

impl ChangeFilter {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            row_id: None,
        }
    }

    pub fn row(table: &'static str, row_id: impl ToString) -> Self {
        Self {
            table,
            row_id: Some(row_id.to_string()),
        }
    }

    pub fn matches(&self, change: &Change) -> bool {
        self.table == change.table
            && self
                .row_id
                .as_ref()
                .is_none_or(|id| *id == change.row_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    filter: ChangeFilter,
    tx: Sender<Change>,
}

#[derive(Default)]
pub struct ChangeFeed {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl ChangeFeed {
    pub fn subscribe(&mut self, filter: ChangeFilter) -> (SubscriptionId, Receiver<Change>) {
        let (tx, rx) = mpsc::channel();
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.push(Subscriber { id, filter, tx });
        (id, rx)
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Deliver `change` to every matching subscriber; returns how many got it.
    pub fn publish(&mut self, change: Change) -> usize {
        let mut delivered = 0;
        self.subscribers.retain(|s| {
            if !s.filter.matches(&change) {
                return true;
            }
            match s.tx.send(change.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
