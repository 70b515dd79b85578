//! Chat history collaborator.
//!
//! The lobby only needs two things from the history store: append one record,
//! and read back the most recent N in chronological order. The trait keeps
//! that seam narrow so a hosted document store can slot in without touching
//! the gateway.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::models::message::ChatMessage;

/// Failure talking to the backing history store.
#[derive(Debug, Error)]
#[error("history store unavailable: {0}")]
pub struct HistoryError(pub String);

/// Abstraction over the persistent chat history store.
///
/// Backed by a hosted document database in production deployments and a
/// bounded in-memory buffer here and in tests.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one message record.
    async fn append(&self, message: ChatMessage) -> Result<(), HistoryError>;

    /// The most recent `limit` messages, oldest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>, HistoryError>;
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

pub struct MemoryHistory {
    capacity: usize,
    entries: Mutex<VecDeque<ChatMessage>>,
}

impl MemoryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn append(&self, message: ChatMessage) -> Result<(), HistoryError> {
        let mut entries = self.entries.lock();
        entries.push_back(message);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>, HistoryError> {
        let entries = self.entries.lock();
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.iter().skip(skip).cloned().collect())
    }
}
