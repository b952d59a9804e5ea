//! Circular buffer of recent log lines.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared, bounded buffer; cloning shares the same lines.
#[derive(Clone, Debug)]
pub struct RecentLines {
    inner: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Append every non-empty line of `chunk`, evicting the oldest.
    pub fn push_chunk(&self, chunk: &str) {
        let Ok(mut lines) = self.inner.lock() else {
            return;
        };
        for line in chunk.lines().filter(|l| !l.trim().is_empty()) {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}
