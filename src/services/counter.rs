use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory visit counts keyed by page hash. Lives as long as the process.
#[derive(Debug)]
pub struct CounterStore {
    counts: Mutex<HashMap<String, u64>>,
    unseen: String,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::with_default("0")
    }
}

impl CounterStore {
    pub fn new() -> Self { Self::default() }

    /// `unseen` is what `peek` reports for a key that was never counted.
    pub fn with_default(unseen: impl Into<String>) -> Self {
        Self { counts: Mutex::new(HashMap::new()), unseen: unseen.into() }
    }

    /// Bumps the count for `key` and returns the new value.
    pub async fn get_and_increment(&self, key: &str) -> String {
        let mut counts = self.counts.lock().await;
        let count = match counts.get_mut(key) {
            Some(count) => {
                *count = count.saturating_add(1);
                *count
            }
            None => {
                counts.insert(key.to_string(), 1);
                1
            }
        };
        count.to_string()
    }

    /// Reads the count for `key` without touching the map.
    pub async fn peek(&self, key: &str) -> String {
        let counts = self.counts.lock().await;
        match counts.get(key) {
            Some(count) => count.to_string(),
            None => self.unseen.clone(),
        }
    }

    pub async fn count(&self, key: &str, bypass: bool) -> String {
        if bypass { self.peek(key).await } else { self.get_and_increment(key).await }
    }

    pub async fn size(&self) -> usize {
        self.counts.lock().await.len()
    }
}
