use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

#[derive(Debug)]
pub struct Stats {
    started_at: Instant,
    processed: AtomicU64,
    badge_errors: AtomicU64,
}

impl Default for Stats {
    fn default() -> Self {
        Self { started_at: Instant::now(), processed: AtomicU64::new(0), badge_errors: AtomicU64::new(0) }
    }
}

impl Stats {
    pub fn new() -> Self { Self::default() }

    pub fn record_badge(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_badge_error(&self) {
        self.badge_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    pub fn badge_errors(&self) -> u64 {
        self.badge_errors.load(Ordering::Relaxed)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
