//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters and duration tracking for HTTP requests and portal API
//! operations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking API performance.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of meetings fetched
    meetings_fetched_total: Arc<AtomicU64>,

    /// Number of notices fetched
    notices_fetched_total: Arc<AtomicU64>,

    /// Number of messages fetched
    messages_fetched_total: Arc<AtomicU64>,

    /// Number of directory records fetched (members and usernames)
    members_fetched_total: Arc<AtomicU64>,

    /// Number of search filter invocations across all tools
    searches_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            meetings_fetched_total: Arc::new(AtomicU64::new(0)),
            notices_fetched_total: Arc::new(AtomicU64::new(0)),
            messages_fetched_total: Arc::new(AtomicU64::new(0)),
            members_fetched_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record meetings fetched.
    pub fn record_meetings_fetched(&self, count: usize) {
        self.meetings_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record notices fetched.
    pub fn record_notices_fetched(&self, count: usize) {
        self.notices_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record messages fetched.
    pub fn record_messages_fetched(&self, count: usize) {
        self.messages_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record directory records fetched.
    pub fn record_members_fetched(&self, count: usize) {
        self.members_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a search filter invocation.
    pub fn record_search(&self) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total meetings fetched.
    pub fn meetings_fetched_total(&self) -> u64 {
        self.meetings_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total notices fetched.
    pub fn notices_fetched_total(&self) -> u64 {
        self.notices_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total messages fetched.
    pub fn messages_fetched_total(&self) -> u64 {
        self.messages_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total directory records fetched.
    pub fn members_fetched_total(&self) -> u64 {
        self.members_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total search invocations.
    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.meetings_fetched_total.store(0, Ordering::Relaxed);
        self.notices_fetched_total.store(0, Ordering::Relaxed);
        self.messages_fetched_total.store(0, Ordering::Relaxed);
        self.members_fetched_total.store(0, Ordering::Relaxed);
        self.searches_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            meetings_fetched_total: self.meetings_fetched_total(),
            notices_fetched_total: self.notices_fetched_total(),
            messages_fetched_total: self.messages_fetched_total(),
            members_fetched_total: self.members_fetched_total(),
            searches_total: self.searches_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub meetings_fetched_total: u64,
    pub notices_fetched_total: u64,
    pub messages_fetched_total: u64,
    pub members_fetched_total: u64,
    pub searches_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}
