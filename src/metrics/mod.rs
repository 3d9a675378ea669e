//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    HistogramVec, Opts, Registry,
};
use std::sync::Arc;

use crate::hands::HandLabel;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    Arc::new(Metrics::new().expect("Failed to initialize metrics"))
});

/// Outcome of a hand query, used as the `status` label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Found,
    NotFound,
    Error,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    // Producer side
    pub frames_published: CounterVec,

    // Query side
    pub hand_queries: CounterVec,
    pub hand_query_duration: HistogramVec,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let frames_published = register_counter_vec_with_registry!(
            Opts::new("hand_frames_published_total", "Total hand frames published to the store"),
            &["label"],
            registry
        )?;

        let hand_queries = register_counter_vec_with_registry!(
            Opts::new("hand_queries_total", "Total hand landmark queries"),
            &["label", "status"],
            registry
        )?;

        let hand_query_duration = register_histogram_vec_with_registry!(
            "hand_query_duration_seconds",
            "Hand landmark query duration in seconds",
            &["label"],
            registry
        )?;

        Ok(Self {
            registry,
            frames_published,
            hand_queries,
            hand_query_duration,
        })
    }

    /// Record a frame published by the producer
    pub fn record_frame_published(&self, label: HandLabel) {
        self.frames_published
            .with_label_values(&[label.as_str()])
            .inc();
    }

    /// Record a completed hand query
    pub fn record_hand_query(&self, label: HandLabel, status: QueryStatus, seconds: f64) {
        self.hand_queries
            .with_label_values(&[label.as_str(), status.as_str()])
            .inc();
        self.hand_query_duration
            .with_label_values(&[label.as_str()])
            .observe(seconds);
    }

    /// Export metrics in Prometheus text format
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or_default();

        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initialization() {
        let metrics = Metrics::new();
        assert!(metrics.is_ok());
    }

    #[test]
    fn test_record_and_export() {
        let metrics = Metrics::new().unwrap();
        metrics.record_frame_published(HandLabel::Left);
        metrics.record_hand_query(HandLabel::Right, QueryStatus::NotFound, 0.001);

        let text = metrics.export_prometheus();
        assert!(text.contains("hand_frames_published_total{label=\"Left\"} 1"));
        assert!(text.contains("hand_queries_total{label=\"Right\",status=\"not_found\"} 1"));
        assert!(text.contains("hand_query_duration_seconds"));
    }
}
