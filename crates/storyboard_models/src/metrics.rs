//! Metrics for collaborator calls.
//!
//! Uses the OpenTelemetry global meter, so nothing is exported unless the
//! binary installs a meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;
use storyboard_error::{GeminiErrorKind, StoryboardError, StoryboardErrorKind};

static METRICS: OnceLock<StoryboardMetrics> = OnceLock::new();

/// Counters and timings for enhancement and synthesis calls.
///
/// Labeled with provider, model, and operation (`enhance` or `synthesize`).
#[derive(Clone)]
pub struct StoryboardMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful collaborator calls
    pub requests: Counter<u64>,
    /// Failed collaborator calls
    pub errors: Counter<u64>,
    /// Call duration in seconds
    pub duration: Histogram<f64>,
}

impl StoryboardMetrics {
    fn init() -> Self {
        let meter = global::meter("storyboard");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("storyboard.requests")
                .with_description("Successful collaborator calls")
                .build(),
            errors: meter
                .u64_counter("storyboard.errors")
                .with_description("Failed collaborator calls")
                .build(),
            duration: meter
                .f64_histogram("storyboard.duration")
                .with_unit("s")
                .with_description("Collaborator call duration")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful call.
    pub fn record_request(&self, provider: &str, model: &str, operation: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("operation", operation.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed call.
    pub fn record_error(&self, provider: &str, model: &str, operation: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "network", "invalid_request",
/// "server", "content", "decode", "config", "unknown".
pub fn classify_error(error: &StoryboardError) -> &'static str {
    match error.kind() {
        StoryboardErrorKind::Http(_) => "network",
        StoryboardErrorKind::Json(_) => "decode",
        StoryboardErrorKind::Config(_) => "config",
        StoryboardErrorKind::Gemini(e) => match &e.kind {
            GeminiErrorKind::MissingApiKey | GeminiErrorKind::ClientCreation(_) => "config",
            GeminiErrorKind::HttpError { status_code, .. } => match *status_code {
                429 => "rate_limit",
                401 | 403 => "auth",
                400..=499 => "invalid_request",
                _ => "server",
            },
            GeminiErrorKind::ApiRequest(_)
            | GeminiErrorKind::EmptyResponse(_)
            | GeminiErrorKind::NoImageReturned(_) => "content",
            GeminiErrorKind::Base64Decode(_) => "decode",
        },
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyboard_error::{GeminiError, HttpError};

    fn status(code: u16) -> StoryboardError {
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code: code,
            message: String::new(),
        })
        .into()
    }

    #[test]
    fn test_classify_status_codes() {
        assert_eq!(classify_error(&status(429)), "rate_limit");
        assert_eq!(classify_error(&status(403)), "auth");
        assert_eq!(classify_error(&status(400)), "invalid_request");
        assert_eq!(classify_error(&status(503)), "server");
    }

    #[test]
    fn test_classify_transport_and_content() {
        assert_eq!(classify_error(&HttpError::new("reset").into()), "network");
        let blocked: StoryboardError =
            GeminiError::new(GeminiErrorKind::NoImageReturned("imagen".into())).into();
        assert_eq!(classify_error(&blocked), "content");
    }

    #[test]
    fn test_recording_without_provider_is_noop() {
        let metrics = StoryboardMetrics::get();
        metrics.record_request("gemini", "gemini-2.5-flash", "enhance", 0.25);
        metrics.record_error("gemini", "imagen-3.0-generate-002", "synthesize", "server");
    }
}
