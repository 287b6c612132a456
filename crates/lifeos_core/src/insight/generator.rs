//! Failure-tolerant insight generation with an observable loading flag.

use super::provider::{GeminiProvider, InsightProvider, UnconfiguredProvider};
use super::request::InsightRequest;
use super::response::{fallback_insight, parse_insight, Insight};
use super::InsightError;
use crate::config::InsightConfig;
use log::{info, warn};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct InsightGenerator {
    provider: Box<dyn InsightProvider>,
    /// Calls currently awaiting the provider.
    in_flight: AtomicUsize,
}

/// Counts one call as in flight until dropped, even if the future is dropped.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl InsightGenerator {
    pub fn new(provider: impl InsightProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Uses the HTTP provider when a key is configured; otherwise every call
    /// returns the fallback.
    pub fn from_config(config: &InsightConfig) -> Self {
        match GeminiProvider::from_config(config) {
            Ok(provider) => Self::new(provider),
            Err(err) => {
                info!(
                    "event=insight_provider_init module=insight status=fallback code={}",
                    err.code()
                );
                Self::new(UnconfiguredProvider)
            }
        }
    }

    /// Whether any request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Returns the provider's insight, or the localized fallback on failure.
    pub async fn generate(&self, request: &InsightRequest) -> Insight {
        match self.try_generate(request).await {
            Ok(insight) => insight,
            Err(err) => {
                warn!(
                    "event=insight_generate module=insight status=fallback provider={} code={} language={}",
                    self.provider.name(),
                    err.code(),
                    request.language
                );
                fallback_insight(request.language)
            }
        }
    }

    /// Single provider round trip without the fallback.
    pub async fn try_generate(&self, request: &InsightRequest) -> Result<Insight, InsightError> {
        let _guard = InFlightGuard::enter(&self.in_flight);

        let text = self.provider.complete(&request.prompt()).await?;
        let insight = parse_insight(&text)?;
        info!(
            "event=insight_generate module=insight status=ok provider={} moods={} notes={}",
            self.provider.name(),
            request.moods.len(),
            request.notes.len()
        );
        Ok(insight)
    }
}
