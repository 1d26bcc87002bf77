use super::reading::Reading;
use crate::http_handler::common::HTTPError;
use crate::{event, warn};
use async_trait::async_trait;
use strum_macros::Display;

/// Why a source could not deliver a value.
#[derive(Debug, Display)]
pub enum FetchError {
    #[strum(to_string = "{error}")]
    Transport { error: HTTPError },
    #[strum(to_string = "no usable sample in response")]
    NoUsableSample,
}

impl std::error::Error for FetchError {}

impl From<HTTPError> for FetchError {
    fn from(error: HTTPError) -> Self { FetchError::Transport { error } }
}

/// A single upstream value producer: one feed, one query.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    type Value: Clone + Send + Sync;

    /// Human readable name used in log lines.
    fn name(&self) -> String;

    /// Fetches the current value.
    ///
    /// # Errors
    /// Any failure to obtain a usable value. The caller decides on the fallback.
    async fn fetch(&self) -> Result<Self::Value, FetchError>;
}

/// Wraps a [`ReadingSource`] with a constant to substitute whenever a fetch fails.
///
/// `read` never fails: failures are logged as a warning and turned into a reading with
/// [`Provenance::Fallback`](super::Provenance::Fallback).
pub struct FallbackProvider<S: ReadingSource> {
    source: S,
    fallback: S::Value,
}

impl<S: ReadingSource> FallbackProvider<S> {
    pub fn new(source: S, fallback: S::Value) -> Self { Self { source, fallback } }

    pub fn source(&self) -> &S { &self.source }

    /// A reading without contacting the source at all.
    pub fn offline(&self) -> Reading<S::Value> {
        event!("{} skipped, offline", self.source.name());
        Reading::fallback(self.fallback.clone())
    }

    pub async fn read(&self) -> Reading<S::Value> {
        match self.source.fetch().await {
            Ok(value) => {
                event!("{} delivered a live value", self.source.name());
                Reading::live(value)
            }
            Err(e) => {
                warn!("{} unavailable ({e}), using fallback value", self.source.name());
                Reading::fallback(self.fallback.clone())
            }
        }
    }
}
