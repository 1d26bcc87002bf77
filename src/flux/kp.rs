use super::provider::{FallbackProvider, FetchError, ReadingSource};
use crate::event;
use crate::http_handler::{http_client::HTTPClient, http_request::kp_index_get::KpIndexRequest};
use async_trait::async_trait;
use std::sync::Arc;
use strum_macros::Display;

/// Kp substituted when the live feed cannot be read: geomagnetically quiet.
pub const FALLBACK_KP: KpIndex = KpIndex(0.0);

/// Planetary K index, 0 (quiet) to 9 (extreme storm).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct KpIndex(f64);

impl KpIndex {
    /// Clamps into `0..=9`. `None` for non-finite input.
    pub fn new(kp: f64) -> Option<Self> {
        kp.is_finite().then_some(KpIndex(kp.clamp(0.0, 9.0)))
    }

    pub fn value(self) -> f64 { self.0 }

    /// NOAA G-scale classification.
    pub fn storm_level(self) -> StormLevel {
        match self.0 {
            kp if kp >= 9.0 => StormLevel::G5,
            kp if kp >= 8.0 => StormLevel::G4,
            kp if kp >= 7.0 => StormLevel::G3,
            kp if kp >= 6.0 => StormLevel::G2,
            kp if kp >= 5.0 => StormLevel::G1,
            _ => StormLevel::G0,
        }
    }
}

/// NOAA geomagnetic storm scale.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display)]
pub enum StormLevel {
    #[strum(to_string = "G0 (quiet)")]
    G0,
    #[strum(to_string = "G1 (minor)")]
    G1,
    #[strum(to_string = "G2 (moderate)")]
    G2,
    #[strum(to_string = "G3 (strong)")]
    G3,
    #[strum(to_string = "G4 (severe)")]
    G4,
    #[strum(to_string = "G5 (extreme)")]
    G5,
}

/// Latest one-minute planetary K index estimate.
#[derive(Debug)]
pub struct KpIndexSource {
    client: Arc<HTTPClient>,
}

impl KpIndexSource {
    pub fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl ReadingSource for KpIndexSource {
    type Value = KpIndex;

    fn name(&self) -> String { "planetary K index".to_string() }

    async fn fetch(&self) -> Result<KpIndex, FetchError> {
        let response = self.client.send(&KpIndexRequest {}).await?;
        let sample = response.latest().ok_or(FetchError::NoUsableSample)?;
        let kp = sample.kp().and_then(KpIndex::new).ok_or(FetchError::NoUsableSample)?;
        event!("Kp {} at {}", kp.value(), sample.time_tag());
        Ok(kp)
    }
}

pub fn kp_provider(client: Arc<HTTPClient>) -> FallbackProvider<KpIndexSource> {
    FallbackProvider::new(KpIndexSource::new(client), FALLBACK_KP)
}
