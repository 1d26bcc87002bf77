use super::provider::{FallbackProvider, FetchError, ReadingSource};
use crate::event;
use crate::http_handler::{http_client::HTTPClient, http_request::proton_flux_get::ProtonFluxRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Flux substituted when the live feed cannot be read, protons/cm²/s/sr.
pub const FALLBACK_FLUX: f64 = 100.0;

/// Energy channel of the GOES integral proton feed used for dose estimates.
pub const DEFAULT_ENERGY_CHANNEL: &str = ">=10 MeV";

/// Latest integral proton flux from the GOES primary satellite.
#[derive(Debug)]
pub struct ProtonFluxSource {
    client: Arc<HTTPClient>,
    energy_channel: String,
}

impl ProtonFluxSource {
    /// # Arguments
    /// * `energy_channel` – GOES channel label as published in the feed, e.g. [`DEFAULT_ENERGY_CHANNEL`].
    pub fn new(client: Arc<HTTPClient>, energy_channel: &str) -> Self {
        Self { client, energy_channel: energy_channel.to_string() }
    }
}

#[async_trait]
impl ReadingSource for ProtonFluxSource {
    type Value = f64;

    fn name(&self) -> String { format!("GOES proton flux ({})", self.energy_channel) }

    async fn fetch(&self) -> Result<f64, FetchError> {
        let response = self.client.send(&ProtonFluxRequest {}).await?;
        let sample =
            response.latest_for_channel(&self.energy_channel).ok_or(FetchError::NoUsableSample)?;
        let flux = sample.flux().ok_or(FetchError::NoUsableSample)?;
        event!(
            "GOES-{} {} flux {flux} at {}",
            sample.satellite().map_or_else(|| "?".to_string(), |s| s.to_string()),
            sample.energy(),
            sample.time_tag()
        );
        Ok(flux)
    }
}

/// The proton flux feed of one energy channel with the standard fallback of [`FALLBACK_FLUX`].
pub fn flux_provider(
    client: Arc<HTTPClient>,
    energy_channel: &str,
) -> FallbackProvider<ProtonFluxSource> {
    FallbackProvider::new(ProtonFluxSource::new(client, energy_channel), FALLBACK_FLUX)
}
