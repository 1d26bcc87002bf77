/// Body of the GOES integral proton feed: a flat list of samples, oldest first.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct ProtonFluxResponse {
    samples: Vec<ProtonFluxSample>,
}

impl ProtonFluxResponse {
    pub fn samples(&self) -> &[ProtonFluxSample] { &self.samples }

    /// The most recent sample of the given energy channel that carries a usable flux value.
    pub fn latest_for_channel(&self, energy: &str) -> Option<&ProtonFluxSample> {
        self.samples
            .iter()
            .rev()
            .find(|s| s.energy == energy && s.flux().is_some())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct ProtonFluxSample {
    time_tag: String,
    #[serde(default)]
    satellite: Option<u16>,
    #[serde(default)]
    flux: Option<f64>,
    energy: String,
}

impl ProtonFluxSample {
    pub fn time_tag(&self) -> &str { &self.time_tag }
    pub fn satellite(&self) -> Option<u16> { self.satellite }
    pub fn energy(&self) -> &str { &self.energy }

    /// Flux in protons/cm²/s/sr, `None` for gaps and for values that cannot be a count rate.
    pub fn flux(&self) -> Option<f64> {
        self.flux.filter(|f| f.is_finite() && *f >= 0.0)
    }
}
