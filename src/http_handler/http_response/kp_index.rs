/// Body of the planetary K index feed, oldest sample first.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct KpIndexResponse {
    samples: Vec<KpIndexSample>,
}

impl KpIndexResponse {
    pub fn samples(&self) -> &[KpIndexSample] { &self.samples }

    pub fn latest(&self) -> Option<&KpIndexSample> {
        self.samples.iter().rev().find(|s| s.kp().is_some())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct KpIndexSample {
    time_tag: String,
    #[serde(default)]
    kp_index: Option<f64>,
    #[serde(default)]
    estimated_kp: Option<f64>,
}

impl KpIndexSample {
    pub fn time_tag(&self) -> &str { &self.time_tag }

    /// Prefers the fractional estimate, falls back to the integer index. Values outside 0..=9
    /// are treated as missing.
    pub fn kp(&self) -> Option<f64> {
        self.estimated_kp
            .or(self.kp_index)
            .filter(|kp| kp.is_finite() && (0.0..=9.0).contains(kp))
    }
}
