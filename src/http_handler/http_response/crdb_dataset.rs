/// Body of the CRDB dataset query. Every field is optional upstream.
#[derive(serde::Deserialize, Debug, Default)]
pub struct CrdbDatasetResponse {
    #[serde(default)]
    datasets: Vec<CrdbDataset>,
}

impl CrdbDatasetResponse {
    pub fn datasets(&self) -> &[CrdbDataset] { &self.datasets }

    /// All points of all datasets that carry both an energy and a flux value, in response order.
    pub fn complete_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter())
            .filter_map(|p| Some((p.e_kn?, p.val?)))
            .filter(|(e, v)| e.is_finite() && v.is_finite())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct CrdbDataset {
    #[serde(default)]
    data: Vec<CrdbDataPoint>,
}

impl CrdbDataset {
    pub fn data(&self) -> &[CrdbDataPoint] { &self.data }
}

#[derive(serde::Deserialize, Debug)]
pub struct CrdbDataPoint {
    /// Kinetic energy per nucleon in GeV/n.
    #[serde(default)]
    e_kn: Option<f64>,
    /// Differential flux in particles/(m²·sr·s·GeV/n).
    #[serde(default)]
    val: Option<f64>,
}
