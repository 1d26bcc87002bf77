use super::provider::{FallbackProvider, FetchError, ReadingSource};
use super::reading::Reading;
use crate::event;
use crate::http_handler::{
    http_client::HTTPClient, http_request::crdb_dataset_get::CrdbDatasetRequest,
};
use async_trait::async_trait;
use itertools::Itertools;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Experiments queryable in the cosmic ray database.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Experiment {
    Voyager,
    #[strum(to_string = "AMS-02", serialize = "ams02", serialize = "ams")]
    Ams02,
    #[strum(to_string = "ACE")]
    Ace,
    #[strum(to_string = "PAMELA")]
    Pamela,
    #[strum(to_string = "SOHO")]
    Soho,
}

impl Experiment {
    /// Name as the database expects it in the `exp` parameter.
    pub fn query_name(self) -> &'static str { self.into() }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Particle {
    #[strum(to_string = "Proton (H)", serialize = "proton", serialize = "h")]
    Proton,
    #[strum(to_string = "Helium (He)", serialize = "helium", serialize = "he")]
    Helium,
    #[strum(to_string = "Carbon (C)", serialize = "carbon", serialize = "c")]
    Carbon,
    #[strum(to_string = "Electron (e−)", serialize = "electron", serialize = "e")]
    Electron,
}

impl Particle {
    /// Nucleus code for the `nuc` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Particle::Proton => "H",
            Particle::Helium => "He",
            Particle::Carbon => "C",
            Particle::Electron => "e",
        }
    }
}

/// One point of a flux-vs-energy spectrum.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FluxPoint {
    #[serde(rename = "Energy (GeV/n)")]
    energy: f64,
    #[serde(rename = "Flux")]
    flux: f64,
}

impl FluxPoint {
    pub fn new(energy: f64, flux: f64) -> Self { Self { energy, flux } }
    /// Kinetic energy per nucleon, GeV/n.
    pub fn energy(&self) -> f64 { self.energy }
    /// Differential flux, particles/(m²·sr·s·GeV/n).
    pub fn flux(&self) -> f64 { self.flux }
}

/// Usable points of a query, sorted by ascending energy, together with the number of
/// datasets the database matched. Points may be empty even when datasets were found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    dataset_count: usize,
    points: Vec<FluxPoint>,
}

impl Spectrum {
    pub fn new(dataset_count: usize, points: Vec<FluxPoint>) -> Self {
        Self { dataset_count, points }
    }
    /// Datasets matched by the query, before any point was dropped.
    pub fn dataset_count(&self) -> usize { self.dataset_count }
    pub fn points(&self) -> &[FluxPoint] { &self.points }
}

/// A spectrum with provenance. Falls back to an empty [`Spectrum`].
pub type Dataset = Reading<Spectrum>;

/// All published points of one experiment for one particle species.
#[derive(Debug)]
pub struct CrdbDatasetSource {
    client: Arc<HTTPClient>,
    experiment: Experiment,
    particle: Particle,
}

impl CrdbDatasetSource {
    pub fn new(client: Arc<HTTPClient>, experiment: Experiment, particle: Particle) -> Self {
        Self { client, experiment, particle }
    }
}

#[async_trait]
impl ReadingSource for CrdbDatasetSource {
    type Value = Spectrum;

    fn name(&self) -> String { format!("CRDB {} {}", self.experiment, self.particle) }

    async fn fetch(&self) -> Result<Spectrum, FetchError> {
        let request = CrdbDatasetRequest {
            experiment: self.experiment.query_name(),
            nucleus: self.particle.code(),
        };
        let response = self.client.send(&request).await?;
        let points = response
            .complete_points()
            .map(|(energy, flux)| FluxPoint::new(energy, flux))
            .sorted_by(|a, b| a.energy.total_cmp(&b.energy))
            .collect::<Vec<_>>();
        event!(
            "{} returned {} datasets, {} usable points",
            self.name(),
            response.datasets().len(),
            points.len()
        );
        Ok(Spectrum::new(response.datasets().len(), points))
    }
}

/// Queries one spectrum. A failed query yields an empty spectrum tagged as fallback, an empty
/// but successful query an empty live spectrum.
pub async fn fetch_dataset(
    client: Arc<HTTPClient>,
    experiment: Experiment,
    particle: Particle,
) -> Dataset {
    FallbackProvider::new(
        CrdbDatasetSource::new(client, experiment, particle),
        Spectrum::default(),
    )
        .read()
        .await
}
