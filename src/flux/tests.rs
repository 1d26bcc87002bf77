use super::*;
use crate::http_handler::http_client::{DEFAULT_TIMEOUT, HTTPClient};
use crate::test_util::{serve_once, serve_silent, unreachable_url};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;

struct StubSource {
    value: Option<f64>,
}

#[async_trait]
impl ReadingSource for StubSource {
    type Value = f64;
    fn name(&self) -> String { "stub".to_string() }
    async fn fetch(&self) -> Result<f64, FetchError> { self.value.ok_or(FetchError::NoUsableSample) }
}

fn client(url: &str) -> Arc<HTTPClient> { Arc::new(HTTPClient::new(url, DEFAULT_TIMEOUT).unwrap()) }

#[tokio::test]
async fn test_fallback_provider_passes_live_value() {
    let provider = FallbackProvider::new(StubSource { value: Some(42.0) }, FALLBACK_FLUX);
    let reading = provider.read().await;
    assert_eq!(*reading.value(), 42.0);
    assert_eq!(reading.provenance(), Provenance::Live);
    assert!(!reading.is_fallback());
}

#[tokio::test]
async fn test_fallback_provider_substitutes_on_failure() {
    let provider = FallbackProvider::new(StubSource { value: None }, FALLBACK_FLUX);
    let reading = provider.read().await;
    assert_eq!(*reading.value(), 100.0);
    assert_eq!(reading.provenance(), Provenance::Fallback);
}

#[test]
fn test_offline_reading_is_fallback() {
    let provider = FallbackProvider::new(StubSource { value: Some(1.0) }, 7.5);
    let reading = provider.offline();
    assert!(reading.is_fallback());
    assert_eq!(reading.into_value(), 7.5);
    assert_eq!(provider.source().name(), "stub");
}

#[tokio::test]
async fn test_flux_provider_reads_latest_ten_mev_sample() {
    let url = serve_once(
        "200 OK",
        r#"[
            {"time_tag": "2026-10-19T09:55:00Z", "satellite": 18, "flux": 0.39, "energy": ">=10 MeV"},
            {"time_tag": "2026-10-19T10:00:00Z", "satellite": 18, "flux": 0.52, "energy": ">=10 MeV"},
            {"time_tag": "2026-10-19T10:00:00Z", "satellite": 18, "flux": 12.0, "energy": ">=1 MeV"}
        ]"#,
    )
    .await;
    let reading = flux_provider(client(&url), DEFAULT_ENERGY_CHANNEL).read().await;
    assert_eq!(reading.provenance(), Provenance::Live);
    assert_eq!(*reading.value(), 0.52);
}

#[tokio::test]
async fn test_flux_provider_custom_channel() {
    let url = serve_once(
        "200 OK",
        r#"[{"time_tag": "2026-10-19T10:00:00Z", "flux": 12.0, "energy": ">=1 MeV"}]"#,
    )
    .await;
    let source = ProtonFluxSource::new(client(&url), ">=1 MeV");
    assert_eq!(source.fetch().await.unwrap(), 12.0);
}

#[tokio::test]
async fn test_flux_provider_falls_back_without_usable_sample() {
    let url = serve_once("200 OK", "[]").await;
    let reading = flux_provider(client(&url), DEFAULT_ENERGY_CHANNEL).read().await;
    assert!(reading.is_fallback());
    assert_eq!(*reading.value(), FALLBACK_FLUX);
}

#[tokio::test]
async fn test_flux_provider_falls_back_on_server_error() {
    let url = serve_once("500 Internal Server Error", "{}").await;
    let reading = flux_provider(client(&url), DEFAULT_ENERGY_CHANNEL).read().await;
    assert!(reading.is_fallback());
    assert_eq!(*reading.value(), FALLBACK_FLUX);
}

#[tokio::test]
async fn test_flux_provider_falls_back_when_unreachable() {
    let url = unreachable_url().await;
    let reading = flux_provider(client(&url), DEFAULT_ENERGY_CHANNEL).read().await;
    assert_eq!(reading.provenance(), Provenance::Fallback);
    assert_eq!(*reading.value(), FALLBACK_FLUX);
}

#[tokio::test]
async fn test_kp_provider_live_and_fallback() {
    let url = serve_once(
        "200 OK",
        r#"[{"time_tag": "2026-10-19T10:00:00", "kp_index": 6, "estimated_kp": 6.67}]"#,
    )
    .await;
    let reading = kp_provider(client(&url)).read().await;
    assert_eq!(reading.provenance(), Provenance::Live);
    assert_eq!(reading.value().storm_level(), StormLevel::G2);

    let url = unreachable_url().await;
    let reading = kp_provider(client(&url)).read().await;
    assert!(reading.is_fallback());
    assert_eq!(*reading.value(), FALLBACK_KP);
}

#[test]
fn test_storm_levels() {
    let level = |kp: f64| KpIndex::new(kp).unwrap().storm_level();
    assert_eq!(level(0.0), StormLevel::G0);
    assert_eq!(level(4.67), StormLevel::G0);
    assert_eq!(level(5.0), StormLevel::G1);
    assert_eq!(level(6.33), StormLevel::G2);
    assert_eq!(level(7.0), StormLevel::G3);
    assert_eq!(level(8.67), StormLevel::G4);
    assert_eq!(level(9.0), StormLevel::G5);
    assert_eq!(KpIndex::new(11.0).unwrap().value(), 9.0);
    assert!(KpIndex::new(f64::NAN).is_none());
}

#[tokio::test]
async fn test_dataset_sorted_and_cleaned() {
    let url = serve_once(
        "200 OK",
        r#"{"datasets": [
            {"data": [{"e_kn": 50.0, "val": 0.01}, {"e_kn": 0.5, "val": null}]},
            {"data": [{"e_kn": 5.0, "val": 2.5}, {"e_kn": 0.8, "val": 40.0}]}
        ]}"#,
    )
    .await;
    let dataset = fetch_dataset(client(&url), Experiment::Ams02, Particle::Helium).await;
    assert_eq!(dataset.provenance(), Provenance::Live);
    assert_eq!(dataset.value().dataset_count(), 2);
    let energies: Vec<f64> = dataset.value().points().iter().map(FluxPoint::energy).collect();
    assert_eq!(energies, vec![0.8, 5.0, 50.0]);
    assert_eq!(dataset.value().points()[0].flux(), 40.0);
}

#[tokio::test]
async fn test_dataset_empty_selection_is_live_and_empty() {
    let url = serve_once("200 OK", r#"{"datasets": []}"#).await;
    let dataset = fetch_dataset(client(&url), Experiment::Soho, Particle::Carbon).await;
    assert_eq!(dataset.provenance(), Provenance::Live);
    assert_eq!(dataset.value(), &Spectrum::default());
}

#[tokio::test]
async fn test_dataset_without_usable_points_keeps_dataset_count() {
    let url = serve_once(
        "200 OK",
        r#"{"datasets": [{"data": [{"e_kn": 1.0, "val": null}]}, {"data": [{"val": 3.0}]}]}"#,
    )
    .await;
    let dataset = fetch_dataset(client(&url), Experiment::Pamela, Particle::Proton).await;
    assert_eq!(dataset.provenance(), Provenance::Live);
    assert_eq!(dataset.value().dataset_count(), 2);
    assert!(dataset.value().points().is_empty());
}

#[tokio::test]
async fn test_dataset_failure_is_empty_fallback() {
    let url = unreachable_url().await;
    let dataset = fetch_dataset(client(&url), Experiment::Voyager, Particle::Proton).await;
    assert!(dataset.is_fallback());
    assert_eq!(dataset.value().dataset_count(), 0);
    assert!(dataset.value().points().is_empty());
}

#[test]
fn test_selection_names() {
    assert_eq!("ams-02".parse::<Experiment>().unwrap(), Experiment::Ams02);
    assert_eq!("pamela".parse::<Experiment>().unwrap(), Experiment::Pamela);
    assert_eq!("He".parse::<Particle>().unwrap(), Particle::Helium);
    assert_eq!(Particle::Electron.code(), "e");
    assert_eq!(Particle::Proton.to_string(), "Proton (H)");
    assert!("Ulysses".parse::<Experiment>().is_err());
}

#[test]
fn test_query_name_matches_display() {
    for experiment in Experiment::iter() {
        assert_eq!(experiment.query_name(), experiment.to_string());
    }
    assert_eq!(Experiment::Ams02.query_name(), "AMS-02");
}

#[tokio::test]
async fn test_flux_timeout_falls_back() {
    let url = serve_silent().await;
    let client = Arc::new(HTTPClient::new(&url, Duration::from_millis(200)).unwrap());
    let reading = flux_provider(client, DEFAULT_ENERGY_CHANNEL).read().await;
    assert_eq!(reading.provenance(), Provenance::Fallback);
    assert_eq!(*reading.value(), 100.0);
}

#[test]
fn test_csv_layout() {
    let points = vec![FluxPoint::new(0.5, 1200.0), FluxPoint::new(2.25, 3.5)];
    let mut out = Vec::new();
    write_csv(&points, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Energy (GeV/n),Flux\n0.5,1200.0\n2.25,3.5\n");
}

#[test]
fn test_csv_empty_has_header() {
    let mut out = Vec::new();
    write_csv(&[], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Energy (GeV/n),Flux\n");
}

#[test]
fn test_csv_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(default_file_name(Experiment::Ams02, Particle::Helium));
    assert!(path.ends_with("AMS-02_He_flux.csv"));
    export_csv(&[FluxPoint::new(1.0, 2.0)], &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
}
