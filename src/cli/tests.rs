use super::commands::{ExploreOutcome, explore};
use super::{Cli, CliError, Command, run};
use crate::dosimetry::DosimetryError;
use crate::flux::{Experiment, Particle, fetch_dataset};
use crate::http_handler::http_client::{DEFAULT_TIMEOUT, HTTPClient};
use std::sync::Arc;
use crate::test_util::{serve_once, unreachable_url};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cosmic-dose").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_defaults() {
    let cli = parse(&["dose"]);
    assert_eq!(cli.timeout_secs, 5);
    match cli.command {
        Command::Dose { mission } => {
            assert_eq!(mission.days, 180);
            assert_eq!(mission.shielding, "none");
            assert_eq!(mission.energy_channel, ">=10 MeV");
            assert!(!mission.offline);
        }
        other => panic!("parsed {other:?}"),
    }
}

#[test]
fn test_explore_selection_parsing() {
    let cli = parse(&["explore", "--experiment", "AMS-02", "--particle", "helium", "--download"]);
    match cli.command {
        Command::Explore { experiment, particle, csv, download } => {
            assert_eq!(experiment, Experiment::Ams02);
            assert_eq!(particle, Particle::Helium);
            assert!(csv.is_none());
            assert!(download);
        }
        other => panic!("parsed {other:?}"),
    }
    assert!(Cli::try_parse_from(["cosmic-dose", "explore", "--experiment", "Ulysses", "--particle", "h"]).is_err());
}

#[tokio::test]
async fn test_offline_dose_runs() {
    run(parse(&["dose", "--offline", "--days", "30", "--shielding", "aluminum"])).await.unwrap();
}

#[tokio::test]
async fn test_invalid_shielding_is_reported() {
    let err = run(parse(&["dose", "--offline", "--shielding", "lead"])).await.unwrap_err();
    assert!(matches!(
        err,
        CliError::Dosimetry { error: DosimetryError::InvalidParameter { field: "shielding", .. } }
    ));
}

#[tokio::test]
async fn test_zero_day_mission_is_rejected() {
    let err = run(parse(&["dna", "--offline", "--days", "0"])).await.unwrap_err();
    assert!(matches!(err, CliError::Dosimetry { .. }));
}

#[tokio::test]
async fn test_unreachable_feed_is_not_an_error() {
    let url = unreachable_url().await;
    run(parse(&["--noaa-url", &url, "organ", "--sex", "female", "--organ", "thyroid"])).await.unwrap();
    run(parse(&["--noaa-url", &url, "kp"])).await.unwrap();
}

#[tokio::test]
async fn test_explicit_dose_commands() {
    run(parse(&["environment", "--total-dose", "0.9", "--latitude-deg", "45"])).await.unwrap();
    run(parse(&["flight", "--route", "Tokyo to San Francisco"])).await.unwrap();
    assert!(run(parse(&["flight", "--route", "Mars to Moon"])).await.is_err());
    assert!(run(parse(&["environment", "--total-dose", "1", "--latitude-deg", "120"])).await.is_err());
    run(parse(&["list"])).await.unwrap();
}

#[tokio::test]
async fn test_explore_writes_csv() {
    let url = serve_once(
        "200 OK",
        r#"{"datasets": [{"data": [{"e_kn": 3.0, "val": 1.5}, {"e_kn": 1.0, "val": 9.0}]}]}"#,
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spectrum.csv");
    let path_arg = path.to_str().unwrap();
    run(parse(&[
        "--crdb-url", &url, "explore", "--experiment", "pamela", "--particle", "proton", "--csv", path_arg,
    ]))
    .await
    .unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Energy (GeV/n),Flux\n1.0,9.0\n3.0,1.5\n");
}

async fn explore_served(body: &str) -> ExploreOutcome {
    let url = serve_once("200 OK", body).await;
    let client = Arc::new(HTTPClient::new(&url, DEFAULT_TIMEOUT).unwrap());
    let dataset = fetch_dataset(client, Experiment::Ace, Particle::Carbon).await;
    explore(&dataset, Experiment::Ace, Particle::Carbon, None).unwrap()
}

#[tokio::test]
async fn test_explore_without_datasets() {
    let outcome = explore_served(r#"{"datasets": []}"#).await;
    assert_eq!(outcome, ExploreOutcome::NoDatasets);
    assert_eq!(outcome.to_string(), "No datasets found for this selection.");
}

#[tokio::test]
async fn test_explore_datasets_without_valid_points() {
    let outcome = explore_served(
        r#"{"datasets": [{"data": [{"e_kn": 2.0, "val": null}, {"e_kn": null, "val": 0.3}]}]}"#,
    )
    .await;
    assert_eq!(outcome, ExploreOutcome::NoValidPoints);
    assert_eq!(outcome.to_string(), "No valid flux data available.");
}

#[tokio::test]
async fn test_explore_unreachable_database() {
    let url = unreachable_url().await;
    let client = Arc::new(HTTPClient::new(&url, DEFAULT_TIMEOUT).unwrap());
    let dataset = fetch_dataset(client, Experiment::Voyager, Particle::Helium).await;
    let outcome = explore(&dataset, Experiment::Voyager, Particle::Helium, None).unwrap();
    assert_eq!(outcome.to_string(), "Failed to retrieve data for Helium (He) from Voyager");
}
