//! Command line front end: argument parsing, configuration and result printing.

mod commands;

use crate::dosimetry::DosimetryError;
use crate::flux::{ExportError, Experiment, Particle};
use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use strum_macros::Display;

pub use commands::run;

const DEFAULT_NOAA_URL: &str = "https://services.swpc.noaa.gov";
const DEFAULT_CRDB_URL: &str = "https://lpsc.in2p3.fr/crdb";

/// Cosmic ray flux explorer and radiation dose calculator.
#[derive(Parser, Debug)]
#[command(name = "cosmic-dose", version, about)]
pub struct Cli {
    /// Base URL of the space weather JSON feeds.
    #[arg(long, global = true, env = "NOAA_BASE_URL", default_value = DEFAULT_NOAA_URL)]
    noaa_url: String,
    /// Base URL of the cosmic ray database.
    #[arg(long, global = true, env = "CRDB_BASE_URL", default_value = DEFAULT_CRDB_URL)]
    crdb_url: String,
    /// Per-request timeout in seconds; an expired request falls back to default values.
    #[arg(long, global = true, env = "COSMO_HTTP_TIMEOUT_SECS", default_value_t = 5)]
    timeout_secs: u64,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

    fn noaa_client(&self) -> Result<Arc<HTTPClient>, HTTPError> {
        Ok(Arc::new(HTTPClient::new(&self.noaa_url, self.timeout())?))
    }

    fn crdb_client(&self) -> Result<Arc<HTTPClient>, HTTPError> {
        Ok(Arc::new(HTTPClient::new(&self.crdb_url, self.timeout())?))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mission dose and cancer risk from the current proton flux.
    Dose {
        #[command(flatten)]
        mission: MissionArgs,
    },
    /// DNA double-strand breaks and repair outcome for a cell type.
    Dna {
        #[command(flatten)]
        dose: DoseInput,
        /// Cell type, e.g. "Skin Cell", "Neuron".
        #[arg(long, default_value = "Skin Cell")]
        cell: String,
    },
    /// Organ weighted effective dose and age/sex adjusted risk.
    Organ {
        #[command(flatten)]
        dose: DoseInput,
        /// Age group: child, young-adult, adult, senior.
        #[arg(long, default_value = "adult")]
        age: String,
        /// male or female.
        #[arg(long, default_value = "male")]
        sex: String,
        /// Organ, e.g. lungs, "bone marrow", thyroid.
        #[arg(long, default_value = "lungs")]
        organ: String,
    },
    /// Scale a dose by altitude and geomagnetic latitude.
    Environment {
        #[command(flatten)]
        dose: DoseInput,
        #[arg(long, default_value_t = 0.0)]
        altitude_km: f64,
        /// Magnitude of the geomagnetic latitude, 0 to 90.
        #[arg(long, default_value_t = 0.0)]
        latitude_deg: f64,
    },
    /// Dose received on a long-haul flight.
    Flight {
        /// Route name, e.g. "Tokyo to San Francisco" or "NRT-SFO".
        #[arg(long)]
        route: String,
    },
    /// Current planetary K index and storm level.
    Kp {
        /// Skip the network and report the fallback value.
        #[arg(long)]
        offline: bool,
    },
    /// Fetch a flux-vs-energy spectrum from the cosmic ray database.
    Explore {
        /// Voyager, AMS-02, ACE, PAMELA or SOHO.
        #[arg(long)]
        experiment: Experiment,
        /// proton, helium, carbon or electron.
        #[arg(long)]
        particle: Particle,
        /// Write the spectrum as CSV to this path.
        #[arg(long, conflicts_with = "download")]
        csv: Option<PathBuf>,
        /// Write the spectrum as CSV using the default file name.
        #[arg(long)]
        download: bool,
    },
    /// Print every lookup table.
    List,
}

#[derive(Args, Debug)]
struct MissionArgs {
    /// Mission duration in days.
    #[arg(long, default_value_t = 180)]
    days: u32,
    /// Shielding material: none, aluminum, polyethylene.
    #[arg(long, default_value = "none")]
    shielding: String,
    /// GOES integral proton channel to read.
    #[arg(long, default_value = crate::flux::DEFAULT_ENERGY_CHANNEL)]
    energy_channel: String,
    /// Skip the network and use the fallback flux.
    #[arg(long)]
    offline: bool,
}

/// Either an explicit total dose or the mission to derive it from.
#[derive(Args, Debug)]
struct DoseInput {
    /// Total dose in mSv. Derived from the mission parameters if omitted.
    #[arg(long)]
    total_dose: Option<f64>,
    #[command(flatten)]
    mission: MissionArgs,
}

#[derive(Debug, Display)]
pub enum CliError {
    #[strum(to_string = "{error}")]
    Dosimetry { error: DosimetryError },
    #[strum(to_string = "{error}")]
    Http { error: HTTPError },
    #[strum(to_string = "{error}")]
    Export { error: ExportError },
}

impl std::error::Error for CliError {}

impl From<DosimetryError> for CliError {
    fn from(error: DosimetryError) -> Self { CliError::Dosimetry { error } }
}

impl From<HTTPError> for CliError {
    fn from(error: HTTPError) -> Self { CliError::Http { error } }
}

impl From<ExportError> for CliError {
    fn from(error: ExportError) -> Self { CliError::Export { error } }
}

#[cfg(test)]
mod tests;
