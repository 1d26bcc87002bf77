//! Upstream data sources and the fallback policy wrapped around them.
//!
//! Every source implements [`ReadingSource`]. Callers never talk to a source directly but go
//! through a [`FallbackProvider`], which always hands back a [`Reading`] tagged with its
//! [`Provenance`]: live data when the fetch worked, the configured fallback otherwise.

mod dataset;
mod export;
mod kp;
mod proton;
mod provider;
mod reading;

pub use dataset::{
    CrdbDatasetSource, Dataset, Experiment, FluxPoint, Particle, Spectrum, fetch_dataset,
};
pub use export::{ExportError, default_file_name, export_csv, write_csv};
pub use kp::{FALLBACK_KP, KpIndex, KpIndexSource, StormLevel, kp_provider};
pub use proton::{DEFAULT_ENERGY_CHANNEL, FALLBACK_FLUX, ProtonFluxSource, flux_provider};
pub use provider::{FallbackProvider, FetchError, ReadingSource};
pub use reading::{FluxReading, Provenance, Reading};

#[cfg(test)]
mod tests;
