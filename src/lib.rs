//! Cosmic ray flux explorer and radiation dose calculator.
//!
//! Module structure:
//! - `http_handler/` - typed requests against the space weather feeds and the cosmic ray database
//! - `flux/` - data sources with fallback and provenance, spectra, CSV export
//! - `dosimetry/` - dose, biological impact and environmental adjustment formulas
//! - `cli/` - command line front end

mod logger;

pub mod cli;
pub mod dosimetry;
pub mod flux;
pub mod http_handler;

#[cfg(test)]
mod test_util;
