//! Closed-form dose and risk formulas.
//!
//! Three independent pipelines share nothing but the total mission dose they take as input:
//! - [`dose`]: flux reading and mission parameters to daily dose, total dose and cancer risk
//! - [`biology`]: DNA double-strand breaks per cell type and organ weighted, age/sex adjusted risk
//! - [`environment`]: altitude and latitude scaling plus per-route flight dose
//!
//! Every lookup table is an exhaustive `match` over its enum, so a missing entry is a compile
//! error rather than a runtime miss.

pub mod biology;
pub mod dose;
pub mod environment;
mod error;
pub mod shielding;

pub use error::DosimetryError;

/// Excess lifetime cancer risk per sievert, in percent.
pub const RISK_PERCENT_PER_SIEVERT: f64 = 5.0;

/// Converts an effective dose in mSv into a lifetime cancer risk in percent.
pub(crate) fn risk_percent(dose_msv: f64) -> f64 { (dose_msv / 1000.0) * RISK_PERCENT_PER_SIEVERT }

/// Rejects dose inputs that are not finite or below zero.
pub(crate) fn checked_dose(field: &'static str, dose_msv: f64) -> Result<f64, DosimetryError> {
    if dose_msv.is_finite() && dose_msv >= 0.0 {
        Ok(dose_msv)
    } else {
        Err(DosimetryError::invalid(field, dose_msv))
    }
}
