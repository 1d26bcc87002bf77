use super::{DosimetryError, checked_dose, risk_percent, shielding::ShieldingMaterial};
use crate::flux::FluxReading;

/// Unshielded dose in mSv per day per unit of proton flux (protons/cm²/s/sr).
pub const BASE_DOSE_RATE: f64 = 0.000_05;

/// Mission duration and shielding chosen for one dose assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionParameters {
    duration_days: u32,
    shielding: ShieldingMaterial,
}

impl MissionParameters {
    /// # Errors
    /// `InvalidParameter` when `duration_days` is zero.
    pub fn new(duration_days: u32, shielding: ShieldingMaterial) -> Result<Self, DosimetryError> {
        if duration_days == 0 {
            return Err(DosimetryError::invalid("duration_days", duration_days));
        }
        Ok(Self { duration_days, shielding })
    }

    pub fn duration_days(&self) -> u32 { self.duration_days }
    pub fn shielding(&self) -> ShieldingMaterial { self.shielding }
}

/// Mission dose figures, all derived from a single flux reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseResult {
    /// Dose per day behind the chosen shielding, mSv.
    daily_dose: f64,
    /// Dose accumulated over the whole mission, mSv.
    total_dose: f64,
    /// Excess lifetime cancer risk, percent.
    risk_percent: f64,
}

impl DoseResult {
    pub fn daily_dose(&self) -> f64 { self.daily_dose }
    pub fn total_dose(&self) -> f64 { self.total_dose }
    pub fn risk_percent(&self) -> f64 { self.risk_percent }
}

/// Runs the mission dose chain `flux -> daily dose -> total dose -> risk`.
///
/// # Errors
/// `InvalidParameter` if the flux value is negative or not finite, or if flux and duration
/// are so large that the total dose overflows.
pub fn compute_dose(
    flux: &FluxReading,
    params: &MissionParameters,
) -> Result<DoseResult, DosimetryError> {
    let flux_value = *flux.value();
    if !flux_value.is_finite() || flux_value < 0.0 {
        return Err(DosimetryError::invalid("flux", flux_value));
    }
    let daily_dose = flux_value * BASE_DOSE_RATE * params.shielding.factor();
    let total_dose = checked_dose("total_dose", daily_dose * f64::from(params.duration_days))?;
    Ok(DoseResult { daily_dose, total_dose, risk_percent: risk_percent(total_dose) })
}
