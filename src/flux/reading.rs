use chrono::{DateTime, Utc};
use strum_macros::Display;

/// Where a reading came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum Provenance {
    #[strum(to_string = "live")]
    Live,
    #[strum(to_string = "fallback")]
    Fallback,
}

/// An immutable value obtained from an upstream source, or substituted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading<T> {
    value: T,
    provenance: Provenance,
    obtained_at: DateTime<Utc>,
}

/// Proton flux in protons/cm²/s/sr.
pub type FluxReading = Reading<f64>;

impl<T> Reading<T> {
    pub fn live(value: T) -> Self { Self::new(value, Provenance::Live) }
    pub fn fallback(value: T) -> Self { Self::new(value, Provenance::Fallback) }

    fn new(value: T, provenance: Provenance) -> Self {
        Self { value, provenance, obtained_at: Utc::now() }
    }

    pub fn value(&self) -> &T { &self.value }
    pub fn into_value(self) -> T { self.value }
    pub fn provenance(&self) -> Provenance { self.provenance }
    pub fn is_fallback(&self) -> bool { self.provenance == Provenance::Fallback }
    pub fn obtained_at(&self) -> DateTime<Utc> { self.obtained_at }
}
