use super::{DosimetryError, checked_dose};
use strum_macros::{Display, EnumIter, EnumString};

/// Altitude over which the cosmic-ray dose rate doubles, km.
pub const ALTITUDE_DOUBLING_KM: f64 = 2.0;
/// Geomagnetic latitude at which the latitude factor reaches 2, degrees.
pub const POLAR_LATITUDE_DEG: f64 = 90.0;
/// Dose rate at cruising altitude, mSv per flight hour.
pub const ALT_DOSE_PER_HOUR: f64 = 0.005;

/// Location of the exposed person: altitude above sea level and geomagnetic latitude magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalFactors {
    altitude_km: f64,
    latitude_deg: f64,
}

impl EnvironmentalFactors {
    /// # Errors
    /// `InvalidParameter` if the altitude is negative, not finite or so high that the altitude
    /// factor overflows, or the latitude lies outside `0..=90`.
    pub fn new(altitude_km: f64, latitude_deg: f64) -> Result<Self, DosimetryError> {
        if !altitude_km.is_finite()
            || altitude_km < 0.0
            || !2f64.powf(altitude_km / ALTITUDE_DOUBLING_KM).is_finite()
        {
            return Err(DosimetryError::invalid("altitude_km", altitude_km));
        }
        if !(0.0..=POLAR_LATITUDE_DEG).contains(&latitude_deg) {
            return Err(DosimetryError::invalid("latitude_deg", latitude_deg));
        }
        Ok(Self { altitude_km, latitude_deg })
    }

    pub fn altitude_km(&self) -> f64 { self.altitude_km }
    pub fn latitude_deg(&self) -> f64 { self.latitude_deg }

    /// Doubles every [`ALTITUDE_DOUBLING_KM`].
    pub fn altitude_factor(&self) -> f64 { 2f64.powf(self.altitude_km / ALTITUDE_DOUBLING_KM) }

    /// Grows linearly from 1 at the equator to 2 at the poles.
    pub fn latitude_factor(&self) -> f64 { 1.0 + self.latitude_deg / POLAR_LATITUDE_DEG }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalAdjustment {
    altitude_factor: f64,
    latitude_factor: f64,
    adjusted_dose: f64,
}

impl EnvironmentalAdjustment {
    pub fn altitude_factor(&self) -> f64 { self.altitude_factor }
    pub fn latitude_factor(&self) -> f64 { self.latitude_factor }
    pub fn adjusted_dose(&self) -> f64 { self.adjusted_dose }
}

/// Scales a total dose by altitude and latitude.
///
/// # Errors
/// `InvalidParameter` for a negative or non-finite dose, factors outside their domain, or an
/// adjusted dose that overflows.
pub fn adjust_for_environment(
    total_dose: f64,
    altitude_km: f64,
    latitude_deg: f64,
) -> Result<EnvironmentalAdjustment, DosimetryError> {
    let total_dose = checked_dose("total_dose", total_dose)?;
    let factors = EnvironmentalFactors::new(altitude_km, latitude_deg)?;
    let altitude_factor = factors.altitude_factor();
    let latitude_factor = factors.latitude_factor();
    let adjusted_dose =
        checked_dose("adjusted_dose", total_dose * altitude_factor * latitude_factor)?;
    Ok(EnvironmentalAdjustment { altitude_factor, latitude_factor, adjusted_dose })
}

/// Long-haul routes with a tabulated block time.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum FlightRoute {
    #[strum(to_string = "Tokyo to San Francisco", serialize = "NRT-SFO")]
    TokyoSanFrancisco,
    #[strum(to_string = "New York to London", serialize = "JFK-LHR")]
    NewYorkLondon,
    #[strum(to_string = "Los Angeles to Sydney", serialize = "LAX-SYD")]
    LosAngelesSydney,
    #[strum(to_string = "Frankfurt to Singapore", serialize = "FRA-SIN")]
    FrankfurtSingapore,
    #[strum(to_string = "Dubai to Houston", serialize = "DXB-IAH")]
    DubaiHouston,
    #[strum(to_string = "Paris to Johannesburg", serialize = "CDG-JNB")]
    ParisJohannesburg,
}

impl FlightRoute {
    pub const fn hours(self) -> f64 {
        match self {
            FlightRoute::NewYorkLondon => 7.0,
            FlightRoute::TokyoSanFrancisco | FlightRoute::ParisJohannesburg => 11.0,
            FlightRoute::FrankfurtSingapore => 12.0,
            FlightRoute::LosAngelesSydney => 15.0,
            FlightRoute::DubaiHouston => 16.0,
        }
    }

    /// # Errors
    /// `InvalidParameter` for routes without a tabulated duration.
    pub fn parse(raw: &str) -> Result<Self, DosimetryError> {
        DosimetryError::parse_variant("flight_route", raw)
    }
}

/// Dose received on one flight of the given route, mSv.
pub fn compute_flight_dose(route: FlightRoute) -> f64 { route.hours() * ALT_DOSE_PER_HOUR }
