use super::request_common::HTTPRequestType;
use crate::http_handler::http_response::proton_flux::ProtonFluxResponse;

/// Request type for the GOES primary integral proton flux feed (last six hours, 5-minute cadence).
#[derive(Debug)]
pub struct ProtonFluxRequest {}

impl HTTPRequestType for ProtonFluxRequest {
    /// Type of the expected response.
    type Response = ProtonFluxResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/json/goes/primary/integral-protons-6-hour.json" }
}
