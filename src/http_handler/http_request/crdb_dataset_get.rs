use super::request_common::HTTPRequestType;
use crate::http_handler::http_response::crdb_dataset::CrdbDatasetResponse;

/// Request type for the CRDB `/api_v1/dataset` endpoint.
#[derive(Debug)]
pub struct CrdbDatasetRequest {
    /// Experiment name as CRDB spells it (e.g. `AMS-02`).
    pub experiment: &'static str,
    /// Nucleus or particle code (e.g. `He`).
    pub nucleus: &'static str,
}

impl HTTPRequestType for CrdbDatasetRequest {
    type Response = CrdbDatasetResponse;
    fn endpoint(&self) -> &'static str { "/api_v1/dataset" }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("exp", self.experiment.to_string()), ("nuc", self.nucleus.to_string())]
    }
}
