use super::request_common::HTTPRequestType;
use crate::http_handler::http_response::kp_index::KpIndexResponse;

/// Request type for the one-minute estimated planetary K index feed.
#[derive(Debug)]
pub struct KpIndexRequest {}

impl HTTPRequestType for KpIndexRequest {
    type Response = KpIndexResponse;
    fn endpoint(&self) -> &'static str { "/json/planetary_k_index_1m.json" }
}
