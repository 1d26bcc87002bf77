use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Top level error for everything that can go wrong while talking to an upstream API.
#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "HTTP client could not be created: {reason}")]
    ClientSetup { reason: String },
    #[strum(to_string = "{error}")]
    HTTPResponseError { error: ResponseError },
}

impl std::error::Error for HTTPError {}

impl From<ResponseError> for HTTPError {
    fn from(error: ResponseError) -> Self { HTTPError::HTTPResponseError { error } }
}
