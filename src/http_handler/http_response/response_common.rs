use strum_macros::Display;

/// Classifies an HTTP status into `Ok` or the matching `ResponseError`.
///
/// # Errors
/// `InternalServer` for 5xx, `BadRequest` for 4xx and `Unknown` for anything else that is not
/// a success code.
pub(crate) fn unwrap_return_code(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status.is_server_error() {
        Err(ResponseError::InternalServer { status: status.as_u16() })
    } else if status.is_client_error() {
        Err(ResponseError::BadRequest { status: status.as_u16() })
    } else {
        Err(ResponseError::Unknown { reason: format!("unexpected status {status}") })
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ResponseError {
    #[strum(to_string = "server error (status {status})")]
    InternalServer { status: u16 },
    #[strum(to_string = "request rejected (status {status})")]
    BadRequest { status: u16 },
    #[strum(to_string = "no connection to upstream")]
    NoConnection,
    #[strum(to_string = "request timed out")]
    Timeout,
    #[strum(to_string = "malformed response body: {reason}")]
    Malformed { reason: String },
    #[strum(to_string = "unknown failure: {reason}")]
    Unknown { reason: String },
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::Malformed { reason: value.to_string() }
        } else if let Some(status) = value.status() {
            ResponseError::BadRequest { status: status.as_u16() }
        } else {
            ResponseError::Unknown { reason: value.to_string() }
        }
    }
}
