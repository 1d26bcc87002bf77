/// A typed `GET` request against one of the upstream JSON APIs.
///
/// Implementors name the endpoint relative to the client's base URL, optionally add query
/// parameters and declare the body type the endpoint answers with.
pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: for<'de> serde::Deserialize<'de>;
    /// Path appended to the client's base URL.
    fn endpoint(&self) -> &str;
    /// Query string pairs, empty by default.
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
}
