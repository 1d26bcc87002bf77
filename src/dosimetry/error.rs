use std::str::FromStr;
use strum_macros::Display;

/// Contract violations of the dose pipelines. These are never silently defaulted.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum DosimetryError {
    #[strum(to_string = "invalid parameter `{field}`: {value}")]
    InvalidParameter { field: &'static str, value: String },
}

impl std::error::Error for DosimetryError {}

impl DosimetryError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        DosimetryError::InvalidParameter { field, value: value.to_string() }
    }

    /// Parses one of the lookup-table enums, mapping unknown names to `InvalidParameter`.
    pub(crate) fn parse_variant<T: FromStr>(field: &'static str, raw: &str) -> Result<T, Self> {
        raw.trim().parse::<T>().map_err(|_| DosimetryError::invalid(field, raw))
    }
}
