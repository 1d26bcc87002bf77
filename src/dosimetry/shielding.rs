use super::DosimetryError;
use strum_macros::{Display, EnumIter, EnumString};

/// Hull shielding options and their multiplicative dose attenuation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ShieldingMaterial {
    #[strum(to_string = "None", serialize = "unshielded")]
    None,
    #[strum(to_string = "Aluminum", serialize = "aluminium", serialize = "al")]
    Aluminum,
    #[strum(to_string = "Polyethylene", serialize = "pe")]
    Polyethylene,
}

impl ShieldingMaterial {
    pub const fn factor(self) -> f64 {
        match self {
            ShieldingMaterial::None => 1.0,
            ShieldingMaterial::Aluminum => 0.7,
            ShieldingMaterial::Polyethylene => 0.5,
        }
    }

    /// # Errors
    /// `InvalidParameter` for names outside the declared materials.
    pub fn parse(raw: &str) -> Result<Self, DosimetryError> {
        DosimetryError::parse_variant("shielding", raw)
    }
}
