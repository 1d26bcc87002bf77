use super::{DosimetryError, checked_dose, risk_percent};
use strum_macros::{Display, EnumIter, EnumString};

/// Cell lines with tabulated radiation response.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum CellType {
    #[strum(to_string = "Skin Cell", serialize = "skin")]
    Skin,
    #[strum(to_string = "Blood Cell", serialize = "blood", serialize = "lymphocyte")]
    Blood,
    #[strum(to_string = "Neuron", serialize = "neuron")]
    Neuron,
    #[strum(to_string = "Stem Cell", serialize = "stem")]
    Stem,
    #[strum(to_string = "Epithelial Cell", serialize = "epithelial")]
    Epithelial,
}

/// Induced double-strand breaks per gray and the fraction the cell repairs correctly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellProfile {
    dsb_per_gray: f64,
    repair_efficiency: f64,
}

impl CellProfile {
    pub fn dsb_per_gray(&self) -> f64 { self.dsb_per_gray }
    pub fn repair_efficiency(&self) -> f64 { self.repair_efficiency }
}

impl CellType {
    pub const fn profile(self) -> CellProfile {
        let (dsb_per_gray, repair_efficiency) = match self {
            CellType::Skin => (1000.0, 0.95),
            CellType::Blood => (1200.0, 0.85),
            CellType::Neuron => (800.0, 0.90),
            CellType::Stem => (1500.0, 0.80),
            CellType::Epithelial => (1100.0, 0.92),
        };
        CellProfile { dsb_per_gray, repair_efficiency }
    }

    /// # Errors
    /// `InvalidParameter` for unknown cell names.
    pub fn parse(raw: &str) -> Result<Self, DosimetryError> {
        DosimetryError::parse_variant("cell_type", raw)
    }
}

/// DNA damage outcome for one cell type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DnaDamage {
    dsb: f64,
    repaired: f64,
    remaining: f64,
}

impl DnaDamage {
    /// Double-strand breaks induced.
    pub fn dsb(&self) -> f64 { self.dsb }
    /// Breaks repaired correctly.
    pub fn repaired(&self) -> f64 { self.repaired }
    /// Breaks left unrepaired or misrepaired.
    pub fn remaining(&self) -> f64 { self.remaining }
}

/// Derives DSB count and repair outcome from a total dose in mSv.
///
/// # Errors
/// `InvalidParameter` if `total_dose` is negative or not finite, or too large to count breaks.
pub fn compute_dna_damage(total_dose: f64, cell_type: CellType) -> Result<DnaDamage, DosimetryError> {
    let total_dose = checked_dose("total_dose", total_dose)?;
    let profile = cell_type.profile();
    let dsb = checked_dose("total_dose", total_dose * profile.dsb_per_gray / 1000.0)?;
    let repaired = dsb * profile.repair_efficiency;
    Ok(DnaDamage { dsb, repaired, remaining: dsb - repaired })
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum AgeGroup {
    #[strum(to_string = "Child (0-17)", serialize = "child")]
    Child,
    #[strum(to_string = "Young Adult (18-30)", serialize = "young-adult", serialize = "young")]
    YoungAdult,
    #[strum(to_string = "Adult (31-60)", serialize = "adult")]
    Adult,
    #[strum(to_string = "Senior (60+)", serialize = "senior")]
    Senior,
}

impl AgeGroup {
    /// Relative radiosensitivity, adults being the reference.
    pub const fn factor(self) -> f64 {
        match self {
            AgeGroup::Child => 1.5,
            AgeGroup::YoungAdult => 1.2,
            AgeGroup::Adult => 1.0,
            AgeGroup::Senior => 0.8,
        }
    }

    /// # Errors
    /// `InvalidParameter` for unknown age groups.
    pub fn parse(raw: &str) -> Result<Self, DosimetryError> {
        DosimetryError::parse_variant("age_group", raw)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Sex {
    #[strum(to_string = "Male", serialize = "m")]
    Male,
    #[strum(to_string = "Female", serialize = "f")]
    Female,
}

impl Sex {
    pub const fn factor(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 1.2,
        }
    }

    /// # Errors
    /// `InvalidParameter` for anything but male/female.
    pub fn parse(raw: &str) -> Result<Self, DosimetryError> {
        DosimetryError::parse_variant("sex", raw)
    }
}

/// Organs with an ICRP-103 tissue weighting factor.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Organ {
    Lungs,
    Stomach,
    Colon,
    #[strum(to_string = "Bone Marrow", serialize = "bone-marrow", serialize = "marrow")]
    BoneMarrow,
    Breast,
    Thyroid,
    Liver,
    Bladder,
    Skin,
    Brain,
}

impl Organ {
    pub const fn weight(self) -> f64 {
        match self {
            Organ::Lungs | Organ::Stomach | Organ::Colon | Organ::BoneMarrow | Organ::Breast => 0.12,
            Organ::Thyroid | Organ::Liver | Organ::Bladder => 0.04,
            Organ::Skin | Organ::Brain => 0.01,
        }
    }

    /// # Errors
    /// `InvalidParameter` for organs without a tissue weight.
    pub fn parse(raw: &str) -> Result<Self, DosimetryError> {
        DosimetryError::parse_variant("organ", raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrganRisk {
    /// Organ weighted share of the total dose, mSv.
    effective_dose: f64,
    /// Excess cancer risk for the organ, percent.
    organ_risk: f64,
}

impl OrganRisk {
    pub fn effective_dose(&self) -> f64 { self.effective_dose }
    pub fn organ_risk(&self) -> f64 { self.organ_risk }
}

/// Organ weighted effective dose and the age/sex adjusted risk it implies.
///
/// # Errors
/// `InvalidParameter` if `total_dose` is negative or not finite.
pub fn compute_organ_risk(
    total_dose: f64,
    age: AgeGroup,
    sex: Sex,
    organ: Organ,
) -> Result<OrganRisk, DosimetryError> {
    let total_dose = checked_dose("total_dose", total_dose)?;
    let effective_dose = total_dose * organ.weight();
    let organ_risk = risk_percent(effective_dose) * sex.factor() * age.factor();
    Ok(OrganRisk { effective_dose, organ_risk })
}
