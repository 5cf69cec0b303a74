//! # Steel Materials
//!
//! Steel grades and material properties for beam verification.
//!
//! Stress values are in kN/cm² (1 kN/cm² = 10 MPa). The elastic modulus is
//! E = 20 000 kN/cm² for all structural steels per NBR 8800.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::material::{Material, SteelGrade};
//!
//! let mat = Material::from_grade(SteelGrade::Mr250);
//! assert_eq!(mat.fy_kn_cm2, 25.0);
//! assert_eq!(mat.e_kn_cm2, 20_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Elastic modulus of structural steel (kN/cm²) per NBR 8800
pub const STEEL_E_KN_CM2: f64 = 20_000.0;

/// Common structural steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A36 / MR250 equivalent (fy = 250 MPa)
    Mr250,
    /// AR350 (fy = 350 MPa)
    Ar350,
    /// AR415 (fy = 415 MPa)
    Ar415,
    /// ASTM A572 Grade 50 (fy = 345 MPa)
    A572Gr50,
}

impl SteelGrade {
    /// All grades for iteration / menus
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Mr250,
        SteelGrade::Ar350,
        SteelGrade::Ar415,
        SteelGrade::A572Gr50,
    ];

    /// Yield strength fy (kN/cm²)
    pub fn fy_kn_cm2(&self) -> f64 {
        match self {
            SteelGrade::Mr250 => 25.0,
            SteelGrade::Ar350 => 35.0,
            SteelGrade::Ar415 => 41.5,
            SteelGrade::A572Gr50 => 34.5,
        }
    }

    /// Ultimate strength fu (kN/cm²)
    pub fn fu_kn_cm2(&self) -> f64 {
        match self {
            SteelGrade::Mr250 => 40.0,
            SteelGrade::Ar350 => 45.0,
            SteelGrade::Ar415 => 52.0,
            SteelGrade::A572Gr50 => 45.0,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Mr250 => "MR250 (A36)",
            SteelGrade::Ar350 => "AR350",
            SteelGrade::Ar415 => "AR415",
            SteelGrade::A572Gr50 => "A572 Gr.50",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Material properties consumed by the verification engine.
///
/// The resistance factor γ_a1 is **not** part of the material; it lives in
/// [`crate::factors::DesignFactors`] and is passed explicitly alongside the
/// material into every computation.
///
/// ## JSON Example
///
/// ```json
/// { "name": "A572 Gr.50", "fy_kn_cm2": 34.5, "e_kn_cm2": 20000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name (grade label or "custom")
    pub name: String,

    /// Yield strength fy (kN/cm²)
    pub fy_kn_cm2: f64,

    /// Elastic modulus E (kN/cm²)
    pub e_kn_cm2: f64,
}

impl Material {
    /// Material for a named steel grade
    pub fn from_grade(grade: SteelGrade) -> Self {
        Material {
            name: grade.display_name().to_string(),
            fy_kn_cm2: grade.fy_kn_cm2(),
            e_kn_cm2: STEEL_E_KN_CM2,
        }
    }

    /// Custom material with explicit fy and E
    pub fn custom(fy_kn_cm2: f64, e_kn_cm2: f64) -> Self {
        Material {
            name: "custom".to_string(),
            fy_kn_cm2,
            e_kn_cm2,
        }
    }

    /// Validate material properties.
    pub fn validate(&self) -> CheckResult<()> {
        if !self.fy_kn_cm2.is_finite() || self.fy_kn_cm2 <= 0.0 {
            return Err(CheckError::invalid_input(
                "fy_kn_cm2",
                self.fy_kn_cm2.to_string(),
                "Yield strength must be positive",
            ));
        }
        if !self.e_kn_cm2.is_finite() || self.e_kn_cm2 <= 0.0 {
            return Err(CheckError::invalid_input(
                "e_kn_cm2",
                self.e_kn_cm2.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        Ok(())
    }

    /// √(E/fy), the base of every slenderness limit
    pub fn slenderness_base(&self) -> f64 {
        (self.e_kn_cm2 / self.fy_kn_cm2).sqrt()
    }
}
