//! # Design Code Factors
//!
//! Resistance factor and code coefficients for steel beam design per
//! NBR 8800:2008.
//!
//! ## Overview
//!
//! Nominal capacities are divided by the resistance factor γ_a1 to obtain
//! design capacities:
//!
//! ```text
//! Mrd = Mn / γ_a1
//! Vrd = Vn / γ_a1
//! ```
//!
//! The slenderness limits that separate the plastic, inelastic and elastic
//! regimes are coefficients times √(E/fy) (times √k_v for web shear):
//!
//! | Check | λ         | λ_p            | λ_r                    |
//! |-------|-----------|----------------|------------------------|
//! | FLT   | Lb/ry     | 1.76·√(E/fy)   | Annex G nested formula |
//! | FLM   | bf/(2·tf) | 0.38·√(E/fy)   | 0.83·√(E/(0.7·fy))     |
//! | FLA   | h/tw      | 3.76·√(E/fy)   | 5.70·√(E/fy)           |
//! | Shear | h/tw      | 1.10·√(kv·E/fy)| 1.37·√(kv·E/fy)        |
//!
//! All coefficients live in [`DesignFactors`] so alternate code editions can
//! be tested by passing a different value; nothing reads ambient state.
//!
//! ## Reference
//!
//! NBR 8800:2008, Section 5.4 and Annex G

use serde::{Deserialize, Serialize};

// ============================================================================
// NBR Code Section References
// ============================================================================

/// NBR 8800:2008 section references for the beam design checks.
///
/// These constants provide traceable references for report narration.
pub mod nbr_ref {
    /// Design resistance of flexural members
    pub const BENDING: &str = "NBR 8800 5.4.2";
    /// Lateral-torsional buckling (doubly symmetric I sections)
    pub const FLT: &str = "NBR 8800 Annex G.2";
    /// Local flange buckling
    pub const FLM: &str = "NBR 8800 Annex G.1";
    /// Local web buckling
    pub const FLA: &str = "NBR 8800 Annex G.1";
    /// Shear resistance of webs
    pub const SHEAR: &str = "NBR 8800 5.4.3";
    /// Moment gradient factor Cb
    pub const CB: &str = "NBR 8800 5.4.2.3";
    /// Serviceability deflection limits
    pub const DEFLECTION: &str = "NBR 8800 Annex C";
    /// Resistance factor for steel yielding/buckling
    pub const GAMMA_A1: &str = "NBR 8800 4.8.2";
}

/// Code coefficients and the resistance factor, passed explicitly into every
/// computation.
///
/// `DesignFactors::default()` carries the NBR 8800:2008 values. Construct a
/// modified value to evaluate an alternate code edition; the struct is plain
/// data and every field is public.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gamma_a1": 1.1,
///   "residual_stress_ratio": 0.3,
///   "flt_lambda_p_coeff": 1.76,
///   "flm_lambda_p_coeff": 0.38,
///   "flm_lambda_r_coeff": 0.83,
///   "flm_elastic_coeff": 0.69,
///   "fla_lambda_p_coeff": 3.76,
///   "fla_lambda_r_coeff": 5.7,
///   "shear_plastic_coeff": 0.6,
///   "shear_lambda_p_coeff": 1.1,
///   "shear_lambda_r_coeff": 1.37,
///   "shear_elastic_coeff": 1.24,
///   "kv_unstiffened": 5.0,
///   "cb_max": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFactors {
    /// Resistance factor γ_a1 dividing nominal capacities (> 1)
    pub gamma_a1: f64,

    /// Residual stress as a fraction of fy (0.3 per NBR 8800)
    ///
    /// Enters Mr = (1 - ratio)·fy·Wx for FLT and FLM.
    pub residual_stress_ratio: f64,

    // === Lateral-torsional buckling (FLT) ===
    /// λ_p coefficient: λ_p = coeff·√(E/fy)
    pub flt_lambda_p_coeff: f64,

    // === Local flange buckling (FLM) ===
    /// λ_p coefficient: λ_p = coeff·√(E/fy)
    pub flm_lambda_p_coeff: f64,
    /// λ_r coefficient: λ_r = coeff·√(E/(0.7·fy)) for rolled sections
    pub flm_lambda_r_coeff: f64,
    /// Elastic critical coefficient: Mcr = coeff·E·Wx/λ²
    pub flm_elastic_coeff: f64,

    // === Local web buckling (FLA) ===
    /// λ_p coefficient: λ_p = coeff·√(E/fy)
    pub fla_lambda_p_coeff: f64,
    /// λ_r coefficient: λ_r = coeff·√(E/fy)
    pub fla_lambda_r_coeff: f64,

    // === Web shear ===
    /// Plastic shear coefficient: Vpl = coeff·d·tw·fy
    pub shear_plastic_coeff: f64,
    /// λ_p coefficient: λ_p = coeff·√(kv·E/fy)
    pub shear_lambda_p_coeff: f64,
    /// λ_r coefficient: λ_r = coeff·√(kv·E/fy)
    pub shear_lambda_r_coeff: f64,
    /// Elastic regime coefficient: Vrd = coeff·(λ_p/λ)²·Vpl/γ_a1
    pub shear_elastic_coeff: f64,
    /// Web buckling coefficient without transverse stiffeners
    pub kv_unstiffened: f64,

    // === Moment gradient ===
    /// Upper bound on the moment gradient factor Cb
    pub cb_max: f64,
}

impl Default for DesignFactors {
    /// NBR 8800:2008 values
    fn default() -> Self {
        DesignFactors {
            gamma_a1: 1.10,
            residual_stress_ratio: 0.30,
            flt_lambda_p_coeff: 1.76,
            flm_lambda_p_coeff: 0.38,
            flm_lambda_r_coeff: 0.83,
            flm_elastic_coeff: 0.69,
            fla_lambda_p_coeff: 3.76,
            fla_lambda_r_coeff: 5.70,
            shear_plastic_coeff: 0.60,
            shear_lambda_p_coeff: 1.10,
            shear_lambda_r_coeff: 1.37,
            shear_elastic_coeff: 1.24,
            kv_unstiffened: 5.0,
            cb_max: 3.0,
        }
    }
}

impl DesignFactors {
    /// Validate that the factor set is usable.
    ///
    /// γ_a1 is code-fixed at a value greater than one; a factor set that
    /// amplifies capacities instead of reducing them is rejected.
    pub fn validate(&self) -> crate::errors::CheckResult<()> {
        if self.gamma_a1 <= 1.0 {
            return Err(crate::errors::CheckError::invalid_input(
                "gamma_a1",
                self.gamma_a1.to_string(),
                "Resistance factor must be greater than 1.0",
            ));
        }
        if !(0.0..1.0).contains(&self.residual_stress_ratio) {
            return Err(crate::errors::CheckError::invalid_input(
                "residual_stress_ratio",
                self.residual_stress_ratio.to_string(),
                "Residual stress ratio must be in [0, 1)",
            ));
        }
        Ok(())
    }
}
