//! # Shear Capacity
//!
//! Design shear capacity of I-section webs per NBR 8800 5.4.3, with the
//! same three-regime classifier as the flexural checks:
//!
//! ```text
//! λ ≤ λ_p        plastic      Vrd = Vpl/γ_a1
//! λ_p < λ ≤ λ_r  inelastic    Vrd = (λ_p/λ)·Vpl/γ_a1
//! λ > λ_r        elastic      Vrd = 1.24·(λ_p/λ)²·Vpl/γ_a1
//! ```
//!
//! with λ = h/tw, Vpl = 0.60·d·tw·fy and λ_p, λ_r proportional to
//! √(kv·E/fy). Transverse stiffeners at spacing `a` raise the web buckling
//! coefficient to kv = 5 + 5/(a/h)², but only when a/h < 3 **and**
//! a/h < (260/λ)²; otherwise they are deemed ineffective and kv reverts to
//! the unstiffened value.

use serde::{Deserialize, Serialize};

use crate::factors::DesignFactors;
use crate::flexure::Regime;
use crate::material::Material;
use crate::section::SectionProperties;

/// Design shear capacity of the web.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearCapacity {
    /// Design shear capacity Vrd (kN)
    pub vrd_kn: f64,

    /// Plastic shear Vpl = 0.60·d·tw·fy (kN)
    pub vpl_kn: f64,

    /// Web buckling coefficient kv actually used
    pub kv: f64,

    /// True when transverse stiffeners were supplied **and** effective
    pub stiffeners_effective: bool,

    /// Web slenderness λ = h/tw (+∞ when tw = 0)
    pub lambda: f64,
    /// Plastic-limit slenderness λ_p
    pub lambda_p: f64,
    /// Inelastic-limit slenderness λ_r
    pub lambda_r: f64,

    /// Regime tag
    pub regime: Regime,
}

/// Evaluate the web shear capacity.
///
/// `stiffener_spacing_cm` is the transverse stiffener spacing `a`, absent
/// for an unstiffened web.
pub fn evaluate(
    section: &SectionProperties,
    material: &Material,
    stiffener_spacing_cm: Option<f64>,
    factors: &DesignFactors,
) -> ShearCapacity {
    let fy = material.fy_kn_cm2;
    let e = material.e_kn_cm2;

    let lambda = if section.tw_cm > 0.0 {
        section.h_cm / section.tw_cm
    } else {
        f64::INFINITY
    };

    // Stiffeners count only within the code's aspect-ratio limits
    let (kv, stiffeners_effective) = match stiffener_spacing_cm {
        Some(a) if section.h_cm > 0.0 => {
            let aspect = a / section.h_cm;
            let limit = (260.0 / lambda) * (260.0 / lambda);
            if aspect < 3.0 && aspect < limit {
                (factors.kv_unstiffened + 5.0 / (aspect * aspect), true)
            } else {
                (factors.kv_unstiffened, false)
            }
        }
        _ => (factors.kv_unstiffened, false),
    };

    let base = (kv * e / fy).sqrt();
    let lambda_p = factors.shear_lambda_p_coeff * base;
    let lambda_r = factors.shear_lambda_r_coeff * base;

    let vpl = factors.shear_plastic_coeff * section.d_cm * section.tw_cm * fy;
    let gamma = factors.gamma_a1;

    let (vrd, regime) = if lambda <= lambda_p {
        (vpl / gamma, Regime::Plastic)
    } else if lambda <= lambda_r {
        ((lambda_p / lambda) * vpl / gamma, Regime::Inelastic)
    } else {
        let ratio = lambda_p / lambda; // λ > λ_r ≥ λ_p > 0, never a 0/0
        (
            factors.shear_elastic_coeff * ratio * ratio * vpl / gamma,
            Regime::Elastic,
        )
    };

    ShearCapacity {
        vrd_kn: vrd,
        vpl_kn: vpl,
        kv,
        stiffeners_effective,
        lambda,
        lambda_p,
        lambda_r,
        regime,
    }
}
