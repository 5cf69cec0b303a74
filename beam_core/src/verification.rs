//! # Verification
//!
//! Demand derivation and demand-vs-capacity aggregation for one section.
//!
//! [`check_record`] is the single-section entry point: it validates the
//! catalog record, derives the demand set, evaluates every capacity and
//! returns a [`SectionCheck`] carrying each intermediate slenderness and
//! regime value the report renderer needs. Validation failures propagate to
//! the caller here; the batch optimizer catches them and skips the entry
//! instead.
//!
//! ## Pass criterion
//!
//! ```text
//! efficiency = demand / capacity × 100   (∞ when capacity = 0)
//! PASS  ⇔  efficiency ≤ 100.1 %
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamConfiguration, LoadCase, SupportCondition};
//! use beam_core::catalog::builtin_catalog;
//! use beam_core::factors::DesignFactors;
//! use beam_core::material::{Material, SteelGrade};
//! use beam_core::verification::{check_record, BeamCheckInput, DesignForces};
//!
//! let input = BeamCheckInput {
//!     beam: BeamConfiguration {
//!         support: SupportCondition::SimplySupported,
//!         span_cm: 500.0,
//!     },
//!     loads: LoadCase::uniform(0.05),
//!     forces: DesignForces::FromLoads { load_factor: 1.4 },
//!     material: Material::from_grade(SteelGrade::Mr250),
//!     unbraced_length_cm: None,
//!     cb: None,
//!     stiffener_spacing_cm: None,
//!     deflection_limit_divisor: 350.0,
//! };
//!
//! let record = builtin_catalog().lookup("W310X44.5").unwrap();
//! let check = check_record(record, &input, &DesignFactors::default()).unwrap();
//! assert!(check.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{BeamConfiguration, LoadCase, MomentGradient};
use crate::errors::{CheckError, CheckResult};
use crate::factors::DesignFactors;
use crate::flexure::{self, FlexuralAssessment};
use crate::material::Material;
use crate::section::{SectionProperties, SectionRecord};
use crate::shear::{self, ShearCapacity};

/// Efficiency above which a check fails (percent).
pub const PASS_THRESHOLD_PCT: f64 = 100.1;

/// Pass/fail verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// One demand-vs-capacity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// Demand ÷ capacity, in percent; ∞ when the capacity is zero
    pub efficiency_pct: f64,

    /// PASS iff `efficiency_pct` ≤ 100.1
    pub status: Status,

    /// Advisory note, when one applies to this check
    pub note: Option<String>,
}

impl Verification {
    /// Build a check from a demand/capacity pair.
    pub fn from_demand_capacity(demand: f64, capacity: f64) -> Self {
        let efficiency_pct = if capacity == 0.0 {
            f64::INFINITY
        } else {
            demand / capacity * 100.0
        };
        Verification {
            efficiency_pct,
            status: if efficiency_pct <= PASS_THRESHOLD_PCT {
                Status::Pass
            } else {
                Status::Fail
            },
            note: None,
        }
    }

    /// Attach an advisory note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// How the design forces are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DesignForces {
    /// Derive Msd/Vsd from the physical loads times a load factor; the
    /// deflection check runs on the unfactored loads
    FromLoads { load_factor: f64 },

    /// Msd and Vsd specified directly; the deflection check is not
    /// applicable in this mode
    Direct { msd_kncm: f64, vsd_kn: f64 },
}

/// Derived demand set. Recomputed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandSet {
    /// Design bending moment Msd (kN·cm)
    pub msd_kncm: f64,
    /// Design shear force Vsd (kN)
    pub vsd_kn: f64,
    /// Service deflection (cm); absent when forces were specified directly
    pub deflection_cm: Option<f64>,
}

/// Everything the engine needs besides the section itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamCheckInput {
    /// Beam geometry
    pub beam: BeamConfiguration,

    /// Service loads (used for demand derivation and the Cb estimate)
    pub loads: LoadCase,

    /// Demand specification mode
    pub forces: DesignForces,

    /// Steel material
    pub material: Material,

    /// Unbraced length Lb (cm); the full span when absent
    pub unbraced_length_cm: Option<f64>,

    /// Manually supplied Cb; quarter-point estimate when absent
    pub cb: Option<f64>,

    /// Transverse stiffener spacing (cm); unstiffened web when absent
    pub stiffener_spacing_cm: Option<f64>,

    /// Deflection limit divisor n in L/n (e.g., 350 for L/350)
    pub deflection_limit_divisor: f64,
}

impl BeamCheckInput {
    /// Validate every engine input except the section.
    pub fn validate(&self) -> CheckResult<()> {
        self.beam.validate(&self.loads)?;
        self.material.validate()?;

        if let DesignForces::FromLoads { load_factor } = self.forces {
            if !load_factor.is_finite() || load_factor <= 0.0 {
                return Err(CheckError::invalid_input(
                    "load_factor",
                    load_factor.to_string(),
                    "Load factor must be positive",
                ));
            }
        }
        if let DesignForces::Direct { msd_kncm, vsd_kn } = self.forces {
            if !msd_kncm.is_finite() || msd_kncm < 0.0 {
                return Err(CheckError::invalid_input(
                    "msd_kncm",
                    msd_kncm.to_string(),
                    "Design moment must be zero or positive",
                ));
            }
            if !vsd_kn.is_finite() || vsd_kn < 0.0 {
                return Err(CheckError::invalid_input(
                    "vsd_kn",
                    vsd_kn.to_string(),
                    "Design shear must be zero or positive",
                ));
            }
        }
        if let Some(lb) = self.unbraced_length_cm {
            if !lb.is_finite() || lb <= 0.0 {
                return Err(CheckError::invalid_input(
                    "unbraced_length_cm",
                    lb.to_string(),
                    "Unbraced length must be positive",
                ));
            }
        }
        if let Some(cb) = self.cb {
            if !cb.is_finite() || cb <= 0.0 {
                return Err(CheckError::invalid_input(
                    "cb",
                    cb.to_string(),
                    "Cb must be positive",
                ));
            }
        }
        if let Some(spacing) = self.stiffener_spacing_cm {
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(CheckError::invalid_input(
                    "stiffener_spacing_cm",
                    spacing.to_string(),
                    "Stiffener spacing must be positive",
                ));
            }
        }
        if !self.deflection_limit_divisor.is_finite() || self.deflection_limit_divisor <= 0.0 {
            return Err(CheckError::invalid_input(
                "deflection_limit_divisor",
                self.deflection_limit_divisor.to_string(),
                "Deflection limit divisor must be positive",
            ));
        }
        Ok(())
    }
}

/// Full verification of one section: demand, every capacity with its
/// intermediate values, per-check verdicts and the overall verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCheck {
    /// Validated section properties
    pub section: SectionProperties,

    /// Derived demand set
    pub demand: DemandSet,

    /// Cb actually used by the lateral-torsional check
    pub cb_used: f64,

    /// Quarter-point sampling behind `cb_used`; absent when Cb was manual
    pub moment_gradient: Option<MomentGradient>,

    /// The three flexural mode capacities
    pub flexure: FlexuralAssessment,

    /// Web shear capacity
    pub shear: ShearCapacity,

    /// Moment check against the governing flexural capacity
    pub moment_check: Verification,

    /// Shear check
    pub shear_check: Verification,

    /// Deflection check; `None` means not applicable (forces were direct)
    pub deflection_check: Option<Verification>,

    /// Service deflection limit L/n (cm); absent when not applicable
    pub deflection_limit_cm: Option<f64>,

    /// Advisory notes (interaction flag, out-of-scope regimes)
    pub notes: Vec<String>,

    /// PASS iff every applicable check passes
    pub overall: Status,
}

impl SectionCheck {
    /// True when the overall verdict is PASS
    pub fn passes(&self) -> bool {
        self.overall == Status::Pass
    }

    /// The worst efficiency across the applicable checks (percent)
    pub fn governing_efficiency_pct(&self) -> f64 {
        let deflection = self
            .deflection_check
            .as_ref()
            .map_or(0.0, |check| check.efficiency_pct);
        self.moment_check
            .efficiency_pct
            .max(self.shear_check.efficiency_pct)
            .max(deflection)
    }
}

/// Verify one validated section. Assumes `input.validate()` has passed.
pub fn check_section(
    section: &SectionProperties,
    input: &BeamCheckInput,
    factors: &DesignFactors,
) -> SectionCheck {
    let beam = &input.beam;

    // === Demand ===
    let (demand, deflection_limit) = match input.forces {
        DesignForces::FromLoads { load_factor } => {
            let factored = input.loads.scaled(load_factor);
            let forces = beam.internal_forces(&factored);
            let deflection = beam.deflection(
                &input.loads,
                input.material.e_kn_cm2,
                section.ix_cm4,
            );
            (
                DemandSet {
                    msd_kncm: forces.moment_kncm,
                    vsd_kn: forces.shear_kn,
                    deflection_cm: Some(deflection),
                },
                Some(beam.span_cm / input.deflection_limit_divisor),
            )
        }
        DesignForces::Direct { msd_kncm, vsd_kn } => (
            DemandSet {
                msd_kncm,
                vsd_kn,
                deflection_cm: None,
            },
            None,
        ),
    };

    // === Moment gradient ===
    let (cb_used, moment_gradient) = match input.cb {
        Some(cb) => (cb, None),
        None => {
            let gradient = beam.moment_gradient(&input.loads, factors);
            (gradient.cb, Some(gradient))
        }
    };

    // === Capacities ===
    let lb = input.unbraced_length_cm.unwrap_or(beam.span_cm);
    let flexure = flexure::evaluate(section, &input.material, lb, cb_used, factors);
    let shear = shear::evaluate(
        section,
        &input.material,
        input.stiffener_spacing_cm,
        factors,
    );

    // === Checks ===
    let mut notes = Vec::new();

    let governing = flexure.governing();
    let moment_check = Verification::from_demand_capacity(demand.msd_kncm, governing.mrd_kncm)
        .with_note(format!(
            "{} governs ({} regime)",
            governing.mode.code(),
            governing.regime().display_name()
        ));
    if flexure.fla.beyond_scope {
        notes.push(
            "Slender web in flexure: capacity taken as zero, section needs \
             analysis beyond this engine"
                .to_string(),
        );
    }

    let shear_check = Verification::from_demand_capacity(demand.vsd_kn, shear.vrd_kn);
    if demand.vsd_kn > 0.5 * shear.vrd_kn {
        notes.push(
            "Vsd exceeds 50% of Vrd: moment-shear interaction should be \
             considered (not computed here)"
                .to_string(),
        );
    }

    let deflection_check = match (demand.deflection_cm, deflection_limit) {
        (Some(deflection), Some(limit)) => {
            Some(Verification::from_demand_capacity(deflection, limit))
        }
        _ => None,
    };

    let mut overall = Status::Pass;
    if moment_check.status == Status::Fail || shear_check.status == Status::Fail {
        overall = Status::Fail;
    }
    if let Some(check) = &deflection_check {
        if check.status == Status::Fail {
            overall = Status::Fail;
        }
    }

    SectionCheck {
        section: section.clone(),
        demand,
        cb_used,
        moment_gradient,
        flexure,
        shear,
        moment_check,
        shear_check,
        deflection_check,
        deflection_limit_cm: deflection_limit,
        notes,
        overall,
    }
}

/// Validate a catalog record and the inputs, then verify the section.
///
/// This is the single-section (detailed) entry point: a malformed record
/// surfaces as `PropertyInvalid` here instead of being skipped.
pub fn check_record(
    record: &SectionRecord,
    input: &BeamCheckInput,
    factors: &DesignFactors,
) -> CheckResult<SectionCheck> {
    input.validate()?;
    factors.validate()?;
    let section = record.validate()?;
    Ok(check_section(&section, input, factors))
}
