//! # Section Properties
//!
//! Geometric properties of an I-shaped steel cross-section, plus the
//! validator that turns a raw catalog record into a usable property set.
//!
//! Catalog rows arrive with every field optional (spreadsheets have blank
//! cells); [`SectionRecord::validate`] either returns a fully-populated
//! [`SectionProperties`] or a [`CheckError::PropertyInvalid`] naming the
//! first offending field. The batch optimizer pattern-matches on that error
//! and skips the row; the single-section path propagates it to the caller.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::section::SectionRecord;
//!
//! let record = SectionRecord {
//!     label: "W200X15".to_string(),
//!     d_cm: Some(20.0),
//!     bf_cm: Some(10.0),
//!     tw_cm: Some(0.43),
//!     tf_cm: Some(0.52),
//!     h_cm: Some(17.0),
//!     area_cm2: Some(19.4),
//!     ix_cm4: Some(1305.0),
//!     iy_cm4: Some(87.0),
//!     wx_cm3: Some(130.5),
//!     wy_cm3: Some(17.4),
//!     zx_cm3: Some(147.9),
//!     zy_cm3: Some(27.3),
//!     j_cm4: Some(2.05),
//!     cw_cm6: Some(8222.0),
//!     weight_kg_m: Some(15.0),
//! };
//!
//! let section = record.validate().unwrap();
//! assert!(section.ry_cm() > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Raw catalog record with every property optional.
///
/// Field names follow the catalog column names; all dimensional values are in
/// the kN·cm system (cm, cm², cm³, cm⁴, cm⁶) except the linear weight, which
/// stays in kg/m as printed in mill catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Human-readable identifying label (e.g., "W200X15")
    pub label: String,

    /// Overall depth d (cm)
    pub d_cm: Option<f64>,
    /// Flange width bf (cm)
    pub bf_cm: Option<f64>,
    /// Web thickness tw (cm)
    pub tw_cm: Option<f64>,
    /// Flange thickness tf (cm)
    pub tf_cm: Option<f64>,
    /// Clear web height h (cm)
    pub h_cm: Option<f64>,
    /// Cross-sectional area (cm²)
    pub area_cm2: Option<f64>,
    /// Moment of inertia, strong axis (cm⁴)
    pub ix_cm4: Option<f64>,
    /// Moment of inertia, weak axis (cm⁴)
    pub iy_cm4: Option<f64>,
    /// Elastic section modulus, strong axis (cm³)
    pub wx_cm3: Option<f64>,
    /// Elastic section modulus, weak axis (cm³)
    pub wy_cm3: Option<f64>,
    /// Plastic section modulus, strong axis (cm³)
    pub zx_cm3: Option<f64>,
    /// Plastic section modulus, weak axis (cm³)
    pub zy_cm3: Option<f64>,
    /// Torsional constant J (cm⁴)
    pub j_cm4: Option<f64>,
    /// Warping constant Cw (cm⁶)
    pub cw_cm6: Option<f64>,
    /// Linear weight (kg/m)
    pub weight_kg_m: Option<f64>,
}

impl SectionRecord {
    /// Validate the record into a usable property set.
    ///
    /// Every field must be present, finite and strictly positive; the first
    /// violation found is returned as `PropertyInvalid` naming the field.
    pub fn validate(&self) -> CheckResult<SectionProperties> {
        fn require(field: &'static str, value: Option<f64>) -> CheckResult<f64> {
            match value {
                None => Err(CheckError::property_missing(field)),
                Some(v) if !v.is_finite() => Err(CheckError::property_invalid(
                    field,
                    v.to_string(),
                    "Value must be numeric",
                )),
                Some(v) if v <= 0.0 => Err(CheckError::property_invalid(
                    field,
                    v.to_string(),
                    "Value must be strictly positive",
                )),
                Some(v) => Ok(v),
            }
        }

        Ok(SectionProperties {
            label: self.label.clone(),
            d_cm: require("d_cm", self.d_cm)?,
            bf_cm: require("bf_cm", self.bf_cm)?,
            tw_cm: require("tw_cm", self.tw_cm)?,
            tf_cm: require("tf_cm", self.tf_cm)?,
            h_cm: require("h_cm", self.h_cm)?,
            area_cm2: require("area_cm2", self.area_cm2)?,
            ix_cm4: require("ix_cm4", self.ix_cm4)?,
            iy_cm4: require("iy_cm4", self.iy_cm4)?,
            wx_cm3: require("wx_cm3", self.wx_cm3)?,
            wy_cm3: require("wy_cm3", self.wy_cm3)?,
            zx_cm3: require("zx_cm3", self.zx_cm3)?,
            zy_cm3: require("zy_cm3", self.zy_cm3)?,
            j_cm4: require("j_cm4", self.j_cm4)?,
            cw_cm6: require("cw_cm6", self.cw_cm6)?,
            weight_kg_m: require("weight_kg_m", self.weight_kg_m)?,
        })
    }
}

/// Validated section properties.
///
/// Invariant: every field is finite and strictly positive; the only way to
/// construct this type from external data is [`SectionRecord::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Human-readable identifying label (e.g., "W200X15")
    pub label: String,

    /// Overall depth d (cm)
    pub d_cm: f64,
    /// Flange width bf (cm)
    pub bf_cm: f64,
    /// Web thickness tw (cm)
    pub tw_cm: f64,
    /// Flange thickness tf (cm)
    pub tf_cm: f64,
    /// Clear web height h (cm)
    pub h_cm: f64,
    /// Cross-sectional area (cm²)
    pub area_cm2: f64,
    /// Moment of inertia, strong axis (cm⁴)
    pub ix_cm4: f64,
    /// Moment of inertia, weak axis (cm⁴)
    pub iy_cm4: f64,
    /// Elastic section modulus, strong axis (cm³)
    pub wx_cm3: f64,
    /// Elastic section modulus, weak axis (cm³)
    pub wy_cm3: f64,
    /// Plastic section modulus, strong axis (cm³)
    pub zx_cm3: f64,
    /// Plastic section modulus, weak axis (cm³)
    pub zy_cm3: f64,
    /// Torsional constant J (cm⁴)
    pub j_cm4: f64,
    /// Warping constant Cw (cm⁶)
    pub cw_cm6: f64,
    /// Linear weight (kg/m)
    pub weight_kg_m: f64,
}

impl SectionProperties {
    /// Radius of gyration about the weak axis, ry = √(Iy/A) (cm)
    pub fn ry_cm(&self) -> f64 {
        (self.iy_cm4 / self.area_cm2).sqrt()
    }

    /// Flange slenderness bf/(2·tf)
    pub fn flange_slenderness(&self) -> f64 {
        self.bf_cm / (2.0 * self.tf_cm)
    }

    /// Web slenderness h/tw
    pub fn web_slenderness(&self) -> f64 {
        self.h_cm / self.tw_cm
    }
}

impl std::fmt::Display for SectionProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (d={:.1} cm, A={:.1} cm², Zx={:.1} cm³, {:.1} kg/m)",
            self.label, self.d_cm, self.area_cm2, self.zx_cm3, self.weight_kg_m
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_record() -> SectionRecord {
        SectionRecord {
            label: "W200X15".to_string(),
            d_cm: Some(20.0),
            bf_cm: Some(10.0),
            tw_cm: Some(0.43),
            tf_cm: Some(0.52),
            h_cm: Some(17.0),
            area_cm2: Some(19.4),
            ix_cm4: Some(1305.0),
            iy_cm4: Some(87.0),
            wx_cm3: Some(130.5),
            wy_cm3: Some(17.4),
            zx_cm3: Some(147.9),
            zy_cm3: Some(27.3),
            j_cm4: Some(2.05),
            cw_cm6: Some(8222.0),
            weight_kg_m: Some(15.0),
        }
    }

    #[test]
    fn test_valid_record() {
        let section = sample_record().validate().unwrap();
        assert_eq!(section.label, "W200X15");
        // ry = √(87/19.4) = 2.118 cm
        assert!((section.ry_cm() - 2.118).abs() < 0.01);
        // bf/2tf = 10/(2*0.52) = 9.615
        assert!((section.flange_slenderness() - 9.615).abs() < 0.01);
        // h/tw = 17/0.43 = 39.53
        assert!((section.web_slenderness() - 39.53).abs() < 0.01);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut record = sample_record();
        record.zx_cm3 = None;
        let err = record.validate().unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_INVALID");
        assert!(format!("{}", err).contains("zx_cm3"));
    }

    #[test]
    fn test_zero_field_rejected() {
        let mut record = sample_record();
        record.tw_cm = Some(0.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_negative_field_rejected() {
        let mut record = sample_record();
        record.iy_cm4 = Some(-87.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let mut record = sample_record();
        record.cw_cm6 = Some(f64::NAN);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let roundtrip: SectionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, roundtrip);
    }
}
