//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine works in one consistent unit system throughout
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## kN·cm System (Primary)
//!
//! The engine works in the kN·cm system used by NBR 8800 design tables:
//! - Length: centimeters (cm), meters (m) at the input boundary
//! - Force: kilonewtons (kN)
//! - Stress: kilonewtons per square centimeter (kN/cm²)
//! - Moment: kilonewton-centimeters (kN·cm), kilonewton-meters (kN·m)
//! - Distributed load: kilonewtons per centimeter (kN/cm)
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Meters, Centimeters, KnM, KnCm};
//!
//! let span = Meters(5.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 500.0);
//!
//! let moment = KnM(15.625);
//! let moment_kncm: KnCm = moment.into();
//! assert_eq!(moment_kncm.0, 1562.5);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Distributed load in kilonewtons per centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCm(pub f64);

/// Distributed load in kilonewtons per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

impl From<KnPerM> for KnPerCm {
    fn from(w: KnPerM) -> Self {
        KnPerCm(w.0 / 100.0)
    }
}

impl From<KnPerCm> for KnPerM {
    fn from(w: KnPerCm) -> Self {
        KnPerM(w.0 * 100.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnCm(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

impl From<KnM> for KnCm {
    fn from(m: KnM) -> Self {
        KnCm(m.0 * 100.0)
    }
}

impl From<KnCm> for KnM {
    fn from(m: KnCm) -> Self {
        KnM(m.0 / 100.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilonewtons per square centimeter
///
/// 1 kN/cm² = 10 MPa. MR250 steel (fy = 250 MPa) is 25.0 kN/cm².
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCm2(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MPa(pub f64);

impl From<MPa> for KnPerCm2 {
    fn from(s: MPa) -> Self {
        KnPerCm2(s.0 / 10.0)
    }
}

impl From<KnPerCm2> for MPa {
    fn from(s: KnPerCm2) -> Self {
        MPa(s.0 * 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let span: Centimeters = Meters(5.0).into();
        assert_eq!(span.0, 500.0);
        let back: Meters = span.into();
        assert_eq!(back.0, 5.0);
    }

    #[test]
    fn test_load_conversion() {
        // 5 kN/m = 0.05 kN/cm
        let w: KnPerCm = KnPerM(5.0).into();
        assert!((w.0 - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_moment_conversion() {
        let m: KnCm = KnM(15.625).into();
        assert_eq!(m.0, 1562.5);
    }

    #[test]
    fn test_stress_conversion() {
        // fy = 250 MPa = 25 kN/cm²
        let fy: KnPerCm2 = MPa(250.0).into();
        assert_eq!(fy.0, 25.0);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Centimeters(500.0)).unwrap();
        assert_eq!(json, "500.0");
        let back: Centimeters = serde_json::from_str("500.0").unwrap();
        assert_eq!(back.0, 500.0);
    }
}
