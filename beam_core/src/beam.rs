//! # Beam Statics
//!
//! Closed-form internal forces, service deflections and bending-moment
//! sampling for single-span beams under a uniform load, a point load, or
//! both (superposition).
//!
//! The four-way support-condition dispatch lives **once**, here: the force
//! solver, the deflection solver and the moment-gradient estimator all go
//! through [`SupportCondition`] methods instead of repeating the branch.
//!
//! ## Sign Convention
//!
//! - `moment_at` returns signed moments, positive sagging (tension on the
//!   bottom fiber)
//! - `internal_forces` and `deflection` return magnitudes, which is what the
//!   strength and service checks consume
//! - For the cantilever and fixed-pinned conditions, x is measured from the
//!   fixed end
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamConfiguration, LoadCase, SupportCondition};
//!
//! let beam = BeamConfiguration {
//!     support: SupportCondition::SimplySupported,
//!     span_cm: 500.0,
//! };
//! let loads = LoadCase::uniform(0.05); // 5 kN/m
//!
//! let forces = beam.internal_forces(&loads);
//! assert!((forces.moment_kncm - 1562.5).abs() < 1e-9); // wL²/8
//! assert!((forces.shear_kn - 12.5).abs() < 1e-9);      // wL/2
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};
use crate::factors::DesignFactors;

/// Beam support condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportCondition {
    /// Pin-roller, span between supports
    SimplySupported,
    /// Fixed at one end, free at the other
    Cantilever,
    /// Fixed at both ends
    FixedFixed,
    /// Fixed at one end, pinned at the other
    FixedPinned,
}

impl SupportCondition {
    /// All conditions for iteration / menus
    pub const ALL: [SupportCondition; 4] = [
        SupportCondition::SimplySupported,
        SupportCondition::Cantilever,
        SupportCondition::FixedFixed,
        SupportCondition::FixedPinned,
    ];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "Simply supported",
            SupportCondition::Cantilever => "Cantilever (fixed-free)",
            SupportCondition::FixedFixed => "Fixed-fixed",
            SupportCondition::FixedPinned => "Fixed-pinned",
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Point load of magnitude P at distance x from the left support
/// (the fixed end for cantilever and fixed-pinned beams).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Magnitude (kN)
    pub p_kn: f64,
    /// Position from the left/fixed end (cm)
    pub x_cm: f64,
}

/// Load case: a uniform load, an optional point load, or both.
///
/// Magnitudes are service (unfactored) values; the verification pipeline
/// applies the load factor for the strength checks and uses these values
/// directly for the deflection check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Uniform load over the full span (kN/cm)
    pub w_kn_cm: f64,

    /// Optional point load
    pub point: Option<PointLoad>,
}

impl LoadCase {
    /// Uniform load only
    pub fn uniform(w_kn_cm: f64) -> Self {
        LoadCase {
            w_kn_cm,
            point: None,
        }
    }

    /// Point load only
    pub fn point(p_kn: f64, x_cm: f64) -> Self {
        LoadCase {
            w_kn_cm: 0.0,
            point: Some(PointLoad { p_kn, x_cm }),
        }
    }

    /// Uniform plus point load
    pub fn with_point(mut self, p_kn: f64, x_cm: f64) -> Self {
        self.point = Some(PointLoad { p_kn, x_cm });
        self
    }

    /// True when both components are absent or zero
    pub fn is_empty(&self) -> bool {
        self.w_kn_cm == 0.0 && self.point.map_or(true, |p| p.p_kn == 0.0)
    }

    /// Scale both components (used to apply a load factor)
    pub fn scaled(&self, factor: f64) -> Self {
        LoadCase {
            w_kn_cm: self.w_kn_cm * factor,
            point: self.point.map(|p| PointLoad {
                p_kn: p.p_kn * factor,
                x_cm: p.x_cm,
            }),
        }
    }

    /// Validate magnitudes and the point-load position against the span.
    pub fn validate(&self, span_cm: f64) -> CheckResult<()> {
        if !self.w_kn_cm.is_finite() || self.w_kn_cm < 0.0 {
            return Err(CheckError::invalid_input(
                "w_kn_cm",
                self.w_kn_cm.to_string(),
                "Uniform load must be zero or positive",
            ));
        }
        if let Some(point) = self.point {
            if !point.p_kn.is_finite() || point.p_kn < 0.0 {
                return Err(CheckError::invalid_input(
                    "p_kn",
                    point.p_kn.to_string(),
                    "Point load must be zero or positive",
                ));
            }
            if !point.x_cm.is_finite() || point.x_cm < 0.0 || point.x_cm > span_cm {
                return Err(CheckError::invalid_input(
                    "x_cm",
                    point.x_cm.to_string(),
                    "Point load position must lie within the span",
                ));
            }
        }
        Ok(())
    }
}

/// Design internal forces (magnitudes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// Maximum bending moment (kN·cm)
    pub moment_kncm: f64,
    /// Maximum shear force (kN)
    pub shear_kn: f64,
}

/// Moment gradient factor with the sampled moments behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentGradient {
    /// Cb, clamped to the code cap
    pub cb: f64,
    /// Maximum moment magnitude (kN·cm)
    pub m_max_kncm: f64,
    /// Moment magnitude at the quarter point (kN·cm)
    pub m_a_kncm: f64,
    /// Moment magnitude at midspan (kN·cm)
    pub m_b_kncm: f64,
    /// Moment magnitude at the three-quarter point (kN·cm)
    pub m_c_kncm: f64,
}

/// Beam geometry: support condition plus span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfiguration {
    /// Support condition
    pub support: SupportCondition,

    /// Span length L (cm)
    pub span_cm: f64,
}

impl BeamConfiguration {
    /// Validate the beam geometry and a load case against it.
    pub fn validate(&self, loads: &LoadCase) -> CheckResult<()> {
        if !self.span_cm.is_finite() || self.span_cm <= 0.0 {
            return Err(CheckError::invalid_input(
                "span_cm",
                self.span_cm.to_string(),
                "Span must be positive",
            ));
        }
        loads.validate(self.span_cm)
    }

    /// Maximum moment and shear magnitudes, superposing the closed-form
    /// distributed-load and point-load results for the support condition.
    ///
    /// With no loads both outputs are zero.
    pub fn internal_forces(&self, loads: &LoadCase) -> InternalForces {
        let l = self.span_cm;
        let w = loads.w_kn_cm;

        let (mut moment, mut shear) = match self.support {
            SupportCondition::SimplySupported => (w * l * l / 8.0, w * l / 2.0),
            SupportCondition::Cantilever => (w * l * l / 2.0, w * l),
            SupportCondition::FixedFixed => (w * l * l / 12.0, w * l / 2.0),
            SupportCondition::FixedPinned => (w * l * l / 8.0, 5.0 * w * l / 8.0),
        };

        if let Some(point) = loads.point {
            let p = point.p_kn;
            let a = point.x_cm;
            let b = l - a;

            let (pm, pv) = match self.support {
                SupportCondition::SimplySupported => {
                    // M = Pab/L under the load; V = larger reaction
                    (p * a * b / l, p * a.max(b) / l)
                }
                SupportCondition::Cantilever => {
                    // Fixed-end moment Pa; constant shear P up to the load
                    (p * a, p)
                }
                SupportCondition::FixedFixed => {
                    // End moments Pab²/L² and Pa²b/L²; the larger one governs
                    // (the moment under the load, 2Pa²b²/L³, never exceeds it)
                    let m_end = p * a * b * a.max(b) / (l * l);
                    let r1 = p * b * b * (3.0 * a + b) / (l * l * l);
                    let r2 = p * a * a * (3.0 * b + a) / (l * l * l);
                    (m_end, r1.max(r2))
                }
                SupportCondition::FixedPinned => {
                    // Fixed-end moment vs moment under the load
                    let r2 = p * a * a * (3.0 * l - a) / (2.0 * l * l * l);
                    let m_fix = p * b * (l * l - b * b) / (2.0 * l * l);
                    let m_span = r2 * b;
                    (m_fix.max(m_span), (p - r2).max(r2))
                }
            };
            moment += pm;
            shear += pv;
        }

        InternalForces {
            moment_kncm: moment,
            shear_kn: shear,
        }
    }

    /// Maximum service deflection (cm), superposing the standard elastic
    /// formulas for the support condition.
    ///
    /// For the simply-supported point load the symmetric textbook form is
    /// used: δ = P·c·(L²−c²)^(3/2) / (9·√3·L·E·I) with c the smaller of the
    /// two distances from the load to a support.
    ///
    /// `e_kn_cm2` and `ix_cm4` are the elastic modulus and the strong-axis
    /// moment of inertia.
    pub fn deflection(&self, loads: &LoadCase, e_kn_cm2: f64, ix_cm4: f64) -> f64 {
        let l = self.span_cm;
        let w = loads.w_kn_cm;
        let ei = e_kn_cm2 * ix_cm4;
        if ei <= 0.0 {
            return f64::INFINITY;
        }

        let mut delta = match self.support {
            SupportCondition::SimplySupported => 5.0 * w * l.powi(4) / (384.0 * ei),
            SupportCondition::Cantilever => w * l.powi(4) / (8.0 * ei),
            SupportCondition::FixedFixed => w * l.powi(4) / (384.0 * ei),
            SupportCondition::FixedPinned => w * l.powi(4) / (185.0 * ei),
        };

        if let Some(point) = loads.point {
            let p = point.p_kn;
            let a = point.x_cm;
            let b = l - a;

            delta += match self.support {
                SupportCondition::SimplySupported => {
                    let c = a.min(b);
                    p * c * (l * l - c * c).powf(1.5) / (9.0 * 3.0_f64.sqrt() * l * ei)
                }
                SupportCondition::Cantilever => {
                    // Tip deflection for a load at distance a from the fixed end
                    p * a * a * (3.0 * l - a) / (6.0 * ei)
                }
                SupportCondition::FixedFixed => {
                    // Deflection under the load
                    p * a.powi(3) * b.powi(3) / (3.0 * ei * l.powi(3))
                }
                SupportCondition::FixedPinned => {
                    // Simply-supported deflection under the load, reduced by
                    // the fixed-end moment contribution
                    let m_fix = p * b * (l * l - b * b) / (2.0 * l * l);
                    let ss = p * a * a * b * b / (3.0 * ei * l);
                    let correction = m_fix * a * (l - a) * (2.0 * l - a) / (6.0 * ei * l);
                    (ss - correction).max(0.0)
                }
            };
        }

        delta
    }

    /// Signed bending moment at position x (cm from the left/fixed end),
    /// positive sagging. Superposition of the uniform and point components.
    pub fn moment_at(&self, loads: &LoadCase, x: f64) -> f64 {
        let l = self.span_cm;
        let w = loads.w_kn_cm;

        let mut m = match self.support {
            SupportCondition::SimplySupported => w * x * (l - x) / 2.0,
            SupportCondition::Cantilever => -w * (l - x) * (l - x) / 2.0,
            SupportCondition::FixedFixed => w * (l * x / 2.0 - x * x / 2.0 - l * l / 12.0),
            SupportCondition::FixedPinned => {
                w * (-l * l / 8.0 + 5.0 * l * x / 8.0 - x * x / 2.0)
            }
        };

        if let Some(point) = loads.point {
            let p = point.p_kn;
            let a = point.x_cm;
            let b = l - a;

            m += match self.support {
                SupportCondition::SimplySupported => {
                    if x <= a {
                        p * b * x / l
                    } else {
                        p * a * (l - x) / l
                    }
                }
                SupportCondition::Cantilever => {
                    if x <= a {
                        -p * (a - x)
                    } else {
                        0.0
                    }
                }
                SupportCondition::FixedFixed => {
                    let m_a = -p * a * b * b / (l * l);
                    let r1 = p * b * b * (3.0 * a + b) / (l * l * l);
                    m_a + r1 * x - if x > a { p * (x - a) } else { 0.0 }
                }
                SupportCondition::FixedPinned => {
                    let r2 = p * a * a * (3.0 * l - a) / (2.0 * l * l * l);
                    let m_fix = -p * b * (l * l - b * b) / (2.0 * l * l);
                    m_fix + (p - r2) * x - if x > a { p * (x - a) } else { 0.0 }
                }
            };
        }

        m
    }

    /// Moment gradient factor Cb from quarter-point sampling:
    ///
    /// ```text
    /// Cb = 12.5·M_max / (2.5·M_max + 3·M_A + 4·M_B + 3·M_C)   (≤ cb_max)
    /// ```
    ///
    /// with moment magnitudes at the maximum-moment location and the
    /// quarter, mid and three-quarter points. A zero denominator (no
    /// bending anywhere) yields the neutral Cb = 1.0.
    pub fn moment_gradient(&self, loads: &LoadCase, factors: &DesignFactors) -> MomentGradient {
        let l = self.span_cm;

        let m_max = self.internal_forces(loads).moment_kncm;
        let m_a = self.moment_at(loads, l / 4.0).abs();
        let m_b = self.moment_at(loads, l / 2.0).abs();
        let m_c = self.moment_at(loads, 3.0 * l / 4.0).abs();

        let denominator = 2.5 * m_max + 3.0 * m_a + 4.0 * m_b + 3.0 * m_c;
        let cb = if denominator == 0.0 {
            1.0
        } else {
            (12.5 * m_max / denominator).min(factors.cb_max)
        };

        MomentGradient {
            cb,
            m_max_kncm: m_max,
            m_a_kncm: m_a,
            m_b_kncm: m_b,
            m_c_kncm: m_c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-12 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn beam(support: SupportCondition) -> BeamConfiguration {
        BeamConfiguration {
            support,
            span_cm: 500.0,
        }
    }

    #[test]
    fn test_uniform_load_all_conditions() {
        // L = 500 cm, w = 0.05 kN/cm (5 kN/m)
        let loads = LoadCase::uniform(0.05);

        let ss = beam(SupportCondition::SimplySupported).internal_forces(&loads);
        assert!(approx_eq(ss.moment_kncm, 1562.5, EPSILON)); // wL²/8
        assert!(approx_eq(ss.shear_kn, 12.5, EPSILON)); // wL/2

        let cant = beam(SupportCondition::Cantilever).internal_forces(&loads);
        assert!(approx_eq(cant.moment_kncm, 6250.0, EPSILON)); // wL²/2
        assert!(approx_eq(cant.shear_kn, 25.0, EPSILON)); // wL

        let ff = beam(SupportCondition::FixedFixed).internal_forces(&loads);
        assert!(approx_eq(ff.moment_kncm, 1041.6667, 1e-4)); // wL²/12
        assert!(approx_eq(ff.shear_kn, 12.5, EPSILON));

        let fp = beam(SupportCondition::FixedPinned).internal_forces(&loads);
        assert!(approx_eq(fp.moment_kncm, 1562.5, EPSILON)); // wL²/8 at the fixed end
        assert!(approx_eq(fp.shear_kn, 15.625, EPSILON)); // 5wL/8
    }

    #[test]
    fn test_no_loads_gives_zero() {
        let loads = LoadCase::default();
        for support in SupportCondition::ALL {
            let forces = beam(support).internal_forces(&loads);
            assert_eq!(forces.moment_kncm, 0.0);
            assert_eq!(forces.shear_kn, 0.0);
            assert_eq!(beam(support).deflection(&loads, 20_000.0, 1000.0), 0.0);
        }
    }

    #[test]
    fn test_midspan_point_load_simply_supported() {
        // P = 10 kN at midspan: M = PL/4 = 1250 kN·cm, V = P/2
        let loads = LoadCase::point(10.0, 250.0);
        let forces = beam(SupportCondition::SimplySupported).internal_forces(&loads);
        assert!(approx_eq(forces.moment_kncm, 1250.0, EPSILON));
        assert!(approx_eq(forces.shear_kn, 5.0, EPSILON));
    }

    #[test]
    fn test_offset_point_load_simply_supported() {
        // P = 10 kN at a = 100: M = Pab/L = 10*100*400/500 = 800;
        // V = P·max(a,b)/L = 10*400/500 = 8
        let loads = LoadCase::point(10.0, 100.0);
        let forces = beam(SupportCondition::SimplySupported).internal_forces(&loads);
        assert!(approx_eq(forces.moment_kncm, 800.0, EPSILON));
        assert!(approx_eq(forces.shear_kn, 8.0, EPSILON));
    }

    #[test]
    fn test_cantilever_point_load() {
        // P = 10 kN at the tip: M = PL, V = P
        let loads = LoadCase::point(10.0, 500.0);
        let forces = beam(SupportCondition::Cantilever).internal_forces(&loads);
        assert!(approx_eq(forces.moment_kncm, 5000.0, EPSILON));
        assert!(approx_eq(forces.shear_kn, 10.0, EPSILON));
    }

    #[test]
    fn test_fixed_fixed_central_point_load() {
        // End moments PL/8 = 625; reactions P/2
        let loads = LoadCase::point(10.0, 250.0);
        let forces = beam(SupportCondition::FixedFixed).internal_forces(&loads);
        assert!(approx_eq(forces.moment_kncm, 625.0, EPSILON));
        assert!(approx_eq(forces.shear_kn, 5.0, EPSILON));
    }

    #[test]
    fn test_fixed_pinned_central_point_load() {
        // Fixed-end moment 3PL/16 = 937.5 governs over 5PL/32 under the load;
        // fixed-end reaction 11P/16
        let loads = LoadCase::point(10.0, 250.0);
        let forces = beam(SupportCondition::FixedPinned).internal_forces(&loads);
        assert!(approx_eq(forces.moment_kncm, 937.5, EPSILON));
        assert!(approx_eq(forces.shear_kn, 6.875, EPSILON));
    }

    #[test]
    fn test_superposition() {
        // Uniform + point on a simply-supported beam add their maxima
        let loads = LoadCase::uniform(0.05).with_point(10.0, 250.0);
        let forces = beam(SupportCondition::SimplySupported).internal_forces(&loads);
        assert!(approx_eq(forces.moment_kncm, 1562.5 + 1250.0, EPSILON));
        assert!(approx_eq(forces.shear_kn, 12.5 + 5.0, EPSILON));
    }

    #[test]
    fn test_uniform_deflection_simply_supported() {
        // δ = 5wL⁴/(384EI), w=0.05, L=500, E=20000, I=1305
        let loads = LoadCase::uniform(0.05);
        let delta = beam(SupportCondition::SimplySupported).deflection(&loads, 20_000.0, 1305.0);
        let expected = 5.0 * 0.05 * 500.0_f64.powi(4) / (384.0 * 20_000.0 * 1305.0);
        assert!(approx_eq(delta, expected, EPSILON));
        assert!(approx_eq(delta, 1.559, 1e-3));
    }

    #[test]
    fn test_point_deflection_simply_supported_midspan() {
        // Central point load: δ = PL³/(48EI)
        let loads = LoadCase::point(10.0, 250.0);
        let delta = beam(SupportCondition::SimplySupported).deflection(&loads, 20_000.0, 1305.0);
        let expected = 10.0 * 500.0_f64.powi(3) / (48.0 * 20_000.0 * 1305.0);
        assert!(approx_eq(delta, expected, 1e-9));
    }

    #[test]
    fn test_point_deflection_symmetry() {
        // The symmetric formulation must give the same deflection for a load
        // at a and at L-a
        let near = LoadCase::point(10.0, 100.0);
        let far = LoadCase::point(10.0, 400.0);
        let b = beam(SupportCondition::SimplySupported);
        let d_near = b.deflection(&near, 20_000.0, 1305.0);
        let d_far = b.deflection(&far, 20_000.0, 1305.0);
        assert!(approx_eq(d_near, d_far, 1e-12));
    }

    #[test]
    fn test_cantilever_tip_deflection() {
        // Load at the tip: δ = PL³/(3EI)
        let loads = LoadCase::point(10.0, 500.0);
        let delta = beam(SupportCondition::Cantilever).deflection(&loads, 20_000.0, 1305.0);
        let expected = 10.0 * 500.0_f64.powi(3) / (3.0 * 20_000.0 * 1305.0);
        assert!(approx_eq(delta, expected, 1e-9));
    }

    #[test]
    fn test_fixed_fixed_central_deflection() {
        // Central point load: δ = PL³/(192EI)
        let loads = LoadCase::point(10.0, 250.0);
        let delta = beam(SupportCondition::FixedFixed).deflection(&loads, 20_000.0, 1305.0);
        let expected = 10.0 * 500.0_f64.powi(3) / (192.0 * 20_000.0 * 1305.0);
        assert!(approx_eq(delta, expected, 1e-9));
    }

    #[test]
    fn test_fixed_pinned_point_deflection_bounded() {
        // Must be smaller than the simply-supported value and positive
        let loads = LoadCase::point(10.0, 250.0);
        let fp = beam(SupportCondition::FixedPinned).deflection(&loads, 20_000.0, 1305.0);
        let ss = beam(SupportCondition::SimplySupported).deflection(&loads, 20_000.0, 1305.0);
        assert!(fp > 0.0);
        assert!(fp < ss);
    }

    #[test]
    fn test_moment_at_simply_supported() {
        let loads = LoadCase::uniform(0.05);
        let b = beam(SupportCondition::SimplySupported);
        // Parabola: zero at supports, wL²/8 at midspan
        assert!(approx_eq(b.moment_at(&loads, 0.0), 0.0, 1e-9));
        assert!(approx_eq(b.moment_at(&loads, 250.0), 1562.5, EPSILON));
        assert!(approx_eq(b.moment_at(&loads, 500.0), 0.0, 1e-9));
    }

    #[test]
    fn test_moment_at_fixed_fixed_signs() {
        let loads = LoadCase::uniform(0.05);
        let b = beam(SupportCondition::FixedFixed);
        // Hogging at the supports, sagging at midspan
        assert!(b.moment_at(&loads, 0.0) < 0.0);
        assert!(approx_eq(b.moment_at(&loads, 0.0), -1041.6667, 1e-4));
        assert!(approx_eq(b.moment_at(&loads, 250.0), 520.8333, 1e-4)); // wL²/24
    }

    #[test]
    fn test_cb_uniform_simply_supported() {
        // Known result: Cb = 12.5/(2.5 + 3·0.75 + 4 + 3·0.75) ≈ 1.136
        let loads = LoadCase::uniform(0.05);
        let gradient = beam(SupportCondition::SimplySupported)
            .moment_gradient(&loads, &DesignFactors::default());
        assert!(approx_eq(gradient.cb, 1.1364, 1e-3));
    }

    #[test]
    fn test_cb_no_loads_defaults_to_one() {
        let gradient = beam(SupportCondition::SimplySupported)
            .moment_gradient(&LoadCase::default(), &DesignFactors::default());
        assert_eq!(gradient.cb, 1.0);
    }

    #[test]
    fn test_cb_capped() {
        let factors = DesignFactors {
            cb_max: 1.05,
            ..DesignFactors::default()
        };
        let loads = LoadCase::uniform(0.05);
        let gradient = beam(SupportCondition::SimplySupported).moment_gradient(&loads, &factors);
        assert_eq!(gradient.cb, 1.05);
    }

    #[test]
    fn test_validation() {
        let b = BeamConfiguration {
            support: SupportCondition::SimplySupported,
            span_cm: -1.0,
        };
        assert!(b.validate(&LoadCase::default()).is_err());

        let b = beam(SupportCondition::SimplySupported);
        assert!(b.validate(&LoadCase::uniform(-0.05)).is_err());
        assert!(b.validate(&LoadCase::point(10.0, 600.0)).is_err());
        assert!(b.validate(&LoadCase::point(-10.0, 100.0)).is_err());
        assert!(b.validate(&LoadCase::uniform(0.05)).is_ok());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let loads = LoadCase::uniform(0.05).with_point(10.0, 250.0);
        let json = serde_json::to_string(&loads).unwrap();
        let roundtrip: LoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(loads, roundtrip);
    }
}
