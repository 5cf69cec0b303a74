//! # Catalog Optimizer
//!
//! Runs the full verification pipeline over every record of a catalog and
//! partitions each category into passing and failing entries, the passing
//! subset sorted ascending by linear weight so the first entry is the
//! minimum-weight section that works.
//!
//! Records that fail section validation are **skipped, not fatal**: the run
//! always completes and reports how many entries were skipped and why. The
//! sweep is a pure function of its inputs; no entry is evaluated twice and
//! ties in weight are broken by label so the output order is deterministic.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamConfiguration, LoadCase, SupportCondition};
//! use beam_core::catalog::builtin_catalog;
//! use beam_core::factors::DesignFactors;
//! use beam_core::material::{Material, SteelGrade};
//! use beam_core::optimizer::optimize;
//! use beam_core::verification::{BeamCheckInput, DesignForces};
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
//! let report = optimize(builtin_catalog(), &input, &DesignFactors::default()).unwrap();
//! let lightest = report.lightest().expect("some section passes");
//! println!("use {}", lightest.section.label);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::SectionCatalog;
use crate::errors::{CheckError, CheckResult};
use crate::factors::DesignFactors;
use crate::verification::{check_section, BeamCheckInput, SectionCheck};

/// A catalog record that failed validation and was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// Record label
    pub label: String,
    /// The validation failure
    pub error: CheckError,
}

/// Optimizer outcome for one catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    /// Category tag
    pub name: String,

    /// Entries with overall PASS, ascending by weight (ties by label);
    /// the first entry is the optimum
    pub passing: Vec<SectionCheck>,

    /// Entries with overall FAIL, same ordering
    pub failing: Vec<SectionCheck>,

    /// Entries skipped on validation failure
    pub skipped: Vec<SkippedEntry>,
}

impl CategoryOutcome {
    /// The minimum-weight passing section, if any passes
    pub fn lightest(&self) -> Option<&SectionCheck> {
        self.passing.first()
    }
}

/// Optimizer outcome for a whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// One outcome per category, in catalog order
    pub categories: Vec<CategoryOutcome>,
}

impl OptimizationReport {
    /// Total entries evaluated (passing + failing)
    pub fn evaluated_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.passing.len() + c.failing.len())
            .sum()
    }

    /// Total entries skipped on validation failure
    pub fn skipped_count(&self) -> usize {
        self.categories.iter().map(|c| c.skipped.len()).sum()
    }

    /// The minimum-weight passing section across all categories
    pub fn lightest(&self) -> Option<&SectionCheck> {
        self.categories
            .iter()
            .filter_map(|c| c.lightest())
            .min_by(|a, b| {
                a.section
                    .weight_kg_m
                    .total_cmp(&b.section.weight_kg_m)
                    .then_with(|| a.section.label.cmp(&b.section.label))
            })
    }
}

/// Sort checks ascending by weight, breaking ties by label so the order is
/// deterministic.
fn sort_by_weight(checks: &mut [SectionCheck]) {
    checks.sort_by(|a, b| {
        a.section
            .weight_kg_m
            .total_cmp(&b.section.weight_kg_m)
            .then_with(|| a.section.label.cmp(&b.section.label))
    });
}

/// Evaluate every catalog record against one shared beam/load/material
/// setup.
///
/// Input validation failures abort the run (nothing sensible can be
/// computed); per-record validation failures skip that record only.
pub fn optimize(
    catalog: &SectionCatalog,
    input: &BeamCheckInput,
    factors: &DesignFactors,
) -> CheckResult<OptimizationReport> {
    input.validate()?;
    factors.validate()?;

    let mut categories = Vec::with_capacity(catalog.categories.len());

    for category in &catalog.categories {
        let mut passing = Vec::new();
        let mut failing = Vec::new();
        let mut skipped = Vec::new();

        for record in &category.sections {
            match record.validate() {
                Ok(section) => {
                    let check = check_section(&section, input, factors);
                    if check.passes() {
                        passing.push(check);
                    } else {
                        failing.push(check);
                    }
                }
                Err(error) => skipped.push(SkippedEntry {
                    label: record.label.clone(),
                    error,
                }),
            }
        }

        sort_by_weight(&mut passing);
        sort_by_weight(&mut failing);

        categories.push(CategoryOutcome {
            name: category.name.clone(),
            passing,
            failing,
            skipped,
        });
    }

    Ok(OptimizationReport { categories })
}
