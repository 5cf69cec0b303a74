//! # Section Catalog
//!
//! Category-grouped collections of rolled steel sections.
//!
//! The verification engine itself never does I/O; this module is the seam to
//! the external catalog-loading collaborator. Two sources are provided:
//!
//! - [`builtin_catalog`] - a set of common Gerdau metric W and HP shapes,
//!   so the engine is usable without any external file
//! - [`SectionCatalog::load_from_csv`] - a tolerant CSV reader for mill
//!   catalogs exported from a spreadsheet
//!
//! Rows are kept as raw [`SectionRecord`]s; validation happens at evaluation
//! time so that a malformed row skips that row only, never the whole run.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::catalog::builtin_catalog;
//!
//! let catalog = builtin_catalog();
//! let w200 = catalog.lookup("W200X15.0").unwrap();
//! assert_eq!(w200.weight_kg_m, Some(15.0));
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};
use crate::section::SectionRecord;

/// A named group of section records (e.g., "W rolled", "HP rolled")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogCategory {
    /// Category tag used to group optimizer output
    pub name: String,

    /// Section records in catalog order
    pub sections: Vec<SectionRecord>,
}

/// A catalog of steel sections grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionCatalog {
    /// Categories in catalog order
    pub categories: Vec<CatalogCategory>,

    /// Catalog version tag (e.g., "builtin", a file name, a mill edition)
    pub version: Option<String>,
}

impl SectionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under a category, creating the category on first use
    pub fn insert(&mut self, category: &str, record: SectionRecord) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(cat) => cat.sections.push(record),
            None => self.categories.push(CatalogCategory {
                name: category.to_string(),
                sections: vec![record],
            }),
        }
    }

    /// Look up a record by its label, case-insensitive, across all categories
    pub fn lookup(&self, label: &str) -> CheckResult<&SectionRecord> {
        let key = label.to_uppercase();
        self.categories
            .iter()
            .flat_map(|c| c.sections.iter())
            .find(|s| s.label.to_uppercase() == key)
            .ok_or_else(|| CheckError::section_not_found(label))
    }

    /// Total number of records across all categories
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.sections.len()).sum()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load a catalog from a CSV file.
    ///
    /// Expected columns (header names, case-insensitive): `Category`,
    /// `Label`, `d`, `bf`, `tw`, `tf`, `h`, `A`, `Ix`, `Iy`, `Wx`, `Wy`,
    /// `Zx`, `Zy`, `J`, `Cw`, `Weight`. Blank or dash cells become `None`
    /// and are caught by validation at evaluation time.
    pub fn load_from_csv(path: &str) -> CheckResult<Self> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let file = File::open(path).map_err(|e| {
            CheckError::catalog_error("open", path, format!("Failed to open CSV: {}", e))
        })?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| CheckError::catalog_error("read", path, "CSV file is empty"))?
            .map_err(|e| {
                CheckError::catalog_error("read", path, format!("Failed to read header: {}", e))
            })?;

        let headers: Vec<&str> = header_line.split(',').collect();
        let col_index = |name: &str| -> Option<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let category_idx = col_index("Category")
            .ok_or_else(|| CheckError::catalog_error("parse", path, "Missing 'Category' column"))?;
        let label_idx = col_index("Label")
            .ok_or_else(|| CheckError::catalog_error("parse", path, "Missing 'Label' column"))?;

        let d_idx = col_index("d");
        let bf_idx = col_index("bf");
        let tw_idx = col_index("tw");
        let tf_idx = col_index("tf");
        let h_idx = col_index("h");
        let a_idx = col_index("A");
        let ix_idx = col_index("Ix");
        let iy_idx = col_index("Iy");
        let wx_idx = col_index("Wx");
        let wy_idx = col_index("Wy");
        let zx_idx = col_index("Zx");
        let zy_idx = col_index("Zy");
        let j_idx = col_index("J");
        let cw_idx = col_index("Cw");
        let weight_idx = col_index("Weight");

        let mut catalog = SectionCatalog::new();
        let mut line_num = 1;

        for line_result in lines {
            line_num += 1;
            let line = line_result.map_err(|e| {
                CheckError::catalog_error(
                    "read",
                    path,
                    format!("Failed to read line {}: {}", line_num, e),
                )
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();

            let category = fields.get(category_idx).copied().unwrap_or("").trim();
            let label = fields.get(label_idx).copied().unwrap_or("").trim();
            if label.is_empty() {
                continue; // Skip rows without a label
            }
            let category = if category.is_empty() {
                "uncategorized"
            } else {
                category
            };

            let get_opt = |idx: Option<usize>| -> Option<f64> {
                idx.and_then(|i| fields.get(i))
                    .and_then(|v| parse_optional_f64(v))
            };

            catalog.insert(
                category,
                SectionRecord {
                    label: label.to_string(),
                    d_cm: get_opt(d_idx),
                    bf_cm: get_opt(bf_idx),
                    tw_cm: get_opt(tw_idx),
                    tf_cm: get_opt(tf_idx),
                    h_cm: get_opt(h_idx),
                    area_cm2: get_opt(a_idx),
                    ix_cm4: get_opt(ix_idx),
                    iy_cm4: get_opt(iy_idx),
                    wx_cm3: get_opt(wx_idx),
                    wy_cm3: get_opt(wy_idx),
                    zx_cm3: get_opt(zx_idx),
                    zy_cm3: get_opt(zy_idx),
                    j_cm4: get_opt(j_idx),
                    cw_cm6: get_opt(cw_idx),
                    weight_kg_m: get_opt(weight_idx),
                },
            );
        }

        catalog.version = Some(path.to_string());
        Ok(catalog)
    }
}

/// Parse an optional f64 from a CSV field.
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "—" {
        return None;
    }
    trimmed.parse().ok()
}

// ============================================================================
// Built-in Shapes (for use without a CSV file)
// ============================================================================

static BUILTIN: Lazy<SectionCatalog> = Lazy::new(|| {
    let mut catalog = SectionCatalog::new();

    // Gerdau rolled W beams (selected sizes). Tuple order:
    // (label, d, bf, tw, tf, h, A, Ix, Wx, Zx, Iy, Wy, Zy, J, Cw, weight)
    // Lengths cm, areas cm², moduli cm³, inertias cm⁴, Cw cm⁶, weight kg/m.
    let w_shapes = [
        ("W150X13.0", 14.8, 10.0, 0.43, 0.49, 11.8, 16.6, 635.0, 85.8, 96.4, 82.0, 16.4, 25.5, 1.72, 4_181.0, 13.0),
        ("W150X22.5", 15.2, 15.2, 0.58, 0.66, 11.9, 29.0, 1_229.0, 161.7, 179.6, 387.0, 50.9, 77.9, 4.75, 20_417.0, 22.5),
        ("W200X15.0", 20.0, 10.0, 0.43, 0.52, 17.0, 19.4, 1_305.0, 130.5, 147.9, 87.0, 17.4, 27.3, 2.05, 8_222.0, 15.0),
        ("W200X19.3", 20.3, 10.2, 0.58, 0.65, 16.1, 25.1, 1_686.0, 166.1, 190.6, 116.0, 22.7, 35.9, 4.02, 11_098.0, 19.3),
        ("W200X26.6", 20.7, 13.3, 0.58, 0.84, 16.1, 34.2, 2_611.0, 252.3, 282.3, 330.0, 49.6, 76.3, 7.65, 32_477.0, 26.6),
        ("W250X25.3", 25.7, 10.2, 0.61, 0.84, 22.0, 32.6, 3_473.0, 270.2, 311.1, 149.0, 29.3, 46.4, 7.06, 22_955.0, 25.3),
        ("W250X32.7", 25.8, 14.6, 0.61, 0.91, 22.0, 42.1, 4_937.0, 382.7, 428.5, 473.0, 64.8, 99.7, 10.4, 73_104.0, 32.7),
        ("W310X32.7", 31.3, 10.2, 0.66, 1.08, 27.1, 42.1, 6_570.0, 419.8, 485.3, 192.0, 37.6, 59.8, 12.9, 43_612.0, 32.7),
        ("W310X44.5", 31.3, 16.6, 0.66, 1.12, 27.1, 57.2, 9_997.0, 638.8, 712.8, 855.0, 103.0, 158.0, 19.9, 195_543.0, 44.5),
        ("W360X44.0", 35.2, 17.1, 0.69, 0.98, 30.8, 57.7, 12_258.0, 696.5, 784.3, 818.0, 95.7, 147.6, 16.2, 239_091.0, 44.0),
        ("W410X53.0", 40.3, 17.7, 0.75, 1.09, 35.7, 68.4, 18_734.0, 929.7, 1_052.2, 1_009.0, 114.0, 176.9, 23.4, 387_194.0, 53.0),
        ("W460X60.0", 45.5, 15.3, 0.80, 1.33, 40.4, 76.2, 25_652.0, 1_127.6, 1_292.1, 796.0, 104.1, 163.4, 33.8, 387_230.0, 60.0),
    ];

    // Gerdau rolled HP bearing piles (stocky webs, used as heavy beams too)
    let hp_shapes = [
        ("HP250X62.0", 24.6, 25.6, 1.05, 1.07, 20.1, 79.6, 8_728.0, 709.6, 790.5, 2_995.0, 234.0, 357.8, 33.5, 416_309.0, 62.0),
        ("HP310X79.0", 29.9, 30.6, 1.10, 1.10, 24.5, 100.0, 16_316.0, 1_091.3, 1_210.1, 5_258.0, 343.7, 525.4, 46.7, 1_089_258.0, 79.0),
    ];

    for (category, shapes) in [("W rolled", &w_shapes[..]), ("HP rolled", &hp_shapes[..])] {
        for &(label, d, bf, tw, tf, h, a, ix, wx, zx, iy, wy, zy, j, cw, weight) in shapes {
            catalog.insert(
                category,
                SectionRecord {
                    label: label.to_string(),
                    d_cm: Some(d),
                    bf_cm: Some(bf),
                    tw_cm: Some(tw),
                    tf_cm: Some(tf),
                    h_cm: Some(h),
                    area_cm2: Some(a),
                    ix_cm4: Some(ix),
                    iy_cm4: Some(iy),
                    wx_cm3: Some(wx),
                    wy_cm3: Some(wy),
                    zx_cm3: Some(zx),
                    zy_cm3: Some(zy),
                    j_cm4: Some(j),
                    cw_cm6: Some(cw),
                    weight_kg_m: Some(weight),
                },
            );
        }
    }

    catalog.version = Some("builtin".to_string());
    catalog
});

/// Get the built-in catalog of common Gerdau metric shapes.
pub fn builtin_catalog() -> &'static SectionCatalog {
    &BUILTIN
}
