//! Estimate files: a TOML document holding everything one evaluation needs.
//!
//! ```toml
//! [specification]
//! metal = "copper"
//! phase_count = 1
//! cross_section_mm2 = 95
//!
//! [prices]
//! copper_price_per_kg = 7.21091
//!
//! [[extra_items]]
//! name = "Drum"
//! category = "process"
//! basis = "per-m"
//! unit_price = 2.5
//! ```
//!
//! A section left out entirely takes the factory defaults; a field left out
//! of a present section reads as 0 (or false).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::calculate;
use crate::catalog::{check_catalog, CatalogIssue};
use crate::error::{CostError, Result};
use crate::model::{Breakdown, CableSpecification, LineItem, OverheadConfig, PriceSheet};

/// Display labels for the two currencies of a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currencies {
    pub base: String,
    pub local: String,
}

impl Default for Currencies {
    fn default() -> Self {
        Self {
            base: "USD".to_string(),
            local: "CLP".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    #[serde(default)]
    pub specification: CableSpecification,
    #[serde(default)]
    pub prices: PriceSheet,
    #[serde(default)]
    pub overheads: OverheadConfig,
    #[serde(default)]
    pub currencies: Currencies,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_items: Vec<LineItem>,
}

impl Estimate {
    pub fn evaluate(&self) -> Breakdown {
        calculate(
            &self.specification,
            &self.prices,
            &self.overheads,
            &self.extra_items,
        )
    }

    pub fn catalog_issues(&self) -> Vec<CatalogIssue> {
        check_catalog(&self.specification)
    }

    /// Fail if any specification field is outside the catalog.
    pub fn ensure_in_catalog(&self) -> Result<()> {
        let issues = self.catalog_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CostError::Catalog(issues))
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn parse_estimate(toml_str: &str) -> Result<Estimate> {
    Ok(toml::from_str::<Estimate>(toml_str)?)
}

pub fn load_estimate(path: &Path) -> Result<Estimate> {
    debug!(path = %path.display(), "loading estimate file");
    let contents = fs::read_to_string(path)?;
    parse_estimate(&contents)
}
