//! Fixed lookup tables for cable construction: conductor metals, sheath
//! compounds, core topologies and the catalog of sizes the factory offers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CostError;
use crate::model::CableSpecification;

/// Density of copper in kg/m³. Screens are always copper, whatever the conductor.
pub const COPPER_DENSITY_KG_M3: f64 = 8890.0;
pub const ALUMINUM_DENSITY_KG_M3: f64 = 2703.0;

/// Nominal sheath mass before the topology factor, in kg/m.
pub const BASE_SHEATH_WEIGHT_KG_M: f64 = 0.12;

pub const CROSS_SECTIONS_MM2: [u32; 10] = [25, 35, 50, 70, 95, 120, 150, 185, 240, 300];
pub const SCREENS_MM2: [u32; 4] = [0, 6, 10, 16];
pub const PHASE_COUNTS: [u32; 2] = [1, 3];
pub const VOLTAGE_RATINGS: [&str; 6] = [
    "0.6/1 kV",
    "3.6/6 kV",
    "6/10 kV",
    "8.7/15 kV",
    "12/20 kV",
    "18/30 kV",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Metal {
    #[default]
    Copper,
    Aluminum,
}

impl Metal {
    pub const ALL: [Metal; 2] = [Metal::Copper, Metal::Aluminum];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Copper => "copper",
            Metal::Aluminum => "aluminum",
        }
    }

    pub fn density_kg_m3(&self) -> f64 {
        match self {
            Metal::Copper => COPPER_DENSITY_KG_M3,
            Metal::Aluminum => ALUMINUM_DENSITY_KG_M3,
        }
    }
}

impl TryFrom<&str> for Metal {
    type Error = CostError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "copper" | "cu" | "cobre" => Ok(Metal::Copper),
            "aluminum" | "aluminium" | "al" | "aluminio" => Ok(Metal::Aluminum),
            _ => Err(unknown("metal", value)),
        }
    }
}

/// Core arrangement of the cable. Only feeds the sheath weight factor and is
/// independent of the phase count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Topology {
    #[default]
    SingleCore,
    ThreeCore,
}

impl Topology {
    pub const ALL: [Topology; 2] = [Topology::SingleCore, Topology::ThreeCore];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::SingleCore => "single-core",
            Topology::ThreeCore => "three-core",
        }
    }

    pub fn sheath_factor(&self) -> f64 {
        match self {
            Topology::SingleCore => 1.0,
            Topology::ThreeCore => 1.05,
        }
    }
}

impl TryFrom<&str> for Topology {
    type Error = CostError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single-core" | "single_core" | "single" | "unipolar" => Ok(Topology::SingleCore),
            "three-core" | "three_core" | "three" | "tripolar" => Ok(Topology::ThreeCore),
            _ => Err(unknown("topology", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SheathKind {
    #[default]
    Rh,
    RhUv,
    Pvc,
}

impl SheathKind {
    pub const ALL: [SheathKind; 3] = [SheathKind::Rh, SheathKind::RhUv, SheathKind::Pvc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SheathKind::Rh => "RH",
            SheathKind::RhUv => "RH_UV",
            SheathKind::Pvc => "PVC",
        }
    }

    /// Scale applied to the base sheath price per kg.
    pub fn multiplier(&self) -> f64 {
        match self {
            SheathKind::Rh => 1.30,
            SheathKind::RhUv => 1.49,
            SheathKind::Pvc => 1.43,
        }
    }
}

impl TryFrom<&str> for SheathKind {
    type Error = CostError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rh" => Ok(SheathKind::Rh),
            "rh_uv" | "rh-uv" | "rhuv" | "rh uv" => Ok(SheathKind::RhUv),
            "pvc" => Ok(SheathKind::Pvc),
            _ => Err(unknown("sheath kind", value)),
        }
    }
}

pub(crate) fn unknown(kind: &'static str, value: &str) -> CostError {
    CostError::UnknownLabel {
        kind,
        value: value.trim().to_string(),
    }
}

macro_rules! label_conversions {
    ($($ty:ty),*) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl ::std::str::FromStr for $ty {
                type Err = $crate::error::CostError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty>::try_from(s)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = $crate::error::CostError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    <$ty>::try_from(value.as_str())
                }
            }

            impl From<$ty> for &'static str {
                fn from(value: $ty) -> Self {
                    value.as_str()
                }
            }
        )*
    };
}

pub(crate) use label_conversions;

label_conversions!(Metal, Topology, SheathKind);

/// A specification field that falls outside what the factory catalogs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CatalogIssue {
    CrossSection(f64),
    Screen(f64),
    PhaseCount(u32),
    VoltageRating(String),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::CrossSection(value) => {
                write!(f, "cross-section {value} mm² is not one of {CROSS_SECTIONS_MM2:?}")
            }
            CatalogIssue::Screen(value) => {
                write!(f, "screen {value} mm² is not one of {SCREENS_MM2:?}")
            }
            CatalogIssue::PhaseCount(value) => {
                write!(f, "phase count {value} is not one of {PHASE_COUNTS:?}")
            }
            CatalogIssue::VoltageRating(value) => {
                write!(f, "voltage rating '{value}' is not one of {VOLTAGE_RATINGS:?}")
            }
        }
    }
}

/// Report every field of `spec` that is outside the catalog. The calculator
/// accepts any value; this is advisory for the input layer.
pub fn check_catalog(spec: &CableSpecification) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if !in_sizes(&CROSS_SECTIONS_MM2, spec.cross_section_mm2) {
        issues.push(CatalogIssue::CrossSection(spec.cross_section_mm2));
    }
    if !in_sizes(&SCREENS_MM2, spec.screen_mm2) {
        issues.push(CatalogIssue::Screen(spec.screen_mm2));
    }
    if !PHASE_COUNTS.contains(&spec.phase_count) {
        issues.push(CatalogIssue::PhaseCount(spec.phase_count));
    }
    if !VOLTAGE_RATINGS.contains(&spec.voltage_rating.trim()) {
        issues.push(CatalogIssue::VoltageRating(spec.voltage_rating.clone()));
    }

    issues
}

fn in_sizes(sizes: &[u32], value: f64) -> bool {
    sizes.iter().any(|&size| f64::from(size) == value)
}
