// crates/cablecost-core/src/model.rs

use serde::{Deserialize, Serialize};

use crate::catalog::{label_conversions, unknown, Metal, SheathKind, Topology};
use crate::error::CostError;
use crate::lenient;

/// Technical description of one cable. Numeric fields are read leniently
/// from estimate files: a missing or garbled value becomes 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSpecification {
    #[serde(default)]
    pub metal: Metal,
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub phase_count: u32,
    #[serde(default)]
    pub topology: Topology,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub cross_section_mm2: f64,
    /// Descriptive only; never enters the formula.
    #[serde(default)]
    pub voltage_rating: String,
    #[serde(default)]
    pub sheath_kind: SheathKind,
    /// 0 means the cable has no screen.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub screen_mm2: f64,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub has_armor: bool,
    /// kg/m, only read when `has_armor` is set.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub armor_weight_per_meter: f64,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub use_longitudinal_water_block: bool,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub use_radial_water_block: bool,
}

impl Default for CableSpecification {
    fn default() -> Self {
        Self {
            metal: Metal::Copper,
            phase_count: 1,
            topology: Topology::SingleCore,
            cross_section_mm2: 95.0,
            voltage_rating: "0.6/1 kV".to_string(),
            sheath_kind: SheathKind::Rh,
            screen_mm2: 6.0,
            has_armor: false,
            armor_weight_per_meter: 0.15,
            use_longitudinal_water_block: false,
            use_radial_water_block: false,
        }
    }
}

/// Unit prices in base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSheet {
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub copper_price_per_kg: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub aluminum_price_per_kg: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub longitudinal_water_block_price_per_meter: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub radial_water_block_price_per_meter: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub base_sheath_price_per_kg: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub armor_price_per_kg: f64,
}

impl Default for PriceSheet {
    fn default() -> Self {
        Self {
            copper_price_per_kg: 7.21091,
            aluminum_price_per_kg: 2.65,
            longitudinal_water_block_price_per_meter: 1.16,
            radial_water_block_price_per_meter: 2.21,
            base_sheath_price_per_kg: 1.38,
            armor_price_per_kg: 1.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadConfig {
    /// Percent of the material subtotal lost as scrap.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub waste_percent: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub indirect_cost_per_meter: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub labor_cost_per_meter: f64,
    /// Percent markup over factory cost.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub margin_percent: f64,
    /// Local-currency units per unit of base currency.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub exchange_rate: f64,
}

impl Default for OverheadConfig {
    fn default() -> Self {
        Self {
            waste_percent: 3.0,
            indirect_cost_per_meter: 0.12,
            labor_cost_per_meter: 0.20,
            margin_percent: 15.0,
            exchange_rate: 1100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    Material,
    Process,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Material => "Material",
            Category::Process => "Process",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = CostError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "material" | "materials" | "materiales" => Ok(Category::Material),
            "process" | "processes" | "proceso" | "procesos" => Ok(Category::Process),
            _ => Err(unknown("category", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PricingBasis {
    PerKilogram,
    PerMeter,
}

impl PricingBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingBasis::PerKilogram => "per-kg",
            PricingBasis::PerMeter => "per-m",
        }
    }
}

impl TryFrom<&str> for PricingBasis {
    type Error = CostError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "per-kg" | "per_kg" | "kg" | "per-kilogram" => Ok(PricingBasis::PerKilogram),
            "per-m" | "per_m" | "m" | "per-meter" | "per-metre" => Ok(PricingBasis::PerMeter),
            _ => Err(unknown("pricing basis", value)),
        }
    }
}

label_conversions!(Category, PricingBasis);

fn unit_length() -> f64 {
    1.0
}

fn included_by_default() -> bool {
    true
}

/// One priced component of a meter of cable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub category: Category,
    #[serde(alias = "pricing_basis")]
    pub basis: PricingBasis,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub weight_per_meter: f64,
    #[serde(default = "unit_length", deserialize_with = "lenient::f64_or_zero")]
    pub length: f64,
    #[serde(
        default = "included_by_default",
        deserialize_with = "lenient::bool_or_false"
    )]
    pub included: bool,
}

impl LineItem {
    pub fn per_kilogram(
        name: impl Into<String>,
        category: Category,
        unit_price: f64,
        weight_per_meter: f64,
        included: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            basis: PricingBasis::PerKilogram,
            unit_price,
            weight_per_meter,
            length: 1.0,
            included,
        }
    }

    pub fn per_meter(
        name: impl Into<String>,
        category: Category,
        unit_price: f64,
        included: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            basis: PricingBasis::PerMeter,
            unit_price,
            weight_per_meter: 0.0,
            length: 1.0,
            included,
        }
    }

    /// Cost this item adds to one meter of cable; 0 when excluded.
    pub fn cost_per_meter(&self) -> f64 {
        if !self.included {
            return 0.0;
        }
        match self.basis {
            PricingBasis::PerKilogram => self.weight_per_meter * self.unit_price,
            PricingBasis::PerMeter => self.length * self.unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostedLineItem {
    #[serde(flatten)]
    pub item: LineItem,
    pub cost_per_meter: f64,
}

impl From<LineItem> for CostedLineItem {
    fn from(item: LineItem) -> Self {
        let cost_per_meter = item.cost_per_meter();
        Self {
            item,
            cost_per_meter,
        }
    }
}

/// Result of one evaluation, in base currency per meter except
/// `list_price_local`. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub material_subtotal: f64,
    pub waste_cost: f64,
    pub process_subtotal: f64,
    pub factory_cost: f64,
    pub list_price_base: f64,
    pub list_price_local: f64,
    /// Every item in evaluation order, excluded ones included with a zero cost.
    pub line_items: Vec<CostedLineItem>,
}

impl Breakdown {
    /// The six aggregate figures, labelled, in report order.
    pub fn summary(&self) -> [(&'static str, f64); 6] {
        [
            ("MaterialSubtotal", self.material_subtotal),
            ("WasteCost", self.waste_cost),
            ("ProcessSubtotal", self.process_subtotal),
            ("FactoryCost", self.factory_cost),
            ("ListPriceBase", self.list_price_base),
            ("ListPriceLocal", self.list_price_local),
        ]
    }

    pub fn item(&self, name: &str) -> Option<&CostedLineItem> {
        self.line_items.iter().find(|costed| costed.item.name == name)
    }
}
