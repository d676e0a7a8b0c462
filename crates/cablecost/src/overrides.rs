use anyhow::{anyhow, bail, Context, Result};
use cablecost_core::lenient::{coerce_count, coerce_f64};
use cablecost_core::{Category, Estimate, LineItem, Metal, PricingBasis, SheathKind, Topology};
use clap::Args;

/// Field-by-field overrides layered on top of an estimate file. Numeric
/// values are coerced the same forgiving way the file is.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    #[arg(long)]
    pub metal: Option<Metal>,
    #[arg(long, value_name = "COUNT")]
    pub phases: Option<String>,
    #[arg(long)]
    pub topology: Option<Topology>,
    #[arg(long, value_name = "MM2")]
    pub cross_section: Option<String>,
    #[arg(long)]
    pub voltage: Option<String>,
    #[arg(long)]
    pub sheath: Option<SheathKind>,
    /// Screen section in mm², 0 for none
    #[arg(long, value_name = "MM2")]
    pub screen: Option<String>,
    /// Armor weight in kg/m; turns armor on
    #[arg(long, value_name = "KG_M", conflicts_with = "no_armor")]
    pub armor_weight: Option<String>,
    #[arg(long)]
    pub no_armor: bool,
    #[arg(long, action = clap::ArgAction::Set)]
    pub longitudinal_water_block: Option<bool>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub radial_water_block: Option<bool>,
    #[arg(long, value_name = "PERCENT")]
    pub waste: Option<String>,
    #[arg(long, value_name = "PERCENT")]
    pub margin: Option<String>,
    #[arg(long)]
    pub exchange_rate: Option<String>,
    #[arg(long, value_name = "PER_M")]
    pub labor: Option<String>,
    #[arg(long, value_name = "PER_M")]
    pub indirect: Option<String>,
    /// Additional line item, repeatable. QTY is kg/m for per-kg items and
    /// meters for per-m items (default 1).
    #[arg(long = "extra", value_name = "NAME:CATEGORY:BASIS:PRICE[:QTY]")]
    pub extras: Vec<String>,
}

impl Overrides {
    pub fn apply(&self, estimate: &mut Estimate) -> Result<()> {
        let spec = &mut estimate.specification;

        if let Some(metal) = self.metal {
            spec.metal = metal;
        }
        if let Some(raw) = &self.phases {
            spec.phase_count = coerce_count(raw);
        }
        if let Some(topology) = self.topology {
            spec.topology = topology;
        }
        if let Some(raw) = &self.cross_section {
            spec.cross_section_mm2 = coerce_f64(raw);
        }
        if let Some(voltage) = &self.voltage {
            spec.voltage_rating = voltage.clone();
        }
        if let Some(sheath) = self.sheath {
            spec.sheath_kind = sheath;
        }
        if let Some(raw) = &self.screen {
            spec.screen_mm2 = coerce_f64(raw);
        }
        if let Some(raw) = &self.armor_weight {
            spec.has_armor = true;
            spec.armor_weight_per_meter = coerce_f64(raw);
        }
        if self.no_armor {
            spec.has_armor = false;
        }
        if let Some(enabled) = self.longitudinal_water_block {
            spec.use_longitudinal_water_block = enabled;
        }
        if let Some(enabled) = self.radial_water_block {
            spec.use_radial_water_block = enabled;
        }

        let overheads = &mut estimate.overheads;
        if let Some(raw) = &self.waste {
            overheads.waste_percent = coerce_f64(raw);
        }
        if let Some(raw) = &self.margin {
            overheads.margin_percent = coerce_f64(raw);
        }
        if let Some(raw) = &self.exchange_rate {
            overheads.exchange_rate = coerce_f64(raw);
        }
        if let Some(raw) = &self.labor {
            overheads.labor_cost_per_meter = coerce_f64(raw);
        }
        if let Some(raw) = &self.indirect {
            overheads.indirect_cost_per_meter = coerce_f64(raw);
        }

        for raw in &self.extras {
            let item = parse_extra(raw).with_context(|| format!("invalid --extra '{raw}'"))?;
            estimate.extra_items.push(item);
        }

        Ok(())
    }
}

pub fn parse_extra(raw: &str) -> Result<LineItem> {
    let parts: Vec<&str> = raw.split(':').collect();
    if !(4..=5).contains(&parts.len()) {
        bail!("expected NAME:CATEGORY:BASIS:PRICE[:QTY]");
    }

    let name = parts[0].trim();
    if name.is_empty() {
        return Err(anyhow!("extra item name cannot be empty"));
    }
    let category: Category = parts[1].parse()?;
    let basis: PricingBasis = parts[2].parse()?;
    let unit_price = coerce_f64(parts[3]);
    let quantity = parts.get(4).map(|raw| coerce_f64(raw));

    Ok(match basis {
        PricingBasis::PerKilogram => {
            LineItem::per_kilogram(name, category, unit_price, quantity.unwrap_or(0.0), true)
        }
        PricingBasis::PerMeter => {
            let mut item = LineItem::per_meter(name, category, unit_price, true);
            item.length = quantity.unwrap_or(1.0);
            item
        }
    })
}
