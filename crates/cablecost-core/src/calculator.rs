use tracing::debug;

use crate::catalog::Metal;
use crate::model::{
    Breakdown, CableSpecification, Category, CostedLineItem, LineItem, OverheadConfig, PriceSheet,
};
use crate::weights::{
    base_sheath_weight_per_meter, conductor_weight_per_meter, screen_weight_per_meter,
};

pub const CONDUCTOR: &str = "Conductor";
pub const SCREEN: &str = "Screen";
pub const SHEATH: &str = "Sheath";
pub const LONGITUDINAL_WATER_BLOCK: &str = "Longitudinal water block";
pub const RADIAL_WATER_BLOCK: &str = "Radial water block";
pub const ARMOR: &str = "Armor";
pub const LABOR: &str = "Labor";
pub const INDIRECT: &str = "Indirect costs";

pub fn sheath_unit_price(spec: &CableSpecification, prices: &PriceSheet) -> f64 {
    prices.base_sheath_price_per_kg * spec.sheath_kind.multiplier()
}

pub fn conductor_unit_price(spec: &CableSpecification, prices: &PriceSheet) -> f64 {
    match spec.metal {
        Metal::Copper => prices.copper_price_per_kg,
        Metal::Aluminum => prices.aluminum_price_per_kg,
    }
}

/// Build the specification-derived items in report order, followed by the
/// caller's extra items untouched.
pub fn assemble_line_items(
    spec: &CableSpecification,
    prices: &PriceSheet,
    overheads: &OverheadConfig,
    extra_items: &[LineItem],
) -> Vec<LineItem> {
    use Category::{Material, Process};

    let armor_weight = if spec.has_armor {
        spec.armor_weight_per_meter
    } else {
        0.0
    };

    let mut items = vec![
        LineItem::per_kilogram(
            CONDUCTOR,
            Material,
            conductor_unit_price(spec, prices),
            conductor_weight_per_meter(spec.cross_section_mm2, spec.metal, spec.phase_count),
            true,
        ),
        LineItem::per_kilogram(
            SCREEN,
            Material,
            prices.copper_price_per_kg,
            screen_weight_per_meter(spec.screen_mm2, spec.phase_count),
            spec.screen_mm2 > 0.0,
        ),
        LineItem::per_kilogram(
            SHEATH,
            Material,
            sheath_unit_price(spec, prices),
            base_sheath_weight_per_meter(spec.topology),
            true,
        ),
        LineItem::per_meter(
            LONGITUDINAL_WATER_BLOCK,
            Material,
            prices.longitudinal_water_block_price_per_meter,
            spec.use_longitudinal_water_block,
        ),
        LineItem::per_meter(
            RADIAL_WATER_BLOCK,
            Material,
            prices.radial_water_block_price_per_meter,
            spec.use_radial_water_block,
        ),
        LineItem::per_kilogram(
            ARMOR,
            Material,
            prices.armor_price_per_kg,
            armor_weight,
            spec.has_armor,
        ),
        LineItem::per_meter(LABOR, Process, overheads.labor_cost_per_meter, true),
        LineItem::per_meter(INDIRECT, Process, overheads.indirect_cost_per_meter, true),
    ];
    items.extend_from_slice(extra_items);
    items
}

fn subtotal(items: &[CostedLineItem], category: Category) -> f64 {
    items
        .iter()
        .filter(|costed| costed.item.category == category)
        .map(|costed| costed.cost_per_meter)
        .sum()
}

/// Price one meter of cable. Pure and total: any finite input yields a
/// breakdown, negative prices included.
pub fn calculate(
    spec: &CableSpecification,
    prices: &PriceSheet,
    overheads: &OverheadConfig,
    extra_items: &[LineItem],
) -> Breakdown {
    let line_items: Vec<CostedLineItem> = assemble_line_items(spec, prices, overheads, extra_items)
        .into_iter()
        .map(CostedLineItem::from)
        .collect();

    let material_subtotal = subtotal(&line_items, Category::Material);
    let waste_cost = material_subtotal * (overheads.waste_percent / 100.0);
    let process_subtotal = subtotal(&line_items, Category::Process);
    let factory_cost = material_subtotal + waste_cost + process_subtotal;
    let list_price_base = factory_cost * (1.0 + overheads.margin_percent / 100.0);
    let list_price_local = list_price_base * overheads.exchange_rate;

    debug!(
        items = line_items.len(),
        material_subtotal,
        waste_cost,
        process_subtotal,
        factory_cost,
        list_price_base,
        list_price_local,
        "cable cost evaluated"
    );

    Breakdown {
        material_subtotal,
        waste_cost,
        process_subtotal,
        factory_cost,
        list_price_base,
        list_price_local,
        line_items,
    }
}
