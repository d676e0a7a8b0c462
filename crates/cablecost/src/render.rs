use cablecost_core::catalog::{
    BASE_SHEATH_WEIGHT_KG_M, CROSS_SECTIONS_MM2, PHASE_COUNTS, SCREENS_MM2, VOLTAGE_RATINGS,
};
use cablecost_core::{Breakdown, Currencies, Metal, SheathKind, Topology};
use comfy_table::{presets, CellAlignment, ContentArrangement, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_numbers(table: &mut Table, from_column: usize) {
    let width = table.column_count();
    for index in from_column..width {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn line_item_table(breakdown: &Breakdown, currencies: &Currencies) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Component".to_string(),
        "Category".to_string(),
        "Basis".to_string(),
        "Unit price".to_string(),
        "kg/m".to_string(),
        "Length".to_string(),
        "Included".to_string(),
        format!("{}/m", currencies.base),
    ]);

    for costed in &breakdown.line_items {
        let item = &costed.item;
        table.add_row(vec![
            item.name.clone(),
            item.category.to_string(),
            item.basis.to_string(),
            format!("{:.4}", item.unit_price),
            format!("{:.5}", item.weight_per_meter),
            format!("{:.2}", item.length),
            if item.included { "yes" } else { "no" }.to_string(),
            format!("{:.4}", costed.cost_per_meter),
        ]);
    }

    align_numbers(&mut table, 3);
    table
}

pub fn summary_table(breakdown: &Breakdown, currencies: &Currencies) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Per meter"]);

    let base = &currencies.base;
    table.add_row(vec![
        "Material subtotal".to_string(),
        format!("{:.4} {base}", breakdown.material_subtotal),
    ]);
    table.add_row(vec![
        "Waste".to_string(),
        format!("{:.4} {base}", breakdown.waste_cost),
    ]);
    table.add_row(vec![
        "Process subtotal".to_string(),
        format!("{:.4} {base}", breakdown.process_subtotal),
    ]);
    table.add_row(vec![
        "Factory cost".to_string(),
        format!("{:.4} {base}", breakdown.factory_cost),
    ]);
    table.add_row(vec![
        "List price".to_string(),
        format!("{:.4} {base}", breakdown.list_price_base),
    ]);
    table.add_row(vec![
        "List price (local)".to_string(),
        format!("{:.2} {}", breakdown.list_price_local, currencies.local),
    ]);

    align_numbers(&mut table, 1);
    table
}

fn join_sizes(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn catalog_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Allowed values"]);
    table.add_row(vec![
        "metal".to_string(),
        Metal::ALL
            .iter()
            .map(|metal| format!("{metal} ({} kg/m³)", metal.density_kg_m3()))
            .collect::<Vec<_>>()
            .join(", "),
    ]);
    table.add_row(vec![
        "topology".to_string(),
        Topology::ALL
            .iter()
            .map(|topology| {
                format!(
                    "{topology} (sheath {:.3} kg/m)",
                    BASE_SHEATH_WEIGHT_KG_M * topology.sheath_factor()
                )
            })
            .collect::<Vec<_>>()
            .join(", "),
    ]);
    table.add_row(vec![
        "sheath_kind".to_string(),
        SheathKind::ALL
            .iter()
            .map(|kind| format!("{kind} (x{:.2})", kind.multiplier()))
            .collect::<Vec<_>>()
            .join(", "),
    ]);
    table.add_row(vec!["phase_count".to_string(), join_sizes(&PHASE_COUNTS)]);
    table.add_row(vec![
        "cross_section_mm2".to_string(),
        join_sizes(&CROSS_SECTIONS_MM2),
    ]);
    table.add_row(vec!["screen_mm2".to_string(), join_sizes(&SCREENS_MM2)]);
    table.add_row(vec!["voltage_rating".to_string(), VOLTAGE_RATINGS.join(", ")]);
    table
}
