//! CSV report of a breakdown. Rounding to six decimals happens here and only
//! here; the breakdown itself stays unrounded.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::Result;
use crate::model::Breakdown;

pub const HEADER: [&str; 8] = [
    "Category",
    "Component",
    "PricingBasis",
    "UnitPrice",
    "WeightPerMeter",
    "Length",
    "Included",
    "CostPerMeter",
];

pub const SUMMARY_MARKER: &str = "Summary";

/// Six decimals, with no sign on a value that rounds to zero.
fn fixed(value: f64) -> String {
    let text = format!("{value:.6}");
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => unsigned.to_string(),
        _ => text,
    }
}

pub fn write_csv<W: Write>(breakdown: &Breakdown, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().flexible(true).from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for costed in &breakdown.line_items {
        let item = &costed.item;
        csv_writer.write_record([
            item.category.as_str().to_string(),
            item.name.clone(),
            item.basis.as_str().to_string(),
            fixed(item.unit_price),
            fixed(item.weight_per_meter),
            fixed(item.length),
            item.included.to_string(),
            fixed(costed.cost_per_meter),
        ])?;
    }

    csv_writer.write_record([SUMMARY_MARKER])?;
    for (label, value) in breakdown.summary() {
        csv_writer.write_record([label.to_string(), fixed(value)])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(breakdown: &Breakdown) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(breakdown, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
