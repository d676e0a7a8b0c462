pub mod calculator;
pub mod catalog;
pub mod error;
pub mod estimate;
pub mod export;
pub mod lenient;
pub mod model;
pub mod weights;

pub use calculator::{assemble_line_items, calculate};
pub use catalog::{check_catalog, CatalogIssue, Metal, SheathKind, Topology};
pub use error::{CostError, Result};
pub use estimate::{load_estimate, parse_estimate, Currencies, Estimate};
pub use export::{to_csv_string, write_csv};
pub use model::{
    Breakdown, CableSpecification, Category, CostedLineItem, LineItem, OverheadConfig,
    PriceSheet, PricingBasis,
};
