// crates/cablecost-core/src/error.rs

use thiserror::Error;

use crate::catalog::CatalogIssue;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Estimate file is not valid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Estimate could not be written as TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unknown {kind} '{value}'")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("specification is outside the catalog: {}", format_issues(.0))]
    Catalog(Vec<CatalogIssue>),
}

fn format_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, CostError>;
