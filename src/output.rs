use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parser::Module;

/// Final JSON document: source URL, UTC generation timestamp, modules.
/// Field order here is the field order on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub source_url: String,
    pub generated_at: DateTime<Utc>,
    pub modules: Vec<Module>,
}

impl Report {
    pub fn new(source_url: &str, modules: Vec<Module>) -> Self {
        Report {
            source_url: source_url.to_string(),
            generated_at: Utc::now(),
            modules,
        }
    }
}

/// Serialize the whole report first, then write it in one call, so a
/// serialization failure leaves nothing on disk.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
