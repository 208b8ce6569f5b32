//! JSON export functionality

use crate::metrics::RunOutcome;
use anyhow::{Context, Result};
use serde_json::json;
use std::fs::File;
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Export a run's records and comparison summary to a JSON file
    pub fn export(outcome: &RunOutcome, path: &Path) -> Result<()> {
        let payload = json!({
            "prompt": outcome.prompt,
            "records": outcome.records,
            "comparison": outcome.comparison(),
        });

        let file = File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &payload)
            .with_context(|| format!("Failed to write JSON export: {}", path.display()))?;

        Ok(())
    }
}
