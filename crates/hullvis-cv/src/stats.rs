//! Run statistics for the demos.

use anyhow::Context;
use serde::Serialize;
use std::path::Path;

use crate::Result;

/// Summary of a hull demo run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub frames: usize,
    pub points: usize,
    pub hull_vertices: usize,
    pub collisions: usize,
    pub processing_time_ms: u64,
}

impl RunStats {
    /// Export the stats as pretty-printed JSON.
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run stats")?;

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write JSON to: {:?}", path.as_ref()))?;

        Ok(())
    }
}
