//! Recorded report streams stored as TOML.
//!
//! ```toml
//! [[report]]
//! x = 120.0
//! y = 80.5
//! pressure = 0
//! buttons = [true, false]
//!
//! [[report]]
//! kind = "aux"
//! values = [1]
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::report::{ButtonMask, OtherReport, Point, Report, TabletReport};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TraceFile {
    #[serde(default)]
    report: Vec<TraceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraceEntry {
    Tablet(TabletEntry),
    Other(OtherReport),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TabletEntry {
    x: f32,
    y: f32,
    #[serde(default)]
    pressure: u32,
    buttons: ButtonMask,
}

impl From<TraceEntry> for Report {
    fn from(entry: TraceEntry) -> Self {
        match entry {
            TraceEntry::Tablet(t) => Report::Tablet(TabletReport::new(Point::new(t.x, t.y), t.pressure, t.buttons)),
            TraceEntry::Other(o) => Report::Other(o),
        }
    }
}

pub fn parse(content: &str) -> Result<Vec<Report>, toml::de::Error> {
    let file: TraceFile = toml::from_str(content)?;
    Ok(file.report.into_iter().map(Report::from).collect())
}

pub fn load_from_path(path: &Path) -> Result<Vec<Report>, Box<dyn std::error::Error + Send + Sync>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read trace {}: {}", path.display(), e))?;
    let reports = parse(&content).map_err(|e| format!("Failed to parse trace {}: {}", path.display(), e))?;
    log::debug!("Loaded {} reports from {}", reports.len(), path.display());
    Ok(reports)
}
