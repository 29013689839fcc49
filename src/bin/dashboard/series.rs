// Per-interval JSONL output, one line per interval for independent analysis

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use volume_engine::SimulationRun;

#[derive(Debug, Serialize)]
pub struct IntervalSnapshot {
    pub label: String,
    pub weight: f64,
    pub by_channel: BTreeMap<String, u32>,
    pub total: u32,
}

pub fn snapshots(run: &SimulationRun) -> Vec<IntervalSnapshot> {
    run.curve
        .iter()
        .zip(&run.table.rows)
        .map(|(point, row)| IntervalSnapshot {
            label: row.label.clone(),
            weight: point.weight,
            by_channel: run
                .table
                .channels
                .iter()
                .cloned()
                .zip(row.counts.iter().copied())
                .collect(),
            total: row.total,
        })
        .collect()
}

/// Write one JSON line per interval.
pub fn write_jsonl(path: &std::path::Path, run: &SimulationRun) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    for snapshot in snapshots(run) {
        let line = serde_json::to_string(&snapshot)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;
    }
    Ok(())
}
