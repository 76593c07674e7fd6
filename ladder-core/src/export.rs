//! Export — CSV and JSON renderings of a computed ladder.
//!
//! - **CSV**: display-rounded rows, one per level, for spreadsheets.
//! - **JSON**: full-precision table with schema version and fingerprint.
//!
//! Unknown schema versions are rejected on import.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::LadderTable;
use crate::fingerprint::LadderHash;

/// Current schema version for exported JSON.
pub const SCHEMA_VERSION: u32 = 1;

pub const CSV_HEADER: [&str; 9] = [
    "index",
    "price",
    "lot",
    "cumulative_lot",
    "break_even",
    "floating_pnl",
    "exit_distance",
    "gain_to_target",
    "reversal_gain",
];

/// JSON document wrapping a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderExport {
    pub schema_version: u32,
    pub fingerprint: LadderHash,
    pub table: LadderTable,
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the rounded rows as CSV.
pub fn export_csv(table: &LadderTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for r in table.rounded() {
        wtr.write_record([
            r.index.to_string(),
            r.price.to_string(),
            r.lot.to_string(),
            r.cumulative_lot.to_string(),
            r.break_even.to_string(),
            r.floating_pnl.to_string(),
            r.exit_distance.to_string(),
            r.gain_to_target.to_string(),
            r.reversal_gain.to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a table to pretty JSON at full precision.
pub fn export_json(table: &LadderTable) -> Result<String> {
    let doc = LadderExport {
        schema_version: SCHEMA_VERSION,
        fingerprint: table.fingerprint(),
        table: table.clone(),
    };
    serde_json::to_string_pretty(&doc).context("failed to serialize ladder to JSON")
}

/// Parse exported JSON, rejecting newer schemas and tampered tables.
pub fn import_json(json: &str) -> Result<LadderExport> {
    let doc: LadderExport =
        serde_json::from_str(json).context("failed to deserialize ladder JSON")?;
    if doc.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            doc.schema_version,
            SCHEMA_VERSION
        );
    }
    let actual = doc.table.fingerprint();
    if actual != doc.fingerprint {
        bail!("fingerprint mismatch: file says {}, table hashes to {}", doc.fingerprint, actual);
    }
    Ok(doc)
}
