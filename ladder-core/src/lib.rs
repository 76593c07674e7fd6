//! Ladder Core — price ladder generation, lot sizing and cumulative position metrics.
//!
//! This crate contains the whole computation behind the ladder calculator:
//! - Domain types (direction, risk profile, price level rows)
//! - Immutable ladder configuration loaded from TOML
//! - Ladder generator (evenly spaced levels from a starting price)
//! - Two lot sizing strategies behind one trait (distance table, risk profile)
//! - Single-pass cumulative metrics (break-even, floating P&L, targets)
//! - Pipeline with endpoint and length validation
//! - CSV/JSON export and BLAKE3 table fingerprints
//!
//! Everything is a pure function of its inputs; there is no shared state.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod fingerprint;
pub mod ladder;
pub mod metrics;
pub mod sizers;

pub use config::{ConfigError, LadderConfig};
pub use domain::{Direction, DisplayRow, LotScaling, PriceLevel, RiskProfile};
pub use engine::{assign_and_compute, build_ladder, LadderRequest, LadderTable};
pub use error::LadderError;
pub use export::{export_csv, export_json, import_json, LadderExport};
pub use fingerprint::LadderHash;
pub use ladder::{expected_endpoint, generate_levels};
pub use metrics::compute_metrics;
pub use sizers::{DistanceSizing, LotSizingStrategy, ProfileSizing, SizingMode};
