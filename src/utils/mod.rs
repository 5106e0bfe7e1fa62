//! Utility modules for timing, batch runs, export and terminal output.

pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use runner::{export_csv, export_json, run_rounds, RoundsReport};
pub use timer::{compute_stats, round_to, to_millis, TimingStats};
