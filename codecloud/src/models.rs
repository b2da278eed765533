// src/models.rs
mod frequency_table;
mod scan_stats;

pub use frequency_table::FrequencyTable;
pub use scan_stats::ScanStats;
