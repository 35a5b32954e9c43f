//! Tjänster för lexikonet
//!
//! Innehåller affärslogik som inte hör hemma i UI eller databas.

pub mod export;
pub mod import;
pub mod stats;

pub use export::{ExportDocument, ExportFormat, ExportResult, ExportService, WordRecord};
pub use import::{ImportPreview, ImportResult, ImportService};
pub use stats::{StatsService, TextWordCount, VocabularyStats};
