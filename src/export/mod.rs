pub mod collector;
pub mod filter;
pub mod orchestrator;
pub mod records;
pub mod report;
pub mod writer;

pub use collector::PlaylistCollector;
pub use filter::filter_by_name;
pub use orchestrator::{ExportMode, ExportOptions, PlaylistExporter};
pub use records::{PlaylistRecord, PlaylistSummary, TrackRecord};
pub use report::{CleanReport, ExportSummary};
pub use writer::ExportWriter;
