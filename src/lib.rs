pub mod config;
pub mod error;
pub mod export;
pub mod names;
pub mod pagination;
pub mod spotify;

pub use config::Config;
pub use error::{AppError, Result};
pub use export::{ExportMode, ExportOptions, ExportSummary, ExportWriter, PlaylistExporter};
pub use spotify::{PlaylistApi, SpotifyClient};
