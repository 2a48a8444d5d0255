use std::path::PathBuf;
use std::time::Duration;

/// Outcome of removing prior `*.json` exports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanReport {
    pub removed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub playlists_exported: usize,
    pub tracks_exported: usize,
    pub files_written: Vec<PathBuf>,
    pub clean: Option<CleanReport>,
    pub elapsed: Duration,
}

impl ExportSummary {
    pub fn record_playlist(&mut self, track_count: usize) {
        self.playlists_exported += 1;
        self.tracks_exported += track_count;
    }
}
