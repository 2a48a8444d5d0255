use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::export::records::PlaylistRecord;
use crate::export::report::CleanReport;
use crate::names::{sanitize_for_path_strict, sanitize_for_path_unicode};

const COMBINED_FILE_NAME: &str = "spotify_playlists.json";
const FILTERED_FILE_NAME: &str = "filtered_spotify_playlists.json";

/// Writes playlist exports as pretty-printed JSON into one directory.
pub struct ExportWriter {
    output_dir: PathBuf,
    split_prefix: String,
    single_prefix: String,
}

impl ExportWriter {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        split_prefix: impl Into<String>,
        single_prefix: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            split_prefix: split_prefix.into(),
            single_prefix: single_prefix.into(),
        }
    }

    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        info!("Output directory set to: {}", self.output_dir.display());
        Ok(())
    }

    /// Delete every `*.json` file directly inside the output directory.
    ///
    /// Failures are logged and counted; they never stop the remaining deletions.
    pub fn clean(&self) -> CleanReport {
        let mut report = CleanReport::default();

        let entries = match fs::read_dir(&self.output_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!(
                    "Failed to read output directory {}: {}",
                    self.output_dir.display(),
                    e
                );
                return report;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    report.failed += 1;
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!("Deleted {}", path.display());
                    report.removed += 1;
                }
                Err(e) => {
                    warn!("Failed to delete {}: {}", path.display(), e);
                    report.failed += 1;
                }
            }
        }

        info!(
            "Cleaned output directory: {} files removed, {} failures",
            report.removed, report.failed
        );
        report
    }

    /// File name used for a playlist in split mode. Falls back to the playlist
    /// id when nothing of the name survives sanitization.
    pub fn split_file_name(&self, playlist: &PlaylistRecord) -> String {
        let mut stem = sanitize_for_path_unicode(&playlist.name);
        if stem.is_empty() {
            warn!(
                "Playlist name {:?} is empty after sanitization, using id {}",
                playlist.name, playlist.id
            );
            stem = sanitize_for_path_strict(&playlist.id);
        }
        format!("{}{}.json", self.split_prefix, stem)
    }

    pub fn combined_file_name(&self, filtered: bool) -> String {
        let name = if filtered {
            FILTERED_FILE_NAME
        } else {
            COMBINED_FILE_NAME
        };
        format!("{}{}", self.single_prefix, name)
    }

    /// Write one playlist as a single-element array, replacing any file of the same name.
    pub fn write_playlist(&self, playlist: &PlaylistRecord) -> Result<PathBuf> {
        let path = self.output_dir.join(self.split_file_name(playlist));
        write_json(&path, &[playlist])?;
        info!("Saved playlist to {}", path.display());
        Ok(path)
    }

    pub fn write_combined(&self, playlists: &[PlaylistRecord], filtered: bool) -> Result<PathBuf> {
        let path = self.output_dir.join(self.combined_file_name(filtered));
        write_json(&path, playlists)?;
        info!("Export completed. File saved as {}", path.display());
        Ok(path)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    fs::write(path, buf)?;
    Ok(())
}
