use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::export::collector::PlaylistCollector;
use crate::export::filter::{filter_by_name, is_active};
use crate::export::report::ExportSummary;
use crate::export::writer::ExportWriter;
use crate::spotify::api::PlaylistApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// One file per playlist.
    Split,
    /// One file holding every selected playlist.
    Combined,
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub mode: ExportMode,
    pub name_filter: Option<String>,
    pub clean: bool,
    pub show_progress: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: ExportMode::Combined,
            name_filter: None,
            clean: false,
            show_progress: false,
        }
    }
}

/// Runs one export: clean, list, filter, fetch tracks, write, report.
pub struct PlaylistExporter<'a, A: PlaylistApi> {
    collector: PlaylistCollector<'a, A>,
    writer: ExportWriter,
}

impl<'a, A: PlaylistApi> PlaylistExporter<'a, A> {
    pub fn new(api: &'a A, writer: ExportWriter) -> Self {
        Self {
            collector: PlaylistCollector::new(api),
            writer,
        }
    }

    pub async fn run(&self, options: &ExportOptions) -> Result<ExportSummary> {
        let started = Instant::now();
        let mut summary = ExportSummary::default();

        self.writer.prepare()?;
        if options.clean {
            summary.clean = Some(self.writer.clean());
        }

        let playlists = self.collector.list_playlists().await?;

        let name_filter = options.name_filter.as_deref();
        let filtered = is_active(name_filter);
        let selected = filter_by_name(playlists, name_filter);

        if filtered && selected.is_empty() {
            error!(
                "No playlist named {:?} found, nothing exported",
                name_filter.unwrap_or_default()
            );
            summary.elapsed = started.elapsed();
            log_totals(&summary);
            return Ok(summary);
        }

        let pb = progress_bar(selected.len(), options.show_progress);
        let mut combined = Vec::new();

        for playlist in selected {
            info!(
                "Exporting playlist: '{}' (Owner: {} [{}])",
                playlist.name, playlist.owner_display_name, playlist.owner_id
            );
            pb.set_message(playlist.name.clone());

            let tracks = self.collector.list_tracks(&playlist.id).await?;
            summary.record_playlist(tracks.len());
            let record = playlist.with_tracks(tracks);

            match options.mode {
                ExportMode::Split => {
                    let path = self.writer.write_playlist(&record)?;
                    if summary.files_written.contains(&path) {
                        warn!(
                            "Playlist '{}' overwrote {} written earlier in this run",
                            record.name,
                            path.display()
                        );
                    } else {
                        summary.files_written.push(path);
                    }
                }
                ExportMode::Combined => combined.push(record),
            }
            pb.inc(1);
        }

        pb.finish_and_clear();

        if options.mode == ExportMode::Combined {
            let path = self.writer.write_combined(&combined, filtered)?;
            summary.files_written.push(path);
        }

        summary.elapsed = started.elapsed();
        log_totals(&summary);
        Ok(summary)
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let template = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

fn log_totals(summary: &ExportSummary) {
    info!(
        "Export completed in {:.2} seconds",
        summary.elapsed.as_secs_f64()
    );
    info!("Total playlists exported: {}", summary.playlists_exported);
    info!("Total tracks exported: {}", summary.tracks_exported);
}
