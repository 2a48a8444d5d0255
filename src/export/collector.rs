use tracing::{debug, info};

use crate::error::Result;
use crate::export::records::{PlaylistSummary, TrackRecord};
use crate::pagination::drain_pages;
use crate::spotify::api::PlaylistApi;
use crate::spotify::models::{RemotePlaylist, RemoteTrack, RemoteUser};

/// Reads playlists and their tracks from the account, one request at a time.
pub struct PlaylistCollector<'a, A: PlaylistApi> {
    api: &'a A,
}

impl<'a, A: PlaylistApi> PlaylistCollector<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn list_playlists(&self) -> Result<Vec<PlaylistSummary>> {
        let api = self.api;
        let first = api.playlists_page().await?;
        let raw = drain_pages(first, move |cursor| api.next_playlists_page(cursor)).await?;

        let playlists: Vec<PlaylistSummary> = raw.into_iter().map(PlaylistSummary::from).collect();
        info!("Retrieved {} playlists from account", playlists.len());
        Ok(playlists)
    }

    /// Fetch every track of a playlist in remote order.
    ///
    /// Items without a track (removed or unavailable) are skipped and do not
    /// take a position, so positions stay dense from 0.
    pub async fn list_tracks(&self, playlist_id: &str) -> Result<Vec<TrackRecord>> {
        let api = self.api;
        let first = api.playlist_items_page(playlist_id).await?;
        let items = drain_pages(first, move |cursor| api.next_playlist_items_page(cursor)).await?;

        let mut tracks = Vec::with_capacity(items.len());
        let mut skipped = 0usize;

        for item in items {
            let Some(track) = item.track else {
                skipped += 1;
                continue;
            };
            let position = tracks.len();
            tracks.push(project_track(position, track, item.added_at, item.added_by));
        }

        if skipped > 0 {
            debug!("Skipped {} unavailable items in playlist {}", skipped, playlist_id);
        }
        debug!("Retrieved {} tracks for playlist ID {}", tracks.len(), playlist_id);
        Ok(tracks)
    }
}

impl From<RemotePlaylist> for PlaylistSummary {
    fn from(playlist: RemotePlaylist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            owner_id: playlist.owner.id,
            owner_display_name: playlist.owner.display_name.unwrap_or_default(),
            description: playlist.description.unwrap_or_default(),
            snapshot_id: playlist.snapshot_id.unwrap_or_default(),
            track_total: playlist.tracks.map(|t| t.total).unwrap_or_default(),
        }
    }
}

fn project_track(
    position: usize,
    track: RemoteTrack,
    added_at: Option<String>,
    added_by: Option<RemoteUser>,
) -> TrackRecord {
    let artist = track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let (album, album_release_date) = match track.album {
        Some(album) => (album.name, album.release_date.unwrap_or_default()),
        None => (String::new(), String::new()),
    };

    let mut external_urls = track.external_urls;

    TrackRecord {
        position,
        name: track.name,
        artist,
        album,
        album_release_date,
        spotify_url: external_urls.remove("spotify").unwrap_or_default(),
        added_at: added_at.unwrap_or_default(),
        added_by: added_by.map(|user| user.id),
    }
}
