//! Wire shapes of the Spotify Web API responses the exporter reads.
//!
//! Optional remote fields are explicit `Option`s or `#[serde(default)]`
//! fields; the collector decides what an absent value becomes.

use std::collections::HashMap;

use serde::Deserialize;

/// One page of a cursor-paginated listing. `next` is the absolute URL of the
/// following page, absent on the last one.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next: Option<String>) -> Self {
        Self { items, next }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemotePlaylist {
    pub id: String,
    pub name: String,
    pub owner: RemoteOwner,
    /// Defaults to empty when absent or null.
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to empty when absent or null.
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub tracks: Option<RemoteTracksRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteOwner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTracksRef {
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemotePlaylistItem {
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub added_by: Option<RemoteUser>,
    /// Null for tracks that were removed or are unavailable.
    #[serde(default)]
    pub track: Option<RemoteTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<RemoteArtist>,
    #[serde(default)]
    pub album: Option<RemoteAlbum>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAlbum {
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
}
