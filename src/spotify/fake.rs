//! In-memory `PlaylistApi` serving scripted pages.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::spotify::api::PlaylistApi;
use crate::spotify::models::{
    Page, RemoteAlbum, RemoteArtist, RemoteOwner, RemotePlaylist, RemotePlaylistItem, RemoteTrack,
    RemoteTracksRef, RemoteUser,
};

#[derive(Default)]
pub struct FakePlaylistApi {
    playlist_pages: HashMap<String, Page<RemotePlaylist>>,
    item_pages: HashMap<String, Page<RemotePlaylistItem>>,
    failing_playlist: Option<String>,
    calls: Mutex<Vec<String>>,
}

fn chain<T>(prefix: &str, pages: Vec<Vec<T>>) -> HashMap<String, Page<T>> {
    let count = pages.len().max(1);
    let mut pages = pages;
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            let next = (i + 1 < count).then(|| format!("{}#{}", prefix, i + 1));
            (format!("{}#{}", prefix, i), Page::new(items, next))
        })
        .collect()
}

impl FakePlaylistApi {
    pub fn new(playlist_pages: Vec<Vec<RemotePlaylist>>) -> Self {
        Self {
            playlist_pages: chain("playlists", playlist_pages),
            ..Default::default()
        }
    }

    pub fn with_items(mut self, playlist_id: &str, pages: Vec<Vec<RemotePlaylistItem>>) -> Self {
        self.item_pages
            .extend(chain(&format!("items:{}", playlist_id), pages));
        self
    }

    pub fn failing_items(mut self, playlist_id: &str) -> Self {
        self.failing_playlist = Some(playlist_id.to_string());
        self
    }

    /// Every request served so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PlaylistApi for FakePlaylistApi {
    async fn playlists_page(&self) -> Result<Page<RemotePlaylist>> {
        self.record("playlists#0".to_string());
        Ok(self.playlist_pages["playlists#0"].clone())
    }

    async fn next_playlists_page(&self, cursor: String) -> Result<Option<Page<RemotePlaylist>>> {
        self.record(cursor.clone());
        Ok(self.playlist_pages.get(&cursor).cloned())
    }

    async fn playlist_items_page(&self, playlist_id: &str) -> Result<Page<RemotePlaylistItem>> {
        let key = format!("items:{}#0", playlist_id);
        self.record(key.clone());
        if self.failing_playlist.as_deref() == Some(playlist_id) {
            return Err(AppError::Api {
                status: 401,
                message: "The access token expired".to_string(),
            });
        }
        Ok(self
            .item_pages
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Page::new(Vec::new(), None)))
    }

    async fn next_playlist_items_page(
        &self,
        cursor: String,
    ) -> Result<Option<Page<RemotePlaylistItem>>> {
        self.record(cursor.clone());
        Ok(self.item_pages.get(&cursor).cloned())
    }
}

pub fn remote_playlist(id: &str, name: &str) -> RemotePlaylist {
    RemotePlaylist {
        id: id.to_string(),
        name: name.to_string(),
        owner: RemoteOwner {
            id: "alice".to_string(),
            display_name: Some("Alice".to_string()),
        },
        description: None,
        snapshot_id: Some(format!("snap-{}", id)),
        tracks: Some(RemoteTracksRef { total: 0 }),
    }
}

pub fn remote_item(name: &str, artists: &[&str]) -> RemotePlaylistItem {
    RemotePlaylistItem {
        added_at: Some("2024-03-01T10:00:00Z".to_string()),
        added_by: Some(RemoteUser {
            id: "alice".to_string(),
        }),
        track: Some(RemoteTrack {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| RemoteArtist {
                    name: a.to_string(),
                })
                .collect(),
            album: Some(RemoteAlbum {
                name: format!("{} (Album)", name),
                release_date: Some("2001-07".to_string()),
            }),
            external_urls: HashMap::from([(
                "spotify".to_string(),
                format!("https://open.spotify.com/track/{}", name.to_lowercase()),
            )]),
        }),
    }
}

pub fn removed_item() -> RemotePlaylistItem {
    RemotePlaylistItem {
        added_at: Some("2024-03-01T10:00:00Z".to_string()),
        added_by: None,
        track: None,
    }
}
