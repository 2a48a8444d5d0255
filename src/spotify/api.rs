use async_trait::async_trait;

use crate::error::Result;
use crate::spotify::models::{Page, RemotePlaylist, RemotePlaylistItem};

/// Read-only access to the playlist listings of the authenticated account.
///
/// Cursors are the `next` values of previously returned pages. Implementations
/// return `Ok(None)` once a cursor no longer yields a page.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    async fn playlists_page(&self) -> Result<Page<RemotePlaylist>>;

    async fn next_playlists_page(&self, cursor: String) -> Result<Option<Page<RemotePlaylist>>>;

    async fn playlist_items_page(&self, playlist_id: &str) -> Result<Page<RemotePlaylistItem>>;

    async fn next_playlist_items_page(
        &self,
        cursor: String,
    ) -> Result<Option<Page<RemotePlaylistItem>>>;
}
