pub mod api;
pub mod client;
pub mod models;

#[cfg(test)]
pub mod fake;

pub use api::PlaylistApi;
pub use client::SpotifyClient;
pub use models::{Page, RemotePlaylist, RemotePlaylistItem};
