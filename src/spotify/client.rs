use async_trait::async_trait;
use reqwest::Client;
use rspotify::{prelude::*, scopes, AuthCodeSpotify, Credentials, OAuth};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::spotify::api::PlaylistApi;
use crate::spotify::models::{Page, RemotePlaylist, RemotePlaylistItem};

const SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";
const PLAYLISTS_PAGE_LIMIT: &str = "50";
const ITEMS_PAGE_LIMIT: &str = "100";

/// Authenticated Spotify client.
///
/// OAuth (authorization code flow, token cache, refresh) is delegated to
/// rspotify; listing pages are fetched with reqwest so that each page's
/// `next` URL can be followed verbatim.
pub struct SpotifyClient {
    client: AuthCodeSpotify,
    http_client: Client,
    display_name: String,
}

impl SpotifyClient {
    pub async fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::new(&config.spotify_client_id, &config.spotify_client_secret);

        let oauth = OAuth {
            redirect_uri: config.spotify_redirect_uri.clone(),
            scopes: scopes!("playlist-read-private", "playlist-read-collaborative"),
            ..Default::default()
        };

        if let Some(parent) = config.token_cache_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let client = AuthCodeSpotify::with_config(
            creds,
            oauth,
            rspotify::Config {
                token_cached: true,
                cache_path: config.token_cache_path.clone(),
                ..Default::default()
            },
        );

        // Reuses the cached token when present, otherwise prompts for the redirect URL
        let auth_url = client.get_authorize_url(false)?;
        client.prompt_for_token(&auth_url).await?;

        let user = client.current_user().await?;
        let user_id = user.id.id().to_string();
        let display_name = user.display_name.unwrap_or_else(|| user_id.clone());

        info!("Successfully authenticated as Spotify user: {}", display_name);

        Ok(Self {
            client,
            http_client: Client::new(),
            display_name,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    async fn access_token(&self) -> Result<String> {
        let expired = {
            let token = self.client.get_token();
            let guard = token
                .lock()
                .await
                .map_err(|_| AppError::Auth("Token lock poisoned".into()))?;
            match guard.as_ref() {
                Some(token) => token.is_expired(),
                None => return Err(AppError::Auth("Not authenticated with Spotify".into())),
            }
        };

        if expired {
            debug!("Access token expired, refreshing");
            self.client.refresh_token().await?;
        }

        let token = self.client.get_token();
        let guard = token
            .lock()
            .await
            .map_err(|_| AppError::Auth("Token lock poisoned".into()))?;
        guard
            .as_ref()
            .map(|token| token.access_token.clone())
            .ok_or_else(|| AppError::Auth("Not authenticated with Spotify".into()))
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Page<T>> {
        let access_token = self.access_token().await?;

        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlaylistApi for SpotifyClient {
    async fn playlists_page(&self) -> Result<Page<RemotePlaylist>> {
        let url = format!("{}/me/playlists", SPOTIFY_API_BASE);
        self.get_page(&url, &[("limit", PLAYLISTS_PAGE_LIMIT)]).await
    }

    async fn next_playlists_page(&self, cursor: String) -> Result<Option<Page<RemotePlaylist>>> {
        self.get_page(&cursor, &[]).await.map(Some)
    }

    async fn playlist_items_page(&self, playlist_id: &str) -> Result<Page<RemotePlaylistItem>> {
        let url = format!(
            "{}/playlists/{}/tracks",
            SPOTIFY_API_BASE,
            urlencoding::encode(playlist_id)
        );
        self.get_page(
            &url,
            &[("limit", ITEMS_PAGE_LIMIT), ("additional_types", "track")],
        )
        .await
    }

    async fn next_playlist_items_page(
        &self,
        cursor: String,
    ) -> Result<Option<Page<RemotePlaylistItem>>> {
        self.get_page(&cursor, &[]).await.map(Some)
    }
}
