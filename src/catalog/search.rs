// ============================================================================
// Catalog Search
// ============================================================================
//
// Track search against the third-party catalog. Failures propagate as-is;
// the caller decides how they surface.
//
// ============================================================================

use serde::{Deserialize, Serialize};

use recall_config::CatalogConfig;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackSearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
struct TrackItem {
    id: String,
    name: String,
    #[serde(default)]
    artists: Vec<ArtistRef>,
    album: AlbumRef,
    preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArtistRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AlbumRef {
    name: String,
    #[serde(default)]
    images: Vec<ImageRef>,
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    url: String,
}

pub struct CatalogSearchClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogSearchClient {
    pub fn new(http: reqwest::Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    /// Search tracks by artist name using a brokered access token
    pub async fn search_by_artist(
        &self,
        artist: &str,
        access_token: &str,
    ) -> AppResult<Vec<Song>> {
        let limit = self.config.search_limit.to_string();
        let response: TrackSearchResponse = self
            .http
            .get(&self.config.search_url)
            .bearer_auth(access_token)
            .query(&[("q", artist), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(map_tracks(response))
    }
}

fn map_tracks(response: TrackSearchResponse) -> Vec<Song> {
    response
        .tracks
        .items
        .into_iter()
        .map(|track| Song {
            id: track.id,
            title: track.name,
            // First credited artist only
            artist: track
                .artists
                .into_iter()
                .next()
                .map(|artist| artist.name)
                .unwrap_or_default(),
            album: track.album.name,
            image_url: track.album.images.into_iter().next().map(|image| image.url),
            preview_url: track.preview_url,
        })
        .collect()
}
