//! Data models for the Samehadaku API
//!
//! Records extracted from the upstream pages and the informational payloads
//! returned by the HTTP handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One anime found on a search listing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SearchResultItem {
    /// Derived from the result link (e.g., "naruto-shippuden")
    pub id: String,
    /// From the anchor `title` attribute
    pub title: String,
    /// From img.anmsa, `null` when the anchor has no thumbnail
    pub image: Option<String>,
}

/// A page of search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SearchResponse {
    /// Free-text page indicator (e.g., "Page 1 of 21")
    pub page: String,
    pub results: Vec<SearchResultItem>,
}

/// Represents an episode entry from the episode list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EpisodeItem {
    /// From .eps a
    pub number: String,
    /// Derived from the episode link (e.g., "naruto-episode-1")
    pub id: String,
    /// From .lchx a
    pub title: String,
    /// From .date
    pub date: String,
}

/// Represents an anime detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AnimeDetail {
    /// The requested id, echoed back
    pub id: String,
    /// From .infox h1
    pub title: String,
    /// From .thumb img
    pub image: String,
    /// From .infox .desc
    pub synopsis: String,
    pub episodes: Vec<EpisodeItem>,
}

/// Download links for one quality tier on a source page
#[derive(Debug, Clone, PartialEq)]
pub struct QualityCandidate {
    pub quality: String,
    pub links: Vec<String>,
}

/// A playable video URL for one quality tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VideoSource {
    /// Quality label (e.g., "MP4 720p")
    pub quality: String,
    /// Absolute media URL
    pub url: String,
}

/// Root route payload listing the available routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub route: Vec<String>,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to Samehadaku API".to_string(),
            route: vec![
                "/search/:query?p={page}".to_string(),
                "/anime/:id".to_string(),
                "/source/:id".to_string(),
            ],
        }
    }
}

/// Usage hint returned by the search route when no query is given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SearchUsage {
    pub intro: String,
    pub usage: Vec<String>,
}

impl Default for SearchUsage {
    fn default() -> Self {
        Self {
            intro: "Welcome to search route".to_string(),
            usage: vec![
                "To search for an anime, use the 'q' query parameter".to_string(),
                "To specify the page number, use the 'p' query parameter".to_string(),
            ],
        }
    }
}

/// Informational `{ "message": ... }` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// ISO timestamp of the check
    pub timestamp: String,
}
