//! Constants module for the Samehadaku API
//!
//! Contains endpoint URL builders that use the base URL from configuration,
//! and the fixed markers used while resolving video sources.

/// URL builder functions for all upstream pages
pub mod endpoints {
    /// Search listing page. The query is concatenated as-is.
    pub fn search(base_url: &str, query: &str, page: &str) -> String {
        format!("{}/page/{}/?s={}", base_url, page, query)
    }

    /// Anime detail page URL
    pub fn anime(base_url: &str, id: &str) -> String {
        format!("{}/anime/{}", base_url, id)
    }

    /// Source page listing the download mirrors of one episode.
    ///
    /// The path keeps the literal `$` in front of the id.
    pub fn source(base_url: &str, id: &str) -> String {
        format!("{}/${}/", base_url, id)
    }

    /// Prefix stripped from search result links to obtain an anime id
    pub fn anime_prefix(base_url: &str) -> String {
        format!("{}/anime/", base_url)
    }

    /// Prefix stripped from episode links to obtain an episode id
    pub fn episode_prefix(base_url: &str) -> String {
        format!("{}/", base_url)
    }
}

/// Markers used by the source resolver
pub mod source {
    /// Visible anchor text of the only hosting provider that is followed
    pub const HOST_LABEL: &str = "Krakenfiles";

    /// Substring a media `src` must contain to be accepted
    pub const VIDEO_MARKER: &str = ".mp4";

    /// Scheme prepended to protocol-relative media URLs
    pub const SCHEME: &str = "https:";
}

/// Default page requested when the caller gives none
pub const DEFAULT_PAGE: &str = "1";
