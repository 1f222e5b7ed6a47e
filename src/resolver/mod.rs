//! Source resolver
//!
//! Follows every hosting link listed on an episode's source page and collects
//! the playable video URLs found on the hosting pages.

use futures::future;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::constants::endpoints;
use crate::models::{QualityCandidate, VideoSource};
use crate::parser::{parse_media_source, parse_quality_candidates, playable_url};
use crate::scraper::{Scraper, ScraperError};

/// Resolves episode ids into playable video sources
pub struct SourceResolver<'a> {
    scraper: &'a Scraper,
    base_url: &'a str,
    concurrency: usize,
}

impl<'a> SourceResolver<'a> {
    /// Create a resolver. `concurrency` bounds the number of hosting pages
    /// fetched at once; 1 fetches them strictly one after another.
    pub fn new(scraper: &'a Scraper, base_url: &'a str, concurrency: usize) -> Self {
        Self {
            scraper,
            base_url,
            concurrency: concurrency.max(1),
        }
    }

    /// Resolve all video sources for `id`, in source page order
    ///
    /// A failure to fetch the source page itself is returned as an error.
    /// Hosting pages that fail to load are logged and skipped.
    pub async fn resolve(&self, id: &str) -> Result<Vec<VideoSource>, ScraperError> {
        let url = endpoints::source(self.base_url, id);
        info!("Fetching source page: {}", url);

        let page = self.scraper.fetch_page(&url).await?;
        let candidates = parse_quality_candidates(&page.html);
        info!(
            "Found {} quality tiers with {} hosting links",
            candidates.len(),
            candidates.iter().map(|c| c.links.len()).sum::<usize>()
        );

        let this = self;
        let sources: Vec<VideoSource> = stream::iter(link_pairs(&candidates))
            .map(move |(quality, link)| this.resolve_link(quality, link))
            .buffered(self.concurrency)
            .filter_map(future::ready)
            .collect()
            .await;

        Ok(sources)
    }

    /// Fetch one hosting page and extract its playable URL, if any
    async fn resolve_link(&self, quality: &str, link: &str) -> Option<VideoSource> {
        let page = match self.scraper.fetch_page(link).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Error fetching {}: {}", link, e);
                return None;
            }
        };

        let src = parse_media_source(&page.html);
        debug!("Quality: {}, source URL: {:?}", quality, src);

        let url = playable_url(src.as_deref()?)?;
        Some(VideoSource {
            quality: quality.to_string(),
            url,
        })
    }
}

/// Flatten candidates into (quality, link) pairs, preserving document order
fn link_pairs(candidates: &[QualityCandidate]) -> Vec<(&str, &str)> {
    candidates
        .iter()
        .flat_map(|candidate| {
            candidate
                .links
                .iter()
                .map(move |link| (candidate.quality.as_str(), link.as_str()))
        })
        .collect()
}
