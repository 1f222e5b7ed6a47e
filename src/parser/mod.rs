//! Parser module for extracting structured data from HTML
//!
//! This module turns the pages fetched from the upstream site into the
//! records served by the API. Field locations live in [`rules`].

pub mod rules;

use scraper::Html;

use crate::constants::{endpoints, source, DEFAULT_PAGE};
use crate::models::{AnimeDetail, EpisodeItem, QualityCandidate, SearchResponse, SearchResultItem};
use rules::{derive_id, selector, text_of};

/// Parse a search listing page
///
/// Anchors under `.site-main` without a non-empty `title` attribute are
/// skipped. Results keep document order.
///
/// # Arguments
/// * `html` - The HTML content to parse
/// * `base_url` - Site base URL, used to derive result ids
pub fn parse_search_page(html: &str, base_url: &str) -> SearchResponse {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let page = rules::PAGE_INDICATOR
        .compile()
        .extract(root)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| DEFAULT_PAGE.to_string());

    let anchor_selector = selector(rules::SEARCH_ANCHORS);
    let href_rule = rules::SEARCH_HREF.compile();
    let title_rule = rules::SEARCH_TITLE.compile();
    let image_rule = rules::SEARCH_IMAGE.compile();
    let prefix = endpoints::anime_prefix(base_url);

    let results = document
        .select(&anchor_selector)
        .filter_map(|anchor| {
            let title = title_rule.extract(anchor).filter(|t| !t.is_empty())?;
            let href = href_rule.extract(anchor).unwrap_or_default();

            Some(SearchResultItem {
                id: derive_id(&href, &prefix),
                title,
                image: image_rule.extract(anchor),
            })
        })
        .collect();

    SearchResponse { page, results }
}

/// Parse an anime detail page
///
/// # Arguments
/// * `html` - The HTML content to parse
/// * `id` - The requested anime id, echoed into the result
/// * `base_url` - Site base URL, used to derive episode ids
///
/// # Returns
/// `None` when an episode entry has no link to derive its id from
pub fn parse_anime_detail(html: &str, id: &str, base_url: &str) -> Option<AnimeDetail> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let title = rules::DETAIL_TITLE.compile().extract(root).unwrap_or_default();
    let image = rules::DETAIL_IMAGE.compile().extract(root).unwrap_or_default();
    let synopsis = rules::DETAIL_SYNOPSIS.compile().extract(root).unwrap_or_default();

    let item_selector = selector(rules::EPISODE_ITEMS);
    let number_rule = rules::EPISODE_NUMBER.compile();
    let link_rule = rules::EPISODE_LINK.compile();
    let title_rule = rules::EPISODE_TITLE.compile();
    let date_rule = rules::EPISODE_DATE.compile();
    let prefix = endpoints::episode_prefix(base_url);

    let episodes = document
        .select(&item_selector)
        .map(|li| {
            let link = link_rule.extract(li)?;
            Some(EpisodeItem {
                number: number_rule.extract(li).unwrap_or_default(),
                id: derive_id(&link, &prefix),
                title: title_rule.extract(li).unwrap_or_default(),
                date: date_rule.extract(li).unwrap_or_default(),
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(AnimeDetail {
        id: id.to_string(),
        title,
        image,
        synopsis,
        episodes,
    })
}

/// Parse the quality tiers of a source page
///
/// Each `ul li` with a non-empty `strong` label yields one candidate holding
/// the hrefs of its hosting links whose visible text is exactly the
/// followed provider label.
pub fn parse_quality_candidates(html: &str) -> Vec<QualityCandidate> {
    let document = Html::parse_document(html);

    let item_selector = selector(rules::QUALITY_ITEMS);
    let anchor_selector = selector(rules::HOST_ANCHORS);
    let label_rule = rules::QUALITY_LABEL.compile();

    document
        .select(&item_selector)
        .filter_map(|li| {
            let quality = label_rule.extract(li).filter(|q| !q.is_empty())?;
            let links = li
                .select(&anchor_selector)
                .filter(|a| text_of(*a).trim() == source::HOST_LABEL)
                .filter_map(|a| a.value().attr("href"))
                .map(str::to_string)
                .collect();

            Some(QualityCandidate { quality, links })
        })
        .collect()
}

/// Read the media `src` from a hosting page's video player
pub fn parse_media_source(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    rules::MEDIA_SOURCE.compile().extract(document.root_element())
}

/// Turn a protocol-relative media `src` into a playable URL
///
/// Returns `None` unless `src` contains the video file marker.
pub fn playable_url(src: &str) -> Option<String> {
    src.contains(source::VIDEO_MARKER)
        .then(|| format!("{}{}", source::SCHEME, src))
}
