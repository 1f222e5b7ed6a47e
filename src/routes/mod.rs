//! API Routes module for the Samehadaku API
//!
//! This module contains all HTTP route handlers for the public API endpoints.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::config::Config;
use crate::constants::{endpoints, DEFAULT_PAGE};
use crate::error::{AppError, AppResult};
use crate::models::{
    AnimeDetail, EpisodeItem, ErrorResponse, HealthResponse, MessageResponse, SearchResponse,
    SearchResultItem, SearchUsage, VideoSource, WelcomeResponse,
};
use crate::parser::{parse_anime_detail, parse_search_page};
use crate::resolver::SourceResolver;
use crate::scraper::Scraper;

/// Application state shared across handlers
pub struct AppState {
    pub scraper: Scraper,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, crate::scraper::ScraperError> {
        Ok(Self {
            scraper: Scraper::new()?,
            config,
        })
    }
}

/// GET / - List the available routes
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Available routes", body = WelcomeResponse)
    )
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse::default())
}

/// GET /health - Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Query parameters for search endpoint
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Page number (default: 1)
    pub p: Option<String>,
}

/// GET /search - Usage hint for the search route
#[utoipa::path(
    get,
    path = "/search",
    tag = "anime",
    responses(
        (status = 200, description = "Search usage", body = SearchUsage)
    )
)]
pub async fn search_usage() -> impl Responder {
    HttpResponse::Ok().json(SearchUsage::default())
}

/// GET /search/{query} - Search for anime
///
/// Returns the usage hint for a blank query and `{ "message": "No results
/// found" }` when the listing has no titled entries.
#[utoipa::path(
    get,
    path = "/search/{query}",
    tag = "anime",
    params(
        ("query" = String, Path, description = "Search keyword"),
        SearchQuery
    ),
    responses(
        (status = 200, description = "Search results, usage hint or no-results message", body = SearchResponse),
        (status = 500, description = "Upstream failure (plain text)", body = String)
    )
)]
pub async fn search_anime(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let keyword = path.into_inner();
    if keyword.is_empty() {
        return Ok(HttpResponse::Ok().json(SearchUsage::default()));
    }

    let page = query
        .p
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PAGE);

    info!("Searching for anime: {} (page {})", keyword, page);
    let url = endpoints::search(&data.config.base_url, &keyword, page);

    let result = data.scraper.fetch_page(&url).await.map_err(|e| {
        error!("Failed to search anime: {}", e);
        AppError::Server
    })?;

    let response = parse_search_page(&result.html, &data.config.base_url);
    info!("Parsed {} search results", response.results.len());

    if response.results.is_empty() {
        Ok(HttpResponse::Ok().json(MessageResponse::new("No results found")))
    } else {
        Ok(HttpResponse::Ok().json(response))
    }
}

/// GET /anime/{id} - Get anime detail with episodes
///
/// `synopsis` is read from the page's description block and is an empty
/// string when the page has none. Any fetch failure, or an episode entry
/// without a link, is reported as 404.
#[utoipa::path(
    get,
    path = "/anime/{id}",
    tag = "anime",
    params(
        ("id" = String, Path, description = "Anime id")
    ),
    responses(
        (status = 200, description = "Anime detail retrieved successfully", body = AnimeDetail),
        (status = 404, description = "Anime not found", body = MessageResponse)
    )
)]
pub async fn get_anime(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    info!("Fetching anime detail: {}", id);

    let url = endpoints::anime(&data.config.base_url, &id);
    let result = data.scraper.fetch_page(&url).await.map_err(|e| {
        warn!("Failed to fetch anime detail for {}: {}", id, e);
        AppError::not_found("Anime not found")
    })?;

    let detail = parse_anime_detail(&result.html, &id, &data.config.base_url).ok_or_else(|| {
        warn!("Episode without link on anime page {}", id);
        AppError::not_found("Anime not found")
    })?;
    info!("Parsed {} episodes for {}", detail.episodes.len(), id);

    Ok(HttpResponse::Ok().json(detail))
}

/// GET /source/{id} - Resolve playable video sources of an episode
///
/// Follows every hosting link on the episode's download list.
#[utoipa::path(
    get,
    path = "/source/{id}",
    tag = "anime",
    params(
        ("id" = String, Path, description = "Episode id")
    ),
    responses(
        (status = 200, description = "Playable video sources", body = Vec<VideoSource>),
        (status = 404, description = "No video source found", body = ErrorResponse),
        (status = 500, description = "Source page could not be fetched", body = ErrorResponse)
    )
)]
pub async fn get_source(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let resolver = SourceResolver::new(
        &data.scraper,
        &data.config.base_url,
        data.config.source_concurrency,
    );
    let sources = resolver.resolve(&id).await.inspect_err(|e| {
        error!("Failed to fetch source page for {}: {}", id, e);
    })?;

    if sources.is_empty() {
        return Err(AppError::NoVideoSource);
    }

    info!("Resolved {} video sources for {}", sources.len(), id);
    Ok(HttpResponse::Ok().json(sources))
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Samehadaku API",
        version = "0.1.0",
        description = "JSON API over samehadaku search, anime and video source pages",
        license(
            name = "MIT"
        )
    ),
    paths(
        index,
        health_check,
        search_usage,
        search_anime,
        get_anime,
        get_source
    ),
    components(
        schemas(
            WelcomeResponse,
            HealthResponse,
            SearchUsage,
            SearchResponse,
            SearchResultItem,
            AnimeDetail,
            EpisodeItem,
            VideoSource,
            MessageResponse,
            ErrorResponse,
            SearchQuery
        )
    ),
    tags(
        (name = "anime", description = "Anime data endpoints"),
        (name = "meta", description = "Service information")
    )
)]
pub struct ApiDoc;

/// Configure API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search_usage))
        .route("/search/", web::get().to(search_usage))
        .route("/search/{query}", web::get().to(search_anime))
        .route("/anime/{id}", web::get().to(get_anime))
        .route("/source/{id}", web::get().to(get_source));
}
