//! Samehadaku API Library
//!
//! This library provides functionality for scraping anime data from
//! samehadaku and exposing it through REST API endpoints.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod routes;
pub mod scraper;
