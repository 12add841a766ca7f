//! API Module
//!
//! Cached HTTP client for the PokeAPI REST service.
//!
//! # Endpoints
//! - `GET /location-area/` - Paged location area listing
//! - `GET /location-area/{name}` - Location area with encounters
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
