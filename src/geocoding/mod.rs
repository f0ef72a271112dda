//! Geocoding Collaborators Module
//!
//! Two independent external geocoders, neither part of the core logic:
//!
//! - **Nominatim** (OpenStreetMap) translates a city/state pair into
//!   coordinates. Free, no credential, but rate-limited by usage policy:
//!   callers issuing repeated lookups must serialize them with the fixed
//!   pause this module provides, not parallelize.
//! - **Mapbox** translates a postal code into coordinates and requires a
//!   token from the environment.
//!
//! Unlike the store paths, geocoding requests carry a short timeout; a slow
//! provider degrades one lookup, never a whole request pipeline.
//!
//! ## Submodules
//! - **`service`**: The geocoder client and response-extraction helpers.
//! - **`handlers`**: The `/api/coordinates` endpoint.
//! - **`types`**: Coordinate and provider wire formats.

pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
