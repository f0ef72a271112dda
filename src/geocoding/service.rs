use std::time::Duration;

use thiserror::Error;

use super::types::{Coordinates, MapboxResponse, NominatimPlace};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const MAPBOX_PLACES_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
const USER_AGENT: &str = "CLEP-School-Finder/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause between successive geocoding calls, per Nominatim's usage policy.
pub const RATE_LIMIT_PAUSE: Duration = Duration::from_secs(1);

/// Failure modes of the postal-code geocoder.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The Mapbox token is not configured.
    #[error("Geocoding token not configured")]
    MissingToken,

    /// The provider could not be reached or answered with an error.
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for both external geocoders.
///
/// Constructed once at startup and shared via an `Extension` layer. All
/// requests carry the identifying User-Agent and a 5-second timeout.
pub struct Geocoder {
    http: reqwest::Client,
    mapbox_token: Option<String>,
}

impl Geocoder {
    pub fn new(mapbox_token: Option<String>) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, mapbox_token })
    }

    /// Reads `MAPBOX_TOKEN`. A missing token is not fatal here; it surfaces
    /// when a postal-code lookup is attempted.
    pub fn from_env() -> Result<Self, GeocodeError> {
        let mapbox_token = std::env::var("MAPBOX_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        if mapbox_token.is_none() {
            tracing::warn!("MAPBOX_TOKEN not set; postal-code geocoding disabled");
        }
        Self::new(mapbox_token)
    }

    /// Geocodes a city/state pair via Nominatim.
    ///
    /// Best-effort: transport, status, and parse failures are logged and
    /// collapse to `None`.
    pub async fn geocode_city_state(&self, city: &str, state: &str) -> Option<(f64, f64)> {
        let query = format!("{}, {}, USA", city, state);

        let result = self
            .http
            .get(NOMINATIM_URL)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", "us"),
            ])
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!(
                    "Geocoding error for {}, {}: status {}",
                    city,
                    state,
                    response.status()
                );
                return None;
            }
            Err(err) => {
                tracing::warn!("Geocoding error for {}, {}: {}", city, state, err);
                return None;
            }
        };

        match response.json::<Vec<NominatimPlace>>().await {
            Ok(places) => first_place_coordinates(&places),
            Err(err) => {
                tracing::warn!("Geocoding parse error for {}, {}: {}", city, state, err);
                None
            }
        }
    }

    /// Waits out the provider's rate policy. Callers doing repeated lookups
    /// call this between them.
    pub async fn rate_limit_pause(&self) {
        tokio::time::sleep(RATE_LIMIT_PAUSE).await;
    }

    /// Geocodes a postal code via Mapbox. `Ok(None)` means the zip did not
    /// resolve to any place.
    pub async fn zip_to_coordinates(&self, zip: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let token = self.mapbox_token.as_deref().ok_or(GeocodeError::MissingToken)?;

        let url = format!("{}/{}.json", MAPBOX_PLACES_URL, zip);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("access_token", token),
                ("country", "US"),
                ("types", "postcode"),
                ("limit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: MapboxResponse = response.json().await?;
        Ok(first_feature_center(&body))
    }
}

/// Extracts coordinates from the first Nominatim result, parsing the string
/// fields. Unparseable coordinates count as unresolved.
pub fn first_place_coordinates(places: &[NominatimPlace]) -> Option<(f64, f64)> {
    let place = places.first()?;
    let lat = place.lat.parse().ok()?;
    let lon = place.lon.parse().ok()?;
    Some((lat, lon))
}

/// Extracts the first Mapbox feature's center, reordering (lon, lat) into
/// latitude/longitude.
pub fn first_feature_center(response: &MapboxResponse) -> Option<Coordinates> {
    response.features.first().map(|feature| Coordinates {
        latitude: feature.center[1],
        longitude: feature.center[0],
    })
}
