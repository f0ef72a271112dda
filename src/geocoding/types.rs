use serde::{Deserialize, Serialize};

/// A resolved geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One Nominatim search result. Coordinates arrive as strings on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
}

/// One Mapbox geocoding feature. `center` is ordered (longitude, latitude).
#[derive(Debug, Clone, Deserialize)]
pub struct MapboxFeature {
    pub center: [f64; 2],
}

/// Top-level Mapbox geocoding response.
#[derive(Debug, Clone, Deserialize)]
pub struct MapboxResponse {
    #[serde(default)]
    pub features: Vec<MapboxFeature>,
}
