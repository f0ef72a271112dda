//! Geocoding Module Tests
//!
//! Validates response extraction for both providers and the token
//! precondition of the postal-code path.
//!
//! ## Test Scopes
//! - **Nominatim**: String coordinates parse; empty or garbage results
//!   resolve to None.
//! - **Mapbox**: The (longitude, latitude) center reorders into the
//!   latitude/longitude pair; an empty feature list means unresolved.
//! - **Token**: A token-less geocoder rejects postal-code lookups before any
//!   request.

#[cfg(test)]
mod tests {
    use crate::geocoding::service::{
        GeocodeError, Geocoder, RATE_LIMIT_PAUSE, first_feature_center, first_place_coordinates,
    };
    use crate::geocoding::types::{Coordinates, MapboxResponse, NominatimPlace};
    use std::time::Duration;

    // ============================================================
    // NOMINATIM RESPONSE EXTRACTION
    // ============================================================

    #[test]
    fn test_first_place_parses_string_coordinates() {
        let places = vec![NominatimPlace {
            lat: "40.7128".to_string(),
            lon: "-74.0060".to_string(),
        }];

        assert_eq!(first_place_coordinates(&places), Some((40.7128, -74.0060)));
    }

    #[test]
    fn test_first_place_takes_only_the_first_result() {
        let places = vec![
            NominatimPlace {
                lat: "33.5".to_string(),
                lon: "-86.8".to_string(),
            },
            NominatimPlace {
                lat: "0".to_string(),
                lon: "0".to_string(),
            },
        ];

        assert_eq!(first_place_coordinates(&places), Some((33.5, -86.8)));
    }

    #[test]
    fn test_empty_results_resolve_to_none() {
        assert_eq!(first_place_coordinates(&[]), None);
    }

    #[test]
    fn test_unparseable_coordinates_resolve_to_none() {
        let places = vec![NominatimPlace {
            lat: "not-a-latitude".to_string(),
            lon: "-74.0".to_string(),
        }];

        assert_eq!(first_place_coordinates(&places), None);
    }

    #[test]
    fn test_nominatim_wire_format_decodes() {
        let places: Vec<NominatimPlace> =
            serde_json::from_str(r#"[{"lat": "40.71", "lon": "-74.00", "display_name": "NYC"}]"#)
                .expect("decode");

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "40.71");
    }

    // ============================================================
    // MAPBOX RESPONSE EXTRACTION
    // ============================================================

    #[test]
    fn test_mapbox_center_reorders_to_latitude_longitude() {
        let response: MapboxResponse =
            serde_json::from_str(r#"{"features": [{"center": [-86.8, 33.5]}]}"#).expect("decode");

        assert_eq!(
            first_feature_center(&response),
            Some(Coordinates {
                latitude: 33.5,
                longitude: -86.8,
            })
        );
    }

    #[test]
    fn test_mapbox_empty_features_is_unresolved() {
        let response: MapboxResponse = serde_json::from_str(r#"{"features": []}"#).expect("decode");
        assert_eq!(first_feature_center(&response), None);

        let response: MapboxResponse = serde_json::from_str("{}").expect("decode");
        assert_eq!(first_feature_center(&response), None);
    }

    #[test]
    fn test_coordinates_serialize_as_latitude_longitude() {
        let json = serde_json::to_value(Coordinates {
            latitude: 33.5,
            longitude: -86.8,
        })
        .expect("encode");

        assert_eq!(json["latitude"], 33.5);
        assert_eq!(json["longitude"], -86.8);
    }

    // ============================================================
    // TOKEN PRECONDITION
    // ============================================================

    #[tokio::test]
    async fn test_zip_lookup_without_token_fails_before_any_request() {
        let geocoder = Geocoder::new(None).expect("client construction is offline");

        match geocoder.zip_to_coordinates("35004").await {
            Err(GeocodeError::MissingToken) => {}
            other => panic!("Expected MissingToken, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_rate_limit_pause_is_one_second() {
        assert_eq!(RATE_LIMIT_PAUSE, Duration::from_secs(1));
    }
}
