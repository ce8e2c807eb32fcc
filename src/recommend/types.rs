use serde::{Deserialize, Serialize};

/// Body of `POST /api/recommend`.
///
/// Coordinates are optional at the type level so that a missing value
/// can be reported as a validation error instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl RecommendationRequest {
    pub fn new(category: &str, keyword: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            category: category.to_string(),
            keyword: keyword.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Both coordinates, or `None` if either is absent, zero or not finite.
    /// Zero is treated as absent.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        fn usable(v: Option<f64>) -> Option<f64> {
            v.filter(|v| v.is_finite() && *v != 0.0)
        }
        Some((usable(self.latitude)?, usable(self.longitude)?))
    }
}

/// A point of interest as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Meant to be short (about 20 characters); not enforced.
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
}

/// `{ places: [...] }`. The service relays the model's entries as raw JSON
/// once they have been checked against `Place`; clients decode them typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse<P = Place> {
    pub places: Vec<P>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let req = RecommendationRequest::new("ramen", "river picnic", 37.5665, 126.978);
        assert_eq!(req.coordinates(), Some((37.5665, 126.978)));
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let req = RecommendationRequest::new("ramen", "", 0.0, 126.978);
        assert_eq!(req.coordinates(), None);
        let req = RecommendationRequest::new("ramen", "", 37.5, 0.0);
        assert_eq!(req.coordinates(), None);
    }

    #[test]
    fn test_missing_fields_decode() {
        let req: RecommendationRequest = serde_json::from_str(r#"{"latitude": 37.5}"#).unwrap();
        assert_eq!(req.category, "");
        assert_eq!(req.longitude, None);
        assert_eq!(req.coordinates(), None);

        let req: RecommendationRequest =
            serde_json::from_str(r#"{"latitude": null, "longitude": 126.9}"#).unwrap();
        assert_eq!(req.coordinates(), None);
    }

    #[test]
    fn test_error_body_omits_empty_details() {
        let body = ErrorBody {
            error: "location information is required".to_string(),
            details: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"location information is required"}"#
        );
    }
}
