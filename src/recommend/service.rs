use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::error::{RecommendError, LOCATION_REQUIRED};
use super::extract::first_json_object;
use super::prompt::build_prompt;
use super::types::{Place, PlacesResponse, RecommendationRequest};
use crate::config::RecommendConfig;
use crate::llm::TextGenerator;

/// Runs one recommendation cycle per call. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct Recommender {
    generator: Arc<dyn TextGenerator>,
    settings: RecommendConfig,
}

impl Recommender {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: RecommendConfig) -> Self {
        Self {
            generator,
            settings,
        }
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<PlacesResponse<Value>, RecommendError> {
        let (latitude, longitude) = request
            .coordinates()
            .ok_or_else(|| RecommendError::Validation(LOCATION_REQUIRED.to_string()))?;

        info!(
            category = %request.category,
            latitude,
            longitude,
            "Recommend request"
        );

        let prompt = build_prompt(
            &self.settings,
            &request.category,
            &request.keyword,
            latitude,
            longitude,
        );

        let text = self.generator.generate(&prompt).await?;
        debug!(
            model = self.model_name(),
            reply = %text.chars().take(200).collect::<String>(),
            "Model reply"
        );

        let response = parse_places(&text)?;
        info!(count = response.places.len(), "Recommended places");

        Ok(response)
    }
}

/// Pull the place list out of raw model output.
///
/// The first balanced JSON object must decode, must hold a `places` array,
/// and every entry must be a `Place`. The entries are returned as the model
/// wrote them.
pub fn parse_places(text: &str) -> Result<PlacesResponse<Value>, RecommendError> {
    let span = first_json_object(text)?;
    let mut value: Value =
        serde_json::from_str(span).map_err(|e| RecommendError::Parse(e.to_string()))?;

    let places = match value.get_mut("places").map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(RecommendError::Shape("\"places\" is not an array".to_string())),
        None => return Err(RecommendError::Shape("missing \"places\" array".to_string())),
    };

    for (i, entry) in places.iter().enumerate() {
        Place::deserialize(entry)
            .map_err(|e| RecommendError::Shape(format!("place {}: {}", i, e)))?;
    }

    Ok(PlacesResponse { places })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeGenerator;

    fn ten_places() -> String {
        let places: Vec<String> = (0..10)
            .map(|i| {
                format!(
                    r#"{{"name":"Spot {i}","description":"nice spot","latitude":37.5{i},"longitude":126.97{i},"category":"ramen"}}"#
                )
            })
            .collect();
        format!("```json\n{{\"places\":[{}]}}\n```", places.join(","))
    }

    fn recommender(generator: Arc<FakeGenerator>) -> Recommender {
        Recommender::new(generator, RecommendConfig::default())
    }

    #[tokio::test]
    async fn test_success_preserves_order() {
        let generator = Arc::new(FakeGenerator::replying(ten_places()));
        let rec = recommender(generator.clone());

        let request = RecommendationRequest::new("ramen", "river picnic", 37.5665, 126.978);
        let response = rec.recommend(&request).await.unwrap();

        assert_eq!(response.places.len(), 10);
        for (i, place) in response.places.iter().enumerate() {
            assert_eq!(place["name"], format!("Spot {}", i));
        }
        assert_eq!(response.places[3]["latitude"], 37.53);

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Keyword: river picnic"));
    }

    #[tokio::test]
    async fn test_missing_coordinates_skip_upstream() {
        let generator = Arc::new(FakeGenerator::replying(ten_places()));
        let rec = recommender(generator.clone());

        for request in [
            RecommendationRequest::default(),
            RecommendationRequest {
                latitude: Some(37.5),
                ..RecommendationRequest::default()
            },
            RecommendationRequest::new("ramen", "", 0.0, 0.0),
        ] {
            let err = rec.recommend(&request).await.unwrap_err();
            assert!(matches!(err, RecommendError::Validation(_)));
        }
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let rec = recommender(Arc::new(FakeGenerator::failing("quota exceeded")));
        let request = RecommendationRequest::new("kpop", "", 37.5665, 126.978);

        let err = rec.recommend(&request).await.unwrap_err();
        assert!(matches!(err, RecommendError::ExternalApi(_)));
        assert_eq!(err.body().details.as_deref(), Some("quota exceeded"));
    }

    #[tokio::test]
    async fn test_no_json_in_reply() {
        let rec = recommender(Arc::new(FakeGenerator::replying("Sorry, I can't help with that.")));
        let request = RecommendationRequest::new("kpop", "", 37.5665, 126.978);

        let err = rec.recommend(&request).await.unwrap_err();
        assert!(matches!(err, RecommendError::Parse(_)));
        assert_eq!(err.to_string(), "could not parse JSON format");
    }

    #[test]
    fn test_parse_empty_list() {
        let response = parse_places(r#"noise {"places":[]} trailing"#).unwrap();
        assert!(response.places.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_places("{places: []}").unwrap_err();
        assert!(matches!(err, RecommendError::Parse(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_places(r#"{"results":[]}"#).unwrap_err();
        assert!(matches!(err, RecommendError::Shape(_)));

        let err = parse_places(r#"{"places":"none"}"#).unwrap_err();
        assert!(matches!(err, RecommendError::Shape(_)));

        let err = parse_places(r#"{"places":[{"name":"A","latitude":"37.5","longitude":126.9}]}"#)
            .unwrap_err();
        assert!(err.to_string().starts_with("place 0:"));
    }

    #[test]
    fn test_parse_requires_every_place_field() {
        let err =
            parse_places(r#"{"places":[{"name":"A","latitude":37.5,"longitude":126.9}]}"#).unwrap_err();
        assert!(matches!(err, RecommendError::Shape(_)));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_parse_returns_entries_untouched() {
        let upstream = r#"{"places":[
            {"name":"A","description":"d","latitude":37,"longitude":126.9,"category":"kpop","address":"Mapo-gu"},
            {"name":"B","description":"","latitude":37.5,"longitude":127.0,"category":"kpop"}
        ],"note":"ignored"}"#;
        let response = parse_places(upstream).unwrap();

        let original: Value = serde_json::from_str(upstream).unwrap();
        assert_eq!(Value::Array(response.places.clone()), original["places"]);
        assert_eq!(response.places[0]["address"], "Mapo-gu");
        assert!(response.places[0]["latitude"].is_u64());
    }
}
