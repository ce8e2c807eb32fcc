use crate::config::RecommendConfig;

/// Build the prompt sent to the model for one recommendation request.
///
/// The output is a pure function of its inputs; category and keyword are
/// interpolated verbatim.
pub fn build_prompt(
    settings: &RecommendConfig,
    category: &str,
    keyword: &str,
    latitude: f64,
    longitude: f64,
) -> String {
    let count = settings.place_count;
    let (how_many, count_rule) = if settings.exact_count {
        (
            format!("{} places", count),
            format!("Recommend exactly {} places", count),
        )
    } else {
        (
            format!("up to {} places", count),
            format!("Recommend no more than {} places", count),
        )
    };

    format!(
        r#"You are a local travel guide for {region}.
The user's current location: latitude {latitude}, longitude {longitude}

Category: {category}
Keyword: {keyword}

Recommend {how_many} related to "{category}" within a {radius} km radius of this location.
If there are no related places nearby, recommend popular attractions related to the theme instead.

Respond only in the following JSON format, with no other text:
{{
  "places": [
    {{
      "name": "place name",
      "description": "short description (20 characters or less)",
      "latitude": 37.xxxx,
      "longitude": 126.xxxx,
      "category": "{category}"
    }}
  ]
}}

Important:
- Recommend only places that actually exist
- Use real latitude/longitude coordinates
- {count_rule}
- Return JSON only
"#,
        region = settings.region,
        radius = settings.radius_km,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolates_request() {
        let prompt = build_prompt(
            &RecommendConfig::default(),
            "ramen",
            "river picnic",
            37.5665,
            126.978,
        );
        assert!(prompt.starts_with("You are a local travel guide for Seoul."));
        assert!(prompt.contains("latitude 37.5665, longitude 126.978"));
        assert!(prompt.contains("Category: ramen\nKeyword: river picnic"));
        assert!(prompt.contains(r#"Recommend 10 places related to "ramen" within a 2 km radius"#));
        assert!(prompt.contains(r#""category": "ramen""#));
        assert!(prompt.contains("- Recommend exactly 10 places"));
    }

    #[test]
    fn test_up_to_count() {
        let settings = RecommendConfig {
            exact_count: false,
            place_count: 7,
            radius_km: 1.5,
            ..RecommendConfig::default()
        };
        let prompt = build_prompt(&settings, "kpop", "", 37.5, 127.0);
        assert!(prompt.contains(r#"Recommend up to 7 places related to "kpop" within a 1.5 km radius"#));
        assert!(prompt.contains("- Recommend no more than 7 places"));
    }

    #[test]
    fn test_deterministic() {
        let settings = RecommendConfig::default();
        assert_eq!(
            build_prompt(&settings, "a", "b", 1.0, 2.0),
            build_prompt(&settings, "a", "b", 1.0, 2.0)
        );
    }
}
