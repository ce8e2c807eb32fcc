use tracing::{info, warn};

use super::api::{ClientError, RecommendClient};
use super::catalog::{find_category, Location};
use crate::recommend::{Place, RecommendationRequest};

/// What the map screen shows: where the user is, which category was picked
/// last, and the places currently on the map.
#[derive(Debug, Clone)]
pub struct PlaceBoard {
    pub location: Location,
    pub places: Vec<Place>,
    pub current_category: Option<String>,
    pub loading: bool,
}

impl PlaceBoard {
    pub fn new(device_location: Option<Location>) -> Self {
        Self {
            location: Location::resolve(device_location),
            places: Vec::new(),
            current_category: None,
            loading: false,
        }
    }

    /// Build the request a category selection sends.
    pub fn request_for(&self, category_id: &str) -> Result<RecommendationRequest, ClientError> {
        let category = find_category(category_id)
            .ok_or_else(|| ClientError::UnknownCategory(category_id.to_string()))?;

        Ok(RecommendationRequest::new(
            category.prompt_label,
            category.keyword,
            self.location.latitude,
            self.location.longitude,
        ))
    }

    /// Ask for places in a category.
    ///
    /// On success the displayed list is replaced by exactly what the server
    /// returned. On failure the list is left alone and the error is handed
    /// back for the caller to show. `loading` is cleared either way.
    pub async fn select_category(
        &mut self,
        client: &RecommendClient,
        category_id: &str,
    ) -> Result<&[Place], ClientError> {
        let request = self.request_for(category_id)?;

        self.loading = true;
        self.current_category = Some(category_id.to_string());

        let result = client.recommend(&request).await;
        self.loading = false;

        match result {
            Ok(places) => {
                info!(category = category_id, count = places.len(), "Places updated");
                self.places = places;
                Ok(&self.places)
            }
            Err(e) => {
                warn!(category = category_id, error = %e, "Recommendation failed");
                Err(e)
            }
        }
    }
}
