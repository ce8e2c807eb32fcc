use serde::Serialize;

use crate::recommend::Place;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: &'static str,
    pub light: &'static str,
    pub image: &'static str,
}

const KPOP_THEME: Theme = Theme {
    primary: "#FF4081",
    light: "#FCE4EC",
    image: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800&q=80",
};

const RAMEN_THEME: Theme = Theme {
    primary: "#FF9800",
    light: "#FFF3E0",
    image: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=800&q=80",
};

const DEFAULT_THEME: Theme = Theme {
    primary: "#9C27B0",
    light: "#F3E5F5",
    image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&q=80",
};

pub fn theme_for(category_id: &str) -> Theme {
    match category_id {
        "kpop" => KPOP_THEME,
        "ramen" => RAMEN_THEME,
        _ => DEFAULT_THEME,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: &'static str,
}

/// One marker per place, in list order, coloured by the selected category.
pub fn markers(places: &[Place], category_id: &str) -> Vec<Marker> {
    let color = theme_for(category_id).primary;
    places
        .iter()
        .map(|p| Marker {
            title: p.name.clone(),
            latitude: p.latitude,
            longitude: p.longitude,
            color,
        })
        .collect()
}

/// Kakao Map directions to the place.
pub fn navigation_url(place: &Place) -> String {
    format!(
        "https://map.kakao.com/link/to/{},{},{}",
        urlencoding::encode(&place.name),
        place.latitude,
        place.longitude
    )
}

/// Text copied to the clipboard when the share sheet is unavailable.
pub fn share_text(place: &Place) -> String {
    format!("{} - {}", place.name, place.description)
}
