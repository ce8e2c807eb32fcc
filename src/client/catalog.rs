use serde::{Deserialize, Serialize};

/// A selectable recommendation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Category text sent to the service and echoed into the prompt.
    pub prompt_label: &'static str,
    pub keyword: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "kpop",
        name: "K-pop Hunters",
        icon: "🎤",
        prompt_label: "케이팝 헌터스",
        keyword: "K-pop landmarks, idol practice studios, entertainment agencies, merchandise shops",
    },
    Category {
        id: "ramen",
        name: "Han River Ramen",
        icon: "🍜",
        prompt_label: "한강라면",
        keyword: "Han River park convenience stores, places to eat ramen, Han River picnic",
    },
];

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Seoul City Hall.
pub const DEFAULT_LOCATION: Location = Location {
    latitude: 37.5665,
    longitude: 126.978,
};

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Use the device position when one was obtained, else Seoul City Hall.
    pub fn resolve(device: Option<Location>) -> Location {
        device.unwrap_or(DEFAULT_LOCATION)
    }
}
