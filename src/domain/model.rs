use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default search radius in miles, matching the portal's initial filter state.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// A point in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRef {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A hosting organization. Geographic fields are optional: partners without
/// resolved geocoding are an ordinary state, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Partner {
    /// The partner's position, if geocoded. Requires both components; a
    /// half-present pair degrades to "unknown location".
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// A scheduled run of a program at a partner location. Read-only snapshot of
/// what the data layer serves; this crate never mutates sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub program: ProgramRef,
    pub partner: Partner,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub capacity: u32,
}

/// Filter state as an explicit value, decoupled from any UI lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub user_coordinate: Option<Coordinate>,
    pub radius_miles: f64,
    pub sort_by_distance: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            user_coordinate: None,
            radius_miles: DEFAULT_RADIUS_MILES,
            sort_by_distance: true,
        }
    }
}

/// One row of filter output. `distance_miles` is present exactly when both
/// the user coordinate and the partner coordinate were known, and is kept at
/// full precision; rounding for display is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMatch {
    pub session: Session,
    pub distance_miles: Option<f64>,
}
