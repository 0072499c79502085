pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{Coordinate, FilterCriteria, DEFAULT_RADIUS_MILES};
#[cfg(feature = "cli")]
use crate::utils::error::{FinderError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    self, validate_latitude, validate_longitude, validate_path, validate_positive_radius,
    validate_url,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const OUTPUT_FORMATS: [&str; 3] = ["table", "csv", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "session-finder")]
#[command(about = "Find upcoming program sessions near a location")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000/api/sessions")]
    pub sessions_endpoint: String,

    /// Free-text search over partner name/location/city/state/zip and
    /// program name.
    #[arg(long, default_value = "")]
    pub query: String,

    /// Your latitude in decimal degrees. Requires --lon.
    #[arg(long)]
    pub lat: Option<f64>,

    /// Your longitude in decimal degrees. Requires --lat.
    #[arg(long)]
    pub lon: Option<f64>,

    /// Search radius in miles around --lat/--lon.
    #[arg(long, default_value_t = DEFAULT_RADIUS_MILES)]
    pub radius: f64,

    /// Keep the snapshot order instead of sorting nearest first.
    #[arg(long)]
    pub no_distance_sort: bool,

    /// Include sessions that have already ended.
    #[arg(long)]
    pub include_past: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Output format: table, csv or json.
    #[arg(long, default_value = "table")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The user's coordinate, when both halves were supplied. `validate`
    /// rejects a half-supplied pair before this is called.
    pub fn user_coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            user_coordinate: self.user_coordinate(),
            radius_miles: self.radius,
            sort_by_distance: !self.no_distance_sort,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn sessions_endpoint(&self) -> &str {
        &self.sessions_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sessions_endpoint", &self.sessions_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_radius("radius", self.radius)?;

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                validate_latitude("lat", lat)?;
                validate_longitude("lon", lon)?;
            }
            (None, None) => {}
            _ => {
                return Err(FinderError::ConfigValidationError {
                    field: "lat/lon".to_string(),
                    message: "--lat and --lon must be supplied together".to_string(),
                });
            }
        }

        if !OUTPUT_FORMATS.contains(&self.format.as_str()) {
            return Err(FinderError::InvalidConfigValueError {
                field: "format".to_string(),
                value: self.format.clone(),
                reason: format!("Supported formats: {}", OUTPUT_FORMATS.join(", ")),
            });
        }

        Ok(())
    }
}
