use crate::config::OUTPUT_FORMATS;
use crate::core::ConfigProvider;
use crate::domain::model::{Coordinate, FilterCriteria, DEFAULT_RADIUS_MILES};
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{
    validate_latitude, validate_longitude, validate_path, validate_positive_radius, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for the finder CLI, mirroring the flag set so
/// saved searches can be re-run without retyping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub finder: FinderSection,
    pub source: SourceSection,
    pub search: Option<SearchSection>,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSection {
    pub query: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_miles: Option<f64>,
    pub sort_by_distance: Option<bool>,
    pub include_past: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unset
    /// variables are left as-is so validation reports them in context.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn user_coordinate(&self) -> Option<Coordinate> {
        let search = self.search.as_ref()?;
        match (search.latitude, search.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        let search = self.search.as_ref();
        FilterCriteria {
            query: search
                .and_then(|s| s.query.clone())
                .unwrap_or_default(),
            user_coordinate: self.user_coordinate(),
            radius_miles: search
                .and_then(|s| s.radius_miles)
                .unwrap_or(DEFAULT_RADIUS_MILES),
            sort_by_distance: search.and_then(|s| s.sort_by_distance).unwrap_or(true),
        }
    }

    pub fn include_past(&self) -> bool {
        self.search
            .as_ref()
            .and_then(|s| s.include_past)
            .unwrap_or(false)
    }

    pub fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("table")
    }
}

impl ConfigProvider for TomlConfig {
    fn sessions_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_path("output.path", &self.output.path)?;

        if let Some(search) = &self.search {
            if let Some(radius) = search.radius_miles {
                validate_positive_radius("search.radius_miles", radius)?;
            }
            match (search.latitude, search.longitude) {
                (Some(lat), Some(lon)) => {
                    validate_latitude("search.latitude", lat)?;
                    validate_longitude("search.longitude", lon)?;
                }
                (None, None) => {}
                _ => {
                    return Err(FinderError::ConfigValidationError {
                        field: "search.latitude/search.longitude".to_string(),
                        message: "latitude and longitude must be supplied together".to_string(),
                    });
                }
            }
        }

        if !OUTPUT_FORMATS.contains(&self.format()) {
            return Err(FinderError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: self.format().to_string(),
                reason: format!("Supported formats: {}", OUTPUT_FORMATS.join(", ")),
            });
        }

        Ok(())
    }
}
