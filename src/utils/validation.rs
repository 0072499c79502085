use crate::utils::error::{FinderError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FinderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_radius(field_name: &str, miles: f64) -> Result<()> {
    if !miles.is_finite() || miles <= 0.0 {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: miles.to_string(),
            reason: "Radius must be a positive number of miles".to_string(),
        });
    }
    Ok(())
}

pub fn validate_latitude(field_name: &str, degrees: f64) -> Result<()> {
    if !degrees.is_finite() || !(-90.0..=90.0).contains(&degrees) {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: degrees.to_string(),
            reason: "Latitude must be between -90 and 90 degrees".to_string(),
        });
    }
    Ok(())
}

pub fn validate_longitude(field_name: &str, degrees: f64) -> Result<()> {
    if !degrees.is_finite() || !(-180.0..=180.0).contains(&degrees) {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: degrees.to_string(),
            reason: "Longitude must be between -180 and 180 degrees".to_string(),
        });
    }
    Ok(())
}
