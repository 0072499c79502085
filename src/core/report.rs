use crate::domain::model::SessionMatch;
use crate::utils::error::{FinderError, Result};

/// Renders matches as CSV with one row per session. Distances are written at
/// full precision; blank when unknown.
pub fn render_csv(matches: &[SessionMatch]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "program",
        "partner",
        "location",
        "start_date",
        "end_date",
        "capacity",
        "distance_miles",
    ])?;

    for m in matches {
        let session = &m.session;
        let distance = m
            .distance_miles
            .map(|miles| miles.to_string())
            .unwrap_or_default();
        writer.write_record([
            session.id.clone(),
            session.program.name.clone(),
            session.partner.name.clone(),
            session.partner.location.clone().unwrap_or_default(),
            session.start_date.to_rfc3339(),
            session.end_date.to_rfc3339(),
            session.capacity.to_string(),
            distance,
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| {
        FinderError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

pub fn render_json(matches: &[SessionMatch]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

/// Human-readable table for stdout. The only place distances are rounded.
pub fn render_table(matches: &[SessionMatch]) -> String {
    let mut lines = Vec::with_capacity(matches.len() + 1);
    lines.push(format!(
        "{:<28} {:<28} {:<20} {:>10}",
        "PROGRAM", "PARTNER", "LOCATION", "DISTANCE"
    ));
    for m in matches {
        let session = &m.session;
        let distance = match m.distance_miles {
            Some(miles) => format!("{:.1} mi", miles),
            None => "-".to_string(),
        };
        lines.push(format!(
            "{:<28} {:<28} {:<20} {:>10}",
            session.program.name,
            session.partner.name,
            session.partner.location.as_deref().unwrap_or("Location TBA"),
            distance
        ));
    }
    lines.join("\n")
}
