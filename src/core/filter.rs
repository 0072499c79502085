use crate::core::geo::distance_miles;
use crate::domain::model::{FilterCriteria, Session, SessionMatch};

/// Applies the catalog filter stages in fixed order: text match, then radius,
/// then the optional distance sort. Pure transform over the snapshot; safe to
/// re-run on every keystroke of a live search box.
///
/// Two easy-to-conflate rules are intentionally separate:
/// - a session whose partner has no coordinate is never excluded by the
///   radius stage, regardless of radius;
/// - the same session always ranks last (distance treated as infinite) when
///   sorting by distance.
pub fn filter_sessions(sessions: &[Session], criteria: &FilterCriteria) -> Vec<SessionMatch> {
    let query = criteria.query.trim().to_lowercase();

    let mut matches: Vec<SessionMatch> = sessions
        .iter()
        .filter(|session| query.is_empty() || matches_query(session, &query))
        .map(|session| SessionMatch {
            session: session.clone(),
            distance_miles: criteria.user_coordinate.and_then(|user| {
                session
                    .partner
                    .coordinate()
                    .map(|partner| distance_miles(user, partner))
            }),
        })
        .collect();

    if criteria.user_coordinate.is_some() {
        matches.retain(|m| match m.distance_miles {
            Some(miles) => miles <= criteria.radius_miles,
            // Unknown location passes the radius filter.
            None => true,
        });

        if criteria.sort_by_distance {
            // Vec::sort_by is stable, so equal distances keep their relative
            // order from the previous stage.
            matches.sort_by(|a, b| {
                let da = a.distance_miles.unwrap_or(f64::INFINITY);
                let db = b.distance_miles.unwrap_or(f64::INFINITY);
                da.total_cmp(&db)
            });
        }
    }

    matches
}

/// Case-insensitive substring match against the searchable fields. Absent
/// fields match as empty strings.
fn matches_query(session: &Session, query: &str) -> bool {
    let partner = &session.partner;

    field_contains(partner.location.as_deref(), query)
        || field_contains(partner.city.as_deref(), query)
        || field_contains(partner.state.as_deref(), query)
        || field_contains(partner.postal_code.as_deref(), query)
        || field_contains(Some(partner.name.as_str()), query)
        || field_contains(Some(session.program.name.as_str()), query)
}

fn field_contains(field: Option<&str>, query: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(query))
        .unwrap_or(false)
}
