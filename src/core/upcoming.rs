use crate::domain::model::Session;
use chrono::{DateTime, Utc};

/// A session is upcoming while its end date has not passed. This predicate is
/// deliberately kept out of the catalog filter and composed in front of it.
pub fn is_upcoming(session: &Session, now: DateTime<Utc>) -> bool {
    session.end_date >= now
}

pub fn upcoming_only(sessions: &[Session], now: DateTime<Utc>) -> Vec<Session> {
    sessions
        .iter()
        .filter(|session| is_upcoming(session, now))
        .cloned()
        .collect()
}

/// Upcoming sessions with the newest start date first. Stable, so sessions
/// starting at the same instant keep their snapshot order.
pub fn newest_first(sessions: &[Session]) -> Vec<Session> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted
}

/// Distinct partner city (falling back to free-text location) values, sorted,
/// for a search dropdown.
pub fn city_options(sessions: &[Session]) -> Vec<String> {
    let mut cities: Vec<String> = sessions
        .iter()
        .filter_map(|session| {
            session
                .partner
                .city
                .as_deref()
                .or(session.partner.location.as_deref())
        })
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}
