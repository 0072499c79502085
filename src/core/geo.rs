use crate::domain::model::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;
const MILES_PER_KM: f64 = 0.621371;

/// Great-circle distance between two points in kilometers, via the haversine
/// formula. Total over finite degree values; pure, no error conditions.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

/// Haversine distance in miles. Radius filtering and display both work in
/// miles, so this is the form the rest of the crate uses.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    km_to_miles(haversine_km(a, b))
}
