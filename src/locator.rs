use crate::models::{Coordinates, Station};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

fn query_point(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinates> {
    Some(Coordinates {
        latitude: latitude?,
        longitude: longitude?,
    })
}

/// Distance from `origin` to a station, `INFINITY` when the station has no coordinates
fn distance_to(origin: Coordinates, station: &Station) -> f64 {
    station
        .coordinates
        .map_or(f64::INFINITY, |c| haversine_km(origin, c))
}

/// Station with the strictly smallest distance to the query point.
///
/// Ties keep the first station in iteration order. Returns `None` when either
/// coordinate is missing or no station has coordinates.
#[must_use]
pub fn find_nearest_station<'a, I>(stations: I, latitude: Option<f64>, longitude: Option<f64>) -> Option<(&'a Station, f64)>
where
    I: IntoIterator<Item = &'a Station>,
{
    let origin = query_point(latitude, longitude)?;

    let mut nearest: Option<(&Station, f64)> = None;
    let mut min_distance = f64::INFINITY;

    for station in stations {
        let distance = distance_to(origin, station);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some((station, distance));
        }
    }

    nearest
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationDistance<'a> {
    pub station: &'a Station,
    /// Kilometres, `INFINITY` when unknown
    pub distance_km: f64,
}

/// All stations ordered by distance, stable for equal distances.
///
/// Stations without coordinates sort last. Without a query point every
/// distance is `INFINITY` and the input order is kept.
#[must_use]
pub fn sort_by_distance<'a, I>(stations: I, latitude: Option<f64>, longitude: Option<f64>) -> Vec<StationDistance<'a>>
where
    I: IntoIterator<Item = &'a Station>,
{
    let origin = query_point(latitude, longitude);

    let mut sorted: Vec<StationDistance<'a>> = stations
        .into_iter()
        .map(|station| StationDistance {
            station,
            distance_km: origin.map_or(f64::INFINITY, |o| distance_to(o, station)),
        })
        .collect();

    sorted.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    sorted
}

/// Human-readable distance: metres below 1 km, otherwise one decimal of km
#[must_use]
pub fn format_distance(distance_km: f64) -> String {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return String::new();
    }
    if distance_km < 1.0 {
        format!("{:.0} m", distance_km * 1000.0)
    } else {
        format!("{distance_km:.1} km")
    }
}
