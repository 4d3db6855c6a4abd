use serde::Serialize;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in decimal degrees.
///
/// Values outside the valid latitude/longitude ranges are not rejected; the
/// engine treats coordinates as opaque positions supplied by its callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle (haversine) distance to another coordinate in kilometres.
    pub fn distance_km(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Offset this coordinate by kilometres travelled north and east.
    ///
    /// Accurate enough for placing synthetic nodes within a city-sized
    /// radius; not suitable near the poles.
    pub(crate) fn offset_km(&self, north_km: f64, east_km: f64) -> Self {
        let dlat = (north_km / EARTH_RADIUS_KM).to_degrees();
        let dlng = (east_km / (EARTH_RADIUS_KM * self.lat.to_radians().cos())).to_degrees();
        Self {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let here = Coordinate::new(52.52, 13.405);
        assert_eq!(here.distance_km(&here), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let distance = a.distance_km(&b);
        assert!((distance - 111.19).abs() < 0.5, "got {distance}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(40.7128, -74.0060);
        let b = Coordinate::new(34.0522, -118.2437);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn offset_round_trips_through_distance() {
        let origin = Coordinate::new(45.0, 9.0);
        let moved = origin.offset_km(3.0, 0.0);
        assert!((origin.distance_km(&moved) - 3.0).abs() < 0.01);
    }
}
