use chrono::{DateTime, Utc};

/// A single position fix from a B record, in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Haversine distance to another point, in meters.
    pub fn distance_to(&self, other: &Point) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

/// A parsed IGC track: the header fields the service cares about plus the
/// position fixes in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct IgcTrack {
    pub date: DateTime<Utc>,
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    pub points: Vec<Point>,
}

impl IgcTrack {
    /// Sum of pairwise distances between consecutive points, in meters.
    ///
    /// Zero for tracks with fewer than two points.
    pub fn total_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}
