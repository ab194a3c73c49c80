use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Euclidean distance to `other` in degree space. The clustering stages
    /// work on raw coordinate deltas, not great-circle distances.
    #[inline]
    pub fn dist(&self, other: &GeoPoint) -> f64 {
        Vector2::new(self.lat - other.lat, self.lon - other.lon).norm()
    }
}

/// Geographic rectangle used to linearly map coordinates to pixel space.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for BoundingBox {
    /// Texas state bounds, the reference region of the original map runs.
    fn default() -> Self {
        Self {
            min_lat: 25.837377,
            max_lat: 36.500704,
            min_lon: -106.645646,
            max_lon: -93.508292,
        }
    }
}

/// A group of nearby points with its centroid.
///
/// Invariants: `points` is non-empty, `point_count == points.len()`, and
/// `center_lat`/`center_lon` are the arithmetic means of the member
/// coordinates.
#[derive(Clone, Debug, Serialize)]
pub struct Cluster {
    pub center_lat: f64,
    pub center_lon: f64,
    pub point_count: usize,
    pub points: Vec<GeoPoint>,
}

impl Cluster {
    /// Build a cluster from its members, deriving the centroid and count.
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        debug_assert!(!points.is_empty(), "cluster must have at least one point");
        let n = points.len() as f64;
        let center_lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
        let center_lon = points.iter().map(|p| p.lon).sum::<f64>() / n;
        Self {
            center_lat,
            center_lon,
            point_count: points.len(),
            points,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_is_mean_of_members() {
        let c = Cluster::from_points(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(2.0, 4.0),
            GeoPoint::new(4.0, 2.0),
        ]);
        assert_eq!(c.point_count, 3);
        assert!((c.center_lat - 2.0).abs() < 1e-9);
        assert!((c.center_lon - 2.0).abs() < 1e-9);
    }

    #[test]
    fn dist_is_symmetric() {
        let a = GeoPoint::new(1.0, 2.0);
        let b = GeoPoint::new(4.0, 6.0);
        assert!((a.dist(&b) - 5.0).abs() < 1e-12);
        assert!((a.dist(&b) - b.dist(&a)).abs() < 1e-12);
    }
}
