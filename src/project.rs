//! Linear projection from geographic coordinates to pixel coordinates.

use crate::types::{BoundingBox, GeoPoint};

/// Maps coordinates inside a [`BoundingBox`] onto a raster of known size,
/// reserving a symmetric padding fraction on each side.
///
/// No clamping is performed: a point outside the box projects to pixel
/// coordinates outside the canvas, which downstream drawing simply clips.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub bounds: BoundingBox,
    pub width: u32,
    pub height: u32,
    /// Fraction of each image dimension reserved as margin on each side.
    pub padding: f64,
}

impl Projector {
    pub const DEFAULT_PADDING: f64 = 0.1;

    pub fn new(bounds: BoundingBox, width: u32, height: u32) -> Self {
        Self {
            bounds,
            width,
            height,
            padding: Self::DEFAULT_PADDING,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Project a point to integer pixel coordinates. Latitude is inverted
    /// because image rows grow downward.
    pub fn project(&self, point: &GeoPoint) -> (i64, i64) {
        let b = &self.bounds;
        let lon_norm = (point.lon - b.min_lon) / (b.max_lon - b.min_lon);
        let lat_norm = (b.max_lat - point.lat) / (b.max_lat - b.min_lat);
        let span = 1.0 - 2.0 * self.padding;
        let x = ((lon_norm * span + self.padding) * f64::from(self.width)).round();
        let y = ((lat_norm * span + self.padding) * f64::from(self.height)).round();
        (x as i64, y as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox {
            min_lat: 0.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 10.0,
        }
    }

    #[test]
    fn corners_land_on_the_padded_frame() {
        let proj = Projector::new(unit_box(), 1000, 1000);
        assert_eq!(proj.project(&GeoPoint::new(10.0, 0.0)), (100, 100));
        assert_eq!(proj.project(&GeoPoint::new(0.0, 10.0)), (900, 900));
    }

    #[test]
    fn box_center_maps_to_image_center() {
        let proj = Projector::new(unit_box(), 1000, 1000);
        assert_eq!(proj.project(&GeoPoint::new(5.0, 5.0)), (500, 500));
    }

    #[test]
    fn out_of_box_points_project_off_canvas() {
        let proj = Projector::new(unit_box(), 1000, 1000);
        let (x, y) = proj.project(&GeoPoint::new(20.0, -10.0));
        assert!(x < 0, "west of the box must land left of the canvas");
        assert!(y < 0, "north of the box must land above the canvas");
    }

    #[test]
    fn zero_padding_uses_the_full_canvas() {
        let proj = Projector::new(unit_box(), 500, 500).with_padding(0.0);
        assert_eq!(proj.project(&GeoPoint::new(10.0, 0.0)), (0, 0));
        assert_eq!(proj.project(&GeoPoint::new(0.0, 10.0)), (500, 500));
    }
}
