use image::{Rgba, RgbaImage};

pub const BACKGROUND: Rgba<u8> = Rgba([230, 230, 210, 255]);

/// Plain single-color canvas standing in for a downloaded base map.
pub fn blank_base_map(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, BACKGROUND)
}
