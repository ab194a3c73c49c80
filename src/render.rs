//! Marker rendering for clusters on a raster base map.
//!
//! Each cluster is drawn as a filled circle whose radius and fill color come
//! from a [`SizeColorPolicy`] tier table keyed on the cluster's point count,
//! with the decimal count painted in white on top of multi-point markers.
//! Clusters are drawn largest-first so small markers stay visible when
//! centers are close together.

use crate::project::Projector;
use crate::types::Cluster;
use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut, text_size};
use log::debug;

const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Markers at or below this radius take the smaller label size.
const SMALL_MARKER_RADIUS: i32 = 8;
const SMALL_LABEL_PX: f32 = 14.0;
const LARGE_LABEL_PX: f32 = 20.0;

/// Radius and fill for one marker.
#[derive(Clone, Copy, Debug)]
pub struct MarkerStyle {
    pub radius: i32,
    pub color: Rgba<u8>,
}

/// One inclusive point-count tier of the policy table.
#[derive(Clone, Copy, Debug)]
pub struct SizeTier {
    /// Largest point count this tier covers.
    pub max_count: usize,
    pub style: MarkerStyle,
}

/// Ordered tier table mapping cluster sizes to marker styles.
///
/// Tiers are consulted in order and the first whose `max_count` is not
/// exceeded wins; counts beyond every tier fall through to the catch-all
/// style.
#[derive(Clone, Debug)]
pub struct SizeColorPolicy {
    tiers: Vec<SizeTier>,
    catch_all: MarkerStyle,
}

impl SizeColorPolicy {
    pub fn new(tiers: Vec<SizeTier>, catch_all: MarkerStyle) -> Self {
        Self { tiers, catch_all }
    }

    /// Marker style for a cluster of `point_count` members.
    pub fn select(&self, point_count: usize) -> MarkerStyle {
        self.tiers
            .iter()
            .find(|t| point_count <= t.max_count)
            .map(|t| t.style)
            .unwrap_or(self.catch_all)
    }
}

impl Default for SizeColorPolicy {
    /// The original map styling: reds darkening and radii growing with
    /// cluster size.
    fn default() -> Self {
        let light_red = Rgba([255, 100, 100, 255]);
        let medium_red = Rgba([255, 50, 50, 255]);
        let dark_red = Rgba([200, 0, 0, 255]);
        let deepest_red = Rgba([150, 0, 0, 255]);
        Self::new(
            vec![
                SizeTier {
                    max_count: 1,
                    style: MarkerStyle {
                        radius: 4,
                        color: light_red,
                    },
                },
                SizeTier {
                    max_count: 10,
                    style: MarkerStyle {
                        radius: 8,
                        color: light_red,
                    },
                },
                SizeTier {
                    max_count: 50,
                    style: MarkerStyle {
                        radius: 16,
                        color: medium_red,
                    },
                },
                SizeTier {
                    max_count: 100,
                    style: MarkerStyle {
                        radius: 24,
                        color: dark_red,
                    },
                },
            ],
            MarkerStyle {
                radius: 32,
                color: deepest_red,
            },
        )
    }
}

/// Draw every cluster onto `image`, largest point count first.
///
/// Centroids are projected with `projector`; out-of-canvas markers are
/// clipped by the drawing routines rather than rejected. When `font` is
/// `None`, labels fall back to a built-in digit bitmap positioned with a
/// fixed character-width heuristic.
pub fn render_clusters(
    image: &mut RgbaImage,
    clusters: &[Cluster],
    projector: &Projector,
    policy: &SizeColorPolicy,
    font: Option<&FontVec>,
) {
    let mut order: Vec<&Cluster> = clusters.iter().collect();
    order.sort_by(|a, b| b.point_count.cmp(&a.point_count));
    debug!(
        "render: drawing {} clusters onto {}x{} canvas",
        order.len(),
        image.width(),
        image.height()
    );

    for cluster in order {
        let (px, py) = projector.project(&cluster.center());
        let (x, y) = (px as i32, py as i32);
        let style = policy.select(cluster.point_count);
        draw_filled_circle_mut(image, (x, y), style.radius, style.color);

        if cluster.point_count > 1 {
            let label = cluster.point_count.to_string();
            match font {
                Some(font) => draw_centered_label(image, &label, x, y, style.radius, font),
                None => draw_bitmap_label(image, &label, x, y, style.radius),
            }
        }
    }
}

fn label_scale(radius: i32) -> PxScale {
    if radius <= SMALL_MARKER_RADIUS {
        PxScale::from(SMALL_LABEL_PX)
    } else {
        PxScale::from(LARGE_LABEL_PX)
    }
}

fn draw_centered_label(
    image: &mut RgbaImage,
    label: &str,
    x: i32,
    y: i32,
    radius: i32,
    font: &FontVec,
) {
    let scale = label_scale(radius);
    let (w, h) = text_size(scale, font, label);
    draw_text_mut(
        image,
        LABEL_COLOR,
        x - (w as i32) / 2,
        y - (h as i32) / 2,
        scale,
        font,
        label,
    );
}

// 5x7 glyphs for '0'..'9', one row per byte, bit 4 leftmost.
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

/// Font-free fallback: place the label with the fixed char-width heuristic
/// (8 px per character in a 12 px box for small markers, 12 px in a 16 px
/// box otherwise) and stamp each digit from the built-in 5x7 bitmaps.
fn draw_bitmap_label(image: &mut RgbaImage, label: &str, x: i32, y: i32, radius: i32) {
    let (char_w, box_h, pixel_scale) = if radius <= SMALL_MARKER_RADIUS {
        (8i32, 12i32, 1i32)
    } else {
        (12i32, 16i32, 2i32)
    };
    let text_w = char_w * label.len() as i32;
    let left = x - text_w / 2;
    let top = y - box_h / 2;
    let glyph_w = 5 * pixel_scale;
    let glyph_h = 7 * pixel_scale;

    for (i, ch) in label.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let cell_x = left + char_w * i as i32 + (char_w - glyph_w) / 2;
        let cell_y = top + (box_h - glyph_h) / 2;
        stamp_glyph(
            image,
            &DIGIT_GLYPHS[digit as usize],
            cell_x,
            cell_y,
            pixel_scale,
        );
    }
}

fn stamp_glyph(image: &mut RgbaImage, rows: &[u8; 7], left: i32, top: i32, scale: i32) {
    let (width, height) = (image.width() as i32, image.height() as i32);
    for (row_idx, &row) in rows.iter().enumerate() {
        for col in 0..5 {
            if row & (0x10 >> col) == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = left + col * scale + dx;
                    let py = top + row_idx as i32 * scale + dy;
                    if px >= 0 && px < width && py >= 0 && py < height {
                        image.put_pixel(px as u32, py as u32, LABEL_COLOR);
                    }
                }
            }
        }
    }
}
