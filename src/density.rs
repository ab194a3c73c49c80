//! Pairwise density ranking used to order cluster seeds.
//!
//! Every point is scored by the number of points (itself included) within
//! `neighbor_radius`, then the set is sorted by that score descending. The
//! scan is O(n²) on purpose: inputs are bounded to the low thousands and the
//! seed order it produces is part of the observable clustering behaviour, so
//! it must not be replaced by an approximate spatial index.

use crate::types::GeoPoint;
use log::debug;

/// Return `points` reordered by descending neighbor count within
/// `neighbor_radius`. The sort is stable, so points with equal counts keep
/// their input order; the result is deterministic for a fixed input.
pub fn rank_by_density(points: &[GeoPoint], neighbor_radius: f64) -> Vec<GeoPoint> {
    let mut scored: Vec<(usize, GeoPoint)> = points
        .iter()
        .map(|p| {
            let neighbors = points
                .iter()
                .filter(|&other| p.dist(other) <= neighbor_radius)
                .count();
            (neighbors, *p)
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    if let (Some(first), Some(last)) = (scored.first(), scored.last()) {
        debug!(
            "density: ranked {} points, neighbor counts {}..{} (radius {})",
            scored.len(),
            first.0,
            last.0,
            neighbor_radius
        );
    }
    scored.into_iter().map(|(_, p)| p).collect()
}
