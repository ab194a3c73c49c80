//! Pipeline orchestrator: sampling → density ranking → clustering →
//! projection → rendering over a single raster.

use crate::cluster::build_clusters;
use crate::density::rank_by_density;
use crate::project::Projector;
use crate::render::{render_clusters, SizeColorPolicy};
use crate::sampling::sample_disk;
use crate::types::{BoundingBox, Cluster, GeoPoint};
use ab_glyph::FontVec;
use image::RgbaImage;
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::time::Instant;

/// Parameters for one full cluster-map run.
#[derive(Clone, Debug)]
pub struct ClusterMapParams {
    /// Number of points to sample.
    pub point_count: usize,
    /// Disk center for sampling.
    pub center: GeoPoint,
    /// Sampling disk radius in miles.
    pub radius_miles: f64,
    /// Radius used when counting neighbors for seed ranking.
    pub neighbor_radius: f64,
    /// Cap on the number of clusters; the pool tail is dropped beyond it.
    pub max_clusters: usize,
    /// Absorption radius around each cluster seed.
    pub cluster_radius: f64,
    /// Reference region for the pixel projection.
    pub bounds: BoundingBox,
    /// Padding fraction reserved on each canvas side.
    pub padding: f64,
    /// Marker size/color tier table.
    pub policy: SizeColorPolicy,
}

impl Default for ClusterMapParams {
    /// The original reference run: 2000 points within 100 miles of
    /// San Antonio, at most 50 clusters, drawn over the Texas bounds.
    fn default() -> Self {
        Self {
            point_count: 2000,
            center: GeoPoint::new(29.4241, -98.4936),
            radius_miles: 100.0,
            neighbor_radius: 0.1,
            max_clusters: 50,
            cluster_radius: 0.1,
            bounds: BoundingBox::default(),
            padding: Projector::DEFAULT_PADDING,
            policy: SizeColorPolicy::default(),
        }
    }
}

/// Per-run statistics, serialized alongside the clusters in JSON reports.
#[derive(Clone, Debug, Serialize)]
pub struct MapReport {
    pub total_points: usize,
    pub cluster_count: usize,
    pub clustered_points: usize,
    pub dropped_points: usize,
    pub min_cluster_size: usize,
    pub max_cluster_size: usize,
    pub latency_ms: f64,
    pub clusters: Vec<Cluster>,
}

/// Runs the whole pipeline over one image.
pub struct ClusterMapper {
    params: ClusterMapParams,
    font: Option<FontVec>,
}

impl ClusterMapper {
    pub fn new(params: ClusterMapParams) -> Self {
        Self { params, font: None }
    }

    /// Use `font` for marker labels instead of the built-in digit bitmaps.
    pub fn with_font(mut self, font: FontVec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn params(&self) -> &ClusterMapParams {
        &self.params
    }

    /// Sample, rank, and cluster without touching any raster.
    pub fn cluster(&self, rng: &mut impl Rng) -> Vec<Cluster> {
        let p = &self.params;
        let points = sample_disk(p.point_count, p.center, p.radius_miles, rng);
        debug!(
            "mapper: sampled {} points within {} miles of ({}, {})",
            points.len(),
            p.radius_miles,
            p.center.lat,
            p.center.lon
        );
        let ranked = rank_by_density(&points, p.neighbor_radius);
        build_clusters(&ranked, p.max_clusters, p.cluster_radius)
    }

    /// Run the full pipeline: cluster the sampled points, then draw them
    /// onto `image` in place. Returns the run report.
    pub fn process(&self, image: &mut RgbaImage, rng: &mut impl Rng) -> MapReport {
        let t0 = Instant::now();
        let p = &self.params;
        let clusters = self.cluster(rng);

        let projector =
            Projector::new(p.bounds, image.width(), image.height()).with_padding(p.padding);
        render_clusters(image, &clusters, &projector, &p.policy, self.font.as_ref());

        let clustered_points: usize = clusters.iter().map(|c| c.point_count).sum();
        let sizes = clusters.iter().map(|c| c.point_count);
        let report = MapReport {
            total_points: p.point_count,
            cluster_count: clusters.len(),
            clustered_points,
            dropped_points: p.point_count - clustered_points,
            min_cluster_size: sizes.clone().min().unwrap_or(0),
            max_cluster_size: sizes.max().unwrap_or(0),
            latency_ms: t0.elapsed().as_secs_f64() * 1000.0,
            clusters,
        };
        debug!(
            "mapper: {} clusters, {} of {} points clustered in {:.3} ms",
            report.cluster_count, report.clustered_points, report.total_points, report.latency_ms
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_params() -> ClusterMapParams {
        ClusterMapParams {
            point_count: 200,
            ..Default::default()
        }
    }

    #[test]
    fn capped_run_accounts_for_every_point() {
        let mapper = ClusterMapper::new(small_params());
        let mut image = RgbaImage::new(256, 256);
        let report = mapper.process(&mut image, &mut StdRng::seed_from_u64(11));
        assert!(report.cluster_count <= mapper.params().max_clusters);
        assert_eq!(
            report.clustered_points + report.dropped_points,
            report.total_points
        );
        assert!(report.max_cluster_size >= report.min_cluster_size);
    }

    #[test]
    fn same_seed_gives_identical_clusters() {
        let mapper = ClusterMapper::new(small_params());
        let a = mapper.cluster(&mut StdRng::seed_from_u64(5));
        let b = mapper.cluster(&mut StdRng::seed_from_u64(5));
        assert_eq!(a.len(), b.len());
        for (ca, cb) in a.iter().zip(&b) {
            assert_eq!(ca.points, cb.points);
        }
    }

    #[test]
    fn zero_points_produce_an_empty_report() {
        let mapper = ClusterMapper::new(ClusterMapParams {
            point_count: 0,
            ..Default::default()
        });
        let mut image = RgbaImage::new(64, 64);
        let report = mapper.process(&mut image, &mut StdRng::seed_from_u64(1));
        assert_eq!(report.cluster_count, 0);
        assert_eq!(report.clustered_points, 0);
        assert_eq!(report.min_cluster_size, 0);
    }

    #[test]
    fn zero_cluster_cap_drops_everything() {
        let mapper = ClusterMapper::new(ClusterMapParams {
            point_count: 100,
            max_clusters: 0,
            ..Default::default()
        });
        let mut image = RgbaImage::new(64, 64);
        let report = mapper.process(&mut image, &mut StdRng::seed_from_u64(2));
        assert_eq!(report.cluster_count, 0);
        assert_eq!(report.dropped_points, 100);
    }
}
