#![doc = include_str!("../README.md")]

// Pipeline stages (stable-ish surface)
pub mod cluster;
pub mod density;
pub mod mapper;
pub mod project;
pub mod render;
pub mod sampling;
pub mod types;

// Glue for the demo binaries; not part of the core contract.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::mapper::{ClusterMapParams, ClusterMapper, MapReport};
pub use crate::project::Projector;
pub use crate::render::{render_clusters, MarkerStyle, SizeColorPolicy, SizeTier};
pub use crate::types::{BoundingBox, Cluster, GeoPoint};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cluster_map::prelude::*;
/// use image::RgbaImage;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// # fn main() {
/// let mut canvas = RgbaImage::new(1280, 1280);
/// let mapper = ClusterMapper::new(ClusterMapParams::default());
/// let report = mapper.process(&mut canvas, &mut StdRng::seed_from_u64(42));
/// println!(
///     "clusters={} latency_ms={:.3}",
///     report.cluster_count, report.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::mapper::{ClusterMapParams, ClusterMapper, MapReport};
    pub use crate::render::SizeColorPolicy;
    pub use crate::types::{BoundingBox, Cluster, GeoPoint};
}
