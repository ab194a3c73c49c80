//! Greedy density-seeded clustering.
//!
//! Consumes density-ranked points and partitions them into disjoint
//! clusters: the highest-ranked unclaimed point seeds a cluster and absorbs
//! every unclaimed point within `cluster_radius` of the seed. The heuristic
//! is seed-order dependent by design: a point near two candidate seeds goes
//! to whichever seed is processed first, even if a later seed is closer.

use crate::types::{Cluster, GeoPoint};
use log::debug;

/// Partition `ranked` points into at most `max_clusters` disjoint clusters.
///
/// `ranked` is consumed in order, so it should come from
/// [`rank_by_density`](crate::density::rank_by_density). Once the cluster
/// cap is reached, the remaining pool is dropped silently; that is the
/// documented cap behaviour, not an error.
pub fn build_clusters(
    ranked: &[GeoPoint],
    max_clusters: usize,
    cluster_radius: f64,
) -> Vec<Cluster> {
    let mut pool: Vec<GeoPoint> = ranked.to_vec();
    let mut clusters = Vec::new();

    while !pool.is_empty() && clusters.len() < max_clusters {
        let seed = pool.remove(0);
        let mut members = vec![seed];
        pool.retain(|p| {
            if seed.dist(p) <= cluster_radius {
                members.push(*p);
                false
            } else {
                true
            }
        });
        clusters.push(Cluster::from_points(members));
    }

    if !pool.is_empty() {
        debug!(
            "cluster: cap of {} reached, dropping {} unclaimed points",
            max_clusters,
            pool.len()
        );
    }
    debug!(
        "cluster: built {} clusters from {} ranked points (radius {})",
        clusters.len(),
        ranked.len(),
        cluster_radius
    );
    clusters
}
