//! JSON runtime configuration for the demo binary.

use crate::mapper::ClusterMapParams;
use crate::types::{BoundingBox, GeoPoint};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Base map raster to draw on.
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Optional TTF/OTF font for marker labels; the built-in digit bitmaps
    /// are used when absent.
    pub font: Option<PathBuf>,
    /// RNG seed; unseeded runs use OS entropy.
    pub seed: Option<u64>,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub point_count: Option<usize>,
    pub center: Option<GeoPoint>,
    pub radius_miles: Option<f64>,
    pub neighbor_radius: Option<f64>,
    pub max_clusters: Option<usize>,
    pub cluster_radius: Option<f64>,
    pub bounds: Option<BoundingBox>,
    pub padding: Option<f64>,
}

impl PipelineConfig {
    /// Overlay the configured fields on the default reference run.
    pub fn resolve(&self) -> ClusterMapParams {
        let mut p = ClusterMapParams::default();
        if let Some(v) = self.point_count {
            p.point_count = v;
        }
        if let Some(v) = self.center {
            p.center = v;
        }
        if let Some(v) = self.radius_miles {
            p.radius_miles = v;
        }
        if let Some(v) = self.neighbor_radius {
            p.neighbor_radius = v;
        }
        if let Some(v) = self.max_clusters {
            p.max_clusters = v;
        }
        if let Some(v) = self.cluster_radius {
            p.cluster_radius = v;
        }
        if let Some(v) = self.bounds {
            p.bounds = v;
        }
        if let Some(v) = self.padding {
            p.padding = v;
        }
        p
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Where the mutated canvas is saved.
    pub image_out: PathBuf,
    /// Optional pretty-JSON run report.
    pub json_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
