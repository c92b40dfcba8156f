//! Structured reporting for a computed field.
//!
//! Everything an external renderer or pipeline needs to inspect a run:
//! per-stage timings and quantitative field statistics, serializable as
//! camelCase JSON.
use serde::{Deserialize, Serialize};

/// Timing entry for a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one `compute_sdf` run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Serializable description of a computed signed distance field.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdfSummary {
    pub width: usize,
    pub height: usize,
    pub foreground_cells: usize,
    pub background_cells: usize,
    /// Most negative signed distance (deepest inside the foreground).
    pub min_sdf: f32,
    /// Most positive signed distance (farthest outside).
    pub max_sdf: f32,
    /// Normalization scale: `max(|minSdf|, |maxSdf|)`.
    pub max_abs: f32,
    /// Cells within one pixel of the zero crossing.
    pub boundary_cells: usize,
    pub timing: TimingBreakdown,
}
