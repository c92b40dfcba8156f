//! JSON configuration for the conversion tool.
use crate::mask::DEFAULT_THRESHOLD;
use crate::sdf::SdfOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SdfToolConfig {
    /// Grayscale values strictly below this are foreground.
    pub threshold: u8,
    pub sdf: SdfOptions,
    /// Overrides the derived `<input>-sdf.png` output path.
    pub output: Option<PathBuf>,
    /// Where to write the JSON summary, if anywhere.
    pub report_json: Option<PathBuf>,
}

impl Default for SdfToolConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sdf: SdfOptions::default(),
            output: None,
            report_json: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<SdfToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
