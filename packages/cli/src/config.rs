use anyhow::{anyhow, Result};
use badgecraft_compiler_html::RenderOptions;
use badgecraft_editor::DEFAULT_GRID_SIZE;
use badgecraft_model::{CardFormat, DEFAULT_CANVAS_SCALE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "badgecraft.config.json";

/// Badgecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Preset name used when a template carries no format
    pub format: String,

    /// Locale for date placeholders
    pub locale: String,

    /// Canvas pixels per millimetre
    pub canvas_scale: f64,

    pub grid_size: f64,

    pub snap_to_grid: bool,

    /// Where rendered files are written
    pub out_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: CardFormat::default().name,
            locale: RenderOptions::default().locale,
            canvas_scale: DEFAULT_CANVAS_SCALE,
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: true,
            out_dir: "dist".to_string(),
        }
    }
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow!("Invalid {}: {}", DEFAULT_CONFIG_NAME, e))?;
            debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            debug!("No config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn card_format(&self) -> Result<CardFormat> {
        CardFormat::find_preset(&self.format).ok_or_else(|| anyhow!("Unknown card format: {}", self.format))
    }

    /// Grid step for gestures, or `None` with snapping off
    pub fn grid(&self) -> Option<f64> {
        self.snap_to_grid.then_some(self.grid_size)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            locale: self.locale.clone(),
            ..RenderOptions::default()
        }
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}
