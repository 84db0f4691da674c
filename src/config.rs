//! Office configuration files
//!
//! Every section is optional and every key inside a section falls back to
//! its default, so a config file only needs the values it changes:
//!
//! ```toml
//! [grid]
//! min_tiles = 100
//! max_tiles = 900
//!
//! [zones]
//! margin = 1
//!
//! [auto_layout]
//! grid_width = 12
//! grid_height = 10
//!
//! [editor]
//! history_limit = 100
//!
//! [plan]
//! include_floor_tiles = true
//!
//! [staffing.cpu]
//! warning = 60.0
//! critical = 85.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editor::{PlacementLedger, DEFAULT_HISTORY_LIMIT};
use crate::grid::GridOptions;
use crate::layout::{AutoLayoutConfig, PlanConfig, ZoneOptions};
use crate::staffing::Thresholds;

/// Errors that can occur when loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Placement editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Undo records kept before the oldest is dropped
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EditorOptions {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// An empty ledger using these settings
    pub fn ledger(&self) -> PlacementLedger {
        PlacementLedger::with_history_limit(self.history_limit)
    }
}

/// Furnishing settings for resource-sized plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    pub workstation_spacing: u32,
    pub include_floor_tiles: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        let plan = PlanConfig::default();
        Self {
            workstation_spacing: plan.workstation_spacing,
            include_floor_tiles: plan.include_floor_tiles,
        }
    }
}

/// All tunables, as read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    pub grid: GridOptions,
    pub zones: ZoneOptions,
    pub auto_layout: AutoLayoutConfig,
    pub editor: EditorOptions,
    pub plan: PlanOptions,
    pub staffing: Thresholds,
}

impl OfficeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Settings for [`crate::plan_for_vm`]
    pub fn plan_config(&self) -> PlanConfig {
        PlanConfig::new()
            .with_grid(self.grid.clone())
            .with_zones(self.zones.clone())
            .with_workstation_spacing(self.plan.workstation_spacing)
            .with_floor_tiles(self.plan.include_floor_tiles)
    }

    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_zones(mut self, zones: ZoneOptions) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_auto_layout(mut self, auto_layout: AutoLayoutConfig) -> Self {
        self.auto_layout = auto_layout;
        self
    }

    pub fn with_editor(mut self, editor: EditorOptions) -> Self {
        self.editor = editor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = OfficeConfig::from_str("").unwrap();
        assert_eq!(config, OfficeConfig::default());
        assert_eq!(config.editor.history_limit, 50);
        assert_eq!(config.zones.margin, 2);
    }

    #[test]
    fn test_partial_sections() {
        let config = OfficeConfig::from_str(
            r#"
[grid]
min_tiles = 100

[auto_layout]
grid_width = 12
headcount = 5

[plan]
include_floor_tiles = true

[staffing.cpu]
warning = 60.0
critical = 85.0
"#,
        )
        .unwrap();

        assert_eq!(config.grid.min_tiles, 100);
        assert_eq!(config.grid.max_tiles, 2000);
        assert_eq!(config.auto_layout.grid_width, 12);
        assert_eq!(config.auto_layout.grid_height, 8);
        assert_eq!(config.auto_layout.headcount, 5);
        assert!(config.plan.include_floor_tiles);
        assert_eq!(config.plan.workstation_spacing, 2);
        assert_eq!(config.staffing.cpu.warning, 60.0);
        assert_eq!(config.staffing.disk.critical, 90.0);

        let plan = config.plan_config();
        assert!(plan.include_floor_tiles);
        assert_eq!(plan.grid.min_tiles, 100);
    }

    #[test]
    fn test_parse_error() {
        let err = OfficeConfig::from_str("[grid]\nmin_tiles = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = OfficeConfig::from_file(Path::new("/nonexistent/office.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_editor_ledger_uses_limit() {
        let ledger = EditorOptions::default().with_history_limit(7).ledger();
        assert_eq!(ledger.history().limit(), 7);
    }
}
