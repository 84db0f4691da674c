//! Configuration for zoning and auto-layout

use serde::{Deserialize, Serialize};

use crate::grid::GridOptions;

/// Options for the resource-driven zone partitioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneOptions {
    /// Inset of every zone from the grid border
    pub margin: u32,

    /// Thickness of the corridors between zones
    pub walkway_width: u32,
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self {
            margin: 2,
            walkway_width: 2,
        }
    }
}

impl ZoneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the walkway width (at least 1)
    pub fn with_walkway_width(mut self, width: u32) -> Self {
        self.walkway_width = width.max(1);
        self
    }
}

/// Input of the headcount-driven auto-layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoLayoutConfig {
    pub grid_width: u32,
    pub grid_height: u32,

    /// Number of workstations to provision
    pub headcount: u32,

    /// Add meeting, break and management areas around the work zone
    pub include_common_areas: bool,

    /// Grid distance between neighbouring workstations
    pub workstation_spacing: u32,

    /// Lay a floor tile under every zone cell
    pub include_floor_tiles: bool,
}

impl Default for AutoLayoutConfig {
    fn default() -> Self {
        Self {
            grid_width: 8,
            grid_height: 8,
            headcount: 0,
            include_common_areas: true,
            workstation_spacing: 2,
            include_floor_tiles: false,
        }
    }
}

impl AutoLayoutConfig {
    /// Default 8x8 office for a headcount
    pub fn new(headcount: u32) -> Self {
        Self {
            headcount,
            ..Self::default()
        }
    }

    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_headcount(mut self, headcount: u32) -> Self {
        self.headcount = headcount;
        self
    }

    pub fn with_common_areas(mut self, include: bool) -> Self {
        self.include_common_areas = include;
        self
    }

    pub fn with_workstation_spacing(mut self, spacing: u32) -> Self {
        self.workstation_spacing = spacing;
        self
    }

    pub fn with_floor_tiles(mut self, include: bool) -> Self {
        self.include_floor_tiles = include;
        self
    }
}

/// Configuration of the resource-driven pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub grid: GridOptions,
    pub zones: ZoneOptions,
    pub workstation_spacing: u32,
    pub include_floor_tiles: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            grid: GridOptions::default(),
            zones: ZoneOptions::default(),
            workstation_spacing: 2,
            include_floor_tiles: false,
        }
    }
}

impl PlanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_zones(mut self, zones: ZoneOptions) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_workstation_spacing(mut self, spacing: u32) -> Self {
        self.workstation_spacing = spacing;
        self
    }

    pub fn with_floor_tiles(mut self, include: bool) -> Self {
        self.include_floor_tiles = include;
        self
    }
}
