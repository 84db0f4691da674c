//! Grid sizing from a virtual machine resource profile
//!
//! The office floor grows with the machine it represents: every resource
//! contributes weighted points, the points become a tile budget, and the
//! budget is shaped into a grid that widens with the vCPU count.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resource profile of a monitored virtual machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmSpec {
    #[serde(rename = "vCPU")]
    pub vcpu: u32,
    #[serde(rename = "ramGB")]
    pub ram_gb: u32,
    #[serde(rename = "diskGB")]
    pub disk_gb: u32,
    pub net_mbps: u32,
}

impl VmSpec {
    pub fn new(vcpu: u32, ram_gb: u32, disk_gb: u32, net_mbps: u32) -> Self {
        Self {
            vcpu,
            ram_gb,
            disk_gb,
            net_mbps,
        }
    }

    /// Weighted resource score before scaling
    pub fn points(&self) -> f64 {
        let cpu = f64::from(self.vcpu) * 10.0;
        let ram = f64::from(self.ram_gb) * 3.0;
        let disk = (f64::from(self.disk_gb) + 1.0).log2() * 8.0;
        let net = (f64::from(self.net_mbps) + 1.0).log2() * 6.0;
        cpu + ram + disk + net
    }
}

/// Grid dimensions in tiles, plus the pixel size of one isometric tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "tileW")]
    pub tile_width: u32,
    #[serde(rename = "tileH")]
    pub tile_height: u32,
}

impl GridSpec {
    pub const DEFAULT_TILE_WIDTH: u32 = 64;
    pub const DEFAULT_TILE_HEIGHT: u32 = 32;

    /// Grid with the default 64x32 tile size. Zero dimensions become 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            tile_width: Self::DEFAULT_TILE_WIDTH,
            tile_height: Self::DEFAULT_TILE_HEIGHT,
        }
    }

    /// Number of tiles, widened so large hand-built grids cannot overflow
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Options for [`calculate_grid`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Lower bound of the tile budget
    pub min_tiles: u32,
    /// Upper bound of the tile budget
    pub max_tiles: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Multiplier applied to the resource score
    pub k: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            min_tiles: 200,
            max_tiles: 2000,
            tile_width: GridSpec::DEFAULT_TILE_WIDTH,
            tile_height: GridSpec::DEFAULT_TILE_HEIGHT,
            k: 1.0,
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile budget bounds
    pub fn with_tile_budget(mut self, min_tiles: u32, max_tiles: u32) -> Self {
        self.min_tiles = min_tiles;
        self.max_tiles = max_tiles;
        self
    }

    /// Set the score multiplier
    pub fn with_multiplier(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    /// Set the pixel size of one tile
    pub fn with_tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    fn bounds(&self) -> (u32, u32) {
        let min = self.min_tiles.max(1);
        (min, self.max_tiles.max(min))
    }
}

/// Tile budget for a resource profile, clamped to the configured bounds
pub fn tile_budget(spec: &VmSpec, options: &GridOptions) -> u32 {
    let (min, max) = options.bounds();
    let scaled = (spec.points() * options.k).round();
    if scaled.is_nan() {
        return min;
    }
    scaled.clamp(f64::from(min), f64::from(max)) as u32
}

/// Size the office grid for a virtual machine
pub fn calculate_grid(spec: &VmSpec, options: &GridOptions) -> GridSpec {
    let tiles = tile_budget(spec, options);
    let aspect = (1.2 + f64::from(spec.vcpu) / 32.0).clamp(1.2, 1.8);

    let width = ((f64::from(tiles) * aspect).sqrt().round() as u32).max(1);
    let mut height = ((f64::from(tiles) / f64::from(width)).round() as u32).max(1);

    // Rounding both sides can leave the area just outside the budget.
    let (min, max) = options.bounds();
    let lowest = min.div_ceil(width);
    let highest = max / width;
    if lowest <= highest {
        height = height.clamp(lowest, highest).max(1);
    }

    debug!(
        points = spec.points(),
        tiles,
        aspect,
        width,
        height,
        "sized office grid"
    );

    GridSpec {
        width,
        height,
        tile_width: options.tile_width,
        tile_height: options.tile_height,
    }
}
