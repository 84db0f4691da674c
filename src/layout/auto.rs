//! Headcount-driven auto-layout
//!
//! Picks zone proportions from headcount breakpoints. Every zone spans the
//! full grid width and the zones are stacked top to bottom:
//!
//! | headcount | work    | meet    | rest     | admin    |
//! |-----------|---------|---------|----------|----------|
//! | 0..=4     | 0-60%   |         | 60-100%  |          |
//! | 5..=8     | 0-50%   | 50-70%  | 70-100%  |          |
//! | 9+        | 0-40%   | 40-60%  | 60-85%   | 85-100%  |

use tracing::debug;

use crate::grid::GridSpec;

use super::config::AutoLayoutConfig;
use super::populate;
use super::types::{OfficePlan, Rect, Zone, ZoneKind};

/// Zone boundaries as (numerator, denominator) fractions of the grid height
fn breakpoints(headcount: u32) -> &'static [(ZoneKind, i64, i64)] {
    match headcount {
        0..=4 => &[(ZoneKind::Work, 3, 5), (ZoneKind::Rest, 1, 1)],
        5..=8 => &[
            (ZoneKind::Work, 1, 2),
            (ZoneKind::Meet, 7, 10),
            (ZoneKind::Rest, 1, 1),
        ],
        _ => &[
            (ZoneKind::Work, 2, 5),
            (ZoneKind::Meet, 3, 5),
            (ZoneKind::Rest, 17, 20),
            (ZoneKind::Admin, 1, 1),
        ],
    }
}

/// Split a grid into full-width zones for a headcount
///
/// Each zone ends at the floor of its fraction of the height (the last zone
/// ends at the bottom row) and the next one starts on the following row.
/// Zones squeezed out by a very short grid are omitted.
pub fn calculate_zones(
    grid_width: u32,
    grid_height: u32,
    headcount: u32,
    include_common_areas: bool,
) -> Vec<Zone> {
    let last_x = i64::from(grid_width.max(1)) - 1;
    let height = i64::from(grid_height.max(1));

    if !include_common_areas {
        return vec![Zone::new(
            "zone-work-1",
            ZoneKind::Work,
            Rect::from_corners(0, 0, last_x, height - 1),
        )];
    }

    let mut zones = Vec::new();
    let mut start_y = 0;
    for &(kind, num, den) in breakpoints(headcount) {
        let end_y = if num == den {
            height - 1
        } else {
            height * num / den
        };
        if start_y <= end_y {
            zones.push(Zone::new(
                format!("zone-{}-1", kind),
                kind,
                Rect::from_corners(0, start_y, last_x, end_y),
            ));
        }
        start_y = start_y.max(end_y + 1);
    }
    zones
}

/// Generate a complete office for a headcount
pub fn auto_layout(config: &AutoLayoutConfig) -> OfficePlan {
    let grid = GridSpec::new(config.grid_width, config.grid_height);
    let zones = calculate_zones(
        grid.width,
        grid.height,
        config.headcount,
        config.include_common_areas,
    );
    debug!(
        width = grid.width,
        height = grid.height,
        headcount = config.headcount,
        zones = zones.len(),
        "auto-layout zones selected"
    );
    populate(
        grid,
        zones,
        config.headcount,
        config.workstation_spacing,
        config.include_floor_tiles,
    )
}
