//! Resource-driven zone partitioning
//!
//! Splits a grid into a fixed topology: a large work zone on the left, a
//! vertical walkway, and a right-hand column holding the meeting, rest and
//! admin zones separated by horizontal walkways.
//!
//! ```text
//! +--------------------------------------+
//! |  margin                              |
//! |  +-----------+  +-----------------+  |
//! |  |           |  | meet            |  |
//! |  |           |  +-----------------+  |
//! |  |   work    |w | walkway         |  |
//! |  |           |a +-----------------+  |
//! |  |           |l | rest            |  |
//! |  |           |k +-----------------+  |
//! |  |           |  | walkway         |  |
//! |  |           |  +-----------------+  |
//! |  |           |  | admin           |  |
//! |  +-----------+  +-----------------+  |
//! +--------------------------------------+
//! ```

use tracing::debug;

use crate::grid::GridSpec;

use super::config::ZoneOptions;
use super::types::{Rect, Zone, ZoneKind};

/// Smallest grid the topology fits in (margin 0, walkway 1)
pub const MIN_PARTITION_WIDTH: i64 = 3;
pub const MIN_PARTITION_HEIGHT: i64 = 5;

/// Partition a grid into work, meet, rest and admin zones plus walkways
///
/// Zones come back in a fixed order: work, vertical walkway, meet, first
/// horizontal walkway, rest, second horizontal walkway, admin. A grid
/// smaller than 3x5 is partitioned as 3x5 and the zones are clipped back to
/// it; zones left without a cell are omitted.
pub fn generate_zones(grid: &GridSpec, options: &ZoneOptions) -> Vec<Zone> {
    let width = i64::from(grid.width).max(MIN_PARTITION_WIDTH);
    let height = i64::from(grid.height).max(MIN_PARTITION_HEIGHT);
    let (margin, walkway) = fit_insets(
        width,
        height,
        i64::from(options.margin),
        i64::from(options.walkway_width).max(1),
    );

    if margin != i64::from(options.margin) || walkway != i64::from(options.walkway_width) {
        debug!(
            width,
            height,
            margin,
            walkway,
            "reduced zone insets to fit a small grid"
        );
    }

    let inner_w = (width - margin * 2).max(1);
    let inner_h = (height - margin * 2).max(1);

    let work_w = (inner_w * 3 / 5).max(1);
    let column_w = (inner_w - work_w - walkway).max(1);
    let column_x = margin + work_w + walkway;

    let available_h = (inner_h - walkway * 2).max(1);
    let meet_h = (available_h * 3 / 8).max(1);
    let rest_h = (available_h * 3 / 8).max(1);
    let admin_h = (available_h - meet_h - rest_h).max(1);

    let rest_y = margin + meet_h + walkway;
    let admin_y = rest_y + rest_h + walkway;

    let zones = [
        Zone::new(
            "zone-work-1",
            ZoneKind::Work,
            Rect::new(margin, margin, work_w, inner_h),
        ),
        Zone::new(
            "zone-walkway-vertical-1",
            ZoneKind::Walkway,
            Rect::new(margin + work_w, margin, walkway, inner_h),
        ),
        Zone::new(
            "zone-meet-1",
            ZoneKind::Meet,
            Rect::new(column_x, margin, column_w, meet_h),
        ),
        Zone::new(
            "zone-walkway-horizontal-1",
            ZoneKind::Walkway,
            Rect::new(column_x, margin + meet_h, column_w, walkway),
        ),
        Zone::new(
            "zone-rest-1",
            ZoneKind::Rest,
            Rect::new(column_x, rest_y, column_w, rest_h),
        ),
        Zone::new(
            "zone-walkway-horizontal-2",
            ZoneKind::Walkway,
            Rect::new(column_x, rest_y + rest_h, column_w, walkway),
        ),
        Zone::new(
            "zone-admin-1",
            ZoneKind::Admin,
            Rect::new(column_x, admin_y, column_w, admin_h),
        ),
    ];

    let grid_w = i64::from(grid.width);
    let grid_h = i64::from(grid.height);
    zones
        .into_iter()
        .filter_map(|zone| {
            let rect = zone.rect.clipped(grid_w, grid_h)?;
            Some(Zone { rect, ..zone })
        })
        .collect()
}

/// Shrink margin first, then walkway, until the topology fits the grid
fn fit_insets(width: i64, height: i64, mut margin: i64, mut walkway: i64) -> (i64, i64) {
    while !insets_fit(width, height, margin, walkway) {
        if margin > 0 {
            margin -= 1;
        } else if walkway > 1 {
            walkway -= 1;
        } else {
            break;
        }
    }
    (margin, walkway)
}

fn insets_fit(width: i64, height: i64, margin: i64, walkway: i64) -> bool {
    let inner_w = width - margin * 2;
    let inner_h = height - margin * 2;
    if inner_w < 2 {
        return false;
    }
    let column_w = inner_w - inner_w * 3 / 5 - walkway;
    column_w >= 1 && inner_h - walkway * 2 >= 3
}
