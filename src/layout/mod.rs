//! Zoning and furnishing engine
//!
//! Two strategies produce zones over the same [`ZoneKind`]s:
//!
//! - [`zones::generate_zones`] partitions a resource-sized grid into a fixed
//!   topology separated by walkways.
//! - [`auto::calculate_zones`] stacks full-width zones chosen from headcount
//!   breakpoints.
//!
//! Either set of zones is then populated by the strategies in [`furnish`],
//! producing an [`OfficePlan`].

pub mod auto;
pub mod config;
pub mod furnish;
pub mod lint;
pub mod types;
pub mod zones;

pub use auto::{auto_layout, calculate_zones};
pub use config::{AutoLayoutConfig, PlanConfig, ZoneOptions};
pub use furnish::{floor_tiles, furnish_zone, Furnishing};
pub use lint::{LintCategory, LintWarning};
pub use types::*;
pub use zones::generate_zones;

use tracing::debug;

use crate::grid::{calculate_grid, GridSpec, VmSpec};

/// Generate a complete office for a virtual machine
///
/// The grid is sized from the resource profile, partitioned into the fixed
/// zone topology, and every functional zone is furnished. The work zone
/// receives `headcount` workstations.
pub fn plan_for_vm(spec: &VmSpec, headcount: u32, config: &PlanConfig) -> OfficePlan {
    let grid = calculate_grid(spec, &config.grid);
    let zones = generate_zones(&grid, &config.zones);
    debug!(
        width = grid.width,
        height = grid.height,
        zones = zones.len(),
        headcount,
        "partitioned office for vm"
    );
    populate(
        grid,
        zones,
        headcount,
        config.workstation_spacing,
        config.include_floor_tiles,
    )
}

/// Furnish every zone and assemble the plan. Floor tiles come first so
/// they sit under everything else in emission order.
pub(crate) fn populate(
    grid: GridSpec,
    zones: Vec<Zone>,
    headcount: u32,
    spacing: u32,
    include_floor_tiles: bool,
) -> OfficePlan {
    let mut objects = if include_floor_tiles {
        floor_tiles(&zones)
    } else {
        Vec::new()
    };
    let mut workstations = Vec::new();

    for zone in &zones {
        let furnishing = furnish_zone(zone, headcount, spacing);
        objects.extend(furnishing.objects);
        workstations.extend(furnishing.workstations);
    }

    OfficePlan {
        grid,
        zones,
        objects,
        workstations,
        headcount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_reference_vm() {
        let spec = VmSpec::new(8, 16, 200, 1000);
        let plan = plan_for_vm(&spec, 4, &PlanConfig::default());

        for kind in ZoneKind::ALL {
            assert!(plan.has_zone(kind), "missing {} zone", kind);
        }
        // 19x13 grid: the admin column is only four cells wide, so one executive desk
        assert_eq!((plan.grid.width, plan.grid.height), (19, 13));
        assert_eq!(plan.workstations.len(), 4);
        assert_eq!(plan.objects_with_sprite("desk").count(), 4 + 1);
    }

    #[test]
    fn test_floor_tiles_precede_furniture() {
        let config = AutoLayoutConfig::new(2).with_floor_tiles(true);
        let plan = auto_layout(&config);
        let floor_count = plan
            .objects
            .iter()
            .take_while(|o| o.kind == crate::scene::ObjectKind::Floor)
            .count();
        assert_eq!(floor_count, 64);
        assert!(plan.objects.len() > 64);
    }
}
