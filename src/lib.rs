//! Office Layout - zoned isometric offices for virtual machines
//!
//! This library sizes an office grid from a machine's resources, partitions
//! it into functional zones, furnishes each zone, and offers an editing
//! ledger with collision tracking and undo/redo.
//!
//! # Example
//!
//! ```rust
//! use office_layout::{plan_for_vm, PlanConfig, VmSpec};
//!
//! let plan = plan_for_vm(&VmSpec::new(8, 16, 200, 1000), 4, &PlanConfig::default());
//! assert_eq!(plan.workstations.len(), 4);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod isometric;
pub mod layout;
pub mod scene;
pub mod staffing;

pub use config::{ConfigError, EditorOptions, OfficeConfig, PlanOptions};
pub use editor::{
    EditorMode, HistoryRecord, LoadReport, ObjectId, PlacementError, PlacementLedger,
};
pub use error::OfficeError;
pub use grid::{calculate_grid, tile_budget, GridOptions, GridSpec, VmSpec};
pub use layout::{
    auto_layout, calculate_zones, generate_zones, plan_for_vm, AutoLayoutConfig, OfficePlan,
    PlanConfig, Zone, ZoneKind, ZoneOptions,
};
pub use scene::{export_json, import_json, SavedScene, SceneError, SceneObject};

use tracing::debug;

/// Load a generated plan into a fresh ledger
///
/// The report lists any solid objects the generator stacked onto an
/// already claimed cell; they are left out of the ledger.
pub fn open_plan(plan: &OfficePlan, options: &EditorOptions) -> (PlacementLedger, LoadReport) {
    let mut ledger = options.ledger();
    let report = ledger.load(plan.objects.iter().cloned());
    debug!(
        objects = ledger.len(),
        rejected = report.rejected.len(),
        "opened plan in editor"
    );
    (ledger, report)
}

/// Export a plan as a scene document. The headcount is recorded as the VPS count.
pub fn export_plan(plan: &OfficePlan, name: &str) -> Result<String, OfficeError> {
    Ok(export_json(name, &plan.objects, plan.headcount)?)
}

/// Export the current contents of a ledger as a scene document
pub fn export_ledger(
    ledger: &PlacementLedger,
    name: &str,
    vps_count: u32,
) -> Result<String, OfficeError> {
    Ok(export_json(name, &ledger.export(), vps_count)?)
}

/// Read a scene document into a fresh ledger
pub fn import_scene(
    json: &str,
    options: &EditorOptions,
) -> Result<(SavedScene, PlacementLedger, LoadReport), OfficeError> {
    let scene = import_json(json)?;
    let mut ledger = options.ledger();
    let report = ledger.load(scene.objects.iter().cloned());
    Ok((scene, ledger, report))
}
