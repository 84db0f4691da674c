//! Integration tests for plan linting

use office_layout::grid::{GridOptions, VmSpec};
use office_layout::layout::lint::{self, LintCategory};
use office_layout::layout::{auto_layout, plan_for_vm, AutoLayoutConfig, PlanConfig};
use office_layout::{open_plan, EditorOptions};

#[test]
fn test_default_layouts_are_clean() {
    for headcount in 0..=16 {
        let plan = auto_layout(&AutoLayoutConfig::new(headcount));
        let warnings = lint::check(&plan);
        let defects: Vec<String> = warnings
            .iter()
            .filter(|w| w.category != LintCategory::Capacity)
            .map(|w| w.to_string())
            .collect();
        assert!(
            defects.is_empty(),
            "Expected no defects for headcount {}, got: {:?}",
            headcount,
            defects
        );
    }
}

#[test]
fn test_capacity_shortfall_on_small_grid() {
    let plan = auto_layout(&AutoLayoutConfig::new(12));
    let warnings = lint::check(&plan);
    let categories: Vec<String> = warnings.iter().map(|w| w.category.to_string()).collect();
    assert_eq!(categories, vec!["capacity"]);
    assert!(warnings[0].message.contains("6 workstations"));
}

#[test]
fn test_capacity_met_on_roomy_grid() {
    let plan = auto_layout(&AutoLayoutConfig::new(12).with_grid(16, 30));
    assert!(lint::check(&plan).is_empty());
}

#[test]
fn test_reference_vm_office_is_clean() {
    // the 19x13 reference office squeezes the break area into a single row
    let plan = plan_for_vm(&VmSpec::new(8, 16, 200, 1000), 4, &PlanConfig::default());
    assert!(lint::check(&plan).is_empty());

    let (ledger, report) = open_plan(&plan, &EditorOptions::default());
    assert!(report.is_clean(), "rejected {:?}", report.rejected);
    assert_eq!(ledger.len(), plan.objects.len());
}

#[test]
fn test_narrow_offices_stay_on_the_grid() {
    let plans = [
        auto_layout(&AutoLayoutConfig::new(3).with_grid(2, 8)),
        auto_layout(&AutoLayoutConfig::new(6).with_grid(3, 10)),
        plan_for_vm(
            &VmSpec::new(8, 16, 200, 1000),
            4,
            &PlanConfig::default().with_grid(GridOptions::default().with_tile_budget(20, 30)),
        ),
    ];
    for plan in &plans {
        let defects: Vec<String> = lint::check(plan)
            .iter()
            .filter(|w| w.category != LintCategory::Capacity)
            .map(|w| w.to_string())
            .collect();
        assert!(
            defects.is_empty(),
            "{}x{} grid: {:?}",
            plan.grid.width,
            plan.grid.height,
            defects
        );
    }
}
