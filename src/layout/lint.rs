//! Lint checks for generated office plans
//!
//! Runs after generation to report mechanical defects: zones leaving the
//! grid, functional zones overlapping, solid objects sharing a cell or
//! standing outside the grid, and offices with fewer desks than people.

use std::collections::HashMap;
use std::fmt;

use crate::scene::CellKey;

use super::types::OfficePlan;

/// A lint warning about a plan defect
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Bounds,
    Overlap,
    Collision,
    Capacity,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Collision => write!(f, "collision"),
            LintCategory::Capacity => write!(f, "capacity"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all lint checks on a plan.
pub fn check(plan: &OfficePlan) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_bounds(plan, &mut warnings);
    check_overlaps(plan, &mut warnings);
    check_collisions(plan, &mut warnings);
    check_capacity(plan, &mut warnings);
    warnings
}

fn check_bounds(plan: &OfficePlan, warnings: &mut Vec<LintWarning>) {
    let width = i64::from(plan.grid.width);
    let height = i64::from(plan.grid.height);

    for zone in &plan.zones {
        if !zone.rect.within(width, height) {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "zone \"{}\" ({}x{} at {},{}) extends past the {}x{} grid",
                    zone.id, zone.rect.w, zone.rect.h, zone.rect.x, zone.rect.y, width, height
                ),
            });
        }
    }

    for object in &plan.objects {
        let cell = object.cell();
        if cell.x < 0 || cell.y < 0 || cell.x >= width || cell.y >= height {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "\"{}\" at ({}, {}) is outside the grid",
                    object.sprite, object.grid_x, object.grid_y
                ),
            });
        }
    }
}

fn check_overlaps(plan: &OfficePlan, warnings: &mut Vec<LintWarning>) {
    let functional: Vec<_> = plan.zones.iter().filter(|z| !z.kind.is_walkway()).collect();
    for (i, a) in functional.iter().enumerate() {
        for b in &functional[i + 1..] {
            if a.rect.intersects(&b.rect) {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!("zone \"{}\" overlaps zone \"{}\"", a.id, b.id),
                });
            }
        }
    }
}

fn check_collisions(plan: &OfficePlan, warnings: &mut Vec<LintWarning>) {
    let mut claimed: HashMap<CellKey, &str> = HashMap::new();
    for object in plan.objects.iter().filter(|o| o.is_solid()) {
        let cell = object.cell();
        if let Some(owner) = claimed.get(&cell) {
            warnings.push(LintWarning {
                category: LintCategory::Collision,
                message: format!(
                    "\"{}\" shares cell {} with \"{}\"",
                    object.sprite, cell, owner
                ),
            });
        } else {
            claimed.insert(cell, &object.sprite);
        }
    }
}

fn check_capacity(plan: &OfficePlan, warnings: &mut Vec<LintWarning>) {
    let seats = plan.workstations.len();
    let headcount = plan.headcount as usize;
    if seats < headcount {
        warnings.push(LintWarning {
            category: LintCategory::Capacity,
            message: format!(
                "{} workstations generated for a headcount of {}",
                seats, headcount
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;
    use crate::layout::types::{Rect, Zone, ZoneKind};
    use crate::scene::SceneObject;

    fn plan(zones: Vec<Zone>, objects: Vec<SceneObject>, headcount: u32) -> OfficePlan {
        OfficePlan {
            grid: GridSpec::new(8, 8),
            zones,
            objects,
            workstations: Vec::new(),
            headcount,
        }
    }

    fn categories(warnings: &[LintWarning]) -> Vec<String> {
        warnings.iter().map(|w| w.category.to_string()).collect()
    }

    #[test]
    fn test_clean_plan() {
        let p = plan(
            vec![Zone::new("a", ZoneKind::Work, Rect::new(0, 0, 8, 8))],
            vec![SceneObject::furniture("desk", 1.0, 0.5)],
            0,
        );
        assert!(check(&p).is_empty());
    }

    #[test]
    fn test_zone_out_of_bounds() {
        let p = plan(
            vec![Zone::new("a", ZoneKind::Work, Rect::new(4, 0, 8, 8))],
            vec![],
            0,
        );
        assert_eq!(categories(&check(&p)), vec!["bounds"]);
    }

    #[test]
    fn test_object_out_of_bounds() {
        let p = plan(vec![], vec![SceneObject::furniture("chair", -0.5, 3.0)], 0);
        assert_eq!(categories(&check(&p)), vec!["bounds"]);
    }

    #[test]
    fn test_overlap_ignores_walkways() {
        let p = plan(
            vec![
                Zone::new("a", ZoneKind::Work, Rect::new(0, 0, 4, 4)),
                Zone::new("b", ZoneKind::Walkway, Rect::new(2, 0, 2, 8)),
                Zone::new("c", ZoneKind::Meet, Rect::new(3, 3, 2, 2)),
            ],
            vec![],
            0,
        );
        let warnings = check(&p);
        assert_eq!(categories(&warnings), vec!["overlap"]);
        assert!(warnings[0].message.contains("\"a\""));
        assert!(warnings[0].message.contains("\"c\""));
    }

    #[test]
    fn test_solid_collision_but_not_companion() {
        let p = plan(
            vec![],
            vec![
                SceneObject::furniture("desk", 1.0, 0.5),
                SceneObject::object("object-monitor", 1.0, 0.3),
                SceneObject::furniture("printer", 1.2, 0.9),
            ],
            0,
        );
        let warnings = check(&p);
        assert_eq!(categories(&warnings), vec!["collision"]);
        assert!(warnings[0].message.contains("printer"));
    }

    #[test]
    fn test_capacity_shortfall() {
        let p = plan(vec![], vec![], 3);
        let warnings = check(&p);
        assert_eq!(categories(&warnings), vec!["capacity"]);
        assert_eq!(
            warnings[0].to_string(),
            "capacity: 0 workstations generated for a headcount of 3"
        );
    }
}
