//! Zone furnishing strategies
//!
//! Each strategy is a pure function of a zone rectangle (plus parameters)
//! that returns the objects to place in it. Coordinates are derived from the
//! zone bounds only. An item whose cell would leave the zone, or land on a
//! cell already claimed by a solid item, is dropped, so zones too small for
//! an item simply go without it.

use std::collections::HashSet;

use tracing::trace;

use crate::scene::{CellKey, SceneObject};

use super::types::{GridPoint, Rect, Workstation, Zone, ZoneKind};

/// Objects generated for a zone, plus the workstations among them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Furnishing {
    pub objects: Vec<SceneObject>,
    pub workstations: Vec<Workstation>,
}

/// Furnish a zone according to its kind. Walkways stay empty.
pub fn furnish_zone(zone: &Zone, headcount: u32, spacing: u32) -> Furnishing {
    let furnishing = match zone.kind {
        ZoneKind::Work => generate_workstations(&zone.rect, headcount, spacing),
        ZoneKind::Meet => Furnishing {
            objects: generate_meeting_area(&zone.rect),
            workstations: Vec::new(),
        },
        ZoneKind::Rest => Furnishing {
            objects: generate_break_area(&zone.rect),
            workstations: Vec::new(),
        },
        ZoneKind::Admin => Furnishing {
            objects: generate_management_area(&zone.rect),
            workstations: Vec::new(),
        },
        ZoneKind::Walkway => Furnishing::default(),
    };
    trace!(
        zone = %zone.id,
        objects = furnishing.objects.len(),
        workstations = furnishing.workstations.len(),
        "furnished zone"
    );
    furnishing
}

/// Objects accepted into one zone so far, and the cells their solid
/// members claim
struct ZoneFill<'a> {
    zone: &'a Rect,
    objects: Vec<SceneObject>,
    claimed: HashSet<CellKey>,
}

impl<'a> ZoneFill<'a> {
    fn new(zone: &'a Rect) -> Self {
        Self {
            zone,
            objects: Vec::new(),
            claimed: HashSet::new(),
        }
    }

    fn fits(&self, object: &SceneObject) -> bool {
        let cell = object.cell();
        self.zone.contains_cell(cell.x, cell.y)
            && !(object.is_solid() && self.claimed.contains(&cell))
    }

    /// Accept an object if it fits, reporting whether it did
    fn place(&mut self, object: SceneObject) -> bool {
        if !self.fits(&object) {
            return false;
        }
        if object.is_solid() {
            self.claimed.insert(object.cell());
        }
        self.objects.push(object);
        true
    }

    /// Accept every object of a group, or none of them
    fn place_all(&mut self, group: Vec<SceneObject>) -> bool {
        if !group.iter().all(|o| self.fits(o)) {
            return false;
        }
        for object in group {
            self.place(object);
        }
        true
    }

    fn into_objects(self) -> Vec<SceneObject> {
        self.objects
    }
}

/// Number of workstations placed side by side in one row
pub fn workstations_per_row(count: u32) -> u32 {
    let root = f64::from(count).sqrt().ceil() as u32;
    root.min(3)
}

/// Rows of desks, up to three per row, each with chair, monitor and
/// (for every other desk) a keyboard. A workstation whose chair would fall
/// past the zone is left out.
pub fn generate_workstations(zone: &Rect, count: u32, spacing: u32) -> Furnishing {
    let mut fill = ZoneFill::new(zone);
    let mut workstations = Vec::new();
    let spacing = i64::from(spacing.max(1));
    let per_row = workstations_per_row(count);

    if per_row > 0 {
        let rows = count.div_ceil(per_row);
        let mut index = 0u32;

        'rows: for row in 0..i64::from(rows) {
            if index >= count {
                break;
            }
            let row_y = zone.y + row * spacing;
            if row_y > zone.end_y() {
                break;
            }

            for col in 0..i64::from(per_row) {
                if index >= count {
                    break 'rows;
                }
                let col_x = zone.x + col * spacing + 1;
                if col_x > zone.end_x() {
                    break;
                }

                let x = col_x as f64;
                let y = row_y as f64;
                let mut group = vec![
                    SceneObject::furniture("desk", x, y + 0.5),
                    SceneObject::furniture("chair", x, y + 1.0),
                    SceneObject::object("object-monitor", x, y + 0.3),
                ];
                if index % 2 == 0 {
                    group.push(SceneObject::object("object-keyboard", x, y + 0.6));
                }
                if !fill.place_all(group) {
                    continue;
                }

                workstations.push(Workstation {
                    index: index as usize,
                    desk: GridPoint::new(x, y + 0.5),
                    seat: GridPoint::new(x, y + 1.0),
                });
                index += 1;
            }
        }
    }

    if zone.w >= 7 {
        let y = (zone.y + 1) as f64;
        fill.place(SceneObject::object("plant-small", zone.x as f64, y));
        fill.place(SceneObject::furniture("printer", (zone.end_x() - 1) as f64, y));
    }

    Furnishing {
        objects: fill.into_objects(),
        workstations,
    }
}

fn center_row(zone: &Rect) -> i64 {
    (zone.y + zone.end_y()) / 2
}

fn span(zone: &Rect) -> i64 {
    zone.end_x() - zone.x
}

/// One or two meeting tables with chairs, a whiteboard, a cabinet and a plant
pub fn generate_meeting_area(zone: &Rect) -> Vec<SceneObject> {
    let mut fill = ZoneFill::new(zone);
    let cy = center_row(zone) as f64;

    let t1 = (zone.x + span(zone) / 3) as f64;
    if fill.place(SceneObject::furniture("meeting-table", t1, cy)) {
        fill.place(SceneObject::furniture("chair", t1 - 0.5, cy));
        fill.place(SceneObject::furniture("chair", t1 + 0.5, cy));
        fill.place(SceneObject::furniture("chair", t1, cy - 0.5));
        fill.place(SceneObject::furniture("chair", t1, cy + 0.5));
    }

    if span(zone) >= 5 {
        let t2 = (zone.x + span(zone) * 2 / 3) as f64;
        if fill.place(SceneObject::furniture("meeting-table", t2, cy)) {
            fill.place(SceneObject::furniture("chair", t2 - 0.5, cy));
            fill.place(SceneObject::furniture("chair", t2 + 0.5, cy));
        }
    }

    let end_x = zone.end_x() as f64;
    let end_y = zone.end_y() as f64;
    fill.place(SceneObject::object("whiteboard", end_x, cy));
    fill.place(SceneObject::furniture("file-cabinet", end_x, end_y));
    fill.place(SceneObject::object("plant-medium", zone.x as f64, end_y));

    fill.into_objects()
}

/// Sofa, break table with coffee machine, water dispenser, bookshelf and
/// a handful of decorations
pub fn generate_break_area(zone: &Rect) -> Vec<SceneObject> {
    let mut fill = ZoneFill::new(zone);
    let cy = center_row(zone) as f64;
    let start_x = zone.x as f64;
    let start_y = zone.y as f64;
    let end_x = zone.end_x() as f64;
    let end_y = zone.end_y() as f64;
    let table_x = (zone.x + span(zone) / 2) as f64;

    fill.place(SceneObject::object("sofa", start_x + 1.0, cy));
    if fill.place(SceneObject::object("break-room-table", table_x, cy)) {
        fill.place(SceneObject::object("coffee-machine", table_x + 0.5, cy - 0.3));
    }
    fill.place(SceneObject::furniture("water-dispenser", end_x - 2.0, cy));
    fill.place(SceneObject::furniture("bookshelf", end_x, cy));
    fill.place(SceneObject::object("plant-large", start_x, cy));
    fill.place(SceneObject::object("plant-medium", end_x - 1.0, end_y));
    fill.place(SceneObject::object("clock", table_x, start_y));
    fill.place(SceneObject::object("game-console", start_x + 2.0, end_y));

    fill.into_objects()
}

/// Executive desk clusters plus storage and decorations
pub fn generate_management_area(zone: &Rect) -> Vec<SceneObject> {
    let mut fill = ZoneFill::new(zone);
    let cy = center_row(zone) as f64;

    let mut clusters = vec![(zone.x + span(zone) / 3) as f64];
    if span(zone) >= 5 {
        clusters.push((zone.x + span(zone) * 2 / 3) as f64);
    }
    for x in clusters {
        if fill.place(SceneObject::furniture("desk", x, cy - 0.3)) {
            fill.place(SceneObject::furniture("chair", x, cy + 0.3));
            fill.place(SceneObject::object("object-monitor", x, cy - 0.5));
        }
    }

    let start_x = zone.x as f64;
    let end_x = zone.end_x() as f64;
    let end_y = zone.end_y() as f64;
    fill.place(SceneObject::object("plant-large", start_x + 1.0, cy));
    fill.place(SceneObject::object("window", start_x, zone.y as f64));
    fill.place(SceneObject::object("door", end_x, cy));
    fill.place(SceneObject::object("filing-cabinet", end_x, end_y));
    fill.place(SceneObject::furniture("file-cabinet", end_x - 1.0, end_y));

    fill.into_objects()
}

/// One floor tile per cell of every zone, using the zone's carpet
pub fn floor_tiles(zones: &[Zone]) -> Vec<SceneObject> {
    zones
        .iter()
        .flat_map(|zone| {
            let sprite = zone.kind.floor_sprite();
            zone.rect
                .cells()
                .map(move |(x, y)| SceneObject::floor(sprite, x as f64, y as f64))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(objects: &[SceneObject], sprite: &str) -> usize {
        objects.iter().filter(|o| o.sprite == sprite).count()
    }

    #[test]
    fn test_workstations_per_row() {
        assert_eq!(workstations_per_row(0), 0);
        assert_eq!(workstations_per_row(1), 1);
        assert_eq!(workstations_per_row(2), 2);
        assert_eq!(workstations_per_row(4), 2);
        assert_eq!(workstations_per_row(5), 3);
        assert_eq!(workstations_per_row(100), 3);
    }

    #[test]
    fn test_single_workstation() {
        let zone = Rect::from_corners(0, 0, 7, 4);
        let out = generate_workstations(&zone, 1, 2);

        assert_eq!(
            out.objects[..4],
            [
                SceneObject::furniture("desk", 1.0, 0.5),
                SceneObject::furniture("chair", 1.0, 1.0),
                SceneObject::object("object-monitor", 1.0, 0.3),
                SceneObject::object("object-keyboard", 1.0, 0.6),
            ]
        );
        assert_eq!(out.workstations.len(), 1);
        assert_eq!(out.workstations[0].seat, GridPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_keyboards_on_even_indices() {
        let zone = Rect::from_corners(0, 0, 7, 4);
        let out = generate_workstations(&zone, 4, 2);
        assert_eq!(count(&out.objects, "desk"), 4);
        assert_eq!(count(&out.objects, "object-keyboard"), 2);
    }

    #[test]
    fn test_rows_stop_at_zone_bottom() {
        // 9 workstations need three rows at y = 0, 2, 4; only two fit in rows 0..=3
        let zone = Rect::from_corners(0, 0, 7, 3);
        let out = generate_workstations(&zone, 9, 2);
        assert_eq!(out.workstations.len(), 6);
        assert!(out.workstations.iter().all(|w| w.desk.y < 4.0));
    }

    #[test]
    fn test_columns_stop_at_zone_edge() {
        // columns would land on x = 1, 3, 5 but the zone ends at x = 3
        let zone = Rect::from_corners(0, 0, 3, 7);
        let out = generate_workstations(&zone, 9, 2);
        assert_eq!(out.workstations.len(), 6);
        assert!(out.workstations.iter().all(|w| w.desk.x <= 3.0));
        assert_eq!(count(&out.objects, "printer"), 0);
    }

    #[test]
    fn test_decorations_need_seven_columns() {
        let wide = generate_workstations(&Rect::from_corners(0, 0, 6, 4), 0, 2);
        assert_eq!(
            wide.objects,
            vec![
                SceneObject::object("plant-small", 0.0, 1.0),
                SceneObject::furniture("printer", 5.0, 1.0),
            ]
        );

        let narrow = generate_workstations(&Rect::from_corners(0, 0, 5, 4), 0, 2);
        assert!(narrow.objects.is_empty());
    }

    #[test]
    fn test_meeting_area_two_tables() {
        let objects = generate_meeting_area(&Rect::from_corners(0, 4, 7, 6));
        assert_eq!(count(&objects, "meeting-table"), 2);
        assert_eq!(count(&objects, "chair"), 6);
        assert_eq!(objects[0], SceneObject::furniture("meeting-table", 2.0, 5.0));
        assert_eq!(objects[5], SceneObject::furniture("meeting-table", 4.0, 5.0));
        assert_eq!(
            objects.last(),
            Some(&SceneObject::object("plant-medium", 0.0, 6.0))
        );
    }

    #[test]
    fn test_meeting_area_narrow_zone_one_table() {
        let objects = generate_meeting_area(&Rect::from_corners(0, 0, 4, 3));
        assert_eq!(count(&objects, "meeting-table"), 1);
        assert_eq!(count(&objects, "chair"), 4);
        assert_eq!(objects.len(), 8);
    }

    #[test]
    fn test_meeting_area_single_row_drops_chair_above() {
        let zone = Rect::from_corners(0, 5, 7, 5);
        let objects = generate_meeting_area(&zone);
        assert_eq!(count(&objects, "chair"), 5);
        assert!(!objects.contains(&SceneObject::furniture("chair", 2.0, 4.5)));
        assert!(objects
            .iter()
            .all(|o| zone.contains_cell(o.cell().x, o.cell().y)));
    }

    #[test]
    fn test_break_area_layout() {
        let objects = generate_break_area(&Rect::from_corners(0, 5, 7, 7));
        assert_eq!(objects.len(), 9);
        assert_eq!(objects[0], SceneObject::object("sofa", 1.0, 6.0));
        assert_eq!(objects[1], SceneObject::object("break-room-table", 3.0, 6.0));
        assert_eq!(objects[2], SceneObject::object("coffee-machine", 3.5, 5.7));
        assert_eq!(objects[3], SceneObject::furniture("water-dispenser", 5.0, 6.0));
        assert_eq!(objects[4], SceneObject::furniture("bookshelf", 7.0, 6.0));
    }

    #[test]
    fn test_cramped_break_area_keeps_first_solid_per_cell() {
        // four cells wide: sofa, table and dispenser all aim at column 14
        let objects = generate_break_area(&Rect::new(13, 5, 4, 1));
        assert_eq!(
            objects,
            vec![
                SceneObject::object("sofa", 14.0, 5.0),
                SceneObject::furniture("bookshelf", 16.0, 5.0),
                SceneObject::object("plant-large", 13.0, 5.0),
                SceneObject::object("plant-medium", 15.0, 5.0),
                SceneObject::object("clock", 14.0, 5.0),
                SceneObject::object("game-console", 15.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_two_column_break_area_stays_inside() {
        let zone = Rect::new(0, 6, 2, 2);
        let objects = generate_break_area(&zone);
        assert_eq!(count(&objects, "water-dispenser"), 0);
        assert_eq!(count(&objects, "game-console"), 0);
        assert!(objects
            .iter()
            .all(|o| zone.contains_cell(o.cell().x, o.cell().y)));
    }

    #[test]
    fn test_management_area_clusters() {
        let wide = generate_management_area(&Rect::from_corners(0, 6, 7, 8));
        assert_eq!(count(&wide, "desk"), 2);
        assert_eq!(wide[0], SceneObject::furniture("desk", 2.0, 6.7));
        assert_eq!(wide.len(), 11);

        let narrow = generate_management_area(&Rect::from_corners(0, 0, 3, 2));
        assert_eq!(count(&narrow, "desk"), 1);
        assert_eq!(narrow.len(), 8);
    }

    #[test]
    fn test_single_row_management_area_has_no_desk() {
        // the desk sits above the centre row, outside a one-row zone
        let objects = generate_management_area(&Rect::from_corners(0, 7, 7, 7));
        assert_eq!(count(&objects, "desk"), 0);
        assert_eq!(count(&objects, "chair"), 0);
        assert_eq!(count(&objects, "file-cabinet"), 1);
    }

    #[test]
    fn test_workstation_needs_room_for_its_chair() {
        // a one-row zone has no row below the desk for the chair
        let out = generate_workstations(&Rect::from_corners(0, 0, 7, 0), 3, 2);
        assert!(out.workstations.is_empty());
        assert_eq!(count(&out.objects, "desk"), 0);
    }

    #[test]
    fn test_walkway_stays_empty() {
        let zone = Zone::new("w", ZoneKind::Walkway, Rect::new(0, 0, 2, 10));
        assert_eq!(furnish_zone(&zone, 5, 2), Furnishing::default());
    }

    #[test]
    fn test_floor_tiles_cover_zone() {
        let zones = vec![
            Zone::new("a", ZoneKind::Work, Rect::new(0, 0, 2, 2)),
            Zone::new("b", ZoneKind::Walkway, Rect::new(2, 0, 1, 2)),
        ];
        let tiles = floor_tiles(&zones);
        assert_eq!(tiles.len(), 6);
        assert_eq!(count(&tiles, "blue-carpet"), 4);
        assert_eq!(count(&tiles, "wood-floor"), 2);
    }
}
