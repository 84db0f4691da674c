//! Seating monitored nodes at workstations
//!
//! Each monitored node appears in the office as an employee whose sprite is
//! chosen by the node's role and whose tint reflects its health. Health
//! reports come from a [`StatusSource`], which callers pass in explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::{GridPoint, OfficePlan};

/// What a node does in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Web,
    Database,
    Api,
    Cache,
    Backup,
    Main,
    Staging,
}

impl NodeRole {
    /// Employee sprite drawn for this role
    pub fn display_sprite(&self) -> &'static str {
        match self {
            NodeRole::Web => "programmer",
            NodeRole::Database => "data-scientist",
            NodeRole::Api => "devops",
            NodeRole::Cache => "qa-tester",
            NodeRole::Backup => "security",
            NodeRole::Main => "ceo",
            NodeRole::Staging => "intern",
        }
    }
}

/// Health of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Online,
    Warning,
    Critical,
    Offline,
}

impl NodeStatus {
    /// Tint applied to the employee sprite, as `0xRRGGBB`
    pub fn color(&self) -> u32 {
        match self {
            NodeStatus::Online => 0x3498DB,
            NodeStatus::Warning => 0xF39C12,
            NodeStatus::Critical => 0xE74C3C,
            NodeStatus::Offline => 0x95A5A6,
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Online => write!(f, "online"),
            NodeStatus::Warning => write!(f, "warning"),
            NodeStatus::Critical => write!(f, "critical"),
            NodeStatus::Offline => write!(f, "offline"),
        }
    }
}

/// Resource usage sampled from a node, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub cpu: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
}

impl Metrics {
    pub fn new(cpu: f64, memory_percent: f64, disk_percent: f64) -> Self {
        Self {
            cpu,
            memory_percent,
            disk_percent,
        }
    }
}

/// Warning and critical cut-offs for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub warning: f64,
    pub critical: f64,
}

impl Level {
    pub fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }
}

/// Per-metric levels used by [`determine_status`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub cpu: Level,
    pub memory: Level,
    pub disk: Level,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu: Level::new(70.0, 90.0),
            memory: Level::new(80.0, 95.0),
            disk: Level::new(80.0, 90.0),
        }
    }
}

/// Classify a node from its latest metrics
///
/// Missing metrics count as online. Any metric at or above its critical
/// level makes the node critical, otherwise any metric at or above its
/// warning level makes it a warning.
pub fn determine_status(metrics: Option<&Metrics>, thresholds: &Thresholds) -> NodeStatus {
    let Some(m) = metrics else {
        return NodeStatus::Online;
    };
    let readings = [
        (m.cpu, thresholds.cpu),
        (m.memory_percent, thresholds.memory),
        (m.disk_percent, thresholds.disk),
    ];

    if readings.iter().any(|(value, level)| *value >= level.critical) {
        NodeStatus::Critical
    } else if readings.iter().any(|(value, level)| *value >= level.warning) {
        NodeStatus::Warning
    } else {
        NodeStatus::Online
    }
}

/// Latest known state of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReport {
    pub id: String,
    pub name: String,
    pub role: NodeRole,
    pub status: NodeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

impl NodeReport {
    /// Report with a status derived from sampled metrics
    pub fn sampled(
        id: impl Into<String>,
        name: impl Into<String>,
        role: NodeRole,
        metrics: Option<Metrics>,
        thresholds: &Thresholds,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            status: determine_status(metrics.as_ref(), thresholds),
            metrics,
        }
    }

    /// Report for a node that could not be reached
    pub fn offline(id: impl Into<String>, name: impl Into<String>, role: NodeRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            status: NodeStatus::Offline,
            metrics: None,
        }
    }
}

/// Anything that can report node health
pub trait StatusSource {
    fn reports(&self) -> Vec<NodeReport>;
}

/// A fixed set of reports
impl StatusSource for Vec<NodeReport> {
    fn reports(&self) -> Vec<NodeReport> {
        self.clone()
    }
}

/// A node drawn in the office
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub node_id: String,
    pub name: String,
    pub sprite: &'static str,
    pub status: NodeStatus,
    pub color: u32,
    /// Seat of the assigned workstation, `None` when the office is full
    pub seat: Option<GridPoint>,
}

/// Assign each reported node to a workstation, in report order
pub fn staff_office(plan: &OfficePlan, source: &dyn StatusSource) -> Vec<Employee> {
    source
        .reports()
        .into_iter()
        .enumerate()
        .map(|(i, report)| Employee {
            sprite: report.role.display_sprite(),
            color: report.status.color(),
            status: report.status,
            seat: plan.workstations.get(i).map(|w| w.seat),
            node_id: report.id,
            name: report.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{auto_layout, AutoLayoutConfig};

    #[test]
    fn test_missing_metrics_is_online() {
        assert_eq!(
            determine_status(None, &Thresholds::default()),
            NodeStatus::Online
        );
    }

    #[test]
    fn test_status_levels() {
        let t = Thresholds::default();
        let status = |cpu, mem, disk| determine_status(Some(&Metrics::new(cpu, mem, disk)), &t);

        assert_eq!(status(10.0, 10.0, 10.0), NodeStatus::Online);
        assert_eq!(status(70.0, 10.0, 10.0), NodeStatus::Warning);
        assert_eq!(status(10.0, 85.0, 10.0), NodeStatus::Warning);
        assert_eq!(status(10.0, 10.0, 90.0), NodeStatus::Critical);
        // critical wins over warning on another metric
        assert_eq!(status(75.0, 96.0, 10.0), NodeStatus::Critical);
    }

    #[test]
    fn test_palette() {
        assert_eq!(NodeStatus::Online.color(), 0x3498DB);
        assert_eq!(NodeStatus::Offline.color(), 0x95A5A6);
        assert_eq!(NodeStatus::Critical.to_string(), "critical");
    }

    #[test]
    fn test_roles_map_to_sprites() {
        assert_eq!(NodeRole::Web.display_sprite(), "programmer");
        assert_eq!(NodeRole::Main.display_sprite(), "ceo");
        let role: NodeRole = serde_json::from_str("\"database\"").unwrap();
        assert_eq!(role.display_sprite(), "data-scientist");
    }

    #[test]
    fn test_staff_office_seats_in_order() {
        let plan = auto_layout(&AutoLayoutConfig::new(2));
        let t = Thresholds::default();
        let reports = vec![
            NodeReport::sampled("vps-1", "web", NodeRole::Web, None, &t),
            NodeReport::sampled(
                "vps-2",
                "db",
                NodeRole::Database,
                Some(Metrics::new(95.0, 0.0, 0.0)),
                &t,
            ),
            NodeReport::offline("vps-3", "spare", NodeRole::Staging),
        ];

        let staff = staff_office(&plan, &reports);
        assert_eq!(staff.len(), 3);
        assert_eq!(staff[0].seat, Some(plan.workstations[0].seat));
        assert_eq!(staff[1].seat, Some(plan.workstations[1].seat));
        assert_eq!(staff[1].status, NodeStatus::Critical);
        assert_eq!(staff[2].seat, None);
        assert_eq!(staff[2].sprite, "intern");
        assert_eq!(staff[2].color, 0x95A5A6);
    }
}
