use circlegroups_core::geometry::classify;
use circlegroups_core::Group;
use serde::Serialize;
use tabled::Tabled;

use crate::output::format_radius;

/// Row of the group list table
#[derive(Debug, Tabled)]
pub struct GroupRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Radius")]
    pub radius: String,
    #[tabled(rename = "Points")]
    pub points: usize,
    #[tabled(rename = "Suitable")]
    pub suitable: usize,
}

impl From<&Group> for GroupRow {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            radius: format_radius(group.radius),
            points: group.points.len(),
            suitable: group.suitable_points(),
        }
    }
}

/// Output for list command
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,
    pub radius: f64,
    pub point_count: usize,
    pub suitable_count: usize,
}

impl From<&Group> for GroupSummary {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            radius: group.radius,
            point_count: group.points.len(),
            suitable_count: group.suitable_points(),
        }
    }
}

/// Output for show, create and edit commands
#[derive(Debug, Serialize)]
pub struct GroupOutput {
    pub id: String,
    pub name: String,
    pub radius: f64,
    pub points: Vec<PointOutput>,
}

#[derive(Debug, Serialize)]
pub struct PointOutput {
    pub coordinates: [f64; 3],
    pub distance: f64,
    pub suitable: bool,
}

impl From<&Group> for GroupOutput {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            radius: group.radius,
            points: classify(group)
                .into_iter()
                .map(|(point, suitable)| PointOutput {
                    coordinates: point.to_array(),
                    distance: point.norm(),
                    suitable,
                })
                .collect(),
        }
    }
}

/// Output for delete command
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub id: String,
    pub removed: bool,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub data_dir: ConfigEntry,
    pub storage_key: ConfigEntry,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlegroups_core::{GroupId, Point};

    #[test]
    fn test_group_output_classifies_points() {
        let group = Group::new(GroupId::new("1"))
            .with_name("Alpha")
            .with_radius(5.0)
            .with_point(Point::new(1.0, 2.0, 2.0))
            .with_point(Point::new(6.0, 0.0, 0.0));

        let output = GroupOutput::from(&group);

        assert_eq!(output.points.len(), 2);
        assert!(output.points[0].suitable);
        assert_eq!(output.points[0].distance, 3.0);
        assert!(!output.points[1].suitable);
    }

    #[test]
    fn test_row_shows_nan_radius() {
        let group = Group::new(GroupId::new("1")).with_radius(f64::NAN);
        let row = GroupRow::from(&group);
        assert_eq!(row.radius, "NaN");
        assert_eq!(row.suitable, 0);
    }
}
