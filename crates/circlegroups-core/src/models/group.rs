use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::point::Point;
use crate::error::{Error, Result};
use crate::geometry::is_suitable;

/// Opaque unique identifier for a group
///
/// Assigned once at creation and never reused, even after the group is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GroupId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A named group of points with a radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Display name, not required to be unique
    pub name: String,

    /// Sphere radius. A negative or NaN radius classifies every point as unsuitable.
    #[serde(deserialize_with = "deserialize_radius")]
    pub radius: f64,

    /// Points in insertion order, duplicates allowed
    pub points: Vec<Point>,
}

impl Group {
    /// Create an empty group: no name, radius 0, no points
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            name: String::new(),
            radius: 0.0,
            points: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Same group with `point` appended
    pub fn with_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Same group with the point at `index` removed; later points shift down by one
    pub fn without_point(mut self, index: usize) -> Result<Self> {
        if index >= self.points.len() {
            return Err(Error::PointIndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.points.remove(index);
        Ok(self)
    }

    /// Number of points lying within the radius
    pub fn suitable_points(&self) -> usize {
        self.points
            .iter()
            .filter(|point| is_suitable(point, self.radius))
            .count()
    }
}

/// JSON has no NaN, so a NaN radius is written as `null` and read back as NaN.
fn deserialize_radius<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Group {
        Group::new(GroupId::new("1"))
            .with_name("Alpha")
            .with_radius(5.0)
            .with_point(Point::new(1.0, 2.0, 2.0))
            .with_point(Point::new(10.0, 0.0, 0.0))
    }

    #[test]
    fn test_new_group_is_empty() {
        let group = Group::new(GroupId::new("7"));
        assert_eq!(group.id.as_str(), "7");
        assert!(group.name.is_empty());
        assert_eq!(group.radius, 0.0);
        assert!(group.points.is_empty());
    }

    #[test]
    fn test_without_point_shifts_indices() {
        let group = sample().with_point(Point::new(0.0, 0.0, 1.0));
        let group = group.without_point(1).unwrap();
        assert_eq!(group.points, vec![Point::new(1.0, 2.0, 2.0), Point::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_without_point_out_of_range() {
        let err = sample().without_point(2).unwrap_err();
        assert!(matches!(err, Error::PointIndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_suitable_points() {
        assert_eq!(sample().suitable_points(), 1);
        assert_eq!(sample().with_radius(f64::NAN).suitable_points(), 0);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Alpha",
                "radius": 5.0,
                "points": [[1.0, 2.0, 2.0], [10.0, 0.0, 0.0]]
            })
        );
    }

    #[test]
    fn test_nan_radius_survives_json() {
        let group = sample().with_radius(f64::NAN);
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("\"radius\":null"));

        let loaded: Group = serde_json::from_str(&json).unwrap();
        assert!(loaded.radius.is_nan());
        assert_eq!(loaded.points, group.points);
    }
}
