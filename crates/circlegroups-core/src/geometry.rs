//! Point membership against a group's sphere

use crate::models::{Group, Point};

/// Whether `point` lies within the sphere of `radius` centred on the origin.
///
/// Any comparison involving NaN is false, so a NaN radius or coordinate
/// always yields an unsuitable point.
pub fn is_suitable(point: &Point, radius: f64) -> bool {
    point.norm() <= radius
}

/// Every point of `group` paired with its classification, in order
pub fn classify(group: &Group) -> Vec<(Point, bool)> {
    group
        .points
        .iter()
        .map(|point| (*point, is_suitable(point, group.radius)))
        .collect()
}
