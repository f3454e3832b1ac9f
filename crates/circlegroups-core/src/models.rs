pub mod collection;
pub mod group;
pub mod point;

pub use collection::GroupCollection;
pub use group::{Group, GroupId};
pub use point::Point;
