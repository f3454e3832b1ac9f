//! CircleGroups Core - Domain models, group store, and editing sessions
//!
//! This crate contains the state engine for named groups of 3D points: the
//! reducer over committed groups, the editing session that owns the draft,
//! and the port through which the collection is persisted.

pub mod config;
pub mod coordinates;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod models;
pub mod persistence;
pub mod ports;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use models::{Group, GroupCollection, GroupId, Point};
pub use session::{AppState, SessionController};
pub use store::{reduce, GroupAction, Transition};
