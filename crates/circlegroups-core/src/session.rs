//! Editing sessions over the group store
//!
//! [`SessionController`] owns the application state: the committed
//! collection and the single draft being edited. Draft edits never touch the
//! collection; only [`SessionController::commit`] and
//! [`SessionController::remove`] reduce it, and every change they make is
//! persisted straight away.

use std::collections::HashSet;

use crate::coordinates::parse_coordinates;
use crate::error::{Error, Result};
use crate::ids::IdGenerator;
use crate::models::{Group, GroupCollection, GroupId, Point};
use crate::persistence::GroupRepository;
use crate::ports::KeyValueStore;
use crate::store::{reduce, GroupAction, Transition};

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Committed groups
    pub groups: GroupCollection,

    /// Draft being edited, if any
    pub active_group: Option<Group>,

    /// Whether the draft has been changed since the session started
    pub dirty: bool,

    /// Whether the last coordinate input was rejected
    pub coordinate_error: bool,
}

/// Mediates between presentation commands and the group store
pub struct SessionController<S, G> {
    state: AppState,
    repository: GroupRepository<S>,
    ids: G,
    /// Ids that have been part of the committed collection in this process
    committed_ids: HashSet<GroupId>,
}

impl<S: KeyValueStore, G: IdGenerator> SessionController<S, G> {
    /// Load the stored collection and start with no active group
    pub fn open(repository: GroupRepository<S>, ids: G) -> Self {
        let groups = repository.load();
        let committed_ids = groups.iter().map(|group| group.id.clone()).collect();
        Self {
            state: AppState { groups, ..AppState::default() },
            repository,
            ids,
            committed_ids,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn groups(&self) -> &GroupCollection {
        &self.state.groups
    }

    pub fn active_group(&self) -> Option<&Group> {
        self.state.active_group.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.dirty
    }

    pub fn coordinate_error(&self) -> bool {
        self.state.coordinate_error
    }

    pub fn repository(&self) -> &GroupRepository<S> {
        &self.repository
    }

    /// Start a new empty draft, discarding any unsaved one
    ///
    /// The draft id never matches a committed group, so committing it cannot
    /// overwrite one.
    pub fn create_group(&mut self) -> &Group {
        let mut id = self.ids.next_id();
        while self.state.groups.contains(&id) {
            tracing::debug!(%id, "Generated id is already in use");
            id = self.ids.next_id();
        }
        let group = Group::new(id);
        tracing::debug!(id = %group.id, "Created draft group");
        self.start_session(None);
        self.state.active_group.insert(group)
    }

    /// Start editing a copy of the committed group `id`.
    ///
    /// Returns `None` and clears the active group when `id` is unknown.
    pub fn edit_group(&mut self, id: &GroupId) -> Option<&Group> {
        let draft = self.state.groups.get(id).cloned();
        if draft.is_none() {
            tracing::debug!(%id, "Group to edit not found");
        }
        self.start_session(draft);
        self.state.active_group.as_ref()
    }

    /// Replace the draft with `group` and mark the session dirty
    pub fn update_draft(&mut self, group: Group) {
        self.state.active_group = Some(group);
        self.state.dirty = true;
    }

    /// Save the draft into the collection and end the session.
    ///
    /// Returns the saved group's id, or `None` when nothing was being edited.
    pub fn commit(&mut self) -> Option<GroupId> {
        let draft = self.state.active_group.take()?;
        if self.is_orphaned(&draft.id) {
            tracing::warn!(id = %draft.id, "Saving a draft whose group was deleted; it is created again");
        }

        let id = draft.id.clone();
        self.dispatch(GroupAction::Save(draft));
        self.start_session(None);
        Some(id)
    }

    /// End the session without saving
    pub fn discard(&mut self) {
        self.start_session(None);
    }

    /// Delete the committed group `id`.
    ///
    /// The active draft is left alone, even when it is a copy of `id`.
    /// Returns whether a group was removed.
    pub fn remove(&mut self, id: &GroupId) -> bool {
        let changed = self.dispatch(GroupAction::Delete(id.clone()));
        if !changed {
            tracing::debug!(%id, "Group to remove not found");
        }
        changed
    }

    /// Whether the draft is a copy of a group that has since been deleted
    pub fn draft_is_orphaned(&self) -> bool {
        self.state
            .active_group
            .as_ref()
            .is_some_and(|draft| self.is_orphaned(&draft.id))
    }

    /// Parse `input` and append the point to the draft.
    ///
    /// On a format error the draft is untouched and the coordinate error flag is set.
    pub fn add_point(&mut self, input: &str) -> Result<Point> {
        let draft = self.draft()?.clone();
        let point = match parse_coordinates(input) {
            Ok(point) => point,
            Err(e) => {
                self.state.coordinate_error = true;
                return Err(e);
            }
        };

        let next = draft.with_point(point);
        self.state.coordinate_error = false;
        self.update_draft(next);
        Ok(point)
    }

    /// Remove the draft's point at `index`, returning it
    pub fn remove_point(&mut self, index: usize) -> Result<Point> {
        let draft = self.draft()?;
        let point = *draft.points.get(index).ok_or(Error::PointIndexOutOfRange {
            index,
            len: draft.points.len(),
        })?;

        let next = draft.clone().without_point(index)?;
        self.update_draft(next);
        Ok(point)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let next = self.draft()?.clone().with_name(name);
        self.update_draft(next);
        Ok(())
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        let next = self.draft()?.clone().with_radius(radius);
        self.update_draft(next);
        Ok(())
    }

    /// Reset the coordinate error flag once the input is edited again
    pub fn clear_coordinate_error(&mut self) {
        self.state.coordinate_error = false;
    }

    fn draft(&self) -> Result<&Group> {
        self.state.active_group.as_ref().ok_or(Error::NoActiveGroup)
    }

    fn is_orphaned(&self, id: &GroupId) -> bool {
        self.committed_ids.contains(id) && !self.state.groups.contains(id)
    }

    fn start_session(&mut self, draft: Option<Group>) {
        self.state.active_group = draft;
        self.state.dirty = false;
        self.state.coordinate_error = false;
    }

    /// Reduce the collection and persist it if it changed
    fn dispatch(&mut self, action: GroupAction) -> bool {
        match reduce(&self.state.groups, action) {
            Transition::Changed(next) => {
                self.committed_ids.extend(next.iter().map(|group| group.id.clone()));
                self.state.groups = next;
                if let Err(e) = self.repository.save(&self.state.groups) {
                    tracing::warn!(key = %self.repository.key(), error = %e, "Failed to persist groups");
                }
                true
            }
            Transition::Unchanged => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::persistence::MemoryKeyValueStore;

    fn controller() -> SessionController<MemoryKeyValueStore, SequentialIds> {
        SessionController::open(GroupRepository::new(MemoryKeyValueStore::new()), SequentialIds::new())
    }

    #[test]
    fn test_create_group_starts_clean_draft() {
        let mut session = controller();
        let draft = session.create_group().clone();

        assert_eq!(draft, Group::new(GroupId::new("1")));
        assert!(!session.is_dirty());
        assert!(session.groups().is_empty());
    }

    /// Hands out a fixed list of ids in order
    struct ScriptedIds(std::vec::IntoIter<&'static str>);

    impl IdGenerator for ScriptedIds {
        fn next_id(&mut self) -> GroupId {
            GroupId::new(self.0.next().unwrap_or("exhausted"))
        }
    }

    #[test]
    fn test_create_group_skips_ids_in_use() {
        use crate::persistence::DEFAULT_STORAGE_KEY;

        let stored = r#"[{"id":"1","name":"kept","radius":2.0,"points":[[1.0,0.0,0.0]]}]"#;
        let repository =
            GroupRepository::new(MemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, stored));
        let mut session = SessionController::open(repository, ScriptedIds(vec!["1", "2"].into_iter()));
        let kept = session.groups().as_slice()[0].clone();

        let draft = session.create_group().clone();
        assert_eq!(draft.id.as_str(), "2");

        session.set_name("new").unwrap();
        session.commit();

        assert_eq!(session.groups().len(), 2);
        assert_eq!(session.groups().get(&GroupId::new("1")), Some(&kept));
        assert_eq!(session.groups().get(&GroupId::new("2")).map(|g| g.name.as_str()), Some("new"));
    }

    #[test]
    fn test_create_group_discards_previous_draft() {
        let mut session = controller();
        session.create_group();
        session.set_name("unsaved").unwrap();

        let draft = session.create_group().clone();

        assert_eq!(draft.id.as_str(), "2");
        assert!(draft.name.is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_update_draft_sets_dirty() {
        let mut session = controller();
        let draft = session.create_group().clone();
        session.update_draft(draft.with_radius(2.0));

        assert!(session.is_dirty());
        assert_eq!(session.active_group().map(|g| g.radius), Some(2.0));
    }

    #[test]
    fn test_commit_without_draft_is_noop() {
        let mut session = controller();
        assert_eq!(session.commit(), None);
        assert!(session.groups().is_empty());
        assert!(session.repository().store().is_empty());
    }

    #[test]
    fn test_discard_keeps_store() {
        let mut session = controller();
        session.create_group();
        session.set_name("draft").unwrap();
        session.discard();

        assert!(session.active_group().is_none());
        assert!(!session.is_dirty());
        assert!(session.groups().is_empty());
    }

    #[test]
    fn test_edit_missing_group_clears_draft() {
        let mut session = controller();
        session.create_group();

        assert!(session.edit_group(&GroupId::new("missing")).is_none());
        assert!(session.active_group().is_none());
    }

    #[test]
    fn test_add_point_rejects_without_mutation() {
        let mut session = controller();
        session.create_group();

        let err = session.add_point("1, a, 2").unwrap_err();

        assert!(matches!(err, Error::CoordinateFormat { .. }));
        assert!(session.coordinate_error());
        assert!(!session.is_dirty());
        assert!(session.active_group().unwrap().points.is_empty());

        session.clear_coordinate_error();
        assert!(!session.coordinate_error());
    }

    #[test]
    fn test_add_point_clears_error() {
        let mut session = controller();
        session.create_group();
        let _ = session.add_point("oops");

        assert_eq!(session.add_point("0 0 1").unwrap(), Point::new(0.0, 0.0, 1.0));
        assert!(!session.coordinate_error());
        assert!(session.is_dirty());
    }

    #[test]
    fn test_remove_point_bounds_checked() {
        let mut session = controller();
        session.create_group();
        session.add_point("1,1,1").unwrap();

        let err = session.remove_point(1).unwrap_err();
        assert!(matches!(err, Error::PointIndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(session.active_group().unwrap().points.len(), 1);

        assert_eq!(session.remove_point(0).unwrap(), Point::new(1.0, 1.0, 1.0));
        assert!(session.active_group().unwrap().points.is_empty());
    }

    #[test]
    fn test_draft_helpers_need_active_group() {
        let mut session = controller();
        assert!(matches!(session.set_name("x"), Err(Error::NoActiveGroup)));
        assert!(matches!(session.set_radius(1.0), Err(Error::NoActiveGroup)));
        assert!(matches!(session.add_point("1 2 3"), Err(Error::NoActiveGroup)));
        assert!(matches!(session.remove_point(0), Err(Error::NoActiveGroup)));
        assert!(!session.coordinate_error());
    }

    #[test]
    fn test_remove_missing_group() {
        let mut session = controller();
        assert!(!session.remove(&GroupId::new("1")));
        assert!(session.repository().store().is_empty());
    }

    #[test]
    fn test_orphaned_draft_is_reported_and_recreated() {
        let mut session = controller();
        session.create_group();
        session.set_name("Alpha").unwrap();
        let id = session.commit().unwrap();

        session.edit_group(&id);
        assert!(!session.draft_is_orphaned());

        assert!(session.remove(&id));
        assert!(session.draft_is_orphaned());
        assert_eq!(session.active_group().map(|g| g.id.clone()), Some(id.clone()));

        session.commit();
        assert_eq!(session.groups().get(&id).map(|g| g.name.as_str()), Some("Alpha"));
        assert!(!session.draft_is_orphaned());
    }

    #[test]
    fn test_new_draft_is_not_orphaned() {
        let mut session = controller();
        session.create_group();
        assert!(!session.draft_is_orphaned());
    }
}
