//! Group store reducer
//!
//! The only way to change the committed collection is to reduce it with a
//! [`GroupAction`]. The input collection is never modified.

use crate::models::{Group, GroupCollection, GroupId};

/// Actions accepted by the group store
#[derive(Debug, Clone, PartialEq)]
pub enum GroupAction {
    /// Create the group, or replace the entry with the same id in place
    Save(Group),
    /// Remove the group with this id
    Delete(GroupId),
}

impl GroupAction {
    pub fn save(group: Group) -> Self {
        GroupAction::Save(group)
    }

    pub fn delete(id: impl Into<GroupId>) -> Self {
        GroupAction::Delete(id.into())
    }
}

/// Result of reducing a collection
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A new collection value was produced
    Changed(GroupCollection),
    /// The action had nothing to do; the current collection stands
    Unchanged,
}

impl Transition {
    /// The collection after the transition, reusing `current` when unchanged
    pub fn into_collection(self, current: &GroupCollection) -> GroupCollection {
        match self {
            Transition::Changed(next) => next,
            Transition::Unchanged => current.clone(),
        }
    }
}

/// Apply `action` to `current`.
///
/// No validation of group fields happens here.
pub fn reduce(current: &GroupCollection, action: GroupAction) -> Transition {
    match action {
        GroupAction::Save(group) => {
            let mut groups = current.as_slice().to_vec();
            match current.position(&group.id) {
                Some(index) => groups[index] = group,
                None => groups.push(group),
            }
            Transition::Changed(GroupCollection::from_vec(groups))
        }
        GroupAction::Delete(id) => {
            if !current.contains(&id) {
                return Transition::Unchanged;
            }
            let groups = current.iter().filter(|group| group.id != id).cloned().collect();
            Transition::Changed(GroupCollection::from_vec(groups))
        }
    }
}
