use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

use super::group::{Group, GroupId};

/// Ordered, id-unique collection of committed groups
///
/// The collection is immutable: every change goes through [`crate::store::reduce`], which
/// hands back a new collection. Clones share the same allocation, so
/// [`GroupCollection::ptr_eq`] tells whether two handles are the same value.
#[derive(Debug, Clone, Default)]
pub struct GroupCollection {
    groups: Arc<Vec<Group>>,
}

impl GroupCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection with the same outcome as saving each group in turn.
    ///
    /// A repeated id replaces the earlier entry in place, so the result is
    /// always id-unique.
    pub fn from_groups(groups: impl IntoIterator<Item = Group>) -> Self {
        let groups = groups.into_iter();
        let mut positions: HashMap<GroupId, usize> = HashMap::with_capacity(groups.size_hint().0);
        let mut collected: Vec<Group> = Vec::with_capacity(groups.size_hint().0);

        for group in groups {
            match positions.get(&group.id) {
                Some(&index) => collected[index] = group,
                None => {
                    positions.insert(group.id.clone(), collected.len());
                    collected.push(group);
                }
            }
        }

        Self::from_vec(collected)
    }

    pub(crate) fn from_vec(groups: Vec<Group>) -> Self {
        Self { groups: Arc::new(groups) }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| &group.id == id)
    }

    pub fn position(&self, id: &GroupId) -> Option<usize> {
        self.groups.iter().position(|group| &group.id == id)
    }

    pub fn contains(&self, id: &GroupId) -> bool {
        self.position(id).is_some()
    }

    /// Whether both handles point at the same collection value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.groups, &other.groups)
    }
}

impl PartialEq for GroupCollection {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.groups == other.groups
    }
}

impl<'a> IntoIterator for &'a GroupCollection {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for GroupCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}
