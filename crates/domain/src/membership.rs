//! Association rows and the desired membership of one subject.

use std::collections::HashSet;

use gatehouse_core::AppResult;
use serde::{Deserialize, Serialize};

use crate::RecordId;

/// One stored link between a subject and an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Association {
    /// Subject side (user or role).
    pub subject_id: RecordId,
    /// Object side (role or permission).
    pub object_id: RecordId,
}

/// Target association set for one subject.
///
/// Object ids are distinct and keep the order of their first occurrence in
/// the caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredMembership {
    subject_id: RecordId,
    object_ids: Vec<RecordId>,
}

impl DesiredMembership {
    /// Validates the subject and object ids and removes duplicate objects.
    pub fn new<I, S>(subject_id: impl AsRef<str>, object_ids: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let subject_id = RecordId::new(subject_id)?;

        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for object_id in object_ids {
            let object_id = RecordId::new(object_id)?;
            if seen.insert(object_id.clone()) {
                distinct.push(object_id);
            }
        }

        Ok(Self {
            subject_id,
            object_ids: distinct,
        })
    }

    /// Returns the subject whose set is replaced.
    #[must_use]
    pub fn subject_id(&self) -> &RecordId {
        &self.subject_id
    }

    /// Returns the distinct desired object ids.
    #[must_use]
    pub fn object_ids(&self) -> &[RecordId] {
        &self.object_ids
    }

    /// Returns true when the subject should end up with no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }

    /// Expands the membership into one association row per object.
    #[must_use]
    pub fn associations(&self) -> Vec<Association> {
        self.object_ids
            .iter()
            .map(|object_id| Association {
                subject_id: self.subject_id.clone(),
                object_id: object_id.clone(),
            })
            .collect()
    }
}
