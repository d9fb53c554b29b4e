use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::StepId;

/// Learner progress: which steps have been checked off.
///
/// A missing key means "not completed". Toggling can leave explicit `false`
/// entries behind; they count as not completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<StepId, bool>);

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_complete(&self, step_id: &StepId) -> bool {
        self.0.get(step_id).copied().unwrap_or(false)
    }

    /// Flips the flag for `step_id`, treating a missing entry as `false`.
    ///
    /// Returns the new value.
    pub fn toggle(&mut self, step_id: &StepId) -> bool {
        let entry = self.0.entry(step_id.clone()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Non-mutating variant of [`Progress::toggle`].
    #[must_use]
    pub fn toggled(&self, step_id: &StepId) -> Self {
        let mut next = self.clone();
        next.toggle(step_id);
        next
    }

    /// Step ids whose flag is `true`.
    pub fn completed_ids(&self) -> impl Iterator<Item = &StepId> {
        self.0
            .iter()
            .filter_map(|(id, completed)| completed.then_some(id))
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_ids().count()
    }

    /// Number of stored entries, including explicit `false` values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StepId, bool)> for Progress {
    fn from_iter<I: IntoIterator<Item = (StepId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
