//! Form lifecycle state machine
//!
//! The form's phase is an explicit tagged union with a transition
//! function instead of ad hoc boolean flags, so a double submit or a
//! delete during a submit is simply not a transition that exists.

use crate::types::ProductDetail;

/// Whether the form creates a new record or edits an existing one. Edit
/// mode carries the fetched detail: the record id for the update call
/// and the stored image keys for slots the user leaves untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Edit(ProductDetail),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Lifecycle phase of one open form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Edit entry: the blocking detail fetch is in flight.
    Loading,
    /// The user is editing; submit and delete are available.
    Editing,
    /// A submission is in flight; controls are disabled.
    Submitting,
    /// A delete is in flight; controls are disabled.
    Deleting,
    /// The form is done and control returns to the list view.
    Closed,
}

/// Events that drive the phase transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    LoadOk,
    LoadFailed,
    Submit,
    Delete,
    Finished,
    Failed,
}

impl FormPhase {
    /// Apply an event. Events that are invalid in the current phase
    /// leave it unchanged, which is what makes re-entrant submits
    /// no-ops.
    pub fn apply(self, event: FormEvent) -> FormPhase {
        use FormEvent::*;
        use FormPhase::*;

        match (self, event) {
            (Loading, LoadOk) => Editing,
            // A failed detail fetch aborts edit entry back to the list.
            (Loading, LoadFailed) => Closed,
            (Editing, Submit) => Submitting,
            (Editing, Delete) => Deleting,
            (Submitting | Deleting, Finished) => Closed,
            // Failure keeps the draft intact and returns to editing.
            (Submitting | Deleting, Failed) => Editing,
            (phase, _) => phase,
        }
    }

    /// True while a request owns the form; submit and delete controls
    /// are disabled for the duration.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            FormPhase::Loading | FormPhase::Submitting | FormPhase::Deleting
        )
    }
}

#[cfg(test)]
mod tests {
    use super::FormEvent::*;
    use super::FormPhase::*;

    #[test]
    fn happy_path_create() {
        assert_eq!(Editing.apply(Submit), Submitting);
        assert_eq!(Submitting.apply(Finished), Closed);
    }

    #[test]
    fn happy_path_edit_entry() {
        assert_eq!(Loading.apply(LoadOk), Editing);
    }

    #[test]
    fn failed_edit_entry_returns_to_list() {
        assert_eq!(Loading.apply(LoadFailed), Closed);
    }

    #[test]
    fn failed_submission_returns_to_editing() {
        assert_eq!(Submitting.apply(Failed), Editing);
        assert_eq!(Deleting.apply(Failed), Editing);
    }

    #[test]
    fn reentrant_submit_is_a_no_op() {
        assert_eq!(Submitting.apply(Submit), Submitting);
        assert_eq!(Submitting.apply(Delete), Submitting);
        assert_eq!(Deleting.apply(Submit), Deleting);
    }

    #[test]
    fn busy_phases_disable_controls() {
        assert!(Loading.is_busy());
        assert!(Submitting.is_busy());
        assert!(Deleting.is_busy());
        assert!(!Editing.is_busy());
        assert!(!Closed.is_busy());
    }
}
