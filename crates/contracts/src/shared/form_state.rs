//! Form-state controller: one editor tree plus the submit busy phase
//!
//! `Idle -> Submitting` happens only through [`FormState::begin_submit`] with a
//! payload that serialized successfully; `Submitting -> Idle` through
//! [`FormState::settle`] / [`FormState::settle_with`] once the request is done.
//! Edits are ignored while a submission is in flight.

use super::errors::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    tree: T,
    phase: FormPhase,
}

impl<T> FormState<T> {
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            phase: FormPhase::Idle,
        }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Replace the tree with the result of an editor operation.
    ///
    /// Returns `false` (and keeps the tree) while a submission is in flight.
    pub fn edit<F>(&mut self, op: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        if self.is_submitting() {
            return false;
        }
        self.tree = op(&self.tree);
        true
    }

    /// Load a fresh tree (e.g. from the server). Ignored while submitting.
    pub fn replace(&mut self, tree: T) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.tree = tree;
        true
    }

    /// Serialize the current tree and enter `Submitting`.
    ///
    /// A second call before `settle` is rejected, and a serialization error
    /// leaves the phase `Idle`; in both cases no request must be sent.
    pub fn begin_submit<P, E, F>(&mut self, serialize: F) -> Result<P, SubmitError>
    where
        F: FnOnce(&T) -> Result<P, E>,
        E: Into<SubmitError>,
    {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        let payload = serialize(&self.tree).map_err(Into::into)?;
        self.phase = FormPhase::Submitting;
        Ok(payload)
    }

    /// Request finished (success or failure); the tree is left as is
    pub fn settle(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Request finished successfully; apply a follow-up transformation
    pub fn settle_with<F>(&mut self, op: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.phase = FormPhase::Idle;
        self.tree = op(&self.tree);
    }
}

impl<T: Default> Default for FormState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ValidationError;

    fn ok(tree: &Vec<u8>) -> Result<usize, SubmitError> {
        Ok(tree.len())
    }

    #[test]
    fn test_second_submit_is_rejected_until_settled() {
        let mut form = FormState::new(vec![1u8, 2]);
        let mut sent = Vec::new();

        if let Ok(payload) = form.begin_submit(ok) {
            sent.push(payload);
        }
        assert_eq!(form.phase(), FormPhase::Submitting);

        let second = form.begin_submit(ok);
        assert_eq!(second, Err(SubmitError::AlreadySubmitting));
        if let Ok(payload) = second {
            sent.push(payload);
        }
        assert_eq!(sent, vec![2]);

        form.settle();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.begin_submit(ok).is_ok());
    }

    #[test]
    fn test_validation_failure_stays_idle() {
        let mut form = FormState::new(vec![0u8]);
        let result = form.begin_submit(|_| {
            Err::<(), _>(ValidationError::MissingLanguage {
                field: "serviceDetails[0].language".into(),
            })
        });
        assert!(matches!(result, Err(SubmitError::Validation(_))));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.tree(), &vec![0u8]);
    }

    #[test]
    fn test_edits_are_soft_locked_while_submitting() {
        let mut form = FormState::new(vec![1u8]);
        assert!(form.edit(|t| {
            let mut next = t.clone();
            next.push(2);
            next
        }));
        assert_eq!(form.tree(), &vec![1, 2]);

        form.begin_submit(ok).unwrap();
        assert!(!form.edit(|_| Vec::new()));
        assert!(!form.replace(Vec::new()));
        assert_eq!(form.tree(), &vec![1, 2]);

        form.settle();
        assert!(form.edit(|_| Vec::new()));
        assert!(form.tree().is_empty());
    }

    #[test]
    fn test_settle_with_applies_follow_up() {
        let mut form = FormState::new(vec![5u8, 6]);
        form.begin_submit(ok).unwrap();
        form.settle_with(|t| t.iter().map(|_| 0).collect());
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.tree(), &vec![0, 0]);
    }
}
