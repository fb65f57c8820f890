//! Step navigation and record accumulation.
//!
//! [`StepNavigator`] is the single owner of form state: the current step,
//! the accumulated [`IntakeRecord`], the visible field errors and the
//! completed flag. The record is only ever written through a validated
//! merge, and is frozen once [`StepNavigator::submit_final`] succeeds.
//!
//! ```
//! use intake_core::{Draft, FieldName, Step, StepNavigator, StepOutcome};
//!
//! let mut nav = StepNavigator::new();
//! let mut draft = nav.draft();
//! draft.set_text(FieldName::KidAge, "5").unwrap();
//! draft.set_text(FieldName::KidDiagnosisInfo, "ASD").unwrap();
//! draft.set_text(FieldName::EducationalSetting, "Public School").unwrap();
//!
//! let outcome = nav.advance(&draft).unwrap();
//! assert_eq!(outcome, StepOutcome::Moved(Step::Services));
//! ```

use chrono::{DateTime, Local};

use crate::draft::Draft;
use crate::error::{IntakeError, IntakeResult};
use crate::fields::{Step, TOTAL_STEPS};
use crate::types::IntakeRecord;
use crate::validation::{FieldErrors, Validators};

/// Result of a navigation attempt that reached validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step validated, merged and the navigator moved to the given step
    Moved(Step),
    /// Step validated and merged, but there is no further step
    Held(Step),
    /// Validation failed; nothing was merged and the step is unchanged
    Blocked(FieldErrors),
    /// Final step validated and merged; the record is now frozen
    Completed,
}

impl StepOutcome {
    /// Whether the draft was accepted and merged.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, StepOutcome::Blocked(_))
    }
}

#[derive(Debug, Clone)]
pub struct StepNavigator {
    step: Step,
    record: IntakeRecord,
    errors: FieldErrors,
    completed_at: Option<DateTime<Local>>,
    validators: Validators,
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl StepNavigator {
    /// A fresh form on step 1 with an all-empty record.
    pub fn new() -> Self {
        Self::with_validators(Validators::standard())
    }

    pub fn with_validators(validators: Validators) -> Self {
        Self {
            step: Step::default(),
            record: IntakeRecord::new(),
            errors: FieldErrors::new(),
            completed_at: None,
            validators,
        }
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        TOTAL_STEPS
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// When the final step was accepted.
    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    /// The accumulated record.
    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    /// The record, once the form has been submitted.
    pub fn completed_record(&self) -> Option<&IntakeRecord> {
        self.is_completed().then_some(&self.record)
    }

    /// Errors from the most recent blocked attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    /// A draft for the current step seeded with previously merged answers.
    pub fn draft(&self) -> Draft {
        Draft::for_step(self.step, &self.record)
    }

    /// Validate the current step and, if it passes, merge and move forward.
    ///
    /// On the last step a passing draft is merged but the step stays put
    /// ([`StepOutcome::Held`]); use [`submit_final`](Self::submit_final) to
    /// complete the form.
    pub fn advance(&mut self, draft: &Draft) -> IntakeResult<StepOutcome> {
        self.ensure_open()?;
        if let Err(errors) = self.accept(draft)? {
            return Ok(StepOutcome::Blocked(errors));
        }

        match self.step.next() {
            Some(next) => {
                tracing::info!(from = self.step.number(), to = next.number(), "Step advanced");
                self.step = next;
                Ok(StepOutcome::Moved(next))
            }
            None => {
                tracing::debug!(step = self.step.number(), "Already on last step");
                Ok(StepOutcome::Held(self.step))
            }
        }
    }

    /// Go back one step without validating. No-op on step 1.
    ///
    /// Answers already merged are kept and visible errors are cleared.
    pub fn retreat(&mut self) -> IntakeResult<Step> {
        self.ensure_open()?;
        if let Some(previous) = self.step.previous() {
            tracing::info!(from = self.step.number(), to = previous.number(), "Step retreated");
            self.step = previous;
            self.errors.clear();
        }
        Ok(self.step)
    }

    /// Validate the last step and, if it passes, merge and freeze the record.
    ///
    /// Earlier steps are not re-validated: their answers only reached the
    /// record through a passing [`advance`](Self::advance).
    pub fn submit_final(&mut self, draft: &Draft) -> IntakeResult<StepOutcome> {
        self.ensure_open()?;
        if !self.step.is_last() {
            tracing::warn!(step = self.step.number(), "Final submit before last step");
            return Err(IntakeError::NotFinalStep(self.step));
        }
        if let Err(errors) = self.accept(draft)? {
            return Ok(StepOutcome::Blocked(errors));
        }

        self.completed_at = Some(Local::now());
        tracing::info!(
            answered = self
                .record
                .entries()
                .iter()
                .filter(|(_, value)| !value.is_blank())
                .count(),
            "Service request completed"
        );
        tracing::debug!(
            record = %serde_json::to_string(&self.record).unwrap_or_default(),
            "Completed record"
        );
        Ok(StepOutcome::Completed)
    }

    /// Validate `draft` against the current step and merge it on success.
    ///
    /// The outer `Result` carries misuse (a draft for another step); the
    /// inner one the validation verdict.
    fn accept(&mut self, draft: &Draft) -> IntakeResult<Result<(), FieldErrors>> {
        if draft.step() != self.step {
            let field = draft
                .fields()
                .next()
                .unwrap_or(draft.step().fields()[0]);
            return Err(IntakeError::ForeignField {
                field,
                step: self.step,
            });
        }

        if let Err(errors) = self.validators.validate_step(self.step, draft) {
            tracing::warn!(
                step = self.step.number(),
                fields = ?errors.fields(),
                "Step blocked by validation"
            );
            self.errors = errors.clone();
            return Ok(Err(errors));
        }

        draft.merge_into(&mut self.record)?;
        self.errors.clear();
        tracing::debug!(step = self.step.number(), "Draft merged into record");
        Ok(Ok(()))
    }

    fn ensure_open(&self) -> IntakeResult<()> {
        if self.is_completed() {
            tracing::warn!("Ignoring change to a submitted form");
            Err(IntakeError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }
}
