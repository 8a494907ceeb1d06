//! Multi-step form session
//!
//! The session is the single owner of form progress: current step index,
//! the shared [`AnswerStore`], and the submission phase. Widgets write
//! through it, so each one can be unit-tested against a plain store.

use crate::fee;
use crate::steps::{keys, STEPS};
use crate::store::AnswerStore;
use crate::types::StepDef;

/// Lifecycle phase of the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// User is filling steps
    Filling,
    /// Payload handed to the submission client, controls disabled
    Submitting,
    /// Terminal: success view shown, form inert
    Submitted,
}

/// Outcome of a `continue` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward; carries the new 1-based step index
    Next(usize),
    /// Last step validated; caller should build the payload and submit
    ReadyToSubmit,
    /// Validation failed; keys of the offending required fields
    Invalid(Vec<&'static str>),
}

/// Form progress state machine. Steps are 1-based indices into
/// [`STEPS`](crate::steps::STEPS); transitions move by exactly one step.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    step: usize,
    pub answers: AnswerStore,
    phase: Phase,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Fresh session: step 1, empty store.
    pub fn new() -> Self {
        Self {
            step: 1,
            answers: AnswerStore::new(),
            phase: Phase::Filling,
        }
    }

    /// Current 1-based step index.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        STEPS.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == STEPS.len()
    }

    pub fn current_step_def(&self) -> &'static StepDef {
        &STEPS[self.step - 1]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Keys of the current step's required fields that are still unfilled.
    pub fn validate_current(&self) -> Vec<&'static str> {
        self.current_step_def()
            .required_keys()
            .filter(|key| !self.answers.is_filled(key))
            .collect()
    }

    /// Validated forward transition. On failure nothing changes; on success
    /// the fee total is refreshed and the step advances, or the session
    /// enters [`Phase::Submitting`] when already on the last step.
    pub fn advance(&mut self) -> Advance {
        let failing = self.validate_current();
        if !failing.is_empty() {
            return Advance::Invalid(failing);
        }

        self.refresh_total();
        if self.step < STEPS.len() {
            self.step += 1;
            Advance::Next(self.step)
        } else {
            self.phase = Phase::Submitting;
            Advance::ReadyToSubmit
        }
    }

    /// Unvalidated backward transition; no-op on step 1. Stored values are
    /// untouched either way.
    pub fn back(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Record one option of a mutually-exclusive group: the plain value,
    /// its surcharge, and the refreshed total.
    pub fn select_choice(&mut self, key: &str, value: &str, price: u32) {
        self.answers.set(key, value);
        self.answers.set_price(key, price);
        self.refresh_total();
    }

    /// Recompute and store the formatted fee total.
    pub fn refresh_total(&mut self) {
        let total = fee::total(&self.answers);
        self.answers.set(keys::TOTAL_FEE, fee::format_total(total));
    }

    /// Transmission finished; the form becomes inert.
    pub fn mark_submitted(&mut self) {
        self.phase = Phase::Submitted;
    }

    /// Transmission failed; return to an interactive, retryable state.
    pub fn submission_failed(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Filling;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::keys;

    fn fill_step_1(session: &mut FormSession) {
        session.answers.set(keys::NAME, "Nour Tarchouna");
        session.answers.set(keys::CIN, "12345678");
        session.answers.set(keys::UNIVERSITY, "Carthage");
        session.select_choice(keys::GENDER, "Female", 0);
        session.answers.set(keys::DOB, "2003-05-14");
        session.answers.set(keys::POSITION, "TM");
        session.answers.set(keys::DEPARTMENT, "MKT");
    }

    #[test]
    fn starts_on_step_one_with_empty_store() {
        let session = FormSession::new();
        assert_eq!(session.step(), 1);
        assert_eq!(session.phase(), Phase::Filling);
        assert!(session.answers.entries().next().is_none());
    }

    #[test]
    fn continue_with_missing_required_fields_does_not_advance() {
        let mut session = FormSession::new();
        session.answers.set(keys::NAME, "Nour");
        let before = session.answers.clone();

        let result = session.advance();
        let Advance::Invalid(failing) = result else {
            panic!("expected Invalid, got {result:?}");
        };
        assert!(failing.contains(&keys::CIN));
        assert!(!failing.contains(&keys::NAME));
        assert_eq!(session.step(), 1);
        assert_eq!(session.answers, before);
    }

    #[test]
    fn valid_continue_moves_exactly_one_step() {
        let mut session = FormSession::new();
        fill_step_1(&mut session);
        assert_eq!(session.advance(), Advance::Next(2));
        assert_eq!(session.step(), 2);
    }

    #[test]
    fn back_then_forward_preserves_values() {
        let mut session = FormSession::new();
        fill_step_1(&mut session);
        session.advance();

        let snapshot = session.answers.clone();
        session.back();
        assert_eq!(session.step(), 1);
        assert_eq!(session.answers, snapshot);
        session.advance();
        assert_eq!(session.step(), 2);
        assert_eq!(session.answers, snapshot);
    }

    #[test]
    fn back_on_step_one_is_a_noop() {
        let mut session = FormSession::new();
        session.back();
        assert_eq!(session.step(), 1);
    }

    #[test]
    fn select_choice_replaces_the_previous_selection() {
        let mut session = FormSession::new();
        session.select_choice(keys::BUS, "Departure Only", 20);
        session.select_choice(keys::BUS, "Full Package", 30);
        assert_eq!(session.answers.value(keys::BUS), "Full Package");
        assert_eq!(session.answers.price(keys::BUS), 30);
        assert_eq!(session.answers.value(keys::TOTAL_FEE), "175 DT");
    }

    #[test]
    fn chronic_and_medical_details_are_optional() {
        let mut session = FormSession::new();
        fill_step_1(&mut session);
        session.advance();
        session.select_choice(keys::ALLERGIES, "No", 0);
        assert_eq!(session.advance(), Advance::Next(3));
    }

    #[test]
    fn last_step_success_enters_submitting() {
        let mut session = FormSession::new();
        // jump through the steps with everything required filled
        fill_step_1(&mut session);
        session.advance();
        session.select_choice(keys::ALLERGIES, "No", 0);
        session.advance();
        session.answers.set(keys::EMAIL, "nour@example.com");
        session.answers.set(keys::PHONE, "+216 11 111 111");
        session.answers.set(keys::EMERGENCY, "+216 22 222 222");
        session.advance();
        session.answers.set(keys::ZODIAC, "Leo");
        session.answers.set(keys::GOALS, "Grow");
        session.answers.set(keys::TOPICS, "Leadership");
        session.advance();
        session.select_choice(keys::COMM, "WhatsApp", 0);
        session.select_choice(keys::BUS, "Full Package", 30);
        session.select_choice(keys::ROOM, "Yes", 100);
        session.advance();
        session.answers.set(keys::SIGNATURE, "data:image/png;base64,AAAA");
        session.answers.set(keys::TERMS, "Accepted");

        assert_eq!(session.advance(), Advance::ReadyToSubmit);
        assert_eq!(session.phase(), Phase::Submitting);
        assert_eq!(session.answers.value(keys::TOTAL_FEE), "275 DT");

        session.submission_failed();
        assert_eq!(session.phase(), Phase::Filling);
        assert_eq!(session.advance(), Advance::ReadyToSubmit);
        session.mark_submitted();
        assert_eq!(session.phase(), Phase::Submitted);
    }

    #[test]
    fn unsigned_terms_block_the_last_step() {
        let mut session = FormSession::new();
        // force to step 6 by walking with valid data
        fill_step_1(&mut session);
        session.advance();
        session.select_choice(keys::ALLERGIES, "Yes", 0);
        session.advance();
        session.answers.set(keys::EMAIL, "a@b.c");
        session.answers.set(keys::PHONE, "1");
        session.answers.set(keys::EMERGENCY, "2");
        session.advance();
        session.answers.set(keys::ZODIAC, "Virgo");
        session.answers.set(keys::GOALS, "g");
        session.answers.set(keys::TOPICS, "t");
        session.advance();
        session.select_choice(keys::COMM, "Email", 0);
        session.select_choice(keys::BUS, "None", 0);
        session.select_choice(keys::ROOM, "No", 0);
        session.advance();
        assert!(session.is_last_step());

        let Advance::Invalid(failing) = session.advance() else {
            panic!("expected Invalid");
        };
        assert_eq!(failing, vec![keys::SIGNATURE, keys::TERMS]);
        assert_eq!(session.phase(), Phase::Filling);
    }
}
