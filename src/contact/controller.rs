use log::{debug, info, warn};

use crate::contact::errors::{FieldValidationError, SubmissionError};
use crate::contact::rules::{self, Field, FieldCheck};
use crate::contact::transport::{Ack, ContactSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

impl SubmissionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Never checked, or last checked while blank.
    Neutral,
    Valid,
    Invalid(FieldValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub validity: Validity,
}

impl FieldState {
    fn empty() -> Self {
        Self {
            value: String::new(),
            validity: Validity::Neutral,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.validity, Validity::Invalid(_))
    }

    pub fn error_text(&self) -> Option<&'static str> {
        match &self.validity {
            Validity::Invalid(err) => Some(err.reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Form,
    Success,
}

/// Issued when a submission is handed to the transport; the completion must
/// bring it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// Identifies one shake so an earlier timer cannot cut a later shake short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Accepted(Ticket, ContactSubmission),
    Rejected(ShakeToken),
    /// Not mounted, or a submission is already in flight.
    Ignored,
}

pub struct FormController {
    mounted: bool,
    name: FieldState,
    email: FieldState,
    message: FieldState,
    state: SubmissionState,
    submit_enabled: bool,
    shake: Option<ShakeToken>,
    shake_seq: u64,
    generation: u64,
    failure: Option<SubmissionError>,
    last_ack: Option<Ack>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            mounted: false,
            name: FieldState::empty(),
            email: FieldState::empty(),
            message: FieldState::empty(),
            state: SubmissionState::Idle,
            submit_enabled: true,
            shake: None,
            shake_seq: 0,
            generation: 0,
            failure: None,
            last_ack: None,
        }
    }

    pub fn mount(&mut self) {
        self.clear();
        self.mounted = true;
        debug!("Contact form mounted (generation {})", self.generation);
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.shake = None;
        debug!("Contact form unmounted");
    }

    fn clear(&mut self) {
        self.name = FieldState::empty();
        self.email = FieldState::empty();
        self.message = FieldState::empty();
        self.state = SubmissionState::Idle;
        self.submit_enabled = true;
        self.shake = None;
        self.failure = None;
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn shows_loader(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    pub fn failure(&self) -> Option<&SubmissionError> {
        self.failure.as_ref()
    }

    pub fn last_ack(&self) -> Option<&Ack> {
        self.last_ack.as_ref()
    }

    pub fn panel(&self) -> Panel {
        match self.state {
            SubmissionState::Succeeded => Panel::Success,
            _ => Panel::Form,
        }
    }

    fn revalidate(&mut self, field: Field) -> bool {
        let outcome = rules::check(field, &self.field(field).value);
        let passed = outcome.passed();
        let state = self.field_mut(field);
        state.validity = match outcome {
            FieldCheck::Passed => Validity::Valid,
            FieldCheck::Blank => Validity::Neutral,
            FieldCheck::Failed(err) => {
                debug!("{} failed validation: {}", field.id(), err);
                Validity::Invalid(err)
            }
        };
        passed
    }

    pub fn input(&mut self, field: Field, value: String) {
        if self.state != SubmissionState::Idle {
            return;
        }
        let state = self.field_mut(field);
        state.value = value;
        if state.is_invalid() {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: Field) {
        if self.state != SubmissionState::Idle {
            return;
        }
        self.revalidate(field);
    }

    pub fn validate_all(&mut self) -> bool {
        Field::ALL
            .iter()
            .fold(true, |ok, &field| self.revalidate(field) && ok)
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if !self.mounted || self.state != SubmissionState::Idle || !self.submit_enabled {
            return SubmitDecision::Ignored;
        }

        self.state = SubmissionState::Validating;
        let valid = self.validate_all();

        if !valid {
            self.state = SubmissionState::Idle;
            self.shake_seq += 1;
            let token = ShakeToken(self.shake_seq);
            self.shake = Some(token);
            info!("Contact form rejected: invalid fields");
            return SubmitDecision::Rejected(token);
        }

        self.state = SubmissionState::Submitting;
        self.submit_enabled = false;
        self.failure = None;
        info!("Contact form submitting");

        let submission = ContactSubmission {
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            message: self.message.value.trim().to_string(),
        };
        SubmitDecision::Accepted(Ticket { generation: self.generation }, submission)
    }

    /// Shake timer expiry. Returns whether the shake state was cleared.
    pub fn end_shake(&mut self, token: ShakeToken) -> bool {
        if self.shake == Some(token) {
            self.shake = None;
            true
        } else {
            false
        }
    }

    /// Transport completion. Returns whether it was applied; stale tickets are
    /// ignored.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Ack, SubmissionError>) -> bool {
        if ticket.generation != self.generation || self.state != SubmissionState::Submitting {
            debug!("Ignoring stale submission completion");
            return false;
        }

        self.submit_enabled = true;
        match result {
            Ok(ack) => {
                info!("Contact form submitted ({})", ack.reference);
                self.state = SubmissionState::Succeeded;
                self.last_ack = Some(ack);
            }
            Err(err) => {
                warn!("Contact form submission failed: {}", err);
                self.state = SubmissionState::Idle;
                self.failure = Some(err);
            }
        }
        true
    }

    pub fn reset(&mut self) -> bool {
        if self.state != SubmissionState::Succeeded {
            return false;
        }
        self.clear();
        self.generation += 1;
        info!("Contact form reset");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::transport::tests::ScriptedTransport;
    use crate::contact::transport::SubmitTransport;
    use futures::executor::block_on;

    fn mounted() -> FormController {
        let mut controller = FormController::new();
        controller.mount();
        controller
    }

    fn fill(controller: &mut FormController, name: &str, email: &str, message: &str) {
        controller.input(Field::Name, name.to_string());
        controller.input(Field::Email, email.to_string());
        controller.input(Field::Message, message.to_string());
    }

    fn fill_valid(controller: &mut FormController) {
        fill(controller, "Jane Goodall", "jane@zoorld.com", "Do you run chimpanzee tours?");
    }

    #[test]
    fn typing_first_time_does_not_flag_errors() {
        let mut controller = mounted();
        controller.input(Field::Name, "A".to_string());
        assert_eq!(controller.field(Field::Name).validity, Validity::Neutral);

        controller.blur(Field::Name);
        assert_eq!(
            controller.field(Field::Name).error_text(),
            Some("Name should be 2-50 letters only")
        );
    }

    #[test]
    fn input_revalidates_a_field_in_error() {
        let mut controller = mounted();
        controller.input(Field::Email, "jane@".to_string());
        controller.blur(Field::Email);
        assert!(controller.field(Field::Email).is_invalid());

        controller.input(Field::Email, "jane@zoorld.com".to_string());
        assert_eq!(controller.field(Field::Email).validity, Validity::Valid);
    }

    #[test]
    fn clearing_an_invalid_field_returns_to_neutral() {
        let mut controller = mounted();
        controller.input(Field::Message, "short".to_string());
        controller.blur(Field::Message);
        assert!(controller.field(Field::Message).is_invalid());

        controller.input(Field::Message, String::new());
        assert_eq!(controller.field(Field::Message).validity, Validity::Neutral);
        assert_eq!(controller.field(Field::Message).error_text(), None);
    }

    #[test]
    fn blank_fields_block_submit_without_errors() {
        let mut controller = mounted();
        let decision = controller.submit();

        assert!(matches!(decision, SubmitDecision::Rejected(_)));
        assert_eq!(controller.state(), SubmissionState::Idle);
        for field in Field::ALL {
            assert_eq!(controller.field(field).error_text(), None);
        }
    }

    #[test]
    fn invalid_submit_shows_every_error_and_shakes() {
        let mut controller = mounted();
        fill(&mut controller, "A1", "not-an-email", "short");

        let token = match controller.submit() {
            SubmitDecision::Rejected(token) => token,
            other => panic!("expected rejection, got {:?}", other),
        };

        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.submit_enabled());
        assert!(controller.is_shaking());
        assert_eq!(
            controller.field(Field::Name).error_text(),
            Some("Name should be 2-50 letters only")
        );
        assert_eq!(
            controller.field(Field::Email).error_text(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            controller.field(Field::Message).error_text(),
            Some("Message should be at least 10 characters")
        );

        assert!(controller.end_shake(token));
        assert!(!controller.is_shaking());
    }

    #[test]
    fn older_shake_timer_does_not_end_newer_shake() {
        let mut controller = mounted();
        let first = match controller.submit() {
            SubmitDecision::Rejected(token) => token,
            other => panic!("expected rejection, got {:?}", other),
        };
        let second = match controller.submit() {
            SubmitDecision::Rejected(token) => token,
            other => panic!("expected rejection, got {:?}", other),
        };

        assert!(!controller.end_shake(first));
        assert!(controller.is_shaking());
        assert!(controller.end_shake(second));
    }

    #[test]
    fn valid_submit_runs_through_to_success() {
        let mut controller = mounted();
        fill_valid(&mut controller);
        let transport = ScriptedTransport::default();

        let (ticket, submission) = match controller.submit() {
            SubmitDecision::Accepted(ticket, submission) => (ticket, submission),
            other => panic!("expected acceptance, got {:?}", other),
        };
        assert_eq!(controller.state(), SubmissionState::Submitting);
        assert!(!controller.submit_enabled());
        assert!(controller.shows_loader());
        assert_eq!(controller.panel(), Panel::Form);

        let result = block_on(transport.send(submission));
        assert!(controller.complete(ticket, result));

        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(controller.panel(), Panel::Success);
        assert!(controller.submit_enabled());
        assert!(!controller.shows_loader());
        assert_eq!(controller.last_ack().map(|a| a.reference.as_str()), Some("scripted"));
        assert_eq!(transport.received.borrow()[0].name, "Jane Goodall");
    }

    #[test]
    fn submission_values_are_trimmed() {
        let mut controller = mounted();
        fill(&mut controller, "  Jane  ", " jane@zoorld.com ", "  Hello there, keepers!  ");
        match controller.submit() {
            SubmitDecision::Accepted(_, submission) => {
                assert_eq!(submission.name, "Jane");
                assert_eq!(submission.email, "jane@zoorld.com");
                assert_eq!(submission.message, "Hello there, keepers!");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut controller = mounted();
        fill_valid(&mut controller);
        assert!(matches!(controller.submit(), SubmitDecision::Accepted(..)));
        assert_eq!(controller.submit(), SubmitDecision::Ignored);

        controller.input(Field::Name, "Changed".to_string());
        assert_eq!(controller.field(Field::Name).value, "Jane Goodall");
    }

    #[test]
    fn transport_failure_returns_to_idle_keeping_values() {
        let mut controller = mounted();
        fill_valid(&mut controller);
        let transport = ScriptedTransport::replying(vec![Err(SubmissionError::Rejected {
            reason: "mailbox full".to_string(),
        })]);

        let (ticket, submission) = match controller.submit() {
            SubmitDecision::Accepted(ticket, submission) => (ticket, submission),
            other => panic!("expected acceptance, got {:?}", other),
        };
        assert!(controller.complete(ticket, block_on(transport.send(submission))));

        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.submit_enabled());
        assert_eq!(controller.field(Field::Email).value, "jane@zoorld.com");
        assert!(matches!(controller.failure(), Some(SubmissionError::Rejected { .. })));

        // retrying clears the failure line
        assert!(matches!(controller.submit(), SubmitDecision::Accepted(..)));
        assert!(controller.failure().is_none());
    }

    #[test]
    fn reset_after_success_clears_everything() {
        let mut controller = mounted();
        fill_valid(&mut controller);
        let ticket = match controller.submit() {
            SubmitDecision::Accepted(ticket, _) => ticket,
            other => panic!("expected acceptance, got {:?}", other),
        };
        controller.complete(ticket, Ok(Ack { reference: "a".to_string() }));

        assert!(controller.reset());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.panel(), Panel::Form);
        for field in Field::ALL {
            assert_eq!(controller.field(field), &FieldState::empty());
        }

        // a fresh cycle works
        fill_valid(&mut controller);
        assert!(matches!(controller.submit(), SubmitDecision::Accepted(..)));
    }

    #[test]
    fn reset_outside_success_is_a_no_op() {
        let mut controller = mounted();
        controller.input(Field::Name, "Jane".to_string());
        assert!(!controller.reset());
        assert_eq!(controller.field(Field::Name).value, "Jane");
    }

    #[test]
    fn completions_are_idempotent() {
        let mut controller = mounted();
        fill_valid(&mut controller);
        let ticket = match controller.submit() {
            SubmitDecision::Accepted(ticket, _) => ticket,
            other => panic!("expected acceptance, got {:?}", other),
        };
        assert!(controller.complete(ticket, Ok(Ack { reference: "a".to_string() })));
        assert!(!controller.complete(ticket, Ok(Ack { reference: "b".to_string() })));
        assert_eq!(controller.last_ack().map(|a| a.reference.as_str()), Some("a"));
    }

    #[test]
    fn completion_after_unmount_is_ignored() {
        let mut controller = mounted();
        fill_valid(&mut controller);
        let ticket = match controller.submit() {
            SubmitDecision::Accepted(ticket, _) => ticket,
            other => panic!("expected acceptance, got {:?}", other),
        };

        controller.unmount();
        assert!(!controller.complete(ticket, Ok(Ack { reference: "late".to_string() })));
        assert_eq!(controller.submit(), SubmitDecision::Ignored);

        controller.mount();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.submit_enabled());
        assert!(!controller.complete(ticket, Ok(Ack { reference: "late".to_string() })));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn state_labels_follow_the_lifecycle() {
        let mut controller = mounted();
        assert_eq!(controller.state().as_str(), "idle");
        fill_valid(&mut controller);
        let ticket = match controller.submit() {
            SubmitDecision::Accepted(ticket, _) => ticket,
            other => panic!("expected acceptance, got {:?}", other),
        };
        assert_eq!(controller.state().as_str(), "submitting");
        controller.complete(ticket, Ok(Ack { reference: "r".to_string() }));
        assert_eq!(controller.state().as_str(), "succeeded");
    }
}
