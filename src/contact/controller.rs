use std::time::Duration;

use super::gateway::{DispatchError, EmailDispatchResult, EmailGateway};
use super::validation::{validate, ContactFormInput, Field, ValidationErrors};
use crate::toast::Notice;

pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(6);
pub const FAILURE_TOAST_DURATION: Duration = Duration::from_secs(5);
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(8);
pub const FAILURE_DISPLAY: Duration = Duration::from_secs(5);

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors in the form";
pub const SENDING_MESSAGE: &str = "Sending your message...";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// The form was not submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is still waiting on the gateway.
    InFlight,
    /// Validation failed; the errors are now on the form.
    Invalid(Notice),
}

/// A submission that passed validation and is waiting on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub input: ContactFormInput,
    pub generation: u64,
}

/// How a finished submission should be announced, and when its status
/// should fall back to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub notice: Notice,
    pub revert_after: Duration,
    pub generation: u64,
    /// The delivered message, still owed an acknowledgement. Only set on
    /// success; sent after the form is released.
    pub acknowledge: Option<ContactFormInput>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    input: ContactFormInput,
    errors: ValidationErrors,
    status: SubmissionStatus,
    sent_count: u32,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn sent_count(&self) -> u32 {
        self.sent_count
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.errors.is_empty()
    }

    /// Stores the edit and drops any error shown for that field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn sending_notice() -> Notice {
        Notice::loading(SENDING_MESSAGE)
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(Notice::error(FIX_ERRORS_MESSAGE)));
        }
        self.status = SubmissionStatus::Submitting;
        self.generation += 1;
        Ok(PendingSubmission {
            input: self.input.clone(),
            generation: self.generation,
        })
    }

    pub fn complete_submit(
        &mut self,
        outcome: Result<EmailDispatchResult, DispatchError>,
    ) -> Completion {
        let (notice, revert_after, acknowledge) = match outcome {
            Ok(res) if res.success => {
                self.status = SubmissionStatus::Success;
                let sent = std::mem::take(&mut self.input);
                self.sent_count += 1;
                (
                    Notice::success(res.message).with_duration(SUCCESS_TOAST_DURATION),
                    SUCCESS_DISPLAY,
                    Some(sent),
                )
            }
            Ok(res) => {
                self.status = SubmissionStatus::Error;
                (
                    Notice::error(res.message).with_duration(FAILURE_TOAST_DURATION),
                    FAILURE_DISPLAY,
                    None,
                )
            }
            Err(e) => {
                log::error!("Contact form submission failed: {e}");
                self.status = SubmissionStatus::Error;
                (Notice::error(TRANSPORT_FAILURE_MESSAGE), FAILURE_DISPLAY, None)
            }
        };
        Completion {
            notice,
            revert_after,
            generation: self.generation,
            acknowledge,
        }
    }

    /// Clears a finished status. Ignored if a newer submission has started
    /// since the one `generation` belongs to.
    pub fn revert_to_idle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.is_submitting() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Runs a whole submission against `gateway`. The acknowledgement is
    /// left to the caller.
    pub async fn submit(
        &mut self,
        gateway: &dyn EmailGateway,
    ) -> Result<Completion, SubmitRejected> {
        let pending = self.begin_submit()?;
        let outcome = gateway.send(&pending.input).await;
        Ok(self.complete_submit(outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;

    use super::super::gateway::GatewayMode;
    use super::*;
    use crate::toast::ToastKind;

    enum Reply {
        Sent(&'static str),
        Failed(&'static str),
        Broken,
    }

    struct StubGateway {
        reply: Reply,
        calls: AtomicUsize,
        acks: AtomicUsize,
    }

    impl StubGateway {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                acks: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailGateway for StubGateway {
        async fn send(
            &self,
            _input: &ContactFormInput,
        ) -> Result<EmailDispatchResult, DispatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Sent(msg) => Ok(EmailDispatchResult::sent(msg, json!({}))),
                Reply::Failed(msg) => Ok(EmailDispatchResult::failed(msg, json!({}))),
                Reply::Broken => Err(DispatchError::Rejected {
                    status: 503,
                    body: "unavailable".to_string(),
                }),
            }
        }

        async fn acknowledge(&self, _input: &ContactFormInput) -> Result<(), DispatchError> {
            self.acks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn mode(&self) -> GatewayMode {
            GatewayMode::Demo
        }
    }

    fn fill(form: &mut ContactForm) {
        form.set_field(Field::Name, "Al");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Subject, "Hello there");
        form.set_field(Field::Message, "x".repeat(25));
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        fill(&mut form);
        form
    }

    #[test]
    fn test_successful_submit_resets_and_counts() {
        let gateway = StubGateway::new(Reply::Sent("ok"));
        let mut form = filled_form();
        assert!(form.errors().is_empty());

        let done = block_on(form.submit(&gateway)).expect("valid form should submit");

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.input().is_empty());
        assert_eq!(form.sent_count(), 1);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert_eq!(done.notice.kind, ToastKind::Success);
        assert_eq!(done.notice.message, "ok");
        assert_eq!(done.notice.duration, Some(SUCCESS_TOAST_DURATION));
        assert_eq!(done.revert_after, SUCCESS_DISPLAY);
    }

    #[test]
    fn test_acknowledgement_left_until_form_released() {
        let gateway = StubGateway::new(Reply::Sent("ok"));
        let mut form = filled_form();
        let sent = form.input().clone();

        let done = block_on(form.submit(&gateway)).expect("valid form should submit");

        assert!(!form.is_submitting());
        assert_eq!(gateway.acks.load(Ordering::SeqCst), 0);
        assert_eq!(done.acknowledge, Some(sent));

        let failed = StubGateway::new(Reply::Failed("nope"));
        let mut form = filled_form();
        let done = block_on(form.submit(&failed)).expect("valid form should submit");
        assert_eq!(done.acknowledge, None);
        assert_eq!(failed.acks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispatch_failure_keeps_input() {
        let gateway = StubGateway::new(Reply::Failed("nope"));
        let mut form = filled_form();
        let before = form.input().clone();

        let done = block_on(form.submit(&gateway)).expect("valid form should submit");

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.input(), &before);
        assert_eq!(form.sent_count(), 0);
        assert_eq!(done.notice, Notice::error("nope").with_duration(FAILURE_TOAST_DURATION));
        assert_eq!(done.revert_after, FAILURE_DISPLAY);
    }

    #[test]
    fn test_transport_failure_keeps_input() {
        let gateway = StubGateway::new(Reply::Broken);
        let mut form = filled_form();
        let before = form.input().clone();

        let done = block_on(form.submit(&gateway)).expect("valid form should submit");

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.input(), &before);
        assert_eq!(done.notice, Notice::error(TRANSPORT_FAILURE_MESSAGE));
        assert_eq!(done.revert_after, FAILURE_DISPLAY);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_missing_gateway_is_transport_failure() {
        let mut form = filled_form();
        form.begin_submit().expect("valid form should submit");

        let done = form.complete_submit(Err(DispatchError::Unavailable));

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert!(!form.input().is_empty());
        assert_eq!(done.notice, Notice::error(TRANSPORT_FAILURE_MESSAGE));
    }

    #[test]
    fn test_invalid_form_never_calls_gateway() {
        let gateway = StubGateway::new(Reply::Sent("ok"));
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "bad");
        form.set_field(Field::Subject, "hi");
        form.set_field(Field::Message, "short");

        let res = block_on(form.submit(&gateway));

        assert_eq!(
            res,
            Err(SubmitRejected::Invalid(Notice::error(FIX_ERRORS_MESSAGE)))
        );
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.errors().len(), 4);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "bad");
        assert!(form.begin_submit().is_err());
        assert!(form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Name));

        // still invalid, but the error goes until the next submit
        form.set_field(Field::Email, "still bad");
        assert!(!form.errors().contains(Field::Email));
        assert_eq!(form.errors().len(), 3);
        assert!(form.errors().contains(Field::Name));
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut form = filled_form();
        let pending = form.begin_submit().expect("valid form should submit");
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert!(!form.revert_to_idle(pending.generation));

        form.complete_submit(Ok(EmailDispatchResult::sent("ok", json!({}))));
        assert!(form.can_submit());
    }

    #[test]
    fn test_stale_revert_ignored() {
        let gateway = StubGateway::new(Reply::Failed("nope"));
        let mut form = filled_form();
        let first = block_on(form.submit(&gateway)).unwrap();

        // retry before the first revert fires
        let second = form.begin_submit().expect("retry should start");
        assert!(!form.revert_to_idle(first.generation));
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        let done = form.complete_submit(Ok(EmailDispatchResult::sent("ok", json!({}))));
        assert_eq!(done.generation, second.generation);
        assert!(!form.revert_to_idle(first.generation));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.revert_to_idle(done.generation));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_counter_increments_per_success() {
        let gateway = StubGateway::new(Reply::Sent("ok"));
        let mut form = filled_form();
        block_on(form.submit(&gateway)).unwrap();
        assert!(block_on(form.submit(&gateway)).is_err());

        fill(&mut form);
        block_on(form.submit(&gateway)).unwrap();
        assert_eq!(form.sent_count(), 2);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }
}
