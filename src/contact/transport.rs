use std::cell::Cell;
use std::rc::Rc;

use std::future::Future;

use futures::future::{self, Either, LocalBoxFuture};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use serde::Serialize;

use crate::config::timings;
use crate::contact::errors::SubmissionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub reference: String,
}

/// Delivers a contact submission somewhere. Futures run on the UI thread, so
/// they need not be `Send`.
pub trait SubmitTransport {
    fn send(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>>;
}

pub struct SimulatedTransport {
    delay_ms: u32,
    sent: Rc<Cell<u32>>,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            sent: Rc::new(Cell::new(0)),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(timings::SUBMIT_DELAY_MS)
    }
}

impl SubmitTransport for SimulatedTransport {
    fn send(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>> {
        let delay_ms = self.delay_ms;
        let sent = self.sent.clone();
        Box::pin(async move {
            let body = serde_json::to_string(&submission).map_err(|e| SubmissionError::Rejected {
                reason: e.to_string(),
            })?;
            debug!("Simulating contact submission ({} bytes)", body.len());
            TimeoutFuture::new(delay_ms).await;
            sent.set(sent.get() + 1);
            info!("Simulated contact submission #{} delivered", sent.get());
            Ok::<_, SubmissionError>(Ack {
                reference: format!("sim-{}", sent.get()),
            })
        })
    }
}

/// Waits for `send`, giving up with `TimedOut` if `timer` finishes first.
pub async fn send_within<T>(
    send: LocalBoxFuture<'static, Result<Ack, SubmissionError>>,
    timer: T,
    after_ms: u32,
) -> Result<Ack, SubmissionError>
where
    T: Future<Output = ()>,
{
    pin_mut!(timer);
    match future::select(send, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            warn!("Contact submission abandoned after {}ms", after_ms);
            Err(SubmissionError::TimedOut { after_ms })
        }
    }
}

#[derive(Clone)]
pub struct TransportHandle(pub Rc<dyn SubmitTransport>);

impl TransportHandle {
    pub fn new(transport: impl SubmitTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }
}

impl Default for TransportHandle {
    fn default() -> Self {
        Self::new(SimulatedTransport::default())
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers immediately with pre-queued results and records what it was given.
    #[derive(Default)]
    pub(crate) struct ScriptedTransport {
        pub replies: RefCell<VecDeque<Result<Ack, SubmissionError>>>,
        pub received: RefCell<Vec<ContactSubmission>>,
    }

    impl ScriptedTransport {
        pub fn replying(replies: Vec<Result<Ack, SubmissionError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                received: RefCell::default(),
            }
        }
    }

    impl SubmitTransport for ScriptedTransport {
        fn send(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>> {
            self.received.borrow_mut().push(submission);
            let reply = self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
                Ok(Ack {
                    reference: "scripted".to_string(),
                })
            });
            Box::pin(async move { reply })
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Goodall".to_string(),
            email: "jane@zoorld.com".to_string(),
            message: "Do you run chimpanzee tours?".to_string(),
        }
    }

    #[test]
    fn scripted_transport_replays_in_order() {
        let transport = ScriptedTransport::replying(vec![
            Err(SubmissionError::TimedOut { after_ms: 1500 }),
            Ok(Ack { reference: "ok-1".to_string() }),
        ]);
        let handle = TransportHandle::new(transport);

        let first = block_on(handle.0.send(submission()));
        let second = block_on(handle.0.send(submission()));

        assert_eq!(first, Err(SubmissionError::TimedOut { after_ms: 1500 }));
        assert_eq!(second.map(|ack| ack.reference), Ok("ok-1".to_string()));
    }

    #[test]
    fn answer_before_the_timer_is_passed_through() {
        let handle = TransportHandle::new(ScriptedTransport::replying(vec![Ok(Ack {
            reference: "fast".to_string(),
        })]));
        let result = block_on(send_within(
            handle.0.send(submission()),
            future::pending::<()>(),
            10_000,
        ));
        assert_eq!(result.map(|ack| ack.reference), Ok("fast".to_string()));
    }

    #[test]
    fn silent_transport_times_out() {
        let silent: LocalBoxFuture<'static, Result<Ack, SubmissionError>> = Box::pin(future::pending());
        let result = block_on(send_within(silent, future::ready(()), 10_000));
        assert_eq!(result, Err(SubmissionError::TimedOut { after_ms: 10_000 }));
    }

    #[test]
    fn submission_serializes_with_field_keys() {
        let json = serde_json::to_value(submission()).unwrap();
        assert_eq!(json["name"], "Jane Goodall");
        assert_eq!(json["email"], "jane@zoorld.com");
        assert_eq!(json["message"], "Do you run chimpanzee tours?");
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = TransportHandle::new(ScriptedTransport::default());
        let b = a.clone();
        let c = TransportHandle::new(ScriptedTransport::default());
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn errors_render_user_facing_text() {
        let rejected = SubmissionError::Rejected { reason: "mailbox full".to_string() };
        assert_eq!(rejected.to_string(), "Your message could not be sent: mailbox full");
        assert_eq!(
            SubmissionError::TimedOut { after_ms: 800 }.to_string(),
            "Sending timed out after 800ms, please try again"
        );
    }
}
