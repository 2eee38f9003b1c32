use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info, warn};

use crate::config::AnimationConfig;
use crate::error::SubmitError;
use crate::schedule::TaskHandle;

use super::form::{ContactForm, ContactMessage, Field};

/// Delivers a contact message somewhere.
#[async_trait]
pub trait Transmitter: Send + Sync {
    async fn send(&self, message: ContactMessage) -> Result<(), SubmitError>;
}

/// Stand-in transmitter: waits, then reports the configured outcome.
#[derive(Debug, Clone)]
pub struct SimulatedTransmitter {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedTransmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// A transmitter that always fails with `reason` after the delay.
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl Transmitter for SimulatedTransmitter {
    async fn send(&self, message: ContactMessage) -> Result<(), SubmitError> {
        time::sleep(self.delay).await;
        match &self.failure {
            Some(reason) => Err(SubmitError::transmission(reason.clone())),
            None => {
                info!(
                    from = %message.email,
                    subject = %message.subject,
                    "Contact message transmitted"
                );
                Ok(())
            }
        }
    }
}

/// Runs the contact form: edits, submission and the status banner timer.
///
/// Dropping the desk cancels any submission or banner timer in flight.
pub struct ContactDesk {
    form: Arc<watch::Sender<ContactForm>>,
    transmitter: Arc<dyn Transmitter>,
    status_display: Duration,
    pending: Mutex<Option<TaskHandle>>,
}

impl ContactDesk {
    pub fn new(transmitter: Arc<dyn Transmitter>, status_display: Duration) -> Self {
        let (form, _) = watch::channel(ContactForm::new());
        Self {
            form: Arc::new(form),
            transmitter,
            status_display,
            pending: Mutex::new(None),
        }
    }

    /// A desk backed by [`SimulatedTransmitter`] with the configured delays.
    pub fn simulated(config: &AnimationConfig) -> Self {
        Self::new(
            Arc::new(SimulatedTransmitter::new(config.submit_delay())),
            config.status_display(),
        )
    }

    /// A desk whose simulated transmissions always fail with `reason`.
    pub fn simulated_failing(config: &AnimationConfig, reason: impl Into<String>) -> Self {
        Self::new(
            Arc::new(SimulatedTransmitter::failing(config.submit_delay(), reason)),
            config.status_display(),
        )
    }

    pub fn form(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactForm> {
        self.form.subscribe()
    }

    pub fn edit(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.form.send_modify(|form| form.edit(field, value));
    }

    /// Validate and start transmitting.
    ///
    /// Returns once the submission has started; the outcome arrives on the
    /// watch channel.
    pub fn submit(&self) -> Result<(), SubmitError> {
        let mut started = Err(SubmitError::Busy);
        self.form.send_if_modified(|form| {
            started = form.begin_submit();
            !matches!(started, Err(SubmitError::Busy))
        });

        let message = match started {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "Contact submission rejected");
                return Err(e);
            }
        };

        let form = Arc::clone(&self.form);
        let transmitter = Arc::clone(&self.transmitter);
        let status_display = self.status_display;
        let handle = TaskHandle::spawn("contact-submit", move |live| async move {
            let result = transmitter.send(message).await;
            if !live.is_alive() {
                return;
            }
            if let Err(e) = &result {
                warn!(error = %e, "Contact transmission failed");
            }
            form.send_modify(|f| f.finish_submit(&result));

            time::sleep(status_display).await;
            if live.is_alive() {
                form.send_modify(|f| f.expire_status());
            }
        });

        // Replacing the handle cancels a banner timer left by an earlier submission.
        *self.pending.lock() = Some(handle);
        Ok(())
    }
}

impl std::fmt::Debug for ContactDesk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactDesk")
            .field("form", &*self.form.borrow())
            .field("status_display", &self.status_display)
            .finish()
    }
}
