//! Contact form state, validation and the simulated transmission.
//!
//! [`ContactForm`] is a plain value that [`validate`] inspects;
//! [`ContactDesk`] drives submission on tokio through a [`Transmitter`]
//! and publishes each form snapshot on a watch channel.

mod desk;
mod form;
mod validate;

pub use desk::{ContactDesk, SimulatedTransmitter, Transmitter};
pub use form::{ContactForm, ContactMessage, Field, FieldErrors, FormStatus};
pub use validate::{is_valid_email, validate, MIN_MESSAGE_CHARS};
