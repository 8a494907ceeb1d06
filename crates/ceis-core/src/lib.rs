//! CEIS 2K26 Registration Engine
//!
//! Core library behind the "Under the Stars" conference desktop app:
//! the multi-step registration form state machine, the shared answer
//! store, the derived fee computation, the zodiac constellation particle
//! field, freehand signature capture, and the spreadsheet submission
//! client.
//!
//! ## Overview
//!
//! The form is six steps of immutable configuration ([`steps::STEPS`]).
//! A [`FormSession`] owns the current step index and the [`AnswerStore`];
//! widgets write into the store through the session, the session validates
//! the current step's required fields on every `continue`, and on the last
//! step the collected answers become a [`RegistrationPayload`] sent by the
//! [`SubmissionClient`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use ceis_core::{FormSession, Advance, SubmissionClient, RegistrationPayload};
//!
//! let mut session = FormSession::new();
//! session.answers.set("name", "Nour");
//! // ... fill the rest of step 1 ...
//! match session.advance() {
//!     Advance::Next(step) => println!("now on step {step}"),
//!     Advance::Invalid(keys) => println!("missing: {keys:?}"),
//!     Advance::ReadyToSubmit => {
//!         let payload = RegistrationPayload::from_store(&session.answers);
//!         // SubmissionClient::new(endpoint).submit(&payload).await?
//!     }
//! }
//! ```

pub mod error;
pub mod fee;
pub mod particles;
pub mod photo;
pub mod session;
pub mod signature;
pub mod steps;
pub mod store;
pub mod submit;
pub mod types;
pub mod zodiac;

// Re-exports
pub use error::{RegResult, RegistrationError};
pub use particles::{Particle, ParticleField};
pub use photo::PhotoAttachment;
pub use session::{Advance, FormSession, Phase};
pub use signature::SignaturePad;
pub use store::AnswerStore;
pub use submit::{RegistrationPayload, SubmissionClient};
pub use types::{ChoiceOption, FieldDef, FieldKind, SelectOption, StepDef};
pub use zodiac::{Constellation, SignInfo};
