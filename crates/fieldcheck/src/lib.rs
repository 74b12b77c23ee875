//! # fieldcheck
//!
//! A rule-based form validation engine: fields are annotated with a
//! whitespace-delimited list of rule names, and the engine tracks per-field
//! and whole-form validity, collects human-readable error messages and
//! decides when user interaction should re-validate a field.
//!
//! The engine is UI-toolkit agnostic. Discovery of annotated fields, error
//! rendering and event wiring live behind three narrow seams:
//!
//! - [`ValueSource`] reads a field's current value on demand.
//! - [`Presenter`] receives render, focus and suppress-submission requests.
//! - The binding layer feeds change/keyup events in via
//!   [`FormValidator::handle_trigger`] and submission attempts via
//!   [`FormValidator::submit`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::{FormValidator, NoopPresenter};
//!
//! // (source, rule-name config) pairs in discovery order.
//! let mut form = FormValidator::with_builtins(vec![
//!     (name_input, "required".to_string()),
//!     (email_input, "required email".to_string()),
//! ]);
//!
//! // On a submission attempt:
//! if form.submit(&mut presenter) {
//!     // all fields valid, let the submission proceed
//! }
//! ```
//!
//! ## Re-validation policy
//!
//! A field starts out listening only to its committed-change trigger. After
//! its first failing validation it escalates to also react to live-edit
//! (keyup) triggers, and never de-escalates. Users get immediate feedback
//! while correcting a field that already failed, without being nagged on
//! every keystroke beforehand.

pub mod error;
pub mod field;
pub mod form;
pub mod presenter;
pub mod registry;
pub mod rule;

pub use error::ValidationError;
pub use field::{FieldValidator, ListenMode, Trigger, ValidationResult, Validity, ValueSource};
pub use form::FormValidator;
pub use presenter::{NoopPresenter, Presenter};
pub use registry::RuleRegistry;
pub use rule::Rule;
