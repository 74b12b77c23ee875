// File: src/form.rs
// Purpose: Whole-form validation over an ordered field collection

use crate::field::{FieldValidator, Trigger, ValidationResult, ValueSource};
use crate::error::ValidationError;
use crate::presenter::Presenter;
use crate::registry::RuleRegistry;

/// Validates an ordered collection of fields as a unit.
///
/// The validator owns its [`RuleRegistry`], so custom rules registered here
/// are scoped to this form. Field order is discovery order and determines
/// both message order and which invalid field receives focus.
#[derive(Debug)]
pub struct FormValidator<S: ValueSource> {
    registry: RuleRegistry,
    fields: Vec<FieldValidator<S>>,
}

impl<S: ValueSource> FormValidator<S> {
    /// Build a form validator from an ordered sequence of
    /// `(value source, raw rule-name config)` pairs supplied by the
    /// discovery collaborator.
    ///
    /// A form with zero discovered fields is non-validating: a diagnostic is
    /// logged and [`is_valid`](Self::is_valid) is trivially true.
    pub fn new(registry: RuleRegistry, discovered: Vec<(S, String)>) -> Self {
        let fields: Vec<FieldValidator<S>> = discovered
            .into_iter()
            .map(|(source, raw_config)| FieldValidator::new(source, &raw_config))
            .collect();
        if fields.is_empty() {
            tracing::warn!("no validation fields discovered in the form");
        }
        Self { registry, fields }
    }

    /// Shorthand for [`new`](Self::new) with the built-in rule set.
    pub fn with_builtins(discovered: Vec<(S, String)>) -> Self {
        Self::new(RuleRegistry::with_builtins(), discovered)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable registry access, for registering custom rules before any
    /// validation runs.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Fields in discovery order.
    pub fn fields(&self) -> &[FieldValidator<S>] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldValidator<S>> {
        self.fields.get(index)
    }

    /// Validate every field in discovery order, refreshing all field states
    /// in one pass. No short-circuiting: later fields validate even when an
    /// earlier field is invalid.
    ///
    /// A field whose rules cannot be evaluated is left invalid with a
    /// diagnostic message and logged; the pass continues.
    pub fn validate_all(&mut self, presenter: &mut dyn Presenter<S>) {
        for field in &mut self.fields {
            if let Err(err) = field.validate(&self.registry, presenter) {
                tracing::warn!(error = %err, "field left invalid; continuing with remaining fields");
            }
        }
    }

    /// Whole-form validity, first-invalid-wins: on the first invalid field in
    /// discovery order a focus request is sent to the presenter and `false`
    /// is returned. `true` only when every field is valid.
    pub fn is_valid(&self, presenter: &mut dyn Presenter<S>) -> bool {
        for field in &self.fields {
            if !field.is_valid() {
                presenter.focus(field.source());
                return false;
            }
        }
        true
    }

    /// Entry point for the event collaborator's per-field change/keyup
    /// notifications. Re-validates the field only when its listen mode admits
    /// the trigger; returns `None` when the trigger was ignored or the index
    /// is out of range.
    pub fn handle_trigger(
        &mut self,
        index: usize,
        trigger: Trigger,
        presenter: &mut dyn Presenter<S>,
    ) -> Option<Result<ValidationResult, ValidationError>> {
        let field = self.fields.get_mut(index)?;
        if !field.reacts_to(trigger) {
            return None;
        }
        Some(field.validate(&self.registry, presenter))
    }

    /// Submission attempt: re-validate every field, then check whole-form
    /// validity. On failure the presenter is asked to suppress the default
    /// submission action and `false` is returned; the triggering submission
    /// should not proceed.
    pub fn submit(&mut self, presenter: &mut dyn Presenter<S>) -> bool {
        self.validate_all(presenter);
        if self.is_valid(presenter) {
            true
        } else {
            presenter.suppress_default_action();
            false
        }
    }
}
