// File: src/field.rs
// Purpose: Per-field validation state machine

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::presenter::Presenter;
use crate::registry::RuleRegistry;

/// A field's observable validity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    Valid,
    Invalid,
}

/// Which events re-validate a field.
///
/// Every field starts on `OnChange`. The first failing validation escalates
/// it to `OnChangeAndKeyup` so the user gets live feedback while correcting
/// the field, and it never reverts for the field's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenMode {
    OnChange,
    OnChangeAndKeyup,
}

/// A user-interaction event that may re-validate a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The committed-change event (blur / change).
    Change,
    /// The live-edit event (keyup). Only handled after escalation.
    Keyup,
}

/// Value collaborator: reads a field's current value on demand.
///
/// The engine never caches the value; it is read fresh at the start of every
/// validation pass.
pub trait ValueSource {
    fn current_value(&self) -> String;
}

/// Snapshot of a field's state after one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Failure messages in configured-rule order; empty when valid.
    pub messages: Vec<String>,
}

/// Validates one field against its configured rules and tracks its validity
/// state and listen mode.
#[derive(Debug)]
pub struct FieldValidator<S: ValueSource> {
    source: S,
    rule_names: Vec<String>,
    validity: Validity,
    messages: Vec<String>,
    listen_mode: ListenMode,
}

impl<S: ValueSource> FieldValidator<S> {
    /// Build a field validator from a value source and the raw rule-name
    /// configuration string (whitespace-delimited rule names).
    ///
    /// An empty or all-whitespace configuration means "no rules": the field
    /// validates clean on every pass.
    pub fn new(source: S, raw_config: &str) -> Self {
        let rule_names: Vec<String> = raw_config.split_whitespace().map(str::to_string).collect();
        if rule_names.is_empty() {
            tracing::debug!("field configured without rules; it always validates clean");
        }
        Self {
            source,
            rule_names,
            // Pessimistically invalid until the first pass proves otherwise.
            validity: Validity::Invalid,
            messages: Vec::new(),
            listen_mode: ListenMode::OnChange,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Failure messages from the most recent pass, in configured-rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn listen_mode(&self) -> ListenMode {
        self.listen_mode
    }

    /// Whether an incoming trigger should re-validate this field. `Change`
    /// always does; `Keyup` only once the field has escalated.
    pub fn reacts_to(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Change => true,
            Trigger::Keyup => self.listen_mode == ListenMode::OnChangeAndKeyup,
        }
    }

    /// Run one validation pass: read the current value, evaluate every
    /// configured rule in order (no short-circuit), update validity state and
    /// messages, and notify the presenter.
    ///
    /// A rule that cannot be evaluated (unknown name, panicking predicate)
    /// marks the field invalid with a diagnostic message in place of that
    /// rule's message; the remaining rules still run, the presenter is still
    /// notified, and the first such error is returned.
    pub fn validate(
        &mut self,
        registry: &RuleRegistry,
        presenter: &mut dyn Presenter<S>,
    ) -> Result<ValidationResult, ValidationError> {
        let value = self.source.current_value();

        let mut messages = Vec::new();
        let mut first_error = None;
        for name in &self.rule_names {
            match registry.evaluate(name, &value) {
                Ok(None) => {}
                Ok(Some(message)) => messages.push(message.to_string()),
                Err(err) => {
                    tracing::warn!(rule = %name, error = %err, "rule could not be evaluated");
                    messages.push(err.to_string());
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        let errors_changed = messages != self.messages;
        if messages.is_empty() {
            self.validity = Validity::Valid;
        } else {
            self.validity = Validity::Invalid;
            // Sticky escalation: live feedback from here on.
            self.listen_mode = ListenMode::OnChangeAndKeyup;
        }
        self.messages = messages;

        presenter.render(&self.source, self.is_valid(), &self.messages, errors_changed);

        match first_error {
            None => Ok(ValidationResult {
                is_valid: self.is_valid(),
                messages: self.messages.clone(),
            }),
            Some(err) => Err(err),
        }
    }
}
