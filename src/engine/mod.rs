//! The calculator state machine.
//!
//! This module provides:
//! - The editable display text and its invariants
//! - The four keypad operators
//! - `Engine`, which turns button-press events into state transitions
//!
//! The engine is strictly single-operation: one operand/operator pair may be
//! pending at a time, and equals resolves it. Handlers never return errors;
//! input that cannot advance the state is dropped.

mod display;
mod operator;

pub use display::{Display, ERROR_TEXT};
pub use operator::Operator;

use crate::config::Config;
use crate::keypad::{Key, Keypad};

/// The operand/operator pair held until equals completes the calculation.
///
/// The two values are set and cleared in lockstep, so they live in one
/// optional struct rather than two fields.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    operand: f64,
    operator: Operator,
}

/// The calculator engine: transient calculation state plus the handlers a
/// frontend invokes on button presses.
#[derive(Clone, Debug)]
pub struct Engine {
    display: Display,
    pending: Option<Pending>,
    operator_locked: bool,
    keypad: Keypad,
    lock_after_equals: bool,
}

impl Engine {
    pub fn new(config: &Config) -> Self {
        Self {
            display: Display::new(),
            pending: None,
            operator_locked: false,
            keypad: Keypad::new(),
            lock_after_equals: config.lock_after_equals,
        }
    }

    /// The current display text.
    pub fn display(&self) -> &str {
        self.display.as_str()
    }

    /// The keypad enablement state, for frontends that gray out keys.
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether an operator is queued and waiting for its second operand.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Dispatch a button press.
    ///
    /// Presses on disabled keys are dropped here, before any handler runs.
    pub fn press(&mut self, key: Key) {
        if !self.keypad.is_enabled(key) {
            tracing::debug!(?key, "press dropped, keypad locked");
            return;
        }

        match key {
            Key::Digit(_) | Key::Decimal => {
                // from_char only builds digits 0-9, so symbol() is total here
                if let Some(symbol) = key.symbol() {
                    self.enter_symbol(symbol);
                }
            }
            Key::Operator(op) => self.select_operator(op),
            Key::Equals => self.apply_equals(),
            Key::Clear => self.clear(),
            Key::Delete => self.display.delete_last(),
            Key::ToggleSign => self.display.toggle_sign(),
        }
    }

    /// Enter a digit or the decimal point into the display.
    fn enter_symbol(&mut self, symbol: char) {
        self.display.push_symbol(symbol);
    }

    /// Queue an operator, taking the display as the first operand.
    ///
    /// A no-op while another operator is already queued, or when the display
    /// does not parse as a number.
    fn select_operator(&mut self, operator: Operator) {
        if self.operator_locked {
            tracing::debug!(%operator, "operator ignored, one already queued");
            return;
        }

        let Some(operand) = self.display.value() else {
            tracing::debug!(text = self.display(), "operator ignored, display not numeric");
            return;
        };

        self.pending = Some(Pending { operand, operator });
        self.operator_locked = true;
        self.display.reset();
    }

    /// Resolve the pending calculation.
    ///
    /// Does nothing without a queued operator, and nothing when the second
    /// operand does not parse (the pending pair survives for another try).
    /// Once both operands are in hand the pending state is cleared no matter
    /// how the computation turns out; division by zero and other non-finite
    /// results show the error sentinel instead of a number.
    fn apply_equals(&mut self) {
        let Some(pending) = self.pending else {
            return;
        };

        let Some(second) = self.display.value() else {
            tracing::debug!(text = self.display(), "equals ignored, display not numeric");
            return;
        };

        if pending.operator == Operator::Divide && second == 0.0 {
            self.display.show_error();
        } else {
            self.display.show_result(pending.operator.apply(pending.operand, second));
        }

        self.pending = None;
        self.operator_locked = false;
        if self.lock_after_equals {
            self.keypad.lock();
        }
    }

    /// Reset everything: display, pending pair, operator lock, keypad.
    fn clear(&mut self) {
        self.display.reset();
        self.pending = None;
        self.operator_locked = false;
        self.keypad.unlock();
    }
}
