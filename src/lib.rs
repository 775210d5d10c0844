//! tapcalc: a keypad-driven calculator engine.
//!
//! The engine tracks a single pending operand/operator pair and resolves it
//! on equals. Frontends feed it [`keypad::Key`] events and read back the
//! display text and keypad enablement; the bundled terminal frontend in
//! [`ui`] does exactly that.

pub mod config;
pub mod engine;
pub mod keypad;
pub mod person;
pub mod ui;

pub use config::Config;
pub use engine::{Engine, Operator};
pub use keypad::{Key, KeyGroup, Keypad};
