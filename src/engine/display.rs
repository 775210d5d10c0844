//! The single-line display the user edits and reads.
//!
//! Wraps the visible string and enforces its invariant: the text always
//! parses as a valid number, or equals `"0"`, or equals the error sentinel.
//! It is never empty.

/// The sentinel shown when a calculation cannot produce a number.
pub const ERROR_TEXT: &str = "Error";

/// The editable display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    text: String,
}

impl Display {
    /// A fresh display showing `"0"`.
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    /// The current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.text == ERROR_TEXT
    }

    /// Parse the current text as a number.
    ///
    /// Returns `None` when the text is not a valid number, which in
    /// practice means the error sentinel. Trailing decimal points are
    /// fine: `"0."` parses as `0.0`.
    pub fn value(&self) -> Option<f64> {
        self.text.parse().ok()
    }

    /// Reset the display to `"0"`.
    pub fn reset(&mut self) {
        self.text = "0".to_string();
    }

    /// Show the error sentinel.
    pub fn show_error(&mut self) {
        self.text = ERROR_TEXT.to_string();
    }

    /// Show a computed result.
    ///
    /// Integral finite values keep one decimal place (`15` renders as
    /// `"15.0"`). Non-finite values fall back to the error sentinel so the
    /// display invariant holds.
    pub fn show_result(&mut self, value: f64) {
        if !value.is_finite() {
            self.show_error();
        } else if value.fract() == 0.0 {
            self.text = format!("{value:.1}");
        } else {
            self.text = value.to_string();
        }
    }

    /// Enter a digit or the decimal point.
    ///
    /// A second decimal point is ignored. A leading `"0"` is replaced by a
    /// digit but kept in front of a decimal point. The error sentinel is
    /// treated like `"0"`: the press starts a fresh number.
    pub fn push_symbol(&mut self, symbol: char) {
        if self.is_error() {
            self.reset();
        }

        if symbol == '.' && self.text.contains('.') {
            return;
        }

        if self.text == "0" && symbol != '.' {
            self.text = symbol.to_string();
        } else {
            self.text.push(symbol);
        }
    }

    /// Remove the last character.
    ///
    /// An empty result or a lone `"-"` collapses back to `"0"`, as does
    /// deleting on the error sentinel.
    pub fn delete_last(&mut self) {
        if self.is_error() {
            self.reset();
            return;
        }

        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.reset();
        }
    }

    /// Toggle a leading minus sign. No-op on `"0"` or the error sentinel.
    pub fn toggle_sign(&mut self) {
        if self.text == "0" || self.is_error() {
            return;
        }

        if let Some(stripped) = self.text.strip_prefix('-') {
            self.text = stripped.to_string();
        } else {
            self.text = format!("-{}", self.text);
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
