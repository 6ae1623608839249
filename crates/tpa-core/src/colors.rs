//! ANSI styling for rendered trees and token listings.
//!
//! Roles, not hues: `kind` for node and token kinds, `value` for literals,
//! `punct` for parentheses and indices.

/// ANSI palette keyed by role. Standard 16-color codes only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub kind: &'static str,
    pub value: &'static str,
    pub punct: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        kind: "\x1b[34m",
        value: "\x1b[32m",
        punct: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        kind: "",
        value: "",
        punct: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
