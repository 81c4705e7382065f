//! Handling Stack Definitions
//!
//! The three stacks the robotic arm can route a package to. This is a
//! closed set; the serialized form of each variant is its fixed text
//! constant (`"STANDARD"`, `"SPECIAL"`, `"REJECTED"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling stack for a classified package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stack {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Stack {
    /// The stack label as its text constant
    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Standard => "STANDARD",
            Stack::Special => "SPECIAL",
            Stack::Rejected => "REJECTED",
        }
    }

    /// All stacks, in escalating handling order
    pub fn all() -> &'static [Stack] {
        &[Stack::Standard, Stack::Special, Stack::Rejected]
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
