use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a UI window. Opening a UI evicts every open UI of strictly
/// lower priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub i64);

impl Priority {
    pub const LOW: Priority = Priority(0);
    pub const DEFAULT: Priority = Priority(100);
    pub const IMPORTANT: Priority = Priority(200);
    pub const OVERLAY: Priority = Priority(300);
    pub const CRITICAL: Priority = Priority(400);

    /// The built-in tiers, lowest first.
    pub fn tiers() -> [(&'static str, Priority); 5] {
        [
            ("LOW", Self::LOW),
            ("DEFAULT", Self::DEFAULT),
            ("IMPORTANT", Self::IMPORTANT),
            ("OVERLAY", Self::OVERLAY),
            ("CRITICAL", Self::CRITICAL),
        ]
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
