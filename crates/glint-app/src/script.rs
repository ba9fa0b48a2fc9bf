//! Simulator script format.
//!
//! A script is a JSON array of single-key objects, replayed in order:
//!
//! ```json
//! [
//!   {"widget": {"name": "JumpGlyph", "kind": "ImageLike", "button": "A"}},
//!   {"register": {"name": "Settings", "priority": "DEFAULT"}},
//!   {"open": "Settings"},
//!   {"input": {"type": "LastInputTypeChanged", "data": "touch"}},
//!   {"close_all": null}
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use glint_common::{GlintError, InputCapabilities, InputEvent, Priority};
use glint_presentation::WidgetKind;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Input(InputEvent),
    Register { name: String, priority: PriorityRef },
    Open(String),
    Close(String),
    Toggle(String),
    CloseAll,
    /// Replace the host's capability snapshot without raising an event.
    SetCapabilities(InputCapabilities),
    Refresh,
    /// Add a widget to the host's tag store.
    Widget(WidgetSpec),
}

/// A literal priority or the name of a configured tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PriorityRef {
    Value(i64),
    Tier(String),
}

impl PriorityRef {
    pub fn resolve(&self, tiers: &BTreeMap<String, Priority>) -> Option<Priority> {
        match self {
            PriorityRef::Value(v) => Some(Priority(*v)),
            PriorityRef::Tier(name) => tiers.get(name).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetSpec {
    pub name: String,
    pub kind: WidgetKind,
    /// Controller button shown on controller devices.
    #[serde(default)]
    pub button: Option<String>,
    /// Gives the widget a scale transform with this initial scale.
    #[serde(default)]
    pub scale: Option<f64>,
    /// Tags to apply. Empty means the tag matching what the widget carries:
    /// the visibility tag for text and image widgets, the scale tag for
    /// widgets with a scale.
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn parse(text: &str) -> Result<Vec<Step>, GlintError> {
    serde_json::from_str(text).map_err(|e| GlintError::Other(format!("invalid script: {e}")))
}

pub fn load(path: &Path) -> Result<Vec<Step>, GlintError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}
