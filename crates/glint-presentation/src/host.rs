//! Host collaborator traits.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Attribute naming the controller button a widget shows.
pub const CONTROLLER_BUTTON_ATTR: &str = "ControllerButton";
/// Write-once attribute caching a widget's scale before mobile scaling.
pub const ORIGINAL_SCALE_ATTR: &str = "OriginalScale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
    TextLike,
    ImageLike,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Uniform size multiplier owned by a widget.
pub trait ScaleTransform: Send + Sync {
    fn scale(&self) -> f64;
    fn set_scale(&self, scale: f64);
}

/// A host-owned widget. Handles are shared and mutate through `&self`.
pub trait Widget: Send + Sync {
    /// Used in diagnostics only.
    fn name(&self) -> String;
    fn kind(&self) -> WidgetKind;
    fn set_visible(&self, visible: bool);
    fn set_image(&self, image: &str);
    fn attribute(&self, name: &str) -> Option<AttributeValue>;
    fn set_attribute(&self, name: &str, value: AttributeValue);
    /// The widget's scale-transform child, if it has one.
    fn scale_child(&self) -> Option<Arc<dyn ScaleTransform>>;
}

pub type WidgetRef = Arc<dyn Widget>;

/// Query-by-tag over the host's widget tree.
pub trait TagStore: Send + Sync {
    fn list_tagged(&self, tag: &str) -> Vec<WidgetRef>;
}

/// Input code to image asset lookup for controller button prompts.
pub trait ImageResolver: Send + Sync {
    fn image_for(&self, input_code: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_accessors() {
        assert_eq!(AttributeValue::Text("A".into()).as_str(), Some("A"));
        assert_eq!(AttributeValue::Number(2.0).as_str(), None);
        assert_eq!(AttributeValue::Number(2.0).as_f64(), Some(2.0));
        assert_eq!(AttributeValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn attribute_untagged_json() {
        let v: AttributeValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(v, AttributeValue::Number(1.5));
        let v: AttributeValue = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(v, AttributeValue::Text("X".into()));
    }
}
