//! Device visibility rule for tagged widgets.
//!
//! | device        | text | image + button     | image | other     |
//! |---------------|------|--------------------|-------|-----------|
//! | PC            | show | hide               | hide  | unchanged |
//! | Controller    | hide | show if resolvable | hide  | unchanged |
//! | Mobile/Hybrid | hide | hide               | hide  | unchanged |

use std::collections::BTreeMap;

use glint_common::DeviceCategory;
use tracing::debug;

use crate::host::{ImageResolver, Widget, WidgetKind, CONTROLLER_BUTTON_ATTR};

/// Resolve a widget's controller button to an image via the button mapping
/// and the host image lookup.
pub fn resolve_button_image(
    widget: &dyn Widget,
    mappings: &BTreeMap<String, String>,
    images: &dyn ImageResolver,
) -> Option<String> {
    let button = widget.attribute(CONTROLLER_BUTTON_ATTR)?;
    let button = button.as_str()?;
    let Some(code) = mappings.get(button) else {
        debug!(widget = %widget.name(), button, "no input code mapped for button");
        return None;
    };
    let image = images.image_for(code);
    if image.is_none() {
        debug!(widget = %widget.name(), code = %code, "no image for input code");
    }
    image
}

fn has_controller_button(widget: &dyn Widget) -> bool {
    widget
        .attribute(CONTROLLER_BUTTON_ATTR)
        .is_some_and(|v| v.as_str().is_some())
}

/// Apply the rule to one widget.
pub fn apply(
    widget: &dyn Widget,
    category: DeviceCategory,
    mappings: &BTreeMap<String, String>,
    images: &dyn ImageResolver,
) {
    match widget.kind() {
        WidgetKind::Other => {}
        WidgetKind::TextLike => widget.set_visible(category == DeviceCategory::Pc),
        WidgetKind::ImageLike => {
            if category != DeviceCategory::Controller || !has_controller_button(widget) {
                widget.set_visible(false);
                return;
            }
            match resolve_button_image(widget, mappings, images) {
                Some(image) => {
                    widget.set_image(&image);
                    widget.set_visible(true);
                }
                None => widget.set_visible(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryImages, MemoryWidget};
    use glint_config::schema::default_button_mappings;

    fn images() -> MemoryImages {
        MemoryImages::from_pairs([("ButtonA", "rbxasset://a.png")])
    }

    #[test]
    fn text_only_visible_on_pc() {
        let widget = MemoryWidget::text("Hint");
        let mappings = default_button_mappings();
        for (category, visible) in [
            (DeviceCategory::Pc, true),
            (DeviceCategory::Controller, false),
            (DeviceCategory::Mobile, false),
            (DeviceCategory::Hybrid, false),
        ] {
            apply(widget.as_ref(), category, &mappings, &images());
            assert_eq!(widget.visible(), visible, "{category}");
        }
    }

    #[test]
    fn button_image_shown_on_controller() {
        let widget = MemoryWidget::image("Prompt").with_controller_button("A");
        apply(
            widget.as_ref(),
            DeviceCategory::Controller,
            &default_button_mappings(),
            &images(),
        );
        assert!(widget.visible());
        assert_eq!(widget.shown_image().as_deref(), Some("rbxasset://a.png"));
    }

    #[test]
    fn button_image_hidden_elsewhere() {
        let widget = MemoryWidget::image("Prompt").with_controller_button("A");
        widget.set_visible(true);
        for category in [DeviceCategory::Pc, DeviceCategory::Mobile, DeviceCategory::Hybrid] {
            apply(widget.as_ref(), category, &default_button_mappings(), &images());
            assert!(!widget.visible(), "{category}");
        }
    }

    #[test]
    fn unmapped_button_hidden() {
        let widget = MemoryWidget::image("Prompt").with_controller_button("Paddle");
        widget.set_visible(true);
        apply(
            widget.as_ref(),
            DeviceCategory::Controller,
            &default_button_mappings(),
            &images(),
        );
        assert!(!widget.visible());
    }

    #[test]
    fn missing_image_hidden() {
        let widget = MemoryWidget::image("Prompt").with_controller_button("B");
        apply(
            widget.as_ref(),
            DeviceCategory::Controller,
            &default_button_mappings(),
            &images(),
        );
        assert!(!widget.visible());
        assert_eq!(widget.shown_image(), None);
    }

    #[test]
    fn plain_image_always_hidden() {
        let widget = MemoryWidget::image("Logo");
        widget.set_visible(true);
        apply(
            widget.as_ref(),
            DeviceCategory::Controller,
            &default_button_mappings(),
            &images(),
        );
        assert!(!widget.visible());
    }

    #[test]
    fn other_kind_untouched() {
        let widget = MemoryWidget::other("Frame");
        widget.set_visible(true);
        for category in [DeviceCategory::Pc, DeviceCategory::Controller, DeviceCategory::Mobile] {
            apply(widget.as_ref(), category, &default_button_mappings(), &images());
            assert!(widget.visible());
        }
    }
}
