//! Presentation refresh for a device category.

use std::collections::BTreeMap;
use std::sync::Arc;

use glint_common::DeviceCategory;
use glint_config::{GlintConfig, MobileScalingConfig};
use tracing::debug;

use crate::host::{ImageResolver, TagStore};
use crate::viewport::ViewportSource;
use crate::{scaling, visibility};

/// Host collaborators the updater reads and writes through.
#[derive(Clone)]
pub struct PresentationHost {
    pub tags: Arc<dyn TagStore>,
    pub images: Arc<dyn ImageResolver>,
    pub viewport: Arc<dyn ViewportSource>,
}

/// Applies the visibility and mobile scaling rules to tagged widgets.
pub struct PresentationUpdater {
    device_visibility_tag: String,
    mobile_scale_tag: String,
    scaling: MobileScalingConfig,
    button_mappings: BTreeMap<String, String>,
    host: PresentationHost,
}

impl PresentationUpdater {
    pub fn new(config: &GlintConfig, host: PresentationHost) -> Self {
        Self {
            device_visibility_tag: config.device_visibility_tag.clone(),
            mobile_scale_tag: config.mobile_scale_tag.clone(),
            scaling: config.mobile_scaling.clone(),
            button_mappings: config.controller_button_mappings.clone(),
            host,
        }
    }

    /// Bring every tagged widget in line with `category`.
    ///
    /// Idempotent: a second call with the same category and unchanged
    /// widgets writes the same values again and nothing else.
    pub fn refresh(&self, category: DeviceCategory) {
        let visibility_widgets = self.host.tags.list_tagged(&self.device_visibility_tag);
        for widget in &visibility_widgets {
            visibility::apply(
                widget.as_ref(),
                category,
                &self.button_mappings,
                self.host.images.as_ref(),
            );
        }

        let scale_widgets = self.host.tags.list_tagged(&self.mobile_scale_tag);
        let mut viewport_width = None;
        let mut skipped = 0;
        for widget in &scale_widgets {
            let width = || {
                *viewport_width
                    .get_or_insert_with(|| self.host.viewport.viewport_size().width)
            };
            if !scaling::apply(widget.as_ref(), category, width, &self.scaling) {
                skipped += 1;
            }
        }

        debug!(
            device = %category,
            visibility = visibility_widgets.len(),
            scaled = scale_widgets.len() - skipped,
            skipped,
            "presentation refreshed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryImages, MemoryTagStore, MemoryWidget};
    use glint_common::Size;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixture {
        store: Arc<MemoryTagStore>,
        hint: Arc<MemoryWidget>,
        prompt: Arc<MemoryWidget>,
        panel: Arc<MemoryWidget>,
        bare: Arc<MemoryWidget>,
        viewport_reads: Arc<AtomicUsize>,
        updater: PresentationUpdater,
    }

    fn fixture(width: f64) -> Fixture {
        let config = GlintConfig::default();
        let store = Arc::new(MemoryTagStore::new());
        let hint = MemoryWidget::text("Hint");
        let prompt = MemoryWidget::image("Prompt").with_controller_button("X");
        let panel = MemoryWidget::other("Panel").with_scale(1.0);
        let bare = MemoryWidget::other("Bare");

        store.tag(&config.device_visibility_tag, Arc::clone(&hint));
        store.tag(&config.device_visibility_tag, Arc::clone(&prompt));
        store.tag(&config.mobile_scale_tag, Arc::clone(&bare));
        store.tag(&config.mobile_scale_tag, Arc::clone(&panel));

        let viewport_reads = Arc::new(AtomicUsize::new(0));
        let reads = Arc::clone(&viewport_reads);
        let host = PresentationHost {
            tags: store.clone(),
            images: Arc::new(MemoryImages::from_pairs([("ButtonX", "x.png")])),
            viewport: Arc::new(move || {
                reads.fetch_add(1, Ordering::SeqCst);
                Size::new(width, 1080.0)
            }),
        };

        Fixture {
            updater: PresentationUpdater::new(&config, host),
            store,
            hint,
            prompt,
            panel,
            bare,
            viewport_reads,
        }
    }

    #[test]
    fn pc_shows_text_hides_prompts() {
        let f = fixture(1920.0);
        f.updater.refresh(DeviceCategory::Pc);
        assert!(f.hint.visible());
        assert!(!f.prompt.visible());
        assert_eq!(f.panel.scale(), Some(1.0));
    }

    #[test]
    fn controller_shows_prompts() {
        let f = fixture(1920.0);
        f.updater.refresh(DeviceCategory::Controller);
        assert!(!f.hint.visible());
        assert!(f.prompt.visible());
        assert_eq!(f.prompt.shown_image().as_deref(), Some("x.png"));
    }

    #[test]
    fn mobile_scales_and_skips_missing_child() {
        let f = fixture(960.0);
        f.updater.refresh(DeviceCategory::Mobile);
        assert!(!f.hint.visible());
        assert!(!f.prompt.visible());
        assert_eq!(f.panel.scale(), Some(0.5));
        assert_eq!(f.bare.scale(), None);
    }

    #[test]
    fn viewport_read_once_per_refresh_and_only_on_mobile() {
        let f = fixture(960.0);
        f.store.tag("MobileScale", MemoryWidget::other("Second").with_scale(2.0));
        f.updater.refresh(DeviceCategory::Pc);
        assert_eq!(f.viewport_reads.load(Ordering::SeqCst), 0);
        f.updater.refresh(DeviceCategory::Mobile);
        assert_eq!(f.viewport_reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn refresh_is_idempotent() {
        for category in [
            DeviceCategory::Pc,
            DeviceCategory::Mobile,
            DeviceCategory::Controller,
            DeviceCategory::Hybrid,
        ] {
            let f = fixture(1280.0);
            f.updater.refresh(category);
            let once = f.store.snapshots();
            f.updater.refresh(category);
            assert_eq!(f.store.snapshots(), once, "{category}");
        }
    }

    #[test]
    fn mobile_pc_mobile_round_trip() {
        let f = fixture(1280.0);
        f.updater.refresh(DeviceCategory::Mobile);
        let mobile = f.panel.scale().unwrap();
        f.updater.refresh(DeviceCategory::Pc);
        assert_eq!(f.panel.scale(), Some(1.0));
        f.updater.refresh(DeviceCategory::Mobile);
        assert_eq!(f.panel.scale().unwrap().to_bits(), mobile.to_bits());
    }
}
