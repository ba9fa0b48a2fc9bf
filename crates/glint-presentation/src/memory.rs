//! In-memory host for tests and the simulator.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use glint_common::Size;
use serde::Serialize;

use crate::host::{
    AttributeValue, ImageResolver, ScaleTransform, TagStore, Widget, WidgetKind, WidgetRef,
    CONTROLLER_BUTTON_ATTR,
};
use crate::viewport::ViewportHost;

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
pub struct MemoryScale {
    scale: Mutex<f64>,
    writes: AtomicUsize,
}

impl MemoryScale {
    pub fn new(scale: f64) -> Self {
        Self {
            scale: Mutex::new(scale),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `set_scale` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ScaleTransform for MemoryScale {
    fn scale(&self) -> f64 {
        *lock(&self.scale)
    }

    fn set_scale(&self, scale: f64) {
        *lock(&self.scale) = scale;
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Observable widget state, as printed by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    pub name: String,
    pub kind: WidgetKind,
    pub visible: bool,
    pub image: Option<String>,
    pub scale: Option<f64>,
}

#[derive(Debug)]
pub struct MemoryWidget {
    name: String,
    kind: WidgetKind,
    visible: Mutex<bool>,
    image: Mutex<Option<String>>,
    attributes: Mutex<BTreeMap<String, AttributeValue>>,
    scale: Mutex<Option<Arc<MemoryScale>>>,
}

impl MemoryWidget {
    pub fn new(name: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visible: Mutex::new(false),
            image: Mutex::new(None),
            attributes: Mutex::new(BTreeMap::new()),
            scale: Mutex::new(None),
        }
    }

    pub fn text(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name, WidgetKind::TextLike))
    }

    pub fn image(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name, WidgetKind::ImageLike))
    }

    pub fn other(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name, WidgetKind::Other))
    }

    pub fn with_controller_button(self: Arc<Self>, button: impl Into<String>) -> Arc<Self> {
        self.set_attribute(CONTROLLER_BUTTON_ATTR, AttributeValue::Text(button.into()));
        self
    }

    /// Give the widget a scale-transform child.
    pub fn with_scale(self: Arc<Self>, scale: f64) -> Arc<Self> {
        *lock(&self.scale) = Some(Arc::new(MemoryScale::new(scale)));
        self
    }

    fn scale_transform(&self) -> Option<Arc<MemoryScale>> {
        lock(&self.scale).clone()
    }

    pub fn visible(&self) -> bool {
        *lock(&self.visible)
    }

    pub fn shown_image(&self) -> Option<String> {
        lock(&self.image).clone()
    }

    pub fn scale(&self) -> Option<f64> {
        self.scale_transform().map(|s| s.scale())
    }

    pub fn scale_writes(&self) -> usize {
        self.scale_transform().map_or(0, |s| s.writes())
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            name: self.name.clone(),
            kind: self.kind,
            visible: self.visible(),
            image: self.shown_image(),
            scale: self.scale(),
        }
    }
}

impl Widget for MemoryWidget {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn set_visible(&self, visible: bool) {
        *lock(&self.visible) = visible;
    }

    fn set_image(&self, image: &str) {
        *lock(&self.image) = Some(image.to_string());
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        lock(&self.attributes).get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: AttributeValue) {
        lock(&self.attributes).insert(name.to_string(), value);
    }

    fn scale_child(&self) -> Option<Arc<dyn ScaleTransform>> {
        self.scale_transform()
            .map(|s| s as Arc<dyn ScaleTransform>)
    }
}

#[derive(Default)]
pub struct MemoryTagStore {
    tagged: Mutex<HashMap<String, Vec<Arc<MemoryWidget>>>>,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self, tag: impl Into<String>, widget: Arc<MemoryWidget>) {
        lock(&self.tagged).entry(tag.into()).or_default().push(widget);
    }

    /// Every tagged widget, deduplicated by name, in name order.
    pub fn snapshots(&self) -> Vec<WidgetSnapshot> {
        let tagged = lock(&self.tagged);
        let mut by_name: BTreeMap<String, WidgetSnapshot> = BTreeMap::new();
        for widget in tagged.values().flatten() {
            by_name.insert(widget.name.clone(), widget.snapshot());
        }
        by_name.into_values().collect()
    }
}

impl TagStore for MemoryTagStore {
    fn list_tagged(&self, tag: &str) -> Vec<WidgetRef> {
        lock(&self.tagged)
            .get(tag)
            .map(|widgets| {
                widgets
                    .iter()
                    .map(|w| Arc::clone(w) as WidgetRef)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct MemoryImages {
    images: Mutex<HashMap<String, String>>,
}

impl MemoryImages {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            images: Mutex::new(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn insert(&self, code: impl Into<String>, image: impl Into<String>) {
        lock(&self.images).insert(code.into(), image.into());
    }
}

impl ImageResolver for MemoryImages {
    fn image_for(&self, input_code: &str) -> Option<String> {
        lock(&self.images).get(input_code).cloned()
    }
}

#[derive(Debug, Default)]
pub struct MemoryViewport {
    camera: Mutex<Option<Size>>,
    root: Mutex<Option<Size>>,
}

impl MemoryViewport {
    pub fn new(camera: Option<Size>, root: Option<Size>) -> Self {
        Self {
            camera: Mutex::new(camera),
            root: Mutex::new(root),
        }
    }

    pub fn set_camera(&self, size: Option<Size>) {
        *lock(&self.camera) = size;
    }
}

impl ViewportHost for MemoryViewport {
    fn camera_viewport(&self) -> Option<Size> {
        *lock(&self.camera)
    }

    fn root_container_size(&self) -> Option<Size> {
        *lock(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_store_lists_by_tag() {
        let store = MemoryTagStore::new();
        store.tag("A", MemoryWidget::text("one"));
        store.tag("A", MemoryWidget::image("two"));
        store.tag("B", MemoryWidget::other("three"));

        assert_eq!(store.list_tagged("A").len(), 2);
        assert_eq!(store.list_tagged("B").len(), 1);
        assert!(store.list_tagged("C").is_empty());
    }

    #[test]
    fn snapshots_deduplicate_widgets_tagged_twice() {
        let store = MemoryTagStore::new();
        let widget = MemoryWidget::text("shared");
        store.tag("A", Arc::clone(&widget));
        store.tag("B", widget);
        assert_eq!(store.snapshots().len(), 1);
    }

    #[test]
    fn with_scale_keeps_attributes() {
        let widget = MemoryWidget::image("Prompt")
            .with_controller_button("Y")
            .with_scale(2.0);
        assert_eq!(widget.scale(), Some(2.0));
        assert_eq!(
            widget.attribute(CONTROLLER_BUTTON_ATTR),
            Some(AttributeValue::Text("Y".into()))
        );
    }

    #[test]
    fn scale_writes_are_counted() {
        let widget = MemoryWidget::other("Panel").with_scale(1.0);
        let child = widget.scale_child().unwrap();
        child.set_scale(0.5);
        assert_eq!(widget.scale_writes(), 1);
        assert_eq!(widget.scale(), Some(0.5));
    }
}
