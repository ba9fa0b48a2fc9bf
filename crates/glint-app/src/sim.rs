//! In-memory host wired to a `UiContext`, driven one script step at a time.

use std::sync::{Arc, Mutex, PoisonError};

use glint_common::{
    DeviceCategory, DeviceChange, GlintError, InputCapabilities, InputEvent, QueueDispatcher,
    Result,
};
use glint_config::ConfigOverrides;
use glint_input::MemoryInput;
use glint_presentation::memory::{
    MemoryImages, MemoryTagStore, MemoryViewport, MemoryWidget, WidgetSnapshot,
};
use glint_presentation::{WidgetKind, DEFAULT_VIEWPORT};
use glint_runtime::{ActiveUi, HostBindings, UiContext};
use serde::Serialize;
use tracing::info;

use crate::script::{Step, WidgetSpec};

/// Final state printed after a run.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub device: Option<DeviceCategory>,
    pub active_uis: Vec<ActiveUi>,
    pub widgets: Vec<WidgetSnapshot>,
}

pub struct Simulator {
    input: Arc<MemoryInput>,
    tags: Arc<MemoryTagStore>,
    dispatcher: Arc<QueueDispatcher>,
    ctx: UiContext,
    changes: Arc<Mutex<Vec<DeviceChange>>>,
    visibility_tag: String,
    scale_tag: String,
}

impl Simulator {
    /// Build the host, subscribe to device changes and initialize the
    /// context. The initial classification is recorded as the first change.
    pub fn new(caps: InputCapabilities, overrides: ConfigOverrides) -> Result<Self> {
        let config = overrides.clone().into_config();

        // Every mapped input code gets a glyph so controller prompts resolve.
        let images = MemoryImages::from_pairs(
            config
                .controller_button_mappings
                .values()
                .map(|code| (code.clone(), format!("glyphs/{code}.png"))),
        );

        let input = Arc::new(MemoryInput::new(caps));
        let tags = Arc::new(MemoryTagStore::new());
        let dispatcher = Arc::new(QueueDispatcher::new());
        let ctx = UiContext::new(HostBindings {
            input: input.clone(),
            tags: tags.clone(),
            images: Arc::new(images),
            viewport: Arc::new(MemoryViewport::new(Some(DEFAULT_VIEWPORT), None)),
            dispatcher: dispatcher.clone(),
        });

        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        ctx.on_device_changed(move |new, old| {
            lock(&sink).push(DeviceChange { new, old });
            Ok(())
        });
        ctx.init(overrides)?;
        dispatcher.run_pending();

        Ok(Self {
            input,
            tags,
            dispatcher,
            ctx,
            changes,
            visibility_tag: config.device_visibility_tag,
            scale_tag: config.mobile_scale_tag,
        })
    }

    /// Apply one step and deliver any notifications it raised.
    pub fn apply(&self, step: Step) -> Result<()> {
        match step {
            Step::Input(event) => {
                match &event {
                    InputEvent::GamepadConnected(id) => self.input.connect_gamepad(*id),
                    InputEvent::GamepadDisconnected(id) => self.input.disconnect_gamepad(*id),
                    InputEvent::LastInputTypeChanged(_) => {}
                }
                self.ctx.handle_input_event(event);
            }
            Step::Register { name, priority } => {
                let resolved = priority.resolve(&self.ctx.priorities()).ok_or_else(|| {
                    GlintError::Other(format!("unknown priority tier {priority:?} for {name}"))
                })?;
                let (open_name, close_name) = (name.clone(), name.clone());
                self.ctx.register_ui(
                    name,
                    resolved,
                    move || {
                        info!(ui = %open_name, "open action");
                        Ok(())
                    },
                    move || {
                        info!(ui = %close_name, "close action");
                        Ok(())
                    },
                )?;
            }
            Step::Open(name) => self.ctx.open_ui(&name),
            Step::Close(name) => self.ctx.close_ui(&name),
            Step::Toggle(name) => self.ctx.toggle_ui(&name),
            Step::CloseAll => self.ctx.close_all_uis(),
            Step::SetCapabilities(caps) => self.input.set(caps),
            Step::Refresh => self.ctx.refresh_ui_state(),
            Step::Widget(spec) => self.add_widget(spec),
        }
        self.dispatcher.run_pending();
        Ok(())
    }

    fn add_widget(&self, spec: WidgetSpec) {
        let widget = match spec.kind {
            WidgetKind::TextLike => MemoryWidget::text(&spec.name),
            WidgetKind::ImageLike => MemoryWidget::image(&spec.name),
            WidgetKind::Other => MemoryWidget::other(&spec.name),
        };
        let widget = match spec.button {
            Some(button) => widget.with_controller_button(button),
            None => widget,
        };
        let widget = match spec.scale {
            Some(scale) => widget.with_scale(scale),
            None => widget,
        };

        let mut tags = spec.tags;
        if tags.is_empty() {
            if spec.kind != WidgetKind::Other {
                tags.push(self.visibility_tag.clone());
            }
            if spec.scale.is_some() {
                tags.push(self.scale_tag.clone());
            }
        }
        for tag in tags {
            self.tags.tag(tag, Arc::clone(&widget));
        }
    }

    /// Device changes delivered since the last call.
    pub fn take_changes(&self) -> Vec<DeviceChange> {
        std::mem::take(&mut *lock(&self.changes))
    }

    pub fn summary(&self) -> Summary {
        Summary {
            device: self.ctx.current_device_type(),
            active_uis: self.ctx.active_uis(),
            widgets: self.tags.snapshots(),
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
