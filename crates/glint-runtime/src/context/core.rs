//! UiContext struct definition and constructor.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glint_arbiter::UiArbiter;
use glint_common::{DeviceCategory, Dispatcher, Priority};
use glint_config::GlintConfig;
use glint_input::{DeviceClassifier, DeviceSignal, InputHost};
use glint_presentation::{ImageResolver, PresentationUpdater, TagStore, ViewportHost, ViewportSource};
use tracing::warn;

/// Host collaborators a context is bound to for its whole life.
#[derive(Clone)]
pub struct HostBindings {
    pub input: Arc<dyn InputHost>,
    pub tags: Arc<dyn TagStore>,
    pub images: Arc<dyn ImageResolver>,
    pub viewport: Arc<dyn ViewportHost>,
    /// Runs device-changed notifications.
    pub dispatcher: Arc<dyn Dispatcher>,
}

/// Options that cannot be expressed in a config file.
#[derive(Clone, Default)]
pub struct InitOptions {
    /// Replaces the camera, root container and default viewport chain.
    pub viewport_override: Option<Arc<dyn ViewportSource>>,
}

impl InitOptions {
    pub fn with_viewport<S>(mut self, source: S) -> Self
    where
        S: ViewportSource + 'static,
    {
        self.viewport_override = Some(Arc::new(source));
        self
    }
}

/// Everything that exists only between `init` and `dispose`.
pub(super) struct Session {
    pub(super) config: GlintConfig,
    pub(super) classifier: Mutex<DeviceClassifier>,
    pub(super) presentation: PresentationUpdater,
    pub(super) arbiter: UiArbiter,
}

/// Device-aware UI coordination for one host.
pub struct UiContext {
    pub(super) host: HostBindings,
    /// Outlives sessions so subscribers connected before `init` see the
    /// initial classification.
    pub(super) signal: DeviceSignal,
    pub(super) session: Mutex<Option<Arc<Session>>>,
}

pub(super) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl UiContext {
    /// Create an uninitialized context.
    pub fn new(host: HostBindings) -> Self {
        Self {
            host,
            signal: DeviceSignal::new(),
            session: Mutex::new(None),
        }
    }

    pub fn is_initialized(&self) -> bool {
        lock(&self.session).is_some()
    }

    /// The live session, or a warning naming the call that came too early.
    pub(super) fn session(&self, call: &str) -> Option<Arc<Session>> {
        let session = lock(&self.session).clone();
        if session.is_none() {
            warn!(call, "glint used before init");
        }
        session
    }

    pub fn current_device_type(&self) -> Option<DeviceCategory> {
        let session = self.session("current_device_type")?;
        let current = lock(&session.classifier).current();
        current
    }

    /// Effective priority tiers after merging overrides.
    pub fn priorities(&self) -> BTreeMap<String, Priority> {
        self.session("priorities")
            .map(|s| s.config.ui_priorities.clone())
            .unwrap_or_default()
    }

    /// Effective configuration, once initialized.
    pub fn config(&self) -> Option<GlintConfig> {
        self.session("config").map(|s| s.config.clone())
    }
}

impl fmt::Debug for UiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = lock(&self.session).clone();
        f.debug_struct("UiContext")
            .field("initialized", &session.is_some())
            .field("subscribers", &self.signal.len())
            .field(
                "device",
                &session.as_ref().and_then(|s| lock(&s.classifier).current()),
            )
            .finish()
    }
}
