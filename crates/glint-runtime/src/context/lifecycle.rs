//! Init and dispose.

use std::sync::{Arc, Mutex};

use glint_arbiter::UiArbiter;
use glint_common::{GlintError, Result};
use glint_config::validation::validate;
use glint_config::ConfigOverrides;
use glint_input::DeviceClassifier;
use glint_presentation::{PresentationHost, PresentationUpdater, ViewportChain, ViewportSource};
use tracing::{debug, info, warn};

use super::core::{lock, InitOptions, Session, UiContext};

// =============================================================================
// INIT
// =============================================================================

impl UiContext {
    /// Initialize with the default viewport chain.
    pub fn init(&self, overrides: ConfigOverrides) -> Result<()> {
        self.init_with(overrides, InitOptions::default())
    }

    /// Merge `overrides` onto the defaults, validate, classify the device
    /// from the host's current capabilities and apply the presentation.
    ///
    /// Invalid configuration is rejected before any state is created. A
    /// second call on a live context is rejected too.
    pub fn init_with(&self, overrides: ConfigOverrides, options: InitOptions) -> Result<()> {
        let mut slot = lock(&self.session);
        if slot.is_some() {
            warn!("init called on an initialized context");
            return Err(GlintError::AlreadyInitialized);
        }

        let config = overrides.into_config();
        validate(&config)?;

        let viewport: Arc<dyn ViewportSource> = match options.viewport_override {
            Some(source) => {
                debug!("using caller-supplied viewport source");
                source
            }
            None => Arc::new(ViewportChain::new(Arc::clone(&self.host.viewport))),
        };
        let presentation = PresentationUpdater::new(
            &config,
            PresentationHost {
                tags: Arc::clone(&self.host.tags),
                images: Arc::clone(&self.host.images),
                viewport,
            },
        );

        let mut classifier = DeviceClassifier::new();
        let initial = classifier.initialize(&self.host.input.capabilities());
        presentation.refresh(initial.new);

        let session = Session {
            config,
            classifier: Mutex::new(classifier),
            presentation,
            arbiter: UiArbiter::new(),
        };
        *slot = Some(Arc::new(session));
        drop(slot);
        let notified = self.signal.emit(initial, self.host.dispatcher.as_ref());

        info!(device = %initial.new, notified, "glint initialized");
        Ok(())
    }

    // =========================================================================
    // DISPOSE
    // =========================================================================

    /// Drop every subscriber, close every open UI, drop every registration
    /// and return to the uninitialized state. Controllers and connections
    /// handed out earlier become inert. The context may be initialized
    /// again afterwards.
    pub fn dispose(&self) {
        self.signal.clear();
        let Some(session) = lock(&self.session).take() else {
            debug!("dispose on an uninitialized context");
            return;
        };
        session.arbiter.clear();
        info!("glint disposed");
    }
}
