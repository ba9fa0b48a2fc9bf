//! Viewport size resolution.

use std::sync::Arc;

use glint_common::Size;
use tracing::debug;

/// Used when neither the camera nor the root container report a size.
pub const DEFAULT_VIEWPORT: Size = Size::new(1920.0, 1080.0);

/// Anything that can report the current viewport size.
///
/// Closures implement this directly, which is how a caller overrides the
/// default resolution chain.
pub trait ViewportSource: Send + Sync {
    fn viewport_size(&self) -> Size;
}

impl<F> ViewportSource for F
where
    F: Fn() -> Size + Send + Sync,
{
    fn viewport_size(&self) -> Size {
        self()
    }
}

/// Host primitives the default chain reads from.
pub trait ViewportHost: Send + Sync {
    fn camera_viewport(&self) -> Option<Size>;
    fn root_container_size(&self) -> Option<Size>;
}

/// Camera viewport, then root container size, then [`DEFAULT_VIEWPORT`].
/// Sizes with a non-positive dimension count as absent.
pub struct ViewportChain {
    host: Arc<dyn ViewportHost>,
}

impl ViewportChain {
    pub fn new(host: Arc<dyn ViewportHost>) -> Self {
        Self { host }
    }
}

fn usable(size: Option<Size>) -> Option<Size> {
    size.filter(|s| s.width > 0.0 && s.height > 0.0)
}

impl ViewportSource for ViewportChain {
    fn viewport_size(&self) -> Size {
        if let Some(size) = usable(self.host.camera_viewport()) {
            return size;
        }
        if let Some(size) = usable(self.host.root_container_size()) {
            debug!("no camera viewport, using root container size");
            return size;
        }
        debug!("no viewport source available, using default");
        DEFAULT_VIEWPORT
    }
}
