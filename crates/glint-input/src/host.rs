use glint_common::InputCapabilities;

/// Host-side capability queries.
///
/// Implementations must answer synchronously and cheaply; the classifier
/// re-queries on every gamepad connectivity change.
pub trait InputHost: Send + Sync {
    fn capabilities(&self) -> InputCapabilities;
}
