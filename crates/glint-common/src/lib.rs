pub mod dispatch;
pub mod errors;
pub mod events;
pub mod guard;
pub mod types;

pub use dispatch::{Dispatcher, QueueDispatcher, Task, TokioDispatcher};
pub use errors::{ArbiterError, ConfigError, GlintError};
pub use events::{DeviceChange, InputEvent};
pub use guard::{BoxError, CallbackFailure, CallbackResult};
pub use types::{DeviceCategory, GamepadId, InputCapabilities, InputKind, Priority, Size};

pub type Result<T> = std::result::Result<T, GlintError>;
