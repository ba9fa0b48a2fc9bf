pub mod classifier;
pub mod host;
pub mod memory;
pub mod signal;

pub use classifier::{classify, target_for_input, DeviceClassifier};
pub use host::InputHost;
pub use memory::MemoryInput;
pub use signal::{Connection, DeviceCallback, DeviceSignal};
