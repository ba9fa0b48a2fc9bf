mod device;
mod priority;

pub use device::*;
pub use priority::*;

use serde::{Deserialize, Serialize};

/// Width and height of a viewport or container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
