//! Animation support for smooth view transitions.

pub mod ramp;
pub mod transition;

pub use ramp::{ActionRamp, ActionRampElement, RampKind};
pub use transition::{CameraPose, CameraTransition};
