//! Scene camera for 3D plots.
//!
//! Provides the polar/cartesian camera model, its viewing octant, change
//! notification and a GPU-ready snapshot of its state.

/// Camera state, setters and cached trigonometry.
pub mod core;
/// Observer list with suspend/resume.
pub mod events;
/// Octant classification of the viewing sphere.
pub mod quadrant;
/// GPU uniform snapshot of the camera.
pub mod uniform;

pub use self::core::{Camera, DEFAULT_PHI_SHIFT_OFFSET};
pub use events::{ChangeNotifier, SubscriptionId};
pub use quadrant::CameraQuadrant;
pub use uniform::CameraUniform;
