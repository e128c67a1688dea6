use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlotViewError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement. Angles are given in degrees.
pub struct CameraOptions {
    /// Azimuth around the vertical axis, in degrees.
    #[schemars(title = "Rotation", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub phi: f32,
    /// Pitch from the vertical axis, in degrees.
    #[schemars(title = "Pitch", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub rho: f32,
    /// Distance from the look-at point.
    #[schemars(title = "Distance", range(min = 0.1, max = 1000.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Point the camera aims at.
    #[schemars(skip)]
    pub look_at: [f32; 3],
    /// Shift of the second cached phi sin/cos pair, in degrees.
    #[schemars(skip)]
    pub phi_shift_offset: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            phi: 0.0,
            rho: 0.0,
            distance: 10.0,
            look_at: [0.0; 3],
            phi_shift_offset: 45.0,
        }
    }
}

impl CameraOptions {
    /// Reject values a camera cannot be placed with. Angles outside their
    /// UI range are fine (the camera wraps or clamps them); non-finite
    /// numbers and negative distances are not.
    pub fn validate(&self) -> Result<(), PlotViewError> {
        let scalars = [
            ("phi", self.phi),
            ("rho", self.rho),
            ("distance", self.distance),
            ("phi_shift_offset", self.phi_shift_offset),
        ];
        if let Some((name, value)) =
            scalars.iter().find(|(_, value)| !value.is_finite())
        {
            return Err(PlotViewError::InvalidArgument(format!(
                "camera.{name} must be finite, got {value}"
            )));
        }
        if self.look_at.iter().any(|c| !c.is_finite()) {
            return Err(PlotViewError::InvalidArgument(
                "camera.look_at must be finite".to_owned(),
            ));
        }
        if self.distance < 0.0 {
            return Err(PlotViewError::InvalidArgument(format!(
                "camera.distance must not be negative, got {}",
                self.distance
            )));
        }
        Ok(())
    }
}
