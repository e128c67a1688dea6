use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{ActionRamp, RampKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// View transition settings.
pub struct AnimationOptions {
    /// Easing curve used for camera transitions.
    #[schemars(title = "Ramp")]
    pub ramp: RampKind,
}

impl AnimationOptions {
    /// Shared table of the configured ramp.
    #[must_use]
    pub fn action_ramp(&self) -> &'static ActionRamp {
        ActionRamp::get(self.ramp)
    }
}
