//! Ramp-driven camera transitions.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

use super::ramp::{hold_time, ActionRamp, RampKind};
use crate::camera::Camera;

/// Polar camera pose relative to the look-at point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Azimuth in radians.
    pub phi: f32,
    /// Pitch in radians.
    pub rho: f32,
    /// Distance from the look-at point.
    pub distance: f32,
}

impl CameraPose {
    /// Create a pose.
    #[must_use]
    pub fn new(phi: f32, rho: f32, distance: f32) -> Self {
        Self { phi, rho, distance }
    }

    /// Current pose of `camera`.
    #[must_use]
    pub fn of(camera: &Camera) -> Self {
        Self::new(camera.phi(), camera.rho(), camera.distance())
    }
}

/// Moves a camera from its current pose to a target pose along an
/// [`ActionRamp`].
///
/// Each [`step`](Self::step) applies one ramp element with camera
/// notifications suspended, then resumes them, so observers see exactly one
/// change per step. The azimuth takes the shorter way around the circle.
/// Ramp values are rescaled by the ramp's final value, so every transition
/// ends on the target even for ramps that do not end at 1.
#[derive(Debug, Clone)]
pub struct CameraTransition {
    start: CameraPose,
    target: CameraPose,
    phi_delta: f32,
    ramp: &'static ActionRamp,
    next_step: usize,
}

impl CameraTransition {
    /// Plan a transition from the camera's current pose.
    #[must_use]
    pub fn new(camera: &Camera, target: CameraPose, kind: RampKind) -> Self {
        let start = CameraPose::of(camera);
        let phi_delta = (target.phi - start.phi + PI).rem_euclid(TAU) - PI;
        log::debug!(
            "camera transition {start:?} -> {target:?} over {kind:?} ramp"
        );
        Self {
            start,
            target,
            phi_delta,
            ramp: ActionRamp::get(kind),
            next_step: 0,
        }
    }

    /// Pose the camera started from.
    #[must_use]
    pub fn start(&self) -> CameraPose {
        self.start
    }

    /// Pose the transition ends on.
    #[must_use]
    pub fn target(&self) -> CameraPose {
        self.target
    }

    /// True once every ramp step has been applied.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_step >= self.ramp.len()
    }

    /// Number of steps still to apply.
    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        self.ramp.len().saturating_sub(self.next_step)
    }

    /// Apply the next ramp step to `camera`.
    ///
    /// Returns how long to hold this step before the next call, or `None`
    /// when the transition had already finished.
    pub fn step(&mut self, camera: &mut Camera) -> Option<Duration> {
        let element = *self.ramp.elements().get(self.next_step)?;
        self.next_step += 1;

        let scale = self.ramp.final_value();
        let fraction = if scale == 0.0 {
            1.0
        } else {
            element.value / scale
        };
        self.apply(camera, fraction);
        Some(hold_time(element.duration))
    }

    /// Apply all remaining steps at once, firing a single notification.
    pub fn finish(&mut self, camera: &mut Camera) {
        self.next_step = self.ramp.len();
        self.apply(camera, 1.0);
    }

    fn apply(&self, camera: &mut Camera, fraction: f32) {
        let lerp = |a: f32, b: f32| a + (b - a) * fraction;
        camera.eventing_suspend();
        camera.set_phi(self.start.phi + self.phi_delta * fraction);
        camera.set_rho(lerp(self.start.rho, self.target.rho));
        camera.set_distance(lerp(self.start.distance, self.target.distance));
        camera.eventing_resume(true);
    }
}
