//! Action ramps: sampled easing curves that drive animated UI transitions.
//!
//! Each [`RampKind`] has a closed-form curve and a fixed step count. The
//! sampled tables are built once per process on first access and shared
//! read-only afterwards.

use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::OnceLock;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Duration of one ramp step in seconds.
pub const STEP_SECONDS: f32 = 0.02;

/// Half-width of the sine window sampled by [`RampKind::Override`].
const OVERRIDE_HALF_WIDTH: f64 = PI / 1.7;

/// One step of a ramp: a progress value and how long to hold it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionRampElement {
    /// Progress towards the target, usually in `[0, 1]`.
    pub value: f32,
    /// Hold time of this step in seconds.
    pub duration: f32,
}

impl ActionRampElement {
    /// Create a ramp element.
    #[must_use]
    pub fn new(value: f32, duration: f32) -> Self {
        Self { value, duration }
    }
}

/// Named easing curves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RampKind {
    /// Evenly spaced steps from 0 to 1.
    Linear,
    /// Sine ease-in-out from 0 to 1.
    #[default]
    Soft,
    /// `sin(t)` over `t ∈ [0, 1]`: fast start, ends at `sin(1) ≈ 0.84`.
    Hard,
    /// Wide sine window rescaled to start at 0 and end at 1. The window
    /// extends past the sine peak, so mid-ramp values overshoot 1 by ~2%.
    Override,
    /// Jump straight to 1 with no hold time.
    NoRamp,
}

impl RampKind {
    /// Every ramp kind, in declaration order.
    pub const ALL: [RampKind; 5] = [
        RampKind::Linear,
        RampKind::Soft,
        RampKind::Hard,
        RampKind::Override,
        RampKind::NoRamp,
    ];

    /// Number of samples in the cached table.
    #[must_use]
    pub fn steps(self) -> usize {
        match self {
            RampKind::Linear | RampKind::Soft | RampKind::Hard => 10,
            RampKind::Override => 20,
            RampKind::NoRamp => 1,
        }
    }

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = f64::from(t.clamp(0.0, 1.0));
        let value = match self {
            RampKind::Linear => t,
            RampKind::Soft => ((PI * t - FRAC_PI_2).sin() + 1.0) / 2.0,
            RampKind::Hard => t.sin(),
            RampKind::Override => {
                let start = (-OVERRIDE_HALF_WIDTH).sin();
                let x = -OVERRIDE_HALF_WIDTH + 2.0 * OVERRIDE_HALF_WIDTH * t;
                (x.sin() - start) / (OVERRIDE_HALF_WIDTH.sin() - start)
            }
            RampKind::NoRamp => 1.0,
        };
        value as f32
    }

    fn step_duration(self) -> f32 {
        match self {
            RampKind::NoRamp => 0.0,
            _ => STEP_SECONDS,
        }
    }

    fn build(self) -> ActionRamp {
        let steps = self.steps();
        let duration = self.step_duration();
        let elements = (0..steps)
            .map(|i| {
                let t = if steps > 1 {
                    i as f32 / (steps - 1) as f32
                } else {
                    1.0
                };
                ActionRampElement::new(self.evaluate(t), duration)
            })
            .collect();
        log::debug!("built {:?} action ramp with {steps} steps", self);
        ActionRamp { elements }
    }
}

/// Ordered sequence of ramp steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionRamp {
    elements: Vec<ActionRampElement>,
}

static LINEAR: OnceLock<ActionRamp> = OnceLock::new();
static SOFT: OnceLock<ActionRamp> = OnceLock::new();
static HARD: OnceLock<ActionRamp> = OnceLock::new();
static OVERRIDE: OnceLock<ActionRamp> = OnceLock::new();
static NO_RAMP: OnceLock<ActionRamp> = OnceLock::new();

impl ActionRamp {
    /// Custom ramp from explicit steps.
    #[must_use]
    pub fn new(elements: Vec<ActionRampElement>) -> Self {
        Self { elements }
    }

    /// Shared table for `kind`, built on first access.
    #[must_use]
    pub fn get(kind: RampKind) -> &'static ActionRamp {
        let cell = match kind {
            RampKind::Linear => &LINEAR,
            RampKind::Soft => &SOFT,
            RampKind::Hard => &HARD,
            RampKind::Override => &OVERRIDE,
            RampKind::NoRamp => &NO_RAMP,
        };
        cell.get_or_init(|| kind.build())
    }

    /// Shorthand for `ActionRamp::get(RampKind::Linear)`.
    #[must_use]
    pub fn linear() -> &'static ActionRamp {
        Self::get(RampKind::Linear)
    }

    /// Shorthand for `ActionRamp::get(RampKind::Soft)`.
    #[must_use]
    pub fn soft() -> &'static ActionRamp {
        Self::get(RampKind::Soft)
    }

    /// Shorthand for `ActionRamp::get(RampKind::Hard)`.
    #[must_use]
    pub fn hard() -> &'static ActionRamp {
        Self::get(RampKind::Hard)
    }

    /// Shorthand for `ActionRamp::get(RampKind::Override)`.
    #[must_use]
    pub fn override_ramp() -> &'static ActionRamp {
        Self::get(RampKind::Override)
    }

    /// Shorthand for `ActionRamp::get(RampKind::NoRamp)`.
    #[must_use]
    pub fn no_ramp() -> &'static ActionRamp {
        Self::get(RampKind::NoRamp)
    }

    /// All steps in order.
    #[must_use]
    pub fn elements(&self) -> &[ActionRampElement] {
        &self.elements
    }

    /// Iterate over the steps.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, ActionRampElement> {
        self.elements.iter()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True for a ramp without steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sum of all hold times.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        hold_time(self.elements.iter().map(|e| e.duration).sum())
    }

    /// Value of the last step, 0 for an empty ramp.
    #[must_use]
    pub fn final_value(&self) -> f32 {
        self.elements.last().map_or(0.0, |e| e.value)
    }
}

/// Hold time in seconds as a [`Duration`]; negative or non-finite input
/// yields zero.
#[must_use]
pub fn hold_time(seconds: f32) -> Duration {
    Duration::try_from_secs_f32(seconds).unwrap_or_default()
}

impl<'a> IntoIterator for &'a ActionRamp {
    type Item = &'a ActionRampElement;
    type IntoIter = std::slice::Iter<'a, ActionRampElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
