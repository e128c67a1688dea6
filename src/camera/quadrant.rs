//! Octant of the viewing sphere the camera currently looks from.

use std::f64::consts::{FRAC_PI_2, PI};

/// One of the eight octants around the look-at point.
///
/// Top/bottom is decided by the pitch, left/right and front/back by the
/// azimuth. Renderers use this to pick which axis labels and grid planes
/// face the viewer.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraQuadrant {
    /// Above the scene, right half, front half.
    TopRightFront = 0,
    /// Above the scene, right half, back half.
    TopRightBack = 1,
    /// Above the scene, left half, front half.
    TopLeftFront = 2,
    /// Above the scene, left half, back half.
    TopLeftBack = 3,
    /// Below the scene, right half, front half.
    BottomRightFront = 4,
    /// Below the scene, right half, back half.
    BottomRightBack = 5,
    /// Below the scene, left half, front half.
    BottomLeftFront = 6,
    /// Below the scene, left half, back half.
    BottomLeftBack = 7,
}

impl CameraQuadrant {
    /// Classify a normalized `(phi, rho)` pair.
    ///
    /// Comparisons run in `f64` against `f64` constants, so an `f32` angle
    /// that rounds just above a boundary (e.g. `FRAC_PI_2 as f32`) falls on
    /// the `>=` side. Boundaries:
    /// - top while `rho < π/2`
    /// - right while `phi < π`
    /// - front while `phi < π/2` (right half) or `phi > 3π/2` (left half)
    #[must_use]
    pub fn classify(phi: f32, rho: f32) -> Self {
        let phi = f64::from(phi);
        let top = f64::from(rho) < FRAC_PI_2;
        let right = phi < PI;
        let front = if right {
            phi < FRAC_PI_2
        } else {
            phi > FRAC_PI_2 * 3.0
        };

        match (top, right, front) {
            (true, true, true) => Self::TopRightFront,
            (true, true, false) => Self::TopRightBack,
            (true, false, true) => Self::TopLeftFront,
            (true, false, false) => Self::TopLeftBack,
            (false, true, true) => Self::BottomRightFront,
            (false, true, false) => Self::BottomRightBack,
            (false, false, true) => Self::BottomLeftFront,
            (false, false, false) => Self::BottomLeftBack,
        }
    }

    /// Stable numeric index, as packed into [`super::CameraUniform`].
    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// True for the four octants above the scene.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Self::TopRightFront
                | Self::TopRightBack
                | Self::TopLeftFront
                | Self::TopLeftBack
        )
    }

    /// True for the four octants on the right half.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(
            self,
            Self::TopRightFront
                | Self::TopRightBack
                | Self::BottomRightFront
                | Self::BottomRightBack
        )
    }

    /// True for the four front octants.
    #[must_use]
    pub fn is_front(self) -> bool {
        matches!(
            self,
            Self::TopRightFront
                | Self::TopLeftFront
                | Self::BottomRightFront
                | Self::BottomLeftFront
        )
    }
}
