//! Scene camera with synchronized polar and cartesian views.

use std::f64::consts::{PI, TAU};
use std::fmt;

use glam::{Mat4, Vec3};

use super::events::{ChangeNotifier, SubscriptionId};
use super::quadrant::CameraQuadrant;
use super::uniform::CameraUniform;
use crate::error::PlotViewError;
use crate::options::CameraOptions;

/// Default shift applied to phi for the second cached sin/cos pair.
pub const DEFAULT_PHI_SHIFT_OFFSET: f32 = std::f32::consts::FRAC_PI_4;

/// Tolerance on `sin(phi)` and `sin(rho)` for [`Camera::is_2d_view`].
const TWO_D_EPSILON: f32 = 1e-5;

/// Default distance of the top-down camera.
const DEFAULT_DISTANCE: f32 = 10.0;

/// Viewpoint onto a 3D scene.
///
/// The camera position is described twice: as an absolute cartesian
/// `position`, and as `(distance, phi, rho)` relative to `look_at`.
/// `phi` is the azimuth about the vertical (Z) axis and points towards
/// negative Y at zero; `rho` is the pitch measured from the vertical axis,
/// so `rho = 0` looks straight down.
///
/// Every mutator recomputes the cached trigonometry, the up vector and the
/// [`CameraQuadrant`] before firing a single change notification.
///
/// Setters are tolerant: distance is taken as its absolute value, phi is
/// wrapped into `[0, 2π)` and rho is clamped into `[0, π]`. Only
/// [`set`](Self::set) validates its input.
///
/// The camera has no internal synchronization. It is meant to be owned by a
/// single view and mutated from one thread.
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
    top: Vec3,
    distance: f32,
    phi: f32,
    rho: f32,
    phi_shift_offset: f32,
    sin_phi: f32,
    cos_phi: f32,
    sin_rho: f32,
    cos_rho: f32,
    sin_phi_shift: f32,
    cos_phi_shift: f32,
    quadrant: CameraQuadrant,
    changed: ChangeNotifier<Camera>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Camera {
    /// Copies the full camera state. Subscribers are not copied.
    fn clone(&self) -> Self {
        let mut camera = Self {
            position: self.position,
            look_at: self.look_at,
            distance: self.distance,
            phi: self.phi,
            rho: self.rho,
            phi_shift_offset: self.phi_shift_offset,
            ..Self::blank()
        };
        camera.update_cached_vars();
        camera
    }
}

impl Camera {
    /// Top-down, unrotated view: position `(0, 0, 10)` looking at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::from_polar(0.0, 0.0, DEFAULT_DISTANCE)
    }

    /// Camera at the given polar coordinates around the origin.
    ///
    /// Inputs are coerced the same way the individual setters coerce them.
    #[must_use]
    pub fn from_polar(phi: f32, rho: f32, distance: f32) -> Self {
        let mut camera = Self {
            distance: coerce_distance(distance),
            phi: wrap_phi(phi),
            rho: clamp_rho(rho),
            ..Self::blank()
        };
        camera.update_cached_vars();
        camera.update_position();
        camera
    }

    /// Camera built from configured defaults.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::from_polar(
            options.phi.to_radians(),
            options.rho.to_radians(),
            options.distance,
        );
        camera.look_at = Vec3::from_array(options.look_at);
        camera.phi_shift_offset = options.phi_shift_offset.to_radians();
        camera.update_cached_vars();
        camera.update_position();
        camera
    }

    fn blank() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::ZERO,
            top: Vec3::Y,
            distance: 0.0,
            phi: 0.0,
            rho: 0.0,
            phi_shift_offset: DEFAULT_PHI_SHIFT_OFFSET,
            sin_phi: 0.0,
            cos_phi: 1.0,
            sin_rho: 0.0,
            cos_rho: 1.0,
            sin_phi_shift: 0.0,
            cos_phi_shift: 1.0,
            quadrant: CameraQuadrant::TopRightFront,
            changed: ChangeNotifier::new(),
        }
    }

    // -- Primary state -----------------------------------------------------

    /// Camera position in absolute world coordinates.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Place the camera at an absolute position.
    ///
    /// The position is stored verbatim; distance, phi and rho are derived
    /// from `position - look_at`. When the new position lies on the
    /// vertical axis through the look-at point the azimuth is undefined and
    /// the current phi is kept.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        let (distance, phi, rho) =
            cartesian_to_polar(position - self.look_at, self.phi);
        self.distance = distance;
        self.phi = phi;
        self.rho = rho;
        self.update_cached_vars();
        self.on_change();
    }

    /// Point the camera is aiming at (world coordinates).
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Move the pivot. The camera keeps its distance and angles relative to
    /// the new pivot, so the position moves with it.
    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
        self.update_position();
        self.on_change();
    }

    /// Distance between camera and look-at point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set the distance. Negative values are stored as their absolute value,
    /// NaN as zero.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = coerce_distance(distance);
        self.update_cached_vars();
        self.update_position();
        self.on_change();
    }

    /// Azimuth in radians, in `[0, 2π)`.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Set the azimuth. Any value is wrapped into `[0, 2π)`; NaN and
    /// infinities become 0.
    pub fn set_phi(&mut self, phi: f32) {
        self.phi = wrap_phi(phi);
        self.update_cached_vars();
        self.update_position();
        self.on_change();
    }

    /// Pitch in radians, in `[0, π]`.
    #[must_use]
    pub fn rho(&self) -> f32 {
        self.rho
    }

    /// Set the pitch. Values outside `[0, π]` are clamped, NaN becomes 0.
    pub fn set_rho(&mut self, rho: f32) {
        self.rho = clamp_rho(rho);
        self.update_cached_vars();
        self.update_position();
        self.on_change();
    }

    /// Set both angles and the distance at once, firing one notification.
    ///
    /// Unlike the individual setters this validates the distance (negative
    /// or NaN is an error) and only wraps the angles: `phi` modulo 2π and
    /// `rho` modulo π (so `rho = π` becomes 0), non-finite angles become 0.
    /// On error the camera is left untouched.
    pub fn set(
        &mut self,
        phi: f32,
        rho: f32,
        distance: f32,
    ) -> Result<(), PlotViewError> {
        if distance.is_nan() || distance < 0.0 {
            log::warn!("rejected camera distance {distance}");
            return Err(PlotViewError::InvalidArgument(
                "camera distance must be positive".to_owned(),
            ));
        }
        self.phi = wrap(f64::from(phi), TAU);
        self.rho = wrap(f64::from(rho), PI);
        self.distance = distance;
        self.update_cached_vars();
        self.update_position();
        self.on_change();
        Ok(())
    }

    /// [`set`](Self::set) with both angles given in degrees.
    pub fn set_deg(
        &mut self,
        phi: f32,
        rho: f32,
        distance: f32,
    ) -> Result<(), PlotViewError> {
        self.set(
            f64::from(phi).to_radians() as f32,
            f64::from(rho).to_radians() as f32,
            distance,
        )
    }

    /// Angle added to phi for the shifted sin/cos pair used by surface plots.
    #[must_use]
    pub fn phi_shift_offset(&self) -> f32 {
        self.phi_shift_offset
    }

    /// Change the shift angle of the second sin/cos pair.
    pub fn set_phi_shift_offset(&mut self, offset: f32) {
        self.phi_shift_offset = offset;
        self.update_cached_vars();
        self.on_change();
    }

    // -- Cached / derived state --------------------------------------------

    /// Normalized up vector, perpendicular to the viewing direction.
    #[must_use]
    pub fn top(&self) -> Vec3 {
        self.top
    }

    /// Cached `sin(phi)`.
    #[must_use]
    pub fn sin_phi(&self) -> f32 {
        self.sin_phi
    }

    /// Cached `cos(phi)`.
    #[must_use]
    pub fn cos_phi(&self) -> f32 {
        self.cos_phi
    }

    /// Cached `sin(rho)`.
    #[must_use]
    pub fn sin_rho(&self) -> f32 {
        self.sin_rho
    }

    /// Cached `cos(rho)`.
    #[must_use]
    pub fn cos_rho(&self) -> f32 {
        self.cos_rho
    }

    /// Cached `sin(phi + phi_shift_offset)`.
    #[must_use]
    pub fn sin_phi_shift(&self) -> f32 {
        self.sin_phi_shift
    }

    /// Cached `cos(phi + phi_shift_offset)`.
    #[must_use]
    pub fn cos_phi_shift(&self) -> f32 {
        self.cos_phi_shift
    }

    /// Octant the camera currently looks from.
    #[must_use]
    pub fn quadrant(&self) -> CameraQuadrant {
        self.quadrant
    }

    /// True while the camera sits above the horizontal plane of the pivot.
    #[must_use]
    pub fn looks_from_top(&self) -> bool {
        f64::from(self.rho) < PI / 2.0
    }

    /// True while the camera sits on the left half of the scene.
    #[must_use]
    pub fn looks_from_left(&self) -> bool {
        f64::from(self.phi).sin() < 0.0
    }

    /// True while the camera sits on the front half of the scene.
    #[must_use]
    pub fn looks_from_front(&self) -> bool {
        f64::from(self.phi).cos() >= 0.0
    }

    /// True when looking straight down on the unrotated scene, which lets
    /// renderers take a 2D path.
    #[must_use]
    pub fn is_2d_view(&self) -> bool {
        self.sin_phi.abs() < TWO_D_EPSILON && self.sin_rho.abs() < TWO_D_EPSILON
    }

    /// Phi in whole degrees.
    #[must_use]
    pub fn phi_degrees(&self) -> i32 {
        f64::from(self.phi).to_degrees().round() as i32
    }

    /// Rho in whole degrees.
    #[must_use]
    pub fn rho_degrees(&self) -> i32 {
        f64::from(self.rho).to_degrees().round() as i32
    }

    /// Right-handed view matrix from `position` towards `look_at`, with
    /// [`top`](Self::top) as up. Identity while the distance is zero.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        if self.distance == 0.0 {
            return Mat4::IDENTITY;
        }
        Mat4::look_at_rh(self.position, self.look_at, self.top)
    }

    /// Snapshot of the camera state packed for a GPU uniform buffer.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self)
    }

    // -- Notifications -----------------------------------------------------

    /// Register a callback fired after every change of the camera state.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Camera) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(callback)
    }

    /// Remove a callback registered with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.changed.len()
    }

    /// Stop firing change notifications until
    /// [`eventing_resume`](Self::eventing_resume).
    pub fn eventing_suspend(&mut self) {
        self.changed.suspend();
    }

    /// Resume change notifications. With `fire_now`, one notification
    /// reflecting the current state is delivered immediately.
    pub fn eventing_resume(&mut self, fire_now: bool) {
        self.changed.resume();
        if fire_now {
            self.on_change();
        }
    }

    /// Whether notifications are currently suspended.
    #[must_use]
    pub fn is_eventing_suspended(&self) -> bool {
        self.changed.is_suspended()
    }

    fn on_change(&mut self) {
        if self.changed.is_suspended() || self.changed.is_empty() {
            return;
        }
        // Detach the observers so they can borrow the camera.
        let mut changed = std::mem::take(&mut self.changed);
        let _ = changed.notify(self);
        self.changed = changed;
    }

    // -- Private helpers ---------------------------------------------------

    fn update_position(&mut self) {
        self.position = self.look_at
            + self.distance
                * Vec3::new(
                    self.sin_rho * self.sin_phi,
                    self.sin_rho * -self.cos_phi,
                    self.cos_rho,
                );
    }

    fn update_cached_vars(&mut self) {
        let phi = f64::from(self.phi);
        let rho = f64::from(self.rho);
        let shifted = phi + f64::from(self.phi_shift_offset);

        self.sin_phi = phi.sin() as f32;
        self.cos_phi = phi.cos() as f32;
        self.sin_phi_shift = shifted.sin() as f32;
        self.cos_phi_shift = shifted.cos() as f32;
        self.sin_rho = rho.sin() as f32;
        self.cos_rho = rho.cos() as f32;

        self.top = Vec3::new(
            -self.sin_phi * self.cos_rho,
            self.cos_phi * self.cos_rho,
            self.sin_rho,
        )
        .normalize_or_zero();

        self.quadrant = CameraQuadrant::classify(self.phi, self.rho);
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("position", &self.position)
            .field("look_at", &self.look_at)
            .field("distance", &self.distance)
            .field("phi", &self.phi)
            .field("rho", &self.rho)
            .field("quadrant", &self.quadrant)
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r:{} φ:{}° ρ:{}° - P:{} - L:{}",
            self.distance,
            self.phi_degrees(),
            self.rho_degrees(),
            self.position,
            self.look_at
        )
    }
}

fn coerce_distance(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.abs()
    }
}

/// `(value + 2π) mod 2π`, landing in `[0, 2π)`.
fn wrap_phi(value: f32) -> f32 {
    wrap(f64::from(value) + TAU, TAU)
}

fn clamp_rho(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if f64::from(value) > PI {
        PI as f32
    } else {
        value
    }
}

/// Euclidean remainder computed in f64. A result that rounds up to the
/// period in f32 is folded back to zero, as is non-finite input.
fn wrap(value: f64, period: f64) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(period) as f32;
    if f64::from(wrapped) >= period {
        0.0
    } else {
        wrapped
    }
}

/// Decompose a look-at-relative vector into `(distance, phi, rho)`.
///
/// Inverse of `distance * (sin ρ sin φ, -sin ρ cos φ, cos ρ)`.
/// `fallback_phi` is returned as the azimuth for vectors on the vertical
/// axis.
fn cartesian_to_polar(v: Vec3, fallback_phi: f32) -> (f32, f32, f32) {
    let distance = v.length();
    if distance == 0.0 {
        return (0.0, fallback_phi, 0.0);
    }
    let rho = (v.z / distance).clamp(-1.0, 1.0).acos();
    let phi = if v.x == 0.0 && v.y == 0.0 {
        fallback_phi
    } else {
        wrap(f64::from(v.x).atan2(-f64::from(v.y)), TAU)
    };
    (distance, phi, rho)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::f32::consts::{FRAC_PI_2, PI as PI_F32};
    use std::rc::Rc;

    use rand::Rng;

    use super::*;

    const EPS: f32 = 1e-4;

    fn counter(camera: &mut Camera) -> Rc<Cell<u32>> {
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let _ = camera.subscribe(move |_| seen.set(seen.get() + 1));
        hits
    }

    fn polar_to_cartesian(camera: &Camera) -> Vec3 {
        let (d, phi, rho) = (camera.distance(), camera.phi(), camera.rho());
        camera.look_at()
            + d * Vec3::new(
                rho.sin() * phi.sin(),
                -rho.sin() * phi.cos(),
                rho.cos(),
            )
    }

    #[test]
    fn default_is_top_down_2d_view() {
        let camera = Camera::new();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.look_at(), Vec3::ZERO);
        assert_eq!(camera.phi(), 0.0);
        assert_eq!(camera.rho(), 0.0);
        assert_eq!(camera.distance(), 10.0);
        assert!(camera.is_2d_view());
        assert_eq!(camera.quadrant(), CameraQuadrant::TopRightFront);
    }

    #[test]
    fn from_polar_coerces_inputs() {
        let camera = Camera::from_polar(-FRAC_PI_2, 5.0, -4.0);
        assert_eq!(camera.distance(), 4.0);
        assert!((camera.phi() - 3.0 * FRAC_PI_2).abs() < EPS);
        assert_eq!(camera.rho(), PI_F32);
        assert!((camera.position() - polar_to_cartesian(&camera)).length() < EPS);
    }

    #[test]
    fn phi_setter_wraps_into_full_turn() {
        let mut rng = rand::rng();
        let mut camera = Camera::new();
        for _ in 0..500 {
            let input: f32 = rng.random_range(-50.0..50.0);
            camera.set_phi(input);
            let phi = camera.phi();
            assert!((0.0..std::f32::consts::TAU).contains(&phi), "{input} -> {phi}");
            let expected =
                (f64::from(input) + TAU).rem_euclid(TAU) as f32;
            assert!((phi - expected).abs() < EPS, "{input} -> {phi}");
        }
    }

    #[test]
    fn phi_setter_tiny_negative_stays_below_full_turn() {
        let mut camera = Camera::new();
        camera.set_phi(-1e-9);
        assert!(camera.phi() < std::f32::consts::TAU);
    }

    #[test]
    fn rho_setter_clamps() {
        let mut camera = Camera::new();
        camera.set_rho(-0.5);
        assert_eq!(camera.rho(), 0.0);
        camera.set_rho(4.0);
        assert_eq!(camera.rho(), PI_F32);
        camera.set_rho(1.25);
        assert_eq!(camera.rho(), 1.25);
    }

    #[test]
    fn distance_setter_takes_absolute_value() {
        let mut rng = rand::rng();
        let mut camera = Camera::new();
        for _ in 0..200 {
            let input: f32 = rng.random_range(-1000.0..1000.0);
            camera.set_distance(input);
            assert_eq!(camera.distance(), input.abs());
        }
    }

    #[test]
    fn position_round_trip() {
        let mut rng = rand::rng();
        let mut camera = Camera::new();
        camera.set_look_at(Vec3::new(1.0, -2.0, 0.5));
        for _ in 0..200 {
            let p = Vec3::new(
                rng.random_range(-20.0..20.0),
                rng.random_range(-20.0..20.0),
                rng.random_range(-20.0..20.0),
            );
            camera.set_position(p);
            assert_eq!(camera.position(), p);
            let rebuilt = polar_to_cartesian(&camera);
            assert!(
                (rebuilt - p).length() < 1e-3,
                "{p} rebuilt as {rebuilt}"
            );
            assert!((0.0..std::f32::consts::TAU).contains(&camera.phi()));
            assert!((0.0..=PI_F32).contains(&camera.rho()));
        }
    }

    #[test]
    fn position_on_vertical_axis_keeps_phi() {
        let mut camera = Camera::from_polar(1.0, 0.5, 5.0);
        camera.set_position(Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(camera.phi(), 1.0);
        assert!((camera.rho() - PI_F32).abs() < EPS);
        assert_eq!(camera.distance(), 3.0);
    }

    #[test]
    fn look_at_moves_position_with_pivot() {
        let mut camera = Camera::from_polar(0.3, 0.7, 6.0);
        let offset = camera.position() - camera.look_at();
        camera.set_look_at(Vec3::new(3.0, 4.0, 5.0));
        let new_offset = camera.position() - camera.look_at();
        assert!((offset - new_offset).length() < EPS);
        assert_eq!(camera.distance(), 6.0);
    }

    #[test]
    fn set_rejects_negative_distance_without_changes() {
        let mut camera = Camera::from_polar(0.4, 0.6, 3.0);
        let hits = counter(&mut camera);
        let before = camera.position();

        let result = camera.set(1.0, 1.0, -1.0);
        assert!(matches!(result, Err(PlotViewError::InvalidArgument(_))));
        assert_eq!(camera.phi(), 0.4);
        assert_eq!(camera.rho(), 0.6);
        assert_eq!(camera.distance(), 3.0);
        assert_eq!(camera.position(), before);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn non_finite_input_keeps_invariants() {
        let mut camera = Camera::from_polar(f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(camera.phi(), 0.0);
        assert_eq!(camera.rho(), 0.0);
        assert_eq!(camera.distance(), 0.0);

        camera.set_distance(4.0);
        camera.set_phi(f32::NAN);
        camera.set_rho(f32::NAN);
        assert_eq!(camera.phi(), 0.0);
        assert_eq!(camera.rho(), 0.0);
        camera.set_phi(f32::INFINITY);
        assert_eq!(camera.phi(), 0.0);
        camera.set_distance(f32::NAN);
        assert_eq!(camera.distance(), 0.0);
        assert!(camera.position().is_finite());

        camera.set(f32::NAN, f32::NEG_INFINITY, 2.0).unwrap();
        assert_eq!(camera.phi(), 0.0);
        assert_eq!(camera.rho(), 0.0);
        assert!(matches!(
            camera.set(0.5, 0.5, f32::NAN),
            Err(PlotViewError::InvalidArgument(_))
        ));
        assert_eq!(camera.distance(), 2.0);
    }

    #[test]
    fn set_wraps_angles_and_fires_once() {
        let mut camera = Camera::new();
        let hits = counter(&mut camera);

        camera.set(7.0, 4.0, 2.0).unwrap();
        assert!((camera.phi() - (7.0 - std::f32::consts::TAU)).abs() < EPS);
        assert!((camera.rho() - (4.0 - PI_F32)).abs() < EPS);
        assert_eq!(camera.distance(), 2.0);
        assert!((camera.position() - polar_to_cartesian(&camera)).length() < EPS);
        assert_eq!(hits.get(), 1);

        // rho = pi wraps to zero under the modulo rule.
        camera.set(0.0, PI_F32, 2.0).unwrap();
        assert!(camera.rho() < EPS);
    }

    #[test]
    fn set_deg_converts_to_radians() {
        let mut camera = Camera::new();
        camera.set_deg(90.0, 45.0, 5.0).unwrap();
        assert!((camera.phi() - FRAC_PI_2).abs() < EPS);
        assert!((camera.rho() - std::f32::consts::FRAC_PI_4).abs() < EPS);
        assert_eq!(camera.phi_degrees(), 90);
        assert_eq!(camera.rho_degrees(), 45);
        assert!(camera.set_deg(0.0, 0.0, -0.1).is_err());
    }

    #[test]
    fn cache_tracks_angles() {
        let mut camera = Camera::from_polar(1.1, 0.9, 4.0);
        camera.set_phi_shift_offset(0.25);
        assert!((camera.sin_phi() - 1.1f32.sin()).abs() < EPS);
        assert!((camera.cos_phi() - 1.1f32.cos()).abs() < EPS);
        assert!((camera.sin_rho() - 0.9f32.sin()).abs() < EPS);
        assert!((camera.cos_rho() - 0.9f32.cos()).abs() < EPS);
        assert!((camera.sin_phi_shift() - 1.35f32.sin()).abs() < EPS);
        assert!((camera.cos_phi_shift() - 1.35f32.cos()).abs() < EPS);
    }

    #[test]
    fn default_shift_offset_is_quarter_pi() {
        let camera = Camera::from_polar(0.0, 0.3, 1.0);
        assert_eq!(camera.phi_shift_offset(), std::f32::consts::FRAC_PI_4);
        let expected = std::f32::consts::FRAC_PI_4.sin();
        assert!((camera.sin_phi_shift() - expected).abs() < EPS);
    }

    #[test]
    fn top_is_unit_and_perpendicular_to_view() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let camera = Camera::from_polar(
                rng.random_range(0.0..std::f32::consts::TAU),
                rng.random_range(0.0..PI_F32),
                rng.random_range(0.5..50.0),
            );
            let view = (camera.look_at() - camera.position()).normalize();
            assert!((camera.top().length() - 1.0).abs() < EPS);
            assert!(camera.top().dot(view).abs() < 1e-3);
        }
    }

    #[test]
    fn quadrant_follows_setters() {
        let mut camera = Camera::new();
        assert_eq!(camera.quadrant(), CameraQuadrant::TopRightFront);
        camera.set_rho(FRAC_PI_2);
        assert_eq!(camera.quadrant(), CameraQuadrant::BottomRightFront);
        camera.set_phi(4.0);
        assert_eq!(camera.quadrant(), CameraQuadrant::BottomLeftBack);
        camera.set_rho(0.2);
        assert_eq!(camera.quadrant(), CameraQuadrant::TopLeftBack);
        assert!(camera.looks_from_top());
        assert!(camera.looks_from_left());
        assert!(!camera.looks_from_front());
    }

    #[test]
    fn is_2d_view_only_when_unrotated_top_down() {
        let camera = Camera::from_polar(0.0, 0.0, 10.0);
        assert!(camera.is_2d_view());
        let camera = Camera::from_polar(0.001, 0.0, 10.0);
        assert!(!camera.is_2d_view());
        let camera = Camera::from_polar(0.0, 0.001, 10.0);
        assert!(!camera.is_2d_view());
    }

    #[test]
    fn suspend_batches_into_one_notification() {
        let mut camera = Camera::new();
        let hits = counter(&mut camera);
        let final_phi = Rc::new(Cell::new(0.0f32));
        let seen = Rc::clone(&final_phi);
        let _ = camera.subscribe(move |cam| seen.set(cam.phi()));

        camera.eventing_suspend();
        camera.set_phi(1.0);
        camera.set_rho(0.5);
        camera.set_distance(3.0);
        assert_eq!(hits.get(), 0);
        camera.eventing_resume(true);

        assert_eq!(hits.get(), 1);
        assert_eq!(final_phi.get(), 1.0);
    }

    #[test]
    fn resume_without_firing_delivers_nothing() {
        let mut camera = Camera::new();
        let hits = counter(&mut camera);

        camera.eventing_suspend();
        camera.set_phi(1.0);
        camera.set_rho(0.5);
        camera.set_distance(3.0);
        camera.eventing_resume(false);
        assert_eq!(hits.get(), 0);
        assert!(!camera.is_eventing_suspended());

        camera.set_phi(2.0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn every_mutator_fires() {
        let mut camera = Camera::new();
        let hits = counter(&mut camera);
        camera.set_look_at(Vec3::X);
        camera.set_distance(2.0);
        camera.set_phi(0.1);
        camera.set_rho(0.1);
        camera.set_position(Vec3::new(1.0, 1.0, 1.0));
        camera.set(0.2, 0.2, 1.0).unwrap();
        camera.set_phi_shift_offset(0.3);
        assert_eq!(hits.get(), 7);
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let mut camera = Camera::new();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let id = camera.subscribe(move |_| seen.set(seen.get() + 1));
        camera.set_phi(1.0);
        assert!(camera.unsubscribe(id));
        camera.set_phi(2.0);
        assert_eq!(hits.get(), 1);
        assert_eq!(camera.subscriber_count(), 0);
    }

    #[test]
    fn clone_copies_state_not_subscribers() {
        let mut camera = Camera::from_polar(2.5, 1.9, 7.0);
        camera.set_look_at(Vec3::new(1.0, 2.0, 3.0));
        let _hits = counter(&mut camera);

        let copy = camera.clone();
        assert_eq!(copy.position(), camera.position());
        assert_eq!(copy.look_at(), camera.look_at());
        assert_eq!(copy.distance(), camera.distance());
        assert_eq!(copy.phi(), camera.phi());
        assert_eq!(copy.rho(), camera.rho());
        assert_eq!(copy.quadrant(), camera.quadrant());
        assert_eq!(copy.top(), camera.top());
        assert_eq!(copy.subscriber_count(), 0);
    }

    #[test]
    fn display_summarizes_state() {
        let camera = Camera::from_polar(FRAC_PI_2, 0.0, 10.0);
        let text = camera.to_string();
        assert!(text.starts_with("r:10 φ:90° ρ:0°"), "{text}");
        assert!(text.contains(" - L:[0, 0, 0]"), "{text}");
    }

    #[test]
    fn view_matrix_maps_look_at_in_front_of_camera() {
        let camera = Camera::from_polar(0.6, 1.0, 8.0);
        let view = camera.view_matrix();
        let p = view.transform_point3(camera.look_at());
        // Right-handed view space looks down -Z.
        assert!((p.z + 8.0).abs() < 1e-3);
        assert!(p.x.abs() < 1e-3 && p.y.abs() < 1e-3);

        let at_pivot = Camera::from_polar(0.0, 0.0, 0.0);
        assert_eq!(at_pivot.view_matrix(), Mat4::IDENTITY);
    }
}
