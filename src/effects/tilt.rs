//! Spring-eased 3D tilt for a single card with a cursor-following tooltip.

use super::{lerp, Point, Rect};

pub const DEFAULT_ROTATE_AMPLITUDE: f64 = 14.0;
pub const ROTATE_AMPLITUDE_BOUNDS: (f64, f64) = (0.0, 45.0);
pub const DEFAULT_SCALE_ON_HOVER: f64 = 1.1;
pub const SCALE_ON_HOVER_BOUNDS: (f64, f64) = (1.0, 1.5);
pub const TRANSFORM_BLEND: f64 = 0.15;
pub const TOOLTIP_BLEND: f64 = 0.2;
pub const TOOLTIP_VELOCITY_FACTOR: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub rotate_amplitude: f64,
    pub scale_on_hover: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            rotate_amplitude: DEFAULT_ROTATE_AMPLITUDE,
            scale_on_hover: DEFAULT_SCALE_ON_HOVER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    rotate_x: f64,
    rotate_y: f64,
    scale: f64,
    tooltip_rotate: f64,
}

impl Pose {
    const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        tooltip_rotate: 0.0,
    };
}

/// Values to apply to the DOM after one easing step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub tooltip_rotate: f64,
}

impl TiltFrame {
    pub fn card_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }

    pub fn tooltip_transform(&self) -> String {
        format!("translate(-50%, -50%) rotate({}deg)", self.tooltip_rotate)
    }
}

#[derive(Clone, Debug)]
pub struct TiltState {
    config: TiltConfig,
    current: Pose,
    target: Pose,
    last_offset_y: f64,
}

impl TiltState {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            current: Pose::NEUTRAL,
            target: Pose::NEUTRAL,
            last_offset_y: 0.0,
        }
    }

    /// Updates targets from a pointer position; returns the tooltip position local to the card.
    pub fn pointer_move(&mut self, card: Rect, client: Point) -> Point {
        let normalized = card.normalized_offset(client);
        self.target.rotate_x = normalized.y * -self.config.rotate_amplitude;
        self.target.rotate_y = normalized.x * self.config.rotate_amplitude;

        let offset_y = client.y - card.center().y;
        let velocity_y = offset_y - self.last_offset_y;
        self.target.tooltip_rotate = -velocity_y * TOOLTIP_VELOCITY_FACTOR;
        self.last_offset_y = offset_y;

        card.local(client)
    }

    pub fn pointer_enter(&mut self) {
        self.target.scale = self.config.scale_on_hover;
    }

    pub fn pointer_leave(&mut self) {
        self.target = Pose::NEUTRAL;
    }

    /// One easing step; runs every frame regardless of hover.
    pub fn step(&mut self) -> TiltFrame {
        let (current, target) = (&mut self.current, &self.target);
        current.rotate_x = lerp(current.rotate_x, target.rotate_x, TRANSFORM_BLEND);
        current.rotate_y = lerp(current.rotate_y, target.rotate_y, TRANSFORM_BLEND);
        current.scale = lerp(current.scale, target.scale, TRANSFORM_BLEND);
        current.tooltip_rotate = lerp(current.tooltip_rotate, target.tooltip_rotate, TOOLTIP_BLEND);

        TiltFrame {
            rotate_x: current.rotate_x,
            rotate_y: current.rotate_y,
            scale: current.scale,
            tooltip_rotate: current.tooltip_rotate,
        }
    }

    #[cfg(test)]
    fn target_rotation(&self) -> (f64, f64) {
        (self.target.rotate_x, self.target.rotate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    #[test]
    fn pointer_at_corner_hits_full_amplitude() {
        let mut tilt = TiltState::new(TiltConfig::default());
        let local = tilt.pointer_move(CARD, Point::new(200.0, 0.0));
        assert_eq!(tilt.target_rotation(), (14.0, 14.0));
        assert_eq!(local, Point::new(200.0, 0.0));

        tilt.pointer_move(CARD, Point::new(0.0, 100.0));
        assert_eq!(tilt.target_rotation(), (-14.0, -14.0));
    }

    #[test]
    fn tooltip_rotation_follows_vertical_velocity() {
        let mut tilt = TiltState::new(TiltConfig::default());
        tilt.pointer_move(CARD, Point::new(100.0, 50.0));
        tilt.pointer_move(CARD, Point::new(100.0, 60.0));
        assert_eq!(tilt.target.tooltip_rotate, -6.0);
    }

    #[test]
    fn leave_resets_targets_to_neutral() {
        let mut tilt = TiltState::new(TiltConfig::default());
        tilt.pointer_enter();
        tilt.pointer_move(CARD, Point::new(180.0, 10.0));
        tilt.pointer_leave();
        assert_eq!(tilt.target_rotation(), (0.0, 0.0));
        assert_eq!(tilt.target, Pose::NEUTRAL);
    }

    #[test]
    fn easing_converges_monotonically_after_leave() {
        let mut tilt = TiltState::new(TiltConfig::default());
        tilt.pointer_enter();
        tilt.pointer_move(CARD, Point::new(200.0, 100.0));
        for _ in 0..30 {
            tilt.step();
        }
        tilt.pointer_leave();

        let mut previous = tilt.step();
        for _ in 0..200 {
            let frame = tilt.step();
            assert!(frame.rotate_x.abs() <= previous.rotate_x.abs());
            assert!(frame.rotate_y.abs() <= previous.rotate_y.abs());
            assert!((frame.scale - 1.0).abs() <= (previous.scale - 1.0).abs());
            previous = frame;
        }
        assert!(previous.rotate_x.abs() < 1e-6);
        assert!(previous.rotate_y.abs() < 1e-6);
    }

    #[test]
    fn enter_eases_scale_toward_hover_scale() {
        let mut tilt = TiltState::new(TiltConfig::default());
        tilt.pointer_enter();
        let frame = tilt.step();
        assert!((frame.scale - (1.0 + 0.1 * TRANSFORM_BLEND)).abs() < 1e-12);
    }

    #[test]
    fn transforms_render_eased_values() {
        let frame = TiltFrame {
            rotate_x: 2.0,
            rotate_y: -3.5,
            scale: 1.05,
            tooltip_rotate: 4.0,
        };
        assert_eq!(
            frame.card_transform(),
            "perspective(1000px) rotateX(2deg) rotateY(-3.5deg) scale(1.05)"
        );
        assert_eq!(frame.tooltip_transform(), "translate(-50%, -50%) rotate(4deg)");
    }
}
