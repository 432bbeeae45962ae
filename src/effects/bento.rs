//! Magic bento grid: per-card tilt and magnetism, hover particles, click ripples
//! and the page-level spotlight.

use super::{lerp, Point, Rect};
use std::f64::consts::TAU;

pub const DEFAULT_PARTICLE_COUNT: usize = 12;
pub const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 48);
pub const DEFAULT_SPOTLIGHT_RADIUS: f64 = 300.0;
pub const SPOTLIGHT_RADIUS_BOUNDS: (f64, f64) = (50.0, 1_000.0);
pub const GLOW_COLOR: &str = "132, 0, 255";
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const PARTICLE_STAGGER_MS: u32 = 100;
pub const PARTICLE_FADE_IN_DELAY_MS: u32 = 10;
pub const PARTICLE_EXIT_MS: u32 = 300;
pub const RIPPLE_START_DELAY_MS: u32 = 10;
pub const RIPPLE_LIFETIME_MS: u32 = 800;
pub const ROTATION_BLEND: f64 = 0.15;
pub const OFFSET_BLEND: f64 = 0.3;
pub const MAX_ROTATION: f64 = 10.0;
pub const MAGNET_STRENGTH: f64 = 0.05;
pub const SPOTLIGHT_MAX_OPACITY: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BentoConfig {
    pub particle_count: usize,
    pub spotlight_radius: f64,
}

impl Default for BentoConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            spotlight_radius: DEFAULT_SPOTLIGHT_RADIUS,
        }
    }
}

impl BentoConfig {
    pub fn proximity(&self) -> f64 {
        self.spotlight_radius * 0.5
    }

    pub fn fade_distance(&self) -> f64 {
        self.spotlight_radius * 0.75
    }
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_MAX_WIDTH
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Motion {
    rotate_x: f64,
    rotate_y: f64,
    x: f64,
    y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub x: f64,
    pub y: f64,
}

impl CardFrame {
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translate({}px, {}px)",
            self.rotate_x, self.rotate_y, self.x, self.y
        )
    }
}

/// Interaction state for one card, reset to neutral targets on pointer leave.
#[derive(Clone, Debug, Default)]
pub struct CardMotion {
    current: Motion,
    target: Motion,
    hovered: bool,
}

impl CardMotion {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.target = Motion::default();
    }

    pub fn pointer_move(&mut self, card: Rect, client: Point) {
        let local = card.local(client);
        let center = Point::new(card.width / 2.0, card.height / 2.0);
        let normalized = card.normalized_offset(client);

        self.target.rotate_x = normalized.y * -MAX_ROTATION;
        self.target.rotate_y = normalized.x * MAX_ROTATION;
        self.target.x = (local.x - center.x) * MAGNET_STRENGTH;
        self.target.y = (local.y - center.y) * MAGNET_STRENGTH;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn step(&mut self) -> CardFrame {
        let (current, target) = (&mut self.current, &self.target);
        current.rotate_x = lerp(current.rotate_x, target.rotate_x, ROTATION_BLEND);
        current.rotate_y = lerp(current.rotate_y, target.rotate_y, ROTATION_BLEND);
        current.x = lerp(current.x, target.x, OFFSET_BLEND);
        current.y = lerp(current.y, target.y, OFFSET_BLEND);

        CardFrame {
            rotate_x: current.rotate_x,
            rotate_y: current.rotate_y,
            x: current.x,
            y: current.y,
        }
    }
}

/// Decorative particle floating inside a hovered card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingParticle {
    pub origin: Point,
    amplitude: Point,
    period_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub dx: f64,
    pub dy: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl ParticleFrame {
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale(1) rotate({}deg)",
            self.dx, self.dy, self.rotation
        )
    }
}

impl FloatingParticle {
    pub fn spawn(rng: &mut fastrand::Rng, card_width: f64, card_height: f64) -> Self {
        Self {
            origin: Point::new(rng.f64() * card_width, rng.f64() * card_height),
            amplitude: Point::new((rng.f64() - 0.5) * 100.0, (rng.f64() - 0.5) * 100.0),
            period_ms: 2_000.0 + rng.f64() * 2_000.0,
        }
    }

    #[cfg(test)]
    fn period_ms(&self) -> f64 {
        self.period_ms
    }

    pub fn frame(&self, elapsed_ms: f64) -> ParticleFrame {
        let progress = elapsed_ms.rem_euclid(self.period_ms) / self.period_ms;
        let wave = (progress * TAU).sin();
        ParticleFrame {
            dx: self.amplitude.x * wave * 0.01,
            dy: self.amplitude.y * wave * 0.01,
            rotation: progress * 360.0,
            opacity: 0.3 + wave.abs() * 0.7,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; background: rgba({GLOW_COLOR}, 1); box-shadow: 0 0 6px rgba({GLOW_COLOR}, 0.6);",
            self.origin.x, self.origin.y
        )
    }
}

/// Click ripple covering the whole card from the click point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub left: f64,
    pub top: f64,
    pub diameter: f64,
}

impl Ripple {
    pub fn at(card_width: f64, card_height: f64, click: Point) -> Self {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(card_width, 0.0),
            Point::new(0.0, card_height),
            Point::new(card_width, card_height),
        ];
        let reach = corners
            .iter()
            .map(|corner| click.distance_to(*corner))
            .fold(0.0, f64::max);

        Self {
            left: click.x - reach,
            top: click.y - reach,
            diameter: reach * 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {d}px; height: {d}px; border-radius: 50%; \
             background: radial-gradient(circle, rgba({GLOW_COLOR}, 0.4) 0%, rgba({GLOW_COLOR}, 0.2) 30%, transparent 70%); \
             left: {left}px; top: {top}px; pointer-events: none; z-index: 1000; \
             transform: scale(0); opacity: 1; \
             transition: transform 0.8s ease-out, opacity 0.8s ease-out;",
            d = self.diameter,
            left = self.left,
            top = self.top,
        )
    }
}

/// Distance from the cursor to a card, measured from the card center minus half its larger side.
pub fn effective_distance(card: Rect, cursor: Point) -> f64 {
    let raw = cursor.distance_to(card.center()) - card.width.max(card.height) / 2.0;
    raw.max(0.0)
}

fn falloff(distance: f64, config: &BentoConfig) -> f64 {
    let (proximity, fade) = (config.proximity(), config.fade_distance());
    if distance <= proximity {
        1.0
    } else if distance <= fade {
        (fade - distance) / (fade - proximity)
    } else {
        0.0
    }
}

pub fn glow_intensity(card: Rect, cursor: Point, config: &BentoConfig) -> f64 {
    falloff(effective_distance(card, cursor), config)
}

/// Spotlight opacity from the nearest card, scaled to the spotlight's peak opacity.
pub fn spotlight_opacity(min_distance: f64, config: &BentoConfig) -> f64 {
    falloff(min_distance, config) * SPOTLIGHT_MAX_OPACITY
}

/// Custom properties written onto one card while the cursor is inside the section.
#[derive(Clone, Debug, PartialEq)]
pub struct CardGlow {
    pub x_percent: f64,
    pub y_percent: f64,
    pub intensity: f64,
    pub distance: f64,
}

pub fn card_glow(card: Rect, cursor: Point, config: &BentoConfig) -> CardGlow {
    let local = card.local(cursor);
    CardGlow {
        x_percent: local.x / card.width * 100.0,
        y_percent: local.y / card.height * 100.0,
        intensity: glow_intensity(card, cursor, config),
        distance: effective_distance(card, cursor),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightFrame {
    pub opacity: f64,
    pub glows: Vec<CardGlow>,
}

impl SpotlightFrame {
    pub fn transition(&self) -> &'static str {
        if self.opacity > 0.0 {
            "opacity 0.2s"
        } else {
            "opacity 0.5s"
        }
    }
}

/// Spotlight state for a cursor position; `None` when the cursor is outside the section.
pub fn spotlight_frame(
    section: Rect,
    cards: &[Rect],
    cursor: Point,
    config: &BentoConfig,
) -> Option<SpotlightFrame> {
    if !section.contains(cursor) {
        return None;
    }

    let glows: Vec<CardGlow> = cards
        .iter()
        .map(|card| card_glow(*card, cursor, config))
        .collect();
    let min_distance = glows
        .iter()
        .map(|glow| glow.distance)
        .fold(f64::INFINITY, f64::min);

    Some(SpotlightFrame {
        opacity: spotlight_opacity(min_distance, config),
        glows,
    })
}

pub fn spotlight_background() -> String {
    format!(
        "radial-gradient(circle, rgba({c}, 0.15) 0%, rgba({c}, 0.08) 15%, rgba({c}, 0.04) 25%, \
         rgba({c}, 0.02) 40%, rgba({c}, 0.01) 65%, transparent 70%)",
        c = GLOW_COLOR
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_reaches_farthest_corner() {
        let ripple = Ripple::at(300.0, 400.0, Point::new(0.0, 0.0));
        assert_eq!(ripple.diameter, 1_000.0);
        assert_eq!((ripple.left, ripple.top), (-500.0, -500.0));

        let centered = Ripple::at(300.0, 400.0, Point::new(150.0, 200.0));
        assert_eq!(centered.diameter, 500.0);
    }

    #[test]
    fn ripple_from_near_corner_uses_opposite_corner() {
        let ripple = Ripple::at(100.0, 100.0, Point::new(90.0, 90.0));
        let expected = 2.0 * 90.0_f64.hypot(90.0);
        assert!((ripple.diameter - expected).abs() < 1e-9);
    }

    #[test]
    fn ripple_is_removed_within_800ms() {
        assert!(RIPPLE_LIFETIME_MS <= 800);
        assert!(RIPPLE_START_DELAY_MS < RIPPLE_LIFETIME_MS);
    }

    #[test]
    fn card_targets_follow_pointer_and_reset_on_leave() {
        let card = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut motion = CardMotion::default();
        motion.pointer_enter();
        motion.pointer_move(card, Point::new(200.0, 0.0));
        assert_eq!(motion.target.rotate_x, 10.0);
        assert_eq!(motion.target.rotate_y, 10.0);
        assert_eq!(motion.target.x, 5.0);
        assert_eq!(motion.target.y, -5.0);

        motion.pointer_leave();
        assert!(!motion.is_hovered());
        assert_eq!(motion.target, Motion::default());
    }

    #[test]
    fn offset_eases_faster_than_rotation() {
        let card = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut motion = CardMotion::default();
        motion.pointer_move(card, Point::new(200.0, 100.0));
        let frame = motion.step();
        assert!((frame.rotate_y - 1.5).abs() < 1e-12);
        assert!((frame.x - 1.5).abs() < 1e-12);
        let frame = motion.step();
        assert!((frame.x - (1.5 + 3.5 * 0.3)).abs() < 1e-12);
    }

    #[test]
    fn glow_is_full_near_and_fades_linearly() {
        let config = BentoConfig::default();
        let card = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(glow_intensity(card, Point::new(50.0, 50.0), &config), 1.0);
        // 50 (half side) + 187.5 puts the cursor midway through the fade band.
        let mid = glow_intensity(card, Point::new(50.0 + 50.0 + 187.5, 50.0), &config);
        assert!((mid - 0.5).abs() < 1e-12);
        assert_eq!(glow_intensity(card, Point::new(1_000.0, 50.0), &config), 0.0);
    }

    #[test]
    fn spotlight_hidden_outside_section() {
        let config = BentoConfig::default();
        let section = Rect::new(0.0, 0.0, 500.0, 500.0);
        let cards = [Rect::new(0.0, 0.0, 100.0, 100.0)];
        assert!(spotlight_frame(section, &cards, Point::new(600.0, 10.0), &config).is_none());
    }

    #[test]
    fn spotlight_uses_nearest_card() {
        let config = BentoConfig::default();
        let section = Rect::new(0.0, 0.0, 2_000.0, 1_000.0);
        let cards = [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(1_800.0, 0.0, 100.0, 100.0),
        ];
        let frame = spotlight_frame(section, &cards, Point::new(60.0, 60.0), &config).unwrap();
        assert_eq!(frame.opacity, SPOTLIGHT_MAX_OPACITY);
        assert_eq!(frame.glows[0].intensity, 1.0);
        assert_eq!(frame.glows[1].intensity, 0.0);
        assert_eq!(frame.transition(), "opacity 0.2s");
        assert!((frame.glows[0].x_percent - 60.0).abs() < 1e-12);
    }

    #[test]
    fn spotlight_fades_out_far_from_cards() {
        let config = BentoConfig::default();
        let section = Rect::new(0.0, 0.0, 2_000.0, 1_000.0);
        let cards = [Rect::new(0.0, 0.0, 100.0, 100.0)];
        let frame = spotlight_frame(section, &cards, Point::new(1_500.0, 900.0), &config).unwrap();
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.transition(), "opacity 0.5s");
    }

    #[test]
    fn floating_particle_path_is_periodic() {
        let mut rng = fastrand::Rng::with_seed(3);
        let particle = FloatingParticle::spawn(&mut rng, 200.0, 100.0);
        assert!(particle.period_ms() >= 2_000.0 && particle.period_ms() < 4_000.0);
        assert!(particle.origin.x <= 200.0 && particle.origin.y <= 100.0);

        let start = particle.frame(0.0);
        assert_eq!(start.rotation, 0.0);
        assert!((start.opacity - 0.3).abs() < 1e-12);

        let later = particle.frame(particle.period_ms() * 1.25);
        let quarter = particle.frame(particle.period_ms() * 0.25);
        assert!((later.dx - quarter.dx).abs() < 1e-9);
        assert!((quarter.opacity - 1.0).abs() < 1e-9);
        assert!((quarter.rotation - 90.0).abs() < 1e-9);
    }

    #[test]
    fn mobile_threshold_is_inclusive() {
        assert!(is_mobile(768.0));
        assert!(!is_mobile(769.0));
    }
}
