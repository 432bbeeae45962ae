use super::Point;

pub const PARTICLE_SPACING: f64 = 15.0;
pub const DEFAULT_MAX_PARTICLES: usize = 100;
pub const MAX_PARTICLES_BOUNDS: (usize, usize) = (1, 400);
pub const DEFAULT_LINK_DISTANCE: f64 = 150.0;
pub const LINK_DISTANCE_BOUNDS: (f64, f64) = (20.0, 400.0);
pub const LINK_MAX_ALPHA: f64 = 0.15;
pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.3)";
const MAX_SPEED: f64 = 0.25;
const MIN_RADIUS: f64 = 0.5;
const RADIUS_SPREAD: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    fn seeded(rng: &mut fastrand::Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            vx: (rng.f64() - 0.5) * 2.0 * MAX_SPEED,
            vy: (rng.f64() - 0.5) * 2.0 * MAX_SPEED,
            radius: rng.f64() * RADIUS_SPREAD + MIN_RADIUS,
        }
    }

    /// Advances one frame, reflecting each axis independently once it leaves the canvas.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub alpha: f64,
}

impl Link {
    pub fn stroke_style(&self) -> String {
        format!("rgba(255, 255, 255, {})", self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub link_distance: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_MAX_PARTICLES,
            link_distance: DEFAULT_LINK_DISTANCE,
        }
    }
}

pub fn particle_count(viewport_width: f64, max_particles: usize) -> usize {
    let by_width = (viewport_width / PARTICLE_SPACING).floor().max(0.0) as usize;
    by_width.min(max_particles)
}

/// Stroke alpha for two particles `distance` apart, `None` at or past the threshold.
pub fn link_alpha(distance: f64, link_distance: f64) -> Option<f64> {
    (distance < link_distance).then(|| LINK_MAX_ALPHA * (1.0 - distance / link_distance))
}

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            particles: Vec::new(),
        };
        field.reseed(width, height, rng);
        field
    }

    /// Replaces every particle for a new canvas size; nothing carries over.
    pub fn reseed(&mut self, width: f64, height: f64, rng: &mut fastrand::Rng) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, self.config.max_particles);
        self.particles = (0..count)
            .map(|_| Particle::seeded(rng, width, height))
            .collect();
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position().distance_to(b.position());
                if let Some(alpha) = link_alpha(distance, self.config.link_distance) {
                    links.push(Link {
                        from: a.position(),
                        to: b.position(),
                        alpha,
                    });
                }
            }
        }
        links
    }

    #[cfg(test)]
    fn with_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            config: FieldConfig::default(),
            width,
            height,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
        }
    }

    #[test]
    fn count_follows_width_and_caps_at_max() {
        assert_eq!(particle_count(300.0, DEFAULT_MAX_PARTICLES), 20);
        assert_eq!(particle_count(314.0, DEFAULT_MAX_PARTICLES), 20);
        assert_eq!(particle_count(1920.0, DEFAULT_MAX_PARTICLES), 100);
        assert_eq!(particle_count(0.0, DEFAULT_MAX_PARTICLES), 0);
    }

    #[test]
    fn reseed_drops_previous_particles() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut field = ParticleField::new(FieldConfig::default(), 1920.0, 1080.0, &mut rng);
        assert_eq!(field.particles().len(), 100);

        field.reseed(450.0, 800.0, &mut rng);
        assert_eq!(field.particles().len(), 30);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.x <= 450.0 && p.y <= 800.0));
    }

    #[test]
    fn seeded_particles_stay_within_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        let field = ParticleField::new(FieldConfig::default(), 1200.0, 700.0, &mut rng);
        for p in field.particles() {
            assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
            assert!(p.radius >= MIN_RADIUS && p.radius < MIN_RADIUS + RADIUS_SPREAD);
        }
    }

    #[test]
    fn velocity_flips_once_per_axis_when_leaving_canvas() {
        let particle = Particle {
            x: 99.9,
            y: 50.0,
            vx: 0.2,
            vy: -0.1,
            radius: 1.0,
        };
        let mut field = ParticleField::with_particles(100.0, 100.0, vec![particle]);
        field.step();

        let moved = field.particles()[0];
        assert_eq!(moved.vx, -0.2);
        assert_eq!(moved.vy, -0.1);

        field.step();
        let back = field.particles()[0];
        assert!(back.x <= 100.0);
        assert_eq!(back.vx, -0.2);
    }

    #[test]
    fn vertical_reflection_is_independent() {
        let particle = Particle {
            x: 50.0,
            y: 0.05,
            vx: 0.1,
            vy: -0.1,
            radius: 1.0,
        };
        let mut field = ParticleField::with_particles(100.0, 100.0, vec![particle]);
        field.step();

        let moved = field.particles()[0];
        assert_eq!(moved.vx, 0.1);
        assert_eq!(moved.vy, 0.1);
    }

    #[test]
    fn link_alpha_fades_linearly_to_threshold() {
        assert_eq!(link_alpha(0.0, 150.0), Some(0.15));
        let half = link_alpha(75.0, 150.0).unwrap();
        assert!((half - 0.075).abs() < 1e-12);
        assert_eq!(link_alpha(150.0, 150.0), None);
        assert_eq!(link_alpha(200.0, 150.0), None);
    }

    #[test]
    fn links_cover_each_close_pair_once() {
        let field = ParticleField::with_particles(
            500.0,
            500.0,
            vec![still(0.0, 0.0), still(30.0, 40.0), still(400.0, 400.0)],
        );
        let links = field.links();
        assert_eq!(links.len(), 1);
        let expected = 0.15 * (1.0 - 50.0 / 150.0);
        assert!((links[0].alpha - expected).abs() < 1e-12);
        assert_eq!(links[0].from, Point::new(0.0, 0.0));
        assert_eq!(links[0].to, Point::new(30.0, 40.0));
    }
}
