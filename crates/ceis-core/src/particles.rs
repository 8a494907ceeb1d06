//! Ambient particle field that morphs into constellations
//!
//! 150 drifting stars; selecting a sign promotes the first K of them to
//! "hero" status and eases each one toward a shape point. The view layer
//! calls [`ParticleField::tick`] once per animation frame and reads back
//! positions and edges to draw.

use rand::Rng;

use crate::zodiac;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 150;

/// Margin kept between shape points and the field border, in pixels.
pub const SHAPE_PADDING: f32 = 40.0;

/// Fraction of the remaining distance a hero covers per tick.
const EASE: f32 = 0.05;

const ALPHA_MIN: f32 = 0.2;
const ALPHA_MAX: f32 = 1.0;

/// One star of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Oscillates between [`ALPHA_MIN`] and [`ALPHA_MAX`]
    pub alpha: f32,
    pulse: f32,
    drift_x: f32,
    drift_y: f32,
    /// Set while the particle is a hero assigned to a shape point
    pub target: Option<(f32, f32)>,
}

impl Particle {
    pub fn is_hero(&self) -> bool {
        self.target.is_some()
    }
}

/// The particle set, exclusively owned by the picker widget.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    heroes: Vec<usize>,
    active_sign: Option<&'static str>,
}

impl ParticleField {
    /// Seed a fresh field with random positions, sizes, and drift.
    pub fn new(width: f32, height: f32) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                size: rng.random_range(0.5..2.5),
                alpha: rng.random_range(ALPHA_MIN..ALPHA_MAX),
                pulse: 0.02 + rng.random::<f32>() * 0.03,
                drift_x: (rng.random::<f32>() - 0.5) * 0.2,
                drift_y: (rng.random::<f32>() - 0.5) * 0.2,
                target: None,
            })
            .collect();
        Self {
            width,
            height,
            particles,
            heroes: Vec::new(),
            active_sign: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Indices of the particles currently forming the active shape.
    pub fn heroes(&self) -> &[usize] {
        &self.heroes
    }

    pub fn active_sign(&self) -> Option<&'static str> {
        self.active_sign
    }

    /// Activate a constellation: release all current heroes, then assign
    /// the first K particles to the shape's points, targets mapped into the
    /// padded drawing area. Unknown names are a no-op; re-selecting the
    /// active sign re-runs assignment identically.
    pub fn set_shape(&mut self, name: &str) {
        let Some(shape) = zodiac::constellation(name) else {
            return;
        };

        for particle in &mut self.particles {
            particle.target = None;
        }
        self.heroes.clear();

        let avail_w = (self.width - 2.0 * SHAPE_PADDING).max(0.0);
        let avail_h = (self.height - 2.0 * SHAPE_PADDING).max(0.0);
        for (i, &(nx, ny)) in shape.points.iter().enumerate() {
            let particle = &mut self.particles[i];
            particle.target = Some((SHAPE_PADDING + nx * avail_w, SHAPE_PADDING + ny * avail_h));
            self.heroes.push(i);
        }
        self.active_sign = Some(shape.name);
    }

    /// Advance one animation frame: oscillate alpha, ease heroes toward
    /// their targets, drift and wrap everything else.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.alpha += particle.pulse;
            if particle.alpha > ALPHA_MAX || particle.alpha < ALPHA_MIN {
                particle.pulse = -particle.pulse;
            }

            match particle.target {
                Some((tx, ty)) => {
                    particle.x += (tx - particle.x) * EASE;
                    particle.y += (ty - particle.y) * EASE;
                }
                None => {
                    particle.x += particle.drift_x;
                    particle.y += particle.drift_y;
                    if particle.x < 0.0 {
                        particle.x = self.width;
                    } else if particle.x > self.width {
                        particle.x = 0.0;
                    }
                    if particle.y < 0.0 {
                        particle.y = self.height;
                    } else if particle.y > self.height {
                        particle.y = 0.0;
                    }
                }
            }
        }
    }

    /// Track the container size. Particle state is preserved; an active
    /// shape has its targets re-projected into the new drawing area.
    pub fn resize(&mut self, width: f32, height: f32) {
        let width = width.max(1.0);
        let height = height.max(1.0);
        if (width - self.width).abs() < f32::EPSILON
            && (height - self.height).abs() < f32::EPSILON
        {
            return;
        }
        self.width = width;
        self.height = height;
        if let Some(name) = self.active_sign {
            self.set_shape(name);
        }
    }

    /// Current endpoint positions of the active shape's edges, in draw
    /// order. Empty while no sign is active.
    pub fn edges(&self) -> Vec<((f32, f32), (f32, f32))> {
        let Some(shape) = self.active_sign.and_then(zodiac::constellation) else {
            return Vec::new();
        };
        shape
            .edges
            .iter()
            .filter_map(|&(a, b)| {
                let p1 = self.heroes.get(a).and_then(|&i| self.particles.get(i))?;
                let p2 = self.heroes.get(b).and_then(|&i| self.particles.get(i))?;
                Some(((p1.x, p1.y), (p2.x, p2.y)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_the_full_population() {
        let field = ParticleField::new(480.0, 250.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert!(field.heroes().is_empty());
        assert!(field.active_sign().is_none());
    }

    #[test]
    fn leo_promotes_exactly_eight_heroes() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Leo");
        assert_eq!(field.heroes().len(), 8);
        assert_eq!(field.particles().iter().filter(|p| p.is_hero()).count(), 8);
        assert_eq!(field.edges().len(), 8);
    }

    #[test]
    fn unknown_sign_is_a_noop() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Ophiuchus");
        assert!(field.active_sign().is_none());
        assert!(field.heroes().is_empty());
        assert!(field.edges().is_empty());
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Aries");
        let targets: Vec<_> = field.particles().iter().map(|p| p.target).collect();
        field.set_shape("Aries");
        let again: Vec<_> = field.particles().iter().map(|p| p.target).collect();
        assert_eq!(targets, again);
    }

    #[test]
    fn switching_sign_retargets_heroes() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Scorpio");
        assert_eq!(field.heroes().len(), 9);
        field.set_shape("Aries");
        assert_eq!(field.heroes().len(), 4);
        assert_eq!(field.particles().iter().filter(|p| p.is_hero()).count(), 4);
    }

    #[test]
    fn heroes_converge_on_their_targets() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Libra");
        for _ in 0..500 {
            field.tick();
        }
        for &i in field.heroes() {
            let p = &field.particles()[i];
            let (tx, ty) = p.target.unwrap();
            assert!((p.x - tx).abs() < 1.0 && (p.y - ty).abs() < 1.0);
        }
    }

    #[test]
    fn targets_stay_inside_the_padded_area() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Aquarius");
        for &i in field.heroes() {
            let (tx, ty) = field.particles()[i].target.unwrap();
            assert!(tx >= SHAPE_PADDING && tx <= 480.0 - SHAPE_PADDING);
            assert!(ty >= SHAPE_PADDING && ty <= 250.0 - SHAPE_PADDING);
        }
    }

    #[test]
    fn resize_preserves_state_and_reprojects() {
        let mut field = ParticleField::new(480.0, 250.0);
        field.set_shape("Taurus");
        let count_before = field.particles().len();
        field.resize(800.0, 400.0);
        assert_eq!(field.particles().len(), count_before);
        assert_eq!(field.active_sign(), Some("Taurus"));
        for &i in field.heroes() {
            let (tx, _) = field.particles()[i].target.unwrap();
            assert!(tx <= 800.0 - SHAPE_PADDING);
        }
    }

    #[test]
    fn alpha_stays_bounded() {
        let mut field = ParticleField::new(480.0, 250.0);
        for _ in 0..1000 {
            field.tick();
        }
        for p in field.particles() {
            // one overshooting step past a bound is allowed before reversal
            assert!(p.alpha > 0.1 && p.alpha < 1.1);
        }
    }
}
