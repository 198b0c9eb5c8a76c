use fastrand::Rng;

/// Size of the drawing surface in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    /// Moves one frame and bounces off any wall the particle has crossed.
    ///
    /// Only velocity pointing further out is flipped, so a particle left
    /// outside after a resize keeps heading back in.
    pub fn advance(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;

        if (self.x < 0.0 && self.vx < 0.0) || (self.x > bounds.width && self.vx > 0.0) {
            self.vx = -self.vx;
        }
        if (self.y < 0.0 && self.vy < 0.0) || (self.y > bounds.height && self.vy > 0.0) {
            self.vy = -self.vy;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// Each velocity component is drawn from [-max_speed, max_speed).
    pub max_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub color: (u8, u8, u8),
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 0.25,
            min_size: 1.0,
            max_size: 3.0,
            min_opacity: 0.2,
            max_opacity: 0.7,
            color: (34, 197, 94),
        }
    }
}

impl ParticleConfig {
    pub fn fill_style(&self, opacity: f64) -> String {
        let (r, g, b) = self.color;
        format!("rgba({r}, {g}, {b}, {opacity})")
    }
}

fn between(rng: &mut Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// The full set of background particles. The count never changes after spawn.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
}

impl ParticleField {
    pub fn spawn(config: &ParticleConfig, bounds: Bounds, rng: &mut Rng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.f64() * bounds.width,
                y: rng.f64() * bounds.height,
                vx: between(rng, -config.max_speed, config.max_speed),
                vy: between(rng, -config.max_speed, config.max_speed),
                size: between(rng, config.min_size, config.max_size),
                opacity: between(rng, config.min_opacity, config.max_opacity),
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        self.particles.iter_mut().for_each(|p| p.advance(bounds));
    }

    /// Positions are left as they are; the next frames bring strays back.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
