use super::constants::{
    ANGLE_STEP_PER_FRAME, DRIFT_AMPLITUDE, MAX_PARTICLES, PARTICLE_RADIUS_MAX,
    PARTICLE_RADIUS_MIN, WRAP_RESET_Y,
};
use super::error::FxError;
use glam::DVec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub radius: f64,
    /// Offset into the shared oscillation, sampled from [0, particle count).
    pub phase: f64,
}

/// Snapshot of one particle as handed to the drawing layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Falling-snow particle set bounded by a `width` x `height` field.
///
/// Particles wrap vertically only: anything that falls below the bottom edge
/// restarts just above the top at a fresh random `x`.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    density_divisor: f64,
    rng: StdRng,
}

/// Advances the shared oscillation angle by one frame.
#[inline]
pub fn advance_angle(angle: f64) -> f64 {
    angle + ANGLE_STEP_PER_FRAME
}

impl ParticleField {
    pub fn new(width: f64, height: f64, density_divisor: f64, seed: u64) -> Result<Self, FxError> {
        validate_divisor(density_divisor)?;
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            density_divisor,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        Ok(field)
    }

    /// Builds a field around an explicit particle set instead of sampling one.
    pub fn with_particles(
        width: f64,
        height: f64,
        density_divisor: f64,
        particles: Vec<Particle>,
        seed: u64,
    ) -> Result<Self, FxError> {
        validate_divisor(density_divisor)?;
        Ok(Self {
            particles,
            width,
            height,
            density_divisor,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles a field of `width` holds for this divisor,
    /// capped at `MAX_PARTICLES`.
    pub fn target_count(width: f64, density_divisor: f64) -> usize {
        if width.is_finite() && width > 0.0 {
            (width / density_divisor).floor().min(MAX_PARTICLES as f64) as usize
        } else {
            0
        }
    }

    /// Moves every particle one frame along the closed-form snowfall path.
    pub fn step(&mut self, global_angle: f64) {
        let sway = global_angle.sin() * DRIFT_AMPLITUDE;
        for p in &mut self.particles {
            p.position.y += (global_angle + p.phase).cos() + 1.0 + p.radius / 2.0;
            p.position.x += sway;
            if p.position.y > self.height {
                p.position.y = WRAP_RESET_Y;
                p.position.x = sample(&mut self.rng, self.width);
            }
        }
    }

    /// Discards all particles and samples a fresh set for the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
        log::debug!(
            "[snow] rebuilt field {:.0}x{:.0} with {} particles",
            width,
            height,
            self.particles.len()
        );
    }

    pub fn render_positions(&self) -> impl Iterator<Item = ParticleSprite> + '_ {
        self.particles.iter().map(|p| ParticleSprite {
            x: p.position.x,
            y: p.position.y,
            radius: p.radius,
        })
    }

    fn populate(&mut self) {
        let count = Self::target_count(self.width, self.density_divisor);
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                position: DVec2::new(sample(rng, width), sample(rng, height)),
                radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
                phase: sample(rng, count as f64),
            })
            .collect();
    }
}

fn validate_divisor(density_divisor: f64) -> Result<(), FxError> {
    if density_divisor > 0.0 && density_divisor.is_finite() {
        Ok(())
    } else {
        Err(FxError::InvalidConfig {
            field: "density_divisor",
            value: density_divisor,
        })
    }
}

// Uniform in [0, upper); collapses to 0 for an empty or degenerate range.
#[inline]
fn sample(rng: &mut StdRng, upper: f64) -> f64 {
    if upper > 0.0 && upper.is_finite() {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}
