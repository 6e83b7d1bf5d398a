// Host-side tests for the snowfall particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use core::constants::{ANGLE_STEP_PER_FRAME, MAX_PARTICLES, WRAP_RESET_Y};
use core::error::FxError;
use core::particles::*;
use glam::DVec2;

fn particle(x: f64, y: f64, radius: f64, phase: f64) -> Particle {
    Particle {
        position: DVec2::new(x, y),
        radius,
        phase,
    }
}

#[test]
fn create_builds_one_particle_per_divisor_width() {
    let field = ParticleField::new(500.0, 300.0, 25.0, 7).unwrap();
    assert_eq!(field.len(), 20);

    for (width, divisor) in [(0.0, 25.0), (24.9, 25.0), (1920.0, 25.0), (1000.0, 3.0)] {
        let field = ParticleField::new(width, 100.0, divisor, 1).unwrap();
        assert_eq!(field.len(), (width / divisor).floor() as usize);
    }
}

#[test]
fn created_particles_sample_within_ranges() {
    let field = ParticleField::new(800.0, 600.0, 10.0, 42).unwrap();
    let count = field.len() as f64;
    assert_eq!(count, 80.0);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert!(p.radius >= 1.0 && p.radius < 4.0, "radius {}", p.radius);
        assert!(p.phase >= 0.0 && p.phase < count, "phase {}", p.phase);
    }
}

#[test]
fn non_positive_width_gives_empty_field() {
    for width in [0.0, -50.0, f64::NAN] {
        let field = ParticleField::new(width, 300.0, 25.0, 3).unwrap();
        assert!(field.is_empty());
    }
}

#[test]
fn zero_height_places_particles_on_top_edge() {
    let field = ParticleField::new(100.0, 0.0, 25.0, 3).unwrap();
    assert_eq!(field.len(), 4);
    assert!(field.particles().iter().all(|p| p.position.y == 0.0));
}

#[test]
fn invalid_density_divisor_is_rejected() {
    for divisor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        match ParticleField::new(500.0, 300.0, divisor, 0) {
            Err(FxError::InvalidConfig { field, .. }) => assert_eq!(field, "density_divisor"),
            Ok(_) => panic!("divisor {divisor} accepted"),
        }
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(640.0, 480.0, 25.0, 99).unwrap();
    let b = ParticleField::new(640.0, 480.0, 25.0, 99).unwrap();
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn step_applies_closed_form_update() {
    let start = vec![
        particle(10.0, 20.0, 2.0, 0.5),
        particle(100.0, 0.0, 3.5, 7.0),
        particle(-40.0, 150.0, 1.0, 0.0),
    ];
    let mut field = ParticleField::with_particles(500.0, 300.0, 25.0, start.clone(), 1).unwrap();
    let angle = 0.37;
    field.step(angle);
    for (before, after) in start.iter().zip(field.particles()) {
        let y = before.position.y + ((angle + before.phase).cos() + 1.0 + before.radius / 2.0);
        let x = before.position.x + angle.sin() * 2.0;
        assert_eq!(after.position.y, y);
        assert_eq!(after.position.x, x);
        assert_eq!(after.radius, before.radius);
        assert_eq!(after.phase, before.phase);
    }
}

#[test]
fn step_near_bottom_moves_or_wraps() {
    // Particle at (10, 295) with radius 2 in a 300-tall field, angle 0
    for phase in [0.0, 1.0, 2.0, 3.0, 4.5] {
        let start = vec![particle(10.0, 295.0, 2.0, phase)];
        let mut field = ParticleField::with_particles(500.0, 300.0, 25.0, start, 11).unwrap();
        field.step(0.0);
        let p = field.particles()[0];
        let expected = 297.0 + f64::cos(phase);
        if expected > 300.0 {
            assert_eq!(p.position.y, WRAP_RESET_Y);
            assert!(p.position.x >= 0.0 && p.position.x < 500.0);
        } else {
            assert!((p.position.y - expected).abs() < 1e-9);
            assert_eq!(p.position.x, 10.0);
        }
    }
}

#[test]
fn wrapped_particle_restarts_above_top_with_fresh_x() {
    // cos(0) + 1 + 2 pushes y from 299 to 303
    let start = vec![particle(-999.0, 299.0, 4.0, 0.0)];
    let mut field = ParticleField::with_particles(500.0, 300.0, 25.0, start, 5).unwrap();
    field.step(0.0);
    let p = field.particles()[0];
    assert_eq!(p.position.y, -10.0);
    assert!(p.position.x >= 0.0 && p.position.x < 500.0);
}

#[test]
fn x_is_not_wrapped() {
    let start = vec![particle(499.0, 10.0, 1.0, 0.0)];
    let mut field = ParticleField::with_particles(500.0, 300.0, 25.0, start, 5).unwrap();
    let angle = std::f64::consts::FRAC_PI_2;
    for _ in 0..5 {
        field.step(angle);
    }
    assert!(field.particles()[0].position.x > 500.0);
}

#[test]
fn render_positions_is_a_repeatable_snapshot() {
    let mut field = ParticleField::new(400.0, 300.0, 25.0, 8).unwrap();
    let first: Vec<ParticleSprite> = field.render_positions().collect();
    let second: Vec<ParticleSprite> = field.render_positions().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), field.len());
    for (s, p) in first.iter().zip(field.particles()) {
        assert_eq!((s.x, s.y, s.radius), (p.position.x, p.position.y, p.radius));
    }

    field.step(0.2);
    let third: Vec<ParticleSprite> = field.render_positions().collect();
    assert_ne!(first, third);
}

#[test]
fn resize_recreates_for_new_bounds() {
    let mut field = ParticleField::new(500.0, 300.0, 25.0, 2).unwrap();
    let before = field.particles().to_vec();
    field.resize(1000.0, 200.0);
    assert_eq!(field.len(), 40);
    assert_eq!(field.width(), 1000.0);
    assert_eq!(field.height(), 200.0);
    assert_ne!(field.particles()[..before.len()], before[..]);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 1000.0);
        assert!(p.position.y >= 0.0 && p.position.y < 200.0);
        assert!(p.phase < 40.0);
    }

    field.resize(0.0, 0.0);
    assert!(field.is_empty());
}

#[test]
fn advance_angle_increments_monotonically() {
    let mut angle = 0.0;
    for _ in 0..1000 {
        let next = advance_angle(angle);
        assert!(next > angle);
        assert!((next - angle - ANGLE_STEP_PER_FRAME).abs() < 1e-9);
        angle = next;
    }
    assert!((angle - 10.0).abs() < 1e-9);
}

#[test]
fn long_run_keeps_particles_in_vertical_band() {
    let mut field = ParticleField::new(300.0, 200.0, 25.0, 13).unwrap();
    let mut angle = 0.0;
    for _ in 0..5000 {
        angle = advance_angle(angle);
        field.step(angle);
        for p in field.particles() {
            assert!(p.position.y >= WRAP_RESET_Y && p.position.y <= 200.0);
        }
    }
    assert_eq!(field.len(), 12);
}

#[test]
fn tiny_divisor_is_capped_instead_of_overflowing() {
    assert_eq!(ParticleField::target_count(500.0, 1e-300), MAX_PARTICLES);

    let field = ParticleField::new(500.0, 300.0, 1e-300, 5).unwrap();
    assert_eq!(field.len(), MAX_PARTICLES);
    for p in field.particles() {
        assert!(p.phase >= 0.0 && p.phase < MAX_PARTICLES as f64);
        assert!(p.position.x >= 0.0 && p.position.x < 500.0);
    }

    let mut field = ParticleField::new(100.0, 100.0, f64::MIN_POSITIVE, 5).unwrap();
    assert_eq!(field.len(), MAX_PARTICLES);
    field.resize(1e9, 100.0);
    assert_eq!(field.len(), MAX_PARTICLES);
}
