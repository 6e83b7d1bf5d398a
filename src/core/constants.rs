/// Snowfall and pointer-effect tuning constants.
///
/// These express intended behavior (sampling ranges, per-frame increments,
/// effect limits) and keep magic numbers out of the simulation code.
// One particle per this many horizontal pixels
pub const PARTICLE_DENSITY_DIVISOR: f64 = 25.0;

// Particle radius is sampled from [RADIUS_MIN, RADIUS_MAX)
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_MAX: f64 = 4.0;

// Global oscillation angle advance per frame (radians)
pub const ANGLE_STEP_PER_FRAME: f64 = 0.01;

// Upper bound on particles per field, whatever the divisor
pub const MAX_PARTICLES: usize = 4096;

// Horizontal sway amplitude applied to every particle per frame
pub const DRIFT_AMPLITUDE: f64 = 2.0;

// y a particle restarts from after falling past the bottom edge
pub const WRAP_RESET_Y: f64 = -10.0;

// Pointer-follow easing factors (fraction of remaining distance per frame)
pub const GRADIENT_SMOOTHING: f64 = 0.08;
pub const CARD_SMOOTHING: f64 = 0.2;

// Card tilt limits at the card edges
pub const TILT_MAX_ROTATION_DEG: f64 = 5.0;
pub const TILT_MAX_TRANSLATE_PX: f64 = 6.0;

// Backdrop images shown before and after the splash is opened
pub const INTRO_BACKDROP_URL: &str = "/bg1.jpg";
pub const STAGE_BACKDROP_URL: &str = "/bg2.jpg";
