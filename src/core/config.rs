use super::constants::{
    CARD_SMOOTHING, GRADIENT_SMOOTHING, PARTICLE_DENSITY_DIVISOR, TILT_MAX_ROTATION_DEG,
    TILT_MAX_TRANSLATE_PX,
};
use super::error::FxError;

/// Runtime tunables for the snowfall and pointer effects.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub density_divisor: f64,
    pub gradient_smoothing: f64,
    pub card_smoothing: f64,
    pub tilt_max_rotation_deg: f64,
    pub tilt_max_translate_px: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            density_divisor: PARTICLE_DENSITY_DIVISOR,
            gradient_smoothing: GRADIENT_SMOOTHING,
            card_smoothing: CARD_SMOOTHING,
            tilt_max_rotation_deg: TILT_MAX_ROTATION_DEG,
            tilt_max_translate_px: TILT_MAX_TRANSLATE_PX,
        }
    }
}

impl EffectsConfig {
    pub fn validate(&self) -> Result<(), FxError> {
        if !(self.density_divisor > 0.0 && self.density_divisor.is_finite()) {
            return Err(invalid("density_divisor", self.density_divisor));
        }
        for (field, value) in [
            ("gradient_smoothing", self.gradient_smoothing),
            ("card_smoothing", self.card_smoothing),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(field, value));
            }
        }
        Ok(())
    }

    /// Returns a copy with `density_divisor` replaced, if the result validates.
    pub fn with_density_divisor(&self, density_divisor: f64) -> Result<Self, FxError> {
        let cfg = Self {
            density_divisor,
            ..self.clone()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Returns a copy with the gradient smoothing replaced, if the result validates.
    pub fn with_gradient_smoothing(&self, smoothing: f64) -> Result<Self, FxError> {
        let cfg = Self {
            gradient_smoothing: smoothing,
            ..self.clone()
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn invalid(field: &'static str, value: f64) -> FxError {
    FxError::InvalidConfig { field, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EffectsConfig::default().validate().is_ok());
    }

    #[test]
    fn override_rejects_zero_divisor() {
        let err = EffectsConfig::default().with_density_divisor(0.0).unwrap_err();
        assert_eq!(
            err,
            FxError::InvalidConfig {
                field: "density_divisor",
                value: 0.0
            }
        );
    }
}
