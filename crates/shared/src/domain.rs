use serde::{Deserialize, Serialize};

/// Inclusive value range for a single steering parameter, with the value
/// `reset` restores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDomain {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParamDomain {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Coerce a raw input into this domain. NaN has no meaningful position
    /// on the range, so it maps to the default rather than a boundary.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const BRIGHTNESS: ParamDomain = ParamDomain::new(0.3, 1.7, 1.0);
pub const CONTRAST: ParamDomain = ParamDomain::new(0.5, 2.0, 1.0);
pub const SATURATION: ParamDomain = ParamDomain::new(0.0, 2.5, 1.0);
pub const CAMERA_ANGLE_DEG: ParamDomain = ParamDomain::new(-45.0, 45.0, 0.0);
pub const STYLE_INTENSITY: ParamDomain = ParamDomain::new(0.0, 1.0, 0.7);
pub const LATENT_MORPH: ParamDomain = ParamDomain::new(-1.0, 1.0, 0.0);

/// Immutable snapshot of the six steering parameters. Field names are the
/// wire names from the payload contract; serde emits them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringParameters {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub camera_angle_deg: f64,
    pub style_intensity: f64,
    pub latent_morph: f64,
}

impl Default for SteeringParameters {
    fn default() -> Self {
        Self {
            brightness: BRIGHTNESS.default,
            contrast: CONTRAST.default,
            saturation: SATURATION.default,
            camera_angle_deg: CAMERA_ANGLE_DEG.default,
            style_intensity: STYLE_INTENSITY.default,
            latent_morph: LATENT_MORPH.default,
        }
    }
}

impl SteeringParameters {
    /// True when every field sits inside its declared domain.
    pub fn in_domain(&self) -> bool {
        BRIGHTNESS.contains(self.brightness)
            && CONTRAST.contains(self.contrast)
            && SATURATION.contains(self.saturation)
            && CAMERA_ANGLE_DEG.contains(self.camera_angle_deg)
            && STYLE_INTENSITY.contains(self.style_intensity)
            && LATENT_MORPH.contains(self.latent_morph)
    }
}
