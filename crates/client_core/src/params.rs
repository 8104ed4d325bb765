use rand::Rng;
use shared::domain::{
    self, SteeringParameters, BRIGHTNESS, CAMERA_ANGLE_DEG, CONTRAST, LATENT_MORPH, SATURATION,
    STYLE_INTENSITY,
};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Owned store for the current steering parameters. The setters are the
/// only mutation path and every setter clamps to the declared domain, so a
/// snapshot taken at any point is in-domain.
#[derive(Debug, Default)]
pub struct ParameterStore {
    current: SteeringParameters,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SteeringParameters {
        self.current
    }

    pub fn set_brightness(&mut self, value: f64) {
        self.current.brightness = BRIGHTNESS.clamp(value);
    }

    pub fn set_contrast(&mut self, value: f64) {
        self.current.contrast = CONTRAST.clamp(value);
    }

    pub fn set_saturation(&mut self, value: f64) {
        self.current.saturation = SATURATION.clamp(value);
    }

    pub fn set_camera_angle_deg(&mut self, value: f64) {
        self.current.camera_angle_deg = CAMERA_ANGLE_DEG.clamp(value);
    }

    pub fn set_style_intensity(&mut self, value: f64) {
        self.current.style_intensity = STYLE_INTENSITY.clamp(value);
    }

    pub fn set_latent_morph(&mut self, value: f64) {
        self.current.latent_morph = LATENT_MORPH.clamp(value);
    }

    /// Restore every parameter to its domain default.
    pub fn reset(&mut self) {
        self.current = SteeringParameters::default();
    }

    /// Draw each parameter independently and uniformly over its domain.
    /// Camera angle lands on a whole degree; everything else on two
    /// decimals. The RNG is injected so tests can seed it.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let uniform = |rng: &mut R, d: &domain::ParamDomain| rng.gen_range(d.min..=d.max);
        self.current = SteeringParameters {
            brightness: round2(uniform(rng, &BRIGHTNESS)),
            contrast: round2(uniform(rng, &CONTRAST)),
            saturation: round2(uniform(rng, &SATURATION)),
            camera_angle_deg: uniform(rng, &CAMERA_ANGLE_DEG).round(),
            style_intensity: round2(uniform(rng, &STYLE_INTENSITY)),
            latent_morph: round2(uniform(rng, &LATENT_MORPH)),
        };
    }
}
