use shared::domain::SteeringParameters;

/// Presentation transforms derived from a parameter snapshot: an image
/// filter triple plus rotation and tint inputs. Deterministic and
/// monotonic in each field; how a frontend paints it is its own business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewFrame {
    pub brightness_factor: f64,
    pub contrast_factor: f64,
    pub saturation_factor: f64,
    pub rotation_deg: f64,
    pub style_blend: f64,
    pub morph_shift: f64,
}

/// Pure mapping from parameters to preview transforms.
pub fn preview_frame(params: &SteeringParameters) -> PreviewFrame {
    PreviewFrame {
        brightness_factor: params.brightness,
        contrast_factor: params.contrast,
        saturation_factor: params.saturation,
        rotation_deg: params.camera_angle_deg,
        style_blend: params.style_intensity,
        morph_shift: params.latent_morph,
    }
}
