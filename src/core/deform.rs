use super::color::hsl_to_rgb;
use super::config::VizConfig;
use super::constants::{
    BASE_HUE, EMISSIVE_BASS_SPAN, HUE_BASS_SPAN, LIGHTNESS_BASE, LIGHTNESS_TREBLE_SPAN, ROLL_SPIN,
    WAVE_FREQUENCY,
};
use super::spectrum::BandEnergy;
use glam::{Mat4, Vec3};

/// Surface and emissive tint for the current frame. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbColor {
    pub surface: [f32; 3],
    pub emissive: [f32; 3],
}

/// Accumulated orientation of the orb. The only deformation state that
/// survives across frames; vertex positions are recomputed from scratch.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrbState {
    pub yaw: f32,
    pub roll: f32,
}

impl OrbState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance rotation one frame; the orb spins faster on beats.
    pub fn advance_rotation(&mut self, energy: BandEnergy, config: &VizConfig) {
        self.yaw += config.base_spin + energy.bass * config.bass_spin_gain;
        self.roll += ROLL_SPIN;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.roll) * Mat4::from_rotation_y(self.yaw)
    }
}

/// Idle breathing term: a smooth function of base position and time only,
/// independent of audio input.
pub fn standing_wave(base: Vec3, phase: f32) -> f32 {
    (base.x * WAVE_FREQUENCY + phase * 2.0).sin() * (base.y * WAVE_FREQUENCY + phase).cos()
}

/// Radial distance for one vertex: base radius plus the standing wave, a
/// bounded bass impact and a treble-scaled spatial ripple.
pub fn radial_distance(base: Vec3, energy: BandEnergy, phase: f32, config: &VizConfig) -> f32 {
    let impact = energy.bass * config.impact_gain;
    let spike = (base.x * config.spike_frequency + phase * 8.0).sin() * energy.treble;
    config.base_radius
        + standing_wave(base, phase)
        + impact * config.bass_distance_gain
        + spike * config.spike_gain
}

/// Overwrite `live` with the deformed positions. Radial only: every vertex
/// keeps the direction of its base position exactly, so the orb pulses and
/// spikes but never shears.
pub fn displace(
    base: &[Vec3],
    live: &mut [Vec3],
    energy: BandEnergy,
    phase: f32,
    config: &VizConfig,
) {
    debug_assert_eq!(base.len(), live.len());
    for (b, out) in base.iter().zip(live.iter_mut()) {
        let dist = radial_distance(*b, energy, phase, config);
        *out = b.normalize() * dist;
    }
}

/// Hue drifts brighter with bass; lightness rises with treble; emissive
/// intensity follows bass. Silence settles on the dim base green.
pub fn orb_color(energy: BandEnergy) -> OrbColor {
    let hue = BASE_HUE + energy.bass * HUE_BASS_SPAN;
    OrbColor {
        surface: hsl_to_rgb(hue, 1.0, LIGHTNESS_BASE + energy.treble * LIGHTNESS_TREBLE_SPAN),
        emissive: hsl_to_rgb(hue, 1.0, energy.bass * EMISSIVE_BASS_SPAN),
    }
}
