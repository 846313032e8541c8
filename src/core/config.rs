use std::ops::Range;

/// How raw low-band energy is shaped before it drives the deformation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BassResponse {
    /// Use the band mean as-is: smooth, breathing response.
    Smooth,
    /// Noise-gate and amplify the band mean: percussive attack response.
    /// `threshold` is subtracted from the normalized mean before `gain` is
    /// applied; the result is clamped back to \[0, 1\].
    Kick { threshold: f32, gain: f32 },
}

/// Declarative tuning for one visualizer variant.
///
/// The original page shipped four forked copies of the same script differing
/// only in these numbers; here every variant is a value of this type.
#[derive(Clone, Debug)]
pub struct VizConfig {
    /// AnalyserNode fftSize; the spectrum snapshot has `fft_size / 2` bins.
    pub fft_size: u32,
    pub min_decibels: f64,
    pub max_decibels: f64,
    /// Low-index bin range averaged into bass energy.
    pub bass_bins: Range<usize>,
    /// Mid-index bin range averaged into treble energy.
    pub treble_bins: Range<usize>,
    pub bass_response: BassResponse,
    /// Base sphere radius R, world units.
    pub base_radius: f32,
    /// Bass energy to impact units (bounded outward growth).
    pub impact_gain: f32,
    /// World units added per impact unit.
    pub bass_distance_gain: f32,
    /// Treble ripple amplitude, world units at full treble.
    pub spike_gain: f32,
    /// Spatial frequency of the treble ripple along x.
    pub spike_frequency: f32,
    /// Idle yaw per frame.
    pub base_spin: f32,
    /// Extra yaw per frame at full bass.
    pub bass_spin_gain: f32,
}

impl VizConfig {
    /// The tuning of the latest source variant: wide decibel range for quiet
    /// material, smooth bass, moderate growth cap.
    pub fn classic() -> Self {
        Self {
            fft_size: 512,
            min_decibels: -90.0,
            max_decibels: -10.0,
            bass_bins: 0..15,
            treble_bins: 100..150,
            bass_response: BassResponse::Smooth,
            base_radius: 16.0,
            impact_gain: 2.5,
            bass_distance_gain: 2.0,
            spike_gain: 1.5,
            spike_frequency: 8.0,
            base_spin: 0.003,
            bass_spin_gain: 0.04,
        }
    }

    /// Gated, amplified bass for a percussive response to kick drums.
    pub fn punchy() -> Self {
        Self {
            fft_size: 256,
            min_decibels: -85.0,
            max_decibels: -15.0,
            bass_bins: 0..8,
            treble_bins: 64..110,
            bass_response: BassResponse::Kick {
                threshold: 0.3,
                gain: 1.8,
            },
            base_radius: 16.0,
            impact_gain: 2.2,
            bass_distance_gain: 2.0,
            spike_gain: 1.2,
            spike_frequency: 8.0,
            base_spin: 0.003,
            bass_spin_gain: 0.05,
        }
    }

    /// Small analysis window for low-powered devices.
    pub fn lowend() -> Self {
        Self {
            fft_size: 128,
            min_decibels: -100.0,
            max_decibels: -20.0,
            bass_bins: 0..5,
            treble_bins: 40..60,
            bass_response: BassResponse::Smooth,
            base_radius: 16.0,
            impact_gain: 2.0,
            bass_distance_gain: 2.0,
            spike_gain: 1.0,
            spike_frequency: 6.0,
            base_spin: 0.003,
            bass_spin_gain: 0.04,
        }
    }

    /// Exaggerated treble ripple and spin for bright, busy material.
    pub fn bright() -> Self {
        Self {
            fft_size: 512,
            min_decibels: -80.0,
            max_decibels: -20.0,
            bass_bins: 0..10,
            treble_bins: 120..160,
            bass_response: BassResponse::Smooth,
            base_radius: 16.0,
            impact_gain: 2.5,
            bass_distance_gain: 2.0,
            spike_gain: 2.0,
            spike_frequency: 10.0,
            base_spin: 0.004,
            bass_spin_gain: 0.04,
        }
    }

    /// Number of bins in a spectrum snapshot for this config.
    pub fn bin_count(&self) -> usize {
        self.fft_size as usize / 2
    }

    /// Largest radial distance any vertex can reach: base radius, a full
    /// standing wave, full bass impact and a full treble spike.
    pub fn max_radius(&self) -> f32 {
        self.base_radius + 1.0 + self.impact_gain * self.bass_distance_gain + self.spike_gain
    }

    /// Structural sanity: band ranges inside the snapshot, positive gains.
    pub fn is_valid(&self) -> bool {
        let bins = self.bin_count();
        self.fft_size.is_power_of_two()
            && !self.bass_bins.is_empty()
            && !self.treble_bins.is_empty()
            && self.bass_bins.end <= bins
            && self.treble_bins.end <= bins
            && self.min_decibels < self.max_decibels
            && self.base_radius > 0.0
            && self.impact_gain >= 0.0
            && self.spike_gain >= 0.0
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self::classic()
    }
}
