use super::config::{BassResponse, VizConfig};
use std::ops::Range;

/// Low/high band loudness for the current frame, each in \[0, 1\].
/// Derived fresh every frame from the spectrum snapshot; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandEnergy {
    pub bass: f32,
    pub treble: f32,
}

impl BandEnergy {
    pub const SILENT: Self = Self {
        bass: 0.0,
        treble: 0.0,
    };
}

/// Mean of the byte bins in `range`, normalized to \[0, 1\].
/// Bins past the end of the snapshot count as zero, so a short or missing
/// buffer degrades to silence instead of panicking.
fn band_mean(bins: &[u8], range: &Range<usize>) -> f32 {
    let len = range.len();
    if len == 0 {
        return 0.0;
    }
    let sum: u32 = range
        .clone()
        .map(|i| bins.get(i).copied().unwrap_or(0) as u32)
        .sum();
    sum as f32 / len as f32 / 255.0
}

/// Reduce one spectrum snapshot to band energy.
///
/// When playback is paused or the analyser is not up yet, the result is
/// forced to silence so no stale energy leaks into the deformation. Both
/// outputs are clamped after the bass-response policy is applied, so the
/// gated/amplified variant can never produce a negative or >1 value.
pub fn reduce(bins: &[u8], config: &VizConfig, playing: bool) -> BandEnergy {
    if !playing {
        return BandEnergy::SILENT;
    }
    let raw_bass = band_mean(bins, &config.bass_bins);
    let bass = match config.bass_response {
        BassResponse::Smooth => raw_bass,
        BassResponse::Kick { threshold, gain } => (raw_bass - threshold).max(0.0) * gain,
    }
    .clamp(0.0, 1.0);
    let treble = band_mean(bins, &config.treble_bins).clamp(0.0, 1.0);
    BandEnergy { bass, treble }
}
