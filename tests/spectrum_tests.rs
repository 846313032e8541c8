// Host-side tests for the spectral reducer.
// The crate itself is wasm-only, so the pure core modules are pulled in
// directly by path.

#![allow(dead_code)]

#[path = "../src/core/config.rs"]
mod config;
#[path = "../src/core/spectrum.rs"]
mod spectrum;

use config::{BassResponse, VizConfig};
use spectrum::{reduce, BandEnergy};

fn snapshot_with(config: &VizConfig, fill: impl Fn(usize) -> u8) -> Vec<u8> {
    (0..config.bin_count()).map(fill).collect()
}

#[test]
fn all_zero_input_is_silent() {
    let config = VizConfig::classic();
    let bins = snapshot_with(&config, |_| 0);
    assert_eq!(reduce(&bins, &config, true), BandEnergy::SILENT);
}

#[test]
fn paused_playback_gates_energy_to_zero() {
    let config = VizConfig::classic();
    let bins = snapshot_with(&config, |_| 255);
    assert_eq!(reduce(&bins, &config, false), BandEnergy::SILENT);
}

#[test]
fn full_bass_bins_give_unit_bass() {
    let config = VizConfig::classic();
    let bins = snapshot_with(&config, |i| if i < 15 { 255 } else { 0 });
    let energy = reduce(&bins, &config, true);
    assert!((energy.bass - 1.0).abs() < 1e-6);
    assert_eq!(energy.treble, 0.0);
}

#[test]
fn treble_band_averages_its_range() {
    let config = VizConfig::classic();
    // Half the treble range saturated, half silent: mean is 0.5.
    let mid = (config.treble_bins.start + config.treble_bins.end) / 2;
    let bins = snapshot_with(&config, |i| {
        if config.treble_bins.contains(&i) && i < mid {
            255
        } else {
            0
        }
    });
    let energy = reduce(&bins, &config, true);
    assert!((energy.treble - 0.5).abs() < 1e-2);
    assert_eq!(energy.bass, 0.0);
}

#[test]
fn outputs_stay_in_unit_interval_for_any_bytes() {
    for config in [
        VizConfig::classic(),
        VizConfig::punchy(),
        VizConfig::lowend(),
        VizConfig::bright(),
    ] {
        for pattern in 0..=7u32 {
            let bins = snapshot_with(&config, |i| {
                // A few adversarial byte patterns.
                match pattern {
                    0 => 0,
                    1 => 255,
                    2 => (i % 256) as u8,
                    3 => (255 - i % 256) as u8,
                    4 => ((i * 97) % 256) as u8,
                    5 => 1,
                    6 => 254,
                    _ => ((i * i) % 256) as u8,
                }
            });
            let energy = reduce(&bins, &config, true);
            assert!(energy.bass.is_finite() && energy.treble.is_finite());
            assert!((0.0..=1.0).contains(&energy.bass), "bass out of range");
            assert!((0.0..=1.0).contains(&energy.treble), "treble out of range");
        }
    }
}

#[test]
fn bass_is_monotone_in_every_bass_bin() {
    let config = VizConfig::classic();
    let base = snapshot_with(&config, |i| ((i * 37) % 200) as u8);
    let reference = reduce(&base, &config, true).bass;
    for bin in config.bass_bins.clone() {
        let mut raised = base.clone();
        raised[bin] = 255;
        let bumped = reduce(&raised, &config, true).bass;
        assert!(
            bumped >= reference,
            "raising bin {bin} lowered bass: {reference} -> {bumped}"
        );
    }
}

#[test]
fn kick_gate_silences_quiet_bass() {
    let config = VizConfig::punchy();
    let BassResponse::Kick { threshold, .. } = config.bass_response else {
        panic!("punchy preset should use the kick response");
    };
    // Fill the bass range to just under the gate threshold.
    let level = (threshold * 255.0 * 0.9) as u8;
    let bins = snapshot_with(&config, |i| if config.bass_bins.contains(&i) { level } else { 0 });
    let energy = reduce(&bins, &config, true);
    assert_eq!(energy.bass, 0.0);
}

#[test]
fn kick_amplifies_above_threshold_and_clamps() {
    let config = VizConfig::punchy();
    let BassResponse::Kick { threshold, gain } = config.bass_response else {
        panic!("punchy preset should use the kick response");
    };
    let bins = snapshot_with(&config, |i| if config.bass_bins.contains(&i) { 255 } else { 0 });
    let energy = reduce(&bins, &config, true);
    let expected = ((1.0 - threshold) * gain).clamp(0.0, 1.0);
    assert!((energy.bass - expected).abs() < 1e-6);
    assert!(energy.bass >= 0.0, "kick output must never go negative");
}

#[test]
fn short_buffer_counts_missing_bins_as_zero() {
    let config = VizConfig::classic();
    // Buffer ends before the treble range begins.
    let bins = vec![255u8; 20];
    let energy = reduce(&bins, &config, true);
    assert_eq!(energy.treble, 0.0);
    // Bass range is partially covered: 15 of 15 bins present here.
    assert!((energy.bass - 1.0).abs() < 1e-6);

    let tiny = vec![255u8; 5];
    let partial = reduce(&tiny, &config, true);
    assert!((partial.bass - 5.0 / 15.0).abs() < 1e-6);
}

#[test]
fn empty_buffer_is_silence_not_a_panic() {
    let config = VizConfig::classic();
    assert_eq!(reduce(&[], &config, true), BandEnergy::SILENT);
}
