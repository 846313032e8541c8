// Host-side tests for the deformation engine.
// The crate itself is wasm-only, so the pure core modules are pulled in
// directly by path.

#![allow(dead_code)]

#[path = "../src/core/color.rs"]
mod color;
#[path = "../src/core/config.rs"]
mod config;
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/deform.rs"]
mod deform;
#[path = "../src/core/mesh.rs"]
mod mesh;
#[path = "../src/core/spectrum.rs"]
mod spectrum;

use color::hsl_to_rgb;
use config::VizConfig;
use deform::{displace, orb_color, radial_distance, standing_wave, OrbState};
use glam::Vec3;
use mesh::SphereMesh;
use spectrum::BandEnergy;

fn loud() -> BandEnergy {
    BandEnergy {
        bass: 1.0,
        treble: 1.0,
    }
}

#[test]
fn displacement_is_purely_radial() {
    let config = VizConfig::classic();
    let sphere = SphereMesh::icosphere(config.base_radius, 2);
    let mut live = sphere.positions.clone();
    displace(&sphere.positions, &mut live, loud(), 1.7, &config);

    for (base, out) in sphere.positions.iter().zip(&live) {
        let expected = radial_distance(*base, loud(), 1.7, &config);
        assert!((out.length() - expected).abs() < 1e-3);
        // Direction is preserved exactly: base and deformed are parallel.
        let cos = base.normalize().dot(out.normalize());
        assert!(cos > 0.9999, "vertex sheared off its radial line: {cos}");
    }
}

#[test]
fn silence_leaves_only_the_standing_wave() {
    let config = VizConfig::classic();
    let base = Vec3::new(3.0, -7.0, 12.0);
    let phase = 0.8;
    let dist = radial_distance(base, BandEnergy::SILENT, phase, &config);
    let expected = config.base_radius + standing_wave(base, phase);
    assert!((dist - expected).abs() < 1e-6);
}

#[test]
fn deformed_radius_never_exceeds_the_config_bound() {
    for config in [
        VizConfig::classic(),
        VizConfig::punchy(),
        VizConfig::lowend(),
        VizConfig::bright(),
    ] {
        let sphere = SphereMesh::icosphere(config.base_radius, 3);
        let mut live = sphere.positions.clone();
        for step in 0..20 {
            let phase = step as f32 * 0.37;
            displace(&sphere.positions, &mut live, loud(), phase, &config);
            for v in &live {
                assert!(
                    v.length() <= config.max_radius() + 1e-3,
                    "vertex escaped at phase {phase}: {} > {}",
                    v.length(),
                    config.max_radius()
                );
            }
        }
    }
}

#[test]
fn displace_preserves_vertex_count() {
    let config = VizConfig::classic();
    let sphere = SphereMesh::icosphere(config.base_radius, 1);
    let mut live = sphere.positions.clone();
    displace(&sphere.positions, &mut live, BandEnergy::SILENT, 0.0, &config);
    assert_eq!(live.len(), sphere.positions.len());
}

#[test]
fn rotation_accelerates_with_bass() {
    let config = VizConfig::classic();
    let mut idle = OrbState::new();
    let mut driven = OrbState::new();
    for _ in 0..10 {
        idle.advance_rotation(BandEnergy::SILENT, &config);
        driven.advance_rotation(loud(), &config);
    }
    assert!(driven.yaw > idle.yaw);
    let expected_idle = 10.0 * config.base_spin;
    assert!((idle.yaw - expected_idle).abs() < 1e-6);
    // Roll is audio-independent.
    assert!((idle.roll - driven.roll).abs() < 1e-6);
    assert!((idle.roll - 10.0 * constants::ROLL_SPIN).abs() < 1e-6);
}

#[test]
fn model_matrix_is_finite_rotation() {
    let config = VizConfig::classic();
    let mut state = OrbState::new();
    for _ in 0..1000 {
        state.advance_rotation(loud(), &config);
    }
    let m = state.model_matrix();
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    // A rotation never changes length.
    let v = m.transform_point3(Vec3::new(16.0, 0.0, 0.0));
    assert!((v.length() - 16.0).abs() < 1e-3);
}

#[test]
fn silent_color_is_the_dim_base_green() {
    let c = orb_color(BandEnergy::SILENT);
    assert_eq!(c.surface, hsl_to_rgb(constants::BASE_HUE, 1.0, 0.5));
    // Zero-lightness emissive is black.
    assert_eq!(c.emissive, [0.0, 0.0, 0.0]);
}

#[test]
fn treble_brightens_and_bass_lights_the_emissive() {
    let quiet = orb_color(BandEnergy::SILENT);
    let bright = orb_color(BandEnergy {
        bass: 0.0,
        treble: 1.0,
    });
    let quiet_sum: f32 = quiet.surface.iter().sum();
    let bright_sum: f32 = bright.surface.iter().sum();
    assert!(bright_sum > quiet_sum);

    let thump = orb_color(BandEnergy {
        bass: 1.0,
        treble: 0.0,
    });
    let emissive_sum: f32 = thump.emissive.iter().sum();
    assert!(emissive_sum > 0.0);
}
