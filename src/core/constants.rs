// Shared visual tuning constants used by the frame loop and renderer.
// Variant-dependent numbers (FFT size, band ranges, deformation gains) live
// in `config::VizConfig`; everything here is common to all presets.

// Deformation phase advanced per second of wall time.
pub const TIME_PHASE_PER_SEC: f32 = 1.5;

// Standing-wave spatial frequency along x/y (radians per world unit).
pub const WAVE_FREQUENCY: f32 = 0.4;

// Roll applied every frame regardless of audio.
pub const ROLL_SPIN: f32 = 0.001;

// Color drive: hue drifts from green toward cyan with bass, lightness rises
// with treble, emissive intensity with bass.
pub const BASE_HUE: f32 = 0.35;
pub const HUE_BASS_SPAN: f32 = 0.1;
pub const LIGHTNESS_BASE: f32 = 0.5;
pub const LIGHTNESS_TREBLE_SPAN: f32 = 0.4;
pub const EMISSIVE_BASS_SPAN: f32 = 0.4;

// Sphere tessellation: midpoint subdivision levels of the base icosahedron.
pub const SPHERE_DETAIL: u32 = 3;

// Particle field
pub const PARTICLE_COUNT: usize = 600;
pub const PARTICLE_FIELD_EXTENT: f32 = 250.0; // cube side length, world units
pub const PARTICLE_SPIN: f32 = 0.05; // yaw = -phase * this
pub const PARTICLE_BASS_SCALE: f32 = 0.15; // uniform scale span at full bass
pub const PARTICLE_SIZE: f32 = 0.6; // quad side, world units
pub const PARTICLE_ALPHA: f32 = 0.5;
pub const PARTICLE_SEED: u64 = 42;

// Camera: perspective rig shared by rendering and resize handling.
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Narrow viewports pull the camera back so the fully deformed orb stays in
// frame. Threshold is in CSS logical pixels.
pub const NARROW_VIEWPORT_PX: f32 = 768.0;
pub const CAMERA_Z_WIDE: f32 = 70.0;
pub const CAMERA_Z_NARROW: f32 = 100.0;
