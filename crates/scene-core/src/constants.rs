// Shared tuning constants for the double-slit scene, used by both the pure
// update logic and the native frontend.

// Label visibility window (world units from the camera)
pub const LABEL_MIN_VISIBLE_DISTANCE: f32 = 10.0;
pub const LABEL_MAX_VISIBLE_DISTANCE: f32 = 35.0;

// Label scale mapping: scale = clamp(d / divisor, min, max)
pub const LABEL_SCALE_DIVISOR: f32 = 15.0;
pub const LABEL_SCALE_MIN: f32 = 0.6;
pub const LABEL_SCALE_MAX: f32 = 1.3;

// Labels float this far above their landmark
pub const LABEL_HEIGHT_OFFSET: f32 = 2.5;

// Beam geometry
pub const BEAM_START_RADIUS: f32 = 0.1; // tight radius at the source end
pub const BEAM_SPREAD_MARGIN: f32 = 0.3; // added to the slit separation at the wide end
pub const BEAM_LENGTH_MARGIN: f32 = 0.2; // cones stop just short of the endpoints
pub const BEAM_INNER_END_FACTOR: f32 = 0.5; // inner cone end radius relative to outer
pub const BEAM_INNER_START_FACTOR: f32 = 0.8; // inner cone start radius relative to outer
pub const BEAM_CORE_CROSS_SECTION: f32 = 0.05; // square section of the core line

// Solidity: camera-distance multiplier that fades the beam fog up close
pub const SOLIDITY_DISTANCE_DIVISOR: f32 = 20.0;
pub const SOLIDITY_MIN: f32 = 0.3;
pub const SOLIDITY_MAX: f32 = 1.0;

// Opacity oscillation per volume: base + amplitude * sin(rate * t)
pub const OUTER_OPACITY_BASE: f32 = 0.06;
pub const OUTER_OPACITY_AMPLITUDE: f32 = 0.02;
pub const OUTER_OPACITY_RATE: f32 = 2.0;
pub const INNER_OPACITY_BASE: f32 = 0.12;
pub const INNER_OPACITY_AMPLITUDE: f32 = 0.04;
pub const INNER_OPACITY_RATE: f32 = 3.0;
pub const CORE_OPACITY_BASE: f32 = 0.4;
pub const CORE_OPACITY_AMPLITUDE: f32 = 0.1;
pub const CORE_OPACITY_RATE: f32 = 4.0;

// Parameter defaults (mirrors the simulation parameter schema)
pub const DEFAULT_WAVELENGTH_NM: f32 = 550.0;
pub const DEFAULT_SLIT_SEPARATION: f32 = 1.0;
pub const DEFAULT_INTENSITY: f32 = 50.0;

// Default landmark layout along the beam axis
pub const DEFAULT_SOURCE_X: f32 = -12.0;
pub const DEFAULT_BARRIER_X: f32 = 0.0;
pub const DEFAULT_SCREEN_X: f32 = 12.0;
pub const DEFAULT_AXIS_Y: f32 = 0.0;

// Mesh tessellation
pub const BEAM_RADIAL_SEGMENTS: u32 = 32;
