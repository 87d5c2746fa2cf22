//! The expanding laser-beam visual: three nested volumes built once from a
//! [`BeamSpec`], with per-frame transparency animation.
//!
//! The outer fog cone and the inner bright cone breathe with time and fade
//! near the camera via the solidity multiplier; the thin core line keeps its
//! full strength regardless of camera distance.

use glam::Vec3;

use crate::constants::*;
use crate::spectrum::wavelength_to_rgb;
use crate::state::FrameState;

/// Immutable description of the beam: span along the X axis, height of the
/// axis, and the physical parameters the visuals derive from.
#[derive(Clone, Copy, Debug)]
pub struct BeamSpec {
    pub start_x: f32,
    pub end_x: f32,
    pub axis_y: f32,
    pub wavelength_nm: f32,
    pub slit_separation: f32,
    pub base_intensity: f32,
}

impl Default for BeamSpec {
    fn default() -> Self {
        Self {
            start_x: DEFAULT_SOURCE_X,
            end_x: DEFAULT_BARRIER_X,
            axis_y: DEFAULT_AXIS_Y,
            wavelength_nm: DEFAULT_WAVELENGTH_NM,
            slit_separation: DEFAULT_SLIT_SEPARATION,
            base_intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Lateral profile of a frustum along the X axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeProfile {
    pub start_x: f32,
    pub length: f32,
    pub start_radius: f32,
    pub end_radius: f32,
}

/// Axis-aligned square prism along the X axis (the bright core line).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrismProfile {
    pub start_x: f32,
    pub length: f32,
    pub cross_section: f32,
}

/// All geometry derived once from a [`BeamSpec`], plus the shared color.
#[derive(Clone, Copy, Debug)]
pub struct BeamGeometry {
    pub outer: ConeProfile,
    pub inner: ConeProfile,
    pub core: PrismProfile,
    pub color: [f32; 3],
}

impl BeamGeometry {
    pub fn from_spec(spec: &BeamSpec) -> Self {
        let length = spec.end_x - spec.start_x;
        let outer_start = BEAM_START_RADIUS;
        let outer_end = spec.slit_separation + BEAM_SPREAD_MARGIN;
        let outer = ConeProfile {
            start_x: spec.start_x,
            length: length - BEAM_LENGTH_MARGIN,
            start_radius: outer_start,
            end_radius: outer_end,
        };
        let inner = ConeProfile {
            start_x: spec.start_x,
            length: length - BEAM_LENGTH_MARGIN,
            start_radius: outer_start * BEAM_INNER_START_FACTOR,
            end_radius: outer_end * BEAM_INNER_END_FACTOR,
        };
        let core = PrismProfile {
            start_x: spec.start_x,
            length,
            cross_section: BEAM_CORE_CROSS_SECTION,
        };
        Self {
            outer,
            inner,
            core,
            color: wavelength_to_rgb(spec.wavelength_nm),
        }
    }
}

/// Per-frame transparency of the three volumes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeamOpacity {
    pub outer: f32,
    pub inner: f32,
    pub core: f32,
}

/// Camera-distance multiplier that fades the fog volumes up close so they do
/// not wash out the view.
pub fn solidity(camera_distance: f32) -> f32 {
    (camera_distance / SOLIDITY_DISTANCE_DIVISOR).clamp(SOLIDITY_MIN, SOLIDITY_MAX)
}

/// Stateful beam visual: geometry derived once, opacity recomputed per frame.
#[derive(Clone, Debug)]
pub struct ExpandingBeamVisual {
    spec: BeamSpec,
    geometry: BeamGeometry,
    opacity: BeamOpacity,
}

impl ExpandingBeamVisual {
    pub fn new(spec: BeamSpec) -> Self {
        let geometry = BeamGeometry::from_spec(&spec);
        log::debug!(
            "beam geometry: outer end radius {:.2}, inner end radius {:.2}, length {:.2}",
            geometry.outer.end_radius,
            geometry.inner.end_radius,
            geometry.core.length
        );
        Self {
            spec,
            geometry,
            opacity: BeamOpacity::default(),
        }
    }

    /// Per-frame hook: oscillate each volume's transparency. The core line is
    /// intentionally not solidity-scaled so it stays bright up close.
    pub fn update(&mut self, frame: &FrameState) {
        let midline = Vec3::new(0.0, self.spec.axis_y, 0.0);
        let s = solidity(frame.camera_position.distance(midline));
        let t = frame.elapsed_seconds;
        self.opacity = BeamOpacity {
            outer: (OUTER_OPACITY_BASE + OUTER_OPACITY_AMPLITUDE * (OUTER_OPACITY_RATE * t).sin())
                * s,
            inner: (INNER_OPACITY_BASE + INNER_OPACITY_AMPLITUDE * (INNER_OPACITY_RATE * t).sin())
                * s,
            core: CORE_OPACITY_BASE + CORE_OPACITY_AMPLITUDE * (CORE_OPACITY_RATE * t).sin(),
        };
    }

    pub fn spec(&self) -> &BeamSpec {
        &self.spec
    }

    pub fn geometry(&self) -> &BeamGeometry {
        &self.geometry
    }

    pub fn opacity(&self) -> BeamOpacity {
        self.opacity
    }

    /// Emissive brightness multiplier for the core color, driven by the
    /// intensity parameter (0..100 maps to 0.5..1.5).
    pub fn intensity_factor(&self) -> f32 {
        0.5 + (self.spec.base_intensity / 100.0).clamp(0.0, 1.0)
    }
}
