//! Scene parameter presets.
//!
//! Mirrors the simulation parameter schema served by the course backend:
//! wavelength slider 400-700 nm (default 550), slit separation, intensity
//! (default 50). Presets deserialize from JSON with every field optional, so
//! `{}` yields the defaults. Out-of-range values are passed through rather
//! than validated; they render incorrectly but never crash.

use serde::{Deserialize, Serialize};

use crate::beam::BeamSpec;
use crate::constants::*;
use crate::label::Landmarks;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub wavelength_nm: f32,
    pub slit_separation: f32,
    pub intensity: f32,
    pub source_x: f32,
    pub barrier_x: f32,
    pub screen_x: f32,
    pub axis_y: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            wavelength_nm: DEFAULT_WAVELENGTH_NM,
            slit_separation: DEFAULT_SLIT_SEPARATION,
            intensity: DEFAULT_INTENSITY,
            source_x: DEFAULT_SOURCE_X,
            barrier_x: DEFAULT_BARRIER_X,
            screen_x: DEFAULT_SCREEN_X,
            axis_y: DEFAULT_AXIS_Y,
        }
    }
}

impl SceneParams {
    pub fn landmarks(&self) -> Landmarks {
        Landmarks {
            source_x: self.source_x,
            barrier_x: self.barrier_x,
            screen_x: self.screen_x,
        }
    }

    /// The beam runs from the source to the barrier.
    pub fn beam_spec(&self) -> BeamSpec {
        BeamSpec {
            start_x: self.source_x,
            end_x: self.barrier_x,
            axis_y: self.axis_y,
            wavelength_nm: self.wavelength_nm,
            slit_separation: self.slit_separation,
            base_intensity: self.intensity,
        }
    }
}
