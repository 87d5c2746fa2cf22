//! Distance-adaptive landmark labels.
//!
//! Each label is anchored to a fixed world position and fades in only inside
//! a camera-distance window, scaling up with distance so it stays readable.
//! Text compositing itself is the frontend's job; this module only decides
//! visibility and scale.

use glam::Vec3;

use crate::constants::*;
use crate::state::FrameState;

/// Immutable description of one landmark label.
#[derive(Clone, Debug)]
pub struct LabelSpec {
    pub anchor: Vec3,
    pub min_visible_distance: f32,
    pub max_visible_distance: f32,
    pub content: String,
}

/// A label whose visibility and render scale track the camera distance.
#[derive(Clone, Debug)]
pub struct DistanceAdaptiveLabel {
    spec: LabelSpec,
    visible: bool,
    scale: f32,
}

impl DistanceAdaptiveLabel {
    pub fn new(spec: LabelSpec) -> Self {
        Self {
            spec,
            visible: false,
            scale: 1.0,
        }
    }

    /// Per-frame hook: recompute visibility and scale from the camera
    /// distance. Pure arithmetic, idempotent for identical frame state.
    pub fn update(&mut self, frame: &FrameState) {
        let d = self.spec.anchor.distance(frame.camera_position);
        self.visible =
            d >= self.spec.min_visible_distance && d <= self.spec.max_visible_distance;
        if self.visible {
            self.scale = (d / LABEL_SCALE_DIVISOR).clamp(LABEL_SCALE_MIN, LABEL_SCALE_MAX);
        }
    }

    pub fn spec(&self) -> &LabelSpec {
        &self.spec
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Uniform render scale; only meaningful while the label is visible.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// X coordinates of the three scene landmarks along the beam axis.
#[derive(Clone, Copy, Debug)]
pub struct Landmarks {
    pub source_x: f32,
    pub barrier_x: f32,
    pub screen_x: f32,
}

/// The three fixed labels of the double-slit scene: source, barrier, screen.
#[derive(Clone, Debug)]
pub struct LabelGroup {
    pub labels: [DistanceAdaptiveLabel; 3],
}

impl LabelGroup {
    pub fn new(landmarks: &Landmarks, wavelength_nm: f32) -> Self {
        let make = |x: f32, content: String| {
            DistanceAdaptiveLabel::new(LabelSpec {
                anchor: Vec3::new(x, LABEL_HEIGHT_OFFSET, 0.0),
                min_visible_distance: LABEL_MIN_VISIBLE_DISTANCE,
                max_visible_distance: LABEL_MAX_VISIBLE_DISTANCE,
                content,
            })
        };
        Self {
            labels: [
                make(
                    landmarks.source_x,
                    format!("Laser source\n{wavelength_nm:.0} nm"),
                ),
                make(landmarks.barrier_x, "Double-slit barrier".to_owned()),
                make(landmarks.screen_x, "Detection screen".to_owned()),
            ],
        }
    }

    /// Per-frame hook: delegate to every member label.
    pub fn update(&mut self, frame: &FrameState) {
        for label in &mut self.labels {
            label.update(frame);
        }
    }
}
