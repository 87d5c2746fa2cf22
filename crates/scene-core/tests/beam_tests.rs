// Behavior tests for the expanding beam visual: derived geometry and the
// per-frame opacity animation.

use glam::Vec3;
use scene_core::{
    solidity, BeamGeometry, BeamSpec, ExpandingBeamVisual, FrameState, BEAM_CORE_CROSS_SECTION,
    BEAM_INNER_START_FACTOR, BEAM_LENGTH_MARGIN, BEAM_SPREAD_MARGIN, BEAM_START_RADIUS,
    SOLIDITY_MAX, SOLIDITY_MIN,
};

fn spec_with_separation(sep: f32) -> BeamSpec {
    BeamSpec {
        start_x: -12.0,
        end_x: 0.0,
        axis_y: 0.0,
        wavelength_nm: 550.0,
        slit_separation: sep,
        base_intensity: 50.0,
    }
}

/// Frame whose camera sits at the given distance from the beam midline.
fn frame(distance: f32, t: f32) -> FrameState {
    FrameState::new(Vec3::new(0.0, 0.0, distance), t)
}

#[test]
fn outer_end_radius_is_separation_plus_margin() {
    for sep in [0.2, 1.0, 3.7] {
        let g = BeamGeometry::from_spec(&spec_with_separation(sep));
        assert!((g.outer.end_radius - (sep + BEAM_SPREAD_MARGIN)).abs() < 1e-6);
        assert!((g.outer.start_radius - BEAM_START_RADIUS).abs() < 1e-6);
    }
}

#[test]
fn inner_end_radius_is_exactly_half_the_outer_for_any_separation() {
    for sep in [0.05, 0.5, 1.0, 2.5, 10.0] {
        let g = BeamGeometry::from_spec(&spec_with_separation(sep));
        assert!(
            (g.inner.end_radius - 0.5 * g.outer.end_radius).abs() < 1e-6,
            "separation {sep}"
        );
    }
}

#[test]
fn inner_start_radius_scales_from_the_outer_start() {
    let g = BeamGeometry::from_spec(&spec_with_separation(1.0));
    assert!((g.inner.start_radius - BEAM_START_RADIUS * BEAM_INNER_START_FACTOR).abs() < 1e-6);
}

#[test]
fn cones_stop_short_while_the_core_spans_the_full_length() {
    let spec = spec_with_separation(1.0);
    let g = BeamGeometry::from_spec(&spec);
    let full = spec.end_x - spec.start_x;
    assert!((g.outer.length - (full - BEAM_LENGTH_MARGIN)).abs() < 1e-6);
    assert!((g.inner.length - (full - BEAM_LENGTH_MARGIN)).abs() < 1e-6);
    assert!((g.core.length - full).abs() < 1e-6);
    assert!((g.core.cross_section - BEAM_CORE_CROSS_SECTION).abs() < 1e-6);
}

#[test]
fn solidity_clamps_near_and_far() {
    assert!((solidity(2.0) - SOLIDITY_MIN).abs() < 1e-6);
    assert!((solidity(100.0) - SOLIDITY_MAX).abs() < 1e-6);
    assert!((solidity(10.0) - 0.5).abs() < 1e-6);
}

#[test]
fn opacity_at_time_zero_matches_the_base_values() {
    let mut beam = ExpandingBeamVisual::new(spec_with_separation(1.0));
    // distance 10 from the midline puts solidity at 0.5
    beam.update(&frame(10.0, 0.0));
    let o = beam.opacity();
    assert!((o.outer - 0.06 * 0.5).abs() < 1e-6);
    assert!((o.inner - 0.12 * 0.5).abs() < 1e-6);
    assert!((o.core - 0.4).abs() < 1e-6);
}

#[test]
fn core_opacity_ignores_camera_distance() {
    let mut beam = ExpandingBeamVisual::new(spec_with_separation(1.0));
    let t = 1.7;
    beam.update(&frame(4.0, t));
    let near = beam.opacity();
    beam.update(&frame(60.0, t));
    let far = beam.opacity();
    assert_eq!(near.core, far.core);
    // the fog volumes do react to the distance change
    assert!(far.outer > near.outer);
    assert!(far.inner > near.inner);
}

#[test]
fn fog_opacities_stay_within_their_oscillation_bands() {
    let mut beam = ExpandingBeamVisual::new(spec_with_separation(1.0));
    let mut t = 0.0f32;
    while t < 12.0 {
        beam.update(&frame(40.0, t)); // solidity saturates at 1.0
        let o = beam.opacity();
        assert!((0.04..=0.08).contains(&o.outer), "outer {} at t {t}", o.outer);
        assert!((0.08..=0.16).contains(&o.inner), "inner {} at t {t}", o.inner);
        assert!((0.3..=0.5).contains(&o.core), "core {} at t {t}", o.core);
        t += 0.1;
    }
}

#[test]
fn repeated_updates_with_identical_frame_state_are_idempotent() {
    let mut beam = ExpandingBeamVisual::new(spec_with_separation(1.0));
    let f = frame(25.0, 3.3);
    beam.update(&f);
    let first = beam.opacity();
    beam.update(&f);
    beam.update(&f);
    assert_eq!(first, beam.opacity());
}

#[test]
fn midline_distance_uses_the_beam_axis_height() {
    let mut spec = spec_with_separation(1.0);
    spec.axis_y = 8.0;
    let mut beam = ExpandingBeamVisual::new(spec);
    // camera level with the raised axis, 10 units out
    beam.update(&FrameState::new(Vec3::new(0.0, 8.0, 10.0), 0.0));
    assert!((beam.opacity().outer - 0.06 * 0.5).abs() < 1e-6);
}

#[test]
fn intensity_factor_maps_and_clamps() {
    let mut spec = spec_with_separation(1.0);
    assert!((ExpandingBeamVisual::new(spec).intensity_factor() - 1.0).abs() < 1e-6);
    spec.base_intensity = 0.0;
    assert!((ExpandingBeamVisual::new(spec).intensity_factor() - 0.5).abs() < 1e-6);
    spec.base_intensity = 100.0;
    assert!((ExpandingBeamVisual::new(spec).intensity_factor() - 1.5).abs() < 1e-6);
    spec.base_intensity = 250.0;
    assert!((ExpandingBeamVisual::new(spec).intensity_factor() - 1.5).abs() < 1e-6);
}
