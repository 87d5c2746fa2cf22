// Tests for scene constants and their mathematical relationships.

use scene_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn label_window_is_well_formed() {
    assert!(LABEL_MIN_VISIBLE_DISTANCE > 0.0);
    assert!(LABEL_MIN_VISIBLE_DISTANCE < LABEL_MAX_VISIBLE_DISTANCE);
    assert!(LABEL_SCALE_MIN < LABEL_SCALE_MAX);
    assert!(LABEL_SCALE_DIVISOR > 0.0);
    // unit scale is reachable inside the window
    assert!(LABEL_SCALE_DIVISOR >= LABEL_MIN_VISIBLE_DISTANCE);
    assert!(LABEL_SCALE_DIVISOR <= LABEL_MAX_VISIBLE_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn beam_geometry_constants_are_positive_fractions_where_expected() {
    assert!(BEAM_START_RADIUS > 0.0);
    assert!(BEAM_SPREAD_MARGIN > 0.0);
    assert!(BEAM_LENGTH_MARGIN > 0.0);
    assert!(BEAM_INNER_END_FACTOR > 0.0 && BEAM_INNER_END_FACTOR < 1.0);
    assert!(BEAM_INNER_START_FACTOR > 0.0 && BEAM_INNER_START_FACTOR < 1.0);
    assert!(BEAM_CORE_CROSS_SECTION > 0.0);
    assert!(BEAM_RADIAL_SEGMENTS >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_oscillations_never_leave_the_unit_interval() {
    assert!(OUTER_OPACITY_BASE - OUTER_OPACITY_AMPLITUDE > 0.0);
    assert!(OUTER_OPACITY_BASE + OUTER_OPACITY_AMPLITUDE <= 1.0);
    assert!(INNER_OPACITY_BASE - INNER_OPACITY_AMPLITUDE > 0.0);
    assert!(INNER_OPACITY_BASE + INNER_OPACITY_AMPLITUDE <= 1.0);
    assert!(CORE_OPACITY_BASE - CORE_OPACITY_AMPLITUDE > 0.0);
    assert!(CORE_OPACITY_BASE + CORE_OPACITY_AMPLITUDE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fog_layers_order_from_faint_to_bright() {
    assert!(OUTER_OPACITY_BASE < INNER_OPACITY_BASE);
    assert!(INNER_OPACITY_BASE < CORE_OPACITY_BASE);
    assert!(OUTER_OPACITY_RATE < INNER_OPACITY_RATE);
    assert!(INNER_OPACITY_RATE < CORE_OPACITY_RATE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn solidity_bounds_are_a_valid_clamp_range() {
    assert!(SOLIDITY_DISTANCE_DIVISOR > 0.0);
    assert!(SOLIDITY_MIN > 0.0);
    assert!(SOLIDITY_MIN < SOLIDITY_MAX);
    assert!(SOLIDITY_MAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_layout_orders_source_barrier_screen() {
    assert!(DEFAULT_SOURCE_X < DEFAULT_BARRIER_X);
    assert!(DEFAULT_BARRIER_X < DEFAULT_SCREEN_X);
    assert!(DEFAULT_WAVELENGTH_NM >= 400.0 && DEFAULT_WAVELENGTH_NM <= 700.0);
    assert!(DEFAULT_SLIT_SEPARATION > 0.0);
    assert!(DEFAULT_INTENSITY > 0.0);
}
