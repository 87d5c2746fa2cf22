//! Wavelength to display color mapping.
//!
//! Piecewise linear approximation of the visible spectrum (380-780 nm) with
//! intensity falloff toward the ultraviolet and infrared edges. Inputs
//! outside the visible range clamp to the nearest edge rather than erroring.

/// Map a wavelength in nanometers to a linear RGB triple in [0, 1].
pub fn wavelength_to_rgb(wavelength_nm: f32) -> [f32; 3] {
    let w = wavelength_nm.clamp(380.0, 780.0);

    let (r, g, b) = if w < 440.0 {
        (-(w - 440.0) / 60.0, 0.0, 1.0)
    } else if w < 490.0 {
        (0.0, (w - 440.0) / 50.0, 1.0)
    } else if w < 510.0 {
        (0.0, 1.0, -(w - 510.0) / 20.0)
    } else if w < 580.0 {
        ((w - 510.0) / 70.0, 1.0, 0.0)
    } else if w < 645.0 {
        (1.0, -(w - 645.0) / 65.0, 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    // Perceived intensity drops near both edges of the visible band.
    let falloff = if w < 420.0 {
        0.3 + 0.7 * (w - 380.0) / 40.0
    } else if w > 700.0 {
        0.3 + 0.7 * (780.0 - w) / 80.0
    } else {
        1.0
    };

    [r * falloff, g * falloff, b * falloff]
}
