use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fixed chart palette
// ---------------------------------------------------------------------------

/// Vineyard-inspired earthy palette, darkest to lightest.
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(0x5C, 0x40, 0x33),
    RGBColor(0x7A, 0x5C, 0x47),
    RGBColor(0x98, 0x75, 0x5A),
    RGBColor(0xB6, 0x8E, 0x6D),
    RGBColor(0xD4, 0xA7, 0x80),
    RGBColor(0xF2, 0xC0, 0x93),
];

/// Warm parchment chart background.
pub const BACKGROUND: RGBColor = RGBColor(0xFF, 0xF5, 0xE6);

// ---------------------------------------------------------------------------
// Correlation color ramp
// ---------------------------------------------------------------------------

/// Map a correlation in [-1, 1] onto a pale-yellow → deep-red ramp.
/// Non-finite input (a zero-variance pairing) maps to neutral grey.
pub fn correlation_color(r: f64) -> RGBColor {
    if !r.is_finite() {
        return RGBColor(0xC0, 0xC0, 0xC0);
    }
    let t = ((r.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32;
    let hsl = Hsl::new(55.0 - 55.0 * t, 0.85, 0.82 - 0.45 * t);
    let rgb: Srgb = hsl.into_color();
    RGBColor(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Pick a readable annotation color for the given cell color.
pub fn annotation_color(cell: RGBColor) -> RGBColor {
    let luma = 0.299 * cell.0 as f64 + 0.587 * cell.1 as f64 + 0.114 * cell.2 as f64;
    if luma > 140.0 {
        RGBColor(0x28, 0x1A, 0x0D)
    } else {
        BACKGROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_run_light_to_dark() {
        let low = correlation_color(-1.0);
        let high = correlation_color(1.0);
        let low_luma = low.0 as u32 + low.1 as u32 + low.2 as u32;
        let high_luma = high.0 as u32 + high.1 as u32 + high.2 as u32;
        assert!(low_luma > high_luma);
    }

    #[test]
    fn nan_maps_to_neutral_grey() {
        assert_eq!(correlation_color(f64::NAN), RGBColor(0xC0, 0xC0, 0xC0));
    }

    #[test]
    fn annotation_contrasts_with_cell() {
        assert_eq!(annotation_color(correlation_color(1.0)), BACKGROUND);
        assert_eq!(
            annotation_color(correlation_color(-1.0)),
            RGBColor(0x28, 0x1A, 0x0D)
        );
    }
}
