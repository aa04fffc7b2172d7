use crate::color::{BulbHsv, Hsv, Rgb};

/// Convert an 8-bit RGB color to bulb HSV.
///
/// Hue is rounded to the nearest degree. Saturation and value keep their
/// fractional part; frame construction rounds them to tenths.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_bulb_hsv(rgb: Rgb) -> BulbHsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        // between yellow & magenta
        60.0 * libm::fmodf((g - b) / delta, 6.0)
    } else if max == g {
        // between cyan & yellow
        60.0 * ((b - r) / delta + 2.0)
    } else {
        // between magenta & cyan
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    let saturation = if max <= 0.0 { 0.0 } else { delta / max * 100.0 };

    BulbHsv {
        hue: libm::roundf(hue) as u16,
        saturation,
        value: max * 100.0,
    }
}

/// Convert `smart_leds` HSV (all channels 0-255) to bulb HSV.
///
/// The 8-bit hue circle wraps at 256, so hue 255 maps to 358 degrees.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv8_to_bulb_hsv(hsv: Hsv) -> BulbHsv {
    let hue = libm::floorf(f32::from(hsv.hue) * 360.0 / 256.0);
    BulbHsv {
        hue: hue as u16,
        saturation: f32::from(hsv.sat) * 100.0 / 255.0,
        value: f32::from(hsv.val) * 100.0 / 255.0,
    }
}
