mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{hsv8_to_bulb_hsv, rgb_to_bulb_hsv};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Color in the units the bulb takes
///
/// Hue is in degrees (0-360), saturation and value are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulbHsv {
    pub hue: u16,
    pub saturation: f32,
    pub value: f32,
}

impl From<Rgb> for BulbHsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_bulb_hsv(rgb)
    }
}

impl From<Hsv> for BulbHsv {
    fn from(hsv: Hsv) -> Self {
        hsv8_to_bulb_hsv(hsv)
    }
}
