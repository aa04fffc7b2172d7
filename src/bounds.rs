#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::error::FrameError;

/// Inclusive range accepted for a frame field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the value lies within the bounds
    ///
    /// NaN is never contained.
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Time spent in a frame, seconds
pub const DURATION_BOUNDS: FieldBounds = FieldBounds::new(0.1, 10.5);
/// Hue on the color wheel, degrees
pub const HUE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 360.0);
/// Color saturation, percent
pub const SATURATION_BOUNDS: FieldBounds = FieldBounds::new(0.0, 100.0);
/// Color intensity, percent
pub const VALUE_BOUNDS: FieldBounds = FieldBounds::new(0.1, 100.0);
/// White light intensity, percent
pub const WHITE_INTENSITY_BOUNDS: FieldBounds = FieldBounds::new(0.1, 100.0);
/// White light temperature, percent
pub const WHITE_TEMPERATURE_BOUNDS: FieldBounds = FieldBounds::new(0.0, 100.0);

/// Caller-supplied frame field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameField {
    Duration,
    Hue,
    Saturation,
    Value,
    WhiteIntensity,
    WhiteTemperature,
}

impl FrameField {
    pub const fn bounds(self) -> FieldBounds {
        match self {
            Self::Duration => DURATION_BOUNDS,
            Self::Hue => HUE_BOUNDS,
            Self::Saturation => SATURATION_BOUNDS,
            Self::Value => VALUE_BOUNDS,
            Self::WhiteIntensity => WHITE_INTENSITY_BOUNDS,
            Self::WhiteTemperature => WHITE_TEMPERATURE_BOUNDS,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Value => "value",
            Self::WhiteIntensity => "white_intensity",
            Self::WhiteTemperature => "white_temperature",
        }
    }

    /// Validate a raw value against the field bounds
    pub fn check(self, value: f64) -> Result<f64, FrameError> {
        if self.bounds().contains(value) {
            return Ok(value);
        }
        #[cfg(feature = "esp32-log")]
        println!("[FrameField.check] {} is out of range: {}", self.as_str(), value);
        Err(FrameError::OutOfRange { field: self, value })
    }
}

impl core::fmt::Display for FrameField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a percentage to tenths of a percent
///
/// Expects an already validated value in `0.0..=100.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn tenths(percent: f32) -> u16 {
    libm::roundf(percent * 10.0) as u16
}
