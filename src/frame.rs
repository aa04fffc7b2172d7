//! Scene frames
//!
//! A frame is one timed lighting state of a scene. Color and white frames
//! share a single record layout; the unused half of the record is zero.

use core::fmt;

use embassy_time::Duration;

use crate::bounds::{FrameField, tenths};
use crate::color::{BulbHsv, Rgb};
use crate::error::FrameError;
use crate::transition::TransitionStyle;
use crate::wire::{FrameBytes, FrameHex, RecordWriter, hex_string, write_hex};

/// Which constructor authored a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Color,
    White,
}

/// One timed lighting state
///
/// Percent fields are stored in tenths of a percent (`0..=1000`).
/// All fields are validated at construction and can't change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    kind: FrameKind,
    duration: f64,
    transition: TransitionStyle,
    hue: u16,
    saturation: u16,
    value: u16,
    white_intensity: u16,
    white_temperature: u16,
}

impl Frame {
    /// Create a color frame
    ///
    /// # Arguments
    /// * `duration` - Time to spend in the frame, 0.1-10.5 s
    /// * `transition` - How to move into the frame
    /// * `hue` - Hue in degrees, 0-360
    /// * `saturation` - Color saturation, 0.0-100.0 %
    /// * `value` - Color intensity, 0.1-100.0 %
    pub fn color(
        duration: f64,
        transition: TransitionStyle,
        hue: u16,
        saturation: f32,
        value: f32,
    ) -> Result<Self, FrameError> {
        let duration = FrameField::Duration.check(duration)?;
        FrameField::Hue.check(f64::from(hue))?;
        FrameField::Saturation.check(f64::from(saturation))?;
        FrameField::Value.check(f64::from(value))?;

        Ok(Self {
            kind: FrameKind::Color,
            duration,
            transition,
            hue,
            saturation: tenths(saturation),
            value: tenths(value),
            white_intensity: 0,
            white_temperature: 0,
        })
    }

    /// Create a white light frame
    ///
    /// # Arguments
    /// * `duration` - Time to spend in the frame, 0.1-10.5 s
    /// * `transition` - How to move into the frame
    /// * `white_intensity` - White light intensity, 0.1-100.0 %
    /// * `white_temperature` - White light temperature, 0.0-100.0 %
    pub fn white(
        duration: f64,
        transition: TransitionStyle,
        white_intensity: f32,
        white_temperature: f32,
    ) -> Result<Self, FrameError> {
        let duration = FrameField::Duration.check(duration)?;
        FrameField::WhiteIntensity.check(f64::from(white_intensity))?;
        FrameField::WhiteTemperature.check(f64::from(white_temperature))?;

        Ok(Self {
            kind: FrameKind::White,
            duration,
            transition,
            hue: 0,
            saturation: 0,
            value: 0,
            white_intensity: tenths(white_intensity),
            white_temperature: tenths(white_temperature),
        })
    }

    /// Create a color frame from an 8-bit RGB color
    ///
    /// Black is rejected since its value is below the frame minimum.
    pub fn color_from_rgb(
        duration: f64,
        transition: TransitionStyle,
        color: Rgb,
    ) -> Result<Self, FrameError> {
        Self::color_from_hsv(duration, transition, BulbHsv::from(color))
    }

    /// Create a color frame from a bulb HSV color
    pub fn color_from_hsv(
        duration: f64,
        transition: TransitionStyle,
        color: BulbHsv,
    ) -> Result<Self, FrameError> {
        Self::color(duration, transition, color.hue, color.saturation, color.value)
    }

    pub const fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Time spent in the frame, seconds
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Time spent in the frame, rounded to milliseconds
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_time(&self) -> Duration {
        Duration::from_millis(libm::round(self.duration * 1000.0) as u64)
    }

    pub const fn transition(&self) -> TransitionStyle {
        self.transition
    }

    /// Hue, degrees
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Saturation, tenths of a percent
    pub const fn saturation(&self) -> u16 {
        self.saturation
    }

    /// Color intensity, tenths of a percent
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// White light intensity, tenths of a percent
    pub const fn white_intensity(&self) -> u16 {
        self.white_intensity
    }

    /// White light temperature, tenths of a percent
    pub const fn white_temperature(&self) -> u16 {
        self.white_temperature
    }

    /// Wire time code of the frame duration
    pub fn time_code(&self) -> u16 {
        self.transition.time_code(self.duration)
    }

    /// Pack the frame into its wire record
    pub fn to_bytes(&self) -> FrameBytes {
        RecordWriter::new()
            .put_u16(self.time_code())
            .put_u8(self.transition.to_raw())
            .put_u16(self.hue)
            .put_u16(self.saturation)
            .put_u16(self.value)
            .put_u16(self.white_intensity)
            .put_u16(self.white_temperature)
            .finish()
    }

    /// Get the wire record as lowercase hex
    pub fn get_data(&self) -> FrameHex {
        hex_string(&self.to_bytes())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.to_bytes())
    }
}
