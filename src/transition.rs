//! Transition styles and the frame time code
//!
//! The bulb does not take the raw frame duration. It expects a countdown
//! from a fixed reference time, in units of 1/2570 s. Flash transitions
//! count down from 10.5 s, every other style from 11.0 s.

use crate::error::FrameError;

/// Time code units per second of frame duration (`0x0A0A`)
pub const TIME_UNITS_PER_SECOND: u16 = 0x0A0A;

/// Reference time of flash transitions, seconds
pub const FLASH_TIME_BASE: f64 = 10.5;

/// Reference time of static and breathe transitions, seconds
pub const DEFAULT_TIME_BASE: f64 = 11.0;

const TRANSITION_ID_STATIC: u8 = 0;
const TRANSITION_ID_FLASH: u8 = 1;
const TRANSITION_ID_BREATHE: u8 = 2;

const TRANSITION_NAME_STATIC: &str = "static";
const TRANSITION_NAME_FLASH: &str = "flash";
const TRANSITION_NAME_BREATHE: &str = "breathe";

/// How the bulb moves into a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransitionStyle {
    /// Snap to the frame state
    #[default]
    Static = TRANSITION_ID_STATIC,
    Flash = TRANSITION_ID_FLASH,
    /// Fade into the frame state
    Breathe = TRANSITION_ID_BREATHE,
}

impl TransitionStyle {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            TRANSITION_ID_STATIC => Self::Static,
            TRANSITION_ID_FLASH => Self::Flash,
            TRANSITION_ID_BREATHE => Self::Breathe,
            _ => return None,
        })
    }

    /// Wire code of the style
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => TRANSITION_NAME_STATIC,
            Self::Flash => TRANSITION_NAME_FLASH,
            Self::Breathe => TRANSITION_NAME_BREATHE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            TRANSITION_NAME_STATIC => Some(Self::Static),
            TRANSITION_NAME_FLASH => Some(Self::Flash),
            TRANSITION_NAME_BREATHE => Some(Self::Breathe),
            _ => None,
        }
    }

    /// Reference time the frame duration is subtracted from, seconds
    pub const fn time_base(self) -> f64 {
        match self {
            Self::Flash => FLASH_TIME_BASE,
            Self::Static | Self::Breathe => DEFAULT_TIME_BASE,
        }
    }

    /// Encode a frame duration as the wire time code
    ///
    /// `duration` must already be validated; the result is rounded to the
    /// nearest unit so whole tenths of a second map to `n * 0x0101`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn time_code(self, duration: f64) -> u16 {
        let remaining = self.time_base() - duration;
        libm::round(remaining * f64::from(TIME_UNITS_PER_SECOND)) as u16
    }
}

impl TryFrom<u8> for TransitionStyle {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(FrameError::UnknownTransition(value))
    }
}

impl From<TransitionStyle> for u8 {
    fn from(style: TransitionStyle) -> Self {
        style.to_raw()
    }
}
