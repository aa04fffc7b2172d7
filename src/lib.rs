//! Scene payload encoder for Tuya-style smart bulbs
//!
//! Builds the hex payload of a bulb "scene": up to eight timed frames, each
//! a color or white light state with a transition style. Sending the payload
//! to a device is left to the caller.
//!
//! ```
//! use myrtio_bulb_scene::{Frame, Scene, TransitionStyle};
//!
//! # fn main() -> Result<(), myrtio_bulb_scene::Error> {
//! let flash = TransitionStyle::Flash;
//! let scene = Scene::with_frames(0, [
//!     Frame::color(1.0, flash, 0, 50.0, 20.0)?,
//!     Frame::color(1.0, flash, 240, 50.0, 20.0)?,
//!     Frame::white(1.0, flash, 20.0, 20.0)?,
//! ])?;
//!
//! assert_eq!(scene.encode().len(), 2 + 3 * 26);
//! assert!(scene.encode().starts_with("005f5f01000001f400c800000000"));
//! # Ok(())
//! # }
//! ```
#![no_std]

pub mod bounds;
pub mod color;
pub mod error;
pub mod frame;
pub mod scene;
pub mod transition;
pub mod wire;

pub use bounds::{FieldBounds, FrameField};
pub use color::{BulbHsv, Hsv, Rgb};
pub use error::{CapacityExceeded, Error, FrameError};
pub use frame::{Frame, FrameKind};
pub use scene::Scene;
pub use transition::{TIME_UNITS_PER_SECOND, TransitionStyle};
pub use wire::{
    FRAME_HEX_LEN, FRAME_SIZE, FrameBytes, FrameHex, MAX_FRAMES, SCENE_HEX_MAX_LEN,
    SCENE_SIZE_MAX, SceneBytes, SceneHex,
};

pub use embassy_time::Duration;
