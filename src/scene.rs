use core::fmt;

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::error::CapacityExceeded;
use crate::frame::Frame;
use crate::wire::{MAX_FRAMES, SceneBytes, SceneHex, hex_string, write_hex};

/// Ordered list of frames played back by the bulb
///
/// Holds at most [`MAX_FRAMES`] frames. Frame order is playback order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    id: u8,
    frames: Vec<Frame, MAX_FRAMES>,
}

impl Scene {
    /// Create an empty scene
    pub const fn new(id: u8) -> Self {
        Self {
            id,
            frames: Vec::new(),
        }
    }

    /// Create a scene from a batch of frames
    ///
    /// Frames are appended in order; a batch longer than [`MAX_FRAMES`]
    /// fails with the first frame that didn't fit.
    pub fn with_frames<I>(id: u8, frames: I) -> Result<Self, CapacityExceeded>
    where
        I: IntoIterator<Item = Frame>,
    {
        let mut scene = Self::new(id);
        for frame in frames {
            scene.append(frame)?;
        }
        Ok(scene)
    }

    /// Append a frame to the end of the scene
    ///
    /// Returns the frame back if the scene is full. The scene is left unchanged.
    pub fn append(&mut self, frame: Frame) -> Result<(), CapacityExceeded> {
        self.frames.push(frame).map_err(|rejected| {
            #[cfg(feature = "esp32-log")]
            println!("[Scene.append] scene {} is full, rejecting frame", self.id);
            CapacityExceeded(rejected)
        })
    }

    pub const fn id(&self) -> u8 {
        self.id
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.is_full()
    }

    /// Number of frames that can still be appended
    pub fn remaining(&self) -> usize {
        MAX_FRAMES - self.frames.len()
    }

    /// Time of one pass through the scene
    pub fn total_duration(&self) -> Duration {
        self.frames
            .iter()
            .fold(Duration::from_millis(0), |total, frame| {
                total + frame.duration_time()
            })
    }

    /// Pack the scene id and frame records into the wire payload
    pub fn to_bytes(&self) -> SceneBytes {
        let mut bytes = SceneBytes::new();
        // Payload capacity covers the id and MAX_FRAMES records
        let _ = bytes.push(self.id);
        for frame in &self.frames {
            let _ = bytes.extend_from_slice(&frame.to_bytes());
        }
        bytes
    }

    /// Encode the scene payload as lowercase hex
    ///
    /// The result is `2 + 26 * len()` digits long.
    pub fn encode(&self) -> SceneHex {
        hex_string(&self.to_bytes())
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &[self.id])?;
        for frame in &self.frames {
            write_hex(f, &frame.to_bytes())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
