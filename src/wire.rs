//! Wire layout of scene payloads
//!
//! A scene is sent as one id byte followed by up to [`MAX_FRAMES`] frame
//! records. Every record is [`FRAME_SIZE`] bytes of big-endian fields:
//!
//! | offset | size | field             |
//! |--------|------|-------------------|
//! | 0      | 2    | time code         |
//! | 2      | 1    | transition style  |
//! | 3      | 2    | hue               |
//! | 5      | 2    | saturation        |
//! | 7      | 2    | value             |
//! | 9      | 2    | white intensity   |
//! | 11     | 2    | white temperature |
//!
//! The device command layer takes the payload as lowercase hex.

use core::fmt::{self, Write};

use heapless::{String, Vec};

/// Maximum number of frames the bulb accepts in a single scene
pub const MAX_FRAMES: usize = 8;

/// Size of one encoded frame record in bytes
pub const FRAME_SIZE: usize = 13;

/// Length of one encoded frame record in hex digits
pub const FRAME_HEX_LEN: usize = FRAME_SIZE * 2;

/// Size of the largest scene payload in bytes
pub const SCENE_SIZE_MAX: usize = 1 + FRAME_SIZE * MAX_FRAMES;

/// Length of the largest scene payload in hex digits
pub const SCENE_HEX_MAX_LEN: usize = SCENE_SIZE_MAX * 2;

/// Raw frame record
pub type FrameBytes = [u8; FRAME_SIZE];

/// Frame record rendered as hex
pub type FrameHex = String<FRAME_HEX_LEN>;

/// Raw scene payload
pub type SceneBytes = Vec<u8, SCENE_SIZE_MAX>;

/// Scene payload rendered as hex
pub type SceneHex = String<SCENE_HEX_MAX_LEN>;

/// Write bytes as lowercase, zero-padded hex
pub fn write_hex<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(out, "{byte:02x}")?;
    }
    Ok(())
}

/// Render bytes into a fixed-capacity hex string
///
/// `N` must hold two digits per byte; size it from the constants above.
/// Debug builds panic on a short capacity, release builds keep the bytes
/// that fit.
pub fn hex_string<const N: usize>(bytes: &[u8]) -> String<N> {
    debug_assert!(
        bytes.len() * 2 <= N,
        "hex capacity {} is too small for {} bytes",
        N,
        bytes.len()
    );
    let mut out = String::new();
    let fitting = bytes.len().min(N / 2);
    // Two digits per byte always fit after the cut above
    let _ = write_hex(&mut out, &bytes[..fitting]);
    out
}

/// Sequential big-endian writer over a frame record
pub(crate) struct RecordWriter {
    buf: FrameBytes,
    pos: usize,
}

impl RecordWriter {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; FRAME_SIZE],
            pos: 0,
        }
    }

    pub(crate) fn put_u8(mut self, value: u8) -> Self {
        self.buf[self.pos] = value;
        self.pos += 1;
        self
    }

    pub(crate) fn put_u16(mut self, value: u16) -> Self {
        self.buf[self.pos..self.pos + 2].copy_from_slice(&value.to_be_bytes());
        self.pos += 2;
        self
    }

    pub(crate) fn finish(self) -> FrameBytes {
        debug_assert_eq!(self.pos, FRAME_SIZE, "frame record is incomplete");
        self.buf
    }
}
