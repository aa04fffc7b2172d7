use thiserror::Error;

use crate::bounds::FrameField;
use crate::frame::Frame;
use crate::wire::MAX_FRAMES;

/// Error returned when a frame can't be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    /// A field lies outside its inclusive range.
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: FrameField, value: f64 },
    /// Raw transition code is not a known style.
    #[error("unknown transition style: {0}")]
    UnknownTransition(u8),
}

/// Error returned when appending to a full scene.
///
/// Holds the rejected frame so the caller can keep it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("scene already holds {} frames", MAX_FRAMES)]
pub struct CapacityExceeded(pub Frame);

/// Any error produced while building a scene.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}
