//! Errors reported by the drawing layer.
//!
//! Input errors are detected before the first byte goes out, so a rejected
//! call never leaves the controller with a half-written addressing window.

use core::fmt;

use crate::window::Window;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// Reversed bounds, or a window hanging off the panel.
    InvalidRectangle(Window),
    /// A selector (circle position, ring kind) outside its range.
    InvalidIndex(u8),
    /// A blit would have written a different number of bytes than the
    /// addressing window holds.
    LengthMismatch { expected: usize, actual: usize },
    /// The transport failed; the rest of the blit was abandoned.
    Transport(E),
}

/// A numeric selector that names no variant. Carries the rejected value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutOfRange(pub u8);

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRectangle(window) => write!(f, "invalid rectangle: {window}"),
            Error::InvalidIndex(index) => write!(f, "index {index} out of range"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "window holds {expected} bytes, blit supplied {actual}")
            }
            Error::Transport(e) => write!(f, "transport error: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
