use thiserror::Error;

/// An error raised when a value cannot be written in its canonical escaped form.
///
/// Escaping operates on Unicode scalar values. Inputs that are not made of scalar values (e.g.,
/// UTF-16 with a lone surrogate) are rejected instead of being silently replaced.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A high surrogate without a following low surrogate, or a low surrogate on its own.
    #[error("unpaired UTF-16 surrogate 0x{0:04X}")]
    UnpairedSurrogate(u16),
    /// A code point above `0x10FFFF` or inside the surrogate range.
    #[error("code point 0x{0:X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),
}
