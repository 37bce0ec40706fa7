//! Unified error types for the PocketPet engine.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! main loop's error handling uniform.  All variants are `Copy` so they
//! can be passed through the navigator and engine without allocation.
//!
//! Only [`Error::StackUnderflow`] is allowed to escape a tick.  The other
//! variants are absorbed where they originate: rejected actions are
//! logged and ignored, malformed saves fall back to a fresh pet.

use core::fmt;

use crate::character::NeedKind;
use crate::character::actions::ActionKind;

// ---------------------------------------------------------------------------
// Top-level engine error
// ---------------------------------------------------------------------------

/// Every fallible operation in the engine funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An action is not applicable to the pet's current state.
    InvalidAction(ActionError),
    /// Persisted save data could not be decoded.
    MalformedSaveData(SaveError),
    /// Pop attempted on a stack holding only the root scene.
    StackUnderflow,
    /// Configuration is invalid.
    Config(&'static str),
    /// The save store failed.
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction(e) => write!(f, "invalid action: {e}"),
            Self::MalformedSaveData(e) => write!(f, "malformed save data: {e}"),
            Self::StackUnderflow => write!(f, "scene stack underflow"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Action errors
// ---------------------------------------------------------------------------

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionError {
    pub action: ActionKind,
    pub reason: ActionRefusal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRefusal {
    /// A need is below the level the action requires.
    NeedTooLow { need: NeedKind, required: u8 },
    /// A need is already above the ceiling past which the action is pointless.
    NeedTooHigh { need: NeedKind, ceiling: u8 },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ActionRefusal::NeedTooLow { need, required } => {
                write!(f, "{:?} needs {:?} >= {}", self.action, need, required)
            }
            ActionRefusal::NeedTooHigh { need, ceiling } => {
                write!(f, "{:?} refused, {:?} above {}", self.action, need, ceiling)
            }
        }
    }
}

impl From<ActionError> for Error {
    fn from(e: ActionError) -> Self {
        Self::InvalidAction(e)
    }
}

// ---------------------------------------------------------------------------
// Save data errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    /// No save record was present.
    Missing,
    /// The record does not start with the expected magic bytes.
    BadMagic,
    /// The record was written by an incompatible format version.
    UnsupportedVersion(u8),
    /// The byte stream could not be decoded.
    Decode,
    /// Bytes remained after the record.
    TrailingBytes,
    /// A decoded field is outside its legal range.
    OutOfRange,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no save present"),
            Self::BadMagic => write!(f, "bad magic"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported version {v}"),
            Self::Decode => write!(f, "decode failed"),
            Self::TrailingBytes => write!(f, "trailing bytes"),
            Self::OutOfRange => write!(f, "field out of range"),
        }
    }
}

impl From<SaveError> for Error {
    fn from(e: SaveError) -> Self {
        Self::MalformedSaveData(e)
    }
}

// ---------------------------------------------------------------------------
// Storage errors
// ---------------------------------------------------------------------------

/// Errors from [`SavePort`](crate::app::ports::SavePort) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Storage partition or disk is full.
    Full,
    /// Generic I/O error.
    IoError,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Engine-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_human_readable() {
        let e = Error::from(ActionError {
            action: ActionKind::Play,
            reason: ActionRefusal::NeedTooLow {
                need: NeedKind::Energy,
                required: 10,
            },
        });
        assert_eq!(e.to_string(), "invalid action: Play needs Energy >= 10");
        assert_eq!(
            Error::from(SaveError::UnsupportedVersion(9)).to_string(),
            "malformed save data: unsupported version 9"
        );
        assert_eq!(Error::StackUnderflow.to_string(), "scene stack underflow");
    }
}
