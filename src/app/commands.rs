//! Requests raised by scenes for the engine to carry out.
//!
//! Scenes never touch storage or the loop directly; they queue one of
//! these and the [`Engine`](super::service::Engine) acts on it at the end
//! of the tick.

/// Commands that scenes can send into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Persist the pet immediately.
    SaveGame,

    /// Save, then stop the main loop.
    PowerOff,
}
